//! `tags` and `show`: what the registry knows about one digest.

use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libtagscope::ManifestRecord;
use libtagscope::format::{format_optional_timestamp, format_size};
use serde::Serialize;
use tracing::info;

/// Tags pointing at a digest
#[derive(Debug, Serialize)]
pub struct DigestTags {
    pub repository: String,
    pub digest: String,
    pub tags: Vec<String>,
}

impl Formattable for DigestTags {
    fn format_pretty(&self) -> String {
        if self.tags.is_empty() {
            return format!("No tags point at {} in {}.", self.digest, self.repository);
        }
        self.tags.join("\n")
    }
}

/// Manifest record of a digest, flattened for output
#[derive(Debug, Serialize)]
pub struct ManifestDetails {
    pub repository: String,
    pub digest: String,
    #[serde(flatten)]
    pub record: ManifestRecord,
}

impl Formattable for ManifestDetails {
    fn format_pretty(&self) -> String {
        let tags = if self.record.tag.is_empty() {
            "-".to_string()
        } else {
            self.record.tag.join(", ")
        };
        let media_type = if self.record.media_type.is_empty() {
            "-"
        } else {
            self.record.media_type.as_str()
        };

        let mut lines = vec![
            format!("Repository: {}", self.repository),
            format!("Digest:     {}", self.digest),
            format!("Tags:       {}", tags),
            format!("Size:       {}", format_size(self.record.image_size_bytes)),
            format!("Media type: {}", media_type),
            format!(
                "Created:    {}",
                format_optional_timestamp(self.record.created_at())
            ),
            format!(
                "Uploaded:   {}",
                format_optional_timestamp(self.record.uploaded_at())
            ),
        ];
        if !self.record.layer_id.is_empty() {
            lines.push(format!("Layer ID:   {}", self.record.layer_id));
        }
        lines.join("\n")
    }
}

/// Handle the tags command
///
/// Returns the rendered output. In quiet mode only tag names are printed,
/// one per line, and an unknown digest prints nothing.
pub async fn handle_tags(
    ctx: &AppContext,
    repository: &str,
    digest: &str,
    fmt: OutputFormat,
    quiet: bool,
) -> Result<String, String> {
    info!(repository, digest, registry = %ctx.config.registry.url, "resolving tags");

    let resolver = ctx.resolver().map_err(|e| e.to_string())?;
    let tags = resolver
        .resolve_tags(repository, digest)
        .await
        .map_err(|e| format!("Failed to resolve tags: {}", e))?;

    if quiet {
        return Ok(tags.join("\n"));
    }

    let result = DigestTags {
        repository: repository.to_string(),
        digest: digest.to_string(),
        tags,
    };
    format::format_output(&result, fmt)
}

/// Handle the show command
pub async fn handle_show(
    ctx: &AppContext,
    repository: &str,
    digest: &str,
    fmt: OutputFormat,
) -> Result<String, String> {
    info!(repository, digest, registry = %ctx.config.registry.url, "looking up digest");

    let resolver = ctx.resolver().map_err(|e| e.to_string())?;
    let record = resolver
        .lookup(repository, digest)
        .await
        .map_err(|e| format!("Failed to look up digest: {}", e))?
        .ok_or_else(|| format!("Digest {} not found in {}", digest, repository))?;

    let details = ManifestDetails {
        repository: repository.to_string(),
        digest: digest.to_string(),
        record,
    };
    format::format_output(&details, fmt)
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
