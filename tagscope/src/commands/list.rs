//! `list`: every digest of a repository with its tags.

use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libtagscope::TagListResponse;
use libtagscope::format::{format_optional_timestamp, format_size, short_digest};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::info;

/// One manifest record for table output.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ManifestRow {
    #[tabled(rename = "DIGEST")]
    pub digest: String,

    #[tabled(rename = "TAGS")]
    pub tags: String,

    #[tabled(rename = "SIZE")]
    pub size: String,

    #[tabled(rename = "MEDIA TYPE")]
    pub media_type: String,

    #[tabled(rename = "CREATED")]
    pub created: String,

    /// Raw timestamp for sorting (not displayed)
    #[tabled(skip)]
    pub created_ms: i64,
}

/// Whole tag list document; serialized as-is for JSON and YAML.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RepositoryListing {
    #[serde(skip)]
    full_digests: bool,
    response: TagListResponse,
}

impl RepositoryListing {
    pub fn new(response: TagListResponse, full_digests: bool) -> Self {
        Self {
            full_digests,
            response,
        }
    }

    /// Rows newest first; records without a creation time go last.
    pub fn rows(&self) -> Vec<ManifestRow> {
        let mut rows: Vec<ManifestRow> = self
            .response
            .manifest
            .iter()
            .map(|(digest, record)| ManifestRow {
                digest: if self.full_digests {
                    digest.clone()
                } else {
                    short_digest(digest)
                },
                tags: if record.tag.is_empty() {
                    "-".to_string()
                } else {
                    record.tag.join(", ")
                },
                size: format_size(record.image_size_bytes),
                media_type: if record.media_type.is_empty() {
                    "-".to_string()
                } else {
                    record.media_type.clone()
                },
                created: format_optional_timestamp(record.created_at()),
                created_ms: record.time_created_ms,
            })
            .collect();

        rows.sort_by(|a, b| b.created_ms.cmp(&a.created_ms));
        rows
    }
}

impl Formattable for RepositoryListing {
    fn format_pretty(&self) -> String {
        let name = &self.response.name;

        if self.response.manifest.is_empty() {
            if self.response.tags.is_empty() {
                return format!("No tags found for repository '{}'.", name);
            }
            // Plain registries list tags without per-digest records.
            let mut lines = vec![format!(
                "Registry lists no manifest records for '{}'. Tags:",
                name
            )];
            lines.extend(self.response.tags.iter().map(|t| format!("  {}", t)));
            return lines.join("\n");
        }

        Table::new(self.rows()).with(Style::empty()).to_string()
    }
}

/// Handle the list command
///
/// With `no_trunc` the table shows full digests instead of shortened ones.
pub async fn handle_list(
    ctx: &AppContext,
    repository: &str,
    fmt: OutputFormat,
    no_trunc: bool,
) -> Result<String, String> {
    info!(repository, registry = %ctx.config.registry.url, "listing repository");

    let resolver = ctx.resolver().map_err(|e| e.to_string())?;
    let mut response = resolver
        .fetch_tag_list(repository)
        .await
        .map_err(|e| format!("Failed to list {}: {}", repository, e))?;

    if response.name.is_empty() {
        response.name = repository.to_string();
    }

    let listing = RepositoryListing::new(response, no_trunc);
    format::format_output(&listing, fmt)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
