//! Digest to tag resolution.
//!
//! [`TagResolver`] fetches a repository's tag list document and answers
//! which tags point at a given digest. Each call performs exactly one GET;
//! there is no retry, caching or pagination.

use crate::client::{Client, HttpResponse, Transport};
use crate::error::{Result, TagscopeError};
use crate::manifest::{ManifestRecord, TagListResponse};
use crate::registry::Registry;
use tracing::{debug, warn};


/// Longest slice of an error body carried into a status error.
const MAX_ERROR_BODY_CHARS: usize = 256;

/// Resolves digests to tags against one registry.
///
/// The transport is injected so callers can bound latency with their own
/// client configuration, or substitute it entirely in tests. The resolver
/// holds no mutable state; share it by reference across tasks.
///
/// # Examples
///
/// ```no_run
/// use libtagscope::{Client, Registry, TagResolver};
///
/// # async fn example() -> libtagscope::Result<()> {
/// let registry = Registry::new("https://gcr.io")?;
/// let resolver = TagResolver::new(registry, Client::new()?);
///
/// let tags = resolver
///     .resolve_tags("google-containers/pause", "sha256:3d2b...")
///     .await?;
/// for tag in tags {
///     println!("{}", tag);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TagResolver<T = Client> {
    registry: Registry,
    transport: T,
}

impl<T: Transport> TagResolver<T> {
    /// Creates a resolver for `registry` that sends requests through `transport`.
    pub fn new(registry: Registry, transport: T) -> Self {
        Self {
            registry,
            transport,
        }
    }

    /// Returns the registry this resolver queries.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the tags the registry associates with `digest` in `repository`.
    ///
    /// Tags come back in server order, without deduplication. A digest the
    /// registry does not list yields an empty vector rather than an error;
    /// use [`TagResolver::lookup`] to tell that case apart from a digest
    /// with no tags.
    ///
    /// # Errors
    ///
    /// - `RequestConstruction` if the endpoint URL cannot be built
    /// - `Transport` if the exchange does not complete
    /// - `Status` if the registry answers with a non-success status
    /// - `Decode` if the body is not a valid tag list document
    pub async fn resolve_tags(&self, repository: &str, digest: &str) -> Result<Vec<String>> {
        let tag_list = self
            .fetch_tag_list(repository)
            .await
            .map_err(|e| e.with_context(format!("resolving {}@{}", repository, digest)))?;

        let tags = tag_list.tags_for(digest).to_vec();
        if tags.is_empty() && tag_list.record(digest).is_none() {
            debug!(repository, digest, "digest not listed in manifest mapping");
        } else {
            debug!(repository, digest, count = tags.len(), "resolved tags");
        }

        Ok(tags)
    }

    /// Returns the full manifest record for `digest`, or `None` when the
    /// registry does not list it.
    pub async fn lookup(&self, repository: &str, digest: &str) -> Result<Option<ManifestRecord>> {
        let mut tag_list = self
            .fetch_tag_list(repository)
            .await
            .map_err(|e| e.with_context(format!("looking up {}@{}", repository, digest)))?;

        Ok(tag_list.manifest.remove(digest))
    }

    /// Fetches and decodes the tag list document for `repository`.
    pub async fn fetch_tag_list(&self, repository: &str) -> Result<TagListResponse> {
        let url = self.registry.tags_list_url(repository)?;

        let response = self.transport.get(&url).await?;
        let response = Self::check_response_status(response)?;

        TagListResponse::from_slice(&response.body)
            .map_err(|e| e.with_context(format!("decoding response from {}", response.url)))
    }

    /// Rejects non-success responses so an error body never decodes into an
    /// empty tag list.
    fn check_response_status(response: HttpResponse) -> Result<HttpResponse> {
        if response.is_success() {
            return Ok(response);
        }

        warn!(status = response.status, url = %response.url, "registry rejected tag list request");

        let body = String::from_utf8_lossy(&response.body);
        let body = body.trim();
        let message = if body.is_empty() {
            "(empty response body)".to_string()
        } else if body.chars().count() > MAX_ERROR_BODY_CHARS {
            let truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            format!("{}...", truncated)
        } else {
            body.to_string()
        };

        Err(TagscopeError::status(message, response.status, response.url))
    }
}
