//! Registry addressing.
//!
//! A [`Registry`] holds the normalized base URL of a Docker Registry v2
//! compatible server and builds endpoint URLs against it. It performs no
//! I/O; requests go through a [`Transport`](crate::client::Transport).

use crate::error::{Result, TagscopeError};
use url::Url;

#[cfg(test)]
mod tests;

/// Base URL of a registry, validated and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    /// Normalized base URL without trailing slash (e.g., "https://gcr.io")
    base_url: String,
}

impl Registry {
    /// Creates a registry handle for the given base URL.
    ///
    /// A missing scheme defaults to `http://` and trailing slashes are
    /// removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::registry::Registry;
    ///
    /// let registry = Registry::new("localhost:5000/").unwrap();
    /// assert_eq!(registry.base_url(), "http://localhost:5000");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a request construction error if the URL is empty or cannot be
    /// parsed.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Self::normalize_url(base_url)?;

        let parsed = Url::parse(&base_url).map_err(|e| {
            TagscopeError::request_construction_with_source(
                format!("Invalid registry URL '{}'", base_url),
                e,
            )
        })?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(TagscopeError::request_construction(format!(
                "Registry URL '{}' has no host",
                base_url
            )));
        }

        Ok(Self { base_url })
    }

    /// Normalizes a registry URL by ensuring it has a scheme and removing trailing slashes.
    fn normalize_url(url: &str) -> Result<String> {
        let url = url.trim();

        if url.is_empty() {
            return Err(TagscopeError::request_construction(
                "Registry URL cannot be empty",
            ));
        }

        let url = if !url.starts_with("http://") && !url.starts_with("https://") {
            format!("http://{}", url)
        } else {
            url.to_string()
        };

        Ok(url.trim_end_matches('/').to_string())
    }

    /// Returns the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the `/v2/<repository>/tags/list` endpoint URL.
    ///
    /// The repository is passed through as-is apart from surrounding
    /// slashes; the registry is authoritative on which names exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::registry::Registry;
    ///
    /// let registry = Registry::new("https://gcr.io").unwrap();
    /// let url = registry.tags_list_url("google-containers/pause").unwrap();
    /// assert_eq!(url.as_str(), "https://gcr.io/v2/google-containers/pause/tags/list");
    /// ```
    pub fn tags_list_url(&self, repository: &str) -> Result<Url> {
        let repository = repository.trim().trim_matches('/');
        if repository.is_empty() {
            return Err(TagscopeError::request_construction(
                "Repository name cannot be empty",
            ));
        }
        // These would turn part of the name into a query or fragment.
        if repository.contains(['?', '#']) {
            return Err(TagscopeError::request_construction(format!(
                "Repository name '{}' contains '?' or '#'",
                repository
            )));
        }

        let url = format!("{}/v2/{}/tags/list", self.base_url, repository);
        Url::parse(&url).map_err(|e| {
            TagscopeError::request_construction_with_source(
                format!("Invalid tag list URL '{}'", url),
                e,
            )
        })
    }
}
