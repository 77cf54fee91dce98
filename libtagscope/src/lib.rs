//! tagscope - Registry Tag Resolver Library
//!
//! tagscope answers one question against a Docker Registry v2 compatible
//! API: which tags currently point at this digest?
//!
//! # Quick Start
//!
//! ```no_run
//! use libtagscope::{Client, Registry, TagResolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = Registry::new("https://gcr.io")?;
//!     let resolver = TagResolver::new(registry, Client::new()?);
//!
//!     let tags = resolver
//!         .resolve_tags(
//!             "google-containers/pause",
//!             "sha256:7173b809ca12ec5dee4506cd86be934c4596dd234ee82c0662eac04a8c2c71dc",
//!         )
//!         .await?;
//!     for tag in tags {
//!         println!("{}", tag);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`TagResolver`] - Resolves digests to tags
//! - [`Registry`] - Registry base URL and endpoint construction
//! - [`Client`] - reqwest-backed [`Transport`]
//! - [`TagListResponse`] / [`ManifestRecord`] - The tag list document
//! - [`Config`] - Layered configuration
//! - [`TagscopeError`] - Error type for every operation

#![warn(clippy::all)]

/// Returns the libtagscope crate version.
///
/// # Examples
///
/// ```
/// let version = libtagscope::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub use client::{Client, ClientConfig, HttpResponse, Transport};
pub use config::Config;
pub use error::{Result, TagscopeError};
pub use manifest::{ManifestRecord, TagListResponse};
pub use registry::Registry;
pub use resolver::TagResolver;

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod manifest;
pub mod registry;
pub mod resolver;
