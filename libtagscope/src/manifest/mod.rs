//! Tag list document returned by `/v2/<name>/tags/list`.
//!
//! Besides the flat `tags` list of the distribution API, some registries
//! (GCR, Artifact Registry and compatible mirrors) include a `manifest`
//! mapping from digest to a record that names the tags pointing at it.
//! This module models that document and the lookups done against it.

use crate::error::{Result, TagscopeError};
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;


/// Registry response to `GET /v2/<name>/tags/list`.
///
/// Every field is optional on the wire; missing and `null` fields decode to
/// empty values. Distribution answers `"tags": null` once every tag of a
/// repository has been deleted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TagListResponse {
    /// Nested repository paths.
    #[serde(deserialize_with = "null_as_default")]
    pub child: Vec<String>,
    /// Per-digest manifest records, keyed by `"<algo>:<hex>"`.
    #[serde(deserialize_with = "null_as_default")]
    pub manifest: BTreeMap<String, ManifestRecord>,
    /// Repository name as echoed by the server.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// All tags known for the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Registry metadata for one digest within a repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ManifestRecord {
    #[serde(deserialize_with = "int_or_string")]
    pub image_size_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub layer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub media_type: String,
    /// Tags currently pointing at this digest, in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub tag: Vec<String>,
    #[serde(deserialize_with = "int_or_string")]
    pub time_created_ms: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub time_uploaded_ms: i64,
}

impl TagListResponse {
    /// Decodes a tag list document from a JSON body.
    ///
    /// Decoding is strict JSON: an empty or blank body, a non-object
    /// document, or trailing garbage are all errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::manifest::TagListResponse;
    ///
    /// let body = br#"{"manifest":{"sha256:aaa":{"tag":["v1","v2"]}},"tags":["v1","v2","latest"]}"#;
    /// let response = TagListResponse::from_slice(body).unwrap();
    /// assert_eq!(response.tags_for("sha256:aaa"), ["v1", "v2"]);
    /// assert!(response.tags_for("sha256:zzz").is_empty());
    /// ```
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|e| TagscopeError::decode_with_source(format!("Invalid tag list: {}", e), e))
    }

    /// Returns the tags recorded for `digest`, or an empty slice if the
    /// digest has no entry.
    pub fn tags_for(&self, digest: &str) -> &[String] {
        self.manifest
            .get(digest)
            .map(|record| record.tag.as_slice())
            .unwrap_or_default()
    }

    /// Returns the manifest record for `digest`, if the registry listed one.
    pub fn record(&self, digest: &str) -> Option<&ManifestRecord> {
        self.manifest.get(digest)
    }
}

impl ManifestRecord {
    /// Creation time, or `None` when the registry left it unset.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        from_epoch_ms(self.time_created_ms)
    }

    /// Upload time, or `None` when the registry left it unset.
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        from_epoch_ms(self.time_uploaded_ms)
    }
}

fn from_epoch_ms(ms: i64) -> Option<DateTime<Utc>> {
    if ms == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(ms)
}

/// Decodes `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accepts a JSON integer, a decimal string such as `"2801778"`, or `null`
/// for zero.
fn int_or_string<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + FromStr + Deserialize<'de>,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString<T> {
        Int(T),
        Str(String),
    }

    match Option::<IntOrString<T>>::deserialize(deserializer)? {
        None => Ok(T::default()),
        Some(IntOrString::Int(value)) => Ok(value),
        Some(IntOrString::Str(s)) => s.trim().parse().map_err(de::Error::custom),
    }
}
