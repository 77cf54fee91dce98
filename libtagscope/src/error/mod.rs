//! Error types for tagscope
//!
//! Every failure a resolution can hit is surfaced as a [`TagscopeError`]
//! value. Nothing in the library terminates the process on bad registry
//! input; the caller decides whether to retry, fall back or abort.

use thiserror::Error;


/// Main error type for tagscope operations
#[derive(Error, Debug)]
pub enum TagscopeError {
    /// The request could not be built (bad base URL, empty repository)
    #[error("Request construction error: {message}")]
    RequestConstruction {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The network exchange did not complete (connection, timeout, TLS)
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The registry answered with a non-success status
    #[error(
        "{}Registry returned HTTP {} for {}: {}",
        context_prefix(.context),
        .status_code,
        .url,
        .message
    )]
    Status {
        message: String,
        status_code: u16,
        url: String,
        /// What was being attempted, outermost first
        context: Option<String>,
    },

    /// The response body is not a valid tag list document
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (invalid config file, bad environment override)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for tagscope operations
pub type Result<T> = std::result::Result<T, TagscopeError>;

impl TagscopeError {
    /// Creates a new request construction error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::error::TagscopeError;
    ///
    /// let err = TagscopeError::request_construction("repository cannot be empty");
    /// assert!(matches!(err, TagscopeError::RequestConstruction { .. }));
    /// ```
    pub fn request_construction<S: Into<String>>(message: S) -> Self {
        Self::RequestConstruction {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new request construction error with a source error.
    pub fn request_construction_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RequestConstruction {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new transport error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::error::TagscopeError;
    ///
    /// let err = TagscopeError::transport("connection refused");
    /// assert!(matches!(err, TagscopeError::Transport { .. }));
    /// ```
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new transport error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::error::TagscopeError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
    /// let err = TagscopeError::transport_with_source("failed to connect", io_err);
    /// assert!(matches!(err, TagscopeError::Transport { .. }));
    /// ```
    pub fn transport_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new status error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::error::TagscopeError;
    ///
    /// let err = TagscopeError::status("repository name not known", 404, "http://localhost:5000/v2/x/tags/list");
    /// assert!(matches!(err, TagscopeError::Status { status_code: 404, .. }));
    /// ```
    pub fn status<S, U>(message: S, status_code: u16, url: U) -> Self
    where
        S: Into<String>,
        U: Into<String>,
    {
        Self::Status {
            message: message.into(),
            status_code,
            url: url.into(),
            context: None,
        }
    }

    /// Creates a new decode error.
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new decode error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::error::TagscopeError;
    ///
    /// let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    /// let err = TagscopeError::decode_with_source("invalid tag list", json_err);
    /// assert!(matches!(err, TagscopeError::Decode { .. }));
    /// ```
    pub fn decode_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::error::TagscopeError;
    ///
    /// let err = TagscopeError::config("invalid config file", Some("/path/to/config.yaml"));
    /// assert!(matches!(err, TagscopeError::Config { .. }));
    /// ```
    pub fn config<M, P>(message: M, path: Option<P>) -> Self
    where
        M: Into<String>,
        P: Into<String>,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<M, P, E>(message: M, path: Option<P>, source: E) -> Self
    where
        M: Into<String>,
        P: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Prefixes the error message with what was being attempted.
    ///
    /// The variant, status code and source are kept as they are. Status
    /// errors keep the context apart so it leads the rendered message.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::error::TagscopeError;
    ///
    /// let err = TagscopeError::transport("connection refused")
    ///     .with_context("resolving library/alpine@sha256:aaa");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Transport error: resolving library/alpine@sha256:aaa: connection refused"
    /// );
    /// ```
    pub fn with_context<C: AsRef<str>>(mut self, context: C) -> Self {
        let context = context.as_ref();
        match &mut self {
            Self::Status {
                context: existing, ..
            } => {
                *existing = Some(match existing.take() {
                    Some(inner) => format!("{}: {}", context, inner),
                    None => context.to_string(),
                });
            }
            Self::RequestConstruction { message, .. }
            | Self::Transport { message, .. }
            | Self::Decode { message, .. }
            | Self::Config { message, .. } => {
                *message = format!("{}: {}", context, message);
            }
        }
        self
    }

    /// Returns the HTTP status code when the registry rejected the request.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

fn context_prefix(context: &Option<String>) -> String {
    context
        .as_deref()
        .map(|c| format!("{}: ", c))
        .unwrap_or_default()
}
