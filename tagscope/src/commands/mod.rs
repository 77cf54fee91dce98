/// Repository listing handler
pub mod list;

/// Digest resolution handlers (`tags`, `show`)
pub mod tags;

/// Version command handlers
pub mod version;
