//! Error types for `urbanhouse-core`.
//!
//! Fallible operations (loading listings and configuration) return
//! [`CoreResult<T>`], an alias for `Result<T, CoreError>`. The search and
//! carousel engines themselves are total and never fail.

use std::path::PathBuf;

/// Unified error type for all core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to read the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The listings document is not valid JSON or does not match the schema.
    #[error("listing parse error: {0}")]
    ListingParse(String),

    /// Two listings share the same id.
    #[error("duplicate listing id: {0}")]
    DuplicateId(u32),

    /// The featured list names an id that has no listing.
    #[error("featured id has no listing: {0}")]
    UnknownFeatured(u32),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error raised while reading `path` to the closest variant.
    pub(crate) fn from_read(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `urbanhouse-core`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/data/properties.json"));
        assert_eq!(err.to_string(), "path not found: /data/properties.json");
    }

    #[test]
    fn duplicate_id_displays_id() {
        let err = CoreError::DuplicateId(7);
        assert_eq!(err.to_string(), "duplicate listing id: 7");
    }

    #[test]
    fn unknown_featured_displays_id() {
        let err = CoreError::UnknownFeatured(42);
        assert_eq!(err.to_string(), "featured id has no listing: 42");
    }

    #[test]
    fn listing_parse_displays_message() {
        let err = CoreError::ListingParse("missing field `id`".to_string());
        assert_eq!(err.to_string(), "listing parse error: missing field `id`");
    }

    #[test]
    fn from_read_maps_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CoreError::from_read(io_err, Path::new("/missing"));
        assert!(matches!(err, CoreError::NotFound(p) if p == Path::new("/missing")));
    }

    #[test]
    fn from_read_maps_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = CoreError::from_read(io_err, Path::new("/secret"));
        assert!(matches!(err, CoreError::PermissionDenied(_)));
    }

    #[test]
    fn from_read_keeps_other_io_errors() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = CoreError::from_read(io_err, Path::new("/x"));
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().contains("disk on fire"));
    }
}
