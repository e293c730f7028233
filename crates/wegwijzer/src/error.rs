//! Typed errors for table construction and pagination preconditions
//!
//! Route-table problems are configuration errors and fail fast at
//! construction. Pagination precondition violations are programmer errors
//! surfaced as explicit invalid-argument values rather than partial output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or loading a route table
#[derive(Debug, Error)]
pub enum TableError {
    /// No route defines the root pattern `/`
    #[error("route table has no root (\"/\") route")]
    MissingRoot,

    /// More than one route defines the root pattern `/`
    #[error("route table defines more than one root (\"/\") route")]
    DuplicateRoot,

    /// Pattern does not start with `/`
    #[error("route pattern `{pattern}` must start with '/'")]
    MissingLeadingSlash { pattern: String },

    /// Pattern has an empty segment or a trailing slash
    #[error("route pattern `{pattern}` is not in canonical form")]
    MalformedPattern { pattern: String },

    /// Pattern contains a `:` parameter with no name
    #[error("route pattern `{pattern}` contains a parameter with no name")]
    UnnamedParam { pattern: String },

    /// Route-table file could not be read
    #[error("failed to read route table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Route-table file is not valid TOML
    #[error("failed to parse route table: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Precondition violations for the pagination range builder
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    /// `items_per_page` was zero
    #[error("items_per_page must be positive")]
    ZeroPageSize,

    /// `current_page` fell outside `1..=page_count`
    #[error("current_page {current_page} is out of range 1..={page_count}")]
    PageOutOfRange { current_page: u64, page_count: u64 },
}
