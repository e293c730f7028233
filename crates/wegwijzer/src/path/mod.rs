/// Path utilities for validation and normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
use std::borrow::Cow;

pub mod prefixes;
pub use prefixes::PathPrefixes;

/// Validates if a path is in canonical form
///
/// **Pure function**: No side effects, deterministic output.
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use wegwijzer::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/themas"));
/// assert!(is_valid_path("/themas/vervoer"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("themas")); // Missing leading /
/// assert!(!is_valid_path("/themas/")); // Trailing /
/// assert!(!is_valid_path("/themas//vervoer")); // Double //
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") {
        return false;
    }

    // Root is always valid; anything else must not end with /
    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// **Pure function** with zero-copy optimization using `Cow<'_, str>`.
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
/// Returns `Cow::Owned` when normalization needed (single allocation).
///
/// The breadcrumb resolver expects callers to normalize before resolving;
/// an unnormalized trailing slash would otherwise surface as a final
/// empty-segment breadcrumb.
///
/// # Examples
///
/// ```
/// use wegwijzer::path::normalize_path;
/// use std::borrow::Cow;
///
/// // Valid paths: zero allocations (Cow::Borrowed)
/// let path = normalize_path("/themas");
/// assert!(matches!(path, Cow::Borrowed("/themas")));
///
/// // Trailing slash stripped
/// assert_eq!(normalize_path("/themas/"), "/themas");
///
/// // Empty segments collapsed
/// assert_eq!(normalize_path("/themas//vervoer"), "/themas/vervoer");
///
/// // Empty input becomes root
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    // Fast path: already canonical, return borrowed (zero-copy)
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}
