/// Pattern parsing for route segments
///
/// Pure functional parsing of `:param` route patterns into typed segments.
/// All functions are **pure**: same input → same output, no side effects.
/// The breadcrumb resolver matches on these typed segments rather than on
/// string tricks, which keeps the tie-break rules auditable.

/// Represents the two kinds of route pattern segments
///
/// Functional sum type for pattern matching route segments.
///
/// # Examples
///
/// ```
/// use wegwijzer::route::pattern::{classify_segment, PatternSegment};
///
/// // Static segment
/// let seg = classify_segment("themas");
/// assert!(matches!(seg, PatternSegment::Static(_)));
///
/// // Named parameter
/// let seg = classify_segment(":slug");
/// assert!(matches!(seg, PatternSegment::Param(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Static text segment that must match verbatim
    Static(String),
    /// Named parameter segment: `:slug` matches any single non-slash token
    Param(String),
}

impl PatternSegment {
    /// Checks whether this segment accepts the given path token
    ///
    /// Parameters accept any token; static segments require verbatim
    /// equality.
    pub fn accepts(&self, token: &str) -> bool {
        match self {
            PatternSegment::Static(text) => text == token,
            PatternSegment::Param(_) => true,
        }
    }
}

/// Classifies a single pattern segment (pure function)
///
/// Maps string segment → `PatternSegment`. A leading `:` marks a named
/// parameter; everything else is static text.
///
/// # Examples
///
/// ```
/// use wegwijzer::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(
///     classify_segment("themas"),
///     PatternSegment::Static("themas".to_string())
/// );
/// assert_eq!(
///     classify_segment(":slug"),
///     PatternSegment::Param("slug".to_string())
/// );
/// ```
pub fn classify_segment(segment: &str) -> PatternSegment {
    match segment.strip_prefix(':') {
        Some(name) => PatternSegment::Param(name.to_string()),
        None => PatternSegment::Static(segment.to_string()),
    }
}

/// Parses a route pattern into its typed segments (pure function)
///
/// Splits on `/`, drops empty segments, and classifies each one.
/// The root pattern `/` parses to an empty segment list.
///
/// # Examples
///
/// ```
/// use wegwijzer::route::pattern::{parse_pattern, PatternSegment};
///
/// let segments = parse_pattern("/themas/:slug");
/// assert_eq!(
///     segments,
///     vec![
///         PatternSegment::Static("themas".to_string()),
///         PatternSegment::Param("slug".to_string()),
///     ]
/// );
///
/// assert!(parse_pattern("/").is_empty());
/// ```
pub fn parse_pattern(pattern: &str) -> Vec<PatternSegment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
        .collect()
}

/// Checks whether pattern segments structurally match path tokens,
/// position-wise over the shorter of the two (pure function)
///
/// A prefix match alone does not select a route; the resolver additionally
/// requires equal segment counts before accepting a parameterized match.
///
/// # Examples
///
/// ```
/// use wegwijzer::route::pattern::{parse_pattern, prefix_matches};
///
/// let segments = parse_pattern("/themas/:slug");
/// assert!(prefix_matches(&segments, &["themas"]));
/// assert!(prefix_matches(&segments, &["themas", "vervoer"]));
/// assert!(!prefix_matches(&segments, &["producten"]));
/// ```
pub fn prefix_matches(pattern: &[PatternSegment], tokens: &[&str]) -> bool {
    pattern
        .iter()
        .zip(tokens.iter())
        .all(|(segment, token)| segment.accepts(token))
}
