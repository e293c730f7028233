//! Breadcrumb resolution against a static route table
//!
//! Maps a URL path to an ordered breadcrumb trail, one entry per path
//! token, shallow to deep. Each token is matched in three stages: an exact
//! single-segment match, then a parameterized match against the cumulative
//! path with an equal-segment-count tie-break, then a humanized fallback
//! label. Resolution is pure: no shared state, no I/O, safe to call on
//! every navigation event.

use tracing::debug;

use crate::path::PathPrefixes;
use crate::route::pattern::prefix_matches;
use crate::route::{RouteDefinition, RouteTable};

/// How a breadcrumb's route was matched
///
/// A typed match kind keeps the tie-break rules auditable: tests can
/// assert *how* a route was chosen, not only which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The token equals a single static-segment pattern verbatim
    Exact,
    /// A pattern matched the cumulative path structurally, with equal
    /// segment count
    Parameterized,
    /// No route matched; the label was humanized from the raw token
    Fallback,
}

/// One entry in a breadcrumb trail
///
/// Created fresh on every resolution, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Breadcrumb {
    /// The raw path token consumed at this step (empty for the root)
    pub segment: String,
    /// The path prefix ending at this segment
    pub cumulative_path: String,
    /// The best-matching route definition, if any
    pub route: Option<RouteDefinition>,
    /// How `route` was selected
    pub kind: MatchKind,
    /// Resolved display string
    pub label: String,
    /// True only for the root breadcrumb
    pub is_first: bool,
}

/// An ordered breadcrumb trail, shallow to deep
///
/// The rendering collaborator draws one link per crumb; the helpers here
/// encode its two data-dependent rules: a trail with a single entry is not
/// rendered at all, and only the first crumb may carry an icon.
#[derive(Debug, Clone)]
pub struct BreadcrumbTrail {
    crumbs: Vec<Breadcrumb>,
}

impl BreadcrumbTrail {
    /// Returns the crumbs in traversal order
    pub fn crumbs(&self) -> &[Breadcrumb] {
        &self.crumbs
    }

    /// Number of crumbs in the trail
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    /// Whether the trail is empty
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    /// Whether the trail should be rendered at all
    ///
    /// Single-entry trails (the root page) render nothing.
    pub fn renderable(&self) -> bool {
        self.crumbs.len() > 1
    }

    /// Icon for the trail, if the first crumb's route defines one
    ///
    /// Only the first breadcrumb may show an icon.
    pub fn icon(&self) -> Option<&str> {
        self.crumbs
            .first()
            .and_then(|crumb| crumb.route.as_ref())
            .and_then(|route| route.icon.as_deref())
    }
}

impl<'a> IntoIterator for &'a BreadcrumbTrail {
    type Item = &'a Breadcrumb;
    type IntoIter = std::slice::Iter<'a, Breadcrumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.crumbs.iter()
    }
}

/// Resolves a URL path to an ordered breadcrumb trail
///
/// `path` must be a normalized path beginning with `/` (see
/// [`normalize_path`](crate::path::normalize_path)); a path that does not
/// start with `/` yields an empty trail. A trailing slash produces a final
/// empty-token fallback crumb, so callers should normalize first.
///
/// The root path `/` resolves to exactly one crumb for the root route,
/// which a validated [`RouteTable`] always defines.
///
/// # Matching per token
///
/// 1. **Exact**: a route whose pattern is literally `/` + token.
/// 2. **Parameterized**: among routes whose segments structurally match
///    the cumulative path, take those with the same segment count, first
///    in table order.
/// 3. **Fallback**: no route; the label is [`humanize`]d from the token.
///
/// # Examples
///
/// ```
/// use wegwijzer::{resolve, Label, RouteDefinition, RouteTable};
///
/// let table = RouteTable::new(vec![
///     RouteDefinition::new("/", Label::literal("Home"))?.with_icon("home"),
///     RouteDefinition::new("/themas", Label::literal("Thema's"))?,
///     RouteDefinition::new("/themas/:slug", Label::template("{}"))?,
/// ])?;
///
/// let trail = resolve("/themas/vervoer", &table);
/// assert_eq!(trail.len(), 2);
/// assert_eq!(trail.crumbs()[0].label, "Thema's");
/// assert_eq!(trail.crumbs()[1].label, "vervoer");
/// # Ok::<(), wegwijzer::TableError>(())
/// ```
pub fn resolve(path: &str, table: &RouteTable) -> BreadcrumbTrail {
    let mut crumbs = Vec::new();

    for cumulative in PathPrefixes::new(path) {
        let token = last_token(cumulative);
        let (route, kind) = match_token(token, cumulative, table);

        let label = match route {
            Some(route) => route.label.resolve(token),
            None => humanize(token),
        };

        crumbs.push(Breadcrumb {
            segment: token.to_string(),
            cumulative_path: cumulative.to_string(),
            route: route.cloned(),
            kind,
            label,
            is_first: cumulative == "/",
        });
    }

    debug!(path, crumbs = crumbs.len(), "resolved breadcrumb trail");
    BreadcrumbTrail { crumbs }
}

/// Matches one token in three stages: exact, parameterized, fallback
fn match_token<'t>(
    token: &str,
    cumulative: &str,
    table: &'t RouteTable,
) -> (Option<&'t RouteDefinition>, MatchKind) {
    // An empty token only occurs at the root or on unnormalized input
    // (trailing or doubled slash). Only the root position matches; the
    // rest degrade to an empty fallback label.
    if token.is_empty() && cumulative != "/" {
        return (None, MatchKind::Fallback);
    }

    // Exact match: a route whose pattern is a single static segment equal
    // to the token (the root pattern "/" for the empty root token)
    let exact = format!("/{token}");
    if let Some(route) = table.routes().iter().find(|r| r.pattern == exact) {
        return (Some(route), MatchKind::Exact);
    }

    // Parameterized match against the cumulative path. Candidates match
    // structurally over their common prefix; only a candidate with the
    // same segment count is accepted, first in table order.
    let tokens: Vec<&str> = cumulative.split('/').filter(|s| !s.is_empty()).collect();
    let chosen = table
        .routes()
        .iter()
        .filter(|route| prefix_matches(route.segments(), &tokens))
        .find(|route| route.segments().len() == tokens.len());

    match chosen {
        Some(route) => (Some(route), MatchKind::Parameterized),
        None => {
            debug!(token, cumulative, "no route matched; humanizing token");
            (None, MatchKind::Fallback)
        }
    }
}

/// Extracts the last path token from a cumulative prefix
fn last_token(prefix: &str) -> &str {
    prefix.rsplit('/').next().unwrap_or("")
}

/// Humanizes a raw path token into a fallback label
///
/// `-` and `_` become word breaks and each word is title-cased.
///
/// # Examples
///
/// ```
/// use wegwijzer::breadcrumb::humanize;
///
/// assert_eq!(humanize("afval-en-milieu"), "Afval En Milieu");
/// assert_eq!(humanize("mijn_zaken"), "Mijn Zaken");
/// assert_eq!(humanize(""), "");
/// ```
pub fn humanize(token: &str) -> String {
    token
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_hyphens_and_underscores() {
        assert_eq!(humanize("parkeervergunning-aanvragen"), "Parkeervergunning Aanvragen");
        assert_eq!(humanize("mijn_zaken"), "Mijn Zaken");
        assert_eq!(humanize("a-b_c"), "A B C");
    }

    #[test]
    fn test_humanize_collapses_empty_words() {
        assert_eq!(humanize("--afval--"), "Afval");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_last_token() {
        assert_eq!(last_token("/themas/vervoer"), "vervoer");
        assert_eq!(last_token("/themas"), "themas");
        assert_eq!(last_token("/"), "");
        assert_eq!(last_token("/themas/"), "");
    }
}
