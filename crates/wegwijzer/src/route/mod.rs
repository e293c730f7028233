//! Static route-table types
//!
//! A `RouteTable` is built once at application start and never mutated
//! afterwards; the breadcrumb resolver only reads it. Table construction
//! validates the configuration up front so resolution never has to.

use std::fmt;
use std::sync::Arc;

use crate::error::TableError;
use crate::path::is_valid_path;

pub mod pattern;
mod table;

use pattern::{parse_pattern, PatternSegment};

/// Signature for programmatic label functions
///
/// Receives the matched path token and returns the display string.
pub type LabelFn = dyn Fn(&str) -> String + Send + Sync;

/// How a route's display label is produced
///
/// Configuration files carry `Literal` and `Template` labels; programmatic
/// tables may also attach an arbitrary `Derived` function.
///
/// # Examples
///
/// ```
/// use wegwijzer::Label;
///
/// let fixed = Label::literal("Thema's");
/// assert_eq!(fixed.resolve("vervoer"), "Thema's");
///
/// let templated = Label::template("Thema: {}");
/// assert_eq!(templated.resolve("vervoer"), "Thema: vervoer");
///
/// let derived = Label::derived(|slug| slug.to_uppercase());
/// assert_eq!(derived.resolve("vervoer"), "VERVOER");
/// ```
#[derive(Clone)]
pub enum Label {
    /// Fixed display string
    Literal(String),
    /// Display string with `{}` substituted by the matched token
    Template(String),
    /// Arbitrary function from matched token to display string
    Derived(Arc<LabelFn>),
}

impl Label {
    /// Creates a fixed literal label
    pub fn literal(text: impl Into<String>) -> Self {
        Label::Literal(text.into())
    }

    /// Creates a template label; `{}` is replaced by the matched token
    pub fn template(template: impl Into<String>) -> Self {
        Label::Template(template.into())
    }

    /// Creates a label computed from the matched token
    pub fn derived(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Label::Derived(Arc::new(f))
    }

    /// Resolves the display string for a matched path token
    pub fn resolve(&self, token: &str) -> String {
        match self {
            Label::Literal(text) => text.clone(),
            Label::Template(template) => template.replace("{}", token),
            Label::Derived(f) => f(token),
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Label::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Label::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// A single navigable route: pattern, display label, and nav metadata
///
/// Patterns use literal segments and `:name` parameters, e.g.
/// `/themas/:slug`. Segments are parsed once at construction.
///
/// # Examples
///
/// ```
/// use wegwijzer::{Label, RouteDefinition};
///
/// let route = RouteDefinition::new("/themas/:slug", Label::template("{}"))?
///     .with_icon("folder");
/// assert_eq!(route.pattern, "/themas/:slug");
/// assert_eq!(route.icon.as_deref(), Some("folder"));
/// # Ok::<(), wegwijzer::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    /// URL pattern like `/themas/:slug`
    pub pattern: String,
    /// How the breadcrumb label for this route is produced
    pub label: Label,
    /// Optional symbolic icon identifier (opaque to the resolver)
    pub icon: Option<String>,
    /// Whether navigation menus require an authenticated session
    pub login_required: bool,
    segments: Vec<PatternSegment>,
}

impl RouteDefinition {
    /// Creates a route definition, validating the pattern
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] when the pattern does not start with `/`,
    /// is not canonical (empty segment or trailing slash), or names a
    /// parameter with no name.
    ///
    /// # Examples
    ///
    /// ```
    /// use wegwijzer::{Label, RouteDefinition, TableError};
    ///
    /// assert!(RouteDefinition::new("/", Label::literal("Home")).is_ok());
    /// assert!(matches!(
    ///     RouteDefinition::new("themas", Label::literal("Thema's")),
    ///     Err(TableError::MissingLeadingSlash { .. })
    /// ));
    /// ```
    pub fn new(pattern: impl Into<String>, label: Label) -> Result<Self, TableError> {
        let pattern = pattern.into();

        if !pattern.starts_with('/') {
            return Err(TableError::MissingLeadingSlash { pattern });
        }
        if !is_valid_path(&pattern) {
            return Err(TableError::MalformedPattern { pattern });
        }

        let segments = parse_pattern(&pattern);
        if segments
            .iter()
            .any(|s| matches!(s, PatternSegment::Param(name) if name.is_empty()))
        {
            return Err(TableError::UnnamedParam { pattern });
        }

        Ok(Self {
            pattern,
            label,
            icon: None,
            login_required: false,
            segments,
        })
    }

    /// Sets the icon identifier (builder style)
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Marks the route as requiring an authenticated session (builder style)
    pub fn with_login_required(mut self, required: bool) -> Self {
        self.login_required = required;
        self
    }

    /// Returns the parsed pattern segments
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Whether this is the root (`/`) route
    pub fn is_root(&self) -> bool {
        self.pattern == "/"
    }
}

/// The closed set of navigable routes, loaded once at startup
///
/// Construction fails fast on configuration errors: the table must define
/// exactly one root (`/`) route and every pattern must be well-formed.
/// Iteration order is the configured order; the resolver's tie-break
/// prefers earlier routes.
///
/// # Examples
///
/// ```
/// use wegwijzer::{Label, RouteDefinition, RouteTable};
///
/// let table = RouteTable::new(vec![
///     RouteDefinition::new("/", Label::literal("Home"))?,
///     RouteDefinition::new("/themas", Label::literal("Thema's"))?,
/// ])?;
/// assert_eq!(table.root().pattern, "/");
/// # Ok::<(), wegwijzer::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    root_index: usize,
}

impl RouteTable {
    /// Builds a validated route table
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingRoot`] or [`TableError::DuplicateRoot`]
    /// when the table does not define exactly one root route.
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, TableError> {
        let mut roots = routes.iter().enumerate().filter(|(_, r)| r.is_root());

        let root_index = match roots.next() {
            Some((index, _)) => index,
            None => return Err(TableError::MissingRoot),
        };
        if roots.next().is_some() {
            return Err(TableError::DuplicateRoot);
        }

        Ok(Self { routes, root_index })
    }

    /// Returns all routes in configured order
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// Returns the root (`/`) route
    ///
    /// Existence is guaranteed by construction.
    pub fn root(&self) -> &RouteDefinition {
        &self.routes[self.root_index]
    }

    /// Number of routes in the table
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty (never true for a validated table)
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes visible in navigation for the given session state
    ///
    /// Routes marked `login_required` are filtered out for anonymous
    /// visitors.
    ///
    /// # Examples
    ///
    /// ```
    /// use wegwijzer::{Label, RouteDefinition, RouteTable};
    ///
    /// let table = RouteTable::new(vec![
    ///     RouteDefinition::new("/", Label::literal("Home"))?,
    ///     RouteDefinition::new("/mijn-zaken", Label::literal("Mijn zaken"))?
    ///         .with_login_required(true),
    /// ])?;
    ///
    /// assert_eq!(table.navigable(false).count(), 1);
    /// assert_eq!(table.navigable(true).count(), 2);
    /// # Ok::<(), wegwijzer::TableError>(())
    /// ```
    pub fn navigable(&self, logged_in: bool) -> impl Iterator<Item = &RouteDefinition> {
        self.routes
            .iter()
            .filter(move |route| logged_in || !route.login_required)
    }
}
