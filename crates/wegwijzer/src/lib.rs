//! # Wegwijzer
//!
//! Navigation core for server-rendered citizen portals:
//! - **Breadcrumb resolution** against a static route table, with exact,
//!   parameterized (`/themas/:slug`), and humanized-fallback matching
//! - **Pagination range building** (page numbers plus ellipsis markers)
//!   for compact paged-list controls
//! - **Route tables** loaded from TOML configuration and validated at
//!   startup (fail fast on a missing or duplicated root route)
//!
//! Both core operations are pure functions: no shared mutable state, no
//! I/O, safe to call on every navigation or render event, including after
//! partial-page content swaps. Rendering is the caller's concern; this
//! crate only shapes the data.
//!
//! ## Path Normalization
//!
//! Callers normalize paths before resolving. `normalize_path` handles the
//! common mistakes (trailing slashes, double slashes) with zero-copy
//! `Cow<'_, str>` on already-valid input.
//!
//! ## Example
//!
//! ```
//! use wegwijzer::{build_range, resolve, Label, PageEntry, RouteDefinition, RouteTable};
//!
//! let table = RouteTable::new(vec![
//!     RouteDefinition::new("/", Label::literal("Home"))?.with_icon("home"),
//!     RouteDefinition::new("/themas", Label::literal("Thema's"))?,
//!     RouteDefinition::new("/themas/:slug", Label::derived(|slug| {
//!         format!("Thema {slug}")
//!     }))?,
//! ])?;
//!
//! let trail = resolve("/themas/vervoer", &table);
//! assert!(trail.renderable());
//! assert_eq!(trail.crumbs()[1].label, "Thema vervoer");
//!
//! let entries = build_range(5, 1, 20)?;
//! assert_eq!(entries[0], PageEntry::Page(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod breadcrumb;
pub mod error;
pub mod pagination;
pub mod path;
pub mod route;

// Re-export the public surface at the crate root
pub use breadcrumb::{resolve, Breadcrumb, BreadcrumbTrail, MatchKind};
pub use error::{PaginationError, TableError};
pub use pagination::{build_range, PageEntry};
pub use path::{is_valid_path, normalize_path, PathPrefixes};
pub use route::{Label, LabelFn, RouteDefinition, RouteTable};
