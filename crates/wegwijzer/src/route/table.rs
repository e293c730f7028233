//! TOML route-table loading
//!
//! The surrounding application defines its route table in a TOML file with
//! one `[[routes]]` entry per navigable path. Labels containing `{}` load
//! as templates (the matched token is substituted); all other labels are
//! literal. Loading validates the table the same way `RouteTable::new`
//! does, so a bad configuration fails at startup rather than at resolution
//! time.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{Label, RouteDefinition, RouteTable};
use crate::error::TableError;

#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    routes: Vec<RouteEntry>,
}

/// One `[[routes]]` entry as written in the configuration file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteEntry {
    path: String,
    label: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    login_required: bool,
}

impl RouteEntry {
    fn into_definition(self) -> Result<RouteDefinition, TableError> {
        let label = if self.label.contains("{}") {
            Label::template(self.label)
        } else {
            Label::literal(self.label)
        };

        let mut route =
            RouteDefinition::new(self.path, label)?.with_login_required(self.login_required);
        if let Some(icon) = self.icon {
            route = route.with_icon(icon);
        }
        Ok(route)
    }
}

impl RouteTable {
    /// Loads a route table from a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Parse`] for invalid TOML, or any of the
    /// construction errors for an invalid table.
    ///
    /// # Examples
    ///
    /// ```
    /// use wegwijzer::RouteTable;
    ///
    /// let table = RouteTable::from_toml_str(
    ///     r#"
    ///     [[routes]]
    ///     path = "/"
    ///     label = "Home"
    ///     icon = "home"
    ///
    ///     [[routes]]
    ///     path = "/themas/:slug"
    ///     label = "{}"
    ///     "#,
    /// )?;
    /// assert_eq!(table.len(), 2);
    /// # Ok::<(), wegwijzer::TableError>(())
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, TableError> {
        let file: TableFile = toml::from_str(input)?;
        let routes = file
            .routes
            .into_iter()
            .map(RouteEntry::into_definition)
            .collect::<Result<Vec<_>, _>>()?;

        let table = Self::new(routes)?;
        debug!(routes = table.len(), "loaded route table");
        Ok(table)
    }

    /// Loads a route table from a TOML file on disk
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Io`] when the file cannot be read, plus all
    /// errors of [`RouteTable::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[routes]]
        path = "/"
        label = "Home"
        icon = "home"

        [[routes]]
        path = "/themas"
        label = "Thema's"

        [[routes]]
        path = "/themas/:slug"
        label = "{}"

        [[routes]]
        path = "/mijn-zaken"
        label = "Mijn zaken"
        login_required = true
    "#;

    #[test]
    fn test_load_sample_table() {
        let table = RouteTable::from_toml_str(SAMPLE).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.root().icon.as_deref(), Some("home"));
    }

    #[test]
    fn test_template_label_detected() {
        let table = RouteTable::from_toml_str(SAMPLE).unwrap();
        let detail = &table.routes()[2];
        assert_eq!(detail.label.resolve("vervoer"), "vervoer");
    }

    #[test]
    fn test_login_required_loaded() {
        let table = RouteTable::from_toml_str(SAMPLE).unwrap();
        assert!(table.routes()[3].login_required);
        assert_eq!(table.navigable(false).count(), 3);
    }

    #[test]
    fn test_missing_root_rejected() {
        let result = RouteTable::from_toml_str(
            r#"
            [[routes]]
            path = "/themas"
            label = "Thema's"
            "#,
        );
        assert!(matches!(result, Err(TableError::MissingRoot)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = RouteTable::from_toml_str(
            r#"
            [[routes]]
            path = "/"
            label = "Home"
            colour = "orange"
            "#,
        );
        assert!(matches!(result, Err(TableError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = RouteTable::from_toml_file("/nonexistent/routes.toml");
        assert!(matches!(result, Err(TableError::Io { .. })));
    }
}
