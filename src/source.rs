//! Where a catalog comes from: the table compiled into the crate, or a file
//! named by the caller (the CLI maps `--catalog` / `EXAMPLE_CATALOG_PATH`
//! here).

use crate::catalog::ExampleIndex;
use crate::schema_loader::CatalogSchema;
use crate::validation::{ValidationIssue, validate_catalog_value};
use anyhow::{Context, Result};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Catalog text compiled into the crate.
pub const EMBEDDED_CATALOG_JSON: &str = include_str!("../data/examples.json");

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
}

impl CatalogSource {
    /// Use the override path when one is given and non-empty; otherwise the
    /// embedded table.
    pub fn from_override(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => CatalogSource::File(path),
            _ => CatalogSource::Embedded,
        }
    }

    pub fn read_text(&self) -> Result<Cow<'static, str>> {
        match self {
            CatalogSource::Embedded => Ok(Cow::Borrowed(EMBEDDED_CATALOG_JSON)),
            CatalogSource::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .with_context(|| format!("reading catalog {}", path.display())),
        }
    }

    /// Build a validated index from this source.
    pub fn load_index(&self, schema: &CatalogSchema) -> Result<ExampleIndex> {
        debug!(source = %self, "loading example catalog");
        let text = self.read_text()?;
        ExampleIndex::from_json_with_schema(&text, schema)
            .with_context(|| format!("loading catalog from {self}"))
    }

    /// Report every issue in this source without building an index.
    ///
    /// Fails only when the source cannot be read or is not JSON at all.
    pub fn validate(&self, schema: &CatalogSchema) -> Result<Vec<ValidationIssue>> {
        debug!(source = %self, "validating example catalog");
        let text = self.read_text()?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("parsing catalog from {self}"))?;
        validate_catalog_value(schema, &value)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Embedded => f.write_str("embedded catalog"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
