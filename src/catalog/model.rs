//! Deserializable representation of `data/examples.json`.
//!
//! The types mirror the catalog schema so callers can reason about example
//! content without ad-hoc JSON handling. Use `ExampleIndex` for validation
//! and key lookup; use these structs when working with a raw document.

use crate::catalog::identity::{ExampleKey, Language};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Full example catalog as stored on disk.
///
/// Examples are kept as an ordered list so definition order survives parsing
/// and a repeated key can still be reported instead of silently replacing
/// the earlier entry.
pub struct ExampleCatalog {
    pub schema_version: String,
    pub examples: Vec<ExampleRecord>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One topic's displayable fields.
///
/// Every text field is opaque. `output`, `interactive` and `notes` carry
/// markup (and for `interactive`, script) that this crate never interprets;
/// a consumer rendering them into a live document must sandbox them.
pub struct ExampleRecord {
    pub key: ExampleKey,
    pub title: String,
    pub language: Language,
    pub description: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExampleRecord {
    /// Looks up a field by its document name.
    ///
    /// Returns `None` for optional fields the record does not carry and for
    /// names that are not record fields.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "key" => Some(self.key.as_str()),
            "title" => Some(&self.title),
            "language" => Some(self.language.as_str()),
            "description" => Some(&self.description),
            "code" => Some(&self.code),
            "output" => self.output.as_deref(),
            "interactive" => self.interactive.as_deref(),
            "notes" => self.notes.as_deref(),
            _ => None,
        }
    }
}

/// Parse catalog JSON text without additional validation.
pub fn parse_catalog(text: &str) -> Result<ExampleCatalog> {
    let catalog: ExampleCatalog = serde_json::from_str(text)?;
    Ok(catalog)
}

/// Read and parse an example catalog from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<ExampleCatalog> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_catalog(&data).with_context(|| format!("parsing {}", path.display()))
}
