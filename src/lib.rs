//! Immutable catalog of tutorial examples.
//!
//! The crate exposes a fixed table mapping topic keys (`html-doctype`,
//! `js-closures`, `fastapi-crud`, ...) to example records: title, language
//! label, description, code, and optional rendered output, interactive demo
//! markup, and notes. The table is compiled in from `data/examples.json`,
//! checked against `schema/example_catalog.schema.json`, and indexed once on
//! first access. Consumers look records up by key or enumerate keys in
//! definition order; nothing in the table is ever mutated or interpreted.

use std::sync::LazyLock;

pub mod catalog;
pub mod schema_loader;
pub mod source;
pub mod validation;

pub use catalog::{
    CatalogError, ExampleCatalog, ExampleIndex, ExampleKey, ExampleRecord, Language, NavEntry,
    TopicGroup, ValidationReport, load_catalog_from_path, parse_catalog,
};
pub use schema_loader::CatalogSchema;
pub use source::{CatalogSource, EMBEDDED_CATALOG_JSON};
pub use validation::{RequiredField, ValidationIssue, validate_catalog_value, validate_records};

static EMBEDDED_INDEX: LazyLock<ExampleIndex> = LazyLock::new(|| match ExampleIndex::embedded() {
    Ok(index) => index,
    // The embedded table is covered by the test suite; reaching this means
    // the content shipped with an authoring defect.
    Err(err) => panic!("{err:#}"),
});

/// The process-wide example catalog.
///
/// Built on first call from the embedded table and shared read-only for the
/// rest of the process; concurrent callers never observe a partial table.
///
/// # Panics
///
/// Panics on first access if the embedded content fails validation.
pub fn catalog() -> &'static ExampleIndex {
    &EMBEDDED_INDEX
}

/// Split comma- or whitespace-delimited lists (e.g. `--topic html,js`) into
/// tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
