//! JSON Schema loading for example catalog documents.
//!
//! The crate compiles in `schema/example_catalog.schema.json`; callers that
//! need to check a document against another revision can load a schema from
//! disk instead. Either way the `schema_version` const is pulled out of the
//! schema so the index can report which document shape it accepted.

use crate::validation::ValidationIssue;
use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Schema text compiled into the crate.
pub const EMBEDDED_SCHEMA_JSON: &str = include_str!("../schema/example_catalog.schema.json");

const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

/// Compiled catalog schema plus the `schema_version` it pins.
pub struct CatalogSchema {
    pub schema_version: String,
    pub compiled: JSONSchema,
}

impl CatalogSchema {
    /// Compile the schema shipped with the crate.
    pub fn embedded() -> Result<Self> {
        let value: Value =
            serde_json::from_str(EMBEDDED_SCHEMA_JSON).context("parsing embedded catalog schema")?;
        compile_schema(&value).context("compiling embedded catalog schema")
    }

    /// Load and compile a schema file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening schema {}", path.display()))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing schema {}", path.display()))?;
        compile_schema(&value).with_context(|| format!("compiling schema {}", path.display()))
    }

    /// Check a catalog document, returning one issue per schema violation.
    pub fn violations(&self, instance: &Value) -> Vec<ValidationIssue> {
        match self.compiled.validate(instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|err| ValidationIssue::Schema {
                    pointer: err.instance_path.to_string(),
                    message: err.to_string(),
                })
                .collect(),
        }
    }
}

fn compile_schema(schema: &Value) -> Result<CatalogSchema> {
    let schema_version = extract_schema_version(schema, SCHEMA_VERSION_POINTER)
        .ok_or_else(|| anyhow!("schema missing schema_version const at {SCHEMA_VERSION_POINTER}"))?;
    let compiled = JSONSchema::compile(schema).map_err(|err| anyhow!("invalid schema: {err}"))?;
    Ok(CatalogSchema {
        schema_version,
        compiled,
    })
}

fn extract_schema_version(schema: &Value, pointer: &str) -> Option<String> {
    let version = schema.pointer(pointer).and_then(Value::as_str)?;
    if !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}
