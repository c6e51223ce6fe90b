use crate::catalog::identity::ExampleKey;
use crate::validation::ValidationIssue;
use std::fmt;
use thiserror::Error;

/// Errors surfaced by catalog lookups and index construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested key has no record. Callers show a "topic not found"
    /// state; this is never fatal.
    #[error("example not found: {0}")]
    NotFound(ExampleKey),

    /// The catalog content failed validation.
    #[error("example catalog is malformed:\n{0}")]
    Malformed(ValidationReport),
}

/// Every issue found while validating one catalog document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport(pub Vec<ValidationIssue>);

impl ValidationReport {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.0 {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "  - {issue}")?;
        }
        Ok(())
    }
}
