//! Example catalog wiring.
//!
//! This module wraps the JSON catalog under `data/examples.json` so callers
//! get a validated, immutable table with stable keys. Types here mirror the
//! document fields; callers use `ExampleIndex` for lookups and enumeration.

pub mod error;
pub mod identity;
pub mod index;
pub mod model;

pub use error::{CatalogError, ValidationReport};
pub use identity::{ExampleKey, Language};
pub use index::{ExampleIndex, NavEntry, TopicGroup};
pub use model::{ExampleCatalog, ExampleRecord, parse_catalog};

pub use model::load_catalog_from_path;
