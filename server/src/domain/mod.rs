//! Domain logic for the car catalog
//!
//! - `catalog` - Listing, lookup and deletion over a car repository
//! - `import` - CSV import of the electric car dataset

pub mod catalog;
pub mod import;

pub use catalog::{CatalogError, CatalogService};
pub use import::{ImportError, ImportMode, ImportReport, import_csv};
