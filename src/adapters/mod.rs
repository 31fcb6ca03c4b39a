// Adapters layer: concrete catalog sources behind the domain ports.

pub mod catalog;

pub use catalog::{BuiltinCatalog, TomlCatalogFile};
