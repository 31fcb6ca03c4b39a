pub mod catalog;
pub mod contact;
pub mod content;
pub mod filter;
pub mod grid;
pub mod router;

pub use crate::domain::model::{CategorySelection, ContactMessage, ProjectRecord, Section};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
