pub mod aggregate;
pub mod parse;

pub use aggregate::{CatalogDocument, CatalogItem, DEFAULT_ICON, DEFAULT_IMAGE};
pub use parse::parse_catalog;
