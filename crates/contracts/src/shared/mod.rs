pub mod error;
pub mod pricing;
pub mod summary;
