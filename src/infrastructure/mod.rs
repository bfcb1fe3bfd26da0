//! Infrastructure layer - Loading event data from disk

pub mod catalog;

pub use catalog::Catalog;
