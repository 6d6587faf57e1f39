//! Exercise catalog adapters.

pub mod memory;

pub use memory::InMemoryCatalog;
