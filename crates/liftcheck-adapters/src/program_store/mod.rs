//! Program store adapters.

pub mod memory;

pub use memory::InMemoryProgramStore;
