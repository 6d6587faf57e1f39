//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate every loaded program" or
//! "list exercises for a muscle".

pub mod catalog_service;
pub mod validation_service;

pub use catalog_service::CatalogService;
pub use validation_service::{ValidationReport, ValidationService};
