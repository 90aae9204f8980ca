//! Core types for the roster-gen synthetic employee toolkit.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`Employee`] - The generated record: identity, assignment, status, salary
//! - [`Status`] - Employment status enum with its sampling weights
//! - [`Catalog`] - Department-to-roles mapping, built-in or loaded from YAML
//!
//! # Architecture
//!
//! The roster-core crate sits at the foundation of the workspace:
//!
//! ```text
//! roster-core (this crate)
//!    │
//!    ├─── roster-generator  (draws Employee records from a Catalog)
//!    │
//!    └─── roster-store      (holds the reactive batch of Employee records)
//! ```
//!
//! # Example
//!
//! ```rust
//! use roster_core::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.len(), 6);
//!
//! let engineering = catalog.get("Engineering").unwrap();
//! assert!(engineering.roles.contains(&"Tech Lead".to_string()));
//! ```

pub mod catalog;
pub mod employee;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError, Department};
pub use employee::{Employee, Status};
