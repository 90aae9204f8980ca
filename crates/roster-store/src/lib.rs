//! Reactive in-memory roster container.
//!
//! This crate provides [`EmployeeRoster`], the single-writer holder of one
//! generated batch of employee records. Consumers read the batch through
//! cheap [`EmployeeRoster::snapshot`] calls or a cloneable
//! [`RosterReader`] handle, and observe regenerations through a broadcast
//! subscription instead of polling.
//!
//! Regeneration is atomic: the replacement batch is fully constructed before
//! a single pointer swap publishes it, so a reader sees either the old batch
//! in full or the new batch in full, never a mix.
//!
//! # Example
//!
//! ```rust
//! use roster_core::Catalog;
//! use roster_generator::EmployeeGenerator;
//! use roster_store::EmployeeRoster;
//!
//! let generator = EmployeeGenerator::new(Catalog::builtin(), 42);
//! let mut roster = EmployeeRoster::initialize(generator, 5).unwrap();
//!
//! assert_eq!(roster.len(), 5);
//!
//! roster.regenerate(Some(10)).unwrap();
//! assert_eq!(roster.snapshot().len(), 10);
//! ```

pub mod roster;

// Re-exports for convenience
pub use roster::{EmployeeRoster, RosterError, RosterEvent, RosterReader, DEFAULT_BATCH_SIZE};
