//! Deterministic employee record generator for roster-gen.
//!
//! This crate provides the [`EmployeeGenerator`] which produces synthetic
//! employee records from a department/role catalog. The generator uses a
//! seeded RNG to ensure reproducibility across runs with the same seed.
//!
//! # Architecture
//!
//! ```text
//! Catalog (built-in or YAML)
//!        │
//!        ▼
//! ┌───────────────────┐
//! │ EmployeeGenerator │
//! │                   │
//! │  - catalog        │
//! │  - rng (StdRng)   │
//! └─────────┬─────────┘
//!           │
//!           ▼
//!   Employee { id, name, email, department, role, status, salary }
//! ```
//!
//! # Example
//!
//! ```rust
//! use roster_core::Catalog;
//! use roster_generator::EmployeeGenerator;
//!
//! let mut generator = EmployeeGenerator::new(Catalog::builtin(), 42);
//! let batch = generator.batch(3).unwrap();
//!
//! assert_eq!(batch.len(), 3);
//! assert_eq!(batch[0].id, 1);
//! assert!(batch[0].email.chars().all(|c| !c.is_uppercase()));
//! ```
//!
//! # Record construction
//!
//! Each record is drawn independently, given its `id`:
//!
//! 1. department, uniformly from the catalog
//! 2. role, uniformly from that department's role list
//! 3. full name and email from the faker (email lowercased)
//! 4. status by cumulative-weight draw (active 4, inactive 1, on-leave 1)
//! 5. salary uniformly over {55_000, 56_000, .., 180_000}

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{EmployeeGenerator, EmployeeIter, GeneratorError};
