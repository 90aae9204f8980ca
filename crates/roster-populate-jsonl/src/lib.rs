//! JSONL dataset writer for roster-gen.
//!
//! This crate generates JSONL files (one JSON employee record per line)
//! using the roster-generator crate.
//!
//! # Example
//!
//! ```ignore
//! use roster_core::Catalog;
//! use roster_generator::EmployeeGenerator;
//! use roster_populate_jsonl::JsonlPopulator;
//!
//! let generator = EmployeeGenerator::new(Catalog::builtin(), 42);
//! let mut populator = JsonlPopulator::new(generator);
//!
//! // Generate a JSONL file with 200 records
//! let metrics = populator.populate("/path/to/employees.jsonl", 200)?;
//! ```

mod error;
mod populator;

pub use error::JsonlPopulatorError;
pub use populator::{JsonlPopulator, PopulateMetrics};
