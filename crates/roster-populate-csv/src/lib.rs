//! CSV dataset writer for roster-gen.
//!
//! This crate generates CSV files of synthetic employee records using the
//! roster-generator crate.
//!
//! # Example
//!
//! ```ignore
//! use roster_core::Catalog;
//! use roster_generator::EmployeeGenerator;
//! use roster_populate_csv::CsvPopulator;
//!
//! let generator = EmployeeGenerator::new(Catalog::builtin(), 42);
//! let mut populator = CsvPopulator::new(generator);
//!
//! // Generate a CSV file with 200 records
//! let metrics = populator.populate("/path/to/employees.csv", 200)?;
//! ```

mod error;
mod populator;

pub use error::CsvPopulatorError;
pub use populator::{CsvPopulator, PopulateMetrics};
