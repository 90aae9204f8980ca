//! roster-gen library
//!
//! A toolkit for generating synthetic employee rosters: deterministic
//! record generation, a reactive in-memory roster container, and CSV/JSONL
//! dataset writers.
//!
//! # Features
//!
//! - Deterministic generation: the same catalog and seed always reproduce
//!   the same batch
//! - Atomic regeneration: consumers of the reactive roster see either the
//!   old batch in full or the new batch in full, never a mix
//! - Custom org shapes: the department/role catalog can be loaded from YAML
//! - Dataset export: CSV and JSONL writers for table demos and load tests
//!
//! # Workspace crates
//!
//! Each concern has its own dedicated crate:
//!
//! - `roster-core` - Employee record, status enum, department/role catalog
//! - `roster-generator` - seeded record generator
//! - `roster-store` - reactive single-writer roster container
//! - `roster-populate-csv` / `roster-populate-jsonl` - dataset writers
//!
//! # CLI Usage
//!
//! ```bash
//! # Write a 200-record CSV dataset (seed 42)
//! roster-gen populate csv --output-dir ./datasets
//!
//! # Write a 1000-record JSONL dataset with a custom seed
//! roster-gen populate jsonl --output-dir ./datasets --count 1000 --seed 7
//!
//! # Use a custom department/role catalog
//! roster-gen populate csv --output-dir ./datasets --catalog ./org.yaml
//! ```

// Re-exports for convenience
pub use roster_core::{Catalog, CatalogError, Department, Employee, Status};
pub use roster_generator::{EmployeeGenerator, GeneratorError};
pub use roster_populate_csv::CsvPopulator;
pub use roster_populate_jsonl::JsonlPopulator;
pub use roster_store::{
    EmployeeRoster, RosterError, RosterEvent, RosterReader, DEFAULT_BATCH_SIZE,
};
