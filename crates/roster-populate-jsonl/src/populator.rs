//! JSONL populator producing employee dataset files.

use crate::error::JsonlPopulatorError;
use roster_generator::EmployeeGenerator;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// JSONL populator that generates employee dataset files.
pub struct JsonlPopulator {
    generator: EmployeeGenerator,
}

impl JsonlPopulator {
    /// Create a new JSONL populator around a generator.
    ///
    /// Pass a seeded generator for deterministic output.
    pub fn new(generator: EmployeeGenerator) -> Self {
        Self { generator }
    }

    /// Generate a JSONL file with the specified number of records.
    ///
    /// Records carry ids `1..=count`, one JSON object per line.
    ///
    /// # Returns
    ///
    /// Metrics about the populate operation.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: usize,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Generating JSONL file '{}' with {} employee records",
            output_path.display(),
            count
        );

        // Create writer
        let file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        // Generate and write records; the generator rejects a zero count
        let mut employees = self.generator.employees(count)?;
        loop {
            let gen_start = Instant::now();
            let Some(employee) = employees.next() else {
                break;
            };
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            serde_json::to_writer(&mut writer, &employee)?;
            writer.write_all(b"\n")?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        // Flush and get file size
        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "JSONL generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{Catalog, Employee};
    use tempfile::TempDir;

    fn test_populator() -> JsonlPopulator {
        JsonlPopulator::new(EmployeeGenerator::new(Catalog::builtin(), 42))
    }

    #[test]
    fn test_populate_jsonl() {
        let mut populator = test_populator();

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("employees.jsonl");

        let metrics = populator.populate(&output_path, 10).unwrap();

        assert_eq!(metrics.rows_written, 10);
        assert!(output_path.exists());

        // Every line parses back into a record; ids are sequential
        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 10);

        for (i, line) in lines.iter().enumerate() {
            let employee: Employee = serde_json::from_str(line).unwrap();
            assert_eq!(employee.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_records_satisfy_invariants() {
        let mut populator = test_populator();

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("employees.jsonl");
        populator.populate(&output_path, 100).unwrap();

        let catalog = Catalog::builtin();
        let content = std::fs::read_to_string(&output_path).unwrap();
        for line in content.lines() {
            let employee: Employee = serde_json::from_str(line).unwrap();

            let department = catalog.get(&employee.department).unwrap();
            assert!(department.roles.contains(&employee.role));
            assert!(!employee.email.chars().any(|c| c.is_uppercase()));
            assert!((55_000..=180_000).contains(&employee.salary));
            assert_eq!(employee.salary % 1_000, 0);
        }
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut populator = test_populator();

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("employees.jsonl");

        let result = populator.populate(&output_path, 0);
        assert!(matches!(result, Err(JsonlPopulatorError::Generator(_))));
    }

    #[test]
    fn test_deterministic_generation() {
        let temp_dir = TempDir::new().unwrap();

        let mut pop1 = test_populator();
        let path1 = temp_dir.path().join("employees1.jsonl");
        pop1.populate(&path1, 5).unwrap();

        let mut pop2 = test_populator();
        let path2 = temp_dir.path().join("employees2.jsonl");
        pop2.populate(&path2, 5).unwrap();

        let content1 = std::fs::read_to_string(&path1).unwrap();
        let content2 = std::fs::read_to_string(&path2).unwrap();
        assert_eq!(content1, content2);
    }
}
