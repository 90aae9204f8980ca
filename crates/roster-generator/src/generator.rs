//! Main generator producing employee records.

use crate::generators::{assignment, identity, salary, status};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roster_core::{Catalog, Employee};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Requested batch size is not a positive count
    #[error("Invalid batch size: {0} (must be at least 1)")]
    InvalidCount(usize),
}

/// Generator that produces synthetic employee records.
///
/// The generator draws from a seeded random number generator, so the same
/// catalog and seed always reproduce the same records in the same order.
pub struct EmployeeGenerator {
    /// Catalog defining the departments and their role lists
    catalog: Catalog,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
}

impl EmployeeGenerator {
    /// Create a new generator with the given catalog and seed.
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    ///
    /// Batches are still internally consistent, but not reproducible.
    pub fn from_entropy(catalog: Catalog) -> Self {
        Self {
            catalog,
            rng: StdRng::from_entropy(),
        }
    }

    /// Get a reference to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generate the next employee record with the supplied id.
    ///
    /// Records are independent of each other; only the id is caller-assigned.
    pub fn next_employee(&mut self, id: u32) -> Employee {
        let department = assignment::pick_department(&mut self.rng, &self.catalog);
        let role = assignment::pick_role(&mut self.rng, department).to_string();
        let department = department.name.clone();

        Employee {
            id,
            name: identity::full_name(&mut self.rng),
            email: identity::email(&mut self.rng),
            department,
            role,
            status: status::weighted_status(&mut self.rng),
            salary: salary::salary(&mut self.rng),
        }
    }

    /// Generate a full batch of `count` records with ids `1..=count`.
    ///
    /// A zero count is rejected; an empty roster is never useful to a
    /// table consumer.
    pub fn batch(&mut self, count: usize) -> Result<Vec<Employee>, GeneratorError> {
        if count == 0 {
            return Err(GeneratorError::InvalidCount(count));
        }

        Ok((1..=count).map(|id| self.next_employee(id as u32)).collect())
    }

    /// Generate `count` records lazily with ids `1..=count`.
    pub fn employees(&mut self, count: usize) -> Result<EmployeeIter<'_>, GeneratorError> {
        if count == 0 {
            return Err(GeneratorError::InvalidCount(count));
        }

        Ok(EmployeeIter {
            generator: self,
            next_id: 1,
            remaining: count,
        })
    }
}

/// Iterator that lazily generates employee records.
pub struct EmployeeIter<'a> {
    generator: &'a mut EmployeeGenerator,
    next_id: u32,
    remaining: usize,
}

impl Iterator for EmployeeIter<'_> {
    type Item = Employee;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        let id = self.next_id;
        self.next_id += 1;

        Some(self.generator.next_employee(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for EmployeeIter<'_> {}
