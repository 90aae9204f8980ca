//! Department/role catalog definitions.
//!
//! A [`Catalog`] is the fixed department-to-roles mapping records are drawn
//! from. The built-in catalog covers six departments; deployments that want
//! their own org shape can load a catalog from a YAML file:
//!
//! ```yaml
//! departments:
//!   - name: Engineering
//!     roles:
//!       - Senior Developer
//!       - Tech Lead
//!   - name: Design
//!     roles:
//!       - UI Designer
//! ```
//!
//! Loading validates the tables the generator relies on being non-empty, so
//! record construction itself can never fail on selection.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Catalog defines no departments at all
    #[error("Catalog has no departments")]
    NoDepartments,

    /// A department defines no roles
    #[error("Department '{0}' has no roles")]
    EmptyRoles(String),
}

/// A department and the roles it can assign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Department name
    pub name: String,

    /// Roles assignable within this department
    pub roles: Vec<String>,
}

impl Department {
    /// Create a new department definition.
    pub fn new(name: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            name: name.into(),
            roles,
        }
    }
}

/// Ordered department-to-roles mapping.
///
/// The order is significant: the generator draws departments by index, so a
/// given (catalog, seed) pair always reproduces the same batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    departments: Vec<Department>,
}

impl Catalog {
    /// Create a catalog from a list of departments.
    ///
    /// Fails if the list is empty or any department has no roles.
    pub fn new(departments: Vec<Department>) -> Result<Self, CatalogError> {
        let catalog = Self { departments };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in six-department catalog.
    pub fn builtin() -> Self {
        let departments = vec![
            Department::new(
                "Engineering",
                vec![
                    "Senior Developer".to_string(),
                    "Junior Developer".to_string(),
                    "DevOps Engineer".to_string(),
                    "QA Engineer".to_string(),
                    "Staff Engineer".to_string(),
                    "Tech Lead".to_string(),
                ],
            ),
            Department::new(
                "Design",
                vec![
                    "Lead Designer".to_string(),
                    "UI Designer".to_string(),
                    "UX Researcher".to_string(),
                    "Motion Designer".to_string(),
                    "Brand Designer".to_string(),
                ],
            ),
            Department::new(
                "Marketing",
                vec![
                    "Marketing Manager".to_string(),
                    "Content Writer".to_string(),
                    "SEO Specialist".to_string(),
                    "Growth Analyst".to_string(),
                    "Social Media Manager".to_string(),
                ],
            ),
            Department::new(
                "Sales",
                vec![
                    "Account Executive".to_string(),
                    "Sales Manager".to_string(),
                    "SDR".to_string(),
                    "Solutions Engineer".to_string(),
                    "VP Sales".to_string(),
                ],
            ),
            Department::new(
                "Finance",
                vec![
                    "Accountant".to_string(),
                    "Financial Analyst".to_string(),
                    "Controller".to_string(),
                    "Payroll Specialist".to_string(),
                ],
            ),
            Department::new(
                "Human Resources",
                vec![
                    "HR Manager".to_string(),
                    "Recruiter".to_string(),
                    "People Ops".to_string(),
                    "Talent Acquisition Lead".to_string(),
                ],
            ),
        ];

        Self { departments }
    }

    /// Load a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.departments.is_empty() {
            return Err(CatalogError::NoDepartments);
        }
        for department in &self.departments {
            if department.roles.is_empty() {
                return Err(CatalogError::EmptyRoles(department.name.clone()));
            }
        }
        Ok(())
    }

    /// All departments, in catalog order.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Get a department by name.
    pub fn get(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    /// All department names, in catalog order.
    pub fn department_names(&self) -> Vec<&str> {
        self.departments.iter().map(|d| d.name.as_str()).collect()
    }

    /// Number of departments.
    pub fn len(&self) -> usize {
        self.departments.len()
    }

    /// Whether the catalog has no departments.
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}
