//! The employee record and its status enum.

use serde::{Deserialize, Serialize};

/// Employment status of a generated employee.
///
/// Batches draw the status per record with the weights in
/// [`Status::WEIGHTS`]: active 4, inactive 1, on-leave 1. The weighting is
/// per-draw only; a batch carries no global balancing guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Currently employed and working
    Active,
    /// No longer active (terminated, suspended)
    Inactive,
    /// Temporarily away (parental leave, sabbatical)
    OnLeave,
}

impl Status {
    /// Sampling weights for the status draw.
    pub const WEIGHTS: [(Status, u32); 3] = [
        (Status::Active, 4),
        (Status::Inactive, 1),
        (Status::OnLeave, 1),
    ];

    /// The wire/display form of the status ("active", "inactive", "on-leave").
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::OnLeave => "on-leave",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single synthetic employee record.
///
/// Invariants upheld by the generator:
///
/// - `id` values within one batch are contiguous ascending from 1
/// - `role` is a member of the role list of `department` in the catalog the
///   batch was drawn from
/// - `email` is lowercase
/// - `salary` is in `[55_000, 180_000]` and a multiple of 1000
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Batch-unique sequential identifier, starting at 1
    pub id: u32,

    /// Full name
    pub name: String,

    /// Lowercase email address
    pub email: String,

    /// Department name, one of the catalog's departments
    pub department: String,

    /// Role, drawn from the department's role list
    pub role: String,

    /// Employment status
    pub status: Status,

    /// Annual salary in whole currency units
    pub salary: u32,
}
