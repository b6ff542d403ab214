//! Employee model and related types.
//!
//! This module defines the [`Employee`] value object held by the roster and
//! the [`EmployeeDraft`] input used when adding employees to it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee on the quotation roster.
///
/// Employees are value objects scoped to a single calculation session:
/// they carry no references to one another, and the roster that owns them
/// is replaced (not mutated in place) on every add/remove operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque unique identifier, assigned by the roster on insertion.
    pub id: String,
    /// The employee's gross monthly salary before any split.
    pub salary: Decimal,
    /// Optional display name ("Nombre Completo" on spreadsheet imports).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional national ID ("Cédula" on spreadsheet imports).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Optional job title ("Cargo" on spreadsheet imports).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// The user-supplied fields of an employee, before the roster assigns an ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    /// The employee's gross monthly salary.
    pub salary: Decimal,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Optional national ID.
    #[serde(default)]
    pub document_id: Option<String>,
    /// Optional job title.
    #[serde(default)]
    pub position: Option<String>,
}

impl EmployeeDraft {
    /// Creates a draft with only a salary set.
    pub fn with_salary(salary: Decimal) -> Self {
        Self {
            salary,
            name: None,
            document_id: None,
            position: None,
        }
    }
}
