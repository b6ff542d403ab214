//! Request types for the Parafiscal Savings Engine API.
//!
//! This module defines the JSON request structures for the `/quote` and
//! `/roster/import` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ArlRiskLevel, EmployeeDraft};
use crate::roster::ImportRow;

/// Request body for the `/quote` endpoint.
///
/// Contains the roster, the configured salary split, and the workplace risk
/// classification needed to price a quotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationRequest {
    /// The employees to quote for.
    pub employees: Vec<EmployeeEntry>,
    /// Share of compensation classified as taxable salary. Out-of-range
    /// values are clamped into the configured bounds, never rejected.
    pub salary_percentage: Decimal,
    /// The roster-wide ARL risk classification.
    pub risk_level: ArlRiskLevel,
}

/// One employee in a quotation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeEntry {
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

impl From<EmployeeEntry> for EmployeeDraft {
    fn from(entry: EmployeeEntry) -> Self {
        EmployeeDraft {
            salary: entry.salary,
            name: entry.name,
            document_id: entry.document_id,
            position: entry.position,
        }
    }
}

/// Request body for the `/roster/import` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// The extracted spreadsheet data rows, header stripped.
    pub rows: Vec<ImportRowEntry>,
}

/// One raw spreadsheet row in an import request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRowEntry {
    /// The `Nombre Completo` cell.
    pub name: String,
    /// The `Salario Mensual` cell, unparsed.
    pub salary: String,
    /// The optional `Cédula` cell.
    #[serde(default)]
    pub document_id: Option<String>,
    /// The optional `Cargo` cell.
    #[serde(default)]
    pub position: Option<String>,
}

impl From<ImportRowEntry> for ImportRow {
    fn from(entry: ImportRowEntry) -> Self {
        ImportRow {
            name: entry.name,
            salary: entry.salary,
            document_id: entry.document_id,
            position: entry.position,
        }
    }
}
