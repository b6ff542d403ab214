//! All-or-nothing bulk import of spreadsheet rows.
//!
//! Cell extraction is the spreadsheet reader's job; by the time rows reach
//! this module they are raw strings from the columns `Nombre Completo`,
//! `Salario Mensual`, and the optional `Cédula` and `Cargo`. The import
//! validates every row and either yields a fully valid set of employees or
//! zero employees plus the complete row-indexed error list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::config::ValidationRules;
use crate::error::{EngineError, EngineResult, RowError};
use crate::models::Employee;

/// One raw data row extracted from an imported spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    /// The `Nombre Completo` cell.
    pub name: String,
    /// The `Salario Mensual` cell, as the reader extracted it.
    pub salary: String,
    /// The optional `Cédula` cell.
    #[serde(default)]
    pub document_id: Option<String>,
    /// The optional `Cargo` cell.
    #[serde(default)]
    pub position: Option<String>,
}

/// Parses a salary cell into a `Decimal`.
///
/// Tolerates a leading currency sign, surrounding whitespace, and comma
/// thousands separators (how exported sheets usually arrive).
fn parse_salary(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Validates one row, returning the parsed salary.
fn validate_row(row: &ImportRow, rules: &ValidationRules) -> Result<Decimal, String> {
    if row.name.trim().is_empty() {
        return Err("missing 'Nombre Completo'".to_string());
    }

    let salary = parse_salary(&row.salary)
        .ok_or_else(|| format!("'Salario Mensual' is not a number: '{}'", row.salary))?;

    if salary <= Decimal::ZERO {
        return Err(format!("'Salario Mensual' must be positive, got {}", salary));
    }
    if salary < rules.legal_minimum_salary {
        return Err(format!(
            "'Salario Mensual' {} is below the legal monthly minimum of {}",
            salary, rules.legal_minimum_salary
        ));
    }

    Ok(salary)
}

/// Imports spreadsheet rows into employees, all-or-nothing.
///
/// Row indices in the error list are 1-based positions within `rows` (the
/// header row never reaches the engine).
///
/// # Errors
///
/// Returns `ImportError` carrying every invalid row if any row fails
/// validation, or a single entry for an empty sheet. On error, zero
/// employees are produced.
///
/// # Examples
///
/// ```
/// use tikin_engine::config::ConfigLoader;
/// use tikin_engine::roster::{ImportRow, import_rows};
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let rows = vec![ImportRow {
///     name: "Ana Torres".to_string(),
///     salary: "4000000".to_string(),
///     document_id: None,
///     position: None,
/// }];
///
/// let employees = import_rows(&rows, loader.validation()).unwrap();
/// assert_eq!(employees.len(), 1);
/// ```
pub fn import_rows(rows: &[ImportRow], rules: &ValidationRules) -> EngineResult<Vec<Employee>> {
    if rows.is_empty() {
        return Err(EngineError::ImportError {
            errors: vec![RowError {
                row: 0,
                message: "the file contains no employee rows".to_string(),
            }],
        });
    }

    let mut errors = Vec::new();
    let mut employees = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        match validate_row(row, rules) {
            Ok(salary) => employees.push(Employee {
                id: Uuid::new_v4().to_string(),
                salary,
                name: Some(row.name.trim().to_string()),
                document_id: row.document_id.clone(),
                position: row.position.clone(),
            }),
            Err(message) => errors.push(RowError {
                row: index + 1,
                message,
            }),
        }
    }

    if errors.is_empty() {
        Ok(employees)
    } else {
        Err(EngineError::ImportError { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> ValidationRules {
        ValidationRules {
            legal_minimum_salary: dec("1423500"),
        }
    }

    fn row(name: &str, salary: &str) -> ImportRow {
        ImportRow {
            name: name.to_string(),
            salary: salary.to_string(),
            document_id: None,
            position: None,
        }
    }

    /// IM-001: a clean sheet imports every row.
    #[test]
    fn test_valid_rows_import_fully() {
        let rows = vec![
            row("Ana Torres", "4000000"),
            row("Luis Prada", "1500000"),
            row("Carla Ruiz", "2750000"),
        ];

        let employees = import_rows(&rows, &rules()).unwrap();
        assert_eq!(employees.len(), 3);
        assert_eq!(employees[0].name.as_deref(), Some("Ana Torres"));
        assert_eq!(employees[0].salary, dec("4000000"));
        assert_eq!(employees[2].salary, dec("2750000"));
    }

    /// IM-002: one bad row fails the whole import.
    #[test]
    fn test_single_bad_row_yields_zero_employees() {
        let rows = vec![
            row("Ana Torres", "4000000"),
            row("Luis Prada", "not-a-number"),
            row("Carla Ruiz", "2750000"),
        ];

        let err = import_rows(&rows, &rules()).unwrap_err();
        match err {
            EngineError::ImportError { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].row, 2);
                assert!(errors[0].message.contains("not a number"));
            }
            other => panic!("Expected ImportError, got {:?}", other),
        }
    }

    /// IM-003: the error list is complete, not first-failure.
    #[test]
    fn test_all_bad_rows_are_reported() {
        let rows = vec![
            row("", "4000000"),
            row("Luis Prada", "-2000000"),
            row("Carla Ruiz", "1000000"),
            row("Jorge León", "2750000"),
        ];

        let err = import_rows(&rows, &rules()).unwrap_err();
        match err {
            EngineError::ImportError { errors } => {
                let rows_with_errors: Vec<_> = errors.iter().map(|e| e.row).collect();
                assert_eq!(rows_with_errors, vec![1, 2, 3]);
            }
            other => panic!("Expected ImportError, got {:?}", other),
        }
    }

    /// IM-004: an empty sheet is an error, not an empty roster.
    #[test]
    fn test_empty_sheet_is_an_error() {
        let err = import_rows(&[], &rules()).unwrap_err();
        match err {
            EngineError::ImportError { errors } => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].message.contains("no employee rows"));
            }
            other => panic!("Expected ImportError, got {:?}", other),
        }
    }

    #[test]
    fn test_salary_parsing_tolerates_formatting() {
        let rows = vec![
            row("Ana Torres", " $4,000,000 "),
            row("Luis Prada", "1500000.00"),
        ];

        let employees = import_rows(&rows, &rules()).unwrap();
        assert_eq!(employees[0].salary, dec("4000000"));
        assert_eq!(employees[1].salary, dec("1500000.00"));
    }

    #[test]
    fn test_optional_columns_are_carried_through() {
        let rows = vec![ImportRow {
            name: "Ana Torres".to_string(),
            salary: "4000000".to_string(),
            document_id: Some("1020304050".to_string()),
            position: Some("Analista".to_string()),
        }];

        let employees = import_rows(&rows, &rules()).unwrap();
        assert_eq!(employees[0].document_id.as_deref(), Some("1020304050"));
        assert_eq!(employees[0].position.as_deref(), Some("Analista"));
    }

    #[test]
    fn test_name_is_trimmed() {
        let rows = vec![row("  Ana Torres  ", "4000000")];
        let employees = import_rows(&rows, &rules()).unwrap();
        assert_eq!(employees[0].name.as_deref(), Some("Ana Torres"));
    }

    #[test]
    fn test_rejects_zero_salary_row() {
        let rows = vec![row("Ana Torres", "0")];
        let err = import_rows(&rows, &rules()).unwrap_err();
        assert!(matches!(err, EngineError::ImportError { .. }));
    }

    #[test]
    fn test_imported_employees_get_unique_ids() {
        let rows = vec![
            row("Ana Torres", "4000000"),
            row("Luis Prada", "4000000"),
        ];

        let employees = import_rows(&rows, &rules()).unwrap();
        assert_ne!(employees[0].id, employees[1].id);
    }
}
