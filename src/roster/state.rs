//! The immutably-replaced roster container and entry-point validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ValidationRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeDraft};

/// Validates a salary at the roster entry boundary.
///
/// Rejects non-positive salaries and salaries below the configured legal
/// monthly minimum. The calculation core itself accepts any non-negative
/// salary; this check exists so quotations are only built from salaries
/// that could legally be paid.
///
/// # Errors
///
/// Returns `InvalidSalary` with a human-readable message.
pub fn validate_salary(salary: Decimal, rules: &ValidationRules) -> EngineResult<()> {
    if salary <= Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            message: format!("salary must be positive, got {}", salary),
        });
    }
    if salary < rules.legal_minimum_salary {
        return Err(EngineError::InvalidSalary {
            message: format!(
                "salary {} is below the legal monthly minimum of {}",
                salary, rules.legal_minimum_salary
            ),
        });
    }
    Ok(())
}

/// The employee roster for one quotation session.
///
/// All mutating operations take `&self` and return a fresh `Roster`; the
/// original is never touched. Insertion order is preserved for display but
/// carries no semantic weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster from already-validated employees (e.g. an import).
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Returns the employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns the sum of all gross salaries.
    pub fn total_payroll(&self) -> Decimal {
        self.employees.iter().map(|e| e.salary).sum()
    }

    /// Adds one employee, returning the new roster.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSalary` if the draft's salary fails validation.
    pub fn add(&self, draft: EmployeeDraft, rules: &ValidationRules) -> EngineResult<Roster> {
        validate_salary(draft.salary, rules)?;

        let mut employees = self.employees.clone();
        employees.push(Employee {
            id: Uuid::new_v4().to_string(),
            salary: draft.salary,
            name: draft.name,
            document_id: draft.document_id,
            position: draft.position,
        });

        Ok(Roster { employees })
    }

    /// Adds `count` employees with the same salary, returning the new roster.
    ///
    /// Each employee gets its own ID; the bulk add is just a shortcut for
    /// repeated single adds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCount` if `count` is zero, or `InvalidSalary` if the
    /// salary fails validation (in which case no employees are added).
    pub fn add_bulk(
        &self,
        count: u32,
        salary: Decimal,
        rules: &ValidationRules,
    ) -> EngineResult<Roster> {
        if count < 1 {
            return Err(EngineError::InvalidCount { count });
        }
        validate_salary(salary, rules)?;

        let mut employees = self.employees.clone();
        employees.extend((0..count).map(|_| Employee {
            id: Uuid::new_v4().to_string(),
            salary,
            name: None,
            document_id: None,
            position: None,
        }));

        Ok(Roster { employees })
    }

    /// Removes the employee with the given ID, returning the new roster.
    ///
    /// Removing an absent ID is a no-op.
    pub fn remove(&self, id: &str) -> Roster {
        Roster {
            employees: self
                .employees
                .iter()
                .filter(|e| e.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Removes every employee with exactly this salary, returning the new
    /// roster. This undoes a bulk add of identical-salary records.
    pub fn remove_salary_group(&self, salary: Decimal) -> Roster {
        Roster {
            employees: self
                .employees
                .iter()
                .filter(|e| e.salary != salary)
                .cloned()
                .collect(),
        }
    }

    /// Replaces an employee's salary, returning the new roster.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no employee has the given ID, or
    /// `InvalidSalary` if the new salary fails validation.
    pub fn update_salary(
        &self,
        id: &str,
        salary: Decimal,
        rules: &ValidationRules,
    ) -> EngineResult<Roster> {
        validate_salary(salary, rules)?;
        self.update(id, |employee| employee.salary = salary)
    }

    /// Replaces an employee's display name, returning the new roster.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no employee has the given ID.
    pub fn update_name(&self, id: &str, name: Option<String>) -> EngineResult<Roster> {
        self.update(id, |employee| employee.name = name.clone())
    }

    fn update<F>(&self, id: &str, mut apply: F) -> EngineResult<Roster>
    where
        F: FnMut(&mut Employee),
    {
        if !self.employees.iter().any(|e| e.id == id) {
            return Err(EngineError::EmployeeNotFound { id: id.to_string() });
        }

        let mut employees = self.employees.clone();
        for employee in employees.iter_mut().filter(|e| e.id == id) {
            apply(employee);
        }

        Ok(Roster { employees })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> ValidationRules {
        ValidationRules {
            legal_minimum_salary: dec("1423500"),
        }
    }

    fn draft(salary: &str) -> EmployeeDraft {
        EmployeeDraft::with_salary(dec(salary))
    }

    #[test]
    fn test_add_returns_new_roster_and_preserves_original() {
        let empty = Roster::new();
        let one = empty.add(draft("2000000"), &rules()).unwrap();

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(one.employees()[0].salary, dec("2000000"));
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let roster = Roster::new()
            .add(draft("2000000"), &rules())
            .unwrap()
            .add(draft("2000000"), &rules())
            .unwrap();

        assert_ne!(roster.employees()[0].id, roster.employees()[1].id);
    }

    #[test]
    fn test_add_rejects_negative_salary() {
        let result = Roster::new().add(draft("-100"), &rules());
        assert!(matches!(result, Err(EngineError::InvalidSalary { .. })));
    }

    #[test]
    fn test_add_rejects_zero_salary() {
        let result = Roster::new().add(draft("0"), &rules());
        assert!(matches!(result, Err(EngineError::InvalidSalary { .. })));
    }

    #[test]
    fn test_add_rejects_salary_below_legal_minimum() {
        let result = Roster::new().add(draft("1423499"), &rules());
        assert!(matches!(result, Err(EngineError::InvalidSalary { .. })));
    }

    #[test]
    fn test_add_accepts_salary_at_legal_minimum() {
        let roster = Roster::new().add(draft("1423500"), &rules()).unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_add_bulk_creates_identical_salaries_with_own_ids() {
        let roster = Roster::new()
            .add_bulk(5, dec("1800000"), &rules())
            .unwrap();

        assert_eq!(roster.len(), 5);
        assert!(roster.employees().iter().all(|e| e.salary == dec("1800000")));

        let mut ids: Vec<_> = roster.employees().iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_add_bulk_rejects_zero_count() {
        let result = Roster::new().add_bulk(0, dec("2000000"), &rules());
        assert!(matches!(result, Err(EngineError::InvalidCount { count: 0 })));
    }

    #[test]
    fn test_add_bulk_rejects_bad_salary_adding_nothing() {
        let roster = Roster::new().add(draft("2000000"), &rules()).unwrap();
        let result = roster.add_bulk(3, dec("100"), &rules());

        assert!(matches!(result, Err(EngineError::InvalidSalary { .. })));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let roster = Roster::new()
            .add(draft("2000000"), &rules())
            .unwrap()
            .add(draft("3000000"), &rules())
            .unwrap();
        let id = roster.employees()[0].id.clone();

        let smaller = roster.remove(&id);
        assert_eq!(smaller.len(), 1);
        assert_eq!(roster.len(), 2);
        assert!(smaller.employees().iter().all(|e| e.id != id));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let roster = Roster::new().add(draft("2000000"), &rules()).unwrap();
        let same = roster.remove("no-such-id");
        assert_eq!(same.len(), 1);
    }

    #[test]
    fn test_remove_salary_group() {
        let roster = Roster::new()
            .add_bulk(4, dec("1800000"), &rules())
            .unwrap()
            .add(draft("3000000"), &rules())
            .unwrap();

        let remaining = roster.remove_salary_group(dec("1800000"));
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.employees()[0].salary, dec("3000000"));
    }

    #[test]
    fn test_update_salary() {
        let roster = Roster::new().add(draft("2000000"), &rules()).unwrap();
        let id = roster.employees()[0].id.clone();

        let updated = roster.update_salary(&id, dec("2500000"), &rules()).unwrap();
        assert_eq!(updated.employees()[0].salary, dec("2500000"));
        assert_eq!(roster.employees()[0].salary, dec("2000000"));
    }

    #[test]
    fn test_update_salary_validates() {
        let roster = Roster::new().add(draft("2000000"), &rules()).unwrap();
        let id = roster.employees()[0].id.clone();

        let result = roster.update_salary(&id, dec("-1"), &rules());
        assert!(matches!(result, Err(EngineError::InvalidSalary { .. })));
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let roster = Roster::new().add(draft("2000000"), &rules()).unwrap();

        let result = roster.update_salary("missing", dec("2500000"), &rules());
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { .. })));
    }

    #[test]
    fn test_update_name() {
        let roster = Roster::new().add(draft("2000000"), &rules()).unwrap();
        let id = roster.employees()[0].id.clone();

        let named = roster
            .update_name(&id, Some("Carla Ruiz".to_string()))
            .unwrap();
        assert_eq!(named.employees()[0].name.as_deref(), Some("Carla Ruiz"));
        assert!(roster.employees()[0].name.is_none());
    }

    #[test]
    fn test_total_payroll() {
        let roster = Roster::new()
            .add(draft("2000000"), &rules())
            .unwrap()
            .add(draft("3500000"), &rules())
            .unwrap();

        assert_eq!(roster.total_payroll(), dec("5500000"));
        assert_eq!(Roster::new().total_payroll(), Decimal::ZERO);
    }

    #[test]
    fn test_validate_salary_messages() {
        let err = validate_salary(dec("-5"), &rules()).unwrap_err();
        assert!(err.to_string().contains("must be positive"));

        let err = validate_salary(dec("1000000"), &rules()).unwrap_err();
        assert!(err.to_string().contains("legal monthly minimum"));
    }
}
