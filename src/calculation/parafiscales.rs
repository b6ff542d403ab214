//! Parafiscal contribution calculation.
//!
//! This module provides the innermost calculation layer: given a salary, a
//! salary-percentage split, and the workplace risk level, it computes the
//! taxable salary base and its contribution breakdown. Inputs are validated
//! by the caller; these functions are pure, deterministic, and never fail.

use rust_decimal::Decimal;

use crate::config::ContributionRates;
use crate::models::{
    AggregateParafiscales, ArlRiskLevel, Employee, EmployeeContribution, ParafiscalBreakdown,
};

/// Computes the taxable salary base for a salary and split percentage.
///
/// `salary_base = salary × salary_percentage / 100`. No rounding is applied;
/// the result is an exact `Decimal`.
pub fn salary_base(salary: Decimal, salary_percentage: Decimal) -> Decimal {
    salary * salary_percentage / Decimal::ONE_HUNDRED
}

/// Computes the parafiscal contribution breakdown for one employee's salary.
///
/// Each contribution is `salary_base × rate` with the rates taken from the
/// configured table (health 8.5%, pension 12%, SENA 2%, ICBF 3%, Caja 4%,
/// ARL per risk level). The returned `total` is the exact sum of the six
/// components.
///
/// # Arguments
///
/// * `salary` - The gross monthly salary (non-negative; pre-validated)
/// * `salary_percentage` - Share classified as taxable salary, in [0, 100]
/// * `risk_level` - The roster-wide ARL risk classification
/// * `rates` - The configured contribution rates
///
/// # Examples
///
/// ```
/// use tikin_engine::calculation::compute_breakdown;
/// use tikin_engine::config::ConfigLoader;
/// use tikin_engine::models::ArlRiskLevel;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let breakdown = compute_breakdown(
///     Decimal::from(4_000_000),
///     Decimal::from(70),
///     ArlRiskLevel::I,
///     loader.rates(),
/// );
/// assert_eq!(breakdown.health, Decimal::from(238_000));
/// ```
pub fn compute_breakdown(
    salary: Decimal,
    salary_percentage: Decimal,
    risk_level: ArlRiskLevel,
    rates: &ContributionRates,
) -> ParafiscalBreakdown {
    breakdown_on_base(salary_base(salary, salary_percentage), risk_level, rates)
}

/// Computes the breakdown directly on an already-derived salary base.
fn breakdown_on_base(
    base: Decimal,
    risk_level: ArlRiskLevel,
    rates: &ContributionRates,
) -> ParafiscalBreakdown {
    let health = base * rates.fixed.health;
    let pension = base * rates.fixed.pension;
    let arl = base * rates.arl_rate(risk_level);
    let sena = base * rates.fixed.sena;
    let icbf = base * rates.fixed.icbf;
    let caja = base * rates.fixed.caja;
    let total = health + pension + arl + sena + icbf + caja;

    ParafiscalBreakdown {
        health,
        pension,
        arl,
        sena,
        icbf,
        caja,
        total,
    }
}

/// Sums per-employee contributions across the whole roster.
///
/// For an empty roster this returns the all-zero result; no division occurs
/// anywhere, so there is no boundary failure mode.
///
/// # Arguments
///
/// * `employees` - The roster, in display order
/// * `salary_percentage` - Share classified as taxable salary, in [0, 100]
/// * `risk_level` - The roster-wide ARL risk classification
/// * `rates` - The configured contribution rates
pub fn aggregate_parafiscales(
    employees: &[Employee],
    salary_percentage: Decimal,
    risk_level: ArlRiskLevel,
    rates: &ContributionRates,
) -> AggregateParafiscales {
    let mut total_salary_base = Decimal::ZERO;
    let mut total_bonus_amount = Decimal::ZERO;
    let mut contributions = ParafiscalBreakdown::zero();
    let mut per_employee = Vec::with_capacity(employees.len());

    for employee in employees {
        let base = salary_base(employee.salary, salary_percentage);
        let bonus = employee.salary - base;
        let breakdown = breakdown_on_base(base, risk_level, rates);

        total_salary_base += base;
        total_bonus_amount += bonus;
        contributions.accumulate(&breakdown);

        per_employee.push(EmployeeContribution {
            employee_id: employee.id.clone(),
            salary_base: base,
            bonus_amount: bonus,
            breakdown,
        });
    }

    AggregateParafiscales {
        total_salary_base,
        total_bonus_amount,
        contributions,
        employees: per_employee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> ContributionRates {
        ConfigLoader::builtin().unwrap().rates().clone()
    }

    fn employee(id: &str, salary: &str) -> Employee {
        Employee {
            id: id.to_string(),
            salary: dec(salary),
            name: None,
            document_id: None,
            position: None,
        }
    }

    /// PF-001: the reference scenario from the commercial team.
    #[test]
    fn test_four_million_at_seventy_percent_level_one() {
        let breakdown =
            compute_breakdown(dec("4000000"), dec("70"), ArlRiskLevel::I, &rates());

        assert_eq!(breakdown.health, dec("238000"));
        assert_eq!(breakdown.pension, dec("336000"));
        assert_eq!(breakdown.sena, dec("56000"));
        assert_eq!(breakdown.icbf, dec("84000"));
        assert_eq!(breakdown.caja, dec("112000"));
        assert_eq!(breakdown.arl, dec("14616"));
        assert_eq!(breakdown.total, dec("840616"));
    }

    /// PF-002: total is the exact sum of components.
    #[test]
    fn test_total_equals_sum_of_components() {
        let breakdown =
            compute_breakdown(dec("3217450"), dec("83"), ArlRiskLevel::IV, &rates());

        let sum = breakdown.health
            + breakdown.pension
            + breakdown.arl
            + breakdown.sena
            + breakdown.icbf
            + breakdown.caja;
        assert_eq!(breakdown.total, sum);
    }

    /// PF-003: zero salary produces the zero breakdown.
    #[test]
    fn test_zero_salary_is_all_zero() {
        let breakdown = compute_breakdown(dec("0"), dec("70"), ArlRiskLevel::II, &rates());
        assert_eq!(breakdown, ParafiscalBreakdown::zero());
    }

    /// PF-004: zero percentage produces the zero breakdown.
    #[test]
    fn test_zero_percentage_is_all_zero() {
        let breakdown =
            compute_breakdown(dec("5000000"), dec("0"), ArlRiskLevel::III, &rates());
        assert_eq!(breakdown.total, Decimal::ZERO);
    }

    #[test]
    fn test_salary_base_is_percentage_of_salary() {
        assert_eq!(salary_base(dec("4000000"), dec("70")), dec("2800000"));
        assert_eq!(salary_base(dec("4000000"), dec("100")), dec("4000000"));
    }

    #[test]
    fn test_arl_varies_by_risk_level() {
        let low = compute_breakdown(dec("2000000"), dec("100"), ArlRiskLevel::I, &rates());
        let high = compute_breakdown(dec("2000000"), dec("100"), ArlRiskLevel::V, &rates());

        assert_eq!(low.arl, dec("10440"));
        assert_eq!(high.arl, dec("139200"));
        assert_eq!(low.health, high.health);
        assert!(high.total > low.total);
    }

    /// AG-001: empty roster yields the all-zero aggregate.
    #[test]
    fn test_empty_roster_is_all_zero() {
        let aggregate = aggregate_parafiscales(&[], dec("70"), ArlRiskLevel::I, &rates());

        assert_eq!(aggregate.total_salary_base, Decimal::ZERO);
        assert_eq!(aggregate.total_bonus_amount, Decimal::ZERO);
        assert_eq!(aggregate.contributions, ParafiscalBreakdown::zero());
        assert!(aggregate.employees.is_empty());
    }

    /// AG-002: aggregate sums per-employee breakdowns.
    #[test]
    fn test_aggregate_sums_across_roster() {
        let roster = vec![
            employee("emp_001", "4000000"),
            employee("emp_002", "2000000"),
        ];
        let aggregate = aggregate_parafiscales(&roster, dec("70"), ArlRiskLevel::I, &rates());

        assert_eq!(aggregate.total_salary_base, dec("4200000"));
        assert_eq!(aggregate.total_bonus_amount, dec("1800000"));
        assert_eq!(aggregate.employees.len(), 2);

        let component_sum: Decimal = aggregate
            .employees
            .iter()
            .map(|e| e.breakdown.total)
            .sum();
        assert_eq!(aggregate.contributions.total, component_sum);
    }

    /// AG-003: base plus bonus reconstructs each salary exactly.
    #[test]
    fn test_base_plus_bonus_equals_salary() {
        let roster = vec![employee("emp_001", "3333333")];
        let aggregate = aggregate_parafiscales(&roster, dec("67"), ArlRiskLevel::II, &rates());

        let entry = &aggregate.employees[0];
        assert_eq!(entry.salary_base + entry.bonus_amount, dec("3333333"));
    }

    #[test]
    fn test_aggregate_preserves_roster_order() {
        let roster = vec![
            employee("emp_b", "2000000"),
            employee("emp_a", "2000000"),
        ];
        let aggregate = aggregate_parafiscales(&roster, dec("80"), ArlRiskLevel::I, &rates());

        assert_eq!(aggregate.employees[0].employee_id, "emp_b");
        assert_eq!(aggregate.employees[1].employee_id, "emp_a");
    }

    #[test]
    fn test_aggregate_at_full_salary_has_no_bonus() {
        let roster = vec![employee("emp_001", "4000000")];
        let aggregate = aggregate_parafiscales(&roster, dec("100"), ArlRiskLevel::I, &rates());

        assert_eq!(aggregate.total_bonus_amount, Decimal::ZERO);
        assert_eq!(aggregate.total_salary_base, dec("4000000"));
    }
}
