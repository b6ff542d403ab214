//! Savings comparison between the traditional and Tikin scenarios.
//!
//! The traditional scenario classifies 100% of compensation as taxable
//! salary; the Tikin scenario applies the user-configured split. Both are
//! computed with the aggregate parafiscal calculator over the same roster
//! and risk level, so the comparison is exact rate-table arithmetic.

use rust_decimal::Decimal;

use crate::config::ContributionRates;
use crate::models::{ArlRiskLevel, Employee, SavingsResult, ScenarioResult};

use super::parafiscales::aggregate_parafiscales;

/// Label of the 100%-salary scenario.
pub const TRADITIONAL_LABEL: &str = "traditional";

/// Label of the configured-split scenario.
pub const TIKIN_LABEL: &str = "tikin";

/// Builds a named scenario snapshot at the given salary percentage.
fn scenario(
    label: &str,
    employees: &[Employee],
    salary_percentage: Decimal,
    risk_level: ArlRiskLevel,
    rates: &ContributionRates,
) -> ScenarioResult {
    let aggregate = aggregate_parafiscales(employees, salary_percentage, risk_level, rates);

    ScenarioResult {
        label: label.to_string(),
        salary_percentage,
        bonus_percentage: Decimal::ONE_HUNDRED - salary_percentage,
        total_salary_base: aggregate.total_salary_base,
        total_bonus_amount: aggregate.total_bonus_amount,
        parafiscales: aggregate.contributions,
    }
}

/// Produces the before/after savings comparison for a roster.
///
/// `monthly_savings` is the difference between the traditional and Tikin
/// contribution totals; it is never negative for any split ≤ 100% because
/// every contribution rate is non-negative. `percentage_reduction` is the
/// savings as a share of the traditional total, defined as 0 for an empty
/// roster (where the traditional total is 0).
///
/// # Arguments
///
/// * `employees` - The roster, in display order
/// * `salary_percentage` - The configured Tikin split, in [0, 100]
/// * `risk_level` - The roster-wide ARL risk classification
/// * `rates` - The configured contribution rates
pub fn compare_scenarios(
    employees: &[Employee],
    salary_percentage: Decimal,
    risk_level: ArlRiskLevel,
    rates: &ContributionRates,
) -> SavingsResult {
    let traditional = scenario(
        TRADITIONAL_LABEL,
        employees,
        Decimal::ONE_HUNDRED,
        risk_level,
        rates,
    );
    let tikin = scenario(TIKIN_LABEL, employees, salary_percentage, risk_level, rates);

    let monthly_savings = traditional.parafiscales.total - tikin.parafiscales.total;
    let percentage_reduction = if traditional.parafiscales.total.is_zero() {
        Decimal::ZERO
    } else {
        monthly_savings / traditional.parafiscales.total * Decimal::ONE_HUNDRED
    };

    SavingsResult {
        monthly_savings,
        percentage_reduction,
        traditional,
        tikin,
    }
}
