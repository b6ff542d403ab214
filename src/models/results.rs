//! Calculation result models for the Parafiscal Savings Engine.
//!
//! This module contains the value objects produced by the calculation
//! functions: per-employee and aggregate contribution breakdowns, the
//! traditional-vs-Tikin scenario comparison, and the tiered commission.
//! All amounts are exact [`Decimal`]s; display rounding is a presentation
//! concern and never happens here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The six employer parafiscal contributions for one salary base.
///
/// The invariant `total == health + pension + arl + sena + icbf + caja`
/// holds exactly for every breakdown the engine produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParafiscalBreakdown {
    /// Health contribution (8.5% of the salary base).
    pub health: Decimal,
    /// Pension contribution (12%).
    pub pension: Decimal,
    /// Occupational risk insurance, rate set by the roster's risk level.
    pub arl: Decimal,
    /// SENA apprenticeship contribution (2%).
    pub sena: Decimal,
    /// ICBF family-welfare contribution (3%).
    pub icbf: Decimal,
    /// Caja de Compensación contribution (4%).
    pub caja: Decimal,
    /// Exact sum of the six components above.
    pub total: Decimal,
}

impl ParafiscalBreakdown {
    /// The all-zero breakdown, returned for an empty roster.
    pub fn zero() -> Self {
        Self {
            health: Decimal::ZERO,
            pension: Decimal::ZERO,
            arl: Decimal::ZERO,
            sena: Decimal::ZERO,
            icbf: Decimal::ZERO,
            caja: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Adds another breakdown into this one, component by component.
    pub fn accumulate(&mut self, other: &ParafiscalBreakdown) {
        self.health += other.health;
        self.pension += other.pension;
        self.arl += other.arl;
        self.sena += other.sena;
        self.icbf += other.icbf;
        self.caja += other.caja;
        self.total += other.total;
    }
}

/// One employee's share of the aggregate contribution calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeContribution {
    /// The ID of the employee this breakdown belongs to.
    pub employee_id: String,
    /// The taxable salary base after the split (`salary × pct / 100`).
    pub salary_base: Decimal,
    /// The untaxed bonus portion (`salary − salary_base`).
    pub bonus_amount: Decimal,
    /// The contribution breakdown on the salary base.
    pub breakdown: ParafiscalBreakdown,
}

/// The roster-wide contribution calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateParafiscales {
    /// Sum of every employee's taxable salary base.
    pub total_salary_base: Decimal,
    /// Sum of every employee's untaxed bonus portion.
    pub total_bonus_amount: Decimal,
    /// Component-wise sum of every employee's breakdown.
    pub contributions: ParafiscalBreakdown,
    /// The per-employee breakdowns, in roster order.
    pub employees: Vec<EmployeeContribution>,
}

/// A named snapshot of the roster calculated at one salary percentage.
///
/// Two of these make up a [`SavingsResult`]: the "traditional" scenario at
/// 100% salary and the "tikin" scenario at the configured split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario label ("traditional" or "tikin").
    pub label: String,
    /// Share of compensation classified as taxable salary, in [0, 100].
    pub salary_percentage: Decimal,
    /// Share of compensation classified as untaxed bonus (`100 − salary`).
    pub bonus_percentage: Decimal,
    /// Roster-wide taxable salary base under this scenario.
    pub total_salary_base: Decimal,
    /// Roster-wide untaxed bonus amount under this scenario.
    pub total_bonus_amount: Decimal,
    /// The aggregate contribution breakdown under this scenario.
    pub parafiscales: ParafiscalBreakdown,
}

/// The before/after comparison between the traditional and Tikin scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    /// `traditional.parafiscales.total − tikin.parafiscales.total`.
    ///
    /// Never negative for any split ≤ 100%.
    pub monthly_savings: Decimal,
    /// Savings as a percentage of the traditional total; 0 when the
    /// traditional total is 0 (empty roster).
    pub percentage_reduction: Decimal,
    /// The 100%-salary scenario.
    pub traditional: ScenarioResult,
    /// The scenario at the configured salary split.
    pub tikin: ScenarioResult,
}

/// Tikin's service fee for a quotation, derived from the aggregate monthly
/// bonus volume via the tiered commission schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TikinCommission {
    /// The selected tier level (1–4 for new quotations).
    pub level: u8,
    /// The tier's fee rate as a decimal fraction (e.g. `0.035`).
    pub percentage: Decimal,
    /// The aggregate monthly bonus the fee was computed from.
    pub monthly_bonus_total: Decimal,
    /// `monthly_bonus_total × percentage`.
    pub base_commission: Decimal,
    /// VAT at 19% of the base commission.
    pub iva: Decimal,
    /// `base_commission + iva`.
    pub total_cost: Decimal,
}
