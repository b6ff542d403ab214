//! Tikin commission calculation.
//!
//! Tikin's service fee is a tiered percentage of the aggregate monthly bonus
//! volume. The tier comes from the configured [`CommissionSchedule`]; VAT is
//! added on top of the base commission.

use rust_decimal::Decimal;

use crate::config::CommissionSchedule;
use crate::models::TikinCommission;

/// Computes the commission for a new quotation.
///
/// The tier is selected from the schedule's new-quotation bands (the
/// tenured-client tier in the rate table is never considered here), then:
/// `base_commission = monthly_bonus_total × percentage`,
/// `iva = base_commission × iva_rate`, and
/// `total_cost = base_commission + iva`.
///
/// A zero bonus volume yields the level-1 tier with all monetary fields zero.
///
/// # Examples
///
/// ```
/// use tikin_engine::calculation::calculate_commission;
/// use tikin_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let commission = calculate_commission(Decimal::from(90_000_000), loader.commission());
/// assert_eq!(commission.level, 2);
/// assert_eq!(commission.total_cost, Decimal::from(3_748_500));
/// ```
pub fn calculate_commission(
    monthly_bonus_total: Decimal,
    schedule: &CommissionSchedule,
) -> TikinCommission {
    let tier = schedule.tier_for_new_quotation(monthly_bonus_total);
    let base_commission = monthly_bonus_total * tier.percentage;
    let iva = base_commission * schedule.iva_rate();

    TikinCommission {
        level: tier.level,
        percentage: tier.percentage,
        monthly_bonus_total,
        base_commission,
        iva,
        total_cost: base_commission + iva,
    }
}
