//! Configuration types for the parafiscal rate tables.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML rate files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::ArlRiskLevel;

/// Metadata about the loaded rate schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective year of the rates.
    pub version: String,
    /// URL to the legal source of the rates.
    pub source_url: String,
}

/// The five fixed employer contribution rates (ARL is separate because it
/// varies by risk level).
#[derive(Debug, Clone, Deserialize)]
pub struct FixedContributionRates {
    /// Health contribution rate (8.5%).
    pub health: Decimal,
    /// Pension contribution rate (12%).
    pub pension: Decimal,
    /// SENA contribution rate (2%).
    pub sena: Decimal,
    /// ICBF contribution rate (3%).
    pub icbf: Decimal,
    /// Caja de Compensación contribution rate (4%).
    pub caja: Decimal,
}

/// ARL contribution rates, one per workplace risk level.
///
/// Every level is a required field, so a loaded configuration can never be
/// missing a rate and lookups are infallible.
#[derive(Debug, Clone, Deserialize)]
pub struct ArlRates {
    /// Rate for risk level I (0.522%).
    #[serde(rename = "I")]
    pub level_i: Decimal,
    /// Rate for risk level II (1.044%).
    #[serde(rename = "II")]
    pub level_ii: Decimal,
    /// Rate for risk level III (2.436%).
    #[serde(rename = "III")]
    pub level_iii: Decimal,
    /// Rate for risk level IV (4.350%).
    #[serde(rename = "IV")]
    pub level_iv: Decimal,
    /// Rate for risk level V (6.960%).
    #[serde(rename = "V")]
    pub level_v: Decimal,
}

impl ArlRates {
    /// Returns the ARL rate for the given risk level.
    pub fn rate_for(&self, level: ArlRiskLevel) -> Decimal {
        match level {
            ArlRiskLevel::I => self.level_i,
            ArlRiskLevel::II => self.level_ii,
            ArlRiskLevel::III => self.level_iii,
            ArlRiskLevel::IV => self.level_iv,
            ArlRiskLevel::V => self.level_v,
        }
    }
}

/// The inclusive bounds for the salary-split percentage.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitBounds {
    /// The lowest salary percentage a user may configure.
    pub min_percentage: Decimal,
    /// The highest salary percentage a user may configure.
    pub max_percentage: Decimal,
}

/// Validation rules applied at the roster entry boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationRules {
    /// The legal monthly minimum salary (SMLMV); lower salaries are rejected.
    pub legal_minimum_salary: Decimal,
}

/// The complete set of contribution rates used by the calculator.
#[derive(Debug, Clone)]
pub struct ContributionRates {
    /// The five fixed rates.
    pub fixed: FixedContributionRates,
    /// The per-risk-level ARL rates.
    pub arl: ArlRates,
}

impl ContributionRates {
    /// Returns the ARL rate for the given risk level.
    pub fn arl_rate(&self, level: ArlRiskLevel) -> Decimal {
        self.arl.rate_for(level)
    }

    /// Returns the combined contribution rate for the given risk level.
    ///
    /// This is the fraction of the salary base owed in total, i.e. the sum
    /// of the five fixed rates plus the level's ARL rate.
    pub fn combined_rate(&self, level: ArlRiskLevel) -> Decimal {
        self.fixed.health
            + self.fixed.pension
            + self.fixed.sena
            + self.fixed.icbf
            + self.fixed.caja
            + self.arl_rate(level)
    }
}

/// `rates.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesFile {
    /// Schedule metadata.
    pub schedule: ScheduleMetadata,
    /// The five fixed contribution rates.
    pub contributions: FixedContributionRates,
    /// The per-risk-level ARL rates.
    pub arl: ArlRates,
    /// Salary-split percentage bounds.
    pub split: SplitBounds,
    /// Roster entry validation rules.
    pub validation: ValidationRules,
}

/// One band of the commission schedule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommissionTier {
    /// Tier level (1–4 for new quotations, 5 for tenured clients).
    pub level: u8,
    /// Inclusive lower bound of the band, in COP.
    pub min: Decimal,
    /// Exclusive upper bound of the band; `None` for the open-ended top tier.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// The fee rate for this band, as a decimal fraction.
    pub percentage: Decimal,
    /// Whether this tier applies only to tenured clients. Tenured tiers are
    /// never selected when pricing a new quotation.
    #[serde(default)]
    pub tenured_only: bool,
}

/// `commission.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionFile {
    /// VAT rate applied to the base commission.
    pub iva_rate: Decimal,
    /// The commission bands, low to high.
    pub tiers: Vec<CommissionTier>,
}

/// The validated commission schedule used to price quotations.
///
/// Band membership is evaluated by ordered range checks over the bounded
/// tiers and falls through to the open-ended catch-all, so any volume at or
/// above the catch-all's minimum always lands on it.
#[derive(Debug, Clone)]
pub struct CommissionSchedule {
    bounded: Vec<CommissionTier>,
    catch_all: CommissionTier,
    tenured: Vec<CommissionTier>,
    iva_rate: Decimal,
}

impl CommissionSchedule {
    /// Builds a schedule from a parsed `commission.yaml`, validating its
    /// structure.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the new-quotation tiers are empty, if
    /// any tier other than the last is open-ended, or if the last one is not.
    pub fn from_file(file: CommissionFile, path: &str) -> EngineResult<Self> {
        let (tenured, mut new_tiers): (Vec<_>, Vec<_>) =
            file.tiers.into_iter().partition(|t| t.tenured_only);

        new_tiers.sort_by(|a, b| a.level.cmp(&b.level));

        let catch_all = match new_tiers.pop() {
            Some(tier) if tier.max.is_none() => tier,
            Some(tier) => {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!(
                        "top new-quotation tier (level {}) must be open-ended",
                        tier.level
                    ),
                });
            }
            None => {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: "commission schedule has no new-quotation tiers".to_string(),
                });
            }
        };

        if let Some(unbounded) = new_tiers.iter().find(|t| t.max.is_none()) {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "only the top tier may be open-ended, but level {} has no max",
                    unbounded.level
                ),
            });
        }

        Ok(Self {
            bounded: new_tiers,
            catch_all,
            tenured,
            iva_rate: file.iva_rate,
        })
    }

    /// Selects the tier for a new quotation with the given aggregate monthly
    /// bonus volume.
    ///
    /// Bounded tiers are checked in ascending level order; anything at or
    /// above the catch-all's minimum lands on the catch-all. Tenured-only
    /// tiers are never considered here.
    pub fn tier_for_new_quotation(&self, monthly_bonus_total: Decimal) -> &CommissionTier {
        self.bounded
            .iter()
            .find(|tier| tier.max.is_some_and(|max| monthly_bonus_total < max))
            .unwrap_or(&self.catch_all)
    }

    /// Returns the VAT rate applied to base commissions.
    pub fn iva_rate(&self) -> Decimal {
        self.iva_rate
    }

    /// Returns the tenured-client tiers present in the rate table.
    pub fn tenured_tiers(&self) -> &[CommissionTier] {
        &self.tenured
    }
}

/// The complete engine configuration assembled from the YAML rate files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    schedule: ScheduleMetadata,
    rates: ContributionRates,
    split: SplitBounds,
    validation: ValidationRules,
    commission: CommissionSchedule,
}

impl EngineConfig {
    /// Assembles a configuration from its parsed file parts, validating
    /// cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the split bounds are inverted.
    pub fn new(rates_file: RatesFile, commission: CommissionSchedule) -> EngineResult<Self> {
        if rates_file.split.min_percentage > rates_file.split.max_percentage {
            return Err(EngineError::ConfigParseError {
                path: "rates.yaml".to_string(),
                message: format!(
                    "split min_percentage {} exceeds max_percentage {}",
                    rates_file.split.min_percentage, rates_file.split.max_percentage
                ),
            });
        }

        Ok(Self {
            schedule: rates_file.schedule,
            rates: ContributionRates {
                fixed: rates_file.contributions,
                arl: rates_file.arl,
            },
            split: rates_file.split,
            validation: rates_file.validation,
            commission,
        })
    }

    /// Returns the schedule metadata.
    pub fn schedule(&self) -> &ScheduleMetadata {
        &self.schedule
    }

    /// Returns the contribution rates.
    pub fn rates(&self) -> &ContributionRates {
        &self.rates
    }

    /// Returns the salary-split bounds.
    pub fn split(&self) -> &SplitBounds {
        &self.split
    }

    /// Returns the roster validation rules.
    pub fn validation(&self) -> &ValidationRules {
        &self.validation
    }

    /// Returns the commission schedule.
    pub fn commission(&self) -> &CommissionSchedule {
        &self.commission
    }
}
