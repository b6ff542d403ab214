//! Calculation logic for the Parafiscal Savings Engine.
//!
//! This module contains the pure calculation functions: the per-employee
//! and aggregate parafiscal contribution breakdown, the traditional-vs-Tikin
//! savings comparison, the tiered commission computation, and the clamped
//! salary-split percentage controller.

mod commission;
mod parafiscales;
mod savings;
mod split;

pub use commission::calculate_commission;
pub use parafiscales::{aggregate_parafiscales, compute_breakdown, salary_base};
pub use savings::{TIKIN_LABEL, TRADITIONAL_LABEL, compare_scenarios};
pub use split::SplitPercentage;
