//! Data models for the Parafiscal Savings Engine.

mod employee;
mod results;
mod risk;

pub use employee::{Employee, EmployeeDraft};
pub use results::{
    AggregateParafiscales, EmployeeContribution, ParafiscalBreakdown, SavingsResult,
    ScenarioResult, TikinCommission,
};
pub use risk::ArlRiskLevel;
