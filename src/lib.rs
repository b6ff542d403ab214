//! Parafiscal Savings Engine for Colombian payroll ("Tikin")
//!
//! This crate provides functionality for estimating the parafiscal
//! contributions (health, pension, ARL, SENA, ICBF, Caja) a Colombian
//! employer owes for a roster of employees, the monthly savings produced
//! by restructuring part of each salary as a non-salary bonus, and the
//! tiered commission Tikin charges for that service.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
