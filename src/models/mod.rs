//! Core data models for the levy reduction engine.
//!
//! This module contains the input and output value types used throughout
//! the engine. All inputs are immutable per calculation; the result has no
//! identity or lifecycle beyond the call that produced it.

mod calculation_result;
mod company;
mod contract;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, BindingCap, BracketLabel, CalculationResult,
};
pub use company::{CompanyProfile, EmployerCategory};
pub use contract::{GovernmentAdjustment, MonthlyWorkers, PartnerContract};
