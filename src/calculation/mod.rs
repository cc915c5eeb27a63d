//! Calculation logic for the levy reduction engine.
//!
//! This module contains the four pure stages of the calculation pipeline:
//! obligation resolution (mandatory headcount, shortfall, bracket selection),
//! levy accrual, supply-ratio and monthly-reduction accrual, and cap
//! resolution, plus the pipeline function composing them into a
//! [`CalculationResult`](crate::models::CalculationResult).

mod caps;
mod levy;
mod obligation;
mod pipeline;
mod supply_ratio;

pub use caps::{CapResolution, resolve_caps};
pub use levy::{LevyAccrualResult, accrue_levy};
pub use obligation::{ObligationResult, resolve_obligation, weighted_headcount};
pub use pipeline::calculate_reduction;
pub use supply_ratio::{
    ReductionAccrualResult, accrue_reduction, monthly_reduction, supply_ratio,
};
