//! Partner contract and government adjustment models.
//!
//! This module defines the [`PartnerContract`] struct describing the
//! disability-standard workplace the company contracts work to, and the
//! optional [`GovernmentAdjustment`] consumed for government employers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Partner worker counts for a single month.
///
/// Supplied when the partner workforce varies across the year; otherwise the
/// annual reduction assumes twelve identical months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyWorkers {
    /// Disabled workers employed by the partner that month, severe included.
    pub disabled_workers: u32,
    /// Severely disabled workers that month, each counted twice.
    pub severe_disabled_workers: u32,
}

/// The contract-side facts of a reduction calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerContract {
    /// The partner workplace's annual total revenue in won. May be 0; the
    /// supply ratio is then defined as 0 rather than an error.
    pub partner_annual_revenue: i64,
    /// The consideration paid to the partner workplace in won.
    pub contract_amount: i64,
    /// Disabled workers employed by the partner, severe included.
    pub partner_disabled_workers: u32,
    /// Severely disabled workers at the partner, each counted twice.
    pub partner_severe_disabled_workers: u32,
    /// Optional 12-month schedule of partner worker counts. When present it
    /// replaces the flat `partner_disabled_workers` counts month by month.
    #[serde(default)]
    pub monthly_workers: Option<Vec<MonthlyWorkers>>,
}

impl PartnerContract {
    /// Validates internal consistency of the contract facts.
    pub fn validate(&self) -> EngineResult<()> {
        if self.partner_annual_revenue < 0 {
            return Err(EngineError::InvalidInput {
                field: "partner_annual_revenue".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.contract_amount < 0 {
            return Err(EngineError::InvalidInput {
                field: "contract_amount".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.partner_severe_disabled_workers > self.partner_disabled_workers {
            return Err(EngineError::InvalidInput {
                field: "partner_severe_disabled_workers".to_string(),
                message: format!(
                    "{} exceeds partner_disabled_workers {}",
                    self.partner_severe_disabled_workers, self.partner_disabled_workers
                ),
            });
        }
        if let Some(schedule) = &self.monthly_workers {
            if schedule.len() != 12 {
                return Err(EngineError::InvalidInput {
                    field: "monthly_workers".to_string(),
                    message: format!("schedule must cover 12 months, got {}", schedule.len()),
                });
            }
            for (month, workers) in schedule.iter().enumerate() {
                if workers.severe_disabled_workers > workers.disabled_workers {
                    return Err(EngineError::InvalidInput {
                        field: format!("monthly_workers[{}]", month),
                        message: format!(
                            "severe_disabled_workers {} exceeds disabled_workers {}",
                            workers.severe_disabled_workers, workers.disabled_workers
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Extra facts consumed only for government employers.
///
/// The excess of actual priority procurement over the target caps the
/// contract amount usable in the reduction formula. The two disabled-rate
/// fields are informational and carried without being consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentAdjustment {
    /// Disabled employment rate in December of the prior year. Informational.
    #[serde(default)]
    pub prior_year_disabled_rate: Option<Decimal>,
    /// Disabled employment rate in December of the current year. Informational.
    #[serde(default)]
    pub current_year_disabled_rate: Option<Decimal>,
    /// Priority procurement target in won (우선구매목표).
    pub procurement_target: i64,
    /// Actual priority procurement in won (우선구매실적).
    pub procurement_actual: i64,
}

impl GovernmentAdjustment {
    /// Validates internal consistency of the adjustment.
    pub fn validate(&self) -> EngineResult<()> {
        if self.procurement_target < 0 {
            return Err(EngineError::InvalidInput {
                field: "procurement_target".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.procurement_actual < 0 {
            return Err(EngineError::InvalidInput {
                field: "procurement_actual".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Excess of actual procurement over the target, floored at 0.
    pub fn procurement_excess(&self) -> i64 {
        (self.procurement_actual - self.procurement_target).max(0)
    }
}
