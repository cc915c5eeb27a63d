//! Supply-ratio and monthly-reduction accrual.
//!
//! The supply ratio allocates the partner workplace's disabled workforce to
//! the contracting company in proportion to the contract amount's share of
//! the partner's revenue. The monthly reduction is truncated to the 10-won
//! unit per Korean currency convention: amounts below 10 won are dropped,
//! never rounded up.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning, PartnerContract};

use super::obligation::weighted_headcount;

/// Basis-point denominator for supply ratio truncation.
const RATIO_SCALE: i64 = 10_000;

/// The result of accruing the reduction, including the audit step.
#[derive(Debug, Clone)]
pub struct ReductionAccrualResult {
    /// Partner disabled headcount with severe workers counted twice.
    pub weighted_partner_workers: u32,
    /// Contract amount over partner revenue, truncated to 4 decimal places.
    pub supply_ratio: Decimal,
    /// Per-month reduction in won. With a 12-month schedule this is the
    /// first month's value.
    pub monthly_reduction: i64,
    /// Annual reduction before caps.
    pub annual_reduction: i64,
    /// The audit step recording this accrual.
    pub audit_step: AuditStep,
    /// Warning emitted for the zero-revenue degenerate case.
    pub warning: Option<AuditWarning>,
}

/// Computes the supply ratio: `floor((contract / revenue) × 10000) / 10000`.
///
/// Truncated to basis-point granularity. A revenue of 0 yields a ratio of 0
/// by definition; this is a guard against division by zero, not an error.
///
/// # Examples
///
/// ```
/// use levy_engine::calculation::supply_ratio;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     supply_ratio(30_000_000, 300_000_000),
///     Decimal::from_str("0.1").unwrap()
/// );
/// assert_eq!(supply_ratio(30_000_000, 0), Decimal::ZERO);
/// ```
pub fn supply_ratio(contract_amount: i64, partner_annual_revenue: i64) -> Decimal {
    if partner_annual_revenue == 0 {
        return Decimal::ZERO;
    }

    let scale = Decimal::from(RATIO_SCALE);
    (((Decimal::from(contract_amount) / Decimal::from(partner_annual_revenue)) * scale).floor()
        / scale)
        .normalize()
}

/// Computes the per-month reduction, truncated to the 10-won unit:
/// `floor((weighted_workers × ratio × base_rate) / 10) × 10`.
///
/// # Errors
///
/// Returns `CalculationError` if the product overflows the won range, which
/// only happens with contract amounts far beyond any real engagement.
pub fn monthly_reduction(
    weighted_workers: u32,
    ratio: Decimal,
    base_rate: i64,
) -> EngineResult<i64> {
    let ten = Decimal::from(10);
    let raw = Decimal::from(weighted_workers)
        .checked_mul(ratio)
        .and_then(|v| v.checked_mul(Decimal::from(base_rate)))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "monthly reduction product {} x {} x {} exceeds the won range",
                weighted_workers, ratio, base_rate
            ),
        })?;
    let truncated = (raw / ten).floor() * ten;

    truncated
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("monthly reduction {} exceeds the won range", truncated),
        })
}

fn annual_overflow(monthly: i64) -> EngineError {
    EngineError::CalculationError {
        message: format!(
            "annual reduction exceeds the won range at {} won/month",
            monthly
        ),
    }
}

/// Accrues the reduction for a contract at a given base rate.
///
/// `contract_amount` is passed separately from the contract because the
/// government excess-procurement adjustment re-runs this accrual with a
/// substituted amount while the contract facts stay the same.
///
/// Without a monthly schedule all twelve months are identical and the annual
/// reduction is `monthly × 12`; with a schedule it is the sum of the twelve
/// per-month reductions, and the schedule's counts replace the flat partner
/// counts.
pub fn accrue_reduction(
    contract: &PartnerContract,
    contract_amount: i64,
    base_rate: i64,
    step_number: u32,
) -> EngineResult<ReductionAccrualResult> {
    let ratio = supply_ratio(contract_amount, contract.partner_annual_revenue);

    let warning = if contract.partner_annual_revenue == 0 {
        Some(AuditWarning {
            code: "ZERO_REVENUE".to_string(),
            message: "partner annual revenue is 0; supply ratio defined as 0".to_string(),
        })
    } else {
        None
    };

    let (weighted_partner_workers, monthly, annual) = match &contract.monthly_workers {
        Some(schedule) => {
            let mut monthly_values = Vec::with_capacity(schedule.len());
            for workers in schedule {
                let weighted =
                    weighted_headcount(workers.disabled_workers, workers.severe_disabled_workers);
                monthly_values.push(monthly_reduction(weighted, ratio, base_rate)?);
            }
            let mut annual = 0i64;
            for monthly in &monthly_values {
                annual = annual
                    .checked_add(*monthly)
                    .ok_or_else(|| annual_overflow(*monthly))?;
            }
            let first_weighted = schedule
                .first()
                .map(|w| weighted_headcount(w.disabled_workers, w.severe_disabled_workers))
                .unwrap_or(0);
            let first_monthly = monthly_values.first().copied().unwrap_or(0);
            (first_weighted, first_monthly, annual)
        }
        None => {
            let weighted = weighted_headcount(
                contract.partner_disabled_workers,
                contract.partner_severe_disabled_workers,
            );
            let monthly = monthly_reduction(weighted, ratio, base_rate)?;
            let annual = monthly
                .checked_mul(12)
                .ok_or_else(|| annual_overflow(monthly))?;
            (weighted, monthly, annual)
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "reduction_accrual".to_string(),
        rule_name: "Supply Ratio & Monthly Reduction".to_string(),
        clause_ref: "법 제33조의2".to_string(),
        input: serde_json::json!({
            "contract_amount": contract_amount,
            "partner_annual_revenue": contract.partner_annual_revenue,
            "base_rate": base_rate,
            "scheduled_months": contract.monthly_workers.as_ref().map(Vec::len)
        }),
        output: serde_json::json!({
            "supply_ratio": ratio.to_string(),
            "weighted_partner_workers": weighted_partner_workers,
            "monthly_reduction": monthly,
            "annual_reduction": annual
        }),
        reasoning: format!(
            "supply ratio {} of {} weighted partner workers at {} won yields {} won/month, {} won/year",
            ratio, weighted_partner_workers, base_rate, monthly, annual
        ),
    };

    Ok(ReductionAccrualResult {
        weighted_partner_workers,
        supply_ratio: ratio,
        monthly_reduction: monthly,
        annual_reduction: annual,
        audit_step,
        warning,
    })
}
