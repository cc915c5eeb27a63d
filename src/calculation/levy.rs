//! Levy accrual: the annual levy before any reduction.

use crate::models::AuditStep;

/// The result of accruing the annual levy, including the audit step.
#[derive(Debug, Clone)]
pub struct LevyAccrualResult {
    /// Annual levy before reduction in won.
    pub annual_levy: i64,
    /// The audit step recording this accrual.
    pub audit_step: AuditStep,
}

/// Accrues the annual levy: `shortfall × base_amount × 12`.
///
/// Integer inputs keep the result at whole-won granularity with no rounding.
/// A shortfall of 0 yields a levy of 0 (fully compliant employer).
///
/// # Arguments
///
/// * `shortfall` - The shortfall headcount from the obligation resolver
/// * `base_amount` - The selected bracket's base amount in won per head per month
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use levy_engine::calculation::accrue_levy;
///
/// let result = accrue_levy(2, 1_258_000, 1);
/// assert_eq!(result.annual_levy, 30_192_000);
/// ```
pub fn accrue_levy(shortfall: u32, base_amount: i64, step_number: u32) -> LevyAccrualResult {
    let annual_levy = i64::from(shortfall) * base_amount * 12;

    let audit_step = AuditStep {
        step_number,
        rule_id: "levy_accrual".to_string(),
        rule_name: "Levy Accrual".to_string(),
        clause_ref: "법 제33조".to_string(),
        input: serde_json::json!({
            "shortfall": shortfall,
            "base_amount": base_amount
        }),
        output: serde_json::json!({
            "annual_levy": annual_levy
        }),
        reasoning: format!(
            "{} heads x {} won x 12 months = {} won",
            shortfall, base_amount, annual_levy
        ),
    };

    LevyAccrualResult {
        annual_levy,
        audit_step,
    }
}
