//! Cap resolution: the two reduction ceilings, the binding cap, and the
//! net levy.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::ReductionCaps;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, BindingCap};

/// The result of resolving the caps, including the audit step.
#[derive(Debug, Clone)]
pub struct CapResolution {
    /// Cap from the percentage-of-levy rule, in won.
    pub cap_by_levy: i64,
    /// Cap from the percentage-of-contract rule, in won.
    pub cap_by_contract: i64,
    /// Which cap, if any, limited the final reduction.
    pub binding_cap: BindingCap,
    /// The final reduction after both caps, in won.
    pub final_reduction: i64,
    /// Levy remaining after the reduction, in won.
    pub net_levy: i64,
    /// Final reduction as a percentage of the annual levy, 2 decimal places.
    pub savings_percent: Decimal,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the final reduction against the two independent ceilings.
///
/// `final_reduction = min(annual_reduction, cap_by_levy, cap_by_contract)`
/// where `cap_by_levy = floor(annual_levy × levy_percent)` and
/// `cap_by_contract = floor(contract_amount × contract_percent)`. Both cap
/// products are floored to whole won.
///
/// The contract cap always uses the original contract amount, even when the
/// government excess-procurement adjustment substituted a smaller amount into
/// the reduction accrual.
///
/// A cap is reported as binding when it equals the final reduction and does
/// not exceed the annual reduction; both caps equal yields `Both`.
///
/// # Arguments
///
/// * `annual_reduction` - Annual reduction before caps (adjusted if government)
/// * `annual_levy` - Annual levy from the accrual stage
/// * `contract_amount` - The original contract amount in won
/// * `caps` - The cap percentages from the policy table
/// * `step_number` - The step number for audit trail sequencing
pub fn resolve_caps(
    annual_reduction: i64,
    annual_levy: i64,
    contract_amount: i64,
    caps: &ReductionCaps,
    step_number: u32,
) -> EngineResult<CapResolution> {
    let cap_by_levy = scale_amount(annual_levy, caps.levy_percent)?;
    let cap_by_contract = scale_amount(contract_amount, caps.contract_percent)?;

    let final_reduction = annual_reduction.min(cap_by_levy).min(cap_by_contract);

    let levy_binds = cap_by_levy <= annual_reduction && final_reduction == cap_by_levy;
    let contract_binds = cap_by_contract <= annual_reduction && final_reduction == cap_by_contract;
    let binding_cap = match (levy_binds, contract_binds) {
        (true, true) => BindingCap::Both,
        (true, false) => BindingCap::LevyCap,
        (false, true) => BindingCap::ContractCap,
        (false, false) => BindingCap::None,
    };

    // final_reduction <= cap_by_levy <= annual_levy, so this never goes negative
    let net_levy = annual_levy - final_reduction;

    let savings_percent = if annual_levy > 0 {
        (Decimal::from(final_reduction) / Decimal::from(annual_levy) * Decimal::from(100))
            .round_dp(2)
    } else {
        Decimal::ZERO
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "cap_resolver".to_string(),
        rule_name: "Cap Resolver".to_string(),
        clause_ref: "시행령 제24조의2".to_string(),
        input: serde_json::json!({
            "annual_reduction": annual_reduction,
            "annual_levy": annual_levy,
            "contract_amount": contract_amount,
            "levy_percent": caps.levy_percent.to_string(),
            "contract_percent": caps.contract_percent.to_string()
        }),
        output: serde_json::json!({
            "cap_by_levy": cap_by_levy,
            "cap_by_contract": cap_by_contract,
            "binding_cap": binding_cap,
            "final_reduction": final_reduction,
            "net_levy": net_levy,
            "savings_percent": savings_percent.to_string()
        }),
        reasoning: format!(
            "min({}, {}, {}) = {} won; net levy {} won",
            annual_reduction, cap_by_levy, cap_by_contract, final_reduction, net_levy
        ),
    };

    Ok(CapResolution {
        cap_by_levy,
        cap_by_contract,
        binding_cap,
        final_reduction,
        net_levy,
        savings_percent,
        audit_step,
    })
}

/// Multiplies a won amount by a fractional rate, flooring to whole won.
fn scale_amount(amount: i64, rate: Decimal) -> EngineResult<i64> {
    (Decimal::from(amount) * rate)
        .floor()
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("scaled amount {} x {} exceeds the won range", amount, rate),
        })
}
