//! The calculation pipeline composing the four stages into one pure function.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::config::{LevyPolicy, ReductionRateBasis};
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, CompanyProfile, GovernmentAdjustment,
    PartnerContract,
};

use super::caps::resolve_caps;
use super::levy::accrue_levy;
use super::obligation::resolve_obligation;
use super::supply_ratio::accrue_reduction;

/// Calculates the levy reduction for a company and partner contract.
///
/// This is the engine's single entry point: a pure function from validated
/// input and a policy table to a [`CalculationResult`]. Data flows strictly
/// forward through the obligation resolver, the levy accrual, the
/// supply-ratio accrual, and the cap resolver; identical inputs yield
/// identical figures (the calculation id, timestamp, and duration are
/// per-call metadata).
///
/// The government excess-procurement adjustment is applied only when the
/// employer is a government body and an adjustment is supplied; an adjustment
/// supplied for any other category is ignored with a warning.
///
/// # Errors
///
/// Returns `InvalidInput` when any input fails validation (§ fail-fast
/// rather than clamping), or `CalculationError` on won-range overflow.
pub fn calculate_reduction(
    company: &CompanyProfile,
    contract: &PartnerContract,
    adjustment: Option<&GovernmentAdjustment>,
    policy: &LevyPolicy,
) -> EngineResult<CalculationResult> {
    company.validate()?;
    contract.validate()?;
    if let Some(adjustment) = adjustment {
        adjustment.validate()?;
    }

    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    // Stage 1: obligation
    let obligation = resolve_obligation(company, policy, step_number);
    steps.push(obligation.audit_step.clone());
    step_number += 1;

    // Stage 2: levy accrual at the resolved bracket's base amount
    let levied_base_rate = policy.bracket(obligation.bracket_label).base_amount;
    let levy = accrue_levy(obligation.shortfall, levied_base_rate, step_number);
    steps.push(levy.audit_step.clone());
    step_number += 1;

    // Stage 3: reduction accrual
    let reduction_base_rate = match policy.reduction_rate_basis {
        ReductionRateBasis::ResolvedBracket => levied_base_rate,
        ReductionRateBasis::FlatBase => policy.flat_base_rate,
    };
    let reduction = accrue_reduction(
        contract,
        contract.contract_amount,
        reduction_base_rate,
        step_number,
    )?;
    steps.push(reduction.audit_step.clone());
    warnings.extend(reduction.warning.clone());
    step_number += 1;

    // Stage 3b: government excess-procurement adjustment
    let adjusted = match adjustment {
        Some(adjustment) if company.is_government() => {
            let effective_contract = contract.contract_amount.min(adjustment.procurement_excess());
            let adjusted =
                accrue_reduction(contract, effective_contract, reduction_base_rate, step_number)?;
            steps.push(AuditStep {
                rule_id: "government_adjustment".to_string(),
                rule_name: "Excess Procurement Adjustment".to_string(),
                ..adjusted.audit_step.clone()
            });
            step_number += 1;
            Some(adjusted)
        }
        Some(_) => {
            warnings.push(AuditWarning {
                code: "ADJUSTMENT_IGNORED".to_string(),
                message: "government adjustment supplied for a non-government employer"
                    .to_string(),
            });
            None
        }
        None => None,
    };
    // The adjusted accrual, when present, supplies the reported figures.
    let accrual = adjusted.as_ref().unwrap_or(&reduction);

    // Stage 4: caps (the contract cap uses the original contract amount)
    let resolution = resolve_caps(
        accrual.annual_reduction,
        levy.annual_levy,
        contract.contract_amount,
        &policy.reduction_caps,
        step_number,
    )?;
    steps.push(resolution.audit_step.clone());

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        effective_year: policy.effective_year,
        mandatory_headcount: obligation.mandatory_headcount,
        weighted_actual: obligation.weighted_actual,
        shortfall: obligation.shortfall,
        bracket_label: obligation.bracket_label,
        levied_base_rate,
        reduction_base_rate,
        annual_levy: levy.annual_levy,
        weighted_partner_workers: accrual.weighted_partner_workers,
        supply_ratio: accrual.supply_ratio,
        monthly_reduction: accrual.monthly_reduction,
        annual_reduction: accrual.annual_reduction,
        cap_by_levy: resolution.cap_by_levy,
        cap_by_contract: resolution.cap_by_contract,
        binding_cap: resolution.binding_cap,
        final_reduction: resolution.final_reduction,
        net_levy: resolution.net_levy,
        savings_percent: resolution.savings_percent,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
