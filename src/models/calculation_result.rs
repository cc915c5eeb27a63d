//! Calculation result model for the levy reduction engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures capturing all outputs of a levy reduction calculation,
//! including the audit trace of rule applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rust_decimal::Decimal;

/// The employment-level bracket selected for a calculation.
///
/// Exactly one bracket applies to every calculation. The ratio of weighted
/// actual headcount to mandatory headcount selects among the first four; the
/// `Zero` bracket is forced whenever no disabled workers are employed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketLabel {
    /// Employment ratio at or above 3/4 of the mandatory headcount.
    Above75,
    /// Employment ratio in [1/2, 3/4); 6% surcharge.
    Above50,
    /// Employment ratio in [1/4, 1/2); 20% surcharge.
    Above25,
    /// Employment ratio below 1/4; 40% surcharge.
    Below25,
    /// No disabled workers employed; minimum-wage-based base amount.
    Zero,
}

impl BracketLabel {
    /// Returns the statutory description of the bracket.
    pub fn description(&self) -> &'static str {
        match self {
            BracketLabel::Above75 => "3/4 이상 고용",
            BracketLabel::Above50 => "1/2~3/4 미달 (6% 가산)",
            BracketLabel::Above25 => "1/4~1/2 미달 (20% 가산)",
            BracketLabel::Below25 => "1/4 미달 (40% 가산)",
            BracketLabel::Zero => "0명 고용 (최저임금 기준)",
        }
    }
}

/// Which of the two reduction ceilings limited the final reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingCap {
    /// Neither cap limited the reduction.
    None,
    /// The percentage-of-levy cap limited the reduction.
    LevyCap,
    /// The percentage-of-contract cap limited the reduction.
    ContractCap,
    /// Both caps equal the final reduction.
    Both,
}

/// A single step in the audit trace recording a rule application.
///
/// Each step captures the input, output, and reasoning for one stage of the
/// calculation pipeline, with a reference to the statutory clause applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statutory clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag the guarded degenerate cases that compute successfully but
/// deserve attention, such as a zero partner revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a calculation.
///
/// Records every stage of the pipeline for transparency; the engine is
/// advisory and the trace lets a reviewer check each figure by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a levy reduction calculation.
///
/// Purely a function of the inputs and the policy table; the identity fields
/// (`calculation_id`, `timestamp`) are per-call metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The effective year of the policy table applied.
    pub effective_year: i32,

    /// Mandatory disabled headcount (의무고용인원).
    pub mandatory_headcount: u32,
    /// Actual disabled headcount with severe workers counted twice.
    pub weighted_actual: u32,
    /// Shortfall against the mandatory headcount, floored at 0 (미달인원).
    pub shortfall: u32,
    /// The employment-level bracket selected.
    pub bracket_label: BracketLabel,
    /// Base amount in won applied to the levy (적용 부담기초액).
    pub levied_base_rate: i64,
    /// Base amount in won applied in the reduction formula. Equals
    /// `levied_base_rate` under the resolved-bracket policy basis.
    pub reduction_base_rate: i64,
    /// Annual levy before reduction in won.
    pub annual_levy: i64,

    /// Partner disabled headcount with severe workers counted twice.
    pub weighted_partner_workers: u32,
    /// Contract amount over partner revenue, truncated to 4 decimal places.
    pub supply_ratio: Decimal,
    /// Per-month reduction in won, truncated to the 10-won unit.
    pub monthly_reduction: i64,
    /// Annual reduction before caps, after any government adjustment.
    pub annual_reduction: i64,

    /// Cap from the percentage-of-levy rule, in won.
    pub cap_by_levy: i64,
    /// Cap from the percentage-of-contract rule, in won.
    pub cap_by_contract: i64,
    /// Which cap, if any, limited the final reduction.
    pub binding_cap: BindingCap,
    /// The final reduction after both caps, in won.
    pub final_reduction: i64,
    /// Levy remaining after the reduction, in won. Never negative.
    pub net_levy: i64,
    /// Final reduction as a percentage of the annual levy.
    pub savings_percent: Decimal,

    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
