//! Obligation resolution: mandatory headcount, weighted actual headcount,
//! shortfall, and levy bracket selection.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::LevyPolicy;
use crate::models::{AuditStep, BracketLabel, CompanyProfile};

/// The result of resolving an employer's obligation, including the audit step.
#[derive(Debug, Clone)]
pub struct ObligationResult {
    /// Mandatory disabled headcount (의무고용인원).
    pub mandatory_headcount: u32,
    /// Actual disabled headcount with severe workers counted twice.
    pub weighted_actual: u32,
    /// Shortfall against the mandatory headcount, floored at 0.
    pub shortfall: u32,
    /// The levy bracket selected for this employer.
    pub bracket_label: BracketLabel,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Returns the weighted disabled headcount: each severely disabled worker
/// counts twice, each other disabled worker once.
///
/// Callers must have validated `severe <= disabled`.
///
/// # Examples
///
/// ```
/// use levy_engine::calculation::weighted_headcount;
///
/// assert_eq!(weighted_headcount(10, 3), 13);
/// assert_eq!(weighted_headcount(0, 0), 0);
/// ```
pub fn weighted_headcount(disabled: u32, severe: u32) -> u32 {
    severe * 2 + (disabled - severe)
}

/// Resolves an employer's disability-employment obligation.
///
/// Computes the mandatory headcount as `floor(total_employees × rate)` for
/// the employer's category, the weighted actual headcount, the shortfall,
/// and the applicable levy bracket.
///
/// Bracket selection order matters:
/// 1. A weighted actual headcount of 0 forces the `zero` bracket regardless
///    of ratio.
/// 2. A mandatory headcount of 0 is treated as fully satisfied and selects
///    the top bracket.
/// 3. Otherwise the employment ratio is compared against the policy table's
///    thresholds from the top down.
///
/// # Arguments
///
/// * `company` - The validated company profile
/// * `policy` - The policy table for the effective year
/// * `step_number` - The step number for audit trail sequencing
pub fn resolve_obligation(
    company: &CompanyProfile,
    policy: &LevyPolicy,
    step_number: u32,
) -> ObligationResult {
    let rate = policy.mandatory_rate(company.employer_category);
    let mandatory = (Decimal::from(company.total_employees) * rate).floor();
    // rate < 1, so the floored product always fits back into u32
    let mandatory_headcount = mandatory.to_u32().unwrap_or(0);

    let weighted_actual = weighted_headcount(
        company.disabled_employees,
        company.severe_disabled_employees,
    );

    let shortfall = mandatory_headcount.saturating_sub(weighted_actual);

    let (bracket_label, ratio_str) = select_bracket(mandatory_headcount, weighted_actual, policy);

    let audit_step = AuditStep {
        step_number,
        rule_id: "obligation_resolver".to_string(),
        rule_name: "Obligation Resolver".to_string(),
        clause_ref: "법 제28조, 제33조".to_string(),
        input: serde_json::json!({
            "employer_category": company.employer_category,
            "total_employees": company.total_employees,
            "disabled_employees": company.disabled_employees,
            "severe_disabled_employees": company.severe_disabled_employees,
            "mandatory_rate": rate.to_string()
        }),
        output: serde_json::json!({
            "mandatory_headcount": mandatory_headcount,
            "weighted_actual": weighted_actual,
            "shortfall": shortfall,
            "employment_ratio": ratio_str,
            "bracket": bracket_label
        }),
        reasoning: format!(
            "floor({} x {}) = {} mandatory; weighted actual {} leaves shortfall {}; bracket {}",
            company.total_employees,
            rate,
            mandatory_headcount,
            weighted_actual,
            shortfall,
            bracket_label.description()
        ),
    };

    ObligationResult {
        mandatory_headcount,
        weighted_actual,
        shortfall,
        bracket_label,
        audit_step,
    }
}

/// Selects the levy bracket for a mandatory/actual headcount pair.
///
/// Returns the label and a display string of the employment ratio.
fn select_bracket(
    mandatory: u32,
    weighted_actual: u32,
    policy: &LevyPolicy,
) -> (BracketLabel, String) {
    if weighted_actual == 0 {
        return (BracketLabel::Zero, "n/a (no disabled workers)".to_string());
    }
    if mandatory == 0 {
        // No obligation to fall short of: fully satisfied.
        return (
            BracketLabel::Above75,
            "n/a (no mandatory headcount)".to_string(),
        );
    }

    let ratio = Decimal::from(weighted_actual) / Decimal::from(mandatory);
    let label = if ratio >= policy.brackets.above75.threshold_ratio {
        BracketLabel::Above75
    } else if ratio >= policy.brackets.above50.threshold_ratio {
        BracketLabel::Above50
    } else if ratio >= policy.brackets.above25.threshold_ratio {
        BracketLabel::Above25
    } else {
        BracketLabel::Below25
    };

    (label, ratio.round_dp(4).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyLoader;
    use crate::models::EmployerCategory;

    fn policy() -> crate::config::LevyPolicy {
        PolicyLoader::load("./config/levy")
            .unwrap()
            .get_policy(Some(2025))
            .unwrap()
            .clone()
    }

    fn company(
        category: EmployerCategory,
        total: u32,
        disabled: u32,
        severe: u32,
    ) -> CompanyProfile {
        CompanyProfile {
            employer_category: category,
            total_employees: total,
            disabled_employees: disabled,
            severe_disabled_employees: severe,
        }
    }

    #[test]
    fn test_weighted_headcount_double_counts_severe() {
        assert_eq!(weighted_headcount(10, 3), 13);
        assert_eq!(weighted_headcount(10, 0), 10);
        assert_eq!(weighted_headcount(10, 10), 20);
        assert_eq!(weighted_headcount(0, 0), 0);
    }

    /// Scenario A from the acceptance suite: 500 private employees.
    #[test]
    fn test_private_500_employees_scenario_a() {
        let policy = policy();
        let company = company(EmployerCategory::Private, 500, 10, 3);

        let result = resolve_obligation(&company, &policy, 1);

        assert_eq!(result.mandatory_headcount, 15); // floor(500 * 0.031)
        assert_eq!(result.weighted_actual, 13); // 3*2 + 7
        assert_eq!(result.shortfall, 2);
        assert_eq!(result.bracket_label, BracketLabel::Above75); // 13/15 >= 0.75
    }

    #[test]
    fn test_public_employer_uses_higher_rate() {
        let policy = policy();
        let company = company(EmployerCategory::Public, 500, 10, 3);

        let result = resolve_obligation(&company, &policy, 1);

        assert_eq!(result.mandatory_headcount, 19); // floor(500 * 0.038)
    }

    #[test]
    fn test_government_employer_uses_public_rate() {
        let policy = policy();
        let company = company(EmployerCategory::Government, 1000, 20, 5);

        let result = resolve_obligation(&company, &policy, 1);

        assert_eq!(result.mandatory_headcount, 38);
    }

    #[test]
    fn test_zero_actual_forces_zero_bracket() {
        let policy = policy();
        let company = company(EmployerCategory::Private, 500, 0, 0);

        let result = resolve_obligation(&company, &policy, 1);

        assert_eq!(result.bracket_label, BracketLabel::Zero);
        assert_eq!(result.shortfall, 15);
    }

    #[test]
    fn test_zero_mandatory_treated_as_fully_satisfied() {
        let policy = policy();
        // 10 employees: floor(10 * 0.031) = 0 mandatory
        let company = company(EmployerCategory::Private, 10, 1, 0);

        let result = resolve_obligation(&company, &policy, 1);

        assert_eq!(result.mandatory_headcount, 0);
        assert_eq!(result.shortfall, 0);
        assert_eq!(result.bracket_label, BracketLabel::Above75);
    }

    #[test]
    fn test_zero_mandatory_and_zero_actual_selects_zero_bracket() {
        let policy = policy();
        let company = company(EmployerCategory::Private, 10, 0, 0);

        let result = resolve_obligation(&company, &policy, 1);

        // The actual-zero rule wins over the fully-satisfied rule.
        assert_eq!(result.bracket_label, BracketLabel::Zero);
        assert_eq!(result.shortfall, 0);
    }

    #[test]
    fn test_bracket_thresholds_are_inclusive() {
        let policy = policy();

        // mandatory 20 (floor(646*0.031)=20); weighted 15 -> ratio exactly 0.75
        let result = resolve_obligation(
            &company(EmployerCategory::Private, 646, 15, 0),
            &policy,
            1,
        );
        assert_eq!(result.mandatory_headcount, 20);
        assert_eq!(result.bracket_label, BracketLabel::Above75);

        // weighted 10 -> ratio exactly 0.50
        let result = resolve_obligation(
            &company(EmployerCategory::Private, 646, 10, 0),
            &policy,
            1,
        );
        assert_eq!(result.bracket_label, BracketLabel::Above50);

        // weighted 5 -> ratio exactly 0.25
        let result =
            resolve_obligation(&company(EmployerCategory::Private, 646, 5, 0), &policy, 1);
        assert_eq!(result.bracket_label, BracketLabel::Above25);

        // weighted 4 -> ratio 0.20
        let result =
            resolve_obligation(&company(EmployerCategory::Private, 646, 4, 0), &policy, 1);
        assert_eq!(result.bracket_label, BracketLabel::Below25);
    }

    #[test]
    fn test_overachievement_has_no_shortfall() {
        let policy = policy();
        let company = company(EmployerCategory::Private, 500, 20, 10);

        let result = resolve_obligation(&company, &policy, 1);

        assert_eq!(result.weighted_actual, 30);
        assert_eq!(result.shortfall, 0);
        assert_eq!(result.bracket_label, BracketLabel::Above75);
    }

    #[test]
    fn test_audit_step_records_inputs_and_bracket() {
        let policy = policy();
        let company = company(EmployerCategory::Private, 500, 10, 3);

        let result = resolve_obligation(&company, &policy, 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "obligation_resolver");
        assert_eq!(result.audit_step.input["total_employees"], 500);
        assert_eq!(result.audit_step.output["shortfall"], 2);
        assert_eq!(result.audit_step.output["bracket"], "above75");
        assert!(result.audit_step.reasoning.contains("15"));
    }
}
