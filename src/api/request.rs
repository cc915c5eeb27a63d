//! Request types for the levy reduction engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    CompanyProfile, EmployerCategory, GovernmentAdjustment, MonthlyWorkers, PartnerContract,
};

/// Request body for the `/calculate` endpoint.
///
/// Contains all information needed to calculate the levy reduction for a
/// company and its linked-employment contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The obligated company's profile.
    pub company_profile: CompanyProfileRequest,
    /// The linked-employment contract with the partner facility.
    pub partner_contract: PartnerContractRequest,
    /// Excess-procurement adjustment, government employers only.
    #[serde(default)]
    pub government_adjustment: Option<GovernmentAdjustmentRequest>,
    /// The policy year to calculate under. Defaults to the latest loaded year.
    #[serde(default)]
    pub effective_year: Option<i32>,
}

/// Company profile in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfileRequest {
    /// The employer category, which selects the mandatory employment rate.
    pub employer_category: EmployerCategory,
    /// Total number of employees.
    pub total_employees: u32,
    /// Number of disabled employees, severe included.
    pub disabled_employees: u32,
    /// Number of severely disabled employees.
    pub severe_disabled_employees: u32,
}

/// Partner contract in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerContractRequest {
    /// The partner facility's annual revenue in won.
    pub partner_annual_revenue: i64,
    /// The annual contract amount in won.
    pub contract_amount: i64,
    /// Disabled workers at the partner facility, severe included.
    pub partner_disabled_workers: u32,
    /// Severely disabled workers at the partner facility.
    pub partner_severe_disabled_workers: u32,
    /// Optional per-month worker schedule, exactly 12 entries when present.
    #[serde(default)]
    pub monthly_workers: Option<Vec<MonthlyWorkersRequest>>,
}

/// One month of the partner facility's worker schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyWorkersRequest {
    /// Disabled workers for the month, severe included.
    pub disabled_workers: u32,
    /// Severely disabled workers for the month.
    pub severe_disabled_workers: u32,
}

/// Government excess-procurement adjustment in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernmentAdjustmentRequest {
    /// Prior-year disabled employment rate, informational.
    #[serde(default)]
    pub prior_year_disabled_rate: Option<Decimal>,
    /// Current-year disabled employment rate, informational.
    #[serde(default)]
    pub current_year_disabled_rate: Option<Decimal>,
    /// The statutory procurement target in won.
    pub procurement_target: i64,
    /// The actual procurement amount in won.
    pub procurement_actual: i64,
}

impl From<CompanyProfileRequest> for CompanyProfile {
    fn from(req: CompanyProfileRequest) -> Self {
        CompanyProfile {
            employer_category: req.employer_category,
            total_employees: req.total_employees,
            disabled_employees: req.disabled_employees,
            severe_disabled_employees: req.severe_disabled_employees,
        }
    }
}

impl From<PartnerContractRequest> for PartnerContract {
    fn from(req: PartnerContractRequest) -> Self {
        PartnerContract {
            partner_annual_revenue: req.partner_annual_revenue,
            contract_amount: req.contract_amount,
            partner_disabled_workers: req.partner_disabled_workers,
            partner_severe_disabled_workers: req.partner_severe_disabled_workers,
            monthly_workers: req
                .monthly_workers
                .map(|months| months.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<MonthlyWorkersRequest> for MonthlyWorkers {
    fn from(req: MonthlyWorkersRequest) -> Self {
        MonthlyWorkers {
            disabled_workers: req.disabled_workers,
            severe_disabled_workers: req.severe_disabled_workers,
        }
    }
}

impl From<GovernmentAdjustmentRequest> for GovernmentAdjustment {
    fn from(req: GovernmentAdjustmentRequest) -> Self {
        GovernmentAdjustment {
            prior_year_disabled_rate: req.prior_year_disabled_rate,
            current_year_disabled_rate: req.current_year_disabled_rate,
            procurement_target: req.procurement_target,
            procurement_actual: req.procurement_actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "company_profile": {
                "employer_category": "private",
                "total_employees": 500,
                "disabled_employees": 10,
                "severe_disabled_employees": 3
            },
            "partner_contract": {
                "partner_annual_revenue": 300000000,
                "contract_amount": 30000000,
                "partner_disabled_workers": 10,
                "partner_severe_disabled_workers": 5
            }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.company_profile.employer_category,
            EmployerCategory::Private
        );
        assert_eq!(request.partner_contract.contract_amount, 30_000_000);
        assert!(request.government_adjustment.is_none());
        assert!(request.effective_year.is_none());
    }

    #[test]
    fn test_deserialize_government_request_with_adjustment() {
        let json = r#"{
            "company_profile": {
                "employer_category": "government",
                "total_employees": 1000,
                "disabled_employees": 20,
                "severe_disabled_employees": 5
            },
            "partner_contract": {
                "partner_annual_revenue": 500000000,
                "contract_amount": 60000000,
                "partner_disabled_workers": 12,
                "partner_severe_disabled_workers": 4
            },
            "government_adjustment": {
                "procurement_target": 30000000,
                "procurement_actual": 45000000
            },
            "effective_year": 2025
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let adjustment = request.government_adjustment.unwrap();
        assert_eq!(adjustment.procurement_target, 30_000_000);
        assert!(adjustment.prior_year_disabled_rate.is_none());
        assert_eq!(request.effective_year, Some(2025));
    }

    #[test]
    fn test_deserialize_monthly_schedule() {
        let month = r#"{"disabled_workers": 10, "severe_disabled_workers": 5}"#;
        let months = vec![month; 12].join(",");
        let json = format!(
            r#"{{
                "company_profile": {{
                    "employer_category": "private",
                    "total_employees": 500,
                    "disabled_employees": 10,
                    "severe_disabled_employees": 3
                }},
                "partner_contract": {{
                    "partner_annual_revenue": 300000000,
                    "contract_amount": 30000000,
                    "partner_disabled_workers": 10,
                    "partner_severe_disabled_workers": 5,
                    "monthly_workers": [{}]
                }}
            }}"#,
            months
        );

        let request: CalculationRequest = serde_json::from_str(&json).unwrap();
        let schedule = request.partner_contract.monthly_workers.unwrap();
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule[0].severe_disabled_workers, 5);
    }

    #[test]
    fn test_contract_conversion() {
        let req = PartnerContractRequest {
            partner_annual_revenue: 300_000_000,
            contract_amount: 30_000_000,
            partner_disabled_workers: 10,
            partner_severe_disabled_workers: 5,
            monthly_workers: None,
        };

        let contract: PartnerContract = req.into();
        assert_eq!(contract.partner_annual_revenue, 300_000_000);
        assert!(contract.monthly_workers.is_none());
    }
}
