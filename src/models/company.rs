//! Company profile model and employer category.
//!
//! This module defines the [`CompanyProfile`] struct describing the employer
//! whose levy and reduction are being calculated.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The statutory category of an employer.
///
/// The category selects the mandatory employment rate, and for government
/// bodies enables the excess-procurement adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployerCategory {
    /// Private employer (민간사업주).
    Private,
    /// Public institution (공공기관).
    Public,
    /// National or local government body (국가/지자체).
    Government,
}

/// The employer-side facts of a levy calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// The statutory category of the employer.
    pub employer_category: EmployerCategory,
    /// Regular headcount base (상시근로자 수).
    pub total_employees: u32,
    /// Number of disabled employees, severe included.
    pub disabled_employees: u32,
    /// Number of severely disabled employees, each counted twice.
    pub severe_disabled_employees: u32,
}

impl CompanyProfile {
    /// Validates internal consistency of the profile.
    ///
    /// Rejects rather than clamps, so data-entry mistakes surface instead of
    /// producing plausible-looking numbers.
    pub fn validate(&self) -> EngineResult<()> {
        if self.disabled_employees > self.total_employees {
            return Err(EngineError::InvalidInput {
                field: "disabled_employees".to_string(),
                message: format!(
                    "{} exceeds total_employees {}",
                    self.disabled_employees, self.total_employees
                ),
            });
        }
        if self.severe_disabled_employees > self.disabled_employees {
            return Err(EngineError::InvalidInput {
                field: "severe_disabled_employees".to_string(),
                message: format!(
                    "{} exceeds disabled_employees {}",
                    self.severe_disabled_employees, self.disabled_employees
                ),
            });
        }
        Ok(())
    }

    /// Returns true for national/local government bodies.
    pub fn is_government(&self) -> bool {
        self.employer_category == EmployerCategory::Government
    }
}
