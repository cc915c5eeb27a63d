//! Policy table types for the levy reduction engine.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML policy files. Rates, brackets, and cap percentages
//! change with annual legal updates, so none of them are hard-coded; each
//! effective year ships as its own policy file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{BracketLabel, EmployerCategory};

/// Mandatory disability-employment rates per employer category.
///
/// Private employers and public-sector employers carry different statutory
/// rates (3.1% vs 3.8% in 2024-2025).
#[derive(Debug, Clone, Deserialize)]
pub struct MandatoryRates {
    /// Rate for private employers (민간사업주).
    pub private: Decimal,
    /// Rate for public institutions (공공기관).
    pub public: Decimal,
    /// Rate for national/local government bodies (국가/지자체).
    pub government: Decimal,
}

/// One row of the levy bracket table.
#[derive(Debug, Clone, Deserialize)]
pub struct BracketEntry {
    /// Inclusive lower bound of the employment ratio for this bracket.
    pub threshold_ratio: Decimal,
    /// Surcharge rate applied on top of the base levy for this bracket.
    pub surcharge_rate: Decimal,
    /// Base amount in won per shortfall head per month (부담기초액).
    pub base_amount: i64,
}

/// The five-row levy bracket table, keyed by employment level.
///
/// Exactly one bracket applies to every calculation: the `zero` bracket
/// whenever the weighted actual headcount is 0, otherwise the highest
/// bracket whose threshold the employment ratio meets.
#[derive(Debug, Clone, Deserialize)]
pub struct BracketTable {
    /// Employment ratio at or above 3/4 of the mandatory headcount.
    pub above75: BracketEntry,
    /// Employment ratio in [1/2, 3/4).
    pub above50: BracketEntry,
    /// Employment ratio in [1/4, 1/2).
    pub above25: BracketEntry,
    /// Employment ratio below 1/4 (with at least one disabled worker).
    pub below25: BracketEntry,
    /// No disabled workers employed; minimum-wage-based base amount.
    pub zero: BracketEntry,
}

/// Which base amount feeds the monthly-reduction formula.
///
/// The statute is ambiguous on this point; the choice is a policy setting
/// rather than code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionRateBasis {
    /// Use the employer's own resolved levy bracket base amount, so the levy
    /// and the reduction share one source of truth.
    ResolvedBracket,
    /// Use the year's flat base amount regardless of the employer's bracket.
    FlatBase,
}

/// The two independent ceilings on the annual reduction.
#[derive(Debug, Clone, Deserialize)]
pub struct ReductionCaps {
    /// Maximum reduction as a fraction of the annual levy (90% in 2025).
    pub levy_percent: Decimal,
    /// Maximum reduction as a fraction of the contract amount (50% in 2025).
    pub contract_percent: Decimal,
}

/// The complete levy policy for one effective year.
#[derive(Debug, Clone, Deserialize)]
pub struct LevyPolicy {
    /// The year these rates and brackets are effective for.
    pub effective_year: i32,
    /// Mandatory employment rates per employer category.
    pub mandatory_rates: MandatoryRates,
    /// The year's flat base amount in won (부담기초액).
    pub flat_base_rate: i64,
    /// Which base amount the reduction formula uses.
    pub reduction_rate_basis: ReductionRateBasis,
    /// The levy bracket table.
    pub brackets: BracketTable,
    /// The reduction ceilings.
    pub reduction_caps: ReductionCaps,
}

impl LevyPolicy {
    /// Returns the mandatory employment rate for an employer category.
    pub fn mandatory_rate(&self, category: EmployerCategory) -> Decimal {
        match category {
            EmployerCategory::Private => self.mandatory_rates.private,
            EmployerCategory::Public => self.mandatory_rates.public,
            EmployerCategory::Government => self.mandatory_rates.government,
        }
    }

    /// Returns the bracket entry for a bracket label.
    pub fn bracket(&self, label: BracketLabel) -> &BracketEntry {
        match label {
            BracketLabel::Above75 => &self.brackets.above75,
            BracketLabel::Above50 => &self.brackets.above50,
            BracketLabel::Above25 => &self.brackets.above25,
            BracketLabel::Below25 => &self.brackets.below25,
            BracketLabel::Zero => &self.brackets.zero,
        }
    }
}
