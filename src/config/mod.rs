//! Policy table loading and management for the levy reduction engine.
//!
//! This module provides functionality to load the versioned levy policy
//! tables from YAML files: mandatory employment rates, the five-row levy
//! bracket table, cap percentages, and the reduction rate basis.
//!
//! # Example
//!
//! ```no_run
//! use levy_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/levy").unwrap();
//! let policy = loader.get_policy(Some(2025)).unwrap();
//! println!("Loaded policy for {}", policy.effective_year);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    BracketEntry, BracketTable, LevyPolicy, MandatoryRates, ReductionCaps, ReductionRateBasis,
};
