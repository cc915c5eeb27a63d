//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading levy policy
//! tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::LevyPolicy;

/// Loads and provides access to levy policy tables.
///
/// The `PolicyLoader` reads one YAML file per effective year from a directory
/// and provides year-keyed lookup. Rates and brackets change with annual legal
/// updates, so the newest loaded year serves as the default policy.
///
/// # Directory Structure
///
/// ```text
/// config/levy/
/// ├── 2024.yaml   # Policy effective for 2024
/// └── 2025.yaml   # Policy effective for 2025
/// ```
///
/// # Example
///
/// ```no_run
/// use levy_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/levy").unwrap();
///
/// // Latest year by default
/// let policy = loader.get_policy(None).unwrap();
/// println!("Default policy year: {}", policy.effective_year);
///
/// // Or a specific year
/// let policy = loader.get_policy(Some(2025)).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    /// Loaded policies, sorted by effective year ascending. Never empty.
    policies: Vec<LevyPolicy>,
}

impl PolicyLoader {
    /// Loads all policy files from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy directory (e.g., "./config/levy")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if:
    /// - The directory does not exist or contains no `.yaml`/`.yml` files
    /// - Any file contains invalid YAML
    /// - Any required field is missing from a policy file
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut policies = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml") {
                let policy = Self::load_yaml::<LevyPolicy>(&path)?;
                policies.push(policy);
            }
        }

        if policies.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no policy files found)", dir_str),
            });
        }

        policies.sort_by_key(|p| p.effective_year);

        Ok(Self { policies })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the policy for an effective year.
    ///
    /// With `None`, returns the newest loaded policy. With `Some(year)`,
    /// returns exactly that year's policy or `PolicyNotFound` — rates are not
    /// interpolated across years.
    pub fn get_policy(&self, year: Option<i32>) -> EngineResult<&LevyPolicy> {
        match year {
            Some(year) => self
                .policies
                .iter()
                .find(|p| p.effective_year == year)
                .ok_or(EngineError::PolicyNotFound { year }),
            None => self
                .policies
                .last()
                .ok_or(EngineError::ConfigNotFound {
                    path: "no policies loaded".to_string(),
                }),
        }
    }

    /// Returns the effective years of all loaded policies, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.policies.iter().map(|p| p.effective_year).collect()
    }
}
