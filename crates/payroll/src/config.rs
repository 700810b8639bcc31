//! Configuration loading and representation.

use serde::Deserialize;

use staffroll_core::{DomainError, DomainResult};
use staffroll_personnel::{EMPLOYEE_NUMBER_START, MANAGER_NUMBER_START};

const EMPLOYEE_START_VAR: &str = "STAFFROLL_EMPLOYEE_NUMBER_START";
const MANAGER_START_VAR: &str = "STAFFROLL_MANAGER_NUMBER_START";

/// Seeds for the two employee number ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NumberingConfig {
    pub employee_start: u64,
    pub manager_start: u64,
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            employee_start: EMPLOYEE_NUMBER_START,
            manager_start: MANAGER_NUMBER_START,
        }
    }
}

impl NumberingConfig {
    /// Both ranges must start at different numbers.
    pub fn validate(&self) -> DomainResult<()> {
        if self.employee_start == self.manager_start {
            return Err(DomainError::validation(format!(
                "employee and manager numbering both start at {}",
                self.employee_start
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    pub numbering: NumberingConfig,
}

impl PayrollConfig {
    /// Read overrides from the process environment.
    ///
    /// Unset variables keep their defaults. Unparsable values are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(start) = read_u64(&lookup, EMPLOYEE_START_VAR) {
            config.numbering.employee_start = start;
        }
        if let Some(start) = read_u64(&lookup, MANAGER_START_VAR) {
            config.numbering.manager_start = start;
        }
        config
    }
}

fn read_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "ignoring invalid numbering seed; using default");
            None
        }
    }
}
