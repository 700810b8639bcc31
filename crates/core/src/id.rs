//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an employee (plain employee or manager).
///
/// Numbers are allocated by the personnel numbering service and never chosen
/// by callers; the type only wraps and displays them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeNumber(u64);

impl EmployeeNumber {
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for EmployeeNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for EmployeeNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<EmployeeNumber> for u64 {
    fn from(value: EmployeeNumber) -> Self {
        value.0
    }
}

impl FromStr for EmployeeNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("EmployeeNumber: {e}")))?;
        Ok(Self(value))
    }
}
