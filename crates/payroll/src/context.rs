use staffroll_core::DomainResult;
use staffroll_personnel::EmployeeNumbering;

use crate::config::PayrollConfig;
use crate::registry::StaffRegistry;

/// Payroll service context: the numbering counters plus the staff registry.
///
/// Build one at process start (or one per test) and pass it by reference.
/// Records built from different contexts may share numbers.
#[derive(Debug, Default)]
pub struct PayrollContext {
    numbering: EmployeeNumbering,
    registry: StaffRegistry,
}

impl PayrollContext {
    /// Context with the default numbering seeds and an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PayrollConfig) -> DomainResult<Self> {
        config.numbering.validate()?;

        tracing::info!(
            employee_start = config.numbering.employee_start,
            manager_start = config.numbering.manager_start,
            "payroll context initialized"
        );

        Ok(Self {
            numbering: EmployeeNumbering::with_seeds(
                config.numbering.employee_start,
                config.numbering.manager_start,
            ),
            registry: StaffRegistry::new(),
        })
    }

    pub fn numbering(&self) -> &EmployeeNumbering {
        &self.numbering
    }

    pub fn registry(&self) -> &StaffRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumberingConfig;
    use staffroll_personnel::{Employee, Manager, Role};

    #[test]
    fn contexts_are_isolated() {
        let a = PayrollContext::new();
        let b = PayrollContext::new();

        let first = Employee::new(a.numbering());
        let also_first = Employee::new(b.numbering());
        assert_eq!(first.number(), also_first.number());

        a.registry().register(Some(first.into()));
        assert_eq!(a.registry().count(), 1);
        assert_eq!(b.registry().count(), 0);
    }

    #[test]
    fn from_config_uses_configured_seeds() {
        let config = PayrollConfig {
            numbering: NumberingConfig {
                employee_start: 10,
                manager_start: 20,
            },
        };
        let context = PayrollContext::from_config(&config).unwrap();

        assert_eq!(Employee::new(context.numbering()).number().as_u64(), 10);
        assert_eq!(Manager::new(context.numbering()).number().as_u64(), 20);
        assert_eq!(context.numbering().peek(Role::Employee).as_u64(), 11);
    }

    #[test]
    fn from_config_rejects_identical_seeds() {
        let config = PayrollConfig {
            numbering: NumberingConfig {
                employee_start: 10,
                manager_start: 10,
            },
        };
        assert!(PayrollContext::from_config(&config).unwrap_err().is_validation());
    }
}
