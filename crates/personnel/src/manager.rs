use serde::Serialize;

use staffroll_core::{DomainError, DomainResult, EmployeeNumber, Entity};

use crate::date::Date;
use crate::employee::{Employee, Role, or_dash};
use crate::numbering::EmployeeNumbering;
use crate::person::Sex;

/// Manager record: an [`Employee`] with role [`Role::Manager`], plus a
/// department and a subordinate count.
///
/// Managers draw their numbers from the manager range.
#[derive(Debug, Clone, Serialize)]
pub struct Manager {
    #[serde(flatten)]
    employee: Employee,
    department: Option<String>,
    subordinate_count: u32,
}

impl Manager {
    /// Manager with every field at its default.
    pub fn new(numbering: &EmployeeNumbering) -> Self {
        Self {
            employee: Employee::blank(numbering, Role::Manager),
            department: None,
            subordinate_count: 0,
        }
    }

    /// Manager with name, sex, hire date, gross salary and department.
    pub fn appoint(
        numbering: &EmployeeNumbering,
        name: impl Into<String>,
        sex: Option<Sex>,
        hire_date: Option<Date>,
        gross_salary: f64,
        department: impl Into<String>,
    ) -> DomainResult<Self> {
        let employee = Employee::hire_as(
            numbering,
            Role::Manager,
            name.into(),
            sex,
            hire_date,
            gross_salary,
        )?;

        Ok(Self {
            employee,
            department: Some(department.into()),
            subordinate_count: 0,
        })
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn employee_mut(&mut self) -> &mut Employee {
        &mut self.employee
    }

    pub fn number(&self) -> EmployeeNumber {
        self.employee.number()
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn set_department(&mut self, department: Option<String>) {
        self.department = department;
    }

    pub fn subordinate_count(&self) -> u32 {
        self.subordinate_count
    }

    pub fn set_subordinate_count(&mut self, count: i64) -> DomainResult<()> {
        let count = u32::try_from(count).map_err(|_| {
            DomainError::validation(format!(
                "subordinate count must be between 0 and {}: {count}",
                u32::MAX
            ))
        })?;
        self.subordinate_count = count;
        Ok(())
    }

    /// Raise `target`'s gross salary by `amount`.
    ///
    /// Returns `false` and changes nothing when there is no target, when the
    /// target is a manager (this manager included), or when `amount` is not
    /// strictly positive. These are refusals, not errors.
    ///
    /// Only `target` changes; a registry holding its own copy is updated
    /// through the registry's raise operations instead.
    pub fn raise_salary(&self, target: Option<&mut Employee>, amount: f64) -> bool {
        let Some(target) = target else {
            tracing::debug!(manager = %self.number(), "raise rejected: no target");
            return false;
        };

        match target.role() {
            Role::Manager => {
                tracing::debug!(
                    manager = %self.number(),
                    target = %target.number(),
                    "raise rejected: target is a manager"
                );
                return false;
            }
            Role::Employee => {}
        }

        if !(amount > 0.0) {
            tracing::debug!(
                manager = %self.number(),
                target = %target.number(),
                amount,
                "raise rejected: amount must be positive"
            );
            return false;
        }

        let raised = target.gross_salary() + amount;
        if target.set_gross_salary(raised).is_err() {
            return false;
        }

        tracing::info!(
            manager = %self.number(),
            target = %target.number(),
            amount,
            gross_salary = raised,
            "salary raised"
        );
        true
    }
}

impl PartialEq for Manager {
    fn eq(&self, other: &Self) -> bool {
        self.employee == other.employee
    }
}

impl Eq for Manager {}

impl core::hash::Hash for Manager {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.employee.hash(state);
    }
}

impl Entity for Manager {
    type Id = EmployeeNumber;

    fn id(&self) -> &Self::Id {
        self.employee.id()
    }
}

impl core::fmt::Display for Manager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Manager #{} '{}', department '{}', {} subordinates, hired {}, gross {:.2}",
            self.number(),
            or_dash(self.employee.name()),
            or_dash(self.department()),
            self.subordinate_count,
            self.employee
                .hire_date()
                .map(|d| d.to_string())
                .as_deref()
                .unwrap_or("-"),
            self.employee.gross_salary(),
        )
    }
}
