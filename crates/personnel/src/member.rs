use serde::Serialize;

use staffroll_core::{EmployeeNumber, Entity};

use crate::employee::{Employee, Role};
use crate::manager::Manager;

/// Any staff record, owned. This is what registries store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StaffMember {
    Employee(Employee),
    Manager(Manager),
}

impl StaffMember {
    pub fn number(&self) -> EmployeeNumber {
        self.employee().number()
    }

    pub fn role(&self) -> Role {
        self.employee().role()
    }

    /// The employee part of the record (for managers, the embedded one).
    pub fn employee(&self) -> &Employee {
        match self {
            StaffMember::Employee(e) => e,
            StaffMember::Manager(m) => m.employee(),
        }
    }

    pub fn employee_mut(&mut self) -> &mut Employee {
        match self {
            StaffMember::Employee(e) => e,
            StaffMember::Manager(m) => m.employee_mut(),
        }
    }

    /// Whether the variant agrees with the embedded employee's role.
    ///
    /// Only fails for a manager's employee part wrapped as
    /// [`StaffMember::Employee`].
    pub fn is_consistent(&self) -> bool {
        match self {
            StaffMember::Employee(e) => e.role() == Role::Employee,
            StaffMember::Manager(m) => m.employee().role() == Role::Manager,
        }
    }

    pub fn as_manager(&self) -> Option<&Manager> {
        match self {
            StaffMember::Manager(m) => Some(m),
            StaffMember::Employee(_) => None,
        }
    }

    /// Department of a manager; plain employees have none.
    pub fn department(&self) -> Option<&str> {
        self.as_manager().and_then(Manager::department)
    }
}

impl From<Employee> for StaffMember {
    fn from(value: Employee) -> Self {
        StaffMember::Employee(value)
    }
}

impl From<Manager> for StaffMember {
    fn from(value: Manager) -> Self {
        StaffMember::Manager(value)
    }
}

impl Entity for StaffMember {
    type Id = EmployeeNumber;

    fn id(&self) -> &Self::Id {
        self.employee().id()
    }
}

impl core::fmt::Display for StaffMember {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StaffMember::Employee(e) => core::fmt::Display::fmt(e, f),
            StaffMember::Manager(m) => core::fmt::Display::fmt(m, f),
        }
    }
}
