//! Employee number allocation.

use std::sync::atomic::{AtomicU64, Ordering};

use staffroll_core::EmployeeNumber;

use crate::employee::Role;

/// First number handed out to plain employees.
pub const EMPLOYEE_NUMBER_START: u64 = 100_000_000;

/// First number handed out to managers.
pub const MANAGER_NUMBER_START: u64 = 200_000_000;

/// Role-ranged employee number allocator.
///
/// One cursor per [`Role`]; every allocation is a single atomic
/// fetch-and-increment, so numbers stay unique when records are built from
/// several threads. Uniqueness holds for the lifetime of this value only.
/// The ranges are not guarded against running into each other.
#[derive(Debug)]
pub struct EmployeeNumbering {
    next_employee: AtomicU64,
    next_manager: AtomicU64,
}

impl Default for EmployeeNumbering {
    fn default() -> Self {
        Self::with_seeds(EMPLOYEE_NUMBER_START, MANAGER_NUMBER_START)
    }
}

impl EmployeeNumbering {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seeds(employee_start: u64, manager_start: u64) -> Self {
        Self {
            next_employee: AtomicU64::new(employee_start),
            next_manager: AtomicU64::new(manager_start),
        }
    }

    fn cursor(&self, role: Role) -> &AtomicU64 {
        match role {
            Role::Employee => &self.next_employee,
            Role::Manager => &self.next_manager,
        }
    }

    /// Allocate the next number for `role`.
    pub fn allocate(&self, role: Role) -> EmployeeNumber {
        let number = EmployeeNumber::from_u64(self.cursor(role).fetch_add(1, Ordering::Relaxed));
        tracing::debug!(employee_number = %number, ?role, "allocated employee number");
        number
    }

    /// The number the next allocation for `role` would return.
    pub fn peek(&self, role: Role) -> EmployeeNumber {
        EmployeeNumber::from_u64(self.cursor(role).load(Ordering::Relaxed))
    }
}
