use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use staffroll_core::EmployeeNumber;
use staffroll_personnel::{Employee, Manager, StaffMember};

use crate::aggregate::total_salaries;
use crate::deduction::deduct;

#[derive(Debug, Default)]
struct RegistryState {
    members: HashMap<EmployeeNumber, StaffMember>,
    deductions: HashMap<EmployeeNumber, u32>,
}

impl RegistryState {
    fn record_deduction(&mut self, number: EmployeeNumber) -> u32 {
        let count = self.deductions.entry(number).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    fn sorted_members(&self, mut keep: impl FnMut(&StaffMember) -> bool) -> Vec<StaffMember> {
        let mut members: Vec<StaffMember> =
            self.members.values().filter(|m| keep(m)).cloned().collect();
        members.sort_by_key(StaffMember::number);
        members
    }
}

/// In-memory staff registry keyed by employee number.
///
/// Holds its own copy of each registered record plus an informational count
/// of percentage deductions per employee. Deductions and raises that go
/// through the registry update the stored copy together with the caller's.
/// Both tables sit behind one lock, so mutations never interleave with each
/// other or with totals.
#[derive(Debug, Default)]
pub struct StaffRegistry {
    state: RwLock<RegistryState>,
}

impl StaffRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section leaves both tables consistent, so a poisoned lock
    // still guards usable data.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `member` under its employee number, replacing any previous
    /// entry with that number.
    ///
    /// Returns `false` when there is no member, or when the record's variant
    /// and its role disagree (a manager's employee part wrapped as a plain
    /// employee), which would otherwise shadow the real manager entry.
    pub fn register(&self, member: Option<StaffMember>) -> bool {
        let Some(member) = member else {
            tracing::debug!("register rejected: no member");
            return false;
        };
        if !member.is_consistent() {
            tracing::debug!(
                employee_number = %member.number(),
                role = ?member.role(),
                "register rejected: variant does not match role"
            );
            return false;
        }

        let number = member.number();
        let replaced = self.write().members.insert(number, member).is_some();
        tracing::debug!(employee_number = %number, replaced, "staff member registered");
        true
    }

    pub fn lookup(&self, number: EmployeeNumber) -> Option<StaffMember> {
        self.read().members.get(&number).cloned()
    }

    /// Remove a member and its deduction count.
    pub fn remove(&self, number: EmployeeNumber) -> Option<StaffMember> {
        let mut state = self.write();
        state.deductions.remove(&number);
        let removed = state.members.remove(&number);
        if removed.is_some() {
            tracing::debug!(employee_number = %number, "staff member removed");
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.read().members.len()
    }

    pub fn clear(&self) {
        let mut state = self.write();
        state.members.clear();
        state.deductions.clear();
        tracing::debug!("staff registry cleared");
    }

    /// Sum of gross salaries over registered members.
    pub fn total_salaries(&self) -> f64 {
        let state = self.read();
        total_salaries(state.members.values().map(StaffMember::employee))
    }

    /// Apply one role-rated percentage deduction to `employee` and bump its
    /// deduction count.
    ///
    /// When `employee` is registered, the stored copy takes the same cut under
    /// the same write guard, so [`Self::total_salaries`] follows.
    ///
    /// Nothing stops repeated calls: each one cuts again (compounding) and
    /// counts again. Callers wanting apply-once semantics check
    /// [`Self::can_apply_deduction`] first.
    pub fn apply_percentage_deduction(&self, employee: Option<&mut Employee>) {
        let Some(employee) = employee else {
            return;
        };

        let number = employee.number();
        let mut state = self.write();
        deduct(employee);
        if let Some(stored) = state.members.get_mut(&number) {
            deduct(stored.employee_mut());
        }
        let count = state.record_deduction(number);
        tracing::debug!(employee_number = %number, count, "deduction counted");
    }

    /// Apply the deduction to the registered copy of `number`, in place.
    ///
    /// Returns `false` when nobody is registered under that number.
    pub fn apply_registered_deduction(&self, number: EmployeeNumber) -> bool {
        let mut state = self.write();
        let Some(member) = state.members.get_mut(&number) else {
            return false;
        };

        deduct(member.employee_mut());
        let count = state.record_deduction(number);
        tracing::debug!(employee_number = %number, count, "deduction counted");
        true
    }

    /// `manager` raises `target` by `amount`, and the registered copy of
    /// `target` (if any) by the same amount.
    ///
    /// Same refusals as [`Manager::raise_salary`]; the stored copy only moves
    /// when the caller's copy did.
    pub fn raise_salary(&self, manager: &Manager, target: Option<&mut Employee>, amount: f64) -> bool {
        let Some(target) = target else {
            return manager.raise_salary(None, amount);
        };

        let mut state = self.write();
        if !manager.raise_salary(Some(&mut *target), amount) {
            return false;
        }
        if let Some(stored) = state.members.get_mut(&target.number()) {
            manager.raise_salary(Some(stored.employee_mut()), amount);
        }
        true
    }

    /// `manager` raises the registered employee `number` by `amount`, in place.
    ///
    /// Returns `false` when nobody is registered under that number or the
    /// raise is refused.
    pub fn raise_registered(&self, manager: &Manager, number: EmployeeNumber, amount: f64) -> bool {
        let mut state = self.write();
        let Some(member) = state.members.get_mut(&number) else {
            return false;
        };
        manager.raise_salary(Some(member.employee_mut()), amount)
    }

    /// `true` only while no deduction has been counted for `employee`.
    pub fn can_apply_deduction(&self, employee: Option<&Employee>) -> bool {
        employee.is_some_and(|e| self.deduction_count(Some(e)) == 0)
    }

    pub fn deduction_count(&self, employee: Option<&Employee>) -> u32 {
        employee
            .and_then(|e| self.read().deductions.get(&e.number()).copied())
            .unwrap_or(0)
    }

    /// All registered members, ordered by employee number.
    pub fn members(&self) -> Vec<StaffMember> {
        self.read().sorted_members(|_| true)
    }

    /// Registered managers, ordered by employee number.
    pub fn managers(&self) -> Vec<Manager> {
        self.read()
            .sorted_members(|m| m.as_manager().is_some())
            .into_iter()
            .filter_map(|m| match m {
                StaffMember::Manager(manager) => Some(manager),
                StaffMember::Employee(_) => None,
            })
            .collect()
    }

    /// Registered members whose department is `department`.
    ///
    /// Only managers carry a department.
    pub fn members_in_department(&self, department: &str) -> Vec<StaffMember> {
        self.read()
            .sorted_members(|m| m.department() == Some(department))
    }
}
