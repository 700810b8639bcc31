//! Identity for staff records.

/// A record whose identity is its identifier, not its contents.
///
/// Employees and managers are identified by their [`crate::EmployeeNumber`]:
/// a raise, a deduction or a renamed person leaves the record the same one,
/// and two copies carrying one number compare equal.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
