//! Personnel domain module (people, employees, managers).
//!
//! This crate contains the personnel records and their validation rules,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! Employee numbers are drawn from an [`EmployeeNumbering`] passed in by the
//! caller, never from hidden global state.

pub mod date;
pub mod employee;
pub mod manager;
pub mod member;
pub mod numbering;
pub mod person;

pub use date::Date;
pub use employee::{Employee, EmployeeDetails, Role};
pub use manager::Manager;
pub use member::StaffMember;
pub use numbering::{EMPLOYEE_NUMBER_START, EmployeeNumbering, MANAGER_NUMBER_START};
pub use person::{Person, Sex};
