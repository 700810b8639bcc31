//! Payroll layer: staff registry, salary aggregation and deductions.
//!
//! Everything here works on in-memory values owned by a [`PayrollContext`]
//! the caller constructs and passes around; there is no global state.

pub mod aggregate;
pub mod config;
pub mod context;
pub mod deduction;
pub mod registry;

pub use aggregate::{
    average_salary, highest_paid, lowest_paid, total_income_tax, total_salaries,
    total_salaries_of,
};
pub use config::{NumberingConfig, PayrollConfig};
pub use context::PayrollContext;
pub use deduction::{EMPLOYEE_DEDUCTION_RATE, MANAGER_DEDUCTION_RATE, deduction_rate};
pub use registry::StaffRegistry;
