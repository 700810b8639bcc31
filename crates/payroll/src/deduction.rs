//! Percentage deductions on gross salary.

use staffroll_personnel::{Employee, Role};

/// Cut applied to a manager's gross salary per deduction.
pub const MANAGER_DEDUCTION_RATE: f64 = 0.05;

/// Cut applied to a plain employee's gross salary per deduction.
pub const EMPLOYEE_DEDUCTION_RATE: f64 = 0.10;

pub fn deduction_rate(role: Role) -> f64 {
    match role {
        Role::Manager => MANAGER_DEDUCTION_RATE,
        Role::Employee => EMPLOYEE_DEDUCTION_RATE,
    }
}

/// Apply one role-rated deduction to `employee` and return the new gross salary.
///
/// Repeated calls compound. Bookkeeping of how often this happened is the
/// registry's job.
pub(crate) fn deduct(employee: &mut Employee) -> f64 {
    let rate = deduction_rate(employee.role());
    let before = employee.gross_salary();
    let after = before * (1.0 - rate);

    // A non-negative salary times a factor in (0, 1] stays non-negative.
    if let Err(e) = employee.set_gross_salary(after) {
        tracing::warn!(employee_number = %employee.number(), error = %e, "deduction not applied");
        return before;
    }

    tracing::info!(
        employee_number = %employee.number(),
        role = ?employee.role(),
        rate,
        before,
        after,
        "percentage deduction applied"
    );
    after
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffroll_personnel::{EmployeeNumbering, Manager};

    #[test]
    fn rates_follow_role() {
        assert_eq!(deduction_rate(Role::Manager), 0.05);
        assert_eq!(deduction_rate(Role::Employee), 0.10);
    }

    #[test]
    fn deduct_cuts_by_role_rate() {
        let numbering = EmployeeNumbering::new();
        let mut employee = Employee::hire(&numbering, "Diego", None, None, 1000.0).unwrap();
        let mut manager = Manager::appoint(&numbering, "Alfonso", None, None, 1200.0, "rrhh").unwrap();

        assert!((deduct(&mut employee) - 900.0).abs() < 1e-9);
        assert!((deduct(manager.employee_mut()) - 1140.0).abs() < 1e-9);
    }

    #[test]
    fn deduct_on_zero_salary_stays_zero() {
        let numbering = EmployeeNumbering::new();
        let mut employee = Employee::new(&numbering);
        assert_eq!(deduct(&mut employee), 0.0);
    }
}
