use serde::{Deserialize, Serialize};

use staffroll_core::{DomainError, DomainResult, EmployeeNumber, Entity};

use crate::date::Date;
use crate::numbering::EmployeeNumbering;
use crate::person::{Person, Sex};

/// Discriminant carried by every employee-like record.
///
/// Numbering range, raise eligibility and deduction rate all switch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
}

impl Role {
    pub fn is_manager(self) -> bool {
        matches!(self, Role::Manager)
    }
}

const INCOME_TAX_RATE_MIN: f64 = 0.0;
const INCOME_TAX_RATE_MAX: f64 = 1.0;

/// Every field of an employee except the employee number.
///
/// Input for [`Employee::with_details`]. Gross salary is not part of it: an
/// employee built this way starts at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDetails {
    pub name: Option<String>,
    pub sex: Option<Sex>,
    pub national_id: Option<String>,
    pub birth_date: Option<Date>,
    pub social_security_number: Option<String>,
    pub hire_date: Option<Date>,
    pub income_tax_rate: f64,
    pub job_title: Option<String>,
}

/// Employee record.
///
/// Identity is the employee number alone: two values with the same number are
/// the same employee, whatever their other fields say.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    #[serde(flatten)]
    person: Person,
    number: EmployeeNumber,
    role: Role,
    social_security_number: Option<String>,
    hire_date: Option<Date>,
    income_tax_rate: f64,
    job_title: Option<String>,
    gross_salary: f64,
}

fn check_gross_salary(gross_salary: f64) -> DomainResult<()> {
    // Written so that NaN fails too.
    if !(gross_salary >= 0.0) {
        return Err(DomainError::validation(format!(
            "gross salary cannot be negative: {gross_salary}"
        )));
    }
    Ok(())
}

fn check_income_tax_rate(rate: f64) -> DomainResult<()> {
    if !(INCOME_TAX_RATE_MIN..=INCOME_TAX_RATE_MAX).contains(&rate) {
        return Err(DomainError::validation(format!(
            "income tax rate must be between {INCOME_TAX_RATE_MIN} and {INCOME_TAX_RATE_MAX}: {rate}"
        )));
    }
    Ok(())
}

impl Employee {
    /// Employee with every field at its default.
    pub fn new(numbering: &EmployeeNumbering) -> Self {
        Self::blank(numbering, Role::Employee)
    }

    /// Employee with name, sex, hire date and gross salary.
    pub fn hire(
        numbering: &EmployeeNumbering,
        name: impl Into<String>,
        sex: Option<Sex>,
        hire_date: Option<Date>,
        gross_salary: f64,
    ) -> DomainResult<Self> {
        Self::hire_as(numbering, Role::Employee, name.into(), sex, hire_date, gross_salary)
    }

    /// Employee with every field except the number; gross salary starts at zero.
    pub fn with_details(numbering: &EmployeeNumbering, details: EmployeeDetails) -> DomainResult<Self> {
        check_income_tax_rate(details.income_tax_rate)?;

        let person = Person::new(details.name, details.sex, details.national_id, details.birth_date);
        Ok(Self {
            person,
            number: numbering.allocate(Role::Employee),
            role: Role::Employee,
            social_security_number: details.social_security_number,
            hire_date: details.hire_date,
            income_tax_rate: details.income_tax_rate,
            job_title: details.job_title,
            gross_salary: 0.0,
        })
    }

    pub(crate) fn blank(numbering: &EmployeeNumbering, role: Role) -> Self {
        Self {
            person: Person::default(),
            number: numbering.allocate(role),
            role,
            social_security_number: None,
            hire_date: None,
            income_tax_rate: 0.0,
            job_title: None,
            gross_salary: 0.0,
        }
    }

    /// Validates before allocating, so a rejected record never consumes a number.
    pub(crate) fn hire_as(
        numbering: &EmployeeNumbering,
        role: Role,
        name: String,
        sex: Option<Sex>,
        hire_date: Option<Date>,
        gross_salary: f64,
    ) -> DomainResult<Self> {
        check_gross_salary(gross_salary)?;

        let mut employee = Self::blank(numbering, role);
        employee.person = Person::new(Some(name), sex, None, None);
        employee.hire_date = hire_date;
        employee.gross_salary = gross_salary;
        Ok(employee)
    }

    pub fn number(&self) -> EmployeeNumber {
        self.number
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    pub fn name(&self) -> Option<&str> {
        self.person.name()
    }

    pub fn social_security_number(&self) -> Option<&str> {
        self.social_security_number.as_deref()
    }

    pub fn set_social_security_number(&mut self, social_security_number: Option<String>) {
        self.social_security_number = social_security_number;
    }

    pub fn hire_date(&self) -> Option<Date> {
        self.hire_date
    }

    pub fn set_hire_date(&mut self, hire_date: Option<Date>) {
        self.hire_date = hire_date;
    }

    pub fn income_tax_rate(&self) -> f64 {
        self.income_tax_rate
    }

    pub fn set_income_tax_rate(&mut self, rate: f64) -> DomainResult<()> {
        check_income_tax_rate(rate)?;
        self.income_tax_rate = rate;
        Ok(())
    }

    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    pub fn set_job_title(&mut self, job_title: Option<String>) {
        self.job_title = job_title;
    }

    pub fn gross_salary(&self) -> f64 {
        self.gross_salary
    }

    pub fn set_gross_salary(&mut self, gross_salary: f64) -> DomainResult<()> {
        check_gross_salary(gross_salary)?;
        self.gross_salary = gross_salary;
        Ok(())
    }

    /// Amount withheld at the current income tax rate.
    ///
    /// The rate is stored, never applied to the gross salary itself.
    pub fn income_tax_withheld(&self) -> f64 {
        self.gross_salary * self.income_tax_rate
    }

    pub fn net_salary(&self) -> f64 {
        self.gross_salary - self.income_tax_withheld()
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Employee {}

impl core::hash::Hash for Employee {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl Entity for Employee {
    type Id = EmployeeNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}

pub(crate) fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

impl core::fmt::Display for Employee {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Employee #{} '{}' ({:?}), title '{}', hired {}, gross {:.2}, income tax {}",
            self.number,
            or_dash(self.name()),
            self.person.sex(),
            or_dash(self.job_title()),
            self.hire_date.map(|d| d.to_string()).as_deref().unwrap_or("-"),
            self.gross_salary,
            self.income_tax_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hire_date() -> Option<Date> {
        Some(Date::new(15, 11, 2000).unwrap())
    }

    #[test]
    fn default_employee_has_zeroed_payroll_fields() {
        let numbering = EmployeeNumbering::new();
        let employee = Employee::new(&numbering);

        assert_eq!(employee.number().as_u64(), 100_000_000);
        assert_eq!(employee.role(), Role::Employee);
        assert_eq!(employee.name(), None);
        assert_eq!(employee.person().sex(), Sex::Unknown);
        assert_eq!(employee.gross_salary(), 0.0);
        assert_eq!(employee.income_tax_rate(), 0.0);
        assert_eq!(employee.hire_date(), None);
        assert_eq!(employee.job_title(), None);
    }

    #[test]
    fn hire_sets_partial_fields() {
        let numbering = EmployeeNumbering::new();
        let employee =
            Employee::hire(&numbering, "Diego", Some(Sex::Male), hire_date(), 1000.12).unwrap();

        assert_eq!(employee.name(), Some("Diego"));
        assert_eq!(employee.person().sex(), Sex::Male);
        assert_eq!(employee.hire_date(), hire_date());
        assert_eq!(employee.gross_salary(), 1000.12);
        assert_eq!(employee.person().national_id(), None);
    }

    #[test]
    fn hire_rejects_negative_salary_without_consuming_a_number() {
        let numbering = EmployeeNumbering::new();
        let err = Employee::hire(&numbering, "Benito", None, None, -1.0).unwrap_err();
        assert!(err.is_validation());

        let next = Employee::new(&numbering);
        assert_eq!(next.number().as_u64(), 100_000_000);
    }

    #[test]
    fn with_details_sets_every_field_and_starts_at_zero_salary() {
        let numbering = EmployeeNumbering::new();
        let details = EmployeeDetails {
            name: Some("Marta".to_string()),
            sex: Some(Sex::Female),
            national_id: Some("12345678Z".to_string()),
            birth_date: Some(Date::new(3, 4, 1990).unwrap()),
            social_security_number: Some("28/1234567/89".to_string()),
            hire_date: Some(Date::new(3, 4, 2018).unwrap()),
            income_tax_rate: 0.15,
            job_title: Some("Analyst".to_string()),
        };

        let employee = Employee::with_details(&numbering, details).unwrap();
        assert_eq!(employee.name(), Some("Marta"));
        assert_eq!(employee.person().national_id(), Some("12345678Z"));
        assert_eq!(employee.social_security_number(), Some("28/1234567/89"));
        assert_eq!(employee.income_tax_rate(), 0.15);
        assert_eq!(employee.job_title(), Some("Analyst"));
        assert_eq!(employee.gross_salary(), 0.0);
    }

    #[test]
    fn with_details_rejects_out_of_range_tax_rate() {
        let numbering = EmployeeNumbering::new();
        for rate in [1.5, -0.1, f64::NAN] {
            let details = EmployeeDetails {
                income_tax_rate: rate,
                ..EmployeeDetails::default()
            };
            let err = Employee::with_details(&numbering, details).unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn setters_validate_salary_and_tax_rate() {
        let numbering = EmployeeNumbering::new();
        let mut employee = Employee::new(&numbering);

        assert!(employee.set_gross_salary(-0.01).unwrap_err().is_validation());
        assert!(employee.set_gross_salary(f64::NAN).unwrap_err().is_validation());
        assert!(employee.set_income_tax_rate(1.5).unwrap_err().is_validation());
        assert!(employee.set_income_tax_rate(-0.1).unwrap_err().is_validation());
        assert_eq!(employee.gross_salary(), 0.0);
        assert_eq!(employee.income_tax_rate(), 0.0);

        employee.set_gross_salary(0.0).unwrap();
        employee.set_income_tax_rate(0.0).unwrap();
        employee.set_income_tax_rate(1.0).unwrap();
        employee.set_gross_salary(2500.0).unwrap();
        assert_eq!(employee.gross_salary(), 2500.0);
        assert_eq!(employee.income_tax_rate(), 1.0);
    }

    #[test]
    fn number_is_stable_across_mutation() {
        let numbering = EmployeeNumbering::new();
        let mut employee = Employee::new(&numbering);
        let number = employee.number();

        employee.person_mut().set_name(Some("Vicente".to_string()));
        employee.person_mut().set_sex(Some(Sex::Male));
        employee.set_gross_salary(1020.45).unwrap();
        employee.set_income_tax_rate(0.2).unwrap();
        employee.set_job_title(Some("Clerk".to_string()));
        employee.set_hire_date(Some(Date::new(14, 11, 2020).unwrap()));
        employee.set_social_security_number(Some("x".to_string()));

        assert_eq!(employee.number(), number);
    }

    #[test]
    fn equality_is_by_number_only() {
        let numbering = EmployeeNumbering::new();
        let a = Employee::hire(&numbering, "Silvio", None, None, 1070.5).unwrap();
        let mut same = a.clone();
        same.set_gross_salary(1.0).unwrap();
        same.person_mut().set_name(Some("Someone else".to_string()));
        let other = Employee::hire(&numbering, "Silvio", None, None, 1070.5).unwrap();

        assert_eq!(a, same);
        assert_ne!(a, other);
        assert_eq!(a.id(), &a.number());
    }

    #[test]
    fn net_salary_applies_income_tax_rate() {
        let numbering = EmployeeNumbering::new();
        let mut employee = Employee::hire(&numbering, "Alfredo", None, None, 1000.0).unwrap();
        employee.set_income_tax_rate(0.25).unwrap();

        assert_eq!(employee.income_tax_withheld(), 250.0);
        assert_eq!(employee.net_salary(), 750.0);
        assert_eq!(employee.gross_salary(), 1000.0);
    }

    #[test]
    fn display_summarizes_record() {
        let numbering = EmployeeNumbering::new();
        let employee = Employee::hire(&numbering, "Diego", Some(Sex::Male), hire_date(), 1000.12).unwrap();
        let line = employee.to_string();

        assert!(line.starts_with("Employee #100000000 'Diego'"));
        assert!(line.contains("hired 2000-11-15"));
        assert!(line.contains("gross 1000.12"));
    }
}
