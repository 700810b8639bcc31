//! Salary aggregation over collections of employees.
//!
//! Collections may contain holes (`None` entries); those are skipped. Plain
//! `&Employee` items work too, since they convert into `Some`.

use staffroll_personnel::Employee;

fn present<'a, I, E>(employees: I) -> impl Iterator<Item = &'a Employee>
where
    I: IntoIterator<Item = E>,
    E: Into<Option<&'a Employee>>,
{
    employees.into_iter().filter_map(Into::into)
}

/// Sum of gross salaries; `0.0` for an empty collection.
pub fn total_salaries<'a, I, E>(employees: I) -> f64
where
    I: IntoIterator<Item = E>,
    E: Into<Option<&'a Employee>>,
{
    present(employees).map(Employee::gross_salary).sum()
}

/// Like [`total_salaries`], with a missing collection totalling `0.0`.
pub fn total_salaries_of<'a, I, E>(employees: Option<I>) -> f64
where
    I: IntoIterator<Item = E>,
    E: Into<Option<&'a Employee>>,
{
    employees.map_or(0.0, |employees| total_salaries(employees))
}

/// Mean gross salary, or `None` when there is nobody to average.
pub fn average_salary<'a, I, E>(employees: I) -> Option<f64>
where
    I: IntoIterator<Item = E>,
    E: Into<Option<&'a Employee>>,
{
    let (count, total) = present(employees).fold((0usize, 0.0), |(count, total), e| {
        (count + 1, total + e.gross_salary())
    });
    (count > 0).then(|| total / count as f64)
}

/// Employee with the highest gross salary (the first one on ties).
pub fn highest_paid<'a, I, E>(employees: I) -> Option<&'a Employee>
where
    I: IntoIterator<Item = E>,
    E: Into<Option<&'a Employee>>,
{
    present(employees).reduce(|best, e| {
        if e.gross_salary().total_cmp(&best.gross_salary()).is_gt() {
            e
        } else {
            best
        }
    })
}

/// Employee with the lowest gross salary (the first one on ties).
pub fn lowest_paid<'a, I, E>(employees: I) -> Option<&'a Employee>
where
    I: IntoIterator<Item = E>,
    E: Into<Option<&'a Employee>>,
{
    present(employees).reduce(|best, e| {
        if e.gross_salary().total_cmp(&best.gross_salary()).is_lt() {
            e
        } else {
            best
        }
    })
}

/// Total income tax withheld at each employee's own rate.
pub fn total_income_tax<'a, I, E>(employees: I) -> f64
where
    I: IntoIterator<Item = E>,
    E: Into<Option<&'a Employee>>,
{
    present(employees).map(Employee::income_tax_withheld).sum()
}
