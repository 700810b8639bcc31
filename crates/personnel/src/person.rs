use serde::{Deserialize, Serialize};

use crate::date::Date;

/// Recorded sex of a person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

/// Personal data shared by every staff record.
///
/// Embedded by value in [`crate::Employee`]. No format validation is applied
/// to any field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: Option<String>,
    sex: Sex,
    national_id: Option<String>,
    birth_date: Option<Date>,
}

impl Person {
    /// A missing `sex` is recorded as [`Sex::Unknown`].
    pub fn new(
        name: Option<String>,
        sex: Option<Sex>,
        national_id: Option<String>,
        birth_date: Option<Date>,
    ) -> Self {
        Self {
            name,
            sex: sex.unwrap_or_default(),
            national_id,
            birth_date,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Clearing the sex resets it to [`Sex::Unknown`].
    pub fn set_sex(&mut self, sex: Option<Sex>) {
        self.sex = sex.unwrap_or_default();
    }

    pub fn national_id(&self) -> Option<&str> {
        self.national_id.as_deref()
    }

    pub fn set_national_id(&mut self, national_id: Option<String>) {
        self.national_id = national_id;
    }

    pub fn birth_date(&self) -> Option<Date> {
        self.birth_date
    }

    pub fn set_birth_date(&mut self, birth_date: Option<Date>) {
        self.birth_date = birth_date;
    }
}
