use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::employees::fields::{
    capitalize, require_text, validate_email, validate_phone, validate_reference,
    validate_salary,
};
use crate::models::EmployeeStatus;

/// Explicit presence for one field of a partial update.
///
/// A missing key deserializes to `Keep` through `#[serde(default)]`; a present
/// key must carry a valid `T`. For non-nullable columns `T` is not an `Option`,
/// so a JSON `null` is a type error instead of silently meaning "no change".
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Change<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T> Change<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Change::Set(_))
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Change::Set(value) => Some(value),
            Change::Keep => None,
        }
    }

    fn map_set(self, f: impl FnOnce(T) -> T) -> Self {
        match self {
            Change::Set(value) => Change::Set(f(value)),
            Change::Keep => Change::Keep,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Change<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Change::Set)
    }
}

/// The sparse set of employee columns a caller wants changed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmployeeChanges {
    pub first_name: Change<String>,
    pub middle_name: Change<Option<String>>,
    pub last_name: Change<String>,
    pub email: Change<String>,
    pub phone: Change<String>,
    pub address: Change<String>,
    pub salary: Change<Decimal>,
    pub department_id: Change<i32>,
    pub position_id: Change<i32>,
    pub status: Change<EmployeeStatus>,
    pub date_resigned: Change<Option<NaiveDate>>,
}

impl EmployeeChanges {
    /// Column names of the supplied fields, in SET-clause order.
    pub fn fields(&self) -> Vec<&'static str> {
        let present = [
            ("first_name", self.first_name.is_set()),
            ("middle_name", self.middle_name.is_set()),
            ("last_name", self.last_name.is_set()),
            ("email", self.email.is_set()),
            ("phone", self.phone.is_set()),
            ("address", self.address.is_set()),
            ("salary", self.salary.is_set()),
            ("department_id", self.department_id.is_set()),
            ("position_id", self.position_id.is_set()),
            ("status", self.status.is_set()),
            ("date_resigned", self.date_resigned.is_set()),
        ];
        present
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Trim text, title-case names and validate every supplied field.
    pub fn normalize(self) -> Result<Self, String> {
        let changes = EmployeeChanges {
            first_name: self.first_name.map_set(|v| capitalize(&v)),
            middle_name: self
                .middle_name
                .map_set(|v| v.map(|m| capitalize(&m)).filter(|m| !m.is_empty())),
            last_name: self.last_name.map_set(|v| capitalize(&v)),
            email: self.email.map_set(|v| v.trim().to_lowercase()),
            phone: self.phone.map_set(|v| v.trim().to_string()),
            address: self.address.map_set(|v| v.trim().to_string()),
            ..self
        };

        if let Some(v) = changes.first_name.as_set() {
            require_text("first_name", v)?;
        }
        if let Some(v) = changes.last_name.as_set() {
            require_text("last_name", v)?;
        }
        if let Some(v) = changes.email.as_set() {
            validate_email(v)?;
        }
        if let Some(v) = changes.phone.as_set() {
            validate_phone(v)?;
        }
        if let Some(v) = changes.address.as_set() {
            require_text("address", v)?;
        }
        if let Some(v) = changes.salary.as_set() {
            validate_salary(*v)?;
        }
        if let Some(v) = changes.department_id.as_set() {
            validate_reference("department_id", *v)?;
        }
        if let Some(v) = changes.position_id.as_set() {
            validate_reference("position_id", *v)?;
        }

        Ok(changes)
    }
}
