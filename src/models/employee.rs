use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee joined with the human-readable department, position and gender names.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub salary: Decimal,
    pub department: String,
    pub position: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub hired_date: NaiveDate,
    pub status: String,
    pub date_resigned: Option<NaiveDate>,
}

/// Identity fields handed back after an insert.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct InsertedEmployee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewEmployee {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub salary: Decimal,
    pub department_id: i32,
    pub position_id: i32,
    pub gender_id: i32,
    pub date_of_birth: NaiveDate,
    pub hired_date: NaiveDate,
    #[serde(default)]
    pub status: EmployeeStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[default]
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Resigned,
    Terminated,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 4] = [
        EmployeeStatus::Active,
        EmployeeStatus::OnLeave,
        EmployeeStatus::Resigned,
        EmployeeStatus::Terminated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Resigned => "Resigned",
            EmployeeStatus::Terminated => "Terminated",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = String;

    /// Accepts the stored label in any case, with `_` standing in for a space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', " ");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("Unknown employee status '{}'", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("active".parse::<EmployeeStatus>(), Ok(EmployeeStatus::Active));
        assert_eq!("On Leave".parse::<EmployeeStatus>(), Ok(EmployeeStatus::OnLeave));
        assert_eq!("on_leave".parse::<EmployeeStatus>(), Ok(EmployeeStatus::OnLeave));
        assert!("retired".parse::<EmployeeStatus>().is_err());
    }

    #[test]
    fn status_serializes_as_stored_label() {
        let json = serde_json::to_value(EmployeeStatus::OnLeave).unwrap();
        assert_eq!(json, serde_json::json!("On Leave"));
    }
}
