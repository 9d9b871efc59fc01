use std::fmt;
use std::str::FromStr;

use crate::employees::fields::capitalize;
use crate::models::EmployeeStatus;

/// The only fields an employee search may filter on. Each maps to a fixed
/// column of the joined employee query, so caller input never reaches the
/// SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeFilter {
    Id,
    FirstName,
    LastName,
    Department,
    Status,
    Position,
}

impl EmployeeFilter {
    pub const ALL: [EmployeeFilter; 6] = [
        EmployeeFilter::Id,
        EmployeeFilter::FirstName,
        EmployeeFilter::LastName,
        EmployeeFilter::Department,
        EmployeeFilter::Status,
        EmployeeFilter::Position,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EmployeeFilter::Id => "id",
            EmployeeFilter::FirstName => "first_name",
            EmployeeFilter::LastName => "last_name",
            EmployeeFilter::Department => "department",
            EmployeeFilter::Status => "status",
            EmployeeFilter::Position => "position",
        }
    }

    /// Qualified column in the `employee e / department d / position p` join.
    pub fn column(self) -> &'static str {
        match self {
            EmployeeFilter::Id => "e.id",
            EmployeeFilter::FirstName => "e.first_name",
            EmployeeFilter::LastName => "e.last_name",
            EmployeeFilter::Department => "d.department",
            EmployeeFilter::Status => "e.status",
            EmployeeFilter::Position => "p.position",
        }
    }
}

impl fmt::Display for EmployeeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EmployeeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.key() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|f| f.key()).collect();
                format!(
                    "Invalid filter '{s}'. Allowed filters: {}",
                    allowed.join(", ")
                )
            })
    }
}

/// A filter value already coerced to the type its column expects.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Id(i32),
    Text(String),
}

/// A validated search: one allow-listed column, one bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeQuery {
    pub filter: EmployeeFilter,
    pub value: FilterValue,
}

impl EmployeeQuery {
    /// Validate a raw `(filter, value)` pair before any query is built.
    pub fn parse(filter: &str, value: &str) -> Result<Self, String> {
        let filter: EmployeeFilter = filter.trim().parse()?;
        let raw = value.trim();
        if raw.is_empty() {
            return Err(format!("A value is required for filter '{filter}'"));
        }

        let value = match filter {
            EmployeeFilter::Id => {
                let id: i32 = raw
                    .parse()
                    .map_err(|_| format!("Employee id must be an integer, got '{raw}'"))?;
                if id <= 0 {
                    return Err("Employee id must be positive".to_string());
                }
                FilterValue::Id(id)
            }
            EmployeeFilter::FirstName | EmployeeFilter::LastName => {
                FilterValue::Text(capitalize(raw))
            }
            EmployeeFilter::Status => {
                let status: EmployeeStatus = raw.parse()?;
                FilterValue::Text(status.as_str().to_string())
            }
            EmployeeFilter::Department | EmployeeFilter::Position => {
                FilterValue::Text(raw.to_string())
            }
        };

        Ok(Self { filter, value })
    }

    pub fn by_id(id: i32) -> Self {
        Self {
            filter: EmployeeFilter::Id,
            value: FilterValue::Id(id),
        }
    }
}
