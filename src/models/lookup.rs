use serde::{Deserialize, Serialize};

/// The static tables an employee references by foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    Department,
    Position,
    Gender,
}

impl LookupKind {
    /// Table name; each table keeps its label in a column of the same name.
    pub fn table(self) -> &'static str {
        match self {
            LookupKind::Department => "department",
            LookupKind::Position => "position",
            LookupKind::Gender => "gender",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct LookupEntry {
    pub id: i32,
    pub name: String,
}
