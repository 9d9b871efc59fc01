pub mod audit_event;
pub mod employee;
pub mod lookup;
pub mod user;

pub use audit_event::AuditEvent;
pub use employee::{EmployeeRecord, EmployeeStatus, InsertedEmployee, NewEmployee};
pub use lookup::{LookupEntry, LookupKind};
pub use user::{Role, User};
