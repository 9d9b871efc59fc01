//! Employee request semantics that do not touch the database: the search
//! allow-list, sparse change sets and per-field normalization.

pub mod changes;
pub mod fields;
pub mod filter;

pub use changes::{Change, EmployeeChanges};
pub use filter::{EmployeeFilter, EmployeeQuery, FilterValue};

use crate::models::NewEmployee;

/// Normalize and validate an insert payload the same way partial updates are.
pub fn normalize_new(employee: NewEmployee) -> Result<NewEmployee, String> {
    let employee = NewEmployee {
        first_name: fields::capitalize(&employee.first_name),
        middle_name: employee
            .middle_name
            .map(|m| fields::capitalize(&m))
            .filter(|m| !m.is_empty()),
        last_name: fields::capitalize(&employee.last_name),
        email: employee.email.trim().to_lowercase(),
        phone: employee.phone.trim().to_string(),
        address: employee.address.trim().to_string(),
        ..employee
    };

    fields::require_text("first_name", &employee.first_name)?;
    fields::require_text("last_name", &employee.last_name)?;
    fields::require_text("address", &employee.address)?;
    fields::validate_email(&employee.email)?;
    fields::validate_phone(&employee.phone)?;
    fields::validate_salary(employee.salary)?;
    fields::validate_reference("department_id", employee.department_id)?;
    fields::validate_reference("position_id", employee.position_id)?;
    fields::validate_reference("gender_id", employee.gender_id)?;

    if employee.hired_date < employee.date_of_birth {
        return Err("hired_date must not be before date_of_birth".to_string());
    }

    Ok(employee)
}
