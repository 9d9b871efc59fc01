use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
    BadRequest(String),
    Conflict(String),
    RateLimited(String),
    Internal(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            AppError::RateLimited(msg) => write!(f, "Rate Limited: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::RateLimited(msg) => (StatusCode::TOO_MANY_REQUESTS, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

/// Classify a write failure. Unique, foreign key and check violations are the
/// caller's problem and map to 409/400; everything else stays a database error.
pub fn constraint_error(err: sqlx::Error, entity: &str) -> AppError {
    let sqlx::Error::Database(ref db_err) = err else {
        return AppError::Database(err);
    };

    let constraint = db_err.constraint().unwrap_or_default();

    if db_err.is_unique_violation() {
        let field = constraint_field(constraint).unwrap_or("value");
        return AppError::Conflict(format!("A {entity} with this {field} already exists"));
    }

    if db_err.is_foreign_key_violation() {
        let field = constraint_field(constraint).unwrap_or("reference");
        return AppError::BadRequest(format!("Referenced {field} does not exist"));
    }

    if db_err.is_check_violation() {
        let field = constraint_field(constraint).unwrap_or("value");
        return AppError::BadRequest(format!("Invalid {field} for {entity}"));
    }

    AppError::Database(err)
}

/// Postgres names constraints `<table>_<column>_<suffix>`; recover the column.
fn constraint_field(constraint: &str) -> Option<&'static str> {
    const FIELDS: [(&str, &str); 9] = [
        ("_email_", "email"),
        ("_phone_", "phone"),
        ("_department_id_", "department"),
        ("_position_id_", "position"),
        ("_gender_id_", "gender"),
        ("_employee_id_", "employee"),
        ("_status_", "status"),
        ("_salary_", "salary"),
        ("_role_", "role"),
    ];

    FIELDS
        .iter()
        .find(|(needle, _)| constraint.contains(needle))
        .map(|(_, field)| *field)
}
