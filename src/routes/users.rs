use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::auth::password;
use crate::db;
use crate::db::users::NewUserRow;
use crate::employees::fields::{capitalize, require_text, validate_email, validate_reference};
use crate::error::{constraint_error, AppError};
use crate::middleware::audit;
use crate::models::Role;
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub role: Role,
    pub password: String,
    pub employee_id: i32,
}

#[derive(Serialize)]
pub struct CreateUserResponse {
    pub status: &'static str,
    pub message: String,
    pub id: i32,
}

/// Give an employee a login. Admins may change data, users may only read it.
pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateUser>,
) -> Result<(StatusCode, Json<CreateUserResponse>), AppError> {
    auth.require_admin()?;

    let first_name = capitalize(&req.first_name);
    let last_name = capitalize(&req.last_name);
    let email = req.email.trim().to_lowercase();

    require_text("first_name", &first_name).map_err(AppError::BadRequest)?;
    require_text("last_name", &last_name).map_err(AppError::BadRequest)?;
    validate_email(&email).map_err(AppError::BadRequest)?;
    validate_reference("employee_id", req.employee_id).map_err(AppError::BadRequest)?;

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let user = db::users::create(
        &state.pool,
        &NewUserRow {
            first_name: &first_name,
            last_name: &last_name,
            email: &email,
            date_of_birth: Some(req.date_of_birth),
            password_hash: &pw_hash,
            role: req.role,
            employee_id: Some(req.employee_id),
        },
    )
    .await
    .map_err(|e| constraint_error(e, "user"))?;

    tracing::info!(user_id = user.id, role = req.role.as_str(), "User added");

    audit::log_event(
        &state.pool,
        Some(auth.user_id),
        "user.created",
        "user",
        Some(user.id),
        Some(serde_json::json!({ "role": req.role, "employee_id": req.employee_id })),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            status: "Success",
            message: format!("User {} {} added successfully", user.first_name, user.last_name),
            id: user.id,
        }),
    ))
}
