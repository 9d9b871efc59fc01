use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::db::users::NewUserRow;
use crate::employees::fields::{capitalize, require_text, validate_email};
use crate::error::AppError;
use crate::middleware::audit;
use crate::models::{Role, User};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub role: Role,
}

fn issue_token(state: &SharedState, user: &User) -> Result<AuthResponse, AppError> {
    let role = Role::from_stored(&user.role)
        .ok_or_else(|| AppError::Internal(format!("User {} has unknown role {}", user.id, user.role)))?;

    let claims = Claims::new(user.id, role, state.config.token_ttl_minutes);
    let access_token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(AuthResponse {
        access_token,
        token_type: "Bearer",
        role,
    })
}

/// Create the first administrator. Only allowed while no user exists.
pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let first_name = capitalize(&req.first_name);
    let last_name = capitalize(&req.last_name);
    let email = req.email.trim().to_lowercase();

    require_text("first_name", &first_name).map_err(AppError::BadRequest)?;
    require_text("last_name", &last_name).map_err(AppError::BadRequest)?;
    validate_email(&email).map_err(AppError::BadRequest)?;

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    // Advisory lock prevents concurrent bootstrap registrations
    let mut tx = state.pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock(1)")
        .execute(&mut *tx)
        .await?;

    let count = db::users::count_all(&mut *tx).await?;
    if count > 0 {
        tx.rollback().await?;
        return Err(AppError::Forbidden(
            "Registration is disabled. Ask an administrator for an account.".to_string(),
        ));
    }

    let user = db::users::create(
        &mut *tx,
        &NewUserRow {
            first_name: &first_name,
            last_name: &last_name,
            email: &email,
            date_of_birth: None,
            password_hash: &pw_hash,
            role: Role::Admin,
            employee_id: None,
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(user_id = user.id, "Bootstrap administrator registered");

    audit::log_event(
        &state.pool,
        Some(user.id),
        "user.registered",
        "user",
        Some(user.id),
        None,
    )
    .await;

    Ok(Json(issue_token(&state, &user)?))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = req.email.trim().to_lowercase();

    if state.login_limiter.check(&email).is_err() {
        return Err(AppError::RateLimited(
            "Too many login attempts. Please try again later.".to_string(),
        ));
    }

    let Some(user) = db::users::find_by_email(&state.pool, &email).await? else {
        state.login_limiter.record_failure(&email);
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    };

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;

    if !valid {
        state.login_limiter.record_failure(&email);
        tracing::warn!(user_id = user.id, "Failed login attempt");
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    state.login_limiter.reset(&email);

    audit::log_event(
        &state.pool,
        Some(user.id),
        "user.login",
        "user",
        Some(user.id),
        None,
    )
    .await;

    Ok(Json(issue_token(&state, &user)?))
}
