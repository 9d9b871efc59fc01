use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

/// Which table an email existence check looks in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistenceTarget {
    #[default]
    Employee,
    User,
}

#[derive(Deserialize)]
pub struct EmailParams {
    pub value: String,
    #[serde(default)]
    pub who: ExistenceTarget,
}

#[derive(Deserialize)]
pub struct PhoneParams {
    pub value: String,
}

#[derive(Serialize)]
pub struct ExistsResponse {
    pub exist: bool,
}

/// Uniqueness pre-check for clients. The unique constraint stays authoritative:
/// a concurrent insert can still win between this check and the caller's insert.
pub async fn email(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Query(params): Query<EmailParams>,
) -> Result<Json<ExistsResponse>, AppError> {
    let email = params.value.trim().to_lowercase();
    if email.is_empty() {
        return Err(AppError::BadRequest("An email value is required".to_string()));
    }

    let exist = match params.who {
        ExistenceTarget::Employee => db::employees::email_exists(&state.pool, &email).await?,
        ExistenceTarget::User => db::users::email_exists(&state.pool, &email).await?,
    };

    tracing::debug!(who = ?params.who, exist, "Email existence check");
    Ok(Json(ExistsResponse { exist }))
}

pub async fn phone(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Query(params): Query<PhoneParams>,
) -> Result<Json<ExistsResponse>, AppError> {
    let phone = params.value.trim();
    if phone.is_empty() {
        return Err(AppError::BadRequest("A phone value is required".to_string()));
    }

    let exist = db::employees::phone_exists(&state.pool, phone).await?;
    Ok(Json(ExistsResponse { exist }))
}
