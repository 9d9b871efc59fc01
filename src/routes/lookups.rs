use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{LookupEntry, LookupKind};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ValueParams {
    pub value: String,
}

/// `value` is `null` when no row carries the requested name.
#[derive(Serialize)]
pub struct IdResponse {
    pub value: Option<i32>,
}

pub async fn find_id(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(kind): Path<LookupKind>,
    Query(params): Query<ValueParams>,
) -> Result<Json<IdResponse>, AppError> {
    let name = params.value.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("A value is required".to_string()));
    }

    let value = db::lookups::find_id(&state.pool, kind, name).await?;
    if value.is_none() {
        tracing::info!("No {} named {name}", kind.table());
    }
    Ok(Json(IdResponse { value }))
}

pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(kind): Path<LookupKind>,
) -> Result<Json<Vec<LookupEntry>>, AppError> {
    let entries = db::lookups::list(&state.pool, kind).await?;
    Ok(Json(entries))
}
