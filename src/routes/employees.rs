use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::employees::{self, EmployeeChanges, EmployeeQuery};
use crate::error::{constraint_error, AppError};
use crate::middleware::audit;
use crate::models::{EmployeeRecord, NewEmployee};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub filter: String,
    pub value: String,
}

#[derive(Serialize)]
pub struct InsertResponse {
    pub status: &'static str,
    pub message: String,
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize)]
pub struct UpdateResponse {
    pub success: bool,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ResignRequest {
    pub date_resigned: Option<NaiveDate>,
}

fn require_positive_id(id: i32) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::BadRequest(
            "Employee id must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// `GET /employees?filter=<key>&value=<v>`. The filter key is validated
/// against the allow-list before any query is built.
pub async fn search(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<EmployeeRecord>>, AppError> {
    let query = EmployeeQuery::parse(&params.filter, &params.value).map_err(AppError::BadRequest)?;

    tracing::debug!(filter = %query.filter, "Searching employees");

    let employees = db::employees::search(&state.pool, &query).await?;
    if employees.is_empty() {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    Ok(Json(employees))
}

pub async fn get(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<EmployeeRecord>, AppError> {
    require_positive_id(id)?;

    let employee = db::employees::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;
    Ok(Json(employee))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<NewEmployee>,
) -> Result<(StatusCode, Json<InsertResponse>), AppError> {
    auth.require_admin()?;

    let employee = employees::normalize_new(req).map_err(AppError::BadRequest)?;

    let inserted = db::employees::create(&state.pool, &employee)
        .await
        .map_err(|e| {
            let err = constraint_error(e, "employee");
            if !matches!(err, AppError::Database(_)) {
                tracing::warn!("Rejected new employee {}: {err}", employee.email);
            }
            err
        })?;

    tracing::info!(employee_id = inserted.id, "Employee added");

    audit::log_event(
        &state.pool,
        Some(auth.user_id),
        "employee.created",
        "employee",
        Some(inserted.id),
        None,
    )
    .await;

    let message = format!(
        "{} {} added successfully as an employee.",
        inserted.first_name, inserted.last_name
    );

    Ok((
        StatusCode::CREATED,
        Json(InsertResponse {
            status: "Success",
            message,
            id: inserted.id,
            first_name: inserted.first_name,
            last_name: inserted.last_name,
        }),
    ))
}

/// `PATCH /employees/{id}` with only the fields to change.
pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(changes): Json<EmployeeChanges>,
) -> Result<Json<UpdateResponse>, AppError> {
    auth.require_admin()?;
    require_positive_id(id)?;

    if changes.is_empty() {
        return Err(AppError::BadRequest("No update fields provided".to_string()));
    }

    let changes = changes.normalize().map_err(AppError::BadRequest)?;
    let fields = changes.fields();

    let touched = db::employees::update(&state.pool, id, &changes)
        .await
        .map_err(|e| constraint_error(e, "employee"))?;

    if touched == 0 {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    tracing::info!(employee_id = id, fields = ?fields, "Employee updated");

    audit::log_event(
        &state.pool,
        Some(auth.user_id),
        "employee.updated",
        "employee",
        Some(id),
        Some(serde_json::json!({ "fields": fields })),
    )
    .await;

    Ok(Json(UpdateResponse { success: true }))
}

/// Mark an employee resigned. Employees are never hard-deleted.
pub async fn resign(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(req): Json<ResignRequest>,
) -> Result<Json<EmployeeRecord>, AppError> {
    auth.require_admin()?;
    require_positive_id(id)?;

    let date = req
        .date_resigned
        .unwrap_or_else(|| Utc::now().date_naive());

    let touched = db::employees::resign(&state.pool, id, date).await?;
    if touched == 0 {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    tracing::info!(employee_id = id, %date, "Employee resigned");

    audit::log_event(
        &state.pool,
        Some(auth.user_id),
        "employee.resigned",
        "employee",
        Some(id),
        Some(serde_json::json!({ "date_resigned": date })),
    )
    .await;

    let employee = db::employees::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;
    Ok(Json(employee))
}
