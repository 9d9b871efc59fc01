pub mod audit;
pub mod auth;
pub mod employees;
pub mod exists;
pub mod lookups;
pub mod users;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        // Employees
        .route(
            "/api/v1/employees",
            get(employees::search).post(employees::create),
        )
        .route(
            "/api/v1/employees/{id}",
            get(employees::get).patch(employees::update),
        )
        .route("/api/v1/employees/{id}/resign", post(employees::resign))
        // Users
        .route("/api/v1/users", post(users::create))
        // Existence checks
        .route("/api/v1/exists/email", get(exists::email))
        .route("/api/v1/exists/phone", get(exists::phone))
        // Lookup tables
        .route("/api/v1/ids/{kind}", get(lookups::find_id))
        .route("/api/v1/lookups/{kind}", get(lookups::list))
        // Audit
        .route("/api/v1/audit", get(audit::list))
}
