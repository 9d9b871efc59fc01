use sqlx::PgPool;

/// Log an audit event. This is called explicitly in handlers after mutations.
pub async fn log_event(
    pool: &PgPool,
    user_id: Option<i32>,
    action: &str,
    resource_type: &str,
    resource_id: Option<i32>,
    details: Option<serde_json::Value>,
) {
    if let Err(e) =
        crate::db::audit::log_event(pool, user_id, action, resource_type, resource_id, details)
            .await
    {
        tracing::error!("Failed to log audit event {action}: {e}");
    }
}
