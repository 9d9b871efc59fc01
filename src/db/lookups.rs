use sqlx::PgPool;

use crate::models::{LookupEntry, LookupKind};

pub async fn find_id(pool: &PgPool, kind: LookupKind, name: &str) -> Result<Option<i32>, sqlx::Error> {
    let table = kind.table();
    let sql = format!("SELECT id FROM {table} WHERE {table} = $1");
    sqlx::query_scalar::<_, i32>(&sql)
        .bind(name)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, kind: LookupKind) -> Result<Vec<LookupEntry>, sqlx::Error> {
    let table = kind.table();
    let sql = format!("SELECT id, {table} AS name FROM {table} ORDER BY id");
    sqlx::query_as::<_, LookupEntry>(&sql).fetch_all(pool).await
}
