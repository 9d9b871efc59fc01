use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::employees::{Change, EmployeeChanges, EmployeeQuery, FilterValue};
use crate::models::{EmployeeRecord, EmployeeStatus, InsertedEmployee, NewEmployee};

const SELECT_JOINED: &str = "SELECT
        e.id, e.first_name, e.middle_name, e.last_name, e.email, e.phone,
        e.address, e.salary, d.department, p.position, g.gender,
        e.date_of_birth, e.hired_date, e.status, e.date_resigned
     FROM employee e
     JOIN department d ON e.department_id = d.id
     JOIN gender g ON e.gender_id = g.id
     JOIN position p ON e.position_id = p.id";

fn search_sql(query: &EmployeeQuery) -> String {
    format!(
        "{SELECT_JOINED} WHERE {} = $1 ORDER BY e.id",
        query.filter.column()
    )
}

/// Run an allow-listed search. The column comes from the filter enum, the
/// value is always bound.
pub async fn search(pool: &PgPool, query: &EmployeeQuery) -> Result<Vec<EmployeeRecord>, sqlx::Error> {
    let sql = search_sql(query);
    let q = sqlx::query_as::<_, EmployeeRecord>(&sql);
    let q = match &query.value {
        FilterValue::Id(id) => q.bind(*id),
        FilterValue::Text(text) => q.bind(text.as_str()),
    };
    q.fetch_all(pool).await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<EmployeeRecord>, sqlx::Error> {
    let sql = search_sql(&EmployeeQuery::by_id(id));
    sqlx::query_as::<_, EmployeeRecord>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert one employee in its own transaction.
pub async fn create(pool: &PgPool, employee: &NewEmployee) -> Result<InsertedEmployee, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query_as::<_, InsertedEmployee>(
        "INSERT INTO employee (
            first_name, middle_name, last_name, email, phone, address, salary,
            department_id, position_id, gender_id, date_of_birth, hired_date, status)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
         RETURNING id, first_name, last_name",
    )
    .bind(&employee.first_name)
    .bind(employee.middle_name.as_deref())
    .bind(&employee.last_name)
    .bind(&employee.email)
    .bind(&employee.phone)
    .bind(&employee.address)
    .bind(employee.salary)
    .bind(employee.department_id)
    .bind(employee.position_id)
    .bind(employee.gender_id)
    .bind(employee.date_of_birth)
    .bind(employee.hired_date)
    .bind(employee.status.as_str())
    .fetch_one(&mut *tx)
    .await;

    match result {
        Ok(inserted) => {
            tx.commit().await?;
            Ok(inserted)
        }
        Err(e) => {
            tx.rollback().await?;
            Err(e)
        }
    }
}

/// Build `UPDATE employee SET <supplied columns> WHERE id = $n`. Only fields
/// present in `changes` appear in the SET clause; the row key is bound last.
pub fn build_update<'a>(id: i32, changes: &'a EmployeeChanges) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::<Postgres>::new("UPDATE employee SET ");
    let mut set = qb.separated(", ");

    if let Change::Set(v) = &changes.first_name {
        set.push("first_name = ").push_bind_unseparated(v.as_str());
    }
    if let Change::Set(v) = &changes.middle_name {
        set.push("middle_name = ").push_bind_unseparated(v.as_deref());
    }
    if let Change::Set(v) = &changes.last_name {
        set.push("last_name = ").push_bind_unseparated(v.as_str());
    }
    if let Change::Set(v) = &changes.email {
        set.push("email = ").push_bind_unseparated(v.as_str());
    }
    if let Change::Set(v) = &changes.phone {
        set.push("phone = ").push_bind_unseparated(v.as_str());
    }
    if let Change::Set(v) = &changes.address {
        set.push("address = ").push_bind_unseparated(v.as_str());
    }
    if let Change::Set(v) = &changes.salary {
        set.push("salary = ").push_bind_unseparated(*v);
    }
    if let Change::Set(v) = &changes.department_id {
        set.push("department_id = ").push_bind_unseparated(*v);
    }
    if let Change::Set(v) = &changes.position_id {
        set.push("position_id = ").push_bind_unseparated(*v);
    }
    if let Change::Set(v) = &changes.status {
        set.push("status = ").push_bind_unseparated(v.as_str());
    }
    if let Change::Set(v) = &changes.date_resigned {
        set.push("date_resigned = ").push_bind_unseparated(*v);
    }

    qb.push(" WHERE id = ").push_bind(id);
    qb
}

/// Apply a partial update atomically. Returns the number of rows touched
/// (0 when no employee has this id). Callers must reject empty change sets.
pub async fn update(pool: &PgPool, id: i32, changes: &EmployeeChanges) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = build_update(id, changes).build().execute(&mut *tx).await;

    match result {
        Ok(done) if done.rows_affected() == 1 => {
            tx.commit().await?;
            Ok(1)
        }
        Ok(done) => {
            tx.rollback().await?;
            Ok(done.rows_affected())
        }
        Err(e) => {
            tx.rollback().await?;
            Err(e)
        }
    }
}

/// Soft lifecycle end: mark the employee resigned as of `date`.
pub async fn resign(pool: &PgPool, id: i32, date: NaiveDate) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE employee SET status = $2, date_resigned = $3 WHERE id = $1",
    )
    .bind(id)
    .bind(EmployeeStatus::Resigned.as_str())
    .bind(date)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM employee WHERE email = $1)")
        .bind(email)
        .fetch_one(pool)
        .await
}

pub async fn phone_exists(pool: &PgPool, phone: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM employee WHERE phone = $1)")
        .bind(phone)
        .fetch_one(pool)
        .await
}
