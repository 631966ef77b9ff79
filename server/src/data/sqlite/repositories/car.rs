//! Electric car repository for SQLite operations

use sqlx::{SqliteConnection, SqlitePool};

use crate::data::filters::{Predicate, SqlParams, SqlValue};
use crate::data::sqlite::SqliteError;
use crate::data::sqlite::schema::CAR_COLUMNS;
use crate::data::types::{CarRow, NewCar};

/// List cars matching a predicate, ordered by id
pub async fn list_cars(pool: &SqlitePool, predicate: &Predicate) -> Result<Vec<CarRow>, SqliteError> {
    let mut params = SqlParams::default();
    let where_clause = predicate.to_sql(&mut params);
    let sql = format!(
        "SELECT {} FROM electric_cars WHERE {} ORDER BY id ASC",
        CAR_COLUMNS, where_clause
    );

    tracing::trace!(%sql, params = params.values.len(), "Listing cars");

    let mut query = sqlx::query_as::<_, CarRow>(&sql);
    for value in &params.values {
        query = match value {
            SqlValue::Text(s) => query.bind(s.as_str()),
            SqlValue::Real(n) => query.bind(*n),
        };
    }

    Ok(query.fetch_all(pool).await?)
}

pub async fn get_car(pool: &SqlitePool, id: i64) -> Result<Option<CarRow>, SqliteError> {
    let sql = format!("SELECT {} FROM electric_cars WHERE id = ?", CAR_COLUMNS);
    let row = sqlx::query_as::<_, CarRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Delete a car by id
/// Returns true if removed, false if it didn't exist
pub async fn delete_car(pool: &SqlitePool, id: i64) -> Result<bool, SqliteError> {
    let result = sqlx::query("DELETE FROM electric_cars WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Insert cars in a single transaction
pub async fn insert_cars(pool: &SqlitePool, cars: &[NewCar]) -> Result<u64, SqliteError> {
    let mut tx = pool.begin().await?;
    let inserted = insert_rows(&mut *tx, cars).await?;
    tx.commit().await?;
    Ok(inserted)
}

/// Swap the whole table for `cars` in a single transaction
///
/// Returns `(removed, inserted)`. On failure the previous rows are kept.
pub async fn replace_cars(pool: &SqlitePool, cars: &[NewCar]) -> Result<(u64, u64), SqliteError> {
    let mut tx = pool.begin().await?;
    let removed = sqlx::query("DELETE FROM electric_cars")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let inserted = insert_rows(&mut *tx, cars).await?;
    tx.commit().await?;
    Ok((removed, inserted))
}

async fn insert_rows(conn: &mut SqliteConnection, cars: &[NewCar]) -> Result<u64, SqliteError> {
    let now = chrono::Utc::now().timestamp();
    let mut inserted = 0;

    for car in cars {
        let result = sqlx::query(
            r#"
            INSERT INTO electric_cars (
                brand, model, accel_sec, top_speed_kmh, range_km, efficiency_whkm,
                fast_charge_kmh, rapid_charge, power_train, plug_type, body_style,
                segment, seats, price_euro, date, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.accel_sec)
        .bind(car.top_speed_kmh)
        .bind(car.range_km)
        .bind(car.efficiency_whkm)
        .bind(car.fast_charge_kmh)
        .bind(&car.rapid_charge)
        .bind(&car.power_train)
        .bind(&car.plug_type)
        .bind(&car.body_style)
        .bind(&car.segment)
        .bind(car.seats)
        .bind(car.price_euro)
        .bind(&car.date)
        .bind(now)
        .execute(&mut *conn)
        .await?;
        inserted += result.rows_affected();
    }

    Ok(inserted)
}

/// Delete every car
pub async fn clear_cars(pool: &SqlitePool) -> Result<u64, SqliteError> {
    let result = sqlx::query("DELETE FROM electric_cars")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count_cars(pool: &SqlitePool) -> Result<u64, SqliteError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM electric_cars")
        .fetch_one(pool)
        .await?;
    Ok(count as u64)
}
