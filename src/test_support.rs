//! In-memory SQLite fixtures for service tests.
//!
//! A single-connection pool keeps the `:memory:` database alive for the
//! test's lifetime (every pooled connection to `:memory:` would otherwise
//! open its own empty database).

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Pool over an empty database with the observation schema in place.
pub async fn empty_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT NOT NULL,
            name TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            elevation REAL NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .expect("Failed to create station table");

    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT NOT NULL,
            date TEXT NOT NULL,
            prcp REAL,
            tobs REAL
        )",
    )
    .execute(&pool)
    .await
    .expect("Failed to create measurement table");

    pool
}

/// Pool seeded with measurement rows `(station, date, prcp, tobs)`,
/// inserted in the given order. Each distinct station identifier also gets
/// a station row, registered in first-seen order.
pub async fn seeded_pool(rows: &[(&str, &str, Option<f64>, Option<f64>)]) -> SqlitePool {
    let pool = empty_pool().await;

    let mut seen: Vec<&str> = Vec::new();
    for &(station, _, _, _) in rows {
        if !seen.contains(&station) {
            seen.push(station);
        }
    }
    for station in seen {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?, ?, 21.27, -157.82, 3.0)",
        )
        .bind(station)
        .bind(format!("{} TEST SITE, HI US", station))
        .execute(&pool)
        .await
        .expect("Failed to insert station fixture");
    }

    for &(station, date, prcp, tobs) in rows {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(station)
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(&pool)
            .await
            .expect("Failed to insert measurement fixture");
    }

    pool
}
