use sqlx::SqlitePool;

use super::models::{Measurement, Station};

/// Most recent observation date across all measurements, or `None` if the
/// measurement table is empty.
pub async fn latest_measurement_date(pool: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<String>>("SELECT MAX(date) FROM measurement")
        .fetch_one(pool)
        .await
}

/// Station identifier with the most measurement rows.
///
/// Ties break to the lexicographically smallest identifier so the result is
/// deterministic regardless of the store's grouping order.
pub async fn most_active_station(pool: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT station FROM measurement
         GROUP BY station
         ORDER BY COUNT(*) DESC, station ASC
         LIMIT 1",
    )
    .fetch_optional(pool)
    .await
}

/// All measurements on or after `cutoff`, in the store's natural
/// enumeration order. Date comparison is lexicographic as stored.
pub async fn measurements_since(
    pool: &SqlitePool,
    cutoff: &str,
) -> Result<Vec<Measurement>, sqlx::Error> {
    sqlx::query_as::<_, Measurement>(
        "SELECT id, station, date, prcp, tobs FROM measurement WHERE date >= ?",
    )
    .bind(cutoff)
    .fetch_all(pool)
    .await
}

/// Measurements for one station on or after `cutoff`, in natural
/// enumeration order. NULL readings are included, not filtered.
pub async fn station_measurements_since(
    pool: &SqlitePool,
    station: &str,
    cutoff: &str,
) -> Result<Vec<Measurement>, sqlx::Error> {
    sqlx::query_as::<_, Measurement>(
        "SELECT id, station, date, prcp, tobs FROM measurement
         WHERE station = ? AND date >= ?",
    )
    .bind(station)
    .bind(cutoff)
    .fetch_all(pool)
    .await
}

/// All station records, one per row, in natural enumeration order.
pub async fn list_stations(pool: &SqlitePool) -> Result<Vec<Station>, sqlx::Error> {
    sqlx::query_as::<_, Station>(
        "SELECT id, station, name, latitude, longitude, elevation FROM station ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Min/avg/max temperature for one station over an inclusive date range.
///
/// The aggregate row always exists; each value is NULL when no rows match,
/// including when `start > end`. Date bounds are compared lexicographically
/// as stored, with no validation.
pub async fn station_temp_stats(
    pool: &SqlitePool,
    station: &str,
    start: &str,
    end: &str,
) -> Result<(Option<f64>, Option<f64>, Option<f64>), sqlx::Error> {
    sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(
        "SELECT MIN(tobs), AVG(tobs), MAX(tobs)
         FROM measurement
         WHERE station = ? AND date >= ? AND date <= ?",
    )
    .bind(station)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
}
