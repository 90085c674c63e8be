//! Reference data computed once at startup.
//!
//! Three derived values anchor every aggregation query: the most recent
//! observation date, the one-year-ago cutoff, and the most-active station.
//! They are computed before the listener binds and never refreshed — there
//! is no write path, so the store cannot drift under them.

use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;

use crate::db::queries;
use crate::errors::AppError;

/// Length of the trailing observation window, as a fixed day offset.
/// Not "one calendar year": leap years are not special-cased.
const TRAILING_WINDOW_DAYS: i64 = 365;

/// Startup-computed, read-only derived values. Shared across handlers via
/// `Arc`; concurrent reads need no locking.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Maximum observation date across all measurements, `YYYY-MM-DD`.
    pub latest_date: String,
    /// `latest_date` minus 365 days, `YYYY-MM-DD`.
    pub one_year_ago: String,
    /// Station identifier with the highest measurement count. Ties break
    /// to the lexicographically smallest identifier.
    pub most_active_station: String,
}

impl ReferenceData {
    /// Compute all reference values from the store.
    ///
    /// Fails with [`AppError::EmptyDataset`] when the measurement table has
    /// no rows, and [`AppError::MalformedDate`] when the latest date cannot
    /// be parsed for the cutoff arithmetic. Both are fatal to startup.
    pub async fn load(pool: &SqlitePool) -> Result<Self, AppError> {
        let latest_date = queries::latest_measurement_date(pool)
            .await?
            .ok_or_else(|| {
                AppError::EmptyDataset("no measurement rows; cannot compute latest date".into())
            })?;

        let one_year_ago = cutoff_date(&latest_date)?;

        // The empty-dataset case is caught above, so a most-active station
        // always exists here.
        let most_active_station = queries::most_active_station(pool).await?.ok_or_else(|| {
            AppError::EmptyDataset("no measurement rows; cannot rank stations".into())
        })?;

        tracing::info!(
            "Reference data: latest_date={}, one_year_ago={}, most_active_station={}",
            latest_date,
            one_year_ago,
            most_active_station
        );

        Ok(Self {
            latest_date,
            one_year_ago,
            most_active_station,
        })
    }
}

/// The one place that needs real calendar arithmetic: parse the latest date
/// and subtract the trailing window. Everything else compares date strings
/// lexicographically.
fn cutoff_date(latest_date: &str) -> Result<String, AppError> {
    let parsed = NaiveDate::parse_from_str(latest_date, "%Y-%m-%d").map_err(|e| {
        AppError::MalformedDate(format!(
            "latest observation date {:?} is not YYYY-MM-DD: {}",
            latest_date, e
        ))
    })?;
    Ok((parsed - Duration::days(TRAILING_WINDOW_DAYS))
        .format("%Y-%m-%d")
        .to_string())
}
