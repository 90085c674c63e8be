//! Climate aggregation service.
//!
//! The four analytical queries behind the API: trailing-12-month
//! precipitation series, station enumeration, raw temperature observations
//! for the most-active station, and min/avg/max temperature statistics over
//! an arbitrary date range. Pure over the reference data: same inputs and
//! unchanged store contents give identical results.

use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::db::queries;
use crate::errors::AppError;
use crate::services::reference::ReferenceData;

/// Min/avg/max temperature over a date range. All three fields are null
/// when no observations match — an empty window is not an error.
#[derive(Debug, Serialize, ToSchema)]
pub struct TempStats {
    /// Minimum observed temperature in °F, or null for an empty range
    pub min_temp: Option<f64>,
    /// Mean observed temperature in °F, or null for an empty range
    pub avg_temp: Option<f64>,
    /// Maximum observed temperature in °F, or null for an empty range
    pub max_temp: Option<f64>,
}

/// Aggregation layer over the observation store and the startup-computed
/// reference values. Holds no mutable state; cheap to clone per request.
#[derive(Clone)]
pub struct ClimateService {
    pool: SqlitePool,
    reference: Arc<ReferenceData>,
}

impl ClimateService {
    pub fn new(pool: SqlitePool, reference: Arc<ReferenceData>) -> Self {
        Self { pool, reference }
    }

    /// Precipitation readings for the trailing 12 months, keyed by date.
    ///
    /// Duplicate dates collapse to the last row the store yields — a lossy
    /// overwrite, not an average. That collapse is part of the service's
    /// observed contract and is kept as-is. No ordering guarantee on the map.
    pub async fn precipitation_series(
        &self,
    ) -> Result<HashMap<String, Option<f64>>, AppError> {
        let rows = queries::measurements_since(&self.pool, &self.reference.one_year_ago).await?;

        let mut series = HashMap::with_capacity(rows.len());
        for m in rows {
            series.insert(m.date, m.prcp);
        }
        Ok(series)
    }

    /// Every station identifier in the store, in natural enumeration order.
    pub async fn station_list(&self) -> Result<Vec<String>, AppError> {
        let stations = queries::list_stations(&self.pool).await?;
        Ok(stations.into_iter().map(|s| s.station).collect())
    }

    /// Raw temperature observations for the most-active station over the
    /// trailing 12 months. Null readings pass through unfiltered.
    pub async fn temperature_observations(&self) -> Result<Vec<Option<f64>>, AppError> {
        let rows = queries::station_measurements_since(
            &self.pool,
            &self.reference.most_active_station,
            &self.reference.one_year_ago,
        )
        .await?;
        Ok(rows.into_iter().map(|m| m.tobs).collect())
    }

    /// Min/avg/max temperature for the most-active station between `start`
    /// and `end` inclusive. `end` defaults to the latest observation date.
    ///
    /// Both bounds are opaque strings compared lexicographically against
    /// stored dates, with no calendar validation: malformed input and
    /// inverted ranges (`start > end`) silently match nothing and yield an
    /// all-null record rather than an error.
    pub async fn temperature_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TempStats, AppError> {
        let end = end.unwrap_or(&self.reference.latest_date);

        let (min_temp, avg_temp, max_temp) = queries::station_temp_stats(
            &self.pool,
            &self.reference.most_active_station,
            start,
            end,
        )
        .await?;

        Ok(TempStats {
            min_temp,
            avg_temp,
            max_temp,
        })
    }
}
