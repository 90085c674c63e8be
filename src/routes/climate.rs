//! Climate data HTTP endpoints.
//!
//! - GET /api/v1.0/precipitation
//! - GET /api/v1.0/stations
//! - GET /api/v1.0/tobs
//! - GET /api/v1.0/:start and /api/v1.0/:start/:end
//!
//! Every endpoint answers 200 with JSON. Date path segments are passed to
//! the service as opaque strings; malformed or out-of-range values produce
//! null-filled or empty payloads rather than error statuses.

use axum::extract::{Path, State};
use axum::Json;
use std::collections::HashMap;

use crate::errors::AppError;
use crate::services::climate::{ClimateService, TempStats};

/// Precipitation readings for the trailing 12 months, keyed by date.
#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    tag = "Climate",
    responses(
        (status = 200, description = "Date to precipitation (inches, nullable) for the last year"),
    )
)]
pub async fn precipitation(
    State(service): State<ClimateService>,
) -> Result<Json<HashMap<String, Option<f64>>>, AppError> {
    Ok(Json(service.precipitation_series().await?))
}

/// All station identifiers.
#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    tag = "Climate",
    responses(
        (status = 200, description = "Station identifier strings", body = Vec<String>),
    )
)]
pub async fn stations(
    State(service): State<ClimateService>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(service.station_list().await?))
}

/// Temperature observations for the most-active station over the trailing
/// 12 months.
#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    tag = "Climate",
    responses(
        (status = 200, description = "Observed temperatures in °F, nullable", body = Vec<Option<f64>>),
    )
)]
pub async fn tobs(
    State(service): State<ClimateService>,
) -> Result<Json<Vec<Option<f64>>>, AppError> {
    Ok(Json(service.temperature_observations().await?))
}

/// Temperature statistics from `start` through the latest observation date.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    tag = "Climate",
    params(
        ("start" = String, Path, description = "Start date, expected YYYY-MM-DD (not validated)"),
    ),
    responses(
        (status = 200, description = "Min/avg/max temperature, all null when nothing matches", body = TempStats),
    )
)]
pub async fn temp_stats_from(
    State(service): State<ClimateService>,
    Path(start): Path<String>,
) -> Result<Json<TempStats>, AppError> {
    Ok(Json(service.temperature_stats(&start, None).await?))
}

/// Temperature statistics over an inclusive date range.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    tag = "Climate",
    params(
        ("start" = String, Path, description = "Start date, expected YYYY-MM-DD (not validated)"),
        ("end" = String, Path, description = "End date, expected YYYY-MM-DD (not validated)"),
    ),
    responses(
        (status = 200, description = "Min/avg/max temperature, all null when nothing matches", body = TempStats),
    )
)]
pub async fn temp_stats_range(
    State(service): State<ClimateService>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TempStats>, AppError> {
    Ok(Json(service.temperature_stats(&start, Some(&end)).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reference::ReferenceData;
    use crate::test_support::seeded_pool;
    use std::sync::Arc;

    async fn state() -> ClimateService {
        let pool = seeded_pool(&[
            ("USC00519281", "2017-08-20", Some(0.1), Some(80.0)),
            ("USC00519281", "2017-08-23", Some(0.0), Some(82.0)),
        ])
        .await;
        let reference = ReferenceData::load(&pool).await.unwrap();
        ClimateService::new(pool, Arc::new(reference))
    }

    #[tokio::test]
    async fn test_precipitation_handler_shape() {
        let Json(series) = precipitation(State(state().await)).await.unwrap();
        assert_eq!(series.get("2017-08-20"), Some(&Some(0.1)));
        assert_eq!(series.get("2017-08-23"), Some(&Some(0.0)));
    }

    #[tokio::test]
    async fn test_stations_handler_shape() {
        let Json(list) = stations(State(state().await)).await.unwrap();
        assert_eq!(list, vec!["USC00519281".to_string()]);
    }

    #[tokio::test]
    async fn test_tobs_handler_shape() {
        let Json(list) = tobs(State(state().await)).await.unwrap();
        assert_eq!(list, vec![Some(80.0), Some(82.0)]);
    }

    #[tokio::test]
    async fn test_temp_stats_open_ended_defaults_to_latest() {
        let Json(stats) = temp_stats_from(State(state().await), Path("2017-08-01".to_string()))
            .await
            .unwrap();
        assert_eq!(stats.min_temp, Some(80.0));
        assert_eq!(stats.avg_temp, Some(81.0));
        assert_eq!(stats.max_temp, Some(82.0));
    }

    #[tokio::test]
    async fn test_temp_stats_range_garbage_dates_still_200_nulls() {
        let Json(stats) = temp_stats_range(
            State(state().await),
            Path(("first".to_string(), "second".to_string())),
        )
        .await
        .unwrap();
        assert_eq!(stats.min_temp, None);
        assert_eq!(stats.avg_temp, None);
        assert_eq!(stats.max_temp, None);
    }

    #[test]
    fn test_temp_stats_serializes_nulls() {
        let stats = TempStats {
            min_temp: None,
            avg_temp: None,
            max_temp: None,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"min_temp": null, "avg_temp": null, "max_temp": null})
        );
    }
}
