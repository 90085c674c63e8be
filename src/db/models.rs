use sqlx::FromRow;

/// A fixed observation site. Immutable reference data, loaded from the
/// `station` table of the read-only observation file.
///
/// Statically declared schema — the columns are mapped here once rather
/// than reflected from the store at runtime.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)] // All columns mapped for schema completeness; routes use a subset
pub struct Station {
    pub id: i64,
    /// Station identifier string, e.g. "USC00519281". Unique.
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One observation record: station, calendar date, precipitation, temperature.
///
/// `date` stays a `YYYY-MM-DD` string end to end; the fixed format makes
/// lexicographic comparison equivalent to date comparison, so range filters
/// never parse it. Duplicate (station, date) rows are possible and tolerated.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Measurement {
    pub id: i64,
    /// Station identifier. May dangle (no matching `Station` row); not
    /// enforced at this layer.
    pub station: String,
    pub date: String,
    /// Precipitation in inches. NULL when not recorded.
    pub prcp: Option<f64>,
    /// Observed temperature in °F. NULL when not recorded.
    pub tobs: Option<f64>,
}
