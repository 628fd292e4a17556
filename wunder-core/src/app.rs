//! Run sequencing: consult the cache, fall back to the network, refresh
//! the cache, hand the report back for display.

use std::time::SystemTime;

use chrono::Utc;

use crate::{cache::Cache, client::WeatherSource, error::WeatherError, model::Report};

/// Obtain a report, from cache when a fresh entry exists, otherwise from
/// `source`.
///
/// A fresh cache hit never touches the network. On a miss or a stale
/// entry the connectivity probe runs first, then both feeds are fetched,
/// stamped, and saved before the report is returned. Any failure along
/// the way aborts the run without writing the cache.
///
/// `now` is the wall-clock instant freshness is judged against; callers
/// pass `SystemTime::now()`.
pub async fn obtain_report(
    source: &dyn WeatherSource,
    cache: &Cache,
    now: SystemTime,
) -> Result<Report, WeatherError> {
    if cache.exists() && cache.is_valid(now)? {
        return cache.load();
    }

    source.probe().await?;

    let conditions = source.conditions().await?;
    let forecast = source.forecast().await?;

    let report = Report {
        datetime: Utc::now(),
        conditions,
        forecast,
    };

    cache.save(&report)?;

    Ok(report)
}
