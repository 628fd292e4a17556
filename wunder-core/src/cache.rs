//! Single-slot, file-backed memoization of one [`Report`].
//!
//! The backing file is the entry; its filesystem mtime is the entry's
//! creation time, and expiry is implicit in the passage of wall-clock
//! time. One slot per install, not per city: switching cities reuses and
//! overwrites the same file. That is a documented limitation, not a bug.

use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use crate::{error::WeatherError, model::Report};

/// A cached report is reused for one hour before it goes stale.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Well-known cache location, one file per install.
pub fn default_path() -> PathBuf {
    std::env::temp_dir().join("weather_app_cache.tmp")
}

#[derive(Debug, Clone)]
pub struct Cache {
    path: PathBuf,
    ttl: Duration,
}

impl Cache {
    pub fn new(path: PathBuf, ttl: Duration) -> Self {
        Self { path, ttl }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file is present. No side effects.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whether the entry is still fresh at `now`: true iff
    /// `now < mtime + ttl`, strictly, so a request at the exact expiry
    /// instant sees a stale entry.
    ///
    /// Requires the file to exist; callers check [`Cache::exists`] first,
    /// and a missing file is an error here, not an implicit `false`.
    pub fn is_valid(&self, now: SystemTime) -> Result<bool, WeatherError> {
        let mtime = fs::metadata(&self.path)?.modified()?;

        Ok(now < mtime + self.ttl)
    }

    /// Deserialize the full file contents back into a [`Report`].
    pub fn load(&self) -> Result<Report, WeatherError> {
        let bytes = fs::read(&self.path)?;

        serde_json::from_slice(&bytes).map_err(|source| WeatherError::CorruptCache {
            path: self.path.clone(),
            source,
        })
    }

    /// Serialize `report` and move it into place, overwriting any prior
    /// entry. Writes go to a sibling temporary path first so a crash
    /// mid-write cannot leave a truncated file looking like a valid entry.
    pub fn save(&self, report: &Report) -> Result<(), WeatherError> {
        let bytes = serde_json::to_vec(report).map_err(|source| WeatherError::CorruptCache {
            path: self.path.clone(),
            source,
        })?;

        let staging = self.path.with_extension("partial");
        fs::write(&staging, &bytes)?;
        fs::rename(&staging, &self.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use tempfile::TempDir;

    fn fixture_report() -> Report {
        Report {
            datetime: Utc.with_ymd_and_hms(2016, 4, 2, 12, 30, 0).unwrap(),
            conditions: json!({
                "current_observation": {
                    "display_location": { "full": "San Francisco, CA" },
                    "temp_c": 14.2,
                    "relative_humidity": "72%",
                    "weather": "Partly Cloudy",
                }
            }),
            forecast: json!({
                "forecast": {
                    "simpleforecast": {
                        "forecastday": [
                            { "conditions": "Clear", "high": { "celsius": "18" } },
                            { "conditions": "Rain", "high": { "celsius": "15" } },
                        ]
                    }
                }
            }),
        }
    }

    fn cache_in(dir: &TempDir) -> Cache {
        Cache::new(dir.path().join("weather_app_cache.tmp"), DEFAULT_TTL)
    }

    #[test]
    fn save_then_load_round_trips_field_for_field() {
        let dir = TempDir::new().expect("temp dir");
        let cache = cache_in(&dir);
        let report = fixture_report();

        cache.save(&report).expect("save must succeed");
        let loaded = cache.load().expect("load must succeed");

        assert_eq!(loaded, report);
    }

    #[test]
    fn exists_reflects_file_presence() {
        let dir = TempDir::new().expect("temp dir");
        let cache = cache_in(&dir);

        assert!(!cache.exists());
        cache.save(&fixture_report()).expect("save must succeed");
        assert!(cache.exists());
    }

    #[test]
    fn save_leaves_no_staging_file_behind() {
        let dir = TempDir::new().expect("temp dir");
        let cache = cache_in(&dir);

        cache.save(&fixture_report()).expect("save must succeed");

        assert!(!cache.path().with_extension("partial").exists());
    }

    #[test]
    fn validity_boundary_is_strict() {
        let dir = TempDir::new().expect("temp dir");
        let cache = cache_in(&dir);
        cache.save(&fixture_report()).expect("save must succeed");

        let mtime = fs::metadata(cache.path())
            .and_then(|m| m.modified())
            .expect("mtime");

        let expiry = mtime + DEFAULT_TTL;
        assert!(!cache.is_valid(expiry).unwrap(), "exact expiry instant is stale");
        assert!(cache.is_valid(expiry - Duration::from_secs(1)).unwrap());
    }

    #[test]
    fn staleness_never_un_expires() {
        let dir = TempDir::new().expect("temp dir");
        let cache = cache_in(&dir);
        cache.save(&fixture_report()).expect("save must succeed");

        let mtime = fs::metadata(cache.path())
            .and_then(|m| m.modified())
            .expect("mtime");

        let mut t = mtime + DEFAULT_TTL;
        assert!(!cache.is_valid(t).unwrap());
        for _ in 0..4 {
            t += Duration::from_secs(900);
            assert!(!cache.is_valid(t).unwrap());
        }
    }

    #[test]
    fn save_resets_freshness() {
        let dir = TempDir::new().expect("temp dir");
        let cache = cache_in(&dir);
        cache.save(&fixture_report()).expect("save must succeed");

        let first_expiry = fs::metadata(cache.path())
            .and_then(|m| m.modified())
            .expect("mtime")
            + DEFAULT_TTL;

        cache.save(&fixture_report()).expect("second save must succeed");

        let mtime = fs::metadata(cache.path())
            .and_then(|m| m.modified())
            .expect("mtime");
        assert!(cache.is_valid(mtime + Duration::from_secs(1)).unwrap());
        assert!(mtime + DEFAULT_TTL >= first_expiry);
    }

    #[test]
    fn is_valid_on_missing_file_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let cache = cache_in(&dir);

        assert!(cache.is_valid(SystemTime::now()).is_err());
    }

    #[test]
    fn undecodable_bytes_are_corrupt_cache() {
        let dir = TempDir::new().expect("temp dir");
        let cache = cache_in(&dir);

        fs::write(cache.path(), b"not json at all").expect("write garbage");

        let err = cache.load().unwrap_err();
        assert!(matches!(err, WeatherError::CorruptCache { .. }));
    }

    #[test]
    fn load_on_missing_file_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let cache = cache_in(&dir);

        assert!(cache.load().is_err());
    }
}
