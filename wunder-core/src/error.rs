use std::path::PathBuf;
use thiserror::Error;

/// Run-fatal failure conditions. None of these are retried or recovered in
/// place: the caller reports them and terminates the run.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The config file does not exist at the given path.
    #[error("no config file found at {}", .path.display())]
    MissingConfig { path: PathBuf },

    /// The config file exists but could not be parsed, or a required field
    /// is missing, empty, or of the wrong type.
    #[error("invalid config file {}: {reason}", .path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    /// The cache file exists but its contents do not decode into a report.
    #[error("cache file {} is corrupt: {source}", .path.display())]
    CorruptCache {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The fetch did not complete within its time bound.
    #[error("request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    /// The connectivity probe failed; the network is considered down.
    #[error("network unreachable: {reason}")]
    Unreachable { reason: String },

    /// Any other fetch failure: transport error, non-success status, or an
    /// undecodable response body.
    #[error("fetch from {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    /// Filesystem error while touching the cache file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
