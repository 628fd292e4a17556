use std::time::Duration;

use reqwest::Client;

use crate::error::WeatherError;

/// How long the reachability probe is allowed to take.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Thin wrapper around an HTTP client that enforces a hard upper bound on
/// every request. No retries, no partial results: a fetch either returns
/// the full body within its bound or fails the run.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    http: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// GET `url` and return the full response body.
    ///
    /// The timeout covers connect plus read; exceeding it yields
    /// [`WeatherError::Timeout`]. A non-success status or an unreadable
    /// body is a plain fetch failure.
    pub async fn fetch(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, WeatherError> {
        let res = self
            .http
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, url, timeout))?;

        let status = res.status();
        if !status.is_success() {
            return Err(WeatherError::Fetch {
                url: url.to_string(),
                reason: format!("server returned status {status}"),
            });
        }

        let body = res.bytes().await.map_err(|e| classify(e, url, timeout))?;

        Ok(body.to_vec())
    }

    /// Lightweight connectivity check: one request against `url` with a
    /// short timeout. Any response at all, success or not, counts as
    /// reachable; only a transport failure maps to
    /// [`WeatherError::Unreachable`].
    pub async fn probe(&self, url: &str) -> Result<(), WeatherError> {
        self.http
            .get(url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| WeatherError::Unreachable { reason: e.to_string() })
    }
}

fn classify(err: reqwest::Error, url: &str, timeout: Duration) -> WeatherError {
    if err.is_timeout() {
        WeatherError::Timeout {
            url: url.to_string(),
            seconds: timeout.as_secs(),
        }
    } else {
        WeatherError::Fetch {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}
