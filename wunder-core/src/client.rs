use std::time::Duration;

use async_trait::async_trait;

use crate::{config::Config, error::WeatherError, fetch::Fetcher};

pub const BASE_URL: &str = "http://api.wunderground.com/api";

/// Hard bound on each API request.
const FETCH_TIMEOUT: Duration = Duration::from_secs(6);

/// The two feeds the reporter needs. The orchestrator only talks to this
/// trait, so tests can substitute a canned source.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Connectivity check, called once before the first real fetch.
    async fn probe(&self) -> Result<(), WeatherError>;

    /// Current conditions as a raw nested map.
    async fn conditions(&self) -> Result<serde_json::Value, WeatherError>;

    /// Multi-day forecast as a raw nested map.
    async fn forecast(&self) -> Result<serde_json::Value, WeatherError>;
}

/// Wunderground API client for one configured city.
#[derive(Debug, Clone)]
pub struct WunderClient {
    base_url: String,
    api_key: String,
    city: String,
    fetcher: Fetcher,
}

impl WunderClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config, BASE_URL.to_string())
    }

    /// Same client against a different endpoint root. Tests point this at
    /// a local server.
    pub fn with_base_url(config: &Config, base_url: String) -> Self {
        Self {
            base_url,
            api_key: config.api_key.clone(),
            city: config.city.clone(),
            fetcher: Fetcher::new(),
        }
    }

    fn feature_url(&self, feature: &str) -> String {
        format!(
            "{}/{}/{}/q/{}",
            self.base_url,
            self.api_key,
            feature,
            normalize_city(&self.city)
        )
    }

    async fn fetch_feature(&self, feature: &str) -> Result<serde_json::Value, WeatherError> {
        let url = self.feature_url(feature);
        let body = self.fetcher.fetch(&url, FETCH_TIMEOUT).await?;

        serde_json::from_slice(&body).map_err(|e| WeatherError::Fetch {
            url,
            reason: format!("response body is not valid JSON: {e}"),
        })
    }
}

#[async_trait]
impl WeatherSource for WunderClient {
    async fn probe(&self) -> Result<(), WeatherError> {
        self.fetcher.probe(&self.base_url).await
    }

    async fn conditions(&self) -> Result<serde_json::Value, WeatherError> {
        self.fetch_feature("conditions").await
    }

    async fn forecast(&self) -> Result<serde_json::Value, WeatherError> {
        self.fetch_feature("forecast").await
    }
}

/// Ensure the city path segment ends in `.json` exactly once.
fn normalize_city(city: &str) -> String {
    if city.ends_with(".json") {
        city.to_string()
    } else {
        format!("{city}.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(city: &str) -> Config {
        Config {
            api_key: "KEY".to_string(),
            city: city.to_string(),
            source: PathBuf::from("/tmp/.weatherrc"),
        }
    }

    #[test]
    fn city_suffixing_is_idempotent() {
        assert_eq!(normalize_city("CA/San_Francisco"), "CA/San_Francisco.json");
        assert_eq!(normalize_city("CA/San_Francisco.json"), "CA/San_Francisco.json");
    }

    #[test]
    fn conditions_url_has_expected_shape() {
        let client = WunderClient::new(&config("CA/San_Francisco"));

        assert_eq!(
            client.feature_url("conditions"),
            "http://api.wunderground.com/api/KEY/conditions/q/CA/San_Francisco.json"
        );
    }

    #[test]
    fn forecast_url_does_not_double_suffix() {
        let client = WunderClient::new(&config("Berlin.json"));

        assert_eq!(
            client.feature_url("forecast"),
            "http://api.wunderground.com/api/KEY/forecast/q/Berlin.json"
        );
    }
}
