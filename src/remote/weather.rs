//! Current-weather lookup against OpenWeatherMap.

use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::error::{AutoPushError, Result};

use super::http::{decode_json, ApiClient};

/// The subset of the current-weather response the summary needs.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    weather: Vec<Condition>,
    main: Readings,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Readings {
    temp: f64,
}

/// Client for the current-weather endpoint, bound to one API key.
pub struct WeatherClient {
    api: ApiClient,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new()?.with_secret(api_key),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetch the current weather for `location` as a one-line summary.
    ///
    /// The summary reads `Weather in {location}: {Description}, {temp}°C`
    /// with the temperature to one decimal place.
    pub fn fetch_summary(&self, location: &str) -> Result<String> {
        let url = self.weather_url(location)?;
        debug!("Fetching weather for {}", location);

        let body = self.api.execute_text(self.api.inner().get(url))?;
        summarize(location, &body)
    }

    fn weather_url(&self, location: &str) -> Result<Url> {
        let endpoint = format!("{}/data/2.5/weather", self.base_url);
        Url::parse_with_params(
            &endpoint,
            &[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ],
        )
        .map_err(|e| {
            AutoPushError::invalid_input(format!("invalid weather API URL '{}': {}", endpoint, e))
        })
    }
}

/// Validate a current-weather body and format the summary.
fn summarize(location: &str, body: &str) -> Result<String> {
    let parsed: WeatherResponse = decode_json(body)?;
    let condition = parsed
        .weather
        .first()
        .ok_or_else(|| AutoPushError::malformed("weather list is empty"))?;

    Ok(format!(
        "Weather in {}: {}, {:.1}°C",
        location,
        title_case(&condition.description),
        parsed.main.temp
    ))
}

/// Uppercase the first letter of every word.
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn summarize_formats_description_and_temperature() {
        let body = r#"{"weather":[{"description":"light rain"}],"main":{"temp":12.345}}"#;
        assert_eq!(
            summarize("Paris", body).unwrap(),
            "Weather in Paris: Light Rain, 12.3°C"
        );
    }

    #[test]
    fn summarize_uses_first_condition() {
        let body = r#"{"weather":[{"description":"mist"},{"description":"fog"}],"main":{"temp":-2}}"#;
        assert_eq!(
            summarize("Oslo", body).unwrap(),
            "Weather in Oslo: Mist, -2.0°C"
        );
    }

    #[test]
    fn missing_temp_is_malformed() {
        let body = r#"{"weather":[{"description":"clear sky"}],"main":{}}"#;
        let err = summarize("Bangkok", body).unwrap_err();
        assert!(matches!(err, AutoPushError::MalformedResponse { .. }));
        assert!(err.to_string().contains("temp"));
    }

    #[test]
    fn wrong_type_is_malformed() {
        let body = r#"{"weather":[{"description":"clear sky"}],"main":{"temp":"hot"}}"#;
        assert!(matches!(
            summarize("Bangkok", body),
            Err(AutoPushError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn empty_weather_list_is_malformed() {
        let body = r#"{"weather":[],"main":{"temp":30.0}}"#;
        assert!(matches!(
            summarize("Bangkok", body),
            Err(AutoPushError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(
            summarize("Bangkok", "<html>"),
            Err(AutoPushError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("overcast clouds"), "Overcast Clouds");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn fetch_summary_sends_query_parameters() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/2.5/weather")
                .query_param("q", "Bangkok")
                .query_param("appid", "weather-key")
                .query_param("units", "metric");
            then.status(200).json_body(json!({
                "weather": [{"description": "scattered clouds"}],
                "main": {"temp": 31.26}
            }));
        });

        let client = WeatherClient::new(&server.base_url(), "weather-key").unwrap();
        let summary = client.fetch_summary("Bangkok").unwrap();

        mock.assert();
        assert_eq!(summary, "Weather in Bangkok: Scattered Clouds, 31.3°C");
    }

    #[test]
    fn fetch_summary_reports_auth_failure_without_key() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/data/2.5/weather");
            then.status(401)
                .json_body(json!({"cod": 401, "message": "Invalid API key weather-key"}));
        });

        let client = WeatherClient::new(&server.base_url(), "weather-key").unwrap();
        let err = client.fetch_summary("Bangkok").unwrap_err();

        assert!(matches!(err, AutoPushError::Remote { status: Some(401), .. }));
        assert!(!err.to_string().contains("weather-key"));
    }

    #[test]
    fn unreachable_service_error_hides_key() {
        let client = WeatherClient::new("http://127.0.0.1:1", "weather-key").unwrap();
        let err = client.fetch_summary("Bangkok").unwrap_err();

        assert!(matches!(err, AutoPushError::Remote { status: None, .. }));
        assert!(!err.to_string().contains("weather-key"));
    }

    #[test]
    fn fetch_summary_reports_missing_temp() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/data/2.5/weather");
            then.status(200)
                .json_body(json!({"weather": [{"description": "haze"}], "main": {}}));
        });

        let client = WeatherClient::new(&server.base_url(), "key-123").unwrap();
        assert!(matches!(
            client.fetch_summary("Bangkok"),
            Err(AutoPushError::MalformedResponse { .. })
        ));
    }
}
