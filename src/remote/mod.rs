//! Clients for the remote services auto-push talks to.
//!
//! - [`GitHubClient`] - profile edits, commit counting and status mutation
//! - [`WeatherClient`] - current-weather lookup
//!
//! Every call is a single blocking request/response pair. There are no
//! retries; the first failure is returned to the caller.

pub mod emoji;
pub mod github;
pub mod http;
pub mod weather;

pub use github::{CommitTally, GitHubClient, ProfileUpdate, StatusUpdate, UserStatus};
pub use http::ApiClient;
pub use weather::WeatherClient;

/// Default GitHub REST API base URL.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default GitHub GraphQL endpoint.
pub const DEFAULT_GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Default OpenWeatherMap base URL.
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org";

/// Base URLs of the remote services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub github_api: String,
    pub github_graphql: String,
    pub weather_api: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            github_api: DEFAULT_GITHUB_API_URL.to_string(),
            github_graphql: DEFAULT_GITHUB_GRAPHQL_URL.to_string(),
            weather_api: DEFAULT_WEATHER_API_URL.to_string(),
        }
    }
}
