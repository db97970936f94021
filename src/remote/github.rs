//! GitHub REST and GraphQL calls.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::error::{AutoPushError, Result};

use super::emoji::normalize_emoji;
use super::http::ApiClient;
use super::Endpoints;

/// Fixed status mutation document.
const CHANGE_USER_STATUS: &str = r#"
mutation($input: ChangeUserStatusInput!) {
  changeUserStatus(input: $input) {
    status {
      message
      emoji
    }
  }
}
"#;

/// Page size requested from listing endpoints. Only the first page is read.
const PER_PAGE: u32 = 100;

/// A partial profile update. Unset fields are never transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl ProfileUpdate {
    /// Build an update, treating empty strings as "not set".
    pub fn new(name: Option<String>, bio: Option<String>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            bio: bio.filter(|b| !b.is_empty()),
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.bio.is_none()
    }
}

/// A status update ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub message: String,
    pub emoji: String,
}

impl StatusUpdate {
    /// Validate both fields and normalize the emoji shortcode.
    ///
    /// # Example
    ///
    /// ```
    /// use auto_push::remote::StatusUpdate;
    ///
    /// let update = StatusUpdate::new("Shipping", ":rocket:").unwrap();
    /// assert_eq!(update.emoji, "🚀");
    /// assert!(StatusUpdate::new("  ", ":rocket:").is_err());
    /// ```
    pub fn new(message: &str, emoji: &str) -> Result<Self> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AutoPushError::invalid_input("status message cannot be empty"));
        }
        let emoji = normalize_emoji(emoji);
        if emoji.is_empty() {
            return Err(AutoPushError::invalid_input("status emoji cannot be empty"));
        }
        Ok(Self {
            message: message.to_string(),
            emoji,
        })
    }
}

/// The status GitHub reports after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserStatus {
    pub message: Option<String>,
    pub emoji: Option<String>,
}

/// Result of summing commit counts over the account's repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitTally {
    /// Sum of commits over every repository that could be listed.
    pub total: usize,
    /// Number of repositories returned by the listing.
    pub repositories: usize,
    /// `owner/name` of repositories whose commit listing failed.
    pub skipped: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Repository {
    name: String,
    owner: Owner,
}

#[derive(Debug, Deserialize)]
struct Owner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ChangeUserStatusData {
    #[serde(rename = "changeUserStatus")]
    change_user_status: Option<ChangeUserStatusPayload>,
}

#[derive(Debug, Deserialize)]
struct ChangeUserStatusPayload {
    status: Option<UserStatus>,
}

/// Authenticated GitHub client bound to a single token.
pub struct GitHubClient {
    api: ApiClient,
    api_url: String,
    graphql_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for the endpoints in `endpoints`.
    pub fn new(endpoints: &Endpoints, token: &str) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new()?.with_secret(token),
            api_url: endpoints.github_api.trim_end_matches('/').to_string(),
            graphql_url: endpoints.github_graphql.clone(),
            token: token.to_string(),
        })
    }

    fn rest(&self, method: reqwest::Method, path: &str) -> reqwest::blocking::RequestBuilder {
        self.api
            .inner()
            .request(method, format!("{}{}", self.api_url, path))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
    }

    /// Send a partial profile update (`PATCH /user`).
    pub fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(AutoPushError::invalid_input(
                "a profile update needs a name or a bio",
            ));
        }

        debug!(
            "Updating profile (name: {}, bio: {})",
            update.name.is_some(),
            update.bio.is_some()
        );
        self.api
            .execute(self.rest(reqwest::Method::PATCH, "/user").json(update))?;
        Ok(())
    }

    /// Sum commit counts across every repository visible to the token.
    ///
    /// A repository whose commit listing fails is logged and skipped.
    /// Failing to list the repositories themselves is an error.
    pub fn count_total_commits(&self) -> Result<CommitTally> {
        let repos: Vec<Repository> = self.api.execute_json(self.rest(
            reqwest::Method::GET,
            &format!("/user/repos?per_page={}", PER_PAGE),
        ))?;

        let mut tally = CommitTally {
            repositories: repos.len(),
            ..CommitTally::default()
        };

        for repo in &repos {
            let full_name = format!("{}/{}", repo.owner.login, repo.name);
            let listing: Result<Vec<serde_json::Value>> = self.api.execute_json(self.rest(
                reqwest::Method::GET,
                &format!("/repos/{}/commits?per_page={}", full_name, PER_PAGE),
            ));

            match listing {
                Ok(commits) => {
                    debug!("{}: {} commit(s)", full_name, commits.len());
                    tally.total += commits.len();
                }
                Err(e) => {
                    warn!("Skipping {}: {}", full_name, e);
                    tally.skipped.push(full_name);
                }
            }
        }

        debug!(
            "Counted {} commit(s) across {} repositories",
            tally.total, tally.repositories
        );
        Ok(tally)
    }

    /// Set the user's status through the GraphQL API.
    pub fn update_status(&self, update: &StatusUpdate) -> Result<UserStatus> {
        let body = json!({
            "query": CHANGE_USER_STATUS,
            "variables": { "input": update },
        });

        let response: GraphQlResponse<ChangeUserStatusData> = self.api.execute_json(
            self.api
                .inner()
                .post(&self.graphql_url)
                .bearer_auth(&self.token)
                .json(&body),
        )?;

        if !response.errors.is_empty() {
            let message = response
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AutoPushError::Remote {
                status: None,
                message,
            });
        }

        response
            .data
            .and_then(|d| d.change_user_status)
            .and_then(|p| p.status)
            .ok_or_else(|| AutoPushError::malformed("changeUserStatus returned no status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> GitHubClient {
        let endpoints = Endpoints {
            github_api: server.base_url(),
            github_graphql: server.url("/graphql"),
            weather_api: server.base_url(),
        };
        GitHubClient::new(&endpoints, "gh-token").unwrap()
    }

    #[test]
    fn profile_update_drops_empty_fields() {
        let update = ProfileUpdate::new(Some(String::new()), Some(String::new()));
        assert!(update.is_empty());
    }

    #[test]
    fn profile_update_serializes_only_set_fields() {
        let update = ProfileUpdate::new(Some("X".into()), Some(String::new()));
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, json!({"name": "X"}));
    }

    #[test]
    fn status_update_requires_message_and_emoji() {
        assert!(StatusUpdate::new("", ":coffee:").is_err());
        assert!(StatusUpdate::new("Working", "  ").is_err());
        let update = StatusUpdate::new(" Working ", ":coffee:").unwrap();
        assert_eq!(update.message, "Working");
        assert_eq!(update.emoji, "☕");
    }

    #[test]
    fn update_profile_sends_name_only() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/user")
                .header("authorization", "Bearer gh-token")
                .json_body(json!({"name": "X"}));
            then.status(200).json_body(json!({"login": "octocat"}));
        });

        client_for(&server)
            .update_profile(&ProfileUpdate::new(Some("X".into()), None))
            .unwrap();

        mock.assert();
    }

    #[test]
    fn update_profile_with_empty_bio_never_sends_bio() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PATCH).path("/user").body_includes("bio");
            then.status(200);
        });

        let err = client_for(&server)
            .update_profile(&ProfileUpdate::new(None, Some(String::new())))
            .unwrap_err();

        assert!(matches!(err, AutoPushError::InvalidInput { .. }));
        mock.assert_calls(0);
    }

    #[test]
    fn update_profile_reports_remote_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PATCH).path("/user");
            then.status(401).json_body(json!({"message": "Bad credentials"}));
        });

        let err = client_for(&server)
            .update_profile(&ProfileUpdate::new(None, Some("bio".into())))
            .unwrap_err();

        match err {
            AutoPushError::Remote { status, message } => {
                assert_eq!(status, Some(401));
                assert_eq!(message, "Bad credentials");
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn count_total_commits_skips_failing_repository() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/user/repos");
            then.status(200).json_body(json!([
                {"name": "one", "owner": {"login": "me"}},
                {"name": "two", "owner": {"login": "me"}},
                {"name": "empty", "owner": {"login": "me"}},
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/repos/me/one/commits");
            then.status(200).json_body(json!([{"sha": "a"}, {"sha": "b"}]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/repos/me/two/commits");
            then.status(200).json_body(json!([{"sha": "c"}, {"sha": "d"}, {"sha": "e"}]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/repos/me/empty/commits");
            then.status(409).json_body(json!({"message": "Git Repository is empty."}));
        });

        let tally = client_for(&server).count_total_commits().unwrap();

        assert_eq!(tally.total, 5);
        assert_eq!(tally.repositories, 3);
        assert_eq!(tally.skipped, vec!["me/empty".to_string()]);
    }

    #[test]
    fn count_total_commits_fails_when_repos_cannot_be_listed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/user/repos");
            then.status(500).body("boom");
        });

        let err = client_for(&server).count_total_commits().unwrap_err();
        assert!(matches!(err, AutoPushError::Remote { status: Some(500), .. }));
    }

    #[test]
    fn update_status_sends_mutation_variables() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .header("authorization", "Bearer gh-token")
                .body_includes("changeUserStatus")
                .body_includes("\"message\":\"Deep work\"");
            then.status(200).json_body(json!({
                "data": {"changeUserStatus": {"status": {"message": "Deep work", "emoji": ":coffee:"}}}
            }));
        });

        let status = client_for(&server)
            .update_status(&StatusUpdate::new("Deep work", ":coffee:").unwrap())
            .unwrap();

        mock.assert();
        assert_eq!(status.message.as_deref(), Some("Deep work"));
    }

    #[test]
    fn update_status_reports_graphql_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(200).json_body(json!({
                "data": null,
                "errors": [{"message": "Resource not accessible by integration"}]
            }));
        });

        let err = client_for(&server)
            .update_status(&StatusUpdate::new("Hi", "👋").unwrap())
            .unwrap_err();

        assert!(matches!(err, AutoPushError::Remote { status: None, .. }));
        assert!(err.to_string().contains("Resource not accessible"));
    }

    #[test]
    fn update_status_without_status_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(200).json_body(json!({"data": {"changeUserStatus": null}}));
        });

        let err = client_for(&server)
            .update_status(&StatusUpdate::new("Hi", "👋").unwrap())
            .unwrap_err();

        assert!(matches!(err, AutoPushError::MalformedResponse { .. }));
    }
}
