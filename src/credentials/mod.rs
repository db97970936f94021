//! Credential loading and persistence.
//!
//! Credentials are read once per invocation into a [`Credentials`] value
//! that is passed explicitly to the workflows that need it. The backing
//! file is managed by [`CredentialStore`] and parsed by [`EnvFileParser`].

pub mod env_file;
pub mod mask;
pub mod store;

pub use env_file::EnvFileParser;
pub use mask::OutputMasker;
pub use store::CredentialStore;

use std::collections::HashMap;

use crate::error::{AutoPushError, Result};

/// GitHub personal access token.
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// OpenWeatherMap API key.
pub const WEATHER_API_KEY: &str = "WEATHER_API_KEY";

/// Credential names the tool knows how to use.
pub const KNOWN_CREDENTIALS: [&str; 2] = [GITHUB_TOKEN, WEATHER_API_KEY];

/// Where a credential value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// The process environment at load time.
    Environment,
    /// The persisted credential file.
    File,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Environment => write!(f, "environment"),
            Self::File => write!(f, "file"),
        }
    }
}

/// A named secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub name: String,
    pub value: String,
    pub source: CredentialSource,
}

/// The authoritative credential values for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    entries: HashMap<String, Credential>,
}

impl Credentials {
    /// Record a credential, replacing any previous value for its name.
    pub fn insert(&mut self, credential: Credential) {
        self.entries.insert(credential.name.clone(), credential);
    }

    /// Get the value for `name`, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|c| c.value.as_str())
    }

    /// Get where the value for `name` came from, if set.
    pub fn source(&self, name: &str) -> Option<CredentialSource> {
        self.entries.get(name).map(|c| c.source)
    }

    /// Get the value for `name`, failing if it is absent or empty.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AutoPushError::MissingCredential {
                name: name.to_string(),
            })
    }

    /// Number of credentials held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no credentials are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
