//! Persisted credential storage.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AutoPushError, Result};

use super::{Credential, CredentialSource, Credentials, EnvFileParser, KNOWN_CREDENTIALS};

/// Reads and appends credentials in a `KEY=value` file.
///
/// The file is never rewritten: every [`set_credential`](Self::set_credential)
/// appends a new line and readers treat the last line for a key as
/// authoritative.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `value` under `name` and record it in `credentials`.
    ///
    /// # Example
    ///
    /// ```
    /// use auto_push::credentials::{CredentialStore, Credentials, GITHUB_TOKEN};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let store = CredentialStore::new(dir.path().join(".env"));
    /// let mut creds = Credentials::default();
    ///
    /// store.set_credential(&mut creds, GITHUB_TOKEN, "abc123").unwrap();
    /// assert_eq!(creds.get(GITHUB_TOKEN), Some("abc123"));
    ///
    /// let reloaded = store.load_with_env(|_| None).unwrap();
    /// assert_eq!(reloaded.get(GITHUB_TOKEN), Some("abc123"));
    /// ```
    pub fn set_credential(
        &self,
        credentials: &mut Credentials,
        name: &str,
        value: &str,
    ) -> Result<()> {
        if !EnvFileParser::is_valid_key(name) {
            return Err(AutoPushError::invalid_input(format!(
                "'{}' is not a valid credential name",
                name
            )));
        }
        if value.contains(['\n', '\r']) {
            return Err(AutoPushError::invalid_input(format!(
                "value for {} must be a single line",
                name
            )));
        }

        self.append_line(&EnvFileParser::format_line(name, value))?;
        debug!("Appended {} to {}", name, self.path.display());

        credentials.insert(Credential {
            name: name.to_string(),
            value: value.to_string(),
            source: CredentialSource::File,
        });
        Ok(())
    }

    /// Load credentials from the file and the process environment.
    pub fn load(&self) -> Result<Credentials> {
        self.load_with_env(|name| std::env::var(name).ok())
    }

    /// Load credentials using `env` to look up environment values.
    ///
    /// File values are read first; a non-empty environment value for one of
    /// the known credential names replaces the file value.
    pub fn load_with_env<F>(&self, env: F) -> Result<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut credentials = Credentials::default();

        if let Some(content) = EnvFileParser::read_optional(&self.path)? {
            for (name, value) in EnvFileParser::parse(&content) {
                credentials.insert(Credential {
                    name,
                    value,
                    source: CredentialSource::File,
                });
            }
        }

        for name in KNOWN_CREDENTIALS {
            if let Some(value) = env(name).filter(|v| !v.is_empty()) {
                credentials.insert(Credential {
                    name: name.to_string(),
                    value,
                    source: CredentialSource::Environment,
                });
            }
        }

        debug!(
            "Loaded {} credential(s) from {}",
            credentials.len(),
            self.path.display()
        );
        Ok(credentials)
    }

    /// Every persisted `(name, value)` line in file order, duplicates included.
    pub fn entries(&self) -> Result<Vec<(String, String)>> {
        Ok(EnvFileParser::read_optional(&self.path)?
            .map(|content| EnvFileParser::parse_entries(&content))
            .unwrap_or_default())
    }

    fn append_line(&self, line: &str) -> Result<()> {
        let persistence = |source| AutoPushError::Persistence {
            path: self.path.clone(),
            source,
        };

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path).map_err(persistence)?;
        file.write_all(line.as_bytes()).map_err(persistence)?;
        file.flush().map_err(persistence)
    }
}
