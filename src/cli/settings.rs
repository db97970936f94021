//! Runtime settings shared by every command.

use std::path::PathBuf;

use crate::credentials::{CredentialStore, Credentials};
use crate::error::Result;
use crate::remote::Endpoints;

/// Where credentials live and which remote services to talk to.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Credential file.
    pub env_file: PathBuf,
    /// Remote service base URLs.
    pub endpoints: Endpoints,
    /// Whether process environment values override the credential file.
    pub use_process_env: bool,
}

impl Settings {
    /// Settings for a normal run.
    pub fn new(env_file: PathBuf, endpoints: Endpoints) -> Self {
        Self {
            env_file,
            endpoints,
            use_process_env: true,
        }
    }

    /// Settings that only ever read the credential file.
    pub fn isolated(env_file: PathBuf, endpoints: Endpoints) -> Self {
        Self {
            use_process_env: false,
            ..Self::new(env_file, endpoints)
        }
    }

    /// Store for the configured credential file.
    pub fn store(&self) -> CredentialStore {
        CredentialStore::new(&self.env_file)
    }

    /// Load credentials for this run.
    pub fn load_credentials(&self) -> Result<Credentials> {
        let store = self.store();
        if self.use_process_env {
            store.load()
        } else {
            store.load_with_env(|_| None)
        }
    }
}
