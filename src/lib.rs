//! Auto-Push - update a GitHub profile and status from the terminal.
//!
//! Auto-Push saves a GitHub token and a weather API key to a local
//! credential file, then uses them to set the profile name and bio (from
//! the current weather, the total commit count or custom text) and the
//! status message and emoji.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing and workflows
//! - [`credentials`] - Credential file storage and secret masking
//! - [`error`] - Error types and result aliases
//! - [`remote`] - GitHub and weather service clients
//! - [`ui`] - Prompts, spinners and terminal output
//!
//! # Example
//!
//! ```
//! use auto_push::credentials::{CredentialStore, Credentials, GITHUB_TOKEN};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = CredentialStore::new(dir.path().join(".env"));
//! store
//!     .set_credential(&mut Credentials::default(), GITHUB_TOKEN, "abc123")
//!     .unwrap();
//!
//! let loaded = store.load_with_env(|_| None).unwrap();
//! assert_eq!(loaded.require(GITHUB_TOKEN).unwrap(), "abc123");
//! ```

pub mod cli;
pub mod credentials;
pub mod error;
pub mod remote;
pub mod ui;

pub use error::{AutoPushError, Result};
