//! Async client library for the FCG workflow backend.
//!
//! FCG's backend is a set of n8n webhook endpoints speaking JSON. This crate
//! wraps them behind a typed [`ApiClient`]: PIN login with a persisted bearer
//! token, plus one method per backend operation for contacts, messages,
//! calls, tasks, dashboard data, and push subscriptions.
//!
//! Sessions live for 7 days from login. The token and its expiry are kept in
//! a [`TokenStore`] — a JSON file under the platform cache directory by
//! default, or the OS keychain via [`KeyringStore`].
//!
//! ```no_run
//! use fcg_client::{ApiClient, Config, FileStore, Session};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let session = Session::new(Box::new(FileStore::default_location()?));
//! let client = ApiClient::new(Config::default(), session)?;
//!
//! if client.authenticate("685467")?.is_granted() {
//!     let contacts = client.fetch_contacts().await?;
//!     println!("{} contacts", contacts.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError};
pub use auth::{AuthOutcome, FileStore, KeyringStore, MemoryStore, Session, TokenStore};
pub use config::Config;
