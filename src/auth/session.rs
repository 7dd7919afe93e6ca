//! PIN login and bearer-token session lifecycle.
//!
//! A session is a generated token plus an expiry instant, both persisted
//! through a [`TokenStore`]. Validity checks fail closed: a missing token,
//! a missing expiry, or an unreadable expiry all count as logged out.

use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use tracing::{debug, info, warn};

use super::store::TokenStore;

/// Persisted-store key for the session token.
pub const TOKEN_KEY: &str = "fcg_token";

/// Persisted-store key for the token expiry (epoch milliseconds, as a string).
pub const TOKEN_EXPIRY_KEY: &str = "fcg_token_expiry";

/// Static PIN accepted for login. A placeholder, not a security boundary.
const VALID_PIN: &str = "685467";

/// Prefix carried by every generated session token.
const TOKEN_PREFIX: &str = "fcg_";

/// Random alphanumeric characters appended to a generated token.
const TOKEN_SUFFIX_LEN: usize = 16;

/// Session lifetime: 7 days in milliseconds.
const TOKEN_TTL_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Outcome of a PIN check. A rejected PIN is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Granted,
    Denied { error: String },
}

impl AuthOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, AuthOutcome::Granted)
    }

    fn denied() -> Self {
        AuthOutcome::Denied {
            error: "Invalid PIN".to_string(),
        }
    }
}

/// Token-based session over a persistent store.
pub struct Session {
    store: Box<dyn TokenStore>,
    token: Mutex<Option<String>>,
}

impl Session {
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        Self {
            store,
            token: Mutex::new(None),
        }
    }

    fn cached(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a bearer token in memory and in the persistent store.
    pub fn set_token(&self, token: &str) -> Result<()> {
        *self.cached() = Some(token.to_string());
        self.store.set(TOKEN_KEY, token)
    }

    /// The current bearer token, loaded from the persistent store on first
    /// access. Store read failures surface as `None`.
    pub fn token(&self) -> Option<String> {
        let mut cached = self.cached();
        if cached.is_none() {
            *cached = self.store.get(TOKEN_KEY).ok().flatten();
        }
        cached.clone()
    }

    /// Whether a live session exists.
    ///
    /// A session found expired here is cleared from the store as a side
    /// effect, so later checks answer without re-reading the expiry.
    pub fn is_authenticated(&self) -> bool {
        let token = self.token();
        let expiry = self.store.get(TOKEN_EXPIRY_KEY).ok().flatten();
        let now_ms = Utc::now().timestamp_millis();

        match session_state(token.as_deref(), expiry.as_deref(), now_ms) {
            SessionState::Valid => true,
            SessionState::Missing => false,
            SessionState::Expired => {
                debug!("session expired, clearing stored token");
                if let Err(e) = self.logout() {
                    warn!(error = %e, "failed to clear expired session");
                }
                false
            }
        }
    }

    /// Drop the session: clears the in-memory token and removes both
    /// persisted entries. Safe to call repeatedly.
    pub fn logout(&self) -> Result<()> {
        *self.cached() = None;
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(TOKEN_EXPIRY_KEY)?;
        Ok(())
    }

    /// Check `pin` against the accepted PIN and open a 7-day session on a
    /// match. Repeated wrong attempts are not throttled.
    pub fn authenticate(&self, pin: &str) -> Result<AuthOutcome> {
        if pin != VALID_PIN {
            info!("login rejected");
            return Ok(AuthOutcome::denied());
        }

        let now_ms = Utc::now().timestamp_millis();
        let token = generate_token(now_ms);
        self.set_token(&token)?;
        self.store
            .set(TOKEN_EXPIRY_KEY, &(now_ms + TOKEN_TTL_MS).to_string())?;
        info!("login accepted, session opened");
        Ok(AuthOutcome::Granted)
    }
}

enum SessionState {
    Valid,
    Missing,
    Expired,
}

/// Classify a session from its raw persisted parts at `now_ms`.
///
/// An expiry at or before `now_ms`, or one that does not parse as an
/// integer, counts as expired.
fn session_state(token: Option<&str>, expiry: Option<&str>, now_ms: i64) -> SessionState {
    let (Some(_), Some(expiry)) = (token, expiry) else {
        return SessionState::Missing;
    };
    match expiry.trim().parse::<i64>() {
        Ok(expiry_ms) if now_ms < expiry_ms => SessionState::Valid,
        _ => SessionState::Expired,
    }
}

/// Build a session token: fixed prefix, login timestamp, random suffix drawn
/// from the thread-local CSPRNG.
fn generate_token(now_ms: i64) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{TOKEN_PREFIX}{now_ms}_{suffix}")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::store::MemoryStore;

    fn session_with_store() -> (Arc<MemoryStore>, Session) {
        let store = Arc::new(MemoryStore::new());
        let session = Session::new(Box::new(Arc::clone(&store)));
        (store, session)
    }

    #[test]
    fn wrong_pin_is_denied_and_persists_nothing() {
        let (store, session) = session_with_store();

        let outcome = session.authenticate("000000").unwrap();
        assert_eq!(
            outcome,
            AuthOutcome::Denied {
                error: "Invalid PIN".to_string()
            }
        );
        assert!(!outcome.is_granted());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(TOKEN_EXPIRY_KEY).unwrap(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn correct_pin_opens_a_persisted_session() {
        let (store, session) = session_with_store();
        let before_ms = Utc::now().timestamp_millis();

        assert!(session.authenticate("685467").unwrap().is_granted());

        let token = store.get(TOKEN_KEY).unwrap().expect("token persisted");
        assert!(token.starts_with("fcg_"));
        assert_eq!(session.token().as_deref(), Some(token.as_str()));

        let expiry: i64 = store
            .get(TOKEN_EXPIRY_KEY)
            .unwrap()
            .expect("expiry persisted")
            .parse()
            .expect("expiry is numeric");
        assert!(expiry >= before_ms + TOKEN_TTL_MS);

        assert!(session.is_authenticated());
    }

    #[test]
    fn token_is_lazily_loaded_from_the_store() {
        let store = Arc::new(MemoryStore::new());
        store.set(TOKEN_KEY, "fcg_1_abcdefghi").unwrap();

        let session = Session::new(Box::new(Arc::clone(&store)));
        assert_eq!(session.token().as_deref(), Some("fcg_1_abcdefghi"));
    }

    #[test]
    fn missing_expiry_means_unauthenticated() {
        let (store, session) = session_with_store();
        store.set(TOKEN_KEY, "fcg_1_abcdefghi").unwrap();

        assert!(!session.is_authenticated());
        // Presence-only failure does not clear the token.
        assert_eq!(
            store.get(TOKEN_KEY).unwrap(),
            Some("fcg_1_abcdefghi".to_string())
        );
    }

    #[test]
    fn expired_session_is_cleared_from_the_store() {
        let (store, session) = session_with_store();
        store.set(TOKEN_KEY, "fcg_1_abcdefghi").unwrap();
        let past = Utc::now().timestamp_millis() - 1;
        store.set(TOKEN_EXPIRY_KEY, &past.to_string()).unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(TOKEN_EXPIRY_KEY).unwrap(), None);

        // Second check is a no-op on already-cleared state.
        assert!(!session.is_authenticated());
    }

    #[test]
    fn corrupted_expiry_fails_closed() {
        let (store, session) = session_with_store();
        store.set(TOKEN_KEY, "fcg_1_abcdefghi").unwrap();
        store.set(TOKEN_EXPIRY_KEY, "not-a-number").unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(TOKEN_EXPIRY_KEY).unwrap(), None);
    }

    #[test]
    fn logout_clears_everything_and_is_idempotent() {
        let (store, session) = session_with_store();
        session.authenticate("685467").unwrap();

        session.logout().unwrap();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(TOKEN_EXPIRY_KEY).unwrap(), None);

        session.logout().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn exactly_at_expiry_counts_as_expired() {
        assert!(matches!(
            session_state(Some("t"), Some("1000"), 1000),
            SessionState::Expired
        ));
        assert!(matches!(
            session_state(Some("t"), Some("1000"), 999),
            SessionState::Valid
        ));
        assert!(matches!(
            session_state(Some("t"), Some("1000"), 1001),
            SessionState::Expired
        ));
    }

    #[test]
    fn session_state_requires_both_parts() {
        assert!(matches!(
            session_state(None, Some("1000"), 0),
            SessionState::Missing
        ));
        assert!(matches!(
            session_state(Some("t"), None, 0),
            SessionState::Missing
        ));
        assert!(matches!(session_state(None, None, 0), SessionState::Missing));
    }

    #[test]
    fn generated_tokens_have_the_expected_shape() {
        let token = generate_token(1_700_000_000_000);
        let rest = token.strip_prefix("fcg_").expect("prefix");
        let (millis, suffix) = rest.split_once('_').expect("timestamp_suffix");
        assert_eq!(millis, "1700000000000");
        assert_eq!(suffix.len(), TOKEN_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generated_tokens_differ() {
        assert_ne!(generate_token(1), generate_token(1));
    }
}
