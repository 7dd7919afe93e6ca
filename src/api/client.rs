//! HTTP client for the FCG workflow backend.
//!
//! This module provides the `ApiClient` struct: a generic JSON request
//! executor over `reqwest` plus one convenience method per backend
//! operation. The session's bearer token is attached automatically when one
//! exists.

use reqwest::{header, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, warn};

use crate::auth::{AuthOutcome, Session};
use crate::config::Config;
use crate::models::{
    Ack, ActivityEntry, CallRecord, Contact, ContactUpdate, Conversation, DashboardStats, Message,
    NewContact, NewTask, OutgoingMessage, PushSubscription, Task, TaskUpdate,
};

use super::ApiError;

/// Client for the FCG backend.
///
/// Owns the connection pool, the configuration, and the session. Requests
/// carry no timeout and are never retried; a call runs until the backend
/// answers or the transport fails.
pub struct ApiClient {
    http: Client,
    config: Config,
    session: Session,
}

impl ApiClient {
    /// Create a client over the given configuration and session.
    pub fn new(config: Config, session: Session) -> Result<Self, ApiError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ===== Session =====

    /// Check a PIN and open a session. See [`Session::authenticate`].
    pub fn authenticate(&self, pin: &str) -> anyhow::Result<AuthOutcome> {
        self.session.authenticate(pin)
    }

    /// Whether a live session exists. See [`Session::is_authenticated`].
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Drop the current session. See [`Session::logout`].
    pub fn logout(&self) -> anyhow::Result<()> {
        self.session.logout()
    }

    // ===== Request execution =====

    /// Default headers: JSON content type, plus a bearer token when a
    /// session token is available.
    fn default_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = self.session.token() {
            match header::HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(header::AUTHORIZATION, value);
                }
                Err(_) => warn!("session token not header-safe, sending unauthenticated"),
            }
        }
        headers
    }

    /// Issue one request against the backend.
    ///
    /// `endpoint` is appended to the configured base URL as-is.
    /// Caller-supplied headers are applied after the defaults and win on
    /// collision. For 2xx responses the body is parsed into `T`; every
    /// failure is logged and propagated unchanged.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
        headers: header::HeaderMap,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.config.base_url(), endpoint);
        match self.execute(method, &url, body, headers).await {
            Ok(value) => Ok(value),
            Err(e) => {
                error!(url = %url, error = %e, "API request failed");
                Err(e)
            }
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        extra_headers: header::HeaderMap,
    ) -> Result<T, ApiError> {
        let mut headers = self.default_headers();
        for (name, value) in extra_headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        let mut request = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(url, status = %status, "response received");

        if !status.is_success() {
            return Err(ApiError::from_status(status, &text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::GET, endpoint, None, header::HeaderMap::new())
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)?;
        self.request(Method::POST, endpoint, Some(body), header::HeaderMap::new())
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)?;
        self.request(Method::PUT, endpoint, Some(body), header::HeaderMap::new())
            .await
    }

    async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, endpoint, None, header::HeaderMap::new())
            .await
    }

    // ===== Contacts =====

    /// Fetch the full contact list.
    pub async fn fetch_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.get("/contacts").await
    }

    /// Fetch a single contact.
    pub async fn fetch_contact(&self, id: &str) -> Result<Contact, ApiError> {
        self.get(&format!("/contacts/{}", id)).await
    }

    /// Create a contact.
    pub async fn create_contact(&self, contact: &NewContact) -> Result<Contact, ApiError> {
        self.post("/contacts", contact).await
    }

    /// Update fields on an existing contact.
    pub async fn update_contact(
        &self,
        id: &str,
        update: &ContactUpdate,
    ) -> Result<Contact, ApiError> {
        self.put(&format!("/contacts/{}", id), update).await
    }

    /// Delete a contact.
    pub async fn delete_contact(&self, id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("/contacts/{}", id)).await
    }

    /// Search contacts by free-text query.
    pub async fn search_contacts(&self, query: &str) -> Result<Vec<Contact>, ApiError> {
        self.get(&format!("/contacts/search?q={}", urlencoding::encode(query)))
            .await
    }

    // ===== Messages =====

    /// Fetch the conversation list, one entry per contact with history.
    pub async fn fetch_conversations(&self) -> Result<Vec<Conversation>, ApiError> {
        self.get("/messages/conversations").await
    }

    /// Fetch the message history with one contact.
    pub async fn fetch_messages(&self, contact_id: &str) -> Result<Vec<Message>, ApiError> {
        self.get(&format!("/messages/{}", contact_id)).await
    }

    /// Send a text message to a contact.
    pub async fn send_message(&self, contact_id: &str, body: &str) -> Result<Message, ApiError> {
        let outgoing = OutgoingMessage {
            contact_id: contact_id.to_string(),
            body: body.to_string(),
        };
        self.post("/messages/send", &outgoing).await
    }

    // ===== Calls =====

    /// Fetch the call log.
    pub async fn fetch_calls(&self) -> Result<Vec<CallRecord>, ApiError> {
        self.get("/calls").await
    }

    /// Fetch a single call record.
    pub async fn fetch_call(&self, id: &str) -> Result<CallRecord, ApiError> {
        self.get(&format!("/calls/{}", id)).await
    }

    /// Fetch all calls with one contact.
    pub async fn fetch_contact_calls(&self, contact_id: &str) -> Result<Vec<CallRecord>, ApiError> {
        self.get(&format!("/calls/contact/{}", contact_id)).await
    }

    // ===== Tasks =====

    /// Fetch the task list.
    pub async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get("/tasks").await
    }

    /// Create a task.
    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        self.post("/tasks", task).await
    }

    /// Update fields on an existing task.
    pub async fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<Task, ApiError> {
        self.put(&format!("/tasks/{}", id), update).await
    }

    /// Mark a task done. Shorthand for an update that only sets the status.
    pub async fn complete_task(&self, id: &str) -> Result<Task, ApiError> {
        self.update_task(id, &TaskUpdate::done()).await
    }

    // ===== Dashboard =====

    /// Fetch aggregate counters for the dashboard.
    pub async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/dashboard/stats").await
    }

    /// Fetch the recent-activity feed.
    pub async fn fetch_recent_activity(&self) -> Result<Vec<ActivityEntry>, ApiError> {
        self.get("/dashboard/activity").await
    }

    // ===== Push notifications =====

    /// Register a Web Push subscription with the backend.
    pub async fn register_push_subscription(
        &self,
        subscription: &PushSubscription,
    ) -> Result<Ack, ApiError> {
        self.post("/push/subscribe", &PushRegistration { subscription })
            .await
    }

    /// Remove this device's push subscription.
    pub async fn unregister_push_subscription(&self) -> Result<Ack, ApiError> {
        self.post("/push/unsubscribe", &serde_json::json!({})).await
    }
}

/// Wire shape of a subscribe request: the subscription nested under a fixed
/// key.
#[derive(Serialize)]
struct PushRegistration<'a> {
    subscription: &'a PushSubscription,
}
