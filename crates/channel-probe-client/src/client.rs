// crates/channel-probe-client/src/client.rs
// ============================================================================
// Module: Chat API Client
// Description: reqwest-backed client for faker and channel endpoints.
// Purpose: Issue single-shot requests with transcript capture.
// Dependencies: channel-probe-contract, reqwest, serde_json, tracing, url
// ============================================================================

//! ## Overview
//! [`ChannelApiClient`] wraps a `reqwest::Client` bound to one base URL. Every
//! exchange is recorded in an in-memory transcript (method, path, request body,
//! status) that test reporters can persist.
//! Invariants:
//! - One attempt per request; transport failures are returned as-is.
//! - Non-2xx statuses are errors unless the caller uses [`ChannelApiClient::send_raw`].
//! - The session header value never reaches logs or transcripts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use channel_probe_contract::CREATE_CHANNEL_PATH;
use channel_probe_contract::DELETE_MOCKED_USERS_PATH;
use channel_probe_contract::MOCK_USERS_PATH;
use channel_probe_contract::SESSION_TOKEN_HEADER;
use reqwest::Client;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::ClientError;
use crate::faker::MockUsersRequest;
use crate::faker::MockUsersResponse;
use crate::response::ApiResponse;
use crate::response::ResponseBody;
use crate::session::SessionHeader;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Connection settings for [`ChannelApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the chat service (scheme, host, optional path prefix).
    pub base_url: String,
    /// Optional per-request timeout; `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Builds a config for `base_url` without a timeout override.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }
}

// ============================================================================
// SECTION: Transcript
// ============================================================================

/// One recorded HTTP exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    /// 1-based position in the transcript.
    pub sequence: u64,
    /// HTTP method.
    pub method: String,
    /// Request path including query string.
    pub path: String,
    /// Whether a session header was attached (value is never recorded).
    pub session_header: bool,
    /// JSON request body, if any.
    pub request: Option<Value>,
    /// Response status, when a response arrived.
    pub status: Option<u16>,
    /// Transport error text, when no response arrived.
    pub error: Option<String>,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Async client for the chat service API.
#[derive(Debug, Clone)]
pub struct ChannelApiClient {
    /// Parsed base URL.
    base_url: Url,
    /// Shared HTTP client.
    client: Client,
    /// Recorded exchanges.
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl ChannelApiClient {
    /// Creates a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the base URL does not parse or
    /// is not http(s), and [`ClientError::Transport`] when the HTTP client
    /// cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = parse_base_url(&config.base_url)?;
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ClientError::Transport(format!("failed to build http client: {err}")))?;
        Ok(Self::with_client(base_url, client))
    }

    /// Creates a client from an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(base_url: Url, client: Client) -> Self {
        Self {
            base_url,
            client,
            transcript: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Resolves an endpoint path (and optional query pairs) against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the path does not start with `/`.
    pub fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ClientError> {
        if !path.starts_with('/') {
            return Err(ClientError::InvalidUrl(format!("endpoint path must start with '/': {path}")));
        }
        let mut url = self.base_url.clone();
        let joined = format!("{}{path}", url.path().trim_end_matches('/'));
        url.set_path(&joined);
        url.set_query(None);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().copied());
        }
        Ok(url)
    }

    /// Sends a request and returns the response whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when no HTTP response was received.
    pub async fn send_raw(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        session: &SessionHeader,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.endpoint(path, query)?;
        let recorded_path = match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_string(),
        };
        let mut request = self.client.request(method.clone(), url);
        if let Some(value) = session.value() {
            request = request.header(SESSION_TOKEN_HEADER, value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let outcome = match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                response
                    .bytes()
                    .await
                    .map(|bytes| ApiResponse::new(status, ResponseBody::parse(&bytes)))
                    .map_err(|err| format!("failed to read response body: {err}"))
            }
            Err(err) => Err(err.to_string()),
        };

        let (status, error) = match &outcome {
            Ok(response) => (Some(response.status()), None),
            Err(err) => (None, Some(err.clone())),
        };
        debug!(
            method = %method,
            path = %recorded_path,
            status = ?status,
            session_header = session.value().is_some(),
            "chat api request completed"
        );
        self.record(TranscriptEntry {
            sequence: 0,
            method: method.to_string(),
            path: recorded_path,
            session_header: session.value().is_some(),
            request: body.cloned(),
            status,
            error,
        });
        outcome.map_err(ClientError::Transport)
    }

    /// Sends a request and fails on non-success statuses.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] (carrying the response) for non-2xx
    /// statuses and [`ClientError::Transport`] when no response was received.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        session: &SessionHeader,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ClientError> {
        let response = self.send_raw(method.clone(), path, query, session, body).await?;
        if response.is_success() {
            return Ok(response);
        }
        Err(ClientError::Status {
            method: method.to_string(),
            path: path.to_string(),
            response,
        })
    }

    /// Provisions mock users through the internal faker.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, error status, or an
    /// undecodable body.
    pub async fn mock_users(
        &self,
        request: &MockUsersRequest,
    ) -> Result<MockUsersResponse, ClientError> {
        let body = serde_json::to_value(request)
            .map_err(|err| ClientError::Decode(format!("mock user request: {err}")))?;
        let response = self
            .send(Method::POST, MOCK_USERS_PATH, &[], &SessionHeader::Omitted, Some(&body))
            .await?;
        response.decode()
    }

    /// Deletes every mock user created under `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or error status.
    pub async fn delete_mocked_users(&self, prefix: &str) -> Result<ApiResponse, ClientError> {
        self.send(
            Method::DELETE,
            DELETE_MOCKED_USERS_PATH,
            &[("prefix", prefix)],
            &SessionHeader::Omitted,
            None,
        )
        .await
    }

    /// Posts a create-channel request with an arbitrary JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for any non-2xx answer; use
    /// [`ClientError::response`] to inspect it.
    pub async fn create_channel(
        &self,
        session: &SessionHeader,
        body: &Value,
    ) -> Result<ApiResponse, ClientError> {
        self.send(Method::POST, CREATE_CHANNEL_PATH, &[], session, Some(body)).await
    }

    /// Issues an unsupported GET against the create-channel path.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for any non-2xx answer.
    pub async fn get_create_channel(
        &self,
        session: &SessionHeader,
    ) -> Result<ApiResponse, ClientError> {
        self.send(Method::GET, CREATE_CHANNEL_PATH, &[], session, None).await
    }

    /// Appends an entry to the transcript with the next sequence number.
    fn record(&self, mut entry: TranscriptEntry) {
        let Ok(mut guard) = self.transcript.lock() else {
            return;
        };
        entry.sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(entry);
    }
}

/// Parses and validates a base URL.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw.trim())
        .map_err(|err| ClientError::InvalidUrl(format!("{raw}: {err}")))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ClientError::InvalidUrl(format!("unsupported scheme {other}: {raw}")));
        }
    }
    if url.host_str().is_none() {
        return Err(ClientError::InvalidUrl(format!("missing host: {raw}")));
    }
    Ok(url)
}
