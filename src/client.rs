// Reservation API client: builds draft reservations from host context and
// forwards create / availability requests to the backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::host_context::HostContextProvider;
use crate::reservation::Reservation;

// Operational errors surfaced to the widget
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Host context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("Request failed: {message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::RequestFailed {
            status: err.status().map(|status| status.as_u16()),
            message: err.to_string(),
        }
    }
}

// Client construction errors, separate from per-request failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Initialization error: {0}")]
    Init(String),
}

// Where the initial draft comes from. The two strategies are mutually
// exclusive deployment choices, never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftSource {
    // Derive the draft locally from the injected host-platform identity.
    HostContext,
    // Fetch the draft from the backend's init endpoint.
    RemoteInit,
}

// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub draft_source: DraftSource,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:2303/api/resd".to_string(),
            timeout_ms: 10_000,
            draft_source: DraftSource::HostContext,
        }
    }
}

// Reservation API surface. Implemented by the HTTP client below; tests and
// alternative transports can provide their own implementation.
#[async_trait]
pub trait ReservationApi: Send + Sync {
    // Build a valid draft reservation or fail, never return a partial one.
    async fn initial_draft(&self) -> Result<Reservation, ClientError>;

    // Submit a reservation. Business validation is the backend's job; the
    // backend's response payload is returned verbatim.
    async fn create(&self, reservation: &Reservation) -> Result<Value, ClientError>;

    // Query seat availability for a date. Payload returned verbatim.
    async fn check_availability(&self, date: &str) -> Result<Value, ClientError>;
}

pub struct ReservationClient {
    http: reqwest::Client,
    config: ClientConfig,
    context: Option<Arc<dyn HostContextProvider>>,
}

impl ReservationClient {
    // Create a client without host context. Local draft derivation will fail
    // with ContextUnavailable; intended for RemoteInit deployments.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Self::build(config, None)
    }

    // Create a client backed by a host-platform context provider.
    pub fn with_context(
        config: ClientConfig,
        context: Arc<dyn HostContextProvider>,
    ) -> Result<Self, ConfigError> {
        Self::build(config, Some(context))
    }

    fn build(
        config: ClientConfig,
        context: Option<Arc<dyn HostContextProvider>>,
    ) -> Result<Self, ConfigError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ConfigError::Config(format!(
                "base URL must be absolute: {}",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|err| ConfigError::Init(err.to_string()))?;

        Ok(Self {
            http,
            config,
            context,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn draft_from_context(&self) -> Result<Reservation, ClientError> {
        let provider = self.context.as_ref().ok_or_else(|| {
            ClientError::ContextUnavailable("running outside the host platform".to_string())
        })?;

        let identity = provider.identity().ok_or_else(|| {
            ClientError::ContextUnavailable("host context has no user".to_string())
        })?;

        let client_id = identity.effective_id().ok_or_else(|| {
            ClientError::ContextUnavailable("host context has no usable id".to_string())
        })?;

        let mut draft = Reservation::draft(client_id);
        draft.first_name = identity.first_name.unwrap_or_default();
        draft.last_name = identity.last_name.unwrap_or_default();
        Ok(draft)
    }

    async fn fetch_remote_draft(&self) -> Result<Reservation, ClientError> {
        let url = self.endpoint("init");
        tracing::debug!(%url, "fetching initial draft");

        let response = self.http.get(&url).send().await?;
        let body = Self::read_success_body(response).await?;
        let draft: Reservation = serde_json::from_value(body).map_err(|err| {
            ClientError::RequestFailed {
                status: None,
                message: format!("invalid init payload: {err}"),
            }
        })?;

        if !draft.has_valid_client() {
            return Err(ClientError::ContextUnavailable(
                "backend init returned no client id".to_string(),
            ));
        }
        Ok(draft)
    }

    // Reject non-2xx responses, otherwise hand back the JSON payload as-is.
    async fn read_success_body(response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let message = if message.is_empty() {
                status.to_string()
            } else {
                message
            };
            tracing::warn!(status = status.as_u16(), %message, "backend returned error");
            return Err(ClientError::RequestFailed {
                status: Some(status.as_u16()),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ReservationApi for ReservationClient {
    async fn initial_draft(&self) -> Result<Reservation, ClientError> {
        match self.config.draft_source {
            DraftSource::HostContext => self.draft_from_context(),
            DraftSource::RemoteInit => self.fetch_remote_draft().await,
        }
    }

    async fn create(&self, reservation: &Reservation) -> Result<Value, ClientError> {
        let url = self.endpoint("create");
        tracing::debug!(%url, client_id = reservation.client_id, "submitting reservation");

        let response = self.http.post(&url).json(reservation).send().await?;
        Self::read_success_body(response).await
    }

    async fn check_availability(&self, date: &str) -> Result<Value, ClientError> {
        let url = self.endpoint("availability");
        tracing::debug!(%url, date, "checking availability");

        let response = self.http.get(&url).query(&[("date", date)]).send().await?;
        Self::read_success_body(response).await
    }
}
