use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::client::{ClientConfig, Series, SeriesError, SeriesResult, TimeWindow};

/// Path of the Graphite render endpoint.
pub const RENDER_PATH: &str = "/render";

/// Something that can answer a render query with a list of series.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Fetches every series matching `query` within `window`.
    async fn fetch(&self, query: &str, window: &TimeWindow) -> SeriesResult<Vec<Series>>;
}

/// Query parameters for `/render`.
#[derive(Debug, Serialize)]
pub struct RenderRequest<'a> {
    pub target: &'a str,
    pub from: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub until: &'a str,
    pub format: &'a str,
}

/// HTTP client for the Graphite render API.
#[derive(Clone)]
pub struct GraphiteClient {
    config: Arc<ClientConfig>,
    render_url: Url,
    client: Client,
}

impl GraphiteClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> SeriesResult<Self> {
        let mut render_url = Url::parse(&config.endpoint()).map_err(|e| {
            SeriesError::configuration(format!("invalid graphite host '{}': {e}", config.host()))
        })?;
        render_url.set_path(RENDER_PATH);
        render_url.set_query(None);

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| {
                SeriesError::configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            config: Arc::new(config),
            render_url,
            client,
        })
    }

    /// The URL render queries are sent to, without parameters.
    pub fn render_url(&self) -> &Url {
        &self.render_url
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run one render query and decode the series it returns.
    ///
    /// The status code is not interpreted: whatever body comes back is
    /// decoded, and a body that is not a series list is a decode error.
    /// `[]` and `null` both decode to an empty list.
    #[instrument(skip(self), fields(endpoint = %self.render_url))]
    pub async fn fetch(&self, query: &str, window: &TimeWindow) -> SeriesResult<Vec<Series>> {
        let window = window.normalized();
        let params = RenderRequest {
            target: query,
            from: &window.from,
            until: &window.until,
            format: "json",
        };

        let mut request = self.client.get(self.render_url.clone()).query(&params);
        if let Some(credentials) = self.config.credentials() {
            request = request.basic_auth(
                &credentials.username,
                Some(credentials.password.expose()),
            );
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), %status, "Render query answered");

        // Reads the body to the end; the connection is released when the
        // response is consumed here, on success and error alike.
        let body = response.bytes().await?;
        if !status.is_success() {
            warn!(%status, bytes = body.len(), "Render query returned a non-success status");
        }

        let series = decode_series(&body)?;
        debug!(series = series.len(), "Decoded render response");
        Ok(series)
    }
}

#[async_trait]
impl SeriesSource for GraphiteClient {
    async fn fetch(&self, query: &str, window: &TimeWindow) -> SeriesResult<Vec<Series>> {
        GraphiteClient::fetch(self, query, window).await
    }
}

/// Decodes a `/render?format=json` body.
pub fn decode_series(body: &[u8]) -> SeriesResult<Vec<Series>> {
    let series: Option<Vec<Series>> = serde_json::from_slice(body)?;
    Ok(series.unwrap_or_default())
}
