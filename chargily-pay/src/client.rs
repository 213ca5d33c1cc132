//! Chargily API client

use crate::config::ChargilyConfig;
use crate::endpoint::Endpoint;
use crate::error::{ChargilyError, ChargilyResult};
use crate::pagination::PageParams;
use crate::validation::validate_id;
use chargily_http::{HttpClient, HttpClientConfig, Response, header};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use url::Url;

const APPLICATION_JSON: &str = "application/json";

/// Client for the Chargily Pay API.
///
/// Each call issues exactly one HTTP request. Cloning is cheap and clones
/// share the connection pool, so one client can serve many tasks.
///
/// ```rust,no_run
/// use chargily_pay::{ChargilyClient, ChargilyConfig};
///
/// # async fn run() -> chargily_pay::ChargilyResult<()> {
/// let config = ChargilyConfig::builder("test_sk_...").test_mode().build()?;
/// let client = ChargilyClient::new(config)?;
///
/// let balance = client.get_balance().await?;
/// println!("{} wallets", balance.wallets.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ChargilyClient {
    http: HttpClient,
    api_key: Arc<SecretString>,
    root: Url,
}

impl ChargilyClient {
    /// Create a client from a configuration
    pub fn new(config: ChargilyConfig) -> ChargilyResult<Self> {
        let http = HttpClient::new(
            HttpClientConfig::builder()
                .timeout(config.timeout)
                .connect_timeout(config.connect_timeout)
                .user_agent(config.user_agent.clone())
                .default_header(header::ACCEPT.as_str(), APPLICATION_JSON)
                .build(),
        )
        .map_err(|e| ChargilyError::Config(e.to_string()))?;

        Self::with_http_client(config, http)
    }

    /// Create a client over an existing transport.
    ///
    /// The transport's own timeouts apply; those in `config` are ignored.
    pub fn with_http_client(config: ChargilyConfig, http: HttpClient) -> ChargilyResult<Self> {
        config.validate()?;
        let root = config.api_url()?;
        debug!(mode = %config.mode, root = %root, "Chargily client ready");

        Ok(Self {
            http,
            api_key: Arc::new(config.api_key),
            root,
        })
    }

    /// Create a client from `CHARGILY_*` environment variables
    pub fn from_env() -> ChargilyResult<Self> {
        Self::new(ChargilyConfig::from_env()?)
    }

    /// API root every path is appended to
    pub fn api_url(&self) -> &Url {
        &self.root
    }

    /// Issue a request without a body
    pub(crate) async fn call<T>(&self, endpoint: &Endpoint, id: Option<&str>) -> ChargilyResult<T>
    where
        T: DeserializeOwned,
    {
        self.request(endpoint, id, None::<&()>, None).await
    }

    /// Issue a request with a JSON body
    pub(crate) async fn call_with_body<T, B>(
        &self,
        endpoint: &Endpoint,
        id: Option<&str>,
        body: &B,
    ) -> ChargilyResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, id, Some(body), None).await
    }

    /// Issue a paginated GET
    pub(crate) async fn call_list<T>(
        &self,
        endpoint: &Endpoint,
        id: Option<&str>,
        page: Option<PageParams>,
    ) -> ChargilyResult<T>
    where
        T: DeserializeOwned,
    {
        let page = PageParams::from(page);
        self.request(endpoint, id, None::<&()>, Some(page)).await
    }

    /// The one request primitive every operation goes through
    async fn request<T, B>(
        &self,
        endpoint: &Endpoint,
        id: Option<&str>,
        body: Option<&B>,
        page: Option<PageParams>,
    ) -> ChargilyResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        if let Some(id) = id {
            validate_id(endpoint.resource(), id)?;
        }

        let url = endpoint.url(&self.root, id)?;
        trace!(endpoint = endpoint.name, url = %url, "Built request URL");

        let mut request = self
            .http
            .request(endpoint.method.clone(), url.as_str())
            .bearer_auth(self.api_key.expose_secret())
            .header(header::CONTENT_TYPE.as_str(), APPLICATION_JSON);

        if endpoint.paginated {
            let page = page.unwrap_or_default();
            request = request.queries(page.query());
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(
            endpoint = endpoint.name,
            method = %endpoint.method,
            path = url.path(),
            "Sending Chargily request"
        );

        let response = request.send().await.map_err(|e| {
            let timed_out = e.is_timeout();
            let err = ChargilyError::from(e);
            warn!(
                endpoint = endpoint.name,
                timed_out,
                error = %err,
                "Chargily request failed"
            );
            err
        })?;

        Self::decode(endpoint, response)
    }

    fn decode<T: DeserializeOwned>(endpoint: &Endpoint, response: Response) -> ChargilyResult<T> {
        let status = response.status().as_u16();

        if !response.is_success() {
            let err = ChargilyError::from_status(status, response.bytes());
            warn!(
                endpoint = endpoint.name,
                status,
                error = %err,
                "Chargily API returned an error"
            );
            return Err(err);
        }

        debug!(endpoint = endpoint.name, status, "Chargily request succeeded");

        Ok(response.json()?)
    }
}

impl fmt::Debug for ChargilyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChargilyClient")
            .field("root", &self.root.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
