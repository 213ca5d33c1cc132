//! Client configuration
//!
//! The API key, the mode (which selects the base URL) and the API version are
//! fixed when the client is built. Timeouts are part of the configuration
//! because they are enforced by the transport, not by individual calls.

use crate::error::{ChargilyError, ChargilyResult};
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Live API root; the version segment is appended
pub const CHARGILY_LIVE_URL: &str = "https://pay.chargily.net/api";

/// Test API root; the version segment is appended
pub const CHARGILY_TEST_URL: &str = "https://pay.chargily.net/test/api";

/// Default API version
pub const DEFAULT_API_VERSION: &str = "v2";

/// Environment variable prefix used by [`ChargilyConfig::from_env`]
pub const ENV_PREFIX: &str = "CHARGILY";

/// Operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Test mode; no real funds move
    Test,
    /// Live mode
    #[default]
    Live,
}

impl Mode {
    /// API root for this mode, without the version segment
    pub fn base_url(&self) -> &'static str {
        match self {
            Mode::Test => CHARGILY_TEST_URL,
            Mode::Live => CHARGILY_LIVE_URL,
        }
    }

    /// Mode name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Test => "test",
            Mode::Live => "live",
        }
    }
}

impl FromStr for Mode {
    type Err = ChargilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "test" => Ok(Mode::Test),
            "live" => Ok(Mode::Live),
            other => Err(ChargilyError::Config(format!(
                "unknown mode `{}`, expected `test` or `live`",
                other
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chargily client configuration
#[derive(Debug)]
pub struct ChargilyConfig {
    /// Secret API key, sent as a bearer token
    pub api_key: SecretString,
    /// Test or live
    pub mode: Mode,
    /// API version path segment
    pub version: String,
    /// Explicit API root; used verbatim, without a version segment
    pub base_url: Option<String>,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ChargilyConfig {
    /// Create a live-mode configuration with defaults
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        Self {
            api_key: SecretString::new(api_key.into()),
            mode: Mode::default(),
            version: DEFAULT_API_VERSION.to_string(),
            base_url: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("chargily-pay/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Start a configuration builder
    pub fn builder(api_key: impl Into<String>) -> ChargilyConfigBuilder {
        ChargilyConfigBuilder {
            config: Self::new(api_key),
        }
    }

    /// Load configuration from `CHARGILY_*` environment variables.
    ///
    /// | Variable | Meaning |
    /// |----------|---------|
    /// | `CHARGILY_API_KEY` | required |
    /// | `CHARGILY_MODE` | `test` or `live` |
    /// | `CHARGILY_API_VERSION` | defaults to `v2` |
    /// | `CHARGILY_BASE_URL` | explicit API root |
    /// | `CHARGILY_TIMEOUT_SECS` | request timeout in seconds |
    pub fn from_env() -> ChargilyResult<Self> {
        Self::from_lookup(|key| env::var(format!("{}_{}", ENV_PREFIX, key)).ok())
    }

    /// Load a `.env` file if one exists, then read the environment
    pub fn from_dotenv() -> ChargilyResult<Self> {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            return Err(ChargilyError::Config(format!("failed to load .env: {}", e)));
        }
        Self::from_env()
    }

    /// Shared by `from_env` and tests; `lookup` receives unprefixed keys
    pub(crate) fn from_lookup<F>(lookup: F) -> ChargilyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY").ok_or_else(|| {
            ChargilyError::Config(format!("{}_API_KEY is not set", ENV_PREFIX))
        })?;

        let mut builder = Self::builder(api_key);

        if let Some(mode) = lookup("MODE") {
            builder = builder.mode(mode.parse()?);
        }
        if let Some(version) = lookup("API_VERSION") {
            builder = builder.version(version);
        }
        if let Some(base_url) = lookup("BASE_URL") {
            builder = builder.base_url(base_url);
        }
        if let Some(secs) = lookup("TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ChargilyError::Config(format!(
                    "{}_TIMEOUT_SECS must be a whole number of seconds, got `{}`",
                    ENV_PREFIX, secs
                ))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Resolve the API root every request path is appended to
    pub fn api_url(&self) -> ChargilyResult<Url> {
        let raw = match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("{}/{}", self.mode.base_url(), self.version.trim_matches('/')),
        };

        let url = Url::parse(&raw)
            .map_err(|e| ChargilyError::Config(format!("invalid base URL `{}`: {}", raw, e)))?;

        if url.cannot_be_a_base() {
            return Err(ChargilyError::Config(format!(
                "base URL `{}` cannot carry a path",
                raw
            )));
        }

        Ok(url)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> ChargilyResult<()> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ChargilyError::Config("API key must not be empty".into()));
        }
        if self.base_url.is_none() && self.version.trim_matches('/').is_empty() {
            return Err(ChargilyError::Config("API version must not be empty".into()));
        }
        self.api_url().map(|_| ())
    }
}

/// Builder for [`ChargilyConfig`]
#[derive(Debug)]
pub struct ChargilyConfigBuilder {
    config: ChargilyConfig,
}

impl ChargilyConfigBuilder {
    /// Set the mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Use test mode
    pub fn test_mode(self) -> Self {
        self.mode(Mode::Test)
    }

    /// Set the API version segment
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Override the API root
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the whole-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> ChargilyResult<ChargilyConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
