//! The HTTP client shared by every fetch in the crate.
//! Compile-time defaults (UA, endpoint, key) live in `constants`.

mod constants;

use crate::core::FmpError;
use constants::{DEFAULT_API_KEY, DEFAULT_BASE_API, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct FmpClient {
    http: Client,
    base_api: Url,
    api_key: String,
}

impl Default for FmpClient {
    fn default() -> Self {
        Self::builder().build().expect("default FmpClient")
    }
}

impl FmpClient {
    /// Start configuring a client.
    pub fn builder() -> FmpClientBuilder {
        FmpClientBuilder::default()
    }

    /* -------- accessors for the request-building modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_api(&self) -> &Url {
        &self.base_api
    }
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FmpClientBuilder {
    user_agent: Option<String>,
    base_api: Option<Url>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FmpClientBuilder {
    /// Send a custom User-Agent instead of the crate default.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., `https://financialmodelingprep.com/api/v3/`).
    pub fn base_api(mut self, url: Url) -> Self {
        self.base_api = Some(url);
        self
    }

    /// Use an API key other than the built-in demo key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overall per-request timeout. Off unless set.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Connect-phase timeout. Off unless set.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<FmpClient, FmpError> {
        let base_api = self.base_api.unwrap_or(Url::parse(DEFAULT_BASE_API)?);

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FmpClient {
            http,
            base_api,
            api_key: self
                .api_key
                .unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
        })
    }
}
