//! HTTP client construction.
//!
//! The forge client and the asset transfer both take an already built
//! [`reqwest::blocking::Client`]. This module is the one place that builds it:
//! - A single overall timeout, generous enough for multi-gigabyte artifacts
//! - Optional explicit proxy (otherwise `HTTPS_PROXY`/`HTTP_PROXY` are honoured)
//! - TLS verification on unless explicitly disabled
//!
//! # Examples
//!
//! ```no_run
//! use relget_core::http::HttpClientConfig;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), reqwest::Error> {
//! let client = HttpClientConfig::new()
//!     .with_timeout(Duration::from_secs(600))
//!     .with_proxy("http://proxy.example.com:8080".to_string())
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use reqwest::blocking::Client;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("relget/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30 * 60);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub proxy: Option<String>,
    /// Skip TLS certificate verification
    pub insecure: bool,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            proxy: None,
            insecure: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: String) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Build the blocking client.
    pub fn build(&self) -> Result<Client, reqwest::Error> {
        let mut builder = Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(&self.user_agent);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        if self.insecure {
            log::warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build()
    }
}
