//! The WPS endpoint to submit to.
//!

use core::time::Duration;

use serde::{Deserialize, Serialize};

/// The GeoServer `ows` execute endpoint.
pub const DEFAULT_URL: &str =
    "http://onomap-gs.noise-planet.org/geoserver/ows?service=wps&version=1.0.0&request=Execute";

/// Proxies to route requests through, by scheme.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProxyConfig {
    /// Proxy for `http` URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<String>,

    /// Proxy for `https` URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https: Option<String>,
}

impl ProxyConfig {
    /// If no proxy is configured for either scheme.
    pub fn is_empty(&self) -> bool {
        self.http.is_none() && self.https.is_none()
    }
}

/// Endpoint for a WPS service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Endpoint {
    /// The execute URL, including the `service`, `version` and `request` query.
    pub url: String,

    /// The request timeout in seconds, `0` disables the timeout.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// The proxies to route the request through.
    #[serde(default)]
    pub proxy: ProxyConfig,
}

impl Endpoint {
    /// An endpoint at `url` with no proxy.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// The request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_seconds {
            0 => None,
            seconds => Some(Duration::from_secs(seconds)),
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_seconds: default_timeout_seconds(),
            proxy: ProxyConfig::default(),
        }
    }
}

fn default_timeout_seconds() -> u64 {
    120
}
