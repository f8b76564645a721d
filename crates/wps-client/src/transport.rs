//! HTTP transport for execute requests.
//!

use reqwest::{
    Proxy,
    blocking::Client,
    header::{CONTENT_TYPE, HeaderValue},
};
use thiserror::Error;
use tracing::debug;

use crate::endpoint::Endpoint;

/// The content type of an execute request.
pub const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// The status and body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: u16,

    /// The raw response body.
    pub body: Vec<u8>,
}

/// A transport that can POST an XML document.
pub trait Transport {
    /// POST `body` to `url` and return the response.
    fn post_xml(&mut self, url: &str, body: String) -> Result<TransportResponse, TransportError>;
}

/// Blocking HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client with the endpoint's timeout and proxies.
    ///
    /// Only the configured proxies are used, proxy environment variables are ignored.
    pub fn new(endpoint: &Endpoint) -> Result<Self, TransportError> {
        let mut builder = Client::builder().timeout(endpoint.timeout()).no_proxy();

        if let Some(proxy) = &endpoint.proxy.http {
            builder = builder.proxy(Proxy::http(proxy).map_err(TransportError::Proxy)?);
        }

        if let Some(proxy) = &endpoint.proxy.https {
            builder = builder.proxy(Proxy::https(proxy).map_err(TransportError::Proxy)?);
        }

        let client = builder.build().map_err(TransportError::Build)?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_xml(&mut self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        debug!("POST {url} ({} bytes)", body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE))
            .body(body)
            .send()
            .map_err(TransportError::Send)?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(TransportError::ReadBody)?.to_vec();

        Ok(TransportResponse { status, body })
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid proxy URL: {0}")]
    Proxy(#[source] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Failed to send request: {0}")]
    Send(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),
}
