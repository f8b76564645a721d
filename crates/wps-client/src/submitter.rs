//! Submit an artifact to a WPS endpoint.
//!

use std::path::Path;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    Config,
    artifact::{Artifact, FileAccessError},
    endpoint::Endpoint,
    request::ExecuteRequest,
    transport::{HttpTransport, Transport, TransportError},
};

/// Reads, encodes and submits artifacts as WPS execute requests.
#[derive(Debug)]
pub struct PayloadSubmitter<T: Transport> {
    /// The execute URL.
    pub endpoint_url: String,

    /// The request template.
    pub request: ExecuteRequest,

    /// The transport to POST with.
    pub transport: T,
}

impl PayloadSubmitter<HttpTransport> {
    /// Create a submitter using an HTTP transport from the config.
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.endpoint)?;

        Ok(Self::new(
            config.endpoint.url.clone(),
            config.request.clone(),
            transport,
        ))
    }
}

impl<T: Transport> PayloadSubmitter<T> {
    /// Create a new submitter.
    pub fn new(endpoint_url: String, request: ExecuteRequest, transport: T) -> Self {
        Self {
            endpoint_url,
            request,
            transport,
        }
    }

    /// Submit the artifact at `artifact_path`, returning the response body.
    ///
    /// The artifact is read before any network activity, a missing artifact
    /// never reaches the transport.
    pub fn submit(&mut self, artifact_path: &Path) -> Result<Vec<u8>, SubmitError> {
        let artifact = Artifact::read(artifact_path)?;
        info!("{} octets", artifact.len());

        let body = self.request.render(&artifact.encode());
        drop(artifact);

        let response = self.transport.post_xml(&self.endpoint_url, body)?;

        if response.status != 200 {
            let error = SubmitError::http_status(response.status);
            warn!("{} responded with {error}", self.endpoint_url);
            return Err(error);
        }

        Ok(response.body)
    }
}

/// Submit the artifact at `artifact_path` to `endpoint` over HTTP.
pub fn submit(artifact_path: &Path, endpoint: &Endpoint) -> Result<Vec<u8>, SubmitError> {
    let transport = HttpTransport::new(endpoint)?;
    let mut submitter =
        PayloadSubmitter::new(endpoint.url.clone(), ExecuteRequest::default(), transport);

    submitter.submit(artifact_path)
}

/// The standard reason phrase for a status code.
pub fn reason_phrase(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown Status")
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    FileAccess(#[from] FileAccessError),

    #[error("HTTP {code} {reason}")]
    HttpStatus { code: u16, reason: &'static str },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// A status error with the standard reason phrase for `code`.
    pub fn http_status(code: u16) -> Self {
        Self::HttpStatus {
            code,
            reason: reason_phrase(code),
        }
    }
}
