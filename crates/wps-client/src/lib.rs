//! # wps-client
//! Uploads a binary artifact to a WPS service as a base64 literal input of an
//! `Execute` request.
//!

pub mod artifact;
pub mod config;
pub mod endpoint;
pub mod payload;
pub mod request;
pub mod submitter;
pub mod transport;

pub use artifact::{Artifact, FileAccessError};
pub use config::{Config, LoadConfigError};
pub use endpoint::{Endpoint, ProxyConfig};
pub use payload::EncodedPayload;
pub use request::ExecuteRequest;
pub use submitter::{PayloadSubmitter, SubmitError, submit};
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
