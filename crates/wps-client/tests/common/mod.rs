//! # common
//!

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;
use wps_client::{Transport, TransportError, TransportResponse};

/// A transport that records requests and replies with a fixed response.
pub struct MockTransport {
    pub status: u16,
    pub body: Vec<u8>,
    pub calls: usize,
    pub requests: Vec<(String, String)>,
}

impl MockTransport {
    pub fn new(status: u16, body: &[u8]) -> Self {
        Self {
            status,
            body: body.to_vec(),
            calls: 0,
            requests: Vec::new(),
        }
    }
}

impl Transport for MockTransport {
    fn post_xml(&mut self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        self.calls += 1;
        self.requests.push((url.to_string(), body));

        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Write `contents` to a temporary artifact file.
pub fn write_artifact(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

/// The text of every `LiteralData` element in an execute document.
pub fn literal_data(xml: &str) -> Vec<String> {
    let document = roxmltree::Document::parse(xml).unwrap();
    document
        .descendants()
        .filter(|node| node.has_tag_name("LiteralData"))
        .map(|node| node.text().unwrap_or_default().to_string())
        .collect()
}
