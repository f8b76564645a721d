//! WPS 1.0.0 `Execute` request rendering.
//!

use serde::{Deserialize, Serialize};

use crate::payload::EncodedPayload;

/// The upload process exposed by the GeoServer.
pub const PROCESS_IDENTIFIER: &str = "groovy:nc_upload";

/// The literal input carrying the base64 zip.
pub const INPUT_IDENTIFIER: &str = "encode64ZIP";

/// The raw output requested from the process.
pub const OUTPUT_IDENTIFIER: &str = "result";

const EXECUTE_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8"?><wps:Execute version="1.0.0" service="WPS" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns="http://www.opengis.net/wps/1.0.0" xmlns:wfs="http://www.opengis.net/wfs" xmlns:wps="http://www.opengis.net/wps/1.0.0" xmlns:ows="http://www.opengis.net/ows/1.1" xmlns:gml="http://www.opengis.net/gml" xmlns:ogc="http://www.opengis.net/ogc" xmlns:wcs="http://www.opengis.net/wcs/1.1.1" xmlns:xlink="http://www.w3.org/1999/xlink" xsi:schemaLocation="http://www.opengis.net/wps/1.0.0 http://schemas.opengis.net/wps/1.0.0/wpsAll.xsd">"#;

/// The identifiers of an `Execute` request with a single literal input and a
/// single raw output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    /// The process to execute.
    pub process_identifier: String,

    /// The literal data input the payload is bound to.
    pub input_identifier: String,

    /// The raw data output to return.
    pub output_identifier: String,
}

impl ExecuteRequest {
    /// Render the request document with `payload` as the literal input.
    pub fn render(&self, payload: &EncodedPayload) -> String {
        let body = format!(
            "
  <ows:Identifier>{process}</ows:Identifier>
  <wps:DataInputs>
    <wps:Input>
      <ows:Identifier>{input}</ows:Identifier>
      <wps:Data>
        <wps:LiteralData>{payload}</wps:LiteralData>
      </wps:Data>
    </wps:Input>
  </wps:DataInputs>
  <wps:ResponseForm>
    <wps:RawDataOutput>
      <ows:Identifier>{output}</ows:Identifier>
    </wps:RawDataOutput>
  </wps:ResponseForm>
</wps:Execute>",
            process = escape_text(&self.process_identifier),
            input = escape_text(&self.input_identifier),
            output = escape_text(&self.output_identifier),
            payload = payload.as_str(),
        );

        let mut xml = String::with_capacity(EXECUTE_OPEN.len() + body.len());
        xml.push_str(EXECUTE_OPEN);
        xml.push_str(&body);
        xml
    }
}

impl Default for ExecuteRequest {
    fn default() -> Self {
        Self {
            process_identifier: PROCESS_IDENTIFIER.to_string(),
            input_identifier: INPUT_IDENTIFIER.to_string(),
            output_identifier: OUTPUT_IDENTIFIER.to_string(),
        }
    }
}

/// Escape character data for use inside an element.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(character),
        }
    }
    escaped
}
