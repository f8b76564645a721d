//! HTTP transport tests against a local server
//!

use std::path::Path;

use common::write_artifact;
use mockito::Matcher;
use wps_client::{
    Endpoint, ProxyConfig, SubmitError, TransportError, submit, transport::XML_CONTENT_TYPE,
};

mod common;

const PATH: &str = "/geoserver/ows";
const QUERY: &str = "?service=wps&version=1.0.0&request=Execute";

fn execute_query() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("service".into(), "wps".into()),
        Matcher::UrlEncoded("version".into(), "1.0.0".into()),
        Matcher::UrlEncoded("request".into(), "Execute".into()),
    ])
}

#[test]
fn posts_execute_document() {
    let _logger = shared::test::init_test_logger();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", PATH)
        .match_query(execute_query())
        .match_header("content-type", XML_CONTENT_TYPE)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("<wps:LiteralData>UEsDBA==</wps:LiteralData>".into()),
            Matcher::Regex("<ows:Identifier>groovy:nc_upload</ows:Identifier>".into()),
        ]))
        .with_status(200)
        .with_body("OK")
        .expect(1)
        .create();

    let artifact = write_artifact(b"PK\x03\x04");
    let endpoint = Endpoint::new(format!("{}{PATH}{QUERY}", server.url()));

    let response = submit(artifact.path(), &endpoint).unwrap();

    assert_eq!(response, b"OK");
    mock.assert();
}

#[test]
fn server_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", PATH)
        .match_query(execute_query())
        .with_status(500)
        .with_body("Process failed")
        .expect(1)
        .create();

    let artifact = write_artifact(b"PK\x03\x04");
    let endpoint = Endpoint::new(format!("{}{PATH}{QUERY}", server.url()));

    let error = submit(artifact.path(), &endpoint).unwrap_err();

    assert_eq!(error.to_string(), "HTTP 500 Internal Server Error");
    mock.assert();
}

#[test]
fn missing_artifact_sends_nothing() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    let endpoint = Endpoint::new(format!("{}{PATH}{QUERY}", server.url()));
    let error = submit(Path::new("./missing/track.zip"), &endpoint).unwrap_err();

    assert!(matches!(error, SubmitError::FileAccess(_)));
    mock.assert();
}

#[test]
fn routes_through_http_proxy() {
    let mut proxy = mockito::Server::new();
    let mock = proxy
        .mock("POST", Matcher::Any)
        .match_header("host", "wps.invalid")
        .with_status(200)
        .with_body("proxied")
        .expect(1)
        .create();

    let artifact = write_artifact(b"PK\x03\x04");
    let endpoint = Endpoint {
        proxy: ProxyConfig {
            http: Some(proxy.url()),
            https: None,
        },
        ..Endpoint::new(format!("http://wps.invalid{PATH}{QUERY}"))
    };

    let response = submit(artifact.path(), &endpoint).unwrap();

    assert_eq!(response, b"proxied");
    mock.assert();
}

#[test]
fn http_request_skips_https_proxy() {
    let mut proxy = mockito::Server::new();
    let proxy_mock = proxy.mock("POST", Matcher::Any).expect(0).create();

    let mut server = mockito::Server::new();
    let server_mock = server
        .mock("POST", PATH)
        .match_query(execute_query())
        .with_status(200)
        .with_body("direct")
        .expect(1)
        .create();

    let artifact = write_artifact(b"PK\x03\x04");
    let endpoint = Endpoint {
        proxy: ProxyConfig {
            http: None,
            https: Some(proxy.url()),
        },
        ..Endpoint::new(format!("{}{PATH}{QUERY}", server.url()))
    };

    let response = submit(artifact.path(), &endpoint).unwrap();

    assert_eq!(response, b"direct");
    proxy_mock.assert();
    server_mock.assert();
}

#[test]
fn zero_timeout_is_unbounded() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", PATH)
        .match_query(execute_query())
        .with_status(200)
        .with_body("OK")
        .expect(1)
        .create();

    let artifact = write_artifact(b"PK\x03\x04");
    let endpoint = Endpoint {
        timeout_seconds: 0,
        ..Endpoint::new(format!("{}{PATH}{QUERY}", server.url()))
    };

    let response = submit(artifact.path(), &endpoint).unwrap();

    assert_eq!(response, b"OK");
    mock.assert();
}

#[test]
fn connection_refused() {
    let artifact = write_artifact(b"PK\x03\x04");
    let endpoint = Endpoint::new(format!("http://127.0.0.1:1{PATH}{QUERY}"));

    let error = submit(artifact.path(), &endpoint).unwrap_err();

    assert!(matches!(
        error,
        SubmitError::Transport(TransportError::Send(_))
    ));
}
