//! Integration tests for [`HttpEnrichmentGateway`] against a mock HTTP
//! server, covering the query contract and every failure mode.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use httpmock::prelude::*;
use timecard::directory::{
    adapters::http::HttpEnrichmentGateway,
    domain::{EnrichedProfile, PassportId},
    ports::{EnrichmentError, EnrichmentGateway},
};

fn passport(raw: &str) -> PassportId {
    PassportId::parse(raw).expect("valid passport")
}

#[tokio::test]
async fn lookup_sends_series_and_number_and_decodes_the_profile() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/info")
                .query_param("passportSerie", "AB")
                .query_param("passportNumber", "123456");
            then.status(200).json_body(serde_json::json!({
                "surname": "Ivanov",
                "name": "Ivan",
                "patronymic": "Ivanovich",
                "address": "Moscow",
            }));
        })
        .await;

    let gateway = HttpEnrichmentGateway::new(reqwest::Client::new(), server.url("/info"));
    let profile = gateway
        .lookup(&passport("AB 123456"))
        .await
        .expect("lookup should succeed");

    assert_eq!(
        profile,
        EnrichedProfile::new("Ivanov", "Ivan", "Ivanovich", "Moscow")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_profile_fields_decode_as_empty_strings() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/info");
            then.status(200)
                .json_body(serde_json::json!({ "surname": "Ivanov" }));
        })
        .await;

    let gateway = HttpEnrichmentGateway::new(reqwest::Client::new(), server.url("/info"));
    let profile = gateway
        .lookup(&passport("AB 123456"))
        .await
        .expect("lookup should succeed");

    assert_eq!(profile.surname, "Ivanov");
    assert_eq!(profile.given_name, "");
    assert_eq!(profile.patronymic, "");
    assert_eq!(profile.address, "");
}

#[tokio::test]
async fn upstream_server_error_surfaces_the_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/info");
            then.status(500);
        })
        .await;

    let gateway = HttpEnrichmentGateway::new(reqwest::Client::new(), server.url("/info"));
    let result = gateway.lookup(&passport("AB 123456")).await;

    assert!(matches!(
        result,
        Err(EnrichmentError::UpstreamStatus(500))
    ));
}

#[tokio::test]
async fn upstream_not_found_surfaces_the_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/info");
            then.status(404);
        })
        .await;

    let gateway = HttpEnrichmentGateway::new(reqwest::Client::new(), server.url("/info"));
    let result = gateway.lookup(&passport("AB 123456")).await;

    assert!(matches!(
        result,
        Err(EnrichmentError::UpstreamStatus(404))
    ));
}

#[tokio::test]
async fn undecodable_body_is_a_malformed_body_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/info");
            then.status(200).body("not json at all");
        })
        .await;

    let gateway = HttpEnrichmentGateway::new(reqwest::Client::new(), server.url("/info"));
    let result = gateway.lookup(&passport("AB 123456")).await;

    assert!(matches!(result, Err(EnrichmentError::MalformedBody(_))));
}
