//! Live API tests.
//!
//! Run with a real key:
//! ```bash
//! API_KEY=at_xxx cargo test --test live_test -- --ignored --nocapture
//! ```

mod common;

use reverse_dns_client::{ApiError, Client, SearchField, SearchRequest, SearchTerm};

fn live_client() -> Client {
    let key = std::env::var("API_KEY").unwrap_or_default();
    Client::new(key).expect("API_KEY has an invalid format")
}

fn facebook_request() -> SearchRequest {
    SearchRequest::new(
        vec![SearchTerm::new(SearchField::Domain, "facebook.*")],
        "txt",
    )
}

#[tokio::test]
#[ignore]
async fn live_get_returns_records() {
    skip_if_no_credentials!("API_KEY");

    let client = live_client();
    let response = client.get(&facebook_request()).await;
    assert!(response.is_ok(), "get failed: {response:?}");

    let response = response.unwrap();
    assert_eq!(response.result.len() as u32, response.size);
}

#[tokio::test]
#[ignore]
async fn live_limit_caps_result_size() {
    skip_if_no_credentials!("API_KEY");

    let client = live_client();
    let mut request = facebook_request();
    request.limit = Some(2);

    let response = client.get(&request).await.expect("get failed");
    assert_eq!(response.size, 2);
    assert_eq!(response.result.len(), 2);
}

#[tokio::test]
#[ignore]
async fn live_exclude_terms_accepted() {
    skip_if_no_credentials!("API_KEY");

    let client = live_client();
    let request = SearchRequest::new(
        vec![SearchTerm::excluding(SearchField::Domain, "facebook.*")],
        "txt",
    );

    let response = client.get(&request).await;
    assert!(response.is_ok(), "get failed: {response:?}");
}

#[tokio::test]
#[ignore]
async fn live_xml_output_returned_raw() {
    skip_if_no_credentials!("API_KEY");

    let client = live_client();
    let mut request = facebook_request();
    request.output_format = Some("xml".to_string());

    let body = client.get_raw(&request).await.expect("get_raw failed");
    assert!(body.starts_with("<?xml"), "not XML: {body:.40}");
}

#[tokio::test]
#[ignore]
async fn live_wrong_key_is_auth_error() {
    // Well-formed but inactive key: passes validation, fails at the API.
    let client = Client::new("at_00000000000000000000000000000").unwrap();
    let result = client.get(&facebook_request()).await;
    assert!(
        matches!(result, Err(ApiError::AuthError { .. })),
        "expected AuthError, got {result:?}"
    );
}
