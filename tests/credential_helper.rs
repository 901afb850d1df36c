//! End-to-end tests for the credential exchange against a mock API server.

use docker_credential_digitalocean::{
    CredentialError, DigitalOceanCredentialHelper, HelperConfig,
};
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Same fixture as the DigitalOcean API returns: base64 of
// "b7d03a6947b217efb6f3ec3bd3504582:b7d03a6947b217efb6f3ec3bd3504582\n".
const API_FIXTURE: &str = concat!(
    r#"{"auths": {"registry.digitalocean.com": {"auth": "#,
    r#""YjdkMDNhNjk0N2IyMTdlZmI2ZjNlYzNiZDM1MDQ1ODI6YjdkMDNhNjk0N2IyMTdlZmI2ZjNlYzNiZDM1MDQ1ODIK""#,
    r#"}}}"#
);

fn helper_for(server: &MockServer, config: HelperConfig) -> DigitalOceanCredentialHelper {
    DigitalOceanCredentialHelper::builder()
        .with_config(config)
        .with_api_endpoint(Url::parse(&server.uri()).unwrap())
        .build()
}

#[tokio::test]
async fn test_get_with_expiry_and_read_write() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/registry/docker-credentials"))
        .and(header("Authorization", "Bearer blah"))
        .and(header("Accept", "application/json"))
        .and(query_param("expiry_seconds", "3600"))
        .and(query_param("read_write", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(API_FIXTURE, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let config = HelperConfig::builder()
        .with_token("blah")
        .with_expiry_seconds(3600)
        .with_read_write(true)
        .build();
    let cred = helper_for(&server, config)
        .get("registry.digitalocean.com/defanglabs")
        .await
        .unwrap();

    assert_eq!(cred.username, "b7d03a6947b217efb6f3ec3bd3504582");
    assert_eq!(cred.password, "b7d03a6947b217efb6f3ec3bd3504582\n");
}

#[tokio::test]
async fn test_get_defaults_send_no_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/registry/docker-credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"auths": {"registry.digitalocean.com": {"auth": "dXNlcjpwYXNzCg=="}}}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let config = HelperConfig::builder().with_token("blah").build();
    let cred = helper_for(&server, config)
        .get("registry.digitalocean.com")
        .await
        .unwrap();
    assert_eq!(cred.username, "user");
    assert_eq!(cred.password, "pass\n");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_non_200_status_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/registry/docker-credentials"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = HelperConfig::builder().with_token("blah").build();
    let err = helper_for(&server, config)
        .get("registry.digitalocean.com")
        .await
        .unwrap_err();

    match err {
        CredentialError::UnexpectedStatus(status) => assert!(status.starts_with("404")),
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_foreign_registry_makes_no_network_call() {
    let server = MockServer::start().await;

    let config = HelperConfig::builder().with_token("blah").build();
    let err = helper_for(&server, config)
        .get("ghcr.io/someorg/someimage")
        .await
        .unwrap_err();

    assert!(matches!(err, CredentialError::UnsupportedRegistry(_)));
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_response_without_registry_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/registry/docker-credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"auths": {"ghcr.io": {"auth": "dXNlcjpwYXNz"}}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let config = HelperConfig::builder().with_token("blah").build();
    let err = helper_for(&server, config)
        .get("registry.digitalocean.com")
        .await
        .unwrap_err();

    match err {
        CredentialError::NoCredentialsForRegistry(host) => {
            assert_eq!(host, "registry.digitalocean.com")
        }
        other => panic!("unexpected error: {}", other),
    }
}
