use std::time::Duration;

use enom::{Credentials, DomainName, EnomClient, EnomError};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EnomClient {
    EnomClient::builder(Credentials::new("reseller", "secret").unwrap())
        .endpoint(format!("{}/interface.asp", server.uri()))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap()
}

fn envelope(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <interface-response>{body}<ErrCount>0</ErrCount><Done>true</Done></interface-response>"
    )
}

#[tokio::test]
async fn posts_form_with_credentials_and_command() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/interface.asp"))
        .and(body_string_contains("command=GetRegLock"))
        .and(body_string_contains("uid=reseller"))
        .and(body_string_contains("pw=secret"))
        .and(body_string_contains("responseType=xml"))
        .and(body_string_contains("SLD=example"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(envelope("<RegLock>1</RegLock>")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let domain = DomainName::parse("example.com").unwrap();
    assert!(client.get_reg_lock(&domain).await.unwrap());
}

#[tokio::test]
async fn non_success_status_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_balance().await.unwrap_err();
    match err {
        EnomError::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body.as_deref(), Some("maintenance"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn timeouts_are_retried_up_to_the_attempt_budget() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(envelope("<Balance>1.00</Balance>"))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_balance().await.unwrap_err();
    assert!(
        matches!(err, EnomError::Timeout { attempts: 3, .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn registrar_errors_surface_their_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<interface-response><ErrCount>1</ErrCount>\
             <errors><Err1>Domain name not found</Err1></errors>\
             <Done>true</Done></interface-response>",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let domain = DomainName::parse("missing.com").unwrap();
    let err = client.get_contacts(&domain).await.unwrap_err();
    assert_eq!(err.messages(), ["Domain name not found"]);
}
