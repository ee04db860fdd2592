use std::net::TcpListener;
use std::time::Duration;

use gcnotify::{
    BulkEmail, Email, NotifyClient, NotifyError, Operation, ResponseError, Sms,
    StatusQueryOptions,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

const API_KEY: &str = "gcntfy-testing11-00000000-0000-0000-0000-000000000000-00000000-0000-0000-0000-00000000000000";
const TEMPLATE_ID: &str = "00000000-0000-0000-0000-000000000000";
const NOTIFICATION_ID: &str = "00000000-0000-0000-0000-000000000000";

struct RawQuery(Option<&'static str>);

impl Match for RawQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query() == self.0
    }
}

fn auth_header() -> String {
    format!("ApiKey-v1 {API_KEY}")
}

fn client_for(server: &MockServer) -> NotifyClient {
    NotifyClient::builder(API_KEY)
        .host(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn send_email_returns_created_notification() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/notifications/email"))
        .and(header("Authorization", auth_header().as_str()))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "email_address": "test@test.com",
            "template_id": TEMPLATE_ID,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": NOTIFICATION_ID,
            "reference": NOTIFICATION_ID,
            "uri": format!("https://api.notification.canada.ca/v2/notifications/{NOTIFICATION_ID}"),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .send_email(&Email::new("test@test.com", TEMPLATE_ID))
        .await
        .unwrap();

    assert_eq!(response.status_code, 201);
    assert_eq!(response.id.as_deref(), Some(NOTIFICATION_ID));
    assert_eq!(response.reference.as_deref(), Some(NOTIFICATION_ID));
    assert!(response.uri.is_some());
    assert!(response.errors.is_empty());
}

#[tokio::test]
async fn send_sms_posts_personalisation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/notifications/sms"))
        .and(body_json(json!({
            "phone_number": "+16135550123",
            "template_id": TEMPLATE_ID,
            "personalisation": { "code": "1234" },
            "reference": "login",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": NOTIFICATION_ID,
            "content": { "body": "Your code is 1234", "from_number": "GCNotify" },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sms = Sms::new("+16135550123", TEMPLATE_ID)
        .with_personalisation("code", "1234")
        .with_reference("login");
    let response = client_for(&server).send_sms(&sms).await.unwrap();

    assert_eq!(response.status_code, 201);
    assert_eq!(
        response.content.unwrap().body.as_deref(),
        Some("Your code is 1234")
    );
}

#[tokio::test]
async fn send_bulk_email_surfaces_server_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/notifications/bulk"))
        .and(body_json(json!({
            "name": "Test Bulk Email",
            "template_id": TEMPLATE_ID,
        })))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": [{ "error": "Error", "message": "Message" }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .send_bulk_email(&BulkEmail::new("Test Bulk Email", TEMPLATE_ID))
        .await
        .unwrap();

    assert_eq!(response.status_code, 500);
    assert_eq!(response.errors, vec![ResponseError::new("Error", "Message")]);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn empty_5xx_body_decodes_to_status_only_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/notifications/email"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .send_email(&Email::new("test@test.com", TEMPLATE_ID))
        .await
        .unwrap();

    assert_eq!(response.status_code, 502);
    assert!(response.errors.is_empty());
    assert!(!response.is_success());
}

#[tokio::test]
async fn get_status_sends_exact_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/notifications"))
        .and(RawQuery(Some("template_type=email")))
        .and(header("Authorization", auth_header().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notifications": [{ "id": NOTIFICATION_ID, "reference": NOTIFICATION_ID }],
            "links": { "current": format!("{}/v2/notifications?template_type=email", server.uri()) },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .get_status(&StatusQueryOptions::new().with_template_type("email"))
        .await
        .unwrap();

    assert_eq!(page.status_code, 200);
    assert_eq!(page.notifications.len(), 1);
    assert_eq!(page.notifications[0].id.as_deref(), Some(NOTIFICATION_ID));
    assert!(!page.has_next());
}

#[tokio::test]
async fn get_status_by_id_requests_notification_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v2/notifications/{NOTIFICATION_ID}")))
        .and(RawQuery(None))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": NOTIFICATION_ID,
            "type": "sms",
            "status": "delivered",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let status = client_for(&server)
        .get_status_by_id(NOTIFICATION_ID)
        .await
        .unwrap();

    assert_eq!(status.status_code, 200);
    assert_eq!(status.notification_type.as_deref(), Some("sms"));
    assert_eq!(status.status.as_deref(), Some("delivered"));
}

#[tokio::test]
async fn next_status_page_follows_server_link_verbatim() {
    let server = MockServer::start().await;
    let next = format!(
        "{}/v2/notifications?template_type=email&older_than={NOTIFICATION_ID}",
        server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/v2/notifications"))
        .and(RawQuery(Some("template_type=email")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notifications": [{ "id": "newest" }],
            "links": { "current": "ignored", "next": next },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let older_query = "template_type=email&older_than=00000000-0000-0000-0000-000000000000";
    Mock::given(method("GET"))
        .and(path("/v2/notifications"))
        .and(RawQuery(Some(older_query)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notifications": [{ "id": "oldest" }],
            "links": {},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client
        .get_status(&StatusQueryOptions::new().with_template_type("email"))
        .await
        .unwrap();
    assert!(first.has_next());

    let second = client.next_status_page(&first).await.unwrap();
    assert_eq!(second.status_code, 200);
    assert_eq!(second.notifications[0].id.as_deref(), Some("oldest"));
    assert!(!second.has_next());
}

#[tokio::test]
async fn non_json_body_is_a_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/notifications/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_status_by_id("abc")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        NotifyError::Decoding {
            operation: Operation::Status,
            ..
        }
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = NotifyClient::builder(API_KEY)
        .host(format!("http://{addr}"))
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let err = client
        .send_email(&Email::new("test@test.com", TEMPLATE_ID))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        NotifyError::Network {
            operation: Operation::Email,
            ..
        }
    ));
    assert!(err.to_string().starts_with("error calling email endpoint"));
}

#[test]
fn short_api_key_is_rejected() {
    let err = NotifyClient::new("test").unwrap_err();
    assert!(matches!(err, NotifyError::InvalidCredential(_)));
}
