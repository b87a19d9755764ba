//! Tests for `WebhookSender` and `SlackWebhook`.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use url::form_urlencoded;

use super::{
    HttpClient, HttpError, HttpRequest, HttpResponse, SlackWebhook, WebhookError, WebhookSender,
};

/// Mock HTTP client that returns a configurable sequence of responses.
#[derive(Debug)]
struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn responding(status: http::StatusCode, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(status, body.as_bytes().to_vec()))])
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

impl HttpClient for &MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

fn test_url() -> url::Url {
    url::Url::parse("https://hooks.slack.com/services/T/B/X").unwrap()
}

/// Decodes the `payload` field from a form-encoded body.
fn form_payload(body: &[u8]) -> Option<String> {
    form_urlencoded::parse(body)
        .find(|(key, _)| key == "payload")
        .map(|(_, value)| value.into_owned())
}

mod request_shape {
    use super::*;

    #[tokio::test]
    async fn posts_to_webhook_url() {
        let client = MockClient::responding(http::StatusCode::OK, "ok");
        let webhook = SlackWebhook::new(&client, test_url());

        webhook.send(r#"{"text":"Build OK"}"#).await.unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::POST);
        assert_eq!(requests[0].url, test_url());
    }

    #[tokio::test]
    async fn body_is_form_encoded_payload_field() {
        let client = MockClient::responding(http::StatusCode::OK, "ok");
        let webhook = SlackWebhook::new(&client, test_url());
        let json = r#"{"text":"Build & deploy: 100% done?"}"#;

        webhook.send(json).await.unwrap();

        let body = client.captured_requests()[0].body.clone().unwrap();
        let raw = String::from_utf8(body.clone()).unwrap();
        assert!(raw.starts_with("payload="));
        assert!(!raw.contains('&'), "payload must be the only field: {raw}");
        assert_eq!(form_payload(&body).as_deref(), Some(json));
    }

    #[tokio::test]
    async fn sets_form_content_type() {
        let client = MockClient::responding(http::StatusCode::OK, "ok");
        let webhook = SlackWebhook::new(&client, test_url());

        webhook.send("{}").await.unwrap();

        let request = &client.captured_requests()[0];
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
    }
}

mod responses {
    use super::*;

    #[tokio::test]
    async fn ok_status_returns_body() {
        let client = MockClient::responding(http::StatusCode::OK, "ok");
        let webhook = SlackWebhook::new(&client, test_url());

        let body = webhook.send("{}").await.unwrap();

        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn server_error_is_reported_with_body_and_not_resent() {
        let client =
            MockClient::responding(http::StatusCode::INTERNAL_SERVER_ERROR, "invalid_payload");
        let webhook = SlackWebhook::new(&client, test_url());

        let result = webhook.send("{}").await;

        match result {
            Err(WebhookError::NonSuccessStatus { status, body }) => {
                assert_eq!(status, http::StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body.as_deref(), Some("invalid_payload"));
            }
            other => panic!("Expected NonSuccessStatus, got {other:?}"),
        }
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn other_success_statuses_are_failures() {
        let client = MockClient::responding(http::StatusCode::NO_CONTENT, "");
        let webhook = SlackWebhook::new(&client, test_url());

        let result = webhook.send("{}").await;

        assert!(matches!(
            result,
            Err(WebhookError::NonSuccessStatus { status, .. }) if status == http::StatusCode::NO_CONTENT
        ));
    }

    #[tokio::test]
    async fn error_message_surfaces_response_body() {
        let client = MockClient::responding(http::StatusCode::NOT_FOUND, "no_service");
        let webhook = SlackWebhook::new(&client, test_url());

        let err = webhook.send("{}").await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("no_service"));
    }

    #[tokio::test]
    async fn transport_error_is_reported_once() {
        let client = MockClient::new(vec![Err(HttpError::Timeout)]);
        let webhook = SlackWebhook::new(&client, test_url());

        let result = webhook.send("{}").await;

        assert!(matches!(result, Err(WebhookError::Http(HttpError::Timeout))));
        assert_eq!(client.calls(), 1);
    }
}
