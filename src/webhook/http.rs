//! Wire-level request and reply of an incoming webhook call.
//!
//! Slack's incoming webhooks take a form submission and answer with a short
//! plain-text body: `ok` when the message was accepted, an error code such
//! as `invalid_payload` or `no_service` when it was not.

use http::header::{CONTENT_TYPE, HeaderValue};
use url::form_urlencoded;

use super::HttpError;

/// Media type of a URL-encoded form body.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A request to a webhook endpoint.
///
/// Built with [`HttpRequest::form`] for deliveries. The fields are public so
/// an [`HttpClient`] can take the request apart.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method, always POST for webhook deliveries
    pub method: http::Method,
    /// Webhook URL
    pub url: url::Url,
    /// Headers to send
    pub headers: http::HeaderMap,
    /// Encoded body, if any
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a POST to `url` without headers or body.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self {
            method: http::Method::POST,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a form submission to `url`.
    ///
    /// `fields` are URL-encoded in order into the body and the Content-Type
    /// is set to `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn form<'a>(url: url::Url, fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in fields {
            serializer.append_pair(name, value);
        }

        let mut request = Self::post(url);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        request.body = Some(serializer.finish().into_bytes());
        request
    }
}

/// The endpoint's reply, with the body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from its status and body.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true only for `200 OK`, the one status Slack uses for an accepted message.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == http::StatusCode::OK
    }

    /// Returns the body as text, or `None` if it is not valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Transport that performs one request and hands back the reply.
///
/// Implementations must not retry: a webhook delivery is a single attempt.
pub trait HttpClient: Send + Sync {
    /// Sends `req` and returns the reply, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no reply was received:
    /// - the connection failed ([`HttpError::Connection`])
    /// - the timeout elapsed ([`HttpError::Timeout`])
    /// - the request could not be built from the URL ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
