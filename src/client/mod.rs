//! Client layer: configuration, authenticated requests and the public operations.

mod error;
mod http;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::Stream;
use serde::Serialize;

use crate::domain::{
    ApiKey, BulkEmail, BulkEmailResponse, Email, Response, Sms, StatusQueryOptions,
    StatusResponse, StatusResponses,
};
use crate::transport::{self, ApiRecord};

pub use error::{NotifyError, Operation};
use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Production GC Notify API host.
pub const DEFAULT_HOST: &str = "https://api.notification.canada.ca";

/// Timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_USER_AGENT: &str = concat!("gcnotify-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
/// Builder for [`NotifyClient`].
///
/// Use this when you need to target another host (staging, a local mock
/// server) or change the timeout or user-agent.
pub struct NotifyClientBuilder {
    api_key: String,
    host: String,
    timeout: Duration,
    user_agent: String,
}

impl NotifyClientBuilder {
    /// Create a builder with the production host and a 10 second timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the API host (scheme + authority, e.g. `http://127.0.0.1:8080`).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_owned();
        self
    }

    /// Set the timeout applied to each request as a whole.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the API key and build a [`NotifyClient`].
    pub fn build(self) -> Result<NotifyClient, NotifyError> {
        let api_key = ApiKey::new(self.api_key)?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(NotifyError::HttpClient)?;

        Ok(NotifyClient {
            api_key,
            host: self.host,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level GC Notify client.
///
/// Every operation is a single request with no retries. A response with a
/// non-2xx status is returned as a record with `status_code` and `errors`
/// set; only failures to get a usable response at all are [`NotifyError`]s.
///
/// The client is cheap to clone and safe to share between tasks.
pub struct NotifyClient {
    api_key: ApiKey,
    host: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for NotifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifyClient")
            .field("api_key", &self.api_key)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl NotifyClient {
    /// Create a client for the production host.
    ///
    /// Fails with [`NotifyError::InvalidCredential`] when the key is shorter
    /// than [`ApiKey::MIN_LEN`].
    pub fn new(api_key: impl Into<String>) -> Result<Self, NotifyError> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<String>) -> NotifyClientBuilder {
        NotifyClientBuilder::new(api_key)
    }

    /// Host every request is sent to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Send one email from a template.
    pub async fn send_email(&self, email: &Email) -> Result<Response, NotifyError> {
        self.send(Operation::Email, transport::EMAIL_PATH, email).await
    }

    /// Send one SMS from a template.
    pub async fn send_sms(&self, sms: &Sms) -> Result<Response, NotifyError> {
        self.send(Operation::Sms, transport::SMS_PATH, sms).await
    }

    /// Create a bulk email job.
    pub async fn send_bulk_email(
        &self,
        bulk: &BulkEmail,
    ) -> Result<BulkEmailResponse, NotifyError> {
        self.send(Operation::BulkEmail, transport::BULK_PATH, bulk).await
    }

    /// List notification statuses matching `options`, newest first.
    pub async fn get_status(
        &self,
        options: &StatusQueryOptions,
    ) -> Result<StatusResponses, NotifyError> {
        self.fetch(&transport::encode_status_query_path(options)).await
    }

    /// Status of a single notification. `id` is not validated.
    pub async fn get_status_by_id(&self, id: &str) -> Result<StatusResponse, NotifyError> {
        self.fetch(&transport::encode_status_by_id_path(id)).await
    }

    /// Follow the `next` link of `page`.
    ///
    /// The link is requested as the server returned it, against this client's
    /// host. Fails with [`NotifyError::NoNextPage`] on the last page.
    pub async fn next_status_page(
        &self,
        page: &StatusResponses,
    ) -> Result<StatusResponses, NotifyError> {
        let next = page.next_link().ok_or(NotifyError::NoNextPage)?;
        self.fetch(&transport::next_page_path(&self.host, next)).await
    }

    /// Stream every page for `options`, following `next` links.
    ///
    /// The stream ends after the last page or right after the first error.
    pub fn status_pages(
        &self,
        options: &StatusQueryOptions,
    ) -> impl Stream<Item = Result<StatusResponses, NotifyError>> + '_ {
        let start = PageCursor::Path(transport::encode_status_query_path(options));
        futures::stream::unfold(start, move |cursor| async move {
            let PageCursor::Path(path) = cursor else {
                return None;
            };

            let page = self.fetch::<StatusResponses>(&path).await;
            let cursor = match &page {
                Ok(page) => page
                    .next_link()
                    .map(|next| PageCursor::Path(transport::next_page_path(&self.host, next)))
                    .unwrap_or(PageCursor::Done),
                Err(_) => PageCursor::Done,
            };
            Some((page, cursor))
        })
    }

    async fn send<B, R>(
        &self,
        operation: Operation,
        path: &str,
        body: &B,
    ) -> Result<R, NotifyError>
    where
        B: Serialize,
        R: ApiRecord,
    {
        let body = transport::encode_json_body(body)
            .map_err(|source| NotifyError::Encoding { operation, source })?;

        let response = self.post(operation, path, body).await?;

        transport::decode_response(response.status, &response.body)
            .map_err(|source| NotifyError::Decoding { operation, source })
    }

    async fn fetch<R: ApiRecord>(&self, path: &str) -> Result<R, NotifyError> {
        let operation = Operation::Status;
        let response = self.get(operation, path).await?;

        transport::decode_response(response.status, &response.body)
            .map_err(|source| NotifyError::Decoding { operation, source })
    }

    async fn get(&self, operation: Operation, path: &str) -> Result<HttpResponse, NotifyError> {
        let request = self.request(HttpMethod::Get, path, None);
        self.execute(operation, request).await
    }

    async fn post(
        &self,
        operation: Operation,
        path: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, NotifyError> {
        let mut request = self.request(HttpMethod::Post, path, Some(body));
        request
            .headers
            .push(("Content-Type", "application/json".to_owned()));
        self.execute(operation, request).await
    }

    fn request(&self, method: HttpMethod, path: &str, body: Option<Vec<u8>>) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{}", self.host, path),
            headers: vec![("Authorization", self.api_key.authorization_header())],
            body,
        }
    }

    async fn execute(
        &self,
        operation: Operation,
        request: HttpRequest,
    ) -> Result<HttpResponse, NotifyError> {
        tracing::debug!(
            %operation,
            method = request.method.as_str(),
            url = %request.url,
            "sending notify request"
        );

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| NotifyError::Network { operation, source })?;

        tracing::debug!(%operation, status = response.status, "received notify response");
        Ok(response)
    }
}

enum PageCursor {
    Path(String),
    Done,
}
