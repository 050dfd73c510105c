//! HTTP client for the Vimeo API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{ApiError, Error};
use crate::query::{apply_options, CallOption};
use crate::types::PaginatedResponse;
use crate::upload::Uploader;

/// Media type advertising the API version, sent on every request.
const MEDIA_TYPE_VERSION: &str = "application/vnd.vimeo.*+json;version=3.2";

const DEFAULT_BASE_URL: &str = "https://api.vimeo.com/";

const DEFAULT_USER_AGENT: &str = concat!("vimeo_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Vimeo API.
///
/// All configuration is fixed at construction time and never mutated
/// afterwards, so a client can be shared freely across tasks. Each call
/// performs exactly one round trip through the injected `reqwest::Client`.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.vimeo.com/`.
    base_url: String,
    /// OAuth2 bearer token. Sent as `Authorization: Bearer ...` when non-empty.
    token: String,
    user_agent: String,
    http: reqwest::Client,
    uploader: Option<Arc<dyn Uploader>>,
}

impl Client {
    /// Creates a new client pointing at the production Vimeo API.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            token: token.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http: reqwest::Client::new(),
            uploader: None,
        }
    }

    /// Replaces the user agent. An empty string suppresses the header entirely.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Replaces the HTTP transport with a caller-configured one (timeouts,
    /// proxies, connection pool).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Installs the uploader that [`upload_video`](Client::upload_video)
    /// delegates file transfers to.
    pub fn with_uploader(mut self, uploader: Arc<dyn Uploader>) -> Self {
        self.uploader = Some(uploader);
        self
    }

    pub(crate) fn uploader(&self) -> Option<&Arc<dyn Uploader>> {
        self.uploader.as_ref()
    }

    /// Builds a ready-to-execute request: resolves `path` against the base
    /// URL, serializes `body` as JSON when present, and sets the fixed
    /// header set. No network I/O happens here.
    pub(crate) fn build_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = Url::parse(&self.base_url)?.join(path)?;
        let mut request = Request::new(method, url);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(Error::Serialization)?;
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(bytes.into());
        }
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE_VERSION));
        if !self.user_agent.is_empty() {
            request
                .headers_mut()
                .insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        }
        if !self.token.is_empty() {
            request.headers_mut().insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", self.token))?,
            );
        }
        Ok(request)
    }

    pub(crate) fn build_bodiless(&self, method: Method, path: &str) -> Result<Request, Error> {
        self.build_request(method, path, None::<&()>)
    }

    /// Executes the request once, reads the whole body so the connection can
    /// be reused, and classifies the status before handing the body back.
    async fn execute(&self, request: Request) -> Result<(Response, Vec<u8>), Error> {
        let method = request.method().clone();
        let url = request.url().clone();
        let response = self.http.execute(request).await.map_err(|e| {
            tracing::error!("request to {} failed: {}", sanitize_url(&url), e);
            Error::Transport(e)
        })?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(Error::Transport)?;
        check_response(&method, &url, status, &headers, &body)?;
        Ok((Response::new(status, headers), body.to_vec()))
    }

    /// Executes the request and decodes the body as JSON into `T`. An empty
    /// body is not an error: the target's default value is returned, since
    /// the server legitimately answers 204-style with no content.
    pub(crate) async fn do_json<T>(&self, request: Request) -> Result<(T, Response), Error>
    where
        T: DeserializeOwned + Default,
    {
        let (response, body) = self.execute(request).await?;
        if body.is_empty() {
            return Ok((T::default(), response));
        }
        let value = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("failed to decode response body: {}", e);
            Error::Decode(e)
        })?;
        Ok((value, response))
    }

    /// Executes the request and returns the body verbatim, with no JSON
    /// parsing. For non-JSON payloads such as caption files or upload ticket
    /// redirect bodies.
    pub(crate) async fn do_raw(&self, request: Request) -> Result<(Vec<u8>, Response), Error> {
        self.execute(request).await.map(|(response, body)| (body, response))
    }

    /// Executes the request and discards the body after classification.
    pub(crate) async fn do_discard(&self, request: Request) -> Result<Response, Error> {
        let (response, _) = self.execute(request).await?;
        Ok(response)
    }

    pub(crate) async fn get_list<T>(
        &self,
        path: &str,
        options: &[CallOption],
    ) -> Result<(Vec<T>, Response), Error>
    where
        T: DeserializeOwned,
    {
        let path = apply_options(path, options);
        let request = self.build_bodiless(Method::GET, &path)?;
        let (list, mut response): (PaginatedResponse<T>, Response) =
            self.do_json(request).await?;
        response.set_paging(&list);
        Ok((list.data, response))
    }

    pub(crate) async fn get_object<T>(
        &self,
        path: &str,
        options: &[CallOption],
    ) -> Result<(T, Response), Error>
    where
        T: DeserializeOwned + Default,
    {
        let path = apply_options(path, options);
        let request = self.build_bodiless(Method::GET, &path)?;
        self.do_json(request).await
    }

    pub(crate) async fn post_object<B, T>(&self, path: &str, body: &B) -> Result<(T, Response), Error>
    where
        B: Serialize,
        T: DeserializeOwned + Default,
    {
        let request = self.build_request(Method::POST, path, Some(body))?;
        self.do_json(request).await
    }

    pub(crate) async fn patch_object<B, T>(&self, path: &str, body: &B) -> Result<(T, Response), Error>
    where
        B: Serialize,
        T: DeserializeOwned + Default,
    {
        let request = self.build_request(Method::PATCH, path, Some(body))?;
        self.do_json(request).await
    }

    pub(crate) async fn put_bodiless(&self, path: &str) -> Result<Response, Error> {
        let request = self.build_bodiless(Method::PUT, path)?;
        self.do_discard(request).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Response, Error> {
        let request = self.build_bodiless(Method::DELETE, path)?;
        self.do_discard(request).await
    }

    /// Fetches a non-JSON payload as raw bytes.
    pub async fn get_raw(&self, path: &str) -> Result<(Vec<u8>, Response), Error> {
        let request = self.build_bodiless(Method::GET, path)?;
        self.do_raw(request).await
    }
}

/// Wrapper around the transport-level outcome of a call, plus pagination
/// metadata extracted from list envelopes. Single-item responses leave the
/// pagination fields at their zero values.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Current page of a list response (1-indexed), 0 when absent.
    pub page: i64,
    pub total_pages: i64,
    pub next_page: String,
    pub prev_page: String,
    pub first_page: String,
    pub last_page: String,
}

impl Response {
    fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            status,
            headers,
            page: 0,
            total_pages: 0,
            next_page: String::new(),
            prev_page: String::new(),
            first_page: String::new(),
            last_page: String::new(),
        }
    }

    /// Copies pagination fields out of a decoded list envelope. Idempotent;
    /// fields the server omitted stay at their zero values.
    pub(crate) fn set_paging<T>(&mut self, list: &PaginatedResponse<T>) {
        self.page = list.page;
        self.total_pages = list.total;
        self.next_page = list.paging.next.clone().unwrap_or_default();
        self.prev_page = list.paging.previous.clone().unwrap_or_default();
        self.first_page = list.paging.first.clone().unwrap_or_default();
        self.last_page = list.paging.last.clone().unwrap_or_default();
    }
}

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: String,
}

/// Classifies a response by status: 200-299 is success, as is 308, which the
/// resumable upload flow uses to signal that a ticket is still open.
/// Everything else becomes an [`ApiError`] carrying whatever message the
/// server supplied.
pub(crate) fn check_response(
    method: &Method,
    url: &Url,
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(), Error> {
    if status.is_success() || status == StatusCode::PERMANENT_REDIRECT {
        return Ok(());
    }
    let message = serde_json::from_slice::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error)
        .unwrap_or_default();
    tracing::error!(
        "{} {} answered {}: {}",
        method,
        sanitize_url(url),
        status,
        message
    );
    Err(Error::Api(ApiError {
        method: method.clone(),
        url: sanitize_url(url),
        status,
        headers: headers.clone(),
        message,
    }))
}

/// Redacts the `client_secret` query parameter so the URL is safe to log or
/// embed in error strings. All other parameters pass through untouched.
pub(crate) fn sanitize_url(url: &Url) -> String {
    if !url.query_pairs().any(|(key, _)| key == "client_secret") {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            if key == "client_secret" {
                (key.into_owned(), "REDACTED".to_string())
            } else {
                (key.into_owned(), value.into_owned())
            }
        })
        .collect();
    let mut sanitized = url.clone();
    sanitized.query_pairs_mut().clear().extend_pairs(pairs);
    sanitized.to_string()
}
