use reqwest::{Method, Url, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;

use crate::config::Config;
use crate::models::error::AppError;

/// Value of cookie `name` in a `document.cookie` string, percent-decoded.
pub fn csrf_token_from(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|value| value.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

/// Reads the CSRF token from the page cookies.
pub fn csrf_token() -> Option<String> {
    let cookies = crate::dom::document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    csrf_token_from(&cookies, Config::CSRF_COOKIE)
}

/// JSON requests against the page's own origin.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    csrf_token: Option<String>,
}

impl ApiClient {
    /// Creates a client resolving relative URLs against `base_url`.
    pub fn new(base_url: &str, csrf_token: Option<String>) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid base URL {base_url}: {e}")))?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            csrf_token,
        })
    }

    /// Creates a client for the current page, carrying its CSRF cookie.
    pub fn from_page() -> Result<Self, AppError> {
        let href = web_sys::window()
            .ok_or_else(|| AppError::ConfigError("no window".to_string()))?
            .location()
            .href()
            .map_err(|e| AppError::ConfigError(format!("no page location: {e:?}")))?;
        Self::new(&href, csrf_token())
    }

    pub fn resolve(&self, url: &str) -> Result<Url, AppError> {
        resolve_against(&self.base_url, url)
    }

    /// Sends one JSON request and decodes the JSON response.
    pub async fn request<B, R>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<R, AppError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let result = self.send(method, url, body).await;
        if let Err(e) = &result {
            log::error!("Request failed: {e}");
        }
        result
    }

    async fn send<B, R>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<R, AppError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self
            .http
            .request(method, self.resolve(url)?)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = &self.csrf_token {
            request = request.header(Config::CSRF_HEADER, token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ApiError(format!("Network error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }
}

/// Resolves `url` the way the browser would from a page at `base`.
pub fn resolve_against(base: &Url, url: &str) -> Result<Url, AppError> {
    base.join(url)
        .map_err(|e| AppError::ConfigError(format!("Invalid URL {url}: {e}")))
}

/// Creates an error based on HTTP status code.
pub fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
        404 => AppError::NotFound(format!("Resource not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}
