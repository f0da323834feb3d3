//! Client layer: issues requests through a transport and maps responses to domain records.

#[cfg(feature = "blocking")]
pub mod blocking;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    ApiKey, CodeDetail, GET_CODE_PATH, GET_NUMBER_PATH, GetCode, GetNumber, NumberDetail,
    RELEASE_NUMBER_PATH, Referral, ReleaseDetail, ReleaseNumber,
};

/// Base URL of the SuperSMS API.
pub const DEFAULT_BASE_URL: &str = "https://www.supersms.ml/api";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.get(url).query(&params).send().await?;
            let status = response.status().as_u16();
            if status != 200 {
                // Body is never inspected for failed calls.
                return Ok(HttpResponse {
                    status,
                    body: String::new(),
                });
            }
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SuperSmsClient`].
///
/// None of them poison the client: it stays usable for further calls.
pub enum SuperSmsError {
    /// HTTP client / transport failure (DNS, TLS, connection refused, timeouts).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The server answered with a status other than `200`.
    ///
    /// Displays as the bare status line, e.g. `404 Not Found`.
    #[error("{status_line}")]
    HttpStatus { status: u16, status_line: String },

    /// A `200` body could not be decoded as a JSON object.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// The configured base URL is not an absolute, hierarchical URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone)]
/// Builder for [`SuperSmsClient`].
///
/// Use this when you need a referral code, a different base URL, a timeout, or a
/// custom user-agent.
pub struct SuperSmsClientBuilder {
    api_key: ApiKey,
    referral: Option<Referral>,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SuperSmsClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            referral: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Attach a referral code to the client.
    pub fn referral(mut self, referral: impl Into<String>) -> Self {
        self.referral = Some(Referral::new(referral));
        self
    }

    /// Override the API base URL. Endpoint paths are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SuperSmsClient`].
    pub fn build(self) -> Result<SuperSmsClient, SuperSmsError> {
        let base_url = validate_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SuperSmsError::Transport(Box::new(err)))?;

        Ok(SuperSmsClient {
            api_key: self.api_key,
            referral: self.referral,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }

    /// Build a [`blocking::SuperSmsClient`].
    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> Result<blocking::SuperSmsClient, SuperSmsError> {
        blocking::SuperSmsClient::from_builder(self)
    }
}

#[derive(Clone)]
/// Async SuperSMS client.
///
/// Every call is one GET round trip against `<base_url>/<path>` with the
/// `secret_key` query parameter set from the configured [`ApiKey`]. No retries
/// are made; inspect the returned [`SuperSmsError`] to decide whether to retry.
pub struct SuperSmsClient {
    api_key: ApiKey,
    referral: Option<Referral>,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl SuperSmsClient {
    /// Create a client using the default base URL.
    ///
    /// The key is not validated. For more customization, use [`SuperSmsClient::builder`].
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            referral: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<ApiKey>) -> SuperSmsClientBuilder {
        SuperSmsClientBuilder::new(api_key)
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn referral(&self) -> Option<&Referral> {
        self.referral.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the verification code for a task (`getcode?taskid=...`).
    pub async fn get_code(&self, request: GetCode) -> Result<CodeDetail, SuperSmsError> {
        let params = crate::transport::encode_get_code_query(&request);
        let body = self.get(GET_CODE_PATH, params).await?;
        crate::transport::decode_code_detail_json(&body)
            .map_err(|err| SuperSmsError::Parse(Box::new(err)))
    }

    /// Release an activation number (`getcode?phone=...`).
    ///
    /// This goes to the `getcode` endpoint, the only one SuperSMS is known to
    /// accept a `phone` on.
    pub async fn release_number(
        &self,
        request: ReleaseNumber,
    ) -> Result<ReleaseDetail, SuperSmsError> {
        let params = crate::transport::encode_release_number_query(&request);
        let body = self.get(RELEASE_NUMBER_PATH, params).await?;
        crate::transport::decode_release_detail_json(&body)
            .map_err(|err| SuperSmsError::Parse(Box::new(err)))
    }

    /// Acquire an activation number (`getnumber?channel=...&country=...&pid=...`).
    pub async fn get_number(&self, request: GetNumber) -> Result<NumberDetail, SuperSmsError> {
        let params = crate::transport::encode_get_number_query(&request);
        let body = self.get(GET_NUMBER_PATH, params).await?;
        crate::transport::decode_number_detail_json(&body)
            .map_err(|err| SuperSmsError::Parse(Box::new(err)))
    }

    async fn get(
        &self,
        path: &'static str,
        mut params: Vec<(String, String)>,
    ) -> Result<String, SuperSmsError> {
        crate::transport::apply_secret_key(&mut params, &self.api_key);
        let url = endpoint_url(&self.base_url, path);

        tracing::debug!(endpoint = path, "sending SuperSMS request");
        let response = self.http.get(&url, params).await.map_err(|err| {
            tracing::debug!(endpoint = path, error = %err, "SuperSMS request failed");
            SuperSmsError::Transport(err)
        })?;

        into_body(path, response)
    }
}

fn validate_base_url(raw: &str) -> Result<String, SuperSmsError> {
    let parsed = url::Url::parse(raw).map_err(|err| SuperSmsError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason: err.to_string(),
    })?;
    if parsed.cannot_be_a_base() {
        return Err(SuperSmsError::InvalidBaseUrl {
            url: raw.to_owned(),
            reason: "URL cannot be used as a base".to_owned(),
        });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{base_url}/{path}")
}

fn into_body(path: &str, response: HttpResponse) -> Result<String, SuperSmsError> {
    tracing::debug!(
        endpoint = path,
        status = response.status,
        "received SuperSMS response"
    );
    if response.status != 200 {
        return Err(SuperSmsError::HttpStatus {
            status: response.status,
            status_line: status_line(response.status),
        });
    }
    Ok(response.body)
}

/// `404` -> `"404 Not Found"`; codes without a canonical reason render as the bare number.
fn status_line(status: u16) -> String {
    match reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
    {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}
