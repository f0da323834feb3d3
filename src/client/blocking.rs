//! Synchronous SuperSMS client built on `reqwest::blocking`.
//!
//! Each call blocks the current thread until the round trip completes. Do not
//! use this client from inside an async runtime; use [`super::SuperSmsClient`]
//! there instead.

use std::sync::Arc;

use super::{
    BoxError, HttpResponse, SuperSmsClientBuilder, SuperSmsError, endpoint_url, into_body,
    validate_base_url,
};
use crate::domain::{
    ApiKey, CodeDetail, GET_CODE_PATH, GET_NUMBER_PATH, GetCode, GetNumber, NumberDetail,
    RELEASE_NUMBER_PATH, Referral, ReleaseDetail, ReleaseNumber,
};

trait BlockingHttpTransport: Send + Sync {
    fn get(&self, url: &str, params: Vec<(String, String)>) -> Result<HttpResponse, BoxError>;
}

#[derive(Debug, Clone)]
struct ReqwestBlockingTransport {
    client: reqwest::blocking::Client,
}

impl BlockingHttpTransport for ReqwestBlockingTransport {
    fn get(&self, url: &str, params: Vec<(String, String)>) -> Result<HttpResponse, BoxError> {
        let response = self.client.get(url).query(&params).send()?;
        let status = response.status().as_u16();
        if status != 200 {
            return Ok(HttpResponse {
                status,
                body: String::new(),
            });
        }
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Clone)]
/// Blocking counterpart of [`super::SuperSmsClient`] with the same operations and errors.
pub struct SuperSmsClient {
    api_key: ApiKey,
    referral: Option<Referral>,
    base_url: String,
    http: Arc<dyn BlockingHttpTransport>,
}

impl SuperSmsClient {
    /// Create a client using the default base URL and no request timeout.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self, SuperSmsError> {
        SuperSmsClientBuilder::new(api_key).build_blocking()
    }

    pub(super) fn from_builder(builder: SuperSmsClientBuilder) -> Result<Self, SuperSmsError> {
        let base_url = validate_base_url(&builder.base_url)?;

        // reqwest::blocking defaults to a 30s timeout; only apply one when asked.
        let mut http = reqwest::blocking::Client::builder().timeout(builder.timeout);
        if let Some(user_agent) = builder.user_agent {
            http = http.user_agent(user_agent);
        }
        let client = http
            .build()
            .map_err(|err| SuperSmsError::Transport(Box::new(err)))?;

        Ok(Self {
            api_key: builder.api_key,
            referral: builder.referral,
            base_url,
            http: Arc::new(ReqwestBlockingTransport { client }),
        })
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
    pub fn get_code(&self, request: GetCode) -> Result<CodeDetail, SuperSmsError> {
        let params = crate::transport::encode_get_code_query(&request);
        let body = self.get(GET_CODE_PATH, params)?;
        crate::transport::decode_code_detail_json(&body)
            .map_err(|err| SuperSmsError::Parse(Box::new(err)))
    }

    /// Release an activation number (`getcode?phone=...`).
    pub fn release_number(&self, request: ReleaseNumber) -> Result<ReleaseDetail, SuperSmsError> {
        let params = crate::transport::encode_release_number_query(&request);
        let body = self.get(RELEASE_NUMBER_PATH, params)?;
        crate::transport::decode_release_detail_json(&body)
            .map_err(|err| SuperSmsError::Parse(Box::new(err)))
    }

    /// Acquire an activation number (`getnumber?channel=...&country=...&pid=...`).
    pub fn get_number(&self, request: GetNumber) -> Result<NumberDetail, SuperSmsError> {
        let params = crate::transport::encode_get_number_query(&request);
        let body = self.get(GET_NUMBER_PATH, params)?;
        crate::transport::decode_number_detail_json(&body)
            .map_err(|err| SuperSmsError::Parse(Box::new(err)))
    }

    fn get(
        &self,
        path: &'static str,
        mut params: Vec<(String, String)>,
    ) -> Result<String, SuperSmsError> {
        crate::transport::apply_secret_key(&mut params, &self.api_key);
        let url = endpoint_url(&self.base_url, path);

        tracing::debug!(endpoint = path, "sending SuperSMS request");
        let response = self.http.get(&url, params).map_err(|err| {
            tracing::debug!(endpoint = path, error = %err, "SuperSMS request failed");
            SuperSmsError::Transport(err)
        })?;

        into_body(path, response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_url: Option<String>,
        last_params: Vec<(String, String)>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    last_params: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_request(&self) -> (Option<String>, Vec<(String, String)>) {
            let state = self.state.lock().unwrap();
            (state.last_url.clone(), state.last_params.clone())
        }
    }

    impl BlockingHttpTransport for FakeTransport {
        fn get(&self, url: &str, params: Vec<(String, String)>) -> Result<HttpResponse, BoxError> {
            let mut state = self.state.lock().unwrap();
            state.last_url = Some(url.to_owned());
            state.last_params = params;
            Ok(HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
            })
        }
    }

    fn make_client(api_key: &str, transport: FakeTransport) -> SuperSmsClient {
        SuperSmsClient {
            api_key: ApiKey::new(api_key),
            referral: None,
            base_url: "https://example.invalid/api".to_owned(),
            http: Arc::new(transport),
        }
    }

    #[test]
    fn get_code_decodes_body_and_sends_key() {
        let transport = FakeTransport::new(200, r#"{"status":"ok","code":"1234"}"#);
        let client = make_client("ABC123", transport.clone());

        let detail = client.get_code(GetCode::new(42)).unwrap();
        assert_eq!(detail.code.as_deref(), Some("1234"));

        let (url, params) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/api/getcode"));
        assert_eq!(
            params,
            vec![
                ("taskid".to_owned(), "42".to_owned()),
                ("secret_key".to_owned(), "ABC123".to_owned()),
            ]
        );
    }

    #[test]
    fn get_code_maps_404_to_status_line() {
        let client = make_client("ABC123", FakeTransport::new(404, ""));
        let err = client.get_code(GetCode::new(42)).unwrap_err();
        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[test]
    fn release_number_uses_code_endpoint() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client("ABC123", transport.clone());

        client
            .release_number(ReleaseNumber::new("79251234567"))
            .unwrap();
        let (url, params) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/api/getcode"));
        assert!(params.contains(&("phone".to_owned(), "79251234567".to_owned())));
    }

    #[test]
    fn get_number_maps_malformed_json_to_parse_error() {
        let client = make_client("ABC123", FakeTransport::new(200, "<html>"));
        let err = client.get_number(GetNumber::default()).unwrap_err();
        assert!(matches!(err, SuperSmsError::Parse(_)));
    }

    #[test]
    fn builder_produces_blocking_client() {
        let client = SuperSmsClientBuilder::new("key")
            .referral("friend")
            .base_url("https://example.invalid/api")
            .build_blocking()
            .unwrap();
        assert_eq!(client.base_url(), "https://example.invalid/api");
        assert_eq!(client.referral().map(Referral::as_str), Some("friend"));
    }
}
