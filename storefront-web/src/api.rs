use once_cell::unsync::OnceCell;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::config::{CSRF_COOKIE_NAME, CSRF_HEADER, endpoints};
use shared::errors::{ClientError, ClientResult};
use shared::models::{
    ApiErrorResponse, AuthResponse, DeleteProductRequest, DeleteProductResponse, LoginRequest,
    ProfileResponse, RegisterRequest, UsernameAvailability,
};
use shared::session::ProbeOutcome;

use crate::browser;
use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<StorefrontClient> = OnceCell::new();
}

/// Lightweight API client for the storefront backend.
#[derive(Clone, Debug)]
pub struct StorefrontClient {
    base_url: String,
    client: Client,
}

impl StorefrontClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Client for the configured origin, falling back to the page's own.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let configured = FrontendConfig::new().api_base_url;
                let base_url = if configured.is_empty() {
                    browser::origin().unwrap_or_default()
                } else {
                    configured
                };
                Self::new(&base_url)
            })
            .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// CSRF token from the `csrftoken` cookie.
    pub fn csrf_token() -> Option<String> {
        browser::read_cookie(CSRF_COOKIE_NAME)
    }

    fn apply_token(request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header(AUTHORIZATION, authorization_value(token))
    }

    /// Attach `X-CSRFToken`, preferring `explicit` over the cookie.
    fn apply_csrf(request: RequestBuilder, explicit: Option<&str>) -> RequestBuilder {
        let token = explicit
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .or_else(Self::csrf_token);
        match token {
            Some(token) => request.header(CSRF_HEADER, token),
            None => {
                log::warn!("no {CSRF_COOKIE_NAME} cookie; sending request without CSRF header");
                request
            }
        }
    }

    async fn send(request: RequestBuilder) -> ClientResult<Response> {
        request
            .send()
            .await
            .map_err(|err| ClientError::network(err.to_string()))
    }

    /// Decode a success body, or turn a failed response into a [`ClientError`].
    async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::network(err.to_string()))?;
        if !status.is_success() {
            return Err(error_for_status(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|err| ClientError::decode(err.to_string()))
    }

    /// Fetch the profile of the token's owner.
    pub async fn get_profile(&self, token: &str) -> ClientResult<ProfileResponse> {
        let request = Self::apply_token(self.client.get(self.api_url(endpoints::PROFILE)), token);
        Self::read_json(Self::send(request).await?).await
    }

    /// Invalidate the token on the server. The response body is ignored.
    pub async fn logout(&self, token: &str) -> ClientResult<()> {
        let request = Self::apply_token(self.client.post(self.api_url(endpoints::LOGOUT)), token);
        let response = Self::send(request).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Http {
                status: response.status().as_u16(),
                message: "logout rejected".to_string(),
            })
        }
    }

    /// Create an account.
    pub async fn register(
        &self,
        payload: &RegisterRequest,
        csrf_token: Option<&str>,
    ) -> ClientResult<AuthResponse> {
        let request = Self::apply_csrf(
            self.client.post(self.api_url(endpoints::REGISTER)),
            csrf_token,
        );
        Self::read_json(Self::send(request.json(payload)).await?).await
    }

    /// Authenticate with username/password credentials.
    pub async fn login(
        &self,
        payload: &LoginRequest,
        csrf_token: Option<&str>,
    ) -> ClientResult<AuthResponse> {
        let request =
            Self::apply_csrf(self.client.post(self.api_url(endpoints::LOGIN)), csrf_token);
        Self::read_json(Self::send(request.json(payload)).await?).await
    }

    /// Ask whether a username is still free.
    pub async fn check_username(&self, username: &str) -> ClientResult<UsernameAvailability> {
        let request = self
            .client
            .get(self.api_url(endpoints::CHECK_USERNAME))
            .query(&[("username", username)]);
        Self::read_json(Self::send(request).await?).await
    }

    /// Delete a product and return the confirmation message.
    ///
    /// A response counts as success only when its status is ok and the body
    /// does not report `success: false` or `ok: false`.
    pub async fn delete_product(&self, id: u64) -> ClientResult<String> {
        let request = Self::apply_csrf(
            self.client.post(self.api_url(endpoints::DELETE_PRODUCT)),
            None,
        )
        .json(&DeleteProductRequest { id });
        let response = Self::send(request).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::network(err.to_string()))?;
        delete_outcome(status.as_u16(), status.is_success(), &body)
    }
}

/// `Authorization` header value for a session token.
pub fn authorization_value(token: &str) -> String {
    format!("Token {token}")
}

/// Map a non-success response to the matching [`ClientError`].
pub fn error_for_status(status: u16, body: &str) -> ClientError {
    if matches!(status, 401 | 403) {
        return ClientError::Unauthorized { status };
    }
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(ApiErrorResponse { message, errors }) if message.is_some() || !errors.is_empty() => {
            ClientError::Validation { errors, message }
        }
        _ => ClientError::Http {
            status,
            message: body.trim().to_string(),
        },
    }
}

/// Interpret a delete response. An ok status only confirms the deletion when
/// the body is a JSON delete response.
pub fn delete_outcome(status: u16, status_ok: bool, body: &str) -> ClientResult<String> {
    let parsed = match serde_json::from_str::<DeleteProductResponse>(body) {
        Ok(parsed) => parsed,
        Err(err) if status_ok => {
            return Err(ClientError::decode(format!(
                "delete response is not JSON: {err}"
            )));
        }
        Err(_) => DeleteProductResponse::default(),
    };
    parsed
        .into_outcome(status_ok)
        .map_err(|message| ClientError::Http { status, message })
}

/// Classify the result of a profile request for [`shared::session::Session::resolve_probe`].
pub fn probe_outcome(result: ClientResult<ProfileResponse>) -> ProbeOutcome {
    match result {
        Ok(ProfileResponse { user }) => ProbeOutcome::Accepted {
            username: user.username,
        },
        Err(err) => match err.status() {
            Some(status) => ProbeOutcome::Rejected { status },
            None => match err {
                ClientError::Validation { .. } => ProbeOutcome::Rejected { status: 400 },
                other => ProbeOutcome::NetworkFailure {
                    message: other.to_string(),
                },
            },
        },
    }
}
