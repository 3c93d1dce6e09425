use std::cell::RefCell;

use shared_types::{ApiConfig, LoginRequest, LoginResponse};

use crate::errors::ApiError;

// ── Auth endpoint ───────────────────────────────────────────────────

/// The login call as the session layer sees it.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Submit credentials and resolve the backend's response envelope,
    /// from whichever HTTP status carried it.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

/// `AuthApi` over HTTP. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct HttpAuthApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("auth/login"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        // The backend reports some rejections through error statuses with
        // the same envelope in the body; the envelope wins when present.
        match serde_json::from_str::<LoginResponse>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(e) if (200..300).contains(&status) => Err(ApiError::body(e.to_string())),
            Err(_) => Err(ApiError::Http(status)),
        }
    }
}

// ── Bearer transport ────────────────────────────────────────────────

type UnauthorizedHook = Box<dyn Fn()>;

/// HTTP client for the REST endpoints that sit behind the session.
///
/// Attaches the current bearer token to every request and reports an
/// HTTP 401 through `on_unauthorized` before the caller sees the
/// error, so the session is dropped eagerly no matter which screen
/// triggered the call. Navigation stays out of this layer; guards
/// react to the state change.
pub struct ApiClient {
    config: ApiConfig,
    client: reqwest::Client,
    token: RefCell<Option<String>>,
    on_unauthorized: UnauthorizedHook,
}

impl ApiClient {
    pub fn new(config: ApiConfig, on_unauthorized: UnauthorizedHook) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            token: RefCell::new(None),
            on_unauthorized,
        }
    }

    /// Replace the bearer token attached to subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// GET `path` and parse the JSON body.
    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = self.client.get(self.config.endpoint(path));
        self.send(request).await
    }

    /// POST `body` as JSON to `path` and parse the JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let request = self.client.post(self.config.endpoint(path)).json(body);
        self.send(request).await
    }

    async fn send<T>(&self, mut request: reqwest::RequestBuilder) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let status = response.status();

        if status.as_u16() == 401 {
            tracing::warn!("backend returned 401, dropping local session");
            self.set_token(None);
            (self.on_unauthorized)();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Http(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::body(e.to_string()))
    }
}
