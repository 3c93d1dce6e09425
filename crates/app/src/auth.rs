use dioxus::prelude::*;
use session::api::{ApiClient, AuthApi, HttpAuthApi};
use session::manager::{AuthPhase, SessionManager};
use session::store::SessionStore;
use session::LoginError;
use shared_types::{ApiConfig, LoginRequest, Role, SessionUser};

/// Global authentication state.
///
/// The session manager lives in a signal so guards and pages all
/// observe the same phase; the HTTP clients ride along so login and
/// authorized calls share one wiring point.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub manager: Signal<SessionManager>,
    api: Signal<HttpAuthApi>,
    pub client: Signal<ApiClient>,
}

impl AuthState {
    pub fn new() -> Self {
        let config = ApiConfig::from_build_env();
        let manager = Signal::new(SessionManager::new(SessionStore::tab()));
        let api = Signal::new(HttpAuthApi::new(config.clone()));

        // A 401 from any authorized endpoint evicts the session; the
        // guards observe the phase change and redirect.
        let client = Signal::new(ApiClient::new(
            config,
            Box::new(move || {
                let mut manager = manager;
                manager.write().invalidate();
            }),
        ));

        Self {
            manager,
            api,
            client,
        }
    }

    /// Restore the persisted session on startup and point the API
    /// client at its token.
    pub fn restore(&mut self) {
        let token = {
            let mut manager = self.manager.write();
            manager.init();
            manager.current_token()
        };
        self.client.read().set_token(token);
    }

    /// Submit credentials and settle the session.
    ///
    /// Login attempts settle latest-wins: an attempt superseded by a
    /// newer one reports [`LoginError::Superseded`] and leaves the
    /// session alone. The manager borrow is released around the network
    /// await so other readers of the signal are never blocked.
    pub async fn sign_in(&mut self, request: LoginRequest) -> Result<SessionUser, LoginError> {
        let ticket = self.manager.write().begin_login();
        let api = self.api.read().clone();
        let outcome = api.login(&request).await;
        let settled = self.manager.write().finish_login(ticket, outcome);
        if settled.is_ok() {
            let token = self.manager.read().current_token();
            self.client.read().set_token(token);
        }
        settled
    }

    /// Drop the session and the bearer token. Idempotent.
    pub fn sign_out(&mut self) {
        self.manager.write().logout();
        self.client.read().set_token(None);
    }

    pub fn phase(&self) -> AuthPhase {
        self.manager.read().phase().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.manager.read().is_authenticated()
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.manager.read().current_user().cloned()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.manager.read().current_role()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
