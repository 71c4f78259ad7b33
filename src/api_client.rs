//! Endpoint client for the security service API

use crate::endpoints::{self, Endpoint, HeaderSet, TokenEffect};
use crate::envelope::Envelope;
use crate::error::{ClientError, Result};
use crate::identity::JwtUserData;
use crate::session::{default_headers, SessionStore};
use crate::types::*;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5002";

/// Environment variable read by [`ApiClientConfig::from_env`]
pub const BASE_URL_ENV: &str = "SECURITY_API_BASE_URL";

/// Return `ClientError::Http` for any non-2xx response, without reading its body
macro_rules! check_response {
    ($response:expr) => {
        if !$response.status().is_success() {
            return Err(ClientError::Http {
                status: $response.status().as_u16(),
            });
        }
    };
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Scheme, host and optional prefix; endpoint paths are appended verbatim
    pub base_url: String,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `SECURITY_API_BASE_URL`, falling back to the default
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::Configuration("base_url must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the security service
///
/// Every operation is one request described by a row of [`endpoints`]. Failures are
/// logged and returned as-is; nothing is retried.
pub struct ApiClient {
    config: ApiClientConfig,
    session: SessionStore,
    http_client: Client,
}

impl ApiClient {
    /// Create a client that persists its token through `session`
    pub fn new(config: ApiClientConfig, session: SessionStore) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            session,
            http_client: Client::new(),
        })
    }

    /// Create a client whose session lives only in memory
    pub fn in_memory(config: ApiClientConfig) -> Result<Self> {
        Self::new(config, SessionStore::in_memory())
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Get the session store (for advanced usage)
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Unverified claims of the stored token, for display only
    pub fn cached_identity(&self) -> Option<JwtUserData> {
        self.session.cached_identity()
    }

    async fn call(&self, endpoint: &Endpoint, path: &str) -> Result<Envelope> {
        self.execute::<()>(endpoint, path, None).await
    }

    async fn call_with<B>(&self, endpoint: &Endpoint, path: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.execute(endpoint, path, Some(body)).await
    }

    async fn execute<B>(&self, endpoint: &Endpoint, path: &str, body: Option<&B>) -> Result<Envelope>
    where
        B: Serialize + Sync + ?Sized,
    {
        let result = self.dispatch(endpoint, path, body).await;
        if let Err(e) = &result {
            warn!(
                operation = endpoint.name,
                status = ?e.status(),
                error = %e,
                "Request failed"
            );
        }
        result
    }

    /// Send one request and apply the endpoint's token effect
    ///
    /// The session is only touched after a 2xx status.
    async fn dispatch<B>(&self, endpoint: &Endpoint, path: &str, body: Option<&B>) -> Result<Envelope>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = format!("{}{}", self.config.base_url, path);
        let headers = match endpoint.headers {
            HeaderSet::Default => default_headers(),
            HeaderSet::Bearer => self.session.auth_headers(),
        };

        debug!(
            operation = endpoint.name,
            method = %endpoint.method,
            url = %url,
            "Sending request"
        );

        let mut request = self.http_client.request(endpoint.method.clone(), &url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        check_response!(response);

        if endpoint.effect == TokenEffect::Clear {
            self.session.clear_token()?;
        }

        let bytes = response.bytes().await?;
        let envelope: Envelope = serde_json::from_slice(&bytes)?;

        if endpoint.effect == TokenEffect::Store {
            if let Some(token) = envelope.token() {
                self.session.set_token(token)?;
            }
        }

        Ok(envelope)
    }
}

// Auth
impl ApiClient {
    /// Log a user in; stores `data.token` on success
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Envelope> {
        self.call_with(&endpoints::LOGIN, endpoints::LOGIN.path, credentials)
            .await
    }

    /// Log an administrator in; stores `data.token` on success
    pub async fn admin_login(&self, credentials: &LoginRequest) -> Result<Envelope> {
        self.call_with(&endpoints::ADMIN_LOGIN, endpoints::ADMIN_LOGIN.path, credentials)
            .await
    }

    /// Ask the server whether the session grants `permission`
    pub async fn verify_auth(&self, permission: &str) -> Result<Envelope> {
        let request = VerifyAuthRequest {
            permission: permission.to_string(),
        };
        self.call_with(&endpoints::VERIFY_AUTH, endpoints::VERIFY_AUTH.path, &request)
            .await
    }

    /// Exchange the stored token for a fresh one
    pub async fn refresh_token(&self) -> Result<Envelope> {
        self.call(&endpoints::REFRESH_TOKEN, endpoints::REFRESH_TOKEN.path)
            .await
    }

    /// End the session; the stored token is cleared on any 2xx
    pub async fn logout(&self, email: &str) -> Result<Envelope> {
        let request = LogoutRequest {
            email: email.to_string(),
        };
        self.call_with(&endpoints::LOGOUT, endpoints::LOGOUT.path, &request)
            .await
    }
}

// Users
impl ApiClient {
    pub async fn enroll_user(&self, request: &UserEnrollmentRequest) -> Result<Envelope> {
        self.call_with(&endpoints::ENROLL_USER, endpoints::ENROLL_USER.path, request)
            .await
    }

    /// List users, optionally only those of `app_id`
    pub async fn get_users(&self, app_id: Option<&str>) -> Result<Envelope> {
        let path = match app_id.filter(|id| !id.is_empty()) {
            Some(id) => format!("{}?app_id={}", endpoints::GET_USERS.path, id),
            None => endpoints::GET_USERS.path.to_string(),
        };
        self.call(&endpoints::GET_USERS, &path).await
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<Envelope> {
        let path = endpoints::GET_USER_BY_ID.item_path(user_id);
        self.call(&endpoints::GET_USER_BY_ID, &path).await
    }

    pub async fn update_user<P>(&self, user_id: &str, patch: &P) -> Result<Envelope>
    where
        P: Serialize + Sync + ?Sized,
    {
        let path = endpoints::UPDATE_USER.item_path(user_id);
        self.call_with(&endpoints::UPDATE_USER, &path, patch).await
    }

    /// Start the password reset flow for `email`
    pub async fn request_password_change(&self, email: &str) -> Result<Envelope> {
        let request = UserPasswordRequest {
            email: email.to_string(),
        };
        self.call_with(
            &endpoints::REQUEST_PASSWORD_CHANGE,
            endpoints::REQUEST_PASSWORD_CHANGE.path,
            &request,
        )
        .await
    }

    pub async fn change_password(&self, request: &UserPasswordChangeRequest) -> Result<Envelope> {
        self.call_with(&endpoints::CHANGE_PASSWORD, endpoints::CHANGE_PASSWORD.path, request)
            .await
    }

    /// Submit the emailed verification code
    pub async fn verify_user(&self, request: &UserVerificationRequest) -> Result<Envelope> {
        self.call_with(&endpoints::VERIFY_USER, endpoints::VERIFY_USER.path, request)
            .await
    }
}

// Roles
impl ApiClient {
    pub async fn get_roles(&self) -> Result<Envelope> {
        self.call(&endpoints::GET_ROLES, endpoints::GET_ROLES.path)
            .await
    }

    pub async fn create_role(&self, request: &RoleCreateRequest) -> Result<Envelope> {
        self.call_with(&endpoints::CREATE_ROLE, endpoints::CREATE_ROLE.path, request)
            .await
    }

    /// Roles belonging to `app_id`
    pub async fn get_roles_by_app(&self, app_id: &str) -> Result<Envelope> {
        let path = endpoints::GET_ROLES_BY_APP.item_path(app_id);
        self.call(&endpoints::GET_ROLES_BY_APP, &path).await
    }

    pub async fn get_role_by_id(&self, role_id: &str) -> Result<Envelope> {
        let path = endpoints::GET_ROLE_BY_ID.item_path(role_id);
        self.call(&endpoints::GET_ROLE_BY_ID, &path).await
    }

    pub async fn update_role(&self, role_id: &str, patch: &RoleUpdateRequest) -> Result<Envelope> {
        let path = endpoints::UPDATE_ROLE.item_path(role_id);
        self.call_with(&endpoints::UPDATE_ROLE, &path, patch).await
    }

    pub async fn delete_role(&self, role_id: &str) -> Result<Envelope> {
        let path = endpoints::DELETE_ROLE.item_path(role_id);
        self.call(&endpoints::DELETE_ROLE, &path).await
    }
}

// Apps
impl ApiClient {
    pub async fn get_apps(&self) -> Result<Envelope> {
        self.call(&endpoints::GET_APPS, endpoints::GET_APPS.path)
            .await
    }

    pub async fn create_app(&self, request: &AppCreateRequest) -> Result<Envelope> {
        self.call_with(&endpoints::CREATE_APP, endpoints::CREATE_APP.path, request)
            .await
    }

    pub async fn get_app_by_id(&self, app_id: &str) -> Result<Envelope> {
        let path = endpoints::GET_APP_BY_ID.item_path(app_id);
        self.call(&endpoints::GET_APP_BY_ID, &path).await
    }

    pub async fn update_app(&self, app_id: &str, patch: &AppUpdateRequest) -> Result<Envelope> {
        let path = endpoints::UPDATE_APP.item_path(app_id);
        self.call_with(&endpoints::UPDATE_APP, &path, patch).await
    }

    /// Soft-delete: the server marks the app inactive
    pub async fn delete_app(&self, app_id: &str) -> Result<Envelope> {
        let path = endpoints::DELETE_APP.item_path(app_id);
        self.call(&endpoints::DELETE_APP, &path).await
    }
}

// Admins
impl ApiClient {
    pub async fn get_admins(&self) -> Result<Envelope> {
        self.call(&endpoints::GET_ADMINS, endpoints::GET_ADMINS.path)
            .await
    }

    pub async fn create_admin(&self, request: &AdminCreateRequest) -> Result<Envelope> {
        self.call_with(&endpoints::CREATE_ADMIN, endpoints::CREATE_ADMIN.path, request)
            .await
    }

    pub async fn get_admin_by_id(&self, admin_id: &str) -> Result<Envelope> {
        let path = endpoints::GET_ADMIN_BY_ID.item_path(admin_id);
        self.call(&endpoints::GET_ADMIN_BY_ID, &path).await
    }

    pub async fn update_admin(&self, admin_id: &str, patch: &AdminUpdateRequest) -> Result<Envelope> {
        let path = endpoints::UPDATE_ADMIN.item_path(admin_id);
        self.call_with(&endpoints::UPDATE_ADMIN, &path, patch).await
    }

    /// Soft-delete: the server marks the admin inactive
    pub async fn delete_admin(&self, admin_id: &str) -> Result<Envelope> {
        let path = endpoints::DELETE_ADMIN.item_path(admin_id);
        self.call(&endpoints::DELETE_ADMIN, &path).await
    }
}

impl ApiClient {
    /// Server and database liveness
    pub async fn health(&self) -> Result<Envelope> {
        self.call(&endpoints::HEALTH, endpoints::HEALTH.path).await
    }
}
