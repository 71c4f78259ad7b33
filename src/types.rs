//! Request bodies and the entities transported by the security service

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Auth

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyAuthRequest {
    pub permission: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub email: String,
}

/// Role summary embedded in a login response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRole {
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub screens: Vec<String>,
}

/// `data` of a successful login
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub role: Option<LoginRole>,
    #[serde(default)]
    pub token: Option<String>,
}

// ---------------------------------------------------------------------------
// Users

/// App/role pair assigned at enrollment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppRoleAssignment {
    pub role: String,
    pub app: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnrollmentRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub apps: Vec<AppRoleAssignment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPasswordChangeRequest {
    pub user_email: String,
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserVerificationRequest {
    pub user_email: String,
    pub verification_code: u32,
}

/// A user's membership in one app
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppMembership {
    pub app: String,
    #[serde(default)]
    pub role: String,
    /// Per-app session token
    #[serde(default)]
    pub token: String,
    /// Pending verification code
    #[serde(default)]
    pub code: String,
    /// The server spells this field `code_expliration`
    #[serde(default, rename = "code_expliration")]
    pub code_expiration: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_session_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Always a placeholder on the wire
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub apps: Vec<AppMembership>,
}

// ---------------------------------------------------------------------------
// Roles

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Role {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub mod_date: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub default_role: bool,
    #[serde(default)]
    pub screens: Vec<String>,
    /// Owning app
    #[serde(default)]
    pub app: String,
    #[serde(default)]
    pub app_client_id: Option<String>,
}

/// New role for one app; `permissions` must not be empty server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCreateRequest {
    pub name: String,
    pub permissions: Vec<String>,
    pub app: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_role: Option<bool>,
}

/// Partial role update; unset fields are left out of the body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screens: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Apps

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct App {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub redirect_url: String,
    #[serde(default)]
    pub status: String,
    /// Owning admin
    #[serde(default)]
    pub admin_id: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppCreateRequest {
    pub name: String,
    pub redirect_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
}

/// Partial app update; unset fields are left out of the body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Admins

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Admin {
    #[serde(alias = "_id")]
    pub id: String,
    pub admin_email: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub creation_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreateRequest {
    pub admin_email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Partial admin update (`status` is `active` or `inactive`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
