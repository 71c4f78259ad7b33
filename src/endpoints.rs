//! Declarative table of every remote operation
//!
//! Each row fixes the verb, the path relative to the base URL, which header set is
//! sent and what happens to the session token after a successful call. Paths of
//! per-entity operations get `/{id}` appended at call time.

use reqwest::Method;

/// Which headers a request carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSet {
    /// `Content-Type: application/json` only
    Default,
    /// Default headers plus `Authorization: Bearer <token>` when a token is stored
    Bearer,
}

/// Session side effect applied after a 2xx response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenEffect {
    None,
    /// Store `data.token` if the response carries one
    Store,
    /// Clear the session whatever the body says
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name used in logs
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub headers: HeaderSet,
    pub effect: TokenEffect,
}

impl Endpoint {
    const fn new(
        name: &'static str,
        method: Method,
        path: &'static str,
        headers: HeaderSet,
        effect: TokenEffect,
    ) -> Self {
        Self {
            name,
            method,
            path,
            headers,
            effect,
        }
    }

    /// `<path>/<id>` by plain concatenation
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }
}

const DEFAULT: HeaderSet = HeaderSet::Default;
const BEARER: HeaderSet = HeaderSet::Bearer;

// Auth
pub const LOGIN: Endpoint = Endpoint::new("login", Method::POST, "/auth/login", DEFAULT, TokenEffect::Store);
pub const ADMIN_LOGIN: Endpoint =
    Endpoint::new("admin_login", Method::POST, "/auth/admin/login", DEFAULT, TokenEffect::Store);
pub const VERIFY_AUTH: Endpoint =
    Endpoint::new("verify_auth", Method::POST, "/auth/verify_auth", BEARER, TokenEffect::None);
pub const REFRESH_TOKEN: Endpoint =
    Endpoint::new("refresh_token", Method::POST, "/auth/refresh", BEARER, TokenEffect::Store);
pub const LOGOUT: Endpoint = Endpoint::new("logout", Method::PUT, "/auth/logout", DEFAULT, TokenEffect::Clear);

// Users
pub const ENROLL_USER: Endpoint =
    Endpoint::new("enroll_user", Method::POST, "/user/enrollment", DEFAULT, TokenEffect::None);
pub const GET_USERS: Endpoint = Endpoint::new("get_users", Method::GET, "/user", BEARER, TokenEffect::None);
pub const GET_USER_BY_ID: Endpoint =
    Endpoint::new("get_user_by_id", Method::GET, "/user", BEARER, TokenEffect::None);
pub const UPDATE_USER: Endpoint = Endpoint::new("update_user", Method::PATCH, "/user", BEARER, TokenEffect::None);
pub const REQUEST_PASSWORD_CHANGE: Endpoint = Endpoint::new(
    "request_password_change",
    Method::POST,
    "/user/password",
    DEFAULT,
    TokenEffect::None,
);
pub const CHANGE_PASSWORD: Endpoint =
    Endpoint::new("change_password", Method::PUT, "/user/password", DEFAULT, TokenEffect::None);
pub const VERIFY_USER: Endpoint =
    Endpoint::new("verify_user", Method::POST, "/user/verification", DEFAULT, TokenEffect::None);

// Roles
pub const GET_ROLES: Endpoint = Endpoint::new("get_roles", Method::GET, "/rol", BEARER, TokenEffect::None);
pub const CREATE_ROLE: Endpoint =
    Endpoint::new("create_role", Method::POST, "/roles/create", BEARER, TokenEffect::None);
/// Roles of one app; the app id is appended as `/{app_id}`
pub const GET_ROLES_BY_APP: Endpoint =
    Endpoint::new("get_roles_by_app", Method::GET, "/role", BEARER, TokenEffect::None);
pub const GET_ROLE_BY_ID: Endpoint =
    Endpoint::new("get_role_by_id", Method::GET, "/rol", BEARER, TokenEffect::None);
pub const UPDATE_ROLE: Endpoint = Endpoint::new("update_role", Method::PATCH, "/rol", BEARER, TokenEffect::None);
pub const DELETE_ROLE: Endpoint = Endpoint::new("delete_role", Method::DELETE, "/rol", BEARER, TokenEffect::None);

// Apps
pub const GET_APPS: Endpoint = Endpoint::new("get_apps", Method::GET, "/apps", BEARER, TokenEffect::None);
pub const CREATE_APP: Endpoint = Endpoint::new("create_app", Method::POST, "/apps", BEARER, TokenEffect::None);
pub const GET_APP_BY_ID: Endpoint =
    Endpoint::new("get_app_by_id", Method::GET, "/apps", BEARER, TokenEffect::None);
pub const UPDATE_APP: Endpoint = Endpoint::new("update_app", Method::PATCH, "/apps", BEARER, TokenEffect::None);
pub const DELETE_APP: Endpoint = Endpoint::new("delete_app", Method::DELETE, "/apps", BEARER, TokenEffect::None);

// Admins
pub const GET_ADMINS: Endpoint = Endpoint::new("get_admins", Method::GET, "/admin", BEARER, TokenEffect::None);
pub const CREATE_ADMIN: Endpoint =
    Endpoint::new("create_admin", Method::POST, "/admin", BEARER, TokenEffect::None);
pub const GET_ADMIN_BY_ID: Endpoint =
    Endpoint::new("get_admin_by_id", Method::GET, "/admin", BEARER, TokenEffect::None);
pub const UPDATE_ADMIN: Endpoint =
    Endpoint::new("update_admin", Method::PATCH, "/admin", BEARER, TokenEffect::None);
pub const DELETE_ADMIN: Endpoint =
    Endpoint::new("delete_admin", Method::DELETE, "/admin", BEARER, TokenEffect::None);

// Health
pub const HEALTH: Endpoint = Endpoint::new("health", Method::GET, "/health", DEFAULT, TokenEffect::None);

/// Every endpoint the client knows about
pub const ALL: &[Endpoint] = &[
    LOGIN,
    ADMIN_LOGIN,
    VERIFY_AUTH,
    REFRESH_TOKEN,
    LOGOUT,
    ENROLL_USER,
    GET_USERS,
    GET_USER_BY_ID,
    UPDATE_USER,
    REQUEST_PASSWORD_CHANGE,
    CHANGE_PASSWORD,
    VERIFY_USER,
    GET_ROLES,
    CREATE_ROLE,
    GET_ROLES_BY_APP,
    GET_ROLE_BY_ID,
    UPDATE_ROLE,
    DELETE_ROLE,
    GET_APPS,
    CREATE_APP,
    GET_APP_BY_ID,
    UPDATE_APP,
    DELETE_APP,
    GET_ADMINS,
    CREATE_ADMIN,
    GET_ADMIN_BY_ID,
    UPDATE_ADMIN,
    DELETE_ADMIN,
    HEALTH,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn find(name: &str) -> &'static Endpoint {
        ALL.iter().find(|e| e.name == name).unwrap()
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = ALL.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_unauthenticated_endpoints() {
        let default_set: HashSet<_> = ALL
            .iter()
            .filter(|e| e.headers == HeaderSet::Default)
            .map(|e| e.name)
            .collect();

        let expected: HashSet<_> = [
            "login",
            "admin_login",
            "logout",
            "enroll_user",
            "request_password_change",
            "change_password",
            "verify_user",
            "health",
        ]
        .into_iter()
        .collect();

        assert_eq!(default_set, expected);
    }

    #[test]
    fn test_token_effects() {
        for endpoint in ALL {
            let expected = match endpoint.name {
                "login" | "admin_login" | "refresh_token" => TokenEffect::Store,
                "logout" => TokenEffect::Clear,
                _ => TokenEffect::None,
            };
            assert_eq!(endpoint.effect, expected, "{}", endpoint.name);
        }
    }

    #[test]
    fn test_methods_and_paths() {
        let table = [
            ("login", Method::POST, "/auth/login"),
            ("admin_login", Method::POST, "/auth/admin/login"),
            ("verify_auth", Method::POST, "/auth/verify_auth"),
            ("refresh_token", Method::POST, "/auth/refresh"),
            ("logout", Method::PUT, "/auth/logout"),
            ("enroll_user", Method::POST, "/user/enrollment"),
            ("get_users", Method::GET, "/user"),
            ("update_user", Method::PATCH, "/user"),
            ("request_password_change", Method::POST, "/user/password"),
            ("change_password", Method::PUT, "/user/password"),
            ("verify_user", Method::POST, "/user/verification"),
            ("get_roles", Method::GET, "/rol"),
            ("create_role", Method::POST, "/roles/create"),
            ("get_roles_by_app", Method::GET, "/role"),
            ("delete_role", Method::DELETE, "/rol"),
            ("create_app", Method::POST, "/apps"),
            ("update_app", Method::PATCH, "/apps"),
            ("delete_app", Method::DELETE, "/apps"),
            ("create_admin", Method::POST, "/admin"),
            ("delete_admin", Method::DELETE, "/admin"),
            ("health", Method::GET, "/health"),
        ];

        for (name, method, path) in table {
            let endpoint = find(name);
            assert_eq!(endpoint.method, method, "{name}");
            assert_eq!(endpoint.path, path, "{name}");
        }
    }

    #[test]
    fn test_item_path() {
        assert_eq!(UPDATE_APP.item_path("id1"), "/apps/id1");
        assert_eq!(GET_USER_BY_ID.item_path("u 1"), "/user/u 1");
    }
}
