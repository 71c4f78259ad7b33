//! Basic session example
//!
//! Usage:
//!   cargo run --example basic_session
//!
//! Environment:
//!   SECURITY_API_BASE_URL  (default http://localhost:5002)
//!   ADMIN_EMAIL / ADMIN_PASSWORD
//!   SESSION_FILE           (default ./session.json)

use security_rs_client::{ApiClient, ApiClientConfig, FileStore, SessionStore};
use security_rs_client::types::{App, LoginData, LoginRequest};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ApiClientConfig::from_env();

    let email = std::env::var("ADMIN_EMAIL")
        .unwrap_or_else(|_| "admin@example.com".to_string());

    let password = std::env::var("ADMIN_PASSWORD")
        .unwrap_or_else(|_| "change-me".to_string());

    let session_file = std::env::var("SESSION_FILE")
        .unwrap_or_else(|_| "session.json".to_string());

    println!("=== Security Service Client Example ===");
    println!("Base URL: {}", config.base_url);
    println!("Session file: {}", session_file);
    println!();

    let session = SessionStore::new(Arc::new(FileStore::open(&session_file)?));
    let client = ApiClient::new(config, session)?;

    match client.health().await {
        Ok(envelope) => println!("✓ Service healthy: {}", envelope.message),
        Err(e) => println!("! Health check failed: {}", e),
    }
    println!();

    if client.is_authenticated() {
        println!("Reusing stored session token");
    } else {
        println!("Logging in as {}...", email);
        let envelope = client.admin_login(&LoginRequest::new(&email, password)).await?;
        println!("✓ {} ({})", envelope.message, envelope.message_code);
        let data: LoginData = envelope.decode_data()?;
        if let Some(role) = data.role {
            println!("  Role: {} ({} permissions)", role.name, role.permissions.len());
        }
    }

    // Display-only: the claims are not verified locally
    if let Some(identity) = client.cached_identity() {
        println!("  Identity: {} <{}> role={}", identity.name, identity.email, identity.rol_name);
    }
    println!();

    println!("Apps:");
    let apps: Vec<App> = client.get_apps().await?.decode_data()?;
    for app in apps {
        println!("  - {} [{}] {}", app.name, app.status, app.redirect_url);
    }
    println!();

    println!("Logging out...");
    client.logout(&email).await?;
    println!("✓ Session cleared: authenticated = {}", client.is_authenticated());

    Ok(())
}
