use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Every external integration is optional: without `DATABASE_URL` the store
/// runs on the in-memory backend, and without Mailgun credentials the email
/// dispatcher runs dry. Only a malformed `PORT` fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub mailgun_api_key: Option<String>,
    pub mailgun_domain: Option<String>,
    pub from_email: String,
    pub notify_email: String,
    pub static_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            mailgun_api_key: optional_env("MAILGUN_API_KEY"),
            mailgun_domain: optional_env("MAILGUN_DOMAIN"),
            from_email: std::env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "noreply@saanviyoga.com".to_string()),
            notify_email: std::env::var("NOTIFY_EMAIL")
                .unwrap_or_else(|_| "sanyamsood14@gmail.com".to_string()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
