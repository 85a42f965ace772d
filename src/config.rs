//! Environment-derived settings, resolved once at startup.

/// Runtime configuration for the server and seeder binaries.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    /// Active Codespace name, if the process runs in a hosted dev environment.
    /// Empty values are treated as unset.
    pub codespace_name: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/octofit".into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into()),
            codespace_name: std::env::var("CODESPACE_NAME")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }
}
