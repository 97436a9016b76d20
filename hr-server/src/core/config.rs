//! Server Configuration

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port (`HTTP_PORT`, default 8080)
    pub http_port: u16,
    /// SQLite database file path (`DATABASE_PATH`, default `data/hr.db`)
    pub database_path: String,
    /// Log level used when `RUST_LOG` is unset (`LOG_LEVEL`)
    pub log_level: Option<String>,
    /// Emit JSON log lines (`LOG_JSON`, default false)
    pub log_json: bool,
    /// Directory for daily-rolling log files (`LOG_DIR`)
    pub log_dir: Option<String>,
    /// First-run admin login (`SEED_ADMIN_EMAIL`)
    pub seed_admin_email: Option<String>,
    /// First-run admin password (`SEED_ADMIN_PASSWORD`)
    pub seed_admin_password: Option<String>,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/hr.db".to_string()),
            log_level: std::env::var("LOG_LEVEL").ok(),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok(),
            seed_admin_email: std::env::var("SEED_ADMIN_EMAIL").ok(),
            seed_admin_password: std::env::var("SEED_ADMIN_PASSWORD").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 8080,
            database_path: "data/hr.db".to_string(),
            log_level: None,
            log_json: false,
            log_dir: None,
            seed_admin_email: None,
            seed_admin_password: None,
        }
    }
}
