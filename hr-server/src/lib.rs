//! HR Management Server
//!
//! HTTP API for employee and department management with JWT authentication
//! and optimistic concurrency control on every update.
//!
//! # Module structure
//!
//! ```text
//! hr-server/src/
//! ├── core/          # Configuration, state, server, errors
//! ├── auth/          # JWT, Argon2 passwords, middleware
//! ├── api/           # HTTP routes and handlers
//! ├── routes/        # Router and middleware assembly
//! ├── db/            # Pool, migrations, repositories
//! └── utils/         # Logging, request validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod routes;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtConfig, JwtService};
pub use core::{Config, Server, ServerState};
pub use db::DbService;

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - forwards to tracing with a fixed target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    __  ______     _____
   / / / / __ \   / ___/___  ______   _____  _____
  / /_/ / /_/ /   \__ \/ _ \/ ___/ | / / _ \/ ___/
 / __  / _, _/   ___/ /  __/ /   | |/ /  __/ /
/_/ /_/_/ |_|   /____/\___/_/    |___/\___/_/
    "#
    );
}
