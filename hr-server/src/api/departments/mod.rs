//! Department Routes

mod handler;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Build department router.
///
/// Reads are open to any authenticated user; mutations require Admin.
pub fn router() -> Router<ServerState> {
    let admin = Router::new()
        .route("/api/department", post(handler::create))
        .route(
            "/api/department/{id}",
            put(handler::update).delete(handler::delete),
        )
        .route_layer(axum_middleware::from_fn(require_admin));

    Router::new()
        .route("/api/department", get(handler::list))
        .route("/api/department/{id}", get(handler::get_by_id))
        .merge(admin)
}
