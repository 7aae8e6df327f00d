use std::sync::Arc;

use axum::{Router, routing::post};
use tower_governor::GovernorLayer;

use yogastudio_config::RateLimitConfig;

use crate::state::AppState;

use super::controller::{login_user, register_user};

pub fn init_auth_router(rate_limit_config: &RateLimitConfig) -> Router<AppState> {
    let router = Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user));

    if !rate_limit_config.enabled {
        return router;
    }

    router.layer(GovernorLayer::new(Arc::new(
        rate_limit_config.auth_governor_config(),
    )))
}
