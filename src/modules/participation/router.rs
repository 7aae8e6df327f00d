use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{no_longer_participate, participate};

/// Routes mounted under `/api/session`.
pub fn init_participation_router() -> Router<AppState> {
    Router::new().route(
        "/{id}/participate/{user_id}",
        post(participate).delete(no_longer_participate),
    )
}
