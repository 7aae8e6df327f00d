//! Yoga Studio observability.
//!
//! - Console, rolling file and JSON logging through `tracing`
//! - Distributed tracing exported over OTLP when `OTEL_EXPORTER_OTLP_ENDPOINT` is set
//! - Prometheus metrics with HTTP and domain counters
//! - Request logging middleware
//!
//! Everything beyond console logging sits behind the `observability` feature
//! (on by default). At runtime `OBSERVABILITY_ENABLED=false` falls back to
//! console logging and turns the middleware and counters into no-ops.
//!
//! ```no_run
//! use yogastudio_observability::{init_logging, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_logging();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

mod basic_logging;

#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_app, metrics_middleware, track_jwt_issued, track_login_failure,
    track_login_success, track_participation, track_session_operation, track_user_deleted,
    track_user_registered,
};

#[cfg(feature = "observability")]
static OBSERVABILITY_ENABLED: std::sync::OnceLock<bool> = std::sync::OnceLock::new();

/// Whether observability is switched on through `OBSERVABILITY_ENABLED`
/// (default: enabled).
#[cfg(feature = "observability")]
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true)
    })
}

/// Installs the global subscriber: the full stack when observability is
/// compiled in and enabled, console logging otherwise.
pub fn init_logging() {
    #[cfg(feature = "observability")]
    if is_observability_enabled() {
        init_tracing();
        return;
    }

    init_basic_console_logging();
}

#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Placeholder for the Prometheus handle; never constructed.
    #[derive(Clone, Debug)]
    pub struct PrometheusHandle;

    impl PrometheusHandle {
        pub fn render(&self) -> String {
            String::new()
        }
    }

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_tracing() {}

    pub async fn shutdown_tracer() {}

    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn metrics_app(_handle: PrometheusHandle) -> Router {
        Router::new()
    }

    pub fn track_user_registered() {}
    pub fn track_user_deleted() {}
    pub fn track_login_success(_admin: bool) {}
    pub fn track_login_failure(_reason: &str) {}
    pub fn track_jwt_issued() {}
    pub fn track_session_operation(_operation: &str) {}
    pub fn track_participation(_action: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
