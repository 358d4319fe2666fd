//! HTTP adapters - REST API implementations.
//!
//! [`app_router`] assembles the routes with the cross-cutting layers the
//! binary serves.

pub mod billing;

pub use billing::{billing_router, BillingAppState};

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the full application router.
///
/// Adds request tracing and, when origins are configured, a CORS layer that
/// lets those storefront origins POST JSON.
pub fn app_router(state: BillingAppState, server: &ServerConfig) -> Router {
    let router = billing_router().with_state(state);

    let router = match cors_layer(&server.cors_origins_list()) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
