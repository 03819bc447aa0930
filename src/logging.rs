use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::config::server::Environment;

/// Installs the tracing subscriber. `RUST_LOG` overrides the default
/// filter; the `axum::rejection=trace` target surfaces extractor
/// rejections.
///
/// Production gets JSON lines for log ingestion, everything else a
/// compact human-readable format with file and line.
pub fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=debug,tower_http=debug,axum::rejection=trace",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if environment.is_production() {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true);
        registry.with(json_layer).init();
    } else {
        let console_layer = tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_target(false)
            .compact();
        registry.with(console_layer).init();
    }
}

/// Logs every request with a generated id, the matched route template
/// (falling back to the raw path), the status and the latency. The
/// completion level follows the status class.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let request_id = Uuid::new_v4().to_string();

    info!(%request_id, %method, %path, "Incoming request");

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status >= 500 {
        error!(%request_id, %method, %path, status, latency_ms, "Server error");
    } else if status >= 400 {
        warn!(%request_id, %method, %path, status, latency_ms, "Client error");
    } else {
        info!(%request_id, %method, %path, status, latency_ms, "Request completed");
    }

    response
}
