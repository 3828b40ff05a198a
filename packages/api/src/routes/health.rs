use axum::http::StatusCode;

/// Liveness probe, does not touch the upstream.
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Healthy!")
}
