use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod routes;
pub mod state;
pub mod views;

use state::AppState;

pub fn create_app(app_state: AppState) -> Router {
    // Read-only public data, any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::player::routes())
        .merge(routes::compare::routes())
        .layer(cors)
        .with_state(app_state)
}
