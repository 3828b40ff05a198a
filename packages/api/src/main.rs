use lambda_http::{run, tracing, Error};
use std::env::set_var;
use std::sync::Arc;

use api::{create_app, state::AppState};
use shared::config::ChessComConfig;
use shared::repositories::player_repository::ChessComPlayerRepository;
use shared::services::player_service::PlayerService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    let config = ChessComConfig::from_env()?;
    tracing::info!(
        "Using player data API at {} (timeout {:?})",
        config.base_url,
        config.timeout
    );

    let player_repository = Arc::new(ChessComPlayerRepository::new(&config)?);
    let player_service = Arc::new(PlayerService::new(player_repository));

    let app_state = AppState { player_service };

    run(create_app(app_state)).await
}
