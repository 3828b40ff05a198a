use std::sync::Arc;

use shared::services::player_service::PlayerService;

#[derive(Clone)]
pub struct AppState {
    pub player_service: Arc<PlayerService>,
}
