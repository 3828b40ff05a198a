pub mod errors;
pub mod player_repository;
