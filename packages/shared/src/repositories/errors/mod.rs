pub mod player_repository_errors;
