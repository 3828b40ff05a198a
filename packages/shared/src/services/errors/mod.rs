pub mod player_service_errors;
