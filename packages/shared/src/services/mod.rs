pub mod comparison_service;
pub mod errors;
pub mod normalizer;
pub mod player_service;
