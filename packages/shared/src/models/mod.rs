pub mod chess_com;
pub mod comparison;
pub mod game;
pub mod player;
pub mod year_month;
