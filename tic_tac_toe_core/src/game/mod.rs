pub mod board;
pub mod message;
pub mod models;
pub mod opponent;
