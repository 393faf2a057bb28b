pub mod food_vision;
pub mod health;
pub mod server;
