pub mod common;
pub mod credential;
pub mod food_vision;
pub mod image;
pub mod prompt;
pub mod session;
