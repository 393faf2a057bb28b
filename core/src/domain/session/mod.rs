pub mod services;
pub mod value_objects;

pub use services::RecognitionSession;
pub use value_objects::SessionScope;
