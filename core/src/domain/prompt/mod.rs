pub mod services;
pub mod value_objects;

pub use services::PromptComposer;
pub use value_objects::{DEFAULT_LANGUAGE, INFO_CATEGORIES};
