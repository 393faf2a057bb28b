pub mod services;
pub mod value_objects;

pub use services::ProviderKeyRing;
pub use value_objects::Credential;
