//! Tower layers and request decoration

pub mod auth;
pub mod validation;

pub use auth::AuthCredentials;
pub use validation::{ValidationLayer, ValidationService};
