pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod view;

pub use controller::api::{ApiConfig, HttpParPassApi, ParPassApi};
pub use controller::pages::{AppState, configure};
pub use error::ParPassError;
