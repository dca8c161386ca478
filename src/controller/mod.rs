pub mod api;
pub mod favorites;
pub mod history;
pub mod pages;
pub mod reviews;
pub mod session;
pub mod stats;
