pub mod api;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod recommend;
pub mod session;
pub mod ui;

pub use chat::ChatController;
pub use error::{ChatError, Result};
