mod cache;
mod http;
mod manager;
mod store;

pub use cache::{SessionCache, SessionPointer, SESSION_EXPIRY_MINUTES};
pub use http::HttpSessionStore;
pub use manager::SessionManager;
pub use store::SessionStore;
