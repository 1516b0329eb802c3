mod message;
mod product;
mod session;

pub use message::{Message, MessageKind, Role};
pub use product::Product;
pub use session::Session;
