pub mod responder;
pub mod session;

pub use responder::{Reply, Responder, ResponseError};
pub use session::{ChatMessage, ChatSession, Role};
