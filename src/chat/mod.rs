mod controller;
mod conversation;
pub mod responder;
mod scheduler;

pub use controller::{ChatController, ChatPanel};
pub use conversation::Sender;
pub use scheduler::{ReplyEvent, ReplyScheduler};
