#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;
pub mod history;
pub mod responder;

pub use controller::{ChatController, SubmitOutcome};
pub use history::{ChatLog, ChatMessage, ChatRole, ChatSnapshot};
pub use responder::{
    ChatResponder, ScriptedResponder, DEFAULT_GREETING, SCRIPTED_REPLY, SUGGESTED_QUESTIONS,
};
