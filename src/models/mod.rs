pub mod chat;
pub mod common;
pub mod gemini;
pub mod health;
