pub mod assistant;
pub mod chat;
pub mod suggest;
