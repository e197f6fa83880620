//! Session orchestration.
//!
//! A `Session` owns one conversation: it validates input, records turns,
//! builds budgeted requests, and runs the model ↔ tool loop.

mod chat;
mod manager;
mod types;


pub use manager::Session;
pub use types::ChatError;
