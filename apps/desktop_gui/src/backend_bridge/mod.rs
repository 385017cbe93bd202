//! Bridge between the UI thread and the forwarding worker.

pub mod commands;
pub mod runtime;
