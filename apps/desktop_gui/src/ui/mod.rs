//! UI layer for desktop GUI: app shell and scroll plumbing.

pub mod app;
pub mod scroll;

pub use app::{PolicyCenterApp, StartupConfig};
