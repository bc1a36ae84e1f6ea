//! Shared utilities for the group trust workspace.

pub mod logging;

pub use logging::{init_logging, LogFormat};
