//! Shared utilities for the seedvault wallet core.

pub mod logging;

pub use logging::{init_logging, LogFormat};
