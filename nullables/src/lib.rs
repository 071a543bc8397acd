//! Nullable infrastructure for deterministic testing.
//!
//! External sources of nondeterminism (here: the secure random source) sit
//! behind traits. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be told to fail, to exercise fatal-error paths
//! - Never touch the operating system
//!
//! Usage: swap real implementations for nullables in tests.

pub mod random;

pub use random::NullRandom;
