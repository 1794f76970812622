//! Common utilities for the Trellis component builder.
//!
//! This crate provides shared infrastructure used by all builder components:
//! - **Warning System** - colored terminal output for degraded configuration input

pub mod warning;
