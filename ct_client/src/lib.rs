//! Internal modules for the craps table host.
//!
//! This library provides command parsing, configuration loading, the
//! command-driven session and text rendering used by the ct_client binary.

pub mod commands;
pub mod config;
pub mod render;
pub mod session;
