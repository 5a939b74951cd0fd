//! Application HTTP handlers.

pub mod config;
