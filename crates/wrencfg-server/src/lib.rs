//! wrencfg server library entry.
//!
//! Wires the config loader, the snapshot provider, and the HTTP handlers
//! into an axum app. Consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod ops;
pub mod router;
