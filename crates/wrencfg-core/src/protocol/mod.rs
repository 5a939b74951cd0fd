//! Wire formats served to the UI.
//!
//! Bodies here are pure data: building one never fails and never touches
//! process state, so handlers stay a thin shell around them.

pub mod client_config;

pub use client_config::ClientConfig;
