//! Top-level facade crate for wrencfg.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use wrencfg_core::*;
}

pub mod server {
    pub use wrencfg_server::*;
}
