//! wrencfg core: the configuration snapshot, its provider seam, the client
//! config wire body, and the shared error type.
//!
//! Nothing in here knows about HTTP or the runtime, so the server and any
//! other host can share the same defaulting rules.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Fallible paths surface as `WrenCfgError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod snapshot;

/// Shared result type.
pub use error::{Result, WrenCfgError};
pub use protocol::ClientConfig;
pub use snapshot::{ConfigProvider, ConfigSnapshot, StaticProvider};
