//! # void_core - Void Engine Core
//!
//! Zero-dependency primitives shared by the gameplay crates.
//! Currently this is the named identifier used to key catalog records.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

pub mod id;

pub use id::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::id::NamedId;
}
