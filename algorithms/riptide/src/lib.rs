#![cfg_attr(not(feature = "std"), no_std)]

//! # riptide
//!
//! Memory-hard scrypt key derivation (RFC 7914).
//!
//! Deriving a key cheaply in parallel requires proportionally more memory,
//! not just more compute: the ROMix stage forces an O(N·r) scratch table per
//! lane whose entries the backward pass revisits at data-dependent indices.
//! The `p` lanes are independent and run on Rayon workers when the
//! `multithread` feature (default) is enabled.

//! # Usage
//! ```rust
//! use riptide::{derive, Params, Prf};
//!
//! // Conventional defaults: N = 1024, r = 1, p = 1, 32-byte key, HMAC-SHA-256.
//! let params = Params::default();
//! let key = derive(b"password", b"a random salt", &params)?;
//! assert_eq!(key.len(), 32);
//!
//! // Tuned costs, PRF picked by name.
//! let prf = Prf::from_name("sha256")?;
//! let params = Params::new(16384, 8, 1, 64, prf)?;
//! # let _ = params;
//! # Ok::<(), riptide::KdfError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod derive;
mod engine;
mod kernels;
mod params;
mod pbkdf2;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use derive::{derive, derive_no_salt, verify};
pub use params::Params;
pub use types::{KdfError, Prf};

/// Names accepted by [`Prf::from_name`] in this build.
#[must_use]
pub const fn supported_prfs() -> &'static [&'static str] {
    &["sha256", "sha512"]
}
