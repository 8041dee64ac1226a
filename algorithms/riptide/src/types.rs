//! Shared types used across the riptide library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// PRF CAPABILITY
// =============================================================================

/// Keyed pseudorandom function used inside the PBKDF2 expander.
///
/// riptide does not implement any hash primitive itself; the HMAC
/// construction comes from the `hmac`/`sha2` collaborator crates. The
/// capability is resolved once, when the [`Params`](crate::Params) are
/// built, never per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Prf {
    /// HMAC-SHA-256 (default; 32-byte PRF output)
    #[default]
    Sha256,
    /// HMAC-SHA-512 (64-byte PRF output)
    Sha512,
}

impl Prf {
    /// Resolve a PRF by its conventional digest name (`"sha256"`,
    /// `"sha512"`; ASCII case-insensitive).
    ///
    /// # Errors
    /// Returns [`KdfError::UnsupportedPrf`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, KdfError> {
        if name.eq_ignore_ascii_case("sha256") {
            Ok(Self::Sha256)
        } else if name.eq_ignore_ascii_case("sha512") {
            Ok(Self::Sha512)
        } else {
            Err(KdfError::UnsupportedPrf)
        }
    }

    /// Canonical digest name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// PRF output size in bytes (32 for SHA-256, 64 for SHA-512).
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced by parameter validation and key derivation.
///
/// All validation happens before the memory-hard stage allocates anything;
/// derivation either returns the full requested key or one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfError {
    /// Cost parameters rejected: N not a power of two or ≤ 1, r = 0,
    /// p = 0, `dk_len` = 0, or a derived buffer size overflows `usize`.
    /// Carries a short description of the offending condition.
    InvalidParameter(&'static str),
    /// The requested digest name is not provided by this build.
    UnsupportedPrf,
    /// The requested output length exceeds PBKDF2's representable range
    /// of `(2^32 - 1) * PRF-output-size` bytes.
    InvalidLength,
}

impl fmt::Display for KdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(what) => write!(f, "invalid scrypt parameters: {what}"),
            Self::UnsupportedPrf => write!(
                f,
                "unsupported PRF; available digests: sha256, sha512"
            ),
            Self::InvalidLength => write!(
                f,
                "derived key length exceeds the PBKDF2 maximum of (2^32 - 1) blocks"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for KdfError {}
