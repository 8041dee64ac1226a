//! Cost Parameters
//!
//! Validated, immutable scrypt cost parameters plus the block sizes derived
//! from them. Construction performs every check up front so the memory-hard
//! stage never starts (and never allocates) on bad input.

use crate::types::{KdfError, Prf};

/// Bytes in one 64-byte Salsa sub-block times the `2r` sub-blocks per lane:
/// one lane occupies `128 * r` bytes.
const LANE_BYTES_PER_R: usize = 128;

// =============================================================================
// PARAMETERS
// =============================================================================

/// Validated scrypt cost parameters.
///
/// Immutable once constructed; every `derive` call with the same `Params`
/// and inputs produces the same key.
///
/// # Example
/// ```rust
/// use riptide::{Params, Prf};
///
/// let params = Params::new(16384, 8, 1, 32, Prf::Sha256)?;
/// assert_eq!(params.block_size(), 1024);
/// # Ok::<(), riptide::KdfError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    n: u32,
    r: u32,
    p: u32,
    dk_len: usize,
    prf: Prf,
}

#[allow(clippy::cast_possible_truncation)] // u32 fits usize on supported targets
impl Params {
    /// Build and validate a parameter set.
    ///
    /// `n` is the CPU/memory cost (a power of two, > 1), `r` the block-size
    /// factor, `p` the parallelization factor, `dk_len` the derived key
    /// length in bytes, and `prf` the PBKDF2 collaborator.
    ///
    /// # Errors
    /// [`KdfError::InvalidParameter`] when any of the following holds:
    /// - `n` is not a power of two, or `n <= 1`
    /// - `r == 0`, `p == 0`, or `dk_len == 0`
    /// - `n >= 2^(16r)` or `r * p >= 2^30` (RFC 7914 side conditions)
    /// - `128 * r * p` or `128 * r * n` overflows `usize`
    ///
    /// [`KdfError::InvalidLength`] when `dk_len` needs more PRF blocks than
    /// PBKDF2's 32-bit block counter can address.
    pub fn new(n: u32, r: u32, p: u32, dk_len: usize, prf: Prf) -> Result<Self, KdfError> {
        if n <= 1 || !n.is_power_of_two() {
            return Err(KdfError::InvalidParameter("N must be a power of two > 1"));
        }
        if r == 0 {
            return Err(KdfError::InvalidParameter("r must be positive"));
        }
        if p == 0 {
            return Err(KdfError::InvalidParameter("p must be positive"));
        }
        if dk_len == 0 {
            return Err(KdfError::InvalidParameter("dkLen must be positive"));
        }
        if dk_len.div_ceil(prf.output_size()) > u32::MAX as usize {
            return Err(KdfError::InvalidLength);
        }
        // log2(N) < 16r keeps integerify's low-word read meaningful, and
        // r * p < 2^30 bounds the working buffer (RFC 7914, section 6).
        let log_n = n.trailing_zeros();
        if u64::from(log_n) >= 16 * u64::from(r) {
            return Err(KdfError::InvalidParameter("N too large for this r"));
        }
        if u64::from(r) * u64::from(p) >= 1 << 30 {
            return Err(KdfError::InvalidParameter("r * p too large"));
        }
        // The two big allocations: the p-lane working buffer and the N-entry
        // scratch table. Both must be addressable on this host.
        let lane_bytes = (r as usize)
            .checked_mul(LANE_BYTES_PER_R)
            .ok_or(KdfError::InvalidParameter("128 * r overflows"))?;
        lane_bytes
            .checked_mul(p as usize)
            .ok_or(KdfError::InvalidParameter("working buffer overflows"))?;
        lane_bytes
            .checked_mul(n as usize)
            .ok_or(KdfError::InvalidParameter("scratch table overflows"))?;
        Ok(Self {
            n,
            r,
            p,
            dk_len,
            prf,
        })
    }

    // =========================================================================
    // ACCESSORS & DERIVED SIZES
    // =========================================================================

    /// CPU/memory cost factor N.
    #[must_use]
    pub const fn n(&self) -> u32 {
        self.n
    }

    /// Block-size factor r.
    #[must_use]
    pub const fn r(&self) -> u32 {
        self.r
    }

    /// Parallelization factor p (number of independent lanes).
    #[must_use]
    pub const fn p(&self) -> u32 {
        self.p
    }

    /// Derived key length in bytes.
    #[must_use]
    pub const fn dk_len(&self) -> usize {
        self.dk_len
    }

    /// The PBKDF2 collaborator.
    #[must_use]
    pub const fn prf(&self) -> Prf {
        self.prf
    }

    /// Size of one lane's working block: `128 * r` bytes.
    #[must_use]
    pub const fn block_size(&self) -> usize {
        LANE_BYTES_PER_R * self.r as usize
    }

    /// One lane's working block measured in 32-bit words: `32 * r`.
    #[must_use]
    pub const fn word_block_size(&self) -> usize {
        self.block_size() / 4
    }

    /// Total working buffer across all `p` lanes, in bytes.
    #[must_use]
    pub const fn buffer_len(&self) -> usize {
        self.block_size() * self.p as usize
    }
}

impl Default for Params {
    /// Conventional defaults: `N = 1024`, `r = 1`, `p = 1`, `dk_len = 32`,
    /// PRF HMAC-SHA-256.
    fn default() -> Self {
        Self {
            n: 1024,
            r: 1,
            p: 1,
            dk_len: 32,
            prf: Prf::Sha256,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
