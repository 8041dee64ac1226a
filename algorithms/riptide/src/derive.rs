//! Public API Layer
//!
//! The full derivation pipeline: PBKDF2 expansion into the working buffer,
//! the memory-hard lane mixing, and PBKDF2 compression into the final key.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::engine::mix_lanes;
use crate::params::Params;
use crate::pbkdf2::pbkdf2;
use crate::types::KdfError;

// =============================================================================
// DERIVATION
// =============================================================================

/// Derive `params.dk_len()` key bytes from a password and salt.
///
/// Deterministic in `(password, salt, N, r, p, dk_len, prf)`. All-or-nothing:
/// either the full key is returned or an error, never a partial result. The
/// password-derived working buffer is wiped before returning.
///
/// # Example
/// ```rust
/// use riptide::{derive, Params, Prf};
///
/// let params = Params::new(16, 1, 1, 32, Prf::Sha256)?;
/// let key = derive(b"correct horse", b"battery staple", &params)?;
/// assert_eq!(key.len(), 32);
/// # Ok::<(), riptide::KdfError>(())
/// ```
///
/// # Errors
/// [`KdfError::InvalidLength`] when `dk_len` exceeds the PBKDF2 maximum for
/// the chosen PRF. Cost-parameter problems are caught earlier, by
/// [`Params::new`].
pub fn derive(password: &[u8], salt: &[u8], params: &Params) -> Result<Vec<u8>, KdfError> {
    // Expand into the p-lane working buffer (128 * r * p bytes).
    let mut bytes = vec![0u8; params.buffer_len()];
    pbkdf2(params.prf(), password, salt, 1, &mut bytes)?;

    // The engine works on little-endian 32-bit words.
    let mut words = vec![0u32; params.buffer_len() / 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    #[allow(clippy::cast_possible_truncation)] // N fits usize; checked in Params::new
    mix_lanes(&mut words, params.word_block_size(), params.n() as usize);

    // The fully mixed buffer becomes the salt for the final compression.
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    let mut output = vec![0u8; params.dk_len()];
    let result = pbkdf2(params.prf(), password, &bytes, 1, &mut output);

    words.zeroize();
    bytes.zeroize();
    result?;
    Ok(output)
}

/// Derive a key using the password itself as the salt.
///
/// With `salt_len`, the salt is the first `salt_len` bytes of the password
/// (clamped to the password's length); without, the whole password. This is
/// a documented weakening kept for compatibility with callers that store no
/// independent salt — it reuses the secret as its own salt and forfeits the
/// usual rainbow-table resistance. Anything security-sensitive should pass
/// a random salt to [`derive`] instead.
///
/// # Errors
/// Same failure modes as [`derive`].
pub fn derive_no_salt(
    password: &[u8],
    salt_len: Option<usize>,
    params: &Params,
) -> Result<Vec<u8>, KdfError> {
    let salt = match salt_len {
        Some(len) => &password[..len.min(password.len())],
        None => password,
    };
    derive(password, salt, params)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Derive a key and compare it against `expected` in constant time.
///
/// # Example
/// ```rust
/// use riptide::{derive, verify, Params, Prf};
///
/// let params = Params::new(16, 1, 1, 32, Prf::Sha256)?;
/// let key = derive(b"secret", b"salt", &params)?;
/// assert!(verify(b"secret", b"salt", &params, &key)?);
/// assert!(!verify(b"guess", b"salt", &params, &key)?);
/// # Ok::<(), riptide::KdfError>(())
/// ```
///
/// # Errors
/// Same failure modes as [`derive`].
pub fn verify(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    expected: &[u8],
) -> Result<bool, KdfError> {
    let mut derived = derive(password, salt, params)?;
    let matches = derived.ct_eq(expected).into();
    derived.zeroize();
    Ok(matches)
}
