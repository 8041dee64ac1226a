//! PBKDF2 Expander
//!
//! RFC 2898 PBKDF2 over the injected PRF capability. scrypt uses it purely
//! as a length-adjusting expansion/compression step — both call sites pass
//! an iteration count of 1; the cost lives in N, r and p — but the general
//! iterated form is implemented.

use hmac::digest::{KeyInit, OutputSizeUser};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use crate::types::{KdfError, Prf};

// =============================================================================
// EXPANDER
// =============================================================================

/// Fill `out` with PBKDF2(prf, password, salt, rounds).
///
/// # Errors
/// [`KdfError::InvalidLength`] when `out` needs more than `2^32 - 1` PRF
/// blocks, the maximum the per-block counter can address.
#[allow(clippy::cast_possible_truncation)] // u32 fits usize on supported targets
pub fn pbkdf2(
    prf: Prf,
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    out: &mut [u8],
) -> Result<(), KdfError> {
    if out.len().div_ceil(prf.output_size()) > u32::MAX as usize {
        return Err(KdfError::InvalidLength);
    }
    match prf {
        Prf::Sha256 => fill::<Hmac<Sha256>>(password, salt, rounds, out),
        Prf::Sha512 => fill::<Hmac<Sha512>>(password, salt, rounds, out),
    }
    Ok(())
}

/// The HMAC-generic body: one keyed state cloned per block and per round.
fn fill<P>(password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8])
where
    P: Mac + KeyInit + Clone,
{
    #[allow(clippy::expect_used)] // HMAC accepts keys of any length
    let prf = <P as Mac>::new_from_slice(password).expect("HMAC key setup is infallible");
    let block_size = <P as OutputSizeUser>::output_size();
    for (i, chunk) in out.chunks_mut(block_size).enumerate() {
        // Block counters are 1-based big-endian per RFC 2898.
        #[allow(clippy::cast_possible_truncation)] // bounded by the length check
        generate_block(&prf, salt, rounds, i as u32 + 1, chunk);
    }
}

/// Compute `T_index = U_1 XOR U_2 XOR ... XOR U_rounds` into `chunk`.
fn generate_block<P>(prf: &P, salt: &[u8], rounds: u32, index: u32, chunk: &mut [u8])
where
    P: Mac + Clone,
{
    chunk.fill(0);
    let mut u = {
        let mut mac = prf.clone();
        mac.update(salt);
        mac.update(&index.to_be_bytes());
        mac.finalize().into_bytes()
    };
    xor_into(chunk, &u);
    for _ in 1..rounds {
        let mut mac = prf.clone();
        mac.update(&u);
        u = mac.finalize().into_bytes();
        xor_into(chunk, &u);
    }
}

/// XOR `src` into `dst`; `dst` may be shorter (the final partial block).
#[inline]
fn xor_into(dst: &mut [u8], src: &[u8]) {
    debug_assert!(src.len() >= dst.len());
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

// =============================================================================
// TESTS
// =============================================================================
