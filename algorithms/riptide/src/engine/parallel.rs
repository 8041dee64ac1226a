//! Lane Scheduling
//!
//! The `p` lanes of a derivation are fully independent: separate buffer
//! ranges, separate snapshot tables, no synchronization until all lanes are
//! done. With the `multithread` feature they run on Rayon workers, each
//! owning a private `V`; the serial path reuses a single allocation across
//! lanes. Within a lane, ROMix stays strictly sequential either way.

#[cfg(not(feature = "std"))]
use alloc::vec;
use zeroize::Zeroize;

use crate::engine::romix::ro_mix;

/// Run ROMix over every lane of the working buffer.
///
/// `buffer` holds `p` contiguous lanes of `lane_words` 32-bit words each;
/// `n` is the cost factor. Scratch memory is wiped when the lanes complete.
pub fn mix_lanes(buffer: &mut [u32], lane_words: usize, n: usize) {
    debug_assert_eq!(buffer.len() % lane_words, 0);

    // A single lane gains nothing from the thread pool; skip it.
    #[cfg(feature = "multithread")]
    if buffer.len() > lane_words {
        use rayon::prelude::*;
        buffer.par_chunks_mut(lane_words).for_each(|lane| {
            let mut v = vec![0u32; n * lane_words];
            let mut scratch = vec![0u32; lane_words];
            ro_mix(lane, &mut v, &mut scratch, n);
            v.zeroize();
            scratch.zeroize();
        });
        return;
    }

    let mut v = vec![0u32; n * lane_words];
    let mut scratch = vec![0u32; lane_words];
    for lane in buffer.chunks_exact_mut(lane_words) {
        ro_mix(lane, &mut v, &mut scratch, n);
    }
    v.zeroize();
    scratch.zeroize();
}

// =============================================================================
// TESTS
// =============================================================================
