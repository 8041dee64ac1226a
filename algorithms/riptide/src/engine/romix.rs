//! ROMix Engine
//!
//! scrypt's sequential-memory-hard core. The forward pass snapshots the
//! lane into the table `V` before each mix; the backward pass jumps back
//! into `V` at data-dependent indices. The jumps are only cheap if all `N`
//! snapshots were actually kept, which is what forces the O(N·r) memory
//! footprint.

use crate::engine::blockmix::block_mix;
use crate::kernels::SUB_BLOCK_WORDS;

/// Transform one lane in place with cost factor `n`.
///
/// `v` is the lane's private snapshot table (`n` copies of the lane,
/// `n * lane.len()` words); `scratch` is the block-mix staging area
/// (`lane.len()` words). Both passes are a hard sequential dependency chain
/// and must not be reordered.
pub fn ro_mix(lane: &mut [u32], v: &mut [u32], scratch: &mut [u32], n: usize) {
    debug_assert!(n.is_power_of_two());
    debug_assert_eq!(v.len(), n * lane.len());

    // Forward pass: snapshot, then mix.
    for snapshot in v.chunks_exact_mut(lane.len()) {
        snapshot.copy_from_slice(lane);
        block_mix(lane, scratch);
    }

    // Backward pass: data-dependent jumps into V.
    let len = lane.len();
    for _ in 0..n {
        let j = integerify(lane, n);
        for (lane_word, v_word) in lane.iter_mut().zip(&v[j * len..(j + 1) * len]) {
            *lane_word ^= *v_word;
        }
        block_mix(lane, scratch);
    }
}

/// Read the lane's last sub-block as an integer mod `n`.
///
/// Only the first word of the last 16-word sub-block matters since
/// `n <= 2^32`; the words are already little-endian. `n` is a power of two,
/// so the reduction is a mask.
#[inline]
#[allow(clippy::cast_possible_truncation)] // u32 fits usize on supported targets
fn integerify(lane: &[u32], n: usize) -> usize {
    let low_word = lane[lane.len() - SUB_BLOCK_WORDS];
    (low_word as usize) & (n - 1)
}

// =============================================================================
// TESTS
// =============================================================================
