//! Salsa20/8 Core
//!
//! The 8-round reduced Salsa20 permutation, used purely as a mixing
//! primitive (never as a cipher). Operates on 16 little-endian 32-bit words
//! in place and finishes with the standard feed-forward sum, so the all-zero
//! state is a fixed point.

use crate::kernels::SUB_BLOCK_WORDS;

/// Double-rounds executed (8 Salsa rounds total).
const DOUBLE_ROUNDS: usize = 4;

// =============================================================================
// PERMUTATION
// =============================================================================

/// Apply the Salsa20/8 core to a 16-word state in place.
///
/// Runs four double-rounds (one column round, one row round each) over the
/// standard Salsa20 quarter-round index groups, then adds the original input
/// elementwise modulo 2^32.
pub fn salsa20_8(state: &mut [u32; SUB_BLOCK_WORDS]) {
    let input = *state;
    for _ in 0..DOUBLE_ROUNDS {
        // Columns
        quarter_round(0, 4, 8, 12, state);
        quarter_round(5, 9, 13, 1, state);
        quarter_round(10, 14, 2, 6, state);
        quarter_round(15, 3, 7, 11, state);
        // Rows
        quarter_round(0, 1, 2, 3, state);
        quarter_round(5, 6, 7, 4, state);
        quarter_round(10, 11, 8, 9, state);
        quarter_round(15, 12, 13, 14, state);
    }
    for (word, start) in state.iter_mut().zip(input.iter()) {
        *word = word.wrapping_add(*start);
    }
}

/// One add-rotate-xor quarter-round over the words at `a`, `b`, `c`, `d`.
#[inline]
const fn quarter_round(
    a: usize,
    b: usize,
    c: usize,
    d: usize,
    state: &mut [u32; SUB_BLOCK_WORDS],
) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

// =============================================================================
// TESTS
// =============================================================================
