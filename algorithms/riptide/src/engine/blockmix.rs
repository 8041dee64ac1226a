//! Block Mixer
//!
//! `BlockMix_salsa20/8` over one lane of `2r` 16-word sub-blocks. A running
//! accumulator is XORed with each sub-block and permuted; the permuted
//! intermediates are then deinterleaved so the even-indexed ones fill the
//! first half of the lane and the odd-indexed ones the second half. That
//! even/odd split is what gives ROMix its two-power addressing.

use crate::kernels::salsa::salsa20_8;
use crate::kernels::SUB_BLOCK_WORDS;

/// Mix one lane in place.
///
/// `lane` holds `2r` sub-blocks of 16 words; `scratch` must be the same
/// length and is used to stage the deinterleaved output before it overwrites
/// the lane. Neither may alias the ROMix snapshot table.
pub fn block_mix(lane: &mut [u32], scratch: &mut [u32]) {
    debug_assert_eq!(lane.len(), scratch.len());
    debug_assert_eq!(lane.len() % (2 * SUB_BLOCK_WORDS), 0);

    let half = lane.len() / 2;
    let mut acc = [0u32; SUB_BLOCK_WORDS];
    acc.copy_from_slice(&lane[lane.len() - SUB_BLOCK_WORDS..]);

    for (i, sub_block) in lane.chunks_exact(SUB_BLOCK_WORDS).enumerate() {
        for (acc_word, lane_word) in acc.iter_mut().zip(sub_block.iter()) {
            *acc_word ^= *lane_word;
        }
        salsa20_8(&mut acc);
        // Even intermediates land in the first half, odd in the second.
        let pos = (i / 2) * SUB_BLOCK_WORDS + if i % 2 == 0 { 0 } else { half };
        scratch[pos..pos + SUB_BLOCK_WORDS].copy_from_slice(&acc);
    }

    lane.copy_from_slice(scratch);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn words_from_hex(hex_bytes: &str) -> Vec<u32> {
        hex::decode(hex_bytes)
            .unwrap()
            .chunks_exact(4)
            .map(|chunk| u32::from_le_bytes(chunk.try_into().unwrap()))
            .collect()
    }

    #[test]
    fn rfc7914_section9_vector() {
        // r = 1: one lane of two 64-byte sub-blocks.
        let mut lane = words_from_hex(
            "f7ce0b653d2d72a4108cf5abe912ffdd\
             777616dbbb27a70e8204f3ae2d0f6fad\
             89f68f4811d1e87bcc3bd7400a9ffd29\
             094f0184639574f39ae5a1315217bcd7\
             894991447213bb226c25b54da86370fb\
             cd984380374666bb8ffcb5bf40c254b0\
             67d27c51ce4ad5fed829c90b505a571b\
             7f4d1cad6a523cda770e67bceaaf7e89",
        );
        let expected = words_from_hex(
            "a41f859c6608cc993b81cacb020cef05\
             044b2181a2fd337dfd7b1c6396682f29\
             b4393168e3c9e6bcfe6bc5b7a06d96ba\
             e424cc102c91745c24ad673dc7618f81\
             20edc975323881a80540f64c162dcd3c\
             21077cfe5f8d5fe2b1a4168f953678b7\
             7d3b3d803b60e4ab920996e59b4d53b6\
             5d2a225877d5edf5842cb9f14eefe425",
        );
        let mut scratch = vec![0u32; lane.len()];
        block_mix(&mut lane, &mut scratch);
        assert_eq!(lane, expected);
    }

    #[test]
    fn preserves_lane_length() {
        let mut lane = vec![7u32; 4 * SUB_BLOCK_WORDS]; // r = 2
        let mut scratch = vec![0u32; lane.len()];
        block_mix(&mut lane, &mut scratch);
        assert_eq!(lane.len(), 4 * SUB_BLOCK_WORDS);
    }
}
