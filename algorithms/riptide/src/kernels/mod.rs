//! Mixing Kernels
//!
//! The fixed-size permutation primitives underneath the engine.

pub mod salsa;

/// Words in one Salsa state / scrypt sub-block.
pub const SUB_BLOCK_WORDS: usize = 16;
