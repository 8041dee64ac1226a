//! Mixing Engine
//!
//! The memory-hard stage: block mixing, the sequential ROMix passes, and
//! lane scheduling.

pub mod blockmix;
pub mod parallel;
pub mod romix;

pub use parallel::mix_lanes;
