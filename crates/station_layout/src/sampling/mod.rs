//! Station layout sampling.
//!
//! This module holds the grid-accelerated rejection sampler that places antennas
//! inside a circular station with a minimum separation, together with the cell
//! grid it uses to restrict neighbour checks to nearby points.
use rand::RngCore;

pub mod grid;
pub mod random_layout;

pub use grid::CellGrid;
pub use random_layout::RandomLayoutSampling;

/// Generate a random float in the range [0, 1).
///
/// Uses the top 53 bits of a `u64` draw so every value is exactly representable.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Draw an index in `0..len` from `rng`. `len` must be non-zero.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0);
    ((rand01(rng) * len as f64) as usize).min(len - 1)
}
