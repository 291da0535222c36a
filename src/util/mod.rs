//! Shared utilities: wall-clock time and frame timing.

/// Wall clock and the checkpointed frame timer.
pub mod frame_timing;

#[cfg(test)]
pub(crate) mod test_rng;
