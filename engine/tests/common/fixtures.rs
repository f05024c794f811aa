//! Test fixtures and data for engine tests

/// Standard test data
pub struct TestFixtures;

impl TestFixtures {
    /// Length and seed for the standard reproducible run
    pub const RUN_LENGTH: usize = 24;
    pub const SEED: u64 = 99;

    /// Hand-checked scenario inputs
    pub const SHORT_SCRAMBLE: [u32; 4] = [5, 3, 8, 1];

    /// A sequence long enough that a paced run stays in flight while the
    /// test acts on it
    pub fn long_scramble() -> Vec<u32> {
        (0..50u32).map(|i| (i * 37 + 11) % 300 + 20).collect()
    }
}
