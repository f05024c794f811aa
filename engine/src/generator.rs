//! Random sequence generation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{EngineError, EngineResult};
use crate::types::ValueRange;

/// Generate a fresh sequence of `length` values drawn uniformly from `range`.
///
/// A zero length is rejected outright; the caller keeps its previous
/// sequence and no partial result is produced.
pub fn generate(length: usize, range: ValueRange) -> EngineResult<Vec<u32>> {
    validate(length)?;
    let mut rng = rand::thread_rng();
    Ok(fill(&mut rng, length, range))
}

/// Seeded variant of [`generate`] for reproducible demos and tests.
pub fn generate_seeded(length: usize, range: ValueRange, seed: u64) -> EngineResult<Vec<u32>> {
    validate(length)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(fill(&mut rng, length, range))
}

fn validate(length: usize) -> EngineResult<()> {
    if length == 0 {
        return Err(EngineError::InvalidSequenceLength { requested: length });
    }
    Ok(())
}

fn fill<R: Rng>(rng: &mut R, length: usize, range: ValueRange) -> Vec<u32> {
    (0..length)
        .map(|_| rng.gen_range(range.min()..=range.max()))
        .collect()
}
