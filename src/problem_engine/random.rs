//! The randomness capability every generator draws from.
//!
//! Generators never touch a platform RNG directly: they take any
//! [`RandomSource`], which is implemented for every [`rand::Rng`]. Tests plug
//! in a scripted source to force exact draws.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::ProblemError;

pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends inclusive.
    fn uniform_int(&mut self, min: u32, max: u32) -> u32;

    /// Uniform pick from `set` minus everything in `exclude`.
    fn pick_excluding<'a, T: PartialEq>(
        &mut self,
        set: &'a [T],
        exclude: &[T],
    ) -> Result<&'a T, ProblemError> {
        let pool: Vec<&T> = set.iter().filter(|item| !exclude.contains(item)).collect();
        if pool.is_empty() {
            return Err(ProblemError::ExhaustedPool {
                pool: set.len(),
                excluded: exclude.len(),
            });
        }
        let last = u32::try_from(pool.len() - 1).unwrap_or(u32::MAX);
        let idx = self.uniform_int(0, last) as usize;
        Ok(pool[idx.min(pool.len() - 1)])
    }
}

impl<R: Rng> RandomSource for R {
    fn uniform_int(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max, "empty range {min}..={max}");
        self.gen_range(min..=max)
    }
}

/// Seeded source when `seed` is given, entropy otherwise.
pub fn source_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_int_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let v = rng.uniform_int(3, 7);
            assert!((3..=7).contains(&v), "{v} escaped 3..=7");
        }
    }

    #[test]
    fn uniform_int_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<u32> = (0..200).map(|_| rng.uniform_int(0, 1)).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&1));
    }

    #[test]
    fn pick_excluding_never_returns_excluded() {
        let mut rng = StdRng::seed_from_u64(99);
        let set = ["a", "b", "c"];
        for _ in 0..100 {
            let picked = rng.pick_excluding(&set, &["a", "c"]).unwrap();
            assert_eq!(*picked, "b");
        }
    }

    #[test]
    fn pick_excluding_fails_on_empty_difference() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = rng.pick_excluding(&[1, 2], &[1, 2]).unwrap_err();
        assert_eq!(err, ProblemError::ExhaustedPool { pool: 2, excluded: 2 });
    }

    #[test]
    fn seeded_sources_repeat() {
        let draw = |seed| {
            let mut rng = source_from_seed(Some(seed));
            (0..8).map(|_| rng.uniform_int(0, 100)).collect::<Vec<_>>()
        };
        assert_eq!(draw(5), draw(5));
        assert_ne!(draw(5), draw(6));
    }
}
