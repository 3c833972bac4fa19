//! Uniform random sampling.
//!
//! [`RandomSampler`] wraps an injected random number generator and draws
//! either a fraction in `[0, 1)` or an integer from an inclusive [`Range`].
//! The two modes are explicit ([`SampleMode`]) rather than inferred from
//! the bounds, so a request for the single value `0` is never mistaken for
//! a fractional draw.
//!
//! # Reproducibility
//!
//! A sampler built with [`RandomSampler::seeded`] produces the same sequence
//! of draws on every run. Callers that generate several regions must share
//! one sampler (or give each region its own seeded sampler) to keep output
//! stable under a fixed seed.
//!
//! ```
//! use motif_core::sampler::{Range, RandomSampler};
//!
//! let mut a = RandomSampler::seeded(7);
//! let mut b = RandomSampler::seeded(7);
//! let range = Range::new(1, 6).unwrap();
//! assert_eq!(a.integer(range), b.integer(range));
//! ```

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;

/// Error returned when a range is constructed with `lo > hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid range [{lo}, {hi}]: lower bound exceeds upper bound")]
pub struct InvalidRange {
    pub lo: u32,
    pub hi: u32,
}

/// An inclusive integer range `[lo, hi]` with `lo <= hi`.
///
/// Converts from a `(lo, hi)` pair with [`TryFrom`]; inverted pairs are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    lo: u32,
    hi: u32,
}

impl Range {
    /// Creates a new inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRange`] if `lo > hi`.
    ///
    /// ```
    /// # use motif_core::sampler::Range;
    /// assert!(Range::new(0, 1).is_ok());
    /// assert!(Range::new(5, 5).is_ok());
    /// assert!(Range::new(6, 5).is_err());
    /// ```
    pub fn new(lo: u32, hi: u32) -> Result<Self, InvalidRange> {
        if lo > hi {
            return Err(InvalidRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// A range containing exactly one value
    pub fn single(value: u32) -> Self {
        Self {
            lo: value,
            hi: value,
        }
    }

    /// Creates a range covering two bounds given in either order.
    pub fn spanning(a: u32, b: u32) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    /// The range `[0, hi]`
    pub fn up_to(hi: u32) -> Self {
        Self { lo: 0, hi }
    }

    pub fn lo(self) -> u32 {
        self.lo
    }

    pub fn hi(self) -> u32 {
        self.hi
    }

    /// Returns true if `value` lies within the range
    pub fn contains(self, value: u32) -> bool {
        (self.lo..=self.hi).contains(&value)
    }
}

impl TryFrom<(u32, u32)> for Range {
    type Error = InvalidRange;

    fn try_from((lo, hi): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(lo, hi)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Which kind of value a draw should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    /// A uniform fraction in `[0, 1)`
    Fraction,
    /// A uniform integer in the inclusive range
    Integer(Range),
}

/// The result of a [`RandomSampler::sample`] draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Fraction(f64),
    Integer(u32),
}

/// A uniform sampler over an injected random number generator.
#[derive(Debug, Clone)]
pub struct RandomSampler<R = StdRng> {
    rng: R,
}

impl RandomSampler<StdRng> {
    /// Creates a sampler whose draws are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a sampler seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSampler<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a value in the requested mode.
    pub fn sample(&mut self, mode: SampleMode) -> Sample {
        match mode {
            SampleMode::Fraction => Sample::Fraction(self.fraction()),
            SampleMode::Integer(range) => Sample::Integer(self.integer(range)),
        }
    }

    /// Draws a uniform fraction in `[0, 1)`.
    pub fn fraction(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Draws a uniform integer in `[range.lo(), range.hi()]`.
    pub fn integer(&mut self, range: Range) -> u32 {
        self.rng.random_range(range.lo..=range.hi)
    }

    /// Draws a color channel value in `[0, max]`.
    pub fn channel(&mut self, max: u8) -> u8 {
        self.rng.random_range(0..=max)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert_eq!(Range::new(10, 3), Err(InvalidRange { lo: 10, hi: 3 }));
    }

    #[test]
    fn test_range_try_from_pair() {
        assert_eq!(Range::try_from((2, 9)), Range::new(2, 9));
        assert_eq!(Range::try_from((9, 2)), Err(InvalidRange { lo: 9, hi: 2 }));
    }

    #[test]
    fn test_range_error_message() {
        let err = Range::new(2, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid range [2, 1]: lower bound exceeds upper bound"
        );
    }

    #[test]
    fn test_range_helpers() {
        assert_eq!(Range::single(4), Range::new(4, 4).unwrap());
        assert_eq!(Range::up_to(9), Range::new(0, 9).unwrap());
        assert_eq!(Range::spanning(8, 3), Range::new(3, 8).unwrap());
        assert!(Range::up_to(9).contains(0));
        assert!(Range::up_to(9).contains(9));
        assert!(!Range::up_to(9).contains(10));
        assert_eq!(Range::new(3, 8).unwrap().to_string(), "[3, 8]");
    }

    #[test]
    fn test_zero_range_is_bounded_not_fractional() {
        let mut sampler = RandomSampler::seeded(1);
        for _ in 0..100 {
            assert_eq!(
                sampler.sample(SampleMode::Integer(Range::single(0))),
                Sample::Integer(0)
            );
        }
    }

    #[test]
    fn test_seeded_samplers_agree() {
        let mut a = RandomSampler::seeded(42);
        let mut b = RandomSampler::seeded(42);
        let range = Range::new(0, 1000).unwrap();
        for _ in 0..50 {
            assert_eq!(a.integer(range), b.integer(range));
            assert_eq!(a.fraction().to_bits(), b.fraction().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = RandomSampler::seeded(1);
        let mut b = RandomSampler::seeded(2);
        let range = Range::new(0, u32::MAX).unwrap();
        let draws_a: Vec<u32> = (0..8).map(|_| a.integer(range)).collect();
        let draws_b: Vec<u32> = (0..8).map(|_| b.integer(range)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_integer_covers_whole_range() {
        let mut sampler = RandomSampler::seeded(3);
        let range = Range::new(5, 14).unwrap();
        let mut counts = [0usize; 10];
        let trials = 20_000;
        for _ in 0..trials {
            let value = sampler.integer(range);
            counts[(value - 5) as usize] += 1;
        }

        // Chi-square with 9 degrees of freedom; 27.88 is the 0.001 critical value
        let expected = trials as f64 / counts.len() as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&count| {
                let diff = count as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(counts.iter().all(|&count| count > 0));
        assert!(chi_square < 27.88, "chi-square too large: {chi_square}");
    }

    #[test]
    fn test_channel_respects_max() {
        let mut sampler = RandomSampler::seeded(9);
        for _ in 0..1000 {
            assert!(sampler.channel(5) <= 5);
            assert_eq!(sampler.channel(0), 0);
        }
    }

    proptest! {
        #[test]
        fn prop_integer_within_bounds(a in any::<u32>(), b in any::<u32>(), seed in any::<u64>()) {
            let range = Range::new(a.min(b), a.max(b)).unwrap();
            let mut sampler = RandomSampler::seeded(seed);
            for _ in 0..32 {
                prop_assert!(range.contains(sampler.integer(range)));
            }
        }

        #[test]
        fn prop_fraction_in_unit_interval(seed in any::<u64>()) {
            let mut sampler = RandomSampler::seeded(seed);
            for _ in 0..64 {
                let value = sampler.fraction();
                prop_assert!((0.0..1.0).contains(&value));
            }
        }

        #[test]
        fn prop_inverted_range_rejected(lo in 1u32..=u32::MAX, delta in 1u32..1000) {
            let hi = lo.saturating_sub(delta);
            prop_assume!(hi < lo);
            prop_assert!(Range::new(lo, hi).is_err());
        }
    }
}
