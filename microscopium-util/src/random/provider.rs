//! Sampling through a shared reference.
//!
//! [`RandomState`] implements `rand::RngCore`, which needs `&mut self`. Code
//! that holds the handle by shared reference, or that wants to be generic
//! over where its randomness comes from, uses this trait instead.

use std::ops::Range;

use rand::distr::{uniform::SampleUniform, Distribution, StandardUniform};
use rand::Rng;

use super::RandomState;

/// Draws from a generator that may be shared between handles.
///
/// Each call takes the generator for the duration of one draw, so draws made
/// through aliased handles advance one common sequence, in whatever order
/// the callers get there.
pub trait RandomProvider: Clone {
    /// Draw a value from the standard distribution for `T`.
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>;

    /// Draw a value uniformly from the half-open `range`.
    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd;

    /// Draw an `f64` uniformly from `[0.0, 1.0)`.
    fn random_ratio(&self) -> f64;

    /// Return `true` with the given probability.
    ///
    /// A probability of 0.0 or less is never true; 1.0 or more is always true.
    fn random_bool(&self, probability: f64) -> bool;
}

impl RandomProvider for RandomState {
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>,
    {
        self.with_rng(|rng| rng.random())
    }

    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.with_rng(|rng| rng.random_range(range))
    }

    fn random_ratio(&self) -> f64 {
        self.with_rng(|rng| rng.random())
    }

    fn random_bool(&self, probability: f64) -> bool {
        self.random_ratio() < probability
    }
}
