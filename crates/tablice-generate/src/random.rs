//! Randomness capability consumed by the generator.
//!
//! A source is owned by one generator at a time. When plates are generated
//! from several threads, give each thread its own source (for example
//! `rand::rng()`, which is thread-local) or wrap a shared one in a lock.

use rand::{Rng, RngCore};

/// Uniform integer draws in `[0, upper)`.
pub trait RandomSource {
    /// `upper` is always greater than zero.
    fn below(&mut self, upper: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn below(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted. Each value is
/// reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<usize>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, upper: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % upper
    }
}
