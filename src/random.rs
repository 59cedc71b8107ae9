//! Random sources behind simulated availability, prices and scores
//!
//! Every simulated value is drawn as a float in `[0, 1)`, so callers can swap
//! the thread RNG for a seeded or scripted source without changing formulas.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform floats in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// `floor(r * span) + base`
    fn next_in(&mut self, base: u32, span: u32) -> u32 {
        (self.next_f64() * span as f64).floor() as u32 + base
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Thread-local RNG; results are not reproducible
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Seeded RNG for reproducible runs
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Values are clamped into `[0, 1)`; an empty script always yields 0.0
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source that always returns `value`
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Runtime-selected source, so the CLI can pick seeded or thread RNG
#[derive(Debug, Clone)]
pub enum AnyRandom {
    Thread(ThreadRandom),
    Seeded(SeededRandom),
}

impl AnyRandom {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => AnyRandom::Seeded(SeededRandom::new(seed)),
            None => AnyRandom::Thread(ThreadRandom),
        }
    }
}

impl RandomSource for AnyRandom {
    fn next_f64(&mut self) -> f64 {
        match self {
            AnyRandom::Thread(r) => r.next_f64(),
            AnyRandom::Seeded(r) => r.next_f64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut r = ScriptedRandom::new(vec![0.1, 0.9]);
        assert_eq!(r.next_f64(), 0.1);
        assert_eq!(r.next_f64(), 0.9);
        assert_eq!(r.next_f64(), 0.1);
    }

    #[test]
    fn test_scripted_clamps_into_range() {
        let mut r = ScriptedRandom::new(vec![1.5, -0.2]);
        assert!(r.next_f64() < 1.0);
        assert_eq!(r.next_f64(), 0.0);
    }

    #[test]
    fn test_next_in_bounds() {
        assert_eq!(ScriptedRandom::constant(0.0).next_in(10, 30), 10);
        assert_eq!(ScriptedRandom::constant(0.999).next_in(10, 30), 39);
        assert_eq!(ScriptedRandom::constant(0.5).next_in(60, 40), 80);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..10 {
            let x = a.next_f64();
            assert_eq!(x, b.next_f64());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_thread_random_in_range() {
        let mut r = ThreadRandom;
        for _ in 0..100 {
            assert!((0.0..1.0).contains(&r.next_f64()));
        }
    }
}
