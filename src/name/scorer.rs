//! Simulated business name analysis

use crate::random::RandomSource;
use crate::types::{Memorability, NameScore, Pronunciation, Uniqueness};

/// Names up to this many characters count as memorable
pub const MEMORABLE_MAX_LEN: usize = 10;
/// Names up to this many characters count as easy to pronounce
pub const PRONOUNCEABLE_MAX_LEN: usize = 12;

const SCORE_BASE: u32 = 60;
const SCORE_SPAN: u32 = 40;
const UNIQUE_THRESHOLD: f64 = 0.5;

/// Scores a raw business name.
///
/// Length-derived labels are deterministic; `score` and `uniqueness` are
/// drawn from the random source, in that order.
pub struct NameScorer<R> {
    rng: R,
}

impl<R: RandomSource> NameScorer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn score(&mut self, name: &str) -> NameScore {
        let length = name.chars().count();
        let score = self.rng.next_in(SCORE_BASE, SCORE_SPAN);
        let uniqueness = if self.rng.next_f64() > UNIQUE_THRESHOLD {
            Uniqueness::Unique
        } else {
            Uniqueness::Common
        };

        NameScore {
            score,
            length,
            memorable: if length <= MEMORABLE_MAX_LEN {
                Memorability::Good
            } else {
                Memorability::TooLong
            },
            pronunciation: if length <= PRONOUNCEABLE_MAX_LEN {
                Pronunciation::Easy
            } else {
                Pronunciation::Complex
            },
            uniqueness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, ThreadRandom};

    #[test]
    fn test_bright_ideas() {
        let mut scorer = NameScorer::new(ScriptedRandom::new(vec![0.5, 0.9]));
        let score = scorer.score("Bright Ideas");
        assert_eq!(score.length, 12);
        assert_eq!(score.memorable, Memorability::TooLong);
        assert_eq!(score.pronunciation, Pronunciation::Easy);
        assert_eq!(score.score, 80);
        assert_eq!(score.uniqueness, Uniqueness::Unique);
    }

    #[test]
    fn test_length_thresholds() {
        let mut scorer = NameScorer::new(ThreadRandom);
        let ten = scorer.score("abcdefghij");
        assert_eq!(ten.memorable, Memorability::Good);
        let eleven = scorer.score("abcdefghijk");
        assert_eq!(eleven.memorable, Memorability::TooLong);
        assert_eq!(eleven.pronunciation, Pronunciation::Easy);
        let thirteen = scorer.score("abcdefghijklm");
        assert_eq!(thirteen.pronunciation, Pronunciation::Complex);
    }

    #[test]
    fn test_score_range() {
        let mut low = NameScorer::new(ScriptedRandom::constant(0.0));
        assert_eq!(low.score("x").score, 60);
        let mut high = NameScorer::new(ScriptedRandom::constant(0.9999));
        assert_eq!(high.score("x").score, 99);

        let mut scorer = NameScorer::new(ThreadRandom);
        for _ in 0..200 {
            let s = scorer.score("Acme").score;
            assert!((60..=99).contains(&s));
        }
    }

    #[test]
    fn test_uniqueness_boundary() {
        let mut scorer = NameScorer::new(ScriptedRandom::new(vec![0.0, 0.5]));
        assert_eq!(scorer.score("Acme").uniqueness, Uniqueness::Common);
    }

    #[test]
    fn test_empty_name() {
        let mut scorer = NameScorer::new(ThreadRandom);
        let score = scorer.score("");
        assert_eq!(score.length, 0);
        assert_eq!(score.memorable, Memorability::Good);
        assert_eq!(score.pronunciation, Pronunciation::Easy);
    }
}
