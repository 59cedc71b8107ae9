//! Domain suggestion generator
//!
//! Combines a normalized name token with a fixed TLD set, prefixes and
//! suffixes. Availability and price are simulated through a [`RandomSource`].

use crate::random::RandomSource;
use crate::types::{DomainSuggestion, SuggestionKind};

/// TLDs tried against the bare name, in output order
pub const TLDS: [&str; 6] = [".com", ".net", ".org", ".io", ".co", ".biz"];

/// Words prepended to the name for `.com` variations
pub const PREFIXES: [&str; 4] = ["get", "use", "try", "join"];

/// Words appended to the name for `.com` variations
pub const SUFFIXES: [&str; 4] = ["app", "web", "site", "hub"];

/// TLD that marks the popular primary entry and hosts every variation
pub const POPULAR_TLD: &str = ".com";

/// Number of suggestions produced per call
pub const SUGGESTION_COUNT: usize = TLDS.len() + PREFIXES.len() + SUFFIXES.len();

const AVAILABILITY_THRESHOLD: f64 = 0.3;
const PRICE_BASE: u32 = 10;
const PRIMARY_PRICE_SPAN: u32 = 30;
const VARIATION_PRICE_SPAN: u32 = 20;

/// Generates [`DomainSuggestion`]s for a normalized name token
pub struct SuggestionGenerator<R> {
    rng: R,
}

impl<R: RandomSource> SuggestionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce the TLD group, then the prefix group, then the suffix group.
    pub fn generate(&mut self, token: &str) -> Vec<DomainSuggestion> {
        let mut suggestions = Vec::with_capacity(SUGGESTION_COUNT);

        for tld in TLDS {
            let mut suggestion = self.simulate(format!("{}{}", token, tld), SuggestionKind::Primary);
            suggestion.popular = tld == POPULAR_TLD;
            suggestions.push(suggestion);
        }

        for prefix in PREFIXES {
            suggestions.push(self.simulate(
                format!("{}{}{}", prefix, token, POPULAR_TLD),
                SuggestionKind::Variation,
            ));
        }

        for suffix in SUFFIXES {
            suggestions.push(self.simulate(
                format!("{}{}{}", token, suffix, POPULAR_TLD),
                SuggestionKind::Variation,
            ));
        }

        tracing::debug!(
            token = %token,
            total = suggestions.len(),
            available = suggestions.iter().filter(|s| s.available).count(),
            "Generated domain suggestions"
        );

        suggestions
    }

    fn simulate(&mut self, domain: String, kind: SuggestionKind) -> DomainSuggestion {
        let available = self.rng.next_f64() > AVAILABILITY_THRESHOLD;
        let span = match kind {
            SuggestionKind::Primary => PRIMARY_PRICE_SPAN,
            SuggestionKind::Variation => VARIATION_PRICE_SPAN,
        };
        let price = self.rng.next_in(PRICE_BASE, span);

        DomainSuggestion {
            domain,
            available,
            price,
            popular: false,
            kind,
            registry_status: None,
        }
    }
}
