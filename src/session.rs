//! Search session: the state a single user's domain search screen holds

use chrono::Utc;

use crate::error::{Result, ScoutError};
use crate::name::{alternative_names, normalize, NameScorer};
use crate::random::{RandomSource, ThreadRandom};
use crate::suggest::SuggestionGenerator;
use crate::types::{AvailabilityStatus, DomainResult, DomainSuggestion, DomainView, SearchOutcome};
use crate::validation_error;

/// Transient search state. Each search replaces the previous outcome.
pub struct DomainSession<R = ThreadRandom> {
    rng: R,
    outcome: Option<SearchOutcome>,
    selected: Option<usize>,
    history: Vec<String>,
}

impl DomainSession<ThreadRandom> {
    pub fn new() -> Self {
        Self::with_random(ThreadRandom)
    }
}

impl Default for DomainSession<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> DomainSession<R> {
    pub fn with_random(rng: R) -> Self {
        Self {
            rng,
            outcome: None,
            selected: None,
            history: Vec::new(),
        }
    }

    /// Run a search for `business_name`.
    ///
    /// Blank input is ignored and returns `None` without touching any state.
    pub fn search(&mut self, business_name: &str) -> Option<&SearchOutcome> {
        if is_blank(business_name) {
            tracing::debug!("Ignoring blank search");
            return None;
        }

        if !self.history.iter().any(|h| h == business_name) {
            self.history.push(business_name.to_string());
        }

        let normalized = normalize(business_name);
        let suggestions = SuggestionGenerator::new(&mut self.rng).generate(&normalized);
        let name_score = NameScorer::new(&mut self.rng).score(business_name);
        let alternatives = alternative_names(business_name);

        tracing::debug!(
            name = %business_name,
            normalized = %normalized,
            score = name_score.score,
            "Search completed"
        );

        self.selected = None;
        self.outcome = Some(SearchOutcome {
            business_name: business_name.to_string(),
            normalized,
            suggestions,
            name_score,
            alternatives,
            searched_at: Utc::now(),
        });
        self.outcome.as_ref()
    }

    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    /// Names searched so far, first occurrence order, no duplicates
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Suggestions of the current outcome shown under `view`
    pub fn view(&self, view: DomainView) -> Vec<&DomainSuggestion> {
        self.outcome
            .iter()
            .flat_map(|o| o.suggestions.iter())
            .filter(|s| view.matches(s))
            .collect()
    }

    /// Select an available suggestion from the current outcome
    pub fn select(&mut self, domain: &str) -> Result<&DomainSuggestion> {
        let outcome = self
            .outcome
            .as_ref()
            .ok_or_else(|| ScoutError::validation("no search has been run yet"))?;

        let index = outcome
            .suggestions
            .iter()
            .position(|s| s.domain == domain)
            .ok_or_else(|| validation_error!("'{}' is not among the current suggestions", domain))?;

        if !outcome.suggestions[index].available {
            return Err(validation_error!("'{}' is not available", domain));
        }

        self.selected = Some(index);
        Ok(&outcome.suggestions[index])
    }

    pub fn selected(&self) -> Option<&DomainSuggestion> {
        let index = self.selected?;
        self.outcome.as_ref()?.suggestions.get(index)
    }

    /// Alternative name at `index` of the current outcome
    pub fn alternative(&self, index: usize) -> Option<&str> {
        self.outcome
            .as_ref()?
            .alternatives
            .get(index)
            .map(String::as_str)
    }

    /// Replace simulated availability with registry answers.
    ///
    /// `Unknown` and `Error` results keep the simulated flag but are still
    /// recorded on the suggestion. A selection that became unavailable is dropped.
    pub fn apply_registry_results(&mut self, results: &[DomainResult]) {
        let Some(outcome) = self.outcome.as_mut() else {
            return;
        };

        for result in results {
            if let Some(suggestion) = outcome.suggestions.iter_mut().find(|s| s.domain == result.domain) {
                suggestion.registry_status = Some(result.status);
                match result.status {
                    AvailabilityStatus::Available => suggestion.available = true,
                    AvailabilityStatus::Taken => suggestion.available = false,
                    AvailabilityStatus::Unknown | AvailabilityStatus::Error => {}
                }
            }
        }

        if let Some(index) = self.selected {
            if !outcome.suggestions[index].available {
                self.selected = None;
            }
        }
    }
}

/// Whitespace as browsers trim form input: the byte-order mark counts, NEL does not
fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use crate::types::{Memorability, Pronunciation};

    fn session() -> DomainSession<ScriptedRandom> {
        // alternates available and taken: 0.9 > 0.3, 0.1 <= 0.3
        DomainSession::with_random(ScriptedRandom::new(vec![0.9, 0.1]))
    }

    #[test]
    fn test_bright_ideas_scenario() {
        let mut session = DomainSession::new();
        let outcome = session.search("Bright Ideas").unwrap();

        assert_eq!(outcome.normalized, "brightideas");
        let com = outcome.suggestions.iter().find(|s| s.domain == "brightideas.com").unwrap();
        assert!(com.popular);
        assert_eq!(outcome.name_score.length, 12);
        assert_eq!(outcome.name_score.memorable, Memorability::TooLong);
        assert_eq!(outcome.name_score.pronunciation, Pronunciation::Easy);
        assert_eq!(
            outcome.alternatives,
            vec![
                "Bright Ideas Hub",
                "Bright Ideas Pro",
                "Bright Ideas Plus",
                "Bright Ideas Go",
                "Bright Ideas Now",
            ]
        );
    }

    #[test]
    fn test_blank_search_is_noop() {
        let mut session = session();
        session.search("Acme").unwrap();
        let before = session.outcome().unwrap().searched_at;

        assert!(session.search("").is_none());
        assert!(session.search("   ").is_none());

        assert_eq!(session.outcome().unwrap().business_name, "Acme");
        assert_eq!(session.outcome().unwrap().searched_at, before);
        assert_eq!(session.history(), ["Acme"]);
    }

    #[test]
    fn test_blank_search_on_fresh_session() {
        let mut session = session();
        assert!(session.search("\t\n").is_none());
        assert!(session.outcome().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_blank_matches_form_trimming() {
        let mut session = session();
        assert!(session.search("\u{feff}").is_none());
        assert!(session.search(" \u{feff}\u{a0}\u{2028}").is_none());
        assert!(session.history().is_empty());

        let outcome = session.search("\u{85}").unwrap();
        assert_eq!(outcome.normalized, "");
        assert_eq!(session.history(), ["\u{85}"]);
    }

    #[test]
    fn test_history_dedupes_in_first_occurrence_order() {
        let mut session = session();
        session.search("Acme");
        session.search("Globex");
        session.search("Acme");
        session.search("acme");
        assert_eq!(session.history(), ["Acme", "Globex", "acme"]);
        assert_eq!(session.outcome().unwrap().business_name, "acme");
    }

    #[test]
    fn test_views() {
        let mut session = session();
        session.search("Acme");
        assert_eq!(session.view(DomainView::All).len(), 14);
        // each suggestion draws availability then price, so with a two-value
        // script every suggestion sees 0.9 for availability
        assert_eq!(session.view(DomainView::Available).len(), 14);
        let popular = session.view(DomainView::Popular);
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].domain, "acme.com");
    }

    #[test]
    fn test_select_requires_available_suggestion() {
        let mut session = DomainSession::with_random(ScriptedRandom::new(vec![0.9, 0.0, 0.1, 0.0]));
        assert!(session.select("acme.com").is_err());

        session.search("Acme");
        assert_eq!(session.select("acme.com").unwrap().domain, "acme.com");
        assert_eq!(session.selected().unwrap().domain, "acme.com");

        // acme.net drew 0.1 for availability
        assert!(session.select("acme.net").is_err());
        assert!(session.select("nope.com").is_err());
        assert_eq!(session.selected().unwrap().domain, "acme.com");

        session.search("Globex");
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_alternative_lookup() {
        let mut session = session();
        assert!(session.alternative(0).is_none());
        session.search("Acme");
        assert_eq!(session.alternative(1), Some("Acme Pro"));
        assert!(session.alternative(5).is_none());
    }

    #[test]
    fn test_apply_registry_results() {
        let mut session = session();
        session.search("Acme");
        session.select("acme.com").unwrap();

        session.apply_registry_results(&[
            DomainResult::unresolved("acme.com", AvailabilityStatus::Taken, "registered"),
            DomainResult::unresolved("acme.net", AvailabilityStatus::Unknown, "no answer"),
            DomainResult::unresolved("elsewhere.com", AvailabilityStatus::Available, "ignored"),
        ]);

        let outcome = session.outcome().unwrap();
        assert!(!outcome.suggestions[0].available);
        assert_eq!(outcome.suggestions[0].registry_status, Some(AvailabilityStatus::Taken));
        assert!(outcome.suggestions[1].available);
        assert_eq!(outcome.suggestions[1].registry_status, Some(AvailabilityStatus::Unknown));
        assert!(session.selected().is_none());
    }
}
