//! Domain Scout - business name analysis and domain suggestions
//!
//! Turns a business name into a DNS-safe token, proposes domains on common
//! TLDs and `.com` variations, scores the name, and suggests alternatives.
//! Availability, prices and scores are simulated; registry verification over
//! RDAP is available as an opt-in.

pub mod config;
pub mod domain;
pub mod error;
pub mod finance;
pub mod logging;
pub mod name;
pub mod random;
pub mod rdap;
pub mod session;
pub mod suggest;
pub mod types;

// Re-export commonly used types
pub use config::ScoutConfig;
pub use error::{Result, ScoutError};
pub use random::{AnyRandom, RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use session::DomainSession;
pub use types::{
    AvailabilityStatus, CheckConfig, DomainResult, DomainSuggestion, DomainView, Memorability,
    NameScore, Pronunciation, SearchOutcome, SuggestionKind, Uniqueness,
};

// Re-export main functionality
pub use domain::DomainChecker;
pub use name::{alternative_names, normalize, NameScorer};
pub use suggest::SuggestionGenerator;

/// Load `.env` (if present) and read configuration from the environment
pub fn init() -> Result<ScoutConfig> {
    dotenv::dotenv().ok();
    ScoutConfig::from_env()
}

/// Run one stateless search with the thread RNG.
///
/// Returns `None` for blank input.
pub fn search(business_name: &str) -> Option<SearchOutcome> {
    DomainSession::new().search(business_name).cloned()
}
