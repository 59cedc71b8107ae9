//! Business name utilities: normalization, scoring and alternatives

mod alternatives;
mod normalizer;
mod scorer;

pub use alternatives::{alternative_names, ALTERNATIVE_SUFFIXES};
pub use normalizer::normalize;
pub use scorer::{NameScorer, MEMORABLE_MAX_LEN, PRONOUNCEABLE_MAX_LEN};
