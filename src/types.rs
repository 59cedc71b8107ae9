//! Core types and structures for domain-scout

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where a suggestion came from: the bare name on a TLD, or a decorated name on `.com`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Primary,
    Variation,
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionKind::Primary => write!(f, "primary"),
            SuggestionKind::Variation => write!(f, "variation"),
        }
    }
}

/// Registry availability status, as reported by a live lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Taken,
    Unknown,
    Error,
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "available"),
            AvailabilityStatus::Taken => write!(f, "taken"),
            AvailabilityStatus::Unknown => write!(f, "unknown"),
            AvailabilityStatus::Error => write!(f, "error"),
        }
    }
}

/// A candidate domain with simulated availability and price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainSuggestion {
    pub domain: String,
    pub available: bool,
    /// Annual price in whole currency units
    pub price: u32,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub popular: bool,
    pub kind: SuggestionKind,
    /// Set once a live registry lookup has answered for this domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_status: Option<AvailabilityStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Memorability {
    Good,
    #[serde(rename = "Too Long")]
    TooLong,
}

impl std::fmt::Display for Memorability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Memorability::Good => write!(f, "Good"),
            Memorability::TooLong => write!(f, "Too Long"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pronunciation {
    Easy,
    Complex,
}

impl std::fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pronunciation::Easy => write!(f, "Easy"),
            Pronunciation::Complex => write!(f, "Complex"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Uniqueness {
    Unique,
    Common,
}

impl std::fmt::Display for Uniqueness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Uniqueness::Unique => write!(f, "Unique"),
            Uniqueness::Common => write!(f, "Common"),
        }
    }
}

/// Simulated quality analysis of a business name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameScore {
    /// Always within 60..=99
    pub score: u32,
    /// Character count of the name as entered
    pub length: usize,
    pub memorable: Memorability,
    pub pronunciation: Pronunciation,
    pub uniqueness: Uniqueness,
}

/// Everything one search produces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub business_name: String,
    pub normalized: String,
    pub suggestions: Vec<DomainSuggestion>,
    pub name_score: NameScore,
    pub alternatives: Vec<String>,
    pub searched_at: DateTime<Utc>,
}

/// Result tabs over a suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainView {
    #[default]
    All,
    Available,
    Popular,
}

impl DomainView {
    pub fn matches(&self, suggestion: &DomainSuggestion) -> bool {
        match self {
            DomainView::All => true,
            DomainView::Available => suggestion.available,
            DomainView::Popular => suggestion.popular,
        }
    }
}

impl std::str::FromStr for DomainView {
    type Err = crate::error::ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(DomainView::All),
            "available" => Ok(DomainView::Available),
            "popular" => Ok(DomainView::Popular),
            other => Err(crate::error::ScoutError::validation(format!(
                "unknown view '{}', expected all, available or popular",
                other
            ))),
        }
    }
}

impl std::fmt::Display for DomainView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainView::All => write!(f, "All Domains"),
            DomainView::Available => write!(f, "Available"),
            DomainView::Popular => write!(f, "Popular TLDs"),
        }
    }
}

/// Live registry lookup result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainResult {
    pub domain: String,
    pub status: AvailabilityStatus,
    pub checked_at: DateTime<Utc>,
    pub check_duration: Option<Duration>,
    pub registrar: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub nameservers: Vec<String>,
    pub error_message: Option<String>,
}

impl DomainResult {
    /// A result that carries no registry data, only a status and reason
    pub fn unresolved(domain: impl Into<String>, status: AvailabilityStatus, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            status,
            checked_at: Utc::now(),
            check_duration: None,
            registrar: None,
            creation_date: None,
            expiration_date: None,
            nameservers: Vec::new(),
            error_message: Some(message.into()),
        }
    }
}

/// Configuration for live domain checking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub concurrent_checks: usize,
    pub timeout: Duration,
    /// Replaces the per-TLD RDAP base URL for every lookup
    pub rdap_base_url: Option<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            concurrent_checks: 10,
            timeout: Duration::from_secs(10),
            rdap_base_url: None,
        }
    }
}

/// Counters kept by the domain checker, shareable across tasks
#[derive(Debug, Default)]
pub struct CheckMetrics {
    inner: Mutex<MetricsSnapshot>,
}

impl CheckMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_check(&self, duration: Duration) {
        let mut inner = self.inner.lock();
        inner.domains_checked += 1;
        inner.total_check_time_ms += duration.as_millis() as u64;
    }

    pub fn record_error(&self) {
        self.inner.lock().errors_encountered += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        *self.inner.lock()
    }
}

/// Point-in-time copy of [`CheckMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub domains_checked: u64,
    pub errors_encountered: u64,
    pub total_check_time_ms: u64,
}

impl MetricsSnapshot {
    pub fn avg_check_time_ms(&self) -> f64 {
        if self.domains_checked == 0 {
            0.0
        } else {
            self.total_check_time_ms as f64 / self.domains_checked as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(domain: &str, available: bool, popular: bool) -> DomainSuggestion {
        DomainSuggestion {
            domain: domain.to_string(),
            available,
            price: 12,
            popular,
            kind: SuggestionKind::Primary,
            registry_status: None,
        }
    }

    #[test]
    fn test_view_matching() {
        let s = suggestion("acme.com", false, true);
        assert!(DomainView::All.matches(&s));
        assert!(!DomainView::Available.matches(&s));
        assert!(DomainView::Popular.matches(&s));
    }

    #[test]
    fn test_view_parsing() {
        assert_eq!("Available".parse::<DomainView>().unwrap(), DomainView::Available);
        assert!("cheap".parse::<DomainView>().is_err());
    }

    #[test]
    fn test_metrics() {
        let metrics = CheckMetrics::new();
        assert_eq!(metrics.snapshot().avg_check_time_ms(), 0.0);

        metrics.record_check(Duration::from_millis(30));
        metrics.record_check(Duration::from_millis(10));
        metrics.record_error();

        let snap = metrics.snapshot();
        assert_eq!(snap.domains_checked, 2);
        assert_eq!(snap.errors_encountered, 1);
        assert_eq!(snap.avg_check_time_ms(), 20.0);
    }

    #[test]
    fn test_serialized_labels() {
        let json = serde_json::to_value(Memorability::TooLong).unwrap();
        assert_eq!(json, "Too Long");

        let json = serde_json::to_value(suggestion("acme.net", true, false)).unwrap();
        assert_eq!(json["kind"], "primary");
        assert!(json.get("popular").is_none());
    }
}
