//! Domain availability checker backed by RDAP

use crate::domain::{DomainValidator, RegistryLookup, RegistryRecord};
use crate::error::{Result, ScoutError};
use crate::rdap::registry::rdap_domain_url;
use crate::types::{AvailabilityStatus, CheckConfig, CheckMetrics, DomainResult, MetricsSnapshot};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::time::timeout;

/// Checks suggested domains against their registries with bounded concurrency
pub struct DomainChecker {
    config: CheckConfig,
    semaphore: Semaphore,
    lookup: Arc<dyn RegistryLookup>,
    validator: DomainValidator,
    metrics: CheckMetrics,
}

impl DomainChecker {
    /// Create a new domain checker with default configuration
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    /// Create a checker that queries RDAP servers
    pub fn with_config(config: CheckConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("domain-scout/", env!("CARGO_PKG_VERSION")))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                Client::new()
            });

        let lookup = Arc::new(RdapLookup::new(client, config.rdap_base_url.clone(), config.timeout));
        Self::with_lookup(config, lookup)
    }

    /// Create a checker around any registry lookup
    pub fn with_lookup(config: CheckConfig, lookup: Arc<dyn RegistryLookup>) -> Self {
        Self {
            semaphore: Semaphore::new(config.concurrent_checks.max(1)),
            config,
            lookup,
            validator: DomainValidator::new(),
            metrics: CheckMetrics::new(),
        }
    }

    /// Check a single domain.
    ///
    /// Malformed domains are an error; lookup failures are reported as an
    /// `Unknown` result so one bad registry does not sink a batch.
    pub async fn check_domain(&self, domain: &str) -> Result<DomainResult> {
        let domain = self.validator.validate(domain)?;

        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| ScoutError::internal(format!("Failed to acquire semaphore: {}", e)))?;

        let start_time = Instant::now();
        let timeout_secs = self.config.timeout.as_secs();
        let outcome = timeout(self.config.timeout, self.lookup.lookup(&domain))
            .await
            .map_err(|_| ScoutError::timeout("Registry lookup", timeout_secs))
            .and_then(|r| r);
        let duration = start_time.elapsed();

        match outcome {
            Ok(record) => {
                self.metrics.record_check(duration);

                tracing::debug!(
                    domain = %domain,
                    method = self.lookup.method_name(),
                    status = ?record.status,
                    duration_ms = %duration.as_millis(),
                    "Domain check completed"
                );

                Ok(DomainResult {
                    domain,
                    status: record.status,
                    checked_at: Utc::now(),
                    check_duration: Some(duration),
                    registrar: record.registrar,
                    creation_date: record.creation_date,
                    expiration_date: record.expiration_date,
                    nameservers: record.nameservers,
                    error_message: None,
                })
            }
            Err(e) => {
                self.metrics.record_error();

                tracing::warn!(
                    domain = %domain,
                    method = self.lookup.method_name(),
                    error = %e,
                    duration_ms = %duration.as_millis(),
                    "Domain check failed"
                );

                let mut result = DomainResult::unresolved(domain, AvailabilityStatus::Unknown, e.to_string());
                result.check_duration = Some(duration);
                Ok(result)
            }
        }
    }

    /// Check multiple domains concurrently; one result per input, in input order
    pub async fn check_domains(&self, domains: &[String]) -> Vec<DomainResult> {
        let batch_start = Instant::now();
        let futures = domains.iter().map(|domain| self.check_domain(domain));
        let results = join_all(futures).await;

        let results: Vec<DomainResult> = domains
            .iter()
            .zip(results)
            .map(|(domain, result)| {
                result.unwrap_or_else(|e| {
                    tracing::warn!(domain = %domain, error = %e, "Skipping invalid domain");
                    DomainResult::unresolved(domain.clone(), AvailabilityStatus::Error, e.to_string())
                })
            })
            .collect();

        let batch_duration = batch_start.elapsed();
        tracing::info!(
            domains_requested = %domains.len(),
            available = %results.iter().filter(|r| r.status == AvailabilityStatus::Available).count(),
            taken = %results.iter().filter(|r| r.status == AvailabilityStatus::Taken).count(),
            batch_duration_ms = %batch_duration.as_millis(),
            "Batch domain check completed"
        );

        results
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for DomainChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// RDAP lookup over HTTP
pub struct RdapLookup {
    client: Client,
    base_override: Option<String>,
    timeout: Duration,
}

impl RdapLookup {
    /// `timeout` should match the one the client was built with; it only
    /// labels timeout errors
    pub fn new(client: Client, base_override: Option<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_override,
            timeout,
        }
    }

    fn request_error(&self, err: reqwest::Error, url: &str) -> ScoutError {
        if err.is_timeout() {
            ScoutError::timeout("RDAP request", self.timeout.as_secs())
        } else if err.is_connect() {
            ScoutError::network("Connection failed", None, Some(url.to_string()))
        } else {
            ScoutError::network(err.to_string(), err.status().map(|s| s.as_u16()), Some(url.to_string()))
        }
    }

    /// A 2xx domain answer means the object exists, whatever it carries
    fn parse_rdap_response(response: RdapResponse) -> RegistryRecord {
        let registrar = response
            .entities
            .iter()
            .find(|e| e.roles.iter().any(|r| r == "registrar"))
            .and_then(|e| e.vcard_array.as_ref())
            .and_then(vcard_full_name);

        let event_date = |action: &str| {
            response
                .events
                .iter()
                .find(|e| e.event_action == action)
                .and_then(|e| e.event_date.parse::<DateTime<Utc>>().ok())
        };

        RegistryRecord {
            status: AvailabilityStatus::Taken,
            registrar,
            creation_date: event_date("registration"),
            expiration_date: event_date("expiration"),
            nameservers: response
                .nameservers
                .iter()
                .map(|ns| ns.ldh_name.to_lowercase())
                .collect(),
        }
    }
}

#[async_trait]
impl RegistryLookup for RdapLookup {
    async fn lookup(&self, domain: &str) -> Result<RegistryRecord> {
        let url = rdap_domain_url(domain, self.base_override.as_deref())
            .ok_or_else(|| ScoutError::domain_check(domain, "No RDAP server known for this TLD"))?;

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/rdap+json, application/json")
            .send()
            .await
            .map_err(|e| self.request_error(e, &url))?;

        let status = response.status();

        if status.as_u16() == 404 {
            return Ok(RegistryRecord::available());
        }

        if !status.is_success() {
            return Err(ScoutError::network(
                format!("RDAP request failed with status {}", status),
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let text = response.text().await.map_err(|e| self.request_error(e, &url))?;
        let rdap_response: RdapResponse =
            serde_json::from_str(&text).map_err(|e| ScoutError::parse(e.to_string(), Some(text)))?;

        Ok(Self::parse_rdap_response(rdap_response))
    }

    fn method_name(&self) -> &'static str {
        "rdap"
    }
}

/// `fn` property of a jCard: `["vcard", [["fn", {}, "text", "Name"], ...]]`
fn vcard_full_name(vcard: &serde_json::Value) -> Option<String> {
    vcard
        .get(1)?
        .as_array()?
        .iter()
        .filter_map(|prop| prop.as_array())
        .find(|prop| prop.first().and_then(|v| v.as_str()) == Some("fn"))
        .and_then(|prop| prop.get(3))
        .and_then(|name| name.as_str())
        .map(|s| s.to_string())
}

#[derive(Debug, Deserialize)]
struct RdapResponse {
    #[serde(default)]
    status: Vec<String>,
    #[serde(default)]
    entities: Vec<RdapEntity>,
    #[serde(default)]
    events: Vec<RdapEvent>,
    #[serde(default)]
    nameservers: Vec<RdapNameserver>,
}

#[derive(Debug, Deserialize)]
struct RdapEntity {
    #[serde(default)]
    roles: Vec<String>,
    #[serde(rename = "vcardArray")]
    vcard_array: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RdapEvent {
    #[serde(rename = "eventAction")]
    event_action: String,
    #[serde(rename = "eventDate")]
    event_date: String,
}

#[derive(Debug, Deserialize)]
struct RdapNameserver {
    #[serde(rename = "ldhName")]
    ldh_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeLookup {
        answers: HashMap<&'static str, AvailabilityStatus>,
    }

    #[async_trait]
    impl RegistryLookup for FakeLookup {
        async fn lookup(&self, domain: &str) -> Result<RegistryRecord> {
            match self.answers.get(domain) {
                Some(status) => Ok(RegistryRecord {
                    status: *status,
                    ..RegistryRecord::available()
                }),
                None => Err(ScoutError::network("registry unreachable", None, None)),
            }
        }

        fn method_name(&self) -> &'static str {
            "fake"
        }
    }

    fn checker() -> DomainChecker {
        let answers = HashMap::from([
            ("acme.com", AvailabilityStatus::Taken),
            ("getacme.com", AvailabilityStatus::Available),
        ]);
        DomainChecker::with_lookup(CheckConfig::default(), Arc::new(FakeLookup { answers }))
    }

    #[tokio::test]
    async fn test_check_domain_uses_lookup() {
        let checker = checker();
        let result = checker.check_domain("ACME.com").await.unwrap();
        assert_eq!(result.domain, "acme.com");
        assert_eq!(result.status, AvailabilityStatus::Taken);
        assert!(result.error_message.is_none());
    }

    #[tokio::test]
    async fn test_lookup_failure_is_unknown() {
        let checker = checker();
        let result = checker.check_domain("acme.net").await.unwrap();
        assert_eq!(result.status, AvailabilityStatus::Unknown);
        assert!(result.error_message.unwrap().contains("registry unreachable"));
        assert_eq!(checker.metrics_snapshot().errors_encountered, 1);
    }

    #[tokio::test]
    async fn test_invalid_domain_is_error() {
        let checker = checker();
        assert!(checker.check_domain(".com").await.is_err());

        let results = checker.check_domains(&[".com".to_string(), "getacme.com".to_string()]).await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].status, AvailabilityStatus::Error);
        assert_eq!(results[1].status, AvailabilityStatus::Available);
    }

    #[tokio::test]
    async fn test_metrics_start_empty() {
        let checker = checker();
        assert_eq!(checker.metrics_snapshot(), MetricsSnapshot::default());
        checker.check_domain("getacme.com").await.unwrap();
        assert_eq!(checker.metrics_snapshot().domains_checked, 1);
    }

    #[test]
    fn test_parse_rdap_response() {
        let body = serde_json::json!({
            "status": ["active"],
            "entities": [{
                "roles": ["registrar"],
                "vcardArray": ["vcard", [["version", {}, "text", "4.0"], ["fn", {}, "text", "Example Registrar, Inc."]]]
            }],
            "events": [
                {"eventAction": "registration", "eventDate": "1995-08-14T04:00:00Z"},
                {"eventAction": "expiration", "eventDate": "2030-08-13T04:00:00Z"}
            ],
            "nameservers": [{"ldhName": "A.IANA-SERVERS.NET"}]
        });
        let response: RdapResponse = serde_json::from_value(body).unwrap();
        let record = RdapLookup::parse_rdap_response(response);

        assert_eq!(record.status, AvailabilityStatus::Taken);
        assert_eq!(record.registrar.as_deref(), Some("Example Registrar, Inc."));
        assert_eq!(record.creation_date.unwrap().format("%Y").to_string(), "1995");
        assert!(record.expiration_date.is_some());
        assert_eq!(record.nameservers, vec!["a.iana-servers.net"]);
    }

    #[test]
    fn test_bare_rdap_response_is_taken() {
        let response: RdapResponse = serde_json::from_str(r#"{"objectClassName": "domain"}"#).unwrap();
        let record = RdapLookup::parse_rdap_response(response);
        assert_eq!(record.status, AvailabilityStatus::Taken);
        assert!(record.registrar.is_none());
        assert!(record.nameservers.is_empty());
    }
}
