//! Live registry verification of suggested domains

pub mod checker;
pub mod validator;

pub use checker::{DomainChecker, RdapLookup};
pub use validator::DomainValidator;

use crate::error::Result;
use crate::types::AvailabilityStatus;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Registration data a registry reports for one domain
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryRecord {
    pub status: AvailabilityStatus,
    pub registrar: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub nameservers: Vec<String>,
}

impl RegistryRecord {
    /// Record for a domain nobody holds
    pub fn available() -> Self {
        Self {
            status: AvailabilityStatus::Available,
            registrar: None,
            creation_date: None,
            expiration_date: None,
            nameservers: Vec::new(),
        }
    }
}

/// A way of asking a registry whether a domain is registered
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    /// Look up a validated, lowercase domain
    async fn lookup(&self, domain: &str) -> Result<RegistryRecord>;

    /// Short name used in logs
    fn method_name(&self) -> &'static str;
}
