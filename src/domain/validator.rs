//! Domain name validation before a registry lookup

use crate::error::{Result, ScoutError};
use regex::Regex;

/// Domain name validator
#[derive(Debug, Clone, Copy)]
pub struct DomainValidator;

impl DomainValidator {
    /// Create a new domain validator
    pub fn new() -> Self {
        Self
    }

    /// Validate a domain name, returning it trimmed and lowercased
    pub fn validate(&self, domain: &str) -> Result<String> {
        let domain = domain.trim().to_lowercase();

        self.validate_format(&domain)?;

        if domain.len() > 253 {
            return Err(ScoutError::validation("Domain name too long (max 253 characters)"));
        }

        let valid_chars = Regex::new(r"^[a-z0-9.-]+$")
            .map_err(|e| ScoutError::internal(e.to_string()))?;

        if !valid_chars.is_match(&domain) {
            return Err(ScoutError::validation("Domain contains invalid characters"));
        }

        let (name, tld) = domain
            .rsplit_once('.')
            .ok_or_else(|| ScoutError::validation("Domain must have at least one dot"))?;

        let tld_format = Regex::new(r"^[a-z]{2,63}$")
            .map_err(|e| ScoutError::internal(e.to_string()))?;

        if !tld_format.is_match(tld) {
            return Err(ScoutError::validation(format!("Invalid TLD '{}'", tld)));
        }

        for label in name.split('.') {
            if label.is_empty() {
                return Err(ScoutError::validation("Domain label cannot be empty"));
            }
            if label.len() > 63 {
                return Err(ScoutError::validation("Domain label too long (max 63 characters)"));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(ScoutError::validation("Domain label cannot start or end with hyphen"));
            }
        }

        Ok(domain)
    }

    fn validate_format(&self, domain: &str) -> Result<()> {
        if domain.is_empty() {
            return Err(ScoutError::validation("Domain name cannot be empty"));
        }

        if domain.starts_with('.') || domain.ends_with('.') {
            return Err(ScoutError::validation("Domain cannot start or end with dot"));
        }

        if domain.contains("..") {
            return Err(ScoutError::validation("Domain cannot contain consecutive dots"));
        }

        Ok(())
    }
}

impl Default for DomainValidator {
    fn default() -> Self {
        Self::new()
    }
}
