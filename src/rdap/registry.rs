//! Static RDAP server table for the TLDs suggestions are generated on.

/// RDAP base URL for a TLD (lowercase, with or without the leading dot).
///
/// Returned URLs end with `/` and include any version path.
pub fn rdap_base_url(tld: &str) -> Option<&'static str> {
    match tld.trim_start_matches('.') {
        "com" => Some("https://rdap.verisign.com/com/v1/"),
        "net" => Some("https://rdap.verisign.com/net/v1/"),
        "org" => Some("https://rdap.publicinterestregistry.org/rdap/"),
        "io" => Some("https://rdap.identitydigital.services/rdap/"),
        "co" => Some("https://rdap.nic.co/"),
        "biz" => Some("https://rdap.nic.biz/"),
        "ai" => Some("https://rdap.nic.ai/"),
        "app" | "dev" => Some("https://pubapi.registry.google/rdap/"),
        _ => None,
    }
}

/// Domain query URL for `domain`, using `base_override` in place of the TLD table when set.
pub fn rdap_domain_url(domain: &str, base_override: Option<&str>) -> Option<String> {
    let base = match base_override {
        Some(base) => base.to_string(),
        None => {
            let tld = domain.rsplit('.').next()?;
            rdap_base_url(tld)?.to_string()
        }
    };
    let base = base.trim_end_matches('/');
    Some(format!("{base}/domain/{domain}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::TLDS;

    #[test]
    fn test_every_suggested_tld_has_a_server() {
        for tld in TLDS {
            assert!(rdap_base_url(tld).is_some(), "missing RDAP server for {tld}");
        }
        assert!(rdap_base_url("unknown").is_none());
    }

    #[test]
    fn test_domain_url() {
        let url = rdap_domain_url("example.com", None).unwrap();
        assert_eq!(url, "https://rdap.verisign.com/com/v1/domain/example.com");
        assert!(rdap_domain_url("example.zzz", None).is_none());
    }

    #[test]
    fn test_domain_url_override() {
        let url = rdap_domain_url("example.zzz", Some("http://127.0.0.1:9000/")).unwrap();
        assert_eq!(url, "http://127.0.0.1:9000/domain/example.zzz");
    }
}
