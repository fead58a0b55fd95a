//! Default metric naming scheme.

/// Suffix appended to the host name in the default scheme.
pub const SCHEME_SUFFIX: &str = "entropy";

/// Host name used when the real one cannot be resolved.
pub const UNKNOWN_HOST: &str = "unknown";

/// Returns `<hostname>.entropy` for this machine.
///
/// Falls back to `unknown.entropy` when the host name is empty or not
/// valid UTF-8.
pub fn default_scheme() -> String {
    let hostname = gethostname::gethostname().into_string().ok();
    if hostname.as_deref().map_or(true, str::is_empty) {
        tracing::warn!("Could not resolve host name, using '{}'", UNKNOWN_HOST);
    }
    scheme_for_host(hostname.as_deref())
}

/// Builds the scheme for a host name, if one was resolved.
pub fn scheme_for_host(hostname: Option<&str>) -> String {
    let host = match hostname {
        Some(name) if !name.is_empty() => name,
        _ => UNKNOWN_HOST,
    };
    format!("{host}.{SCHEME_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_for_host() {
        assert_eq!(scheme_for_host(Some("db01")), "db01.entropy");
    }

    #[test]
    fn test_unresolved_host_is_unknown() {
        assert_eq!(scheme_for_host(None), "unknown.entropy");
        assert_eq!(scheme_for_host(Some("")), "unknown.entropy");
    }

    #[test]
    fn test_default_scheme_suffix() {
        let scheme = default_scheme();
        assert!(scheme.ends_with(".entropy"));
        assert!(scheme.len() > ".entropy".len());
    }
}
