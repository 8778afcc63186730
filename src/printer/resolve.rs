//! # Printer Name Resolution
//!
//! Picks the target printer for one print request. The chain is explicit
//! and resolved once per request, then passed to the dispatcher as a plain
//! string:
//!
//! 1. Caller-supplied override, when non-blank.
//! 2. Best-effort match against the OS's enumerated printer names
//!    (case-insensitive substring match on known device-family keywords).
//! 3. The configured default name.

/// Queue name used when nothing better can be resolved.
pub const DEFAULT_PRINTER_NAME: &str = "ZDesigner-GK420d";

/// Device-family keywords matched against enumerated printer names.
/// Lowercase; candidates are lowercased before comparison.
const DEVICE_FAMILY_KEYWORDS: &[&str] = &["zebra", "zdesigner", "gk420", "gx420", "gx430", "lp2844", "tlp"];

/// Resolution inputs for one request.
#[derive(Debug, Clone)]
pub struct ResolvePolicy {
    /// Explicit caller-supplied printer name. Wins when non-blank.
    pub override_name: Option<String>,
    /// Fallback queue name when no enumerated printer matches.
    pub default_name: String,
}

impl Default for ResolvePolicy {
    fn default() -> Self {
        Self {
            override_name: None,
            default_name: DEFAULT_PRINTER_NAME.to_string(),
        }
    }
}

/// Resolve the target printer name. Never fails: the default name is the
/// terminal fallback even when the OS enumerates nothing.
pub fn resolve_printer(policy: &ResolvePolicy, available: &[String]) -> String {
    if let Some(name) = &policy.override_name {
        if !name.trim().is_empty() {
            return name.clone();
        }
    }

    for name in available {
        let lowered = name.to_lowercase();
        if DEVICE_FAMILY_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            return name.clone();
        }
    }

    policy.default_name.clone()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_override_wins() {
        let policy = ResolvePolicy {
            override_name: Some("Lab-Front-Desk".to_string()),
            ..Default::default()
        };
        let available = names(&["ZDesigner-GK420d"]);
        assert_eq!(resolve_printer(&policy, &available), "Lab-Front-Desk");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let policy = ResolvePolicy {
            override_name: Some("   ".to_string()),
            ..Default::default()
        };
        let available = names(&["Zebra_GK420d_Lab"]);
        assert_eq!(resolve_printer(&policy, &available), "Zebra_GK420d_Lab");
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let policy = ResolvePolicy::default();
        let available = names(&["Office-Laser", "ZDESIGNER-GK420D-EPL"]);
        assert_eq!(resolve_printer(&policy, &available), "ZDESIGNER-GK420D-EPL");
    }

    #[test]
    fn test_first_matching_printer_wins() {
        let policy = ResolvePolicy::default();
        let available = names(&["zebra-one", "zebra-two"]);
        assert_eq!(resolve_printer(&policy, &available), "zebra-one");
    }

    #[test]
    fn test_falls_back_to_default() {
        let policy = ResolvePolicy::default();
        let available = names(&["Office-Laser"]);
        assert_eq!(resolve_printer(&policy, &available), DEFAULT_PRINTER_NAME);
        assert_eq!(resolve_printer(&policy, &[]), DEFAULT_PRINTER_NAME);
    }
}
