// Path: crates/types/src/registry.rs

//! The community registry of action-hosting websites.
//!
//! The registry is a separately hosted JSON document listing which hosts are
//! known to the ecosystem and in what standing. It is advisory input for the
//! invoking collaborator: a `blocked` host should be refused outright, an
//! unregistered host flagged to the user before execution proceeds.

use serde::{Deserialize, Serialize};

/// The registration state of an action-hosting website.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostState {
    /// Vetted by the registry maintainers.
    Trusted,
    /// Registered but not vetted.
    Node,
    /// Known-malicious; actions from this host must not be executed.
    Blocked,
}

impl std::fmt::Display for HostState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trusted => write!(f, "trusted"),
            Self::Node => write!(f, "node"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredHost {
    /// The website's host name.
    pub host: String,
    /// Its registration state.
    pub state: HostState,
}

/// The registry document, wire shape `{"websites": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRegistry {
    /// Every registered website.
    pub websites: Vec<RegisteredHost>,
}

impl ActionRegistry {
    /// Looks up the registration state of a host.
    ///
    /// Host names are compared case-insensitively; a miss means the host is
    /// simply not registered, which is not itself an error.
    pub fn host_state(&self, host: &str) -> Option<HostState> {
        self.websites
            .iter()
            .find(|entry| entry.host.eq_ignore_ascii_case(host))
            .map(|entry| entry.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ActionRegistry {
        serde_json::from_value(serde_json::json!({
            "websites": [
                { "host": "tiplink.io", "state": "trusted" },
                { "host": "example.org", "state": "node" },
                { "host": "evil.example", "state": "blocked" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_host_state_lookup() {
        let registry = registry();
        assert_eq!(registry.host_state("tiplink.io"), Some(HostState::Trusted));
        assert_eq!(registry.host_state("example.org"), Some(HostState::Node));
        assert_eq!(registry.host_state("evil.example"), Some(HostState::Blocked));
        assert_eq!(registry.host_state("unknown.example"), None);
    }

    #[test]
    fn test_host_state_is_case_insensitive() {
        assert_eq!(
            registry().host_state("TipLink.IO"),
            Some(HostState::Trusted)
        );
    }
}
