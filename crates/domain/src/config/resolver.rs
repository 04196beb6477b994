use serde::{Deserialize, Serialize};

/// Resolver configuration
///
/// Timeouts and attempts are enforced by the resolver adapter, not by the
/// lookup use cases.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Nameservers as `ip:port` (e.g. "1.1.1.1:53").
    /// Empty means use the system configuration (`/etc/resolv.conf`).
    #[serde(default)]
    pub nameservers: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_attempts() -> usize {
    2
}

impl ResolverConfig {
    pub fn uses_system_conf(&self) -> bool {
        self.nameservers.is_empty()
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            timeout_secs: default_timeout_secs(),
            attempts: default_attempts(),
        }
    }
}
