use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostnameConfig {
    /// Resolve host names through reverse DNS on first access
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for HostnameConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
