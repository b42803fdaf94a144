use serde::{Deserialize, Serialize};

/// Zones of the enclosing server block.
///
/// A `deleg` block that names no zones applies to these.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_zones")]
    pub zones: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            zones: default_zones(),
        }
    }
}

fn default_zones() -> Vec<String> {
    vec![".".to_string()]
}
