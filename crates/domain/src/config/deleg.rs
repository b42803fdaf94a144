use serde::{Deserialize, Serialize};

/// One `deleg` block: the zones it names and the record literals to inject
/// for each of them, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DelegBlock {
    /// Raw zone names as written by the operator. Empty means "the server
    /// block's zones".
    #[serde(default)]
    pub zones: Vec<String>,

    /// Full-text resource records (owner, TTL, class, type, rdata).
    #[serde(default)]
    pub responses: Vec<String>,
}

impl DelegBlock {
    pub fn new(zones: Vec<String>, responses: Vec<String>) -> Self {
        Self { zones, responses }
    }

    pub fn is_bare(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zones this block applies to, falling back to the server block's.
    pub fn zones_or<'a>(&'a self, server_zones: &'a [String]) -> &'a [String] {
        if self.zones.is_empty() {
            server_zones
        } else {
            &self.zones
        }
    }
}
