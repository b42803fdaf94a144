use arc_swap::ArcSwap;
use deleg_dns_application::services::DelegationTable;
use deleg_dns_domain::{Config, ConfigError};
use std::sync::Arc;
use tracing::{info, warn};

use super::loader::DelegationTableLoader;

/// Currently published delegation table.
///
/// Readers take a snapshot per request; a reload swaps in a fully built
/// table, so in-flight requests finish against the table they started with.
pub struct DelegationTableStore {
    current: ArcSwap<DelegationTable>,
}

impl DelegationTableStore {
    pub fn new(table: DelegationTable) -> Self {
        Self {
            current: ArcSwap::from_pointee(table),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(DelegationTableLoader::from_config(config)?))
    }

    pub fn load(&self) -> Arc<DelegationTable> {
        self.current.load_full()
    }

    pub fn publish(&self, table: DelegationTable) {
        info!(
            zones = table.len(),
            records = table.record_count(),
            "Publishing delegation table"
        );
        self.current.store(Arc::new(table));
    }

    /// Rebuilds the table from `config`. On error the previous table stays
    /// published and the error is returned.
    pub fn reload(&self, config: &Config) -> Result<(), ConfigError> {
        match DelegationTableLoader::from_config(config) {
            Ok(table) => {
                self.publish(table);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Rejected delegation table reload, keeping current table");
                Err(e)
            }
        }
    }
}

impl Default for DelegationTableStore {
    fn default() -> Self {
        Self::new(DelegationTable::default())
    }
}
