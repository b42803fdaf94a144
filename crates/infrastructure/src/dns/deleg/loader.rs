use deleg_dns_application::services::DelegationTable;
use deleg_dns_domain::{normalize_zones, Config, ConfigError, DelegBlock};
use hickory_proto::rr::{Name, Record};
use std::str::FromStr;
use tracing::{debug, info};

use crate::dns::record_parser::RecordParser;

/// Builds a [`DelegationTable`] from configured `deleg` blocks.
pub struct DelegationTableLoader;

impl DelegationTableLoader {
    /// Validates `config`, collects every block (structured and from the
    /// directives file) and builds the table.
    pub fn from_config(config: &Config) -> Result<DelegationTable, ConfigError> {
        config.validate()?;
        let blocks = config.delegation_blocks()?;
        Self::from_blocks(&blocks, &config.server.zones)
    }

    /// Each block's records are parsed once and appended to every zone the
    /// block names, in declaration order. Blocks without zones apply to
    /// `server_zones`. Any unparseable record fails the whole load.
    pub fn from_blocks(
        blocks: &[DelegBlock],
        server_zones: &[String],
    ) -> Result<DelegationTable, ConfigError> {
        let parser = RecordParser::new();
        let mut builder = DelegationTable::builder();

        for block in blocks {
            let records = block
                .responses
                .iter()
                .map(|text| parser.parse(text))
                .collect::<Result<Vec<Record>, _>>()?;

            for zone in normalize_zones(block.zones_or(server_zones))? {
                let name = Name::from_str(&zone).map_err(|e| {
                    ConfigError::Validation(format!("Invalid zone '{}': {}", zone, e))
                })?;
                debug!(zone = %name, records = records.len(), "Configured deleg zone");
                builder.append(&name, records.iter().cloned());
            }
        }

        let table = builder.build();
        info!(
            zones = table.len(),
            records = table.record_count(),
            "Delegation table built"
        );
        Ok(table)
    }
}
