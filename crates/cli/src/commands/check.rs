use anyhow::Context;
use deleg_dns_domain::Config;
use deleg_dns_infrastructure::dns::DelegationTableLoader;
use tracing::info;

/// Builds the delegation table and prints every zone with its records.
pub fn check(config: &Config) -> anyhow::Result<()> {
    let table =
        DelegationTableLoader::from_config(config).context("Failed to build delegation table")?;

    for (zone, records) in table.iter() {
        println!("{} ({} records)", zone, records.len());
        for record in records {
            println!("    {}", record);
        }
    }

    info!(
        zones = table.len(),
        records = table.record_count(),
        "Configuration OK"
    );
    Ok(())
}
