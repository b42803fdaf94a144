use anyhow::Context;
use deleg_dns_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
