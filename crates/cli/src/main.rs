use clap::{Parser, Subcommand};
use deleg_dns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "deleg-dns")]
#[command(version = "0.1.0")]
#[command(about = "deleg-dns - Inject configured records into DNS referrals")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Server-block text file with `deleg` directives
    #[arg(long, value_name = "FILE")]
    directives: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate configuration and print the delegation table
    Check,
    /// Run a wire-format response through the deleg handler
    Apply(commands::ApplyArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        directives_file: cli.directives.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("deleg-dns v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Check => commands::check(&config),
        Command::Apply(ref args) => commands::apply(&config, args).await,
    }
}
