pub mod deleg;
pub mod directive;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use deleg::DelegBlock;
pub use directive::parse_directives;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
