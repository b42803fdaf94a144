//! deleg-dns Domain Layer
pub mod config;
pub mod errors;
pub mod zone_name;

pub use config::{CliOverrides, Config, ConfigError, DelegBlock, LogFormat};
pub use errors::DomainError;
pub use zone_name::{canonical_name, normalize_zone, normalize_zones};
