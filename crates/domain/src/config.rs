mod audit;
mod errors;
mod logging;
mod root;
mod server;
mod shaper;

pub use audit::AuditConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use shaper::ShaperConfig;
