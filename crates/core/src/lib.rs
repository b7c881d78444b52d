pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, DisplayConfig, FileLoggingConfig, LoggingSection, ScrollConfig};
pub use error::{Error, Result};
pub use logging::{LogFormat, LoggingConfig, init_logging};
