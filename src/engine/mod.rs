pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{Config, ConfigError};
pub use error::AbbrexError;
pub use pipeline::run;
