pub mod config;
pub mod core;
pub mod domain;
pub mod model;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::InspectSettings;

pub use core::client::send;
pub use core::{Operation, Record, Transport};
pub use utils::error::{ModelError, Result};
