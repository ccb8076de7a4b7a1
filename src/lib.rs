pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CalcArgs;

pub use crate::config::cli::{FileSink, OutputSink, StdoutSink};
pub use crate::config::toml_config::ProtocolConfig;
pub use crate::core::{calculator::plan_ligation, engine::ProtocolEngine};
pub use crate::utils::error::{CalcError, Result};
