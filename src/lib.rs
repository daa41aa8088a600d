pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::CliConfig;
pub use config::profile::FieldProfile;
pub use core::{csv_pipeline::CsvCleanPipeline, engine::CleanEngine};
pub use domain::model::{CleanReport, Record};
pub use utils::error::{CleanError, Result};
