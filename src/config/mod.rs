pub mod cli;
pub mod profile;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use profile::FieldProfile;
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "credclean"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Deduplicate password-manager CSV exports")
)]
pub struct CliConfig {
    /// CSV export file to clean
    #[cfg_attr(feature = "cli", arg(long))]
    pub input_file: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    /// Prefix for the cleaned output file (<prefix>_cleaned_<date>.csv)
    #[cfg_attr(feature = "cli", arg(long, default_value = "bitwarden"))]
    pub output_prefix: String,

    /// Optional TOML profile mapping semantic fields to column names
    #[cfg_attr(feature = "cli", arg(long))]
    pub profile: Option<String>,

    /// Also write a JSON summary (counts + decision log) next to the CSV
    #[cfg_attr(feature = "cli", arg(long))]
    pub json_summary: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable system monitoring"))]
    pub monitor: bool,

    #[serde(skip)]
    #[cfg_attr(feature = "cli", arg(skip))]
    pub field_profile: FieldProfile,
}

impl CliConfig {
    /// Resolve the field profile: load the TOML file when given, otherwise
    /// keep the Bitwarden defaults. Call once after parsing, before the run.
    pub fn resolve_profile(&mut self) -> Result<()> {
        if let Some(path) = &self.profile {
            self.field_profile = FieldProfile::from_file(path)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_prefix(&self) -> &str {
        &self.output_prefix
    }

    fn field_profile(&self) -> &FieldProfile {
        &self.field_profile
    }

    fn json_summary(&self) -> bool {
        self.json_summary
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_file)?;
        validate_file_extension("input_file", &self.input_file, &["csv"])?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_prefix", &self.output_prefix)?;
        if let Some(profile_path) = &self.profile {
            validate_path("profile", profile_path)?;
            validate_file_extension("profile", profile_path, &["toml"])?;
        }
        Ok(())
    }
}
