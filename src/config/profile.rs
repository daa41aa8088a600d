use crate::utils::error::{CleanError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which input columns carry the semantic credential fields. Defaults match
/// the Bitwarden CSV export layout; a TOML profile overrides them for other
/// password managers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldProfile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_uri")]
    pub uri: String,
}

fn default_name() -> String {
    "name".to_string()
}

fn default_username() -> String {
    "login_username".to_string()
}

fn default_password() -> String {
    "login_password".to_string()
}

fn default_uri() -> String {
    "login_uri".to_string()
}

impl Default for FieldProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            username: default_username(),
            password: default_password(),
            uri: default_uri(),
        }
    }
}

/// Wrapper for the on-disk profile file: `[fields]` table with optional keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    fields: Option<FieldProfile>,
}

impl FieldProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CleanError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: ProfileFile =
            toml::from_str(content).map_err(|e| CleanError::ConfigError {
                message: format!("Invalid profile TOML: {}", e),
            })?;
        let profile = parsed.fields.unwrap_or_default();
        profile.validate()?;
        Ok(profile)
    }
}

impl Validate for FieldProfile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("fields.name", &self.name)?;
        validate_non_empty_string("fields.username", &self.username)?;
        validate_non_empty_string("fields.password", &self.password)?;
        validate_non_empty_string("fields.uri", &self.uri)?;
        Ok(())
    }
}
