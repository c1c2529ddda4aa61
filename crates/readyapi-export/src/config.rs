//! Environment-variable configuration.
//!
//! The variable table below is the tool's entire CLI surface; there are no
//! positional arguments or flags. Values come from the CI platform's
//! key/value input binding.

use std::path::PathBuf;

use crate::error::ExportError;

pub const GITHUB_WORKSPACE: &str = "GITHUB_WORKSPACE";
pub const INPUT_INSTALL_DEPENDENCIES: &str = "INPUT_INSTALLDEPENDENCIES";
pub const INPUT_MODULE_DIR: &str = "INPUT_MODULEDIR";
pub const INPUT_FILE_NAME: &str = "INPUT_FILENAME";
pub const INPUT_APP_NAME: &str = "INPUT_APPNAME";
pub const INPUT_VERSIONING: &str = "INPUT_READYAPIVERSIONING";
pub const INPUT_OUTPUT_NAME: &str = "INPUT_OUTPUTNAME";
pub const INPUT_OUTPUT_EXTENSION: &str = "INPUT_OUTPUTEXTENSION";

/// Output format, doubling as the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse an output extension, case-insensitively.
    pub fn from_extension(extension: &str) -> Result<Self, ExportError> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(ExportError::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// One run's worth of configuration, resolved up front so every missing or
/// invalid value fails before any side effect.
#[derive(Debug)]
pub struct Config {
    /// Root directory appended to the module search path.
    pub workspace: PathBuf,
    /// Shell command to run before the import, if any.
    pub install_command: Option<String>,
    /// Logical package/directory containing the target module.
    pub module_dir: String,
    /// Target module name; a trailing `.py` is stripped at import time.
    pub module_name: String,
    /// Name of the application attribute on the module.
    pub app_name: String,
    /// Substring token selecting a versioned sub-application.
    pub version: Option<String>,
    /// Base name (no extension) of the output file.
    pub output_name: String,
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ExportError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. An empty value counts as unset, so a
    /// required key bound to `""` is a configuration error naming that key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ExportError> {
        let optional = |key: &'static str| lookup(key).filter(|value| !value.is_empty());
        let required =
            |key: &'static str| optional(key).ok_or(ExportError::MissingConfig { key });

        let workspace = PathBuf::from(required(GITHUB_WORKSPACE)?);
        let install_command = optional(INPUT_INSTALL_DEPENDENCIES);
        let module_dir = required(INPUT_MODULE_DIR)?;
        let module_name = required(INPUT_FILE_NAME)?;
        let app_name = required(INPUT_APP_NAME)?;
        let version = optional(INPUT_VERSIONING);
        let output_name = required(INPUT_OUTPUT_NAME)?;
        let format = OutputFormat::from_extension(&required(INPUT_OUTPUT_EXTENSION)?)?;

        Ok(Self {
            workspace,
            install_command,
            module_dir,
            module_name,
            app_name,
            version,
            output_name,
            format,
        })
    }

    /// `{output_name}.{extension}`, with the extension lowercased.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.output_name, self.format.extension()))
    }
}
