use std::path::PathBuf;

use thiserror::Error;

use readyapi_export_python::LoadError;

/// Everything that can abort an export run. All variants are fatal; the
/// orchestrator never retries.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("environment variable '{key}' is required but not set")]
    MissingConfig { key: &'static str },

    #[error("the specified path '{path}' does not exist or is not a directory")]
    WorkspaceNotFound { path: PathBuf },

    #[error("failed to run dependency installation command: {source}")]
    InstallCommand { source: std::io::Error },

    #[error("dependency installation failed with exit code {code}")]
    InstallFailed { code: i32 },

    #[error("dependency installation command was terminated by a signal")]
    InstallKilled,

    #[error("no route found matching the specified version '{version}'")]
    VersionNotFound { version: String },

    #[error("route '{path}' matches version '{version}' but mounts no sub-application")]
    NotMounted { path: String, version: String },

    #[error("invalid output extension '{extension}': only 'json' or 'yaml' are supported")]
    UnsupportedFormat { extension: String },

    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),
}
