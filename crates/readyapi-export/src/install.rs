//! Optional dependency-installation step.

use std::process::Command;

use tracing::info;

use crate::error::ExportError;

/// Run the configured install command, if any, through `sh -c`, inheriting
/// the current environment and stdio. Only the exit status is inspected; no
/// output is captured or parsed.
pub fn install_dependencies(command: Option<&str>) -> Result<(), ExportError> {
    let Some(command) = command else {
        return Ok(());
    };

    info!(command, "installing dependencies");
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .status()
        .map_err(|source| ExportError::InstallCommand { source })?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(ExportError::InstallFailed { code }),
        None => Err(ExportError::InstallKilled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_is_a_noop() {
        install_dependencies(None).unwrap();
    }

    #[test]
    fn test_zero_exit_succeeds() {
        install_dependencies(Some("true")).unwrap();
    }

    #[test]
    fn test_nonzero_exit_carries_code() {
        match install_dependencies(Some("exit 7")) {
            Err(ExportError::InstallFailed { code }) => assert_eq!(code, 7),
            other => panic!("expected InstallFailed, got {other:?}"),
        }
    }
}
