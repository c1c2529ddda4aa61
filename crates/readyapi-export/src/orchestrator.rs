//! End-to-end export sequence.
//!
//! Flow:
//! 1. Verify the workspace directory and append it to `sys.path`
//! 2. Run the optional dependency-install command
//! 3. Import the target module and retrieve the application object
//! 4. Optionally swap in a versioned sub-application
//! 5. Generate the OpenAPI schema and write the output file

use std::path::PathBuf;

use pyo3::Python;
use tracing::info;

use readyapi_export_python::{AppHandle, append_sys_path, load_app};

use crate::config::Config;
use crate::error::ExportError;
use crate::install::install_dependencies;
use crate::version::{MountedRoute, select_versioned};
use crate::writer::write_schema;

/// Run the full export and return the output path.
///
/// Aborts on the first failure. Side effects already applied by earlier
/// steps (`sys.path` mutation, installed dependencies) are not rolled back.
pub fn run(config: &Config) -> Result<PathBuf, ExportError> {
    if !config.workspace.is_dir() {
        return Err(ExportError::WorkspaceNotFound {
            path: config.workspace.clone(),
        });
    }

    Python::attach(|py| append_sys_path(py, &config.workspace))?;

    install_dependencies(config.install_command.as_deref())?;

    let schema = Python::attach(|py| -> Result<serde_json::Value, ExportError> {
        let mut app = load_app(py, &config.module_dir, &config.module_name, &config.app_name)?;

        if let Some(version) = &config.version {
            app = select_versioned(mounted_routes(py, &app)?, version)?;
            info!(version = %version, "selected versioned sub-application");
        }

        if let Some(title) = app.title(py) {
            info!(title = %title, "generating OpenAPI schema");
        }
        Ok(app.openapi_schema(py)?)
    })?;

    let output = config.output_path();
    write_schema(&output, &schema, config.format)?;
    Ok(output)
}

fn mounted_routes(
    py: Python<'_>,
    app: &AppHandle,
) -> Result<Vec<MountedRoute<AppHandle>>, ExportError> {
    Ok(app
        .routes(py)?
        .into_iter()
        .map(|route| MountedRoute {
            path: route.path,
            app: route.app,
        })
        .collect())
}
