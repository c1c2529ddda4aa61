use thiserror::Error;

/// Failures raised while loading the application or calling into Python.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot import module '{module}'; check that paths and file names are correct: {source}")]
    ModuleResolution {
        module: String,
        source: pyo3::PyErr,
    },

    #[error("module does not contain the application object '{attribute}': {source}")]
    AttributeResolution {
        attribute: String,
        source: pyo3::PyErr,
    },

    #[error("OpenAPI schema generation failed: {0}")]
    SchemaGeneration(#[source] pyo3::PyErr),

    #[error("Python error: {0}")]
    Python(#[from] pyo3::PyErr),
}
