//! Typed handle over the loaded application object.
//!
//! The user's application is duck-typed on the Python side; this wraps it in
//! an explicit contract with named optional fields so the rest of the tool
//! never touches raw attribute access.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use tracing::debug;

use crate::error::LoadError;

/// Fields forwarded to the schema generator, in its keyword order.
const SCHEMA_FIELDS: [&str; 5] = [
    "title",
    "version",
    "openapi_version",
    "description",
    "routes",
];

/// One entry of an application's route table, in declared order.
pub struct RouteEntry {
    pub path: String,
    /// The mounted sub-application, when the route object exposes one.
    pub app: Option<AppHandle>,
}

/// A loaded application object.
///
/// A missing attribute and a Python `None` both surface as `None` from the
/// metadata accessors.
#[derive(Debug)]
pub struct AppHandle {
    inner: Py<PyAny>,
}

impl AppHandle {
    pub(crate) fn new(inner: Py<PyAny>) -> Self {
        Self { inner }
    }

    fn attr_str(&self, py: Python<'_>, name: &str) -> Option<String> {
        let value = self.inner.bind(py).getattr(name).ok()?;
        value.extract::<Option<String>>().ok().flatten()
    }

    pub fn title(&self, py: Python<'_>) -> Option<String> {
        self.attr_str(py, "title")
    }

    pub fn version(&self, py: Python<'_>) -> Option<String> {
        self.attr_str(py, "version")
    }

    pub fn openapi_version(&self, py: Python<'_>) -> Option<String> {
        self.attr_str(py, "openapi_version")
    }

    pub fn description(&self, py: Python<'_>) -> Option<String> {
        self.attr_str(py, "description")
    }

    /// Walk the application's route table in declared order.
    pub fn routes(&self, py: Python<'_>) -> Result<Vec<RouteEntry>, LoadError> {
        let routes = self.inner.bind(py).getattr("routes").map_err(|source| {
            LoadError::AttributeResolution {
                attribute: "routes".to_string(),
                source,
            }
        })?;

        let mut entries = Vec::new();
        for route in routes.try_iter()? {
            let route = route?;
            let path: String = route.getattr("path")?.extract()?;
            let app = route
                .getattr("app")
                .ok()
                .filter(|app| !app.is_none())
                .map(|app| AppHandle::new(app.unbind()));
            entries.push(RouteEntry { path, app });
        }
        Ok(entries)
    }

    /// Generate the OpenAPI schema by calling
    /// `readyapi.openapi.utils.get_openapi` with this application's fields.
    ///
    /// Each keyword argument is the application's attribute, or Python `None`
    /// when the attribute is absent; the generator's own errors propagate
    /// unchanged.
    pub fn openapi_schema(&self, py: Python<'_>) -> Result<serde_json::Value, LoadError> {
        let app = self.inner.bind(py);

        let utils = py
            .import("readyapi.openapi.utils")
            .map_err(LoadError::SchemaGeneration)?;
        let get_openapi = utils
            .getattr("get_openapi")
            .map_err(LoadError::SchemaGeneration)?;

        let kwargs = PyDict::new(py);
        for field in SCHEMA_FIELDS {
            match app.getattr(field) {
                Ok(value) => kwargs.set_item(field, value)?,
                Err(_) => kwargs.set_item(field, py.None())?,
            }
        }

        let schema = get_openapi
            .call((), Some(&kwargs))
            .map_err(LoadError::SchemaGeneration)?;

        // Marshal through json.dumps so arbitrary Python mappings survive
        // intact, then parse on the Rust side.
        let json_module = py.import("json")?;
        let schema_str: String = json_module.call_method1("dumps", (&schema,))?.extract()?;
        let value = serde_json::from_str(&schema_str).map_err(|e| {
            LoadError::SchemaGeneration(pyo3::exceptions::PyValueError::new_err(e.to_string()))
        })?;

        debug!("generated OpenAPI schema");
        Ok(value)
    }
}
