//! Module search-path preparation and application loading.

use std::path::Path;

use pyo3::prelude::*;
use tracing::debug;

use crate::app::AppHandle;
use crate::error::LoadError;

/// Append a directory to the interpreter's `sys.path`.
///
/// This mutates interpreter-wide state for the rest of the process; the
/// orchestrator calls it exactly once, before any import.
pub fn append_sys_path(py: Python<'_>, dir: &Path) -> Result<(), LoadError> {
    let sys = py.import("sys")?;
    let path = sys.getattr("path")?;
    path.call_method1("append", (dir.to_string_lossy().into_owned(),))?;
    debug!(dir = %dir.display(), "appended workspace to sys.path");
    Ok(())
}

/// Strip one trailing `.py` suffix so a filename can be used as a module name.
pub fn strip_py_suffix(name: &str) -> &str {
    name.strip_suffix(".py").unwrap_or(name)
}

/// Import `{module_dir}.{module_name}` and retrieve the application attribute.
///
/// Importing executes the module's top-level code; the search path must
/// already contain the workspace and any dependencies must be installed.
pub fn load_app(
    py: Python<'_>,
    module_dir: &str,
    module_name: &str,
    app_name: &str,
) -> Result<AppHandle, LoadError> {
    let module_path = format!("{module_dir}.{}", strip_py_suffix(module_name));

    let module = py
        .import(module_path.as_str())
        .map_err(|source| LoadError::ModuleResolution {
            module: module_path.clone(),
            source,
        })?;

    let app = module
        .getattr(app_name)
        .map_err(|source| LoadError::AttributeResolution {
            attribute: app_name.to_string(),
            source,
        })?;

    debug!(module = %module_path, app = app_name, "loaded application object");
    Ok(AppHandle::new(app.unbind()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    #[test]
    fn test_strip_py_suffix() {
        assert_eq!(strip_py_suffix("main.py"), "main");
        assert_eq!(strip_py_suffix("main"), "main");
        // Only a trailing suffix is stripped.
        assert_eq!(strip_py_suffix("my.pyapp"), "my.pyapp");
        assert_eq!(strip_py_suffix("a.py.py"), "a.py");
    }

    /// Write a package `{name}/{module}.py` with the given source and put the
    /// tempdir on sys.path. Package names must be unique per test because the
    /// interpreter caches imports in sys.modules.
    fn stage_package(dir: &TempDir, name: &str, module: &str, source: &str) -> PathBuf {
        let pkg = dir.path().join(name);
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("__init__.py"), "").unwrap();
        fs::write(pkg.join(format!("{module}.py")), source).unwrap();
        dir.path().to_path_buf()
    }

    const APP_SOURCE: &str = r#"
class _Sub:
    title = "sub"

class _Route:
    def __init__(self, path, app=None):
        self.path = path
        if app is not None:
            self.app = app

class _App:
    title = "Demo"
    version = "1.2.3"
    openapi_version = None
    routes = [_Route("/health"), _Route("/v1/items", _Sub())]

service = _App()
"#;

    #[test]
    fn test_load_app_resolves_attribute() {
        let dir = TempDir::new().unwrap();
        let root = stage_package(&dir, "pkg_load", "svc", APP_SOURCE);

        Python::attach(|py| {
            append_sys_path(py, &root).unwrap();
            let app = load_app(py, "pkg_load", "svc", "service").unwrap();
            assert_eq!(app.title(py).as_deref(), Some("Demo"));
            assert_eq!(app.version(py).as_deref(), Some("1.2.3"));
            // Python None and a missing attribute both read as None.
            assert_eq!(app.openapi_version(py), None);
            assert_eq!(app.description(py), None);
        });
    }

    #[test]
    fn test_load_app_strips_py_suffix() {
        let dir = TempDir::new().unwrap();
        let root = stage_package(&dir, "pkg_suffix", "svc", APP_SOURCE);

        Python::attach(|py| {
            append_sys_path(py, &root).unwrap();
            // "svc.py" and "svc" resolve to the same module.
            let app = load_app(py, "pkg_suffix", "svc.py", "service").unwrap();
            assert_eq!(app.title(py).as_deref(), Some("Demo"));
        });
    }

    #[test]
    fn test_load_app_missing_module() {
        Python::attach(|py| {
            let err = load_app(py, "pkg_nowhere", "svc", "service").unwrap_err();
            match err {
                LoadError::ModuleResolution { module, .. } => {
                    assert_eq!(module, "pkg_nowhere.svc");
                }
                other => panic!("expected ModuleResolution, got {other:?}"),
            }
        });
    }

    #[test]
    fn test_load_app_missing_attribute() {
        let dir = TempDir::new().unwrap();
        let root = stage_package(&dir, "pkg_noattr", "svc", APP_SOURCE);

        Python::attach(|py| {
            append_sys_path(py, &root).unwrap();
            let err = load_app(py, "pkg_noattr", "svc", "absent").unwrap_err();
            match err {
                LoadError::AttributeResolution { attribute, .. } => {
                    assert_eq!(attribute, "absent");
                }
                other => panic!("expected AttributeResolution, got {other:?}"),
            }
        });
    }

    #[test]
    fn test_routes_keep_declared_order() {
        let dir = TempDir::new().unwrap();
        let root = stage_package(&dir, "pkg_routes", "svc", APP_SOURCE);

        Python::attach(|py| {
            append_sys_path(py, &root).unwrap();
            let app = load_app(py, "pkg_routes", "svc", "service").unwrap();
            let routes = app.routes(py).unwrap();
            assert_eq!(routes.len(), 2);
            assert_eq!(routes[0].path, "/health");
            assert!(routes[0].app.is_none());
            assert_eq!(routes[1].path, "/v1/items");
            let sub = routes[1].app.as_ref().unwrap();
            assert_eq!(sub.title(py).as_deref(), Some("sub"));
        });
    }
}
