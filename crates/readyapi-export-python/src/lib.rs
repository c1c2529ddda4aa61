//! readyapi-export-python: PyO3 layer for loading ReadyAPI applications.
//!
//! Everything that touches the embedded Python interpreter lives here: the
//! module search path, dynamic import of the user's module, the application
//! handle, and the external `readyapi.openapi.utils.get_openapi` call.

mod app;
mod error;
mod loader;

pub use app::{AppHandle, RouteEntry};
pub use error::LoadError;
pub use loader::{append_sys_path, load_app, strip_py_suffix};
