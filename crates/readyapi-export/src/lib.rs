//! readyapi-export: CI exporter for ReadyAPI OpenAPI schemas.
//!
//! Loads an application object from the user's codebase, generates its
//! OpenAPI schema through the framework's own generator, and writes the
//! result to a JSON or YAML file. Configured entirely through environment
//! variables; one invocation per CI run.

pub mod config;
pub mod error;
pub mod install;
pub mod orchestrator;
pub mod version;
pub mod writer;

pub use config::{Config, OutputFormat};
pub use error::ExportError;
