//! Schema serialization to disk.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::ExportError;

/// Write the schema tree to `path` in the given format.
///
/// JSON is pretty-printed with 2-space indentation and keys in the order the
/// generator produced them; YAML uses block style throughout.
///
/// The file is truncated and rewritten in place. There is no atomic rename,
/// so a failed write can leave a partial file behind.
pub fn write_schema(path: &Path, schema: &Value, format: OutputFormat) -> Result<(), ExportError> {
    let io_err = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let writer = BufWriter::new(file);

    match format {
        OutputFormat::Json => serde_json::to_writer_pretty(writer, schema)
            .map_err(|e| io_err(std::io::Error::other(e)))?,
        OutputFormat::Yaml => {
            serde_yaml::to_writer(writer, schema).map_err(|e| io_err(std::io::Error::other(e)))?
        }
    }

    debug!(path = %path.display(), "wrote schema");
    Ok(())
}
