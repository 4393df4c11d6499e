//! Output classification errors

use super::JtfilesError;

/// Creates an unsupported extension error
pub fn unsupported_extension(extension: impl Into<String>, path: impl Into<String>) -> JtfilesError {
    JtfilesError::UnsupportedExtension {
        extension: extension.into(),
        path: path.into(),
    }
}

/// Creates a path resolution error
pub fn path_resolution(path: impl Into<String>, base: impl Into<String>) -> JtfilesError {
    JtfilesError::PathResolution {
        path: path.into(),
        base: base.into(),
    }
}
