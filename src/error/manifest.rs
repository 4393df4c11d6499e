//! Manifest loading and resolution errors

use super::JtfilesError;

/// Creates a root manifest missing error
pub fn root_missing(path: impl Into<String>) -> JtfilesError {
    JtfilesError::RootManifestMissing { path: path.into() }
}

/// Creates a referenced manifest missing error
pub fn referenced_missing(path: impl Into<String>, reason: impl Into<String>) -> JtfilesError {
    JtfilesError::ReferencedManifestMissing {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest decode error
pub fn decode_failed(path: impl Into<String>, reason: impl Into<String>) -> JtfilesError {
    JtfilesError::ManifestDecode {
        path: path.into(),
        reason: reason.into(),
    }
}
