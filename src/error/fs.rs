//! File system errors

use super::JtfilesError;

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> JtfilesError {
    JtfilesError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
