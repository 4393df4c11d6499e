//! Configuration errors

use super::JtfilesError;

/// Creates a missing root error for an unset environment variable
pub fn missing_root(variable: impl Into<String>) -> JtfilesError {
    JtfilesError::MissingRoot {
        variable: variable.into(),
    }
}

/// Creates an unknown shell error
pub fn unknown_shell(shell: impl Into<String>) -> JtfilesError {
    JtfilesError::UnknownShell {
        shell: shell.into(),
    }
}
