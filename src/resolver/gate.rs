//! Conditional gates (`unless:`)
//!
//! A group or module carrying `unless: NAME` is dropped when `NAME` exists in the
//! environment. Only presence matters; `NAME=0` and `NAME=` both close the gate.

#[cfg(test)]
use std::collections::HashSet;

/// Source of environment variable presence
pub trait EnvGate {
    /// Whether the variable `name` is set
    fn is_set(&self, name: &str) -> bool;

    /// Whether an entry gated by `unless` should be kept
    fn admits(&self, unless: Option<&str>) -> bool {
        unless.is_none_or(|name| !self.is_set(name))
    }
}

/// Gate backed by the process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvGate for ProcessEnv {
    fn is_set(&self, name: &str) -> bool {
        std::env::var_os(name).is_some()
    }
}

/// Gate backed by a fixed set of variable names
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct FixedEnv {
    names: HashSet<String>,
}

#[cfg(test)]
impl FixedEnv {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl EnvGate for FixedEnv {
    fn is_set(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
