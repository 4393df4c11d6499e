//! Command implementations for the jtfiles CLI

pub mod completions;
pub mod run;
