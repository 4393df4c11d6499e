//! Resolve a core and write its file list

use crate::collector;
use crate::config::{Roots, RunOptions};
use crate::emit;
use crate::error::Result;
use crate::resolver::{EnvGate, ProcessEnv, Resolver};
use crate::ui;

/// Run the full pipeline with gates read from the process environment
pub fn run(roots: &Roots, options: &RunOptions) -> Result<()> {
    run_with_gate(roots, options, ProcessEnv)
}

/// Resolve core and framework manifests, collect and emit
///
/// The core manifest is resolved first. If it does not exist the run still
/// produces the framework files.
pub fn run_with_gate<G: EnvGate>(roots: &Roots, options: &RunOptions, gate: G) -> Result<()> {
    if options.verbose {
        if let Some(target) = &options.target {
            ui::trace(format_args!("target {target}"));
        }
    }

    let mut resolver = Resolver::new(roots, gate).verbose(options.verbose);
    resolver.resolve(&roots.core_manifest(&options.core))?;
    resolver.resolve(&roots.framework_manifest())?;
    if options.verbose {
        ui::trace(format_args!(
            "{} manifests resolved, {} modules without manifest",
            resolver.state().len(),
            resolver.aggregate().unresolved().len()
        ));
    }
    let aggregate = resolver.into_aggregate();
    if aggregate.is_empty() {
        ui::warn(format_args!("no files found for core {}", options.core));
    }

    let relative_to = options.relative.then_some(options.workdir.as_path());
    let paths = collector::collect(&aggregate, roots, relative_to)?;

    let emitter = emit::emitter_for(options.format, options.relative, options.skip_vhdl);
    let destination = options.destination();
    emit::write_output(emitter.as_ref(), &paths, destination.as_deref())?;

    if options.verbose {
        ui::trace(format_args!(
            "{} files written to {}",
            paths.len(),
            destination
                .as_deref()
                .map_or_else(|| "stdout".to_string(), |p| p.display().to_string())
        ));
    }
    Ok(())
}
