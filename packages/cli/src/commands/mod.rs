pub mod apply_group;
pub mod apply_object;
pub mod fill;
pub mod merge;

pub use apply_group::{apply_group, ApplyGroupArgs};
pub use apply_object::{apply_object, ApplyObjectArgs};
pub use fill::{fill, FillArgs};
pub use merge::{merge, MergeArgs};

use crate::config::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracing::debug;
use varsync_editor::{PropagationReport, Project, ScopeLocation};

/// Resolve a path given on the command line against the working directory
pub(crate) fn resolve_path(cwd: &str, path: &str) -> PathBuf {
    PathBuf::from(cwd).join(path)
}

pub(crate) fn load_project(cwd: &str, path: &str) -> Result<Project> {
    let path = resolve_path(cwd, path);
    Project::load(&path).with_context(|| format!("Cannot load project {}", path.display()))
}

/// Read a JSON document (variables or changeset) from a file
pub(crate) fn read_json<T: DeserializeOwned>(cwd: &str, path: &str) -> Result<T> {
    let path = resolve_path(cwd, path);
    let content =
        std::fs::read_to_string(&path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// `--layout`, then the configured default layout, then the global scope
pub(crate) fn scope_location(layout: Option<&str>, config: &Config) -> ScopeLocation {
    let location = match layout.or(config.default_layout.as_deref()) {
        Some(layout) => ScopeLocation::layout(layout),
        None => ScopeLocation::Global,
    };
    debug!(?location, "Resolved scope");
    location
}

/// Where an updated project goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Destination {
    File(PathBuf),
    Stdout,
}

pub(crate) fn destination(cwd: &str, project_path: &str, out: Option<&str>, config: &Config) -> Destination {
    match out {
        Some(out) => Destination::File(resolve_path(cwd, out)),
        None if config.in_place => Destination::File(resolve_path(cwd, project_path)),
        None => Destination::Stdout,
    }
}

pub(crate) fn write_project(project: &Project, destination: &Destination, config: &Config) -> Result<()> {
    match destination {
        Destination::File(path) => {
            project
                .save(path, config.pretty)
                .with_context(|| format!("Cannot write project {}", path.display()))?;
            println!("  {} Wrote {}", "✓".green(), path.display());
        }
        Destination::Stdout => println!("{}", project.to_json(config.pretty)?),
    }
    Ok(())
}

pub(crate) fn to_json<T: serde::Serialize>(value: &T, config: &Config) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Status lines go to stderr when the project itself is printed on stdout
pub(crate) fn print_report(report: &PropagationReport, destination: &Destination) {
    let line = format!(
        "  {} Updated {} objects, {} instances in {} containers",
        "✓".green(),
        report.objects,
        report.instances,
        report.instance_containers
    );
    match destination {
        Destination::File(_) => println!("{}", line),
        Destination::Stdout => eprintln!("{}", line),
    }
}
