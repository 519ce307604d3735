use super::{destination, load_project, print_report, read_json, scope_location, write_project};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use varsync_editor::{
    propagate_child_object_variable_changes, propagate_object_variable_changes, Project, PropagationReport,
    VariablesChangeset,
};

#[derive(Debug, Args)]
pub struct ApplyObjectArgs {
    /// Project file
    pub project: String,

    /// Object whose variables were edited
    #[arg(long)]
    pub object: String,

    /// Layout declaring the object (defaults to the configured layout, then
    /// the global scope)
    #[arg(short, long, conflicts_with = "events_based_object")]
    pub layout: Option<String>,

    /// Events-based object whose default variant declares the object
    #[arg(short, long)]
    pub events_based_object: Option<String>,

    /// JSON file with the changeset describing the edits
    #[arg(short, long)]
    pub changeset: String,

    /// Where to write the updated project
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Propagate edits already made to an object's variables to its instances,
/// or to the other variants of an events-based object
pub fn apply_object(args: ApplyObjectArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let (project, report) = applied_project(&args, &config, cwd)?;

    let destination = destination(cwd, &args.project, args.out.as_deref(), &config);
    print_report(&report, &destination);
    write_project(&project, &destination, &config)
}

pub(crate) fn applied_project(
    args: &ApplyObjectArgs,
    config: &Config,
    cwd: &str,
) -> Result<(Project, PropagationReport)> {
    let mut project = load_project(cwd, &args.project)?;
    let changeset: VariablesChangeset = read_json(cwd, &args.changeset)?;

    let report = match &args.events_based_object {
        Some(events_based_object) => {
            propagate_child_object_variable_changes(&mut project, events_based_object, &args.object, &changeset)?
        }
        None => {
            let location = scope_location(args.layout.as_deref(), config);
            propagate_object_variable_changes(&mut project, &location, &args.object, &changeset)?
        }
    };

    Ok((project, report))
}
