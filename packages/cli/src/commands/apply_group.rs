use super::{destination, load_project, print_report, read_json, scope_location, write_project};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use varsync_editor::{GroupVariablesSession, Project, PropagationReport, VariablesChangeset, VariablesContainer};

#[derive(Debug, Args)]
pub struct ApplyGroupArgs {
    /// Project file
    pub project: String,

    /// Group whose variables were edited
    #[arg(short, long)]
    pub group: String,

    /// Layout declaring the group
    #[arg(short, long)]
    pub layout: Option<String>,

    /// JSON file with the edited group variables
    #[arg(long)]
    pub variables: String,

    /// JSON file with the changeset describing the edits
    #[arg(short, long)]
    pub changeset: String,

    /// Where to write the updated project
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Replay a changeset made on a group's variables on its members and their
/// instances
pub fn apply_group(args: ApplyGroupArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let (project, report) = applied_project(&args, &config, cwd)?;

    let destination = destination(cwd, &args.project, args.out.as_deref(), &config);
    print_report(&report, &destination);
    write_project(&project, &destination, &config)
}

pub(crate) fn applied_project(
    args: &ApplyGroupArgs,
    config: &Config,
    cwd: &str,
) -> Result<(Project, PropagationReport)> {
    let mut project = load_project(cwd, &args.project)?;
    let edited: VariablesContainer = read_json(cwd, &args.variables)?;
    let changeset: VariablesChangeset = read_json(cwd, &args.changeset)?;
    let location = scope_location(args.layout.as_deref(), config);

    let session = GroupVariablesSession::open(&project, location, &args.group)?;
    let report = session.commit(&mut project, &edited, &changeset)?;

    Ok((project, report))
}
