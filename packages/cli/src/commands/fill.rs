use super::{destination, load_project, scope_location, write_project, Destination};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use varsync_editor::{GroupVariablesSession, Project};

#[derive(Debug, Args)]
pub struct FillArgs {
    /// Project file
    pub project: String,

    /// Group whose members exchange their variables
    #[arg(short, long)]
    pub group: String,

    /// Layout declaring the group
    #[arg(short, long)]
    pub layout: Option<String>,

    /// Where to write the updated project (defaults to stdout, or the input
    /// file when `inPlace` is configured)
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Give every member of a group the variables of the other members
pub fn fill(args: FillArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let (project, shared) = filled_project(&args, &config, cwd)?;

    let destination = destination(cwd, &args.project, args.out.as_deref(), &config);
    let status = format!(
        "  {} Group {} now shares {} variables",
        "✓".green(),
        args.group.bold(),
        shared
    );
    match destination {
        Destination::File(_) => println!("{}", status),
        Destination::Stdout => eprintln!("{}", status),
    }
    write_project(&project, &destination, &config)
}

/// Fill the group and return the project with the number of variables the
/// members now share
pub(crate) fn filled_project(args: &FillArgs, config: &Config, cwd: &str) -> Result<(Project, usize)> {
    let mut project = load_project(cwd, &args.project)?;
    let location = scope_location(args.layout.as_deref(), config);

    let mut session = GroupVariablesSession::open(&project, location, &args.group)?;
    session.fill_missing_variables(&mut project)?;
    let shared = session.merged().len();

    Ok((project, shared))
}
