use super::{load_project, scope_location, to_json};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use varsync_editor::{GroupVariablesSession, VariablesContainer};

#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Project file
    pub project: String,

    /// Group whose variables are merged
    #[arg(short, long)]
    pub group: String,

    /// Layout declaring the group (defaults to the configured layout, then
    /// the global scope)
    #[arg(short, long)]
    pub layout: Option<String>,
}

/// Print the variables shared by every member of a group
pub fn merge(args: MergeArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let merged = merged_variables(&args, &config, cwd)?;
    println!("{}", to_json(&merged, &config)?);
    Ok(())
}

pub(crate) fn merged_variables(args: &MergeArgs, config: &Config, cwd: &str) -> Result<VariablesContainer> {
    let project = load_project(cwd, &args.project)?;
    let location = scope_location(args.layout.as_deref(), config);
    let session = GroupVariablesSession::open(&project, location, &args.group)?;
    Ok(session.merged().clone())
}
