mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply_group, apply_object, fill, merge, ApplyGroupArgs, ApplyObjectArgs, FillArgs, MergeArgs};
use tracing_subscriber::EnvFilter;

/// Varsync - keep group, object, instance and variant variables in sync
#[derive(Parser, Debug)]
#[command(name = "varsync")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the variables shared by every member of a group
    Merge(MergeArgs),

    /// Copy missing variables between the members of a group
    Fill(FillArgs),

    /// Apply a changeset made on a group's variables
    ApplyGroup(ApplyGroupArgs),

    /// Apply a changeset made on an object's variables to its instances or
    /// variants
    ApplyObject(ApplyObjectArgs),
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match cli.command {
        Command::Merge(args) => merge(args, &cwd),
        Command::Fill(args) => fill(args, &cwd),
        Command::ApplyGroup(args) => apply_group(args, &cwd),
        Command::ApplyObject(args) => apply_object(args, &cwd),
    }
}

fn main() {
    // Logs go to stderr so that JSON printed on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
