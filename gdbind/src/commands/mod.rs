mod bake;
mod check;
mod completions;
mod info;

use std::path::PathBuf;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use info::InfoCommand;

use crate::ops::InputOptions;

/// Extension trait for exiting on input errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gdbind_api::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gdbind")]
#[command(version)]
#[command(about = "Generate C++ engine headers from Godot's api.json")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the engine header
    Bake(BakeCommand),

    /// Validate api.json and report fallbacks without generating
    Check(CheckCommand),

    /// Show API and configuration information
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Input locations shared by every command that reads an API.
#[derive(Args)]
pub struct InputArgs {
    /// Path to gdbind.toml (defaults to ./gdbind.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to api.json (overrides paths.api)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    pub fn options(&self) -> InputOptions {
        InputOptions {
            config: self.config.clone(),
            input: self.input.clone(),
            ..InputOptions::default()
        }
    }
}
