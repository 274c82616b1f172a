use std::path::PathBuf;

use clap::{Args, builder::NonEmptyStringValueParser};
use eyre::Result;

use super::{InputArgs, UnwrapOrExit};
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Header path to write (overrides paths.output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Namespace wrapping the generated classes (overrides header.namespace)
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub namespace: Option<String>,

    /// Preview the generated header without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let mut options = self.inputs.options();
        options.output = self.output.clone();
        options.namespace = self.namespace.clone();

        let project = ops::load(&options).unwrap_or_exit();
        let report = ops::bake(
            &project,
            BakeOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
