use clap::Args;
use eyre::Result;

use super::{InputArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    #[command(flatten)]
    pub inputs: InputArgs,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let project = ops::load(&self.inputs.options()).unwrap_or_exit();

        let report = ops::info(&project);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
