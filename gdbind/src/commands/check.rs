use clap::Args;
use eyre::{Context, Result};

use super::{InputArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with an error when any warning is reported
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = ops::load(&self.inputs.options()).unwrap_or_exit();
        let report = ops::check(&project);

        if self.json {
            let json = serde_json::to_string_pretty(&report.diagnostics)
                .wrap_err("Failed to serialize diagnostics")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if self.strict && report.warning_count() > 0 {
            std::process::exit(1);
        }

        Ok(())
    }
}
