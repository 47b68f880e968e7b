use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pgtypes_config::Overrides;

use super::{
    UnwrapOrExit,
    source::{SourceArgs, env_var},
};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Root directory for the generated packages
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print the generated units without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            output: self.output.clone(),
            ..self.source.overrides()
        }
    }

    pub fn run(&self) -> Result<()> {
        let config = self
            .source
            .load_config()
            .resolve(&self.overrides(), env_var)
            .unwrap_or_exit();

        let source = ops::open_source(&config.source);
        let report = ops::generate(source.as_ref(), &config, self.dry_run)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
