use clap::Args;
use eyre::{Context, Result};

use super::{
    UnwrapOrExit,
    source::{SourceArgs, env_var},
};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the tables as JSON, in the format --from-json reads
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let config = self
            .source
            .load_config()
            .resolve_inspect(&self.source.overrides(), env_var)
            .unwrap_or_exit();

        let source = ops::open_source(&config.source);
        let report = ops::inspect(source.as_ref(), &config)?;

        if self.json {
            let json = serde_json::to_string_pretty(&report.tables)
                .wrap_err("Failed to serialize tables")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
