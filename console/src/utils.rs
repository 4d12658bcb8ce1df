use std::path::Path;

use anyhow::bail;
use clap::Args;
use log::LevelFilter;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short,
        long,
        default_value_t = false,
        help = "Enable debug output."
    )]
    verbose: bool,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        let level = if self.verbose {
            LevelFilter::Debug
        }
        else {
            LevelFilter::Info
        };
        pretty_env_logger::formatted_builder()
            .filter_level(level)
            .try_init()?;
        Ok(())
    }
}

/// Runs never overwrite an earlier run's splits.
pub(crate) fn validate_output(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        bail!(
            "Output folder {} already exists, choose a new folder per run",
            path.display()
        );
    }
    Ok(())
}
