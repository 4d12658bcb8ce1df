use std::path::PathBuf;

use bgcval::prelude::*;
use clap::Args;
use log::info;

use crate::utils::validate_output;
use crate::PipelineCommand;

#[derive(Args, Debug, Clone)]
pub(crate) struct BootstrapArgs {
    #[arg(short, long, required = true, help = "Path to Domain CSV file.")]
    input: PathBuf,

    #[arg(
        short,
        long,
        required = true,
        help = "Path to labelled contig summary CSV file."
    )]
    summary: PathBuf,

    #[arg(
        short,
        long,
        required = true,
        help = "Number of splits to generate."
    )]
    number: usize,

    #[arg(
        short = 'r',
        long = "train-ratio",
        required = true,
        help = "Ratio of genomes to use for training (rest used for testing)."
    )]
    train_ratio: f64,

    #[arg(
        long = "random-seed",
        default_value_t = 1,
        help = "Random seed for splitting."
    )]
    random_seed: u64,

    #[arg(short, long, required = true, help = "Path to output splits folder.")]
    output: PathBuf,
}

impl PipelineCommand for BootstrapArgs {
    fn run(&self) -> anyhow::Result<()> {
        validate_output(&self.output)?;

        let summary = read_summary(&self.summary)?;
        info!("Splitting genome IDs: {}", summary.unique_genomes().join(","));

        let domains = read_domains(&self.input, None, None)?;
        let samples = domains_to_samples(&domains, CONTIG_ID_COL)?;
        info!(
            "Loaded {} samples and {} domains from {}",
            samples.len(),
            domains.height(),
            self.input.display()
        );
        let collection = SampleCollection::unlabelled(samples);

        let mut splitter = GenomeBootstrapSplitter::try_new(
            summary,
            self.number,
            self.train_ratio,
            self.random_seed,
        )?;
        let mut orchestrator = SplitOrchestrator::new(false, false, self.random_seed);
        let splits = orchestrator.generate(&collection, &mut splitter)?;

        info!("Output will be saved to {}", self.output.display());
        SplitRunWriter::new(&self.output).write_run(splits)?;
        Ok(())
    }
}
