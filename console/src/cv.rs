use std::path::PathBuf;

use bgcval::prelude::*;
use clap::Args;
use log::info;

use crate::utils::validate_output;
use crate::PipelineCommand;

#[derive(Args, Debug, Clone)]
pub(crate) struct CvArgs {
    #[arg(required = true, help = "Paths to Domain CSV files to split.")]
    samples: Vec<PathBuf>,

    #[arg(
        short = 'e',
        long = "maxevalue",
        required = true,
        help = "Maximum domain independent e-value."
    )]
    max_evalue: f64,

    #[arg(short, long, required = true, help = "Number of folds.")]
    folds: usize,

    #[arg(
        long = "random-seed",
        default_value_t = 0,
        help = "Random seed used to shuffle the samples."
    )]
    random_seed: u64,

    #[arg(short, long, required = true, help = "Output samples folder path.")]
    output: PathBuf,
}

impl PipelineCommand for CvArgs {
    fn run(&self) -> anyhow::Result<()> {
        validate_output(&self.output)?;

        let mut all_samples = Vec::new();
        for path in &self.samples {
            let domains = read_domains(path, Some(self.max_evalue), None)?;
            let samples = domains_to_samples(&domains, CONTIG_ID_COL)?;
            info!(
                "Loaded {} samples and {} domains from {}",
                samples.len(),
                domains.height(),
                path.display()
            );
            all_samples.extend(samples);
        }
        let collection = SampleCollection::unlabelled(all_samples);

        info!("Random seed {}", self.random_seed);
        let mut splitter = KFoldSplitter::new(self.folds, self.random_seed);
        let mut orchestrator = SplitOrchestrator::new(false, true, self.random_seed);
        let splits = orchestrator.generate(&collection, &mut splitter)?;

        info!("Output will be saved to {}", self.output.display());
        SplitRunWriter::new(&self.output).write_run(splits)?;
        Ok(())
    }
}
