use std::path::PathBuf;

use anyhow::anyhow;
use bgcval::prelude::*;
use clap::Args;
use log::info;

use crate::utils::validate_output;
use crate::PipelineCommand;

#[derive(Args, Debug, Clone)]
pub(crate) struct LcoArgs {
    #[arg(
        short = 'p',
        long,
        required = true,
        help = "Path to positive samples file."
    )]
    positive: PathBuf,

    #[arg(
        short = 'n',
        long,
        required = true,
        help = "Path to negative samples file."
    )]
    negative: PathBuf,

    #[arg(
        short = 'c',
        long,
        required = true,
        help = "Path to CSV file containing classes of positive samples."
    )]
    classes: PathBuf,

    #[arg(
        long = "classes-column",
        default_value = "classes",
        help = "Class column in the classes file."
    )]
    classes_column: String,

    #[arg(
        short = 'e',
        long = "maxevalue",
        required = true,
        help = "Maximum domain independent e-value."
    )]
    max_evalue: f64,

    #[arg(
        long = "neg-test-size",
        default_value_t = 0.33,
        help = "Fraction of negative samples to use for testing."
    )]
    neg_test_size: f64,

    #[arg(
        long = "pos-test-count",
        default_value_t = 300,
        help = "Number of positive test samples (uses sampling with replacement)."
    )]
    pos_test_count: usize,

    #[arg(
        long = "random-seed",
        help = "Random seed used to shuffle the samples. Repeat for multiple seeded runs."
    )]
    random_seed: Vec<u64>,

    #[arg(short, long, required = true, help = "Output samples folder path.")]
    output: PathBuf,
}

impl LcoArgs {
    // Attach classes to positive samples, drop hybrid/unknown classes
    // and append negatives with the sentinel label.
    fn assemble_collection(
        &self,
    ) -> anyhow::Result<(Vec<String>, SampleCollection)> {
        let pos_domains = read_domains(&self.positive, Some(self.max_evalue), None)?;
        let pos_samples = domains_to_samples(&pos_domains, CONTIG_ID_COL)?;
        info!(
            "Loaded {} positive samples and {} domains from {}",
            pos_samples.len(),
            pos_domains.height(),
            self.positive.display()
        );

        let neg_domains = read_domains(&self.negative, Some(self.max_evalue), None)?;
        let neg_samples = domains_to_samples(&neg_domains, CONTIG_ID_COL)?;
        info!(
            "Loaded {} negative samples and {} domains from {}",
            neg_samples.len(),
            neg_domains.height(),
            self.negative.display()
        );

        let class_map = read_classes(&self.classes, &self.classes_column)?;
        let pos_classes = pos_samples
            .iter()
            .map(|sample| {
                class_map
                    .get(sample.contig_id())
                    .cloned()
                    .ok_or_else(|| {
                        anyhow!("No class found for sample {}", sample.contig_id())
                    })
            })
            .collect::<anyhow::Result<Vec<String>>>()?;

        let selected_classes = select_lco_classes(&pos_classes);
        info!("Selected classes: {}", selected_classes.join(", "));

        let total_pos = pos_samples.len();
        let mut samples = Vec::new();
        let mut classes = Vec::new();
        for (sample, class) in pos_samples.into_iter().zip(pos_classes) {
            if selected_classes.contains(&class) {
                samples.push(sample);
                classes.push(SampleClass::Positive(class));
            }
        }
        info!(
            "{} non-hybrid of {} total BGCs remained",
            samples.len(),
            total_pos
        );

        for sample in neg_samples {
            samples.push(sample);
            classes.push(SampleClass::Negative);
        }
        info!("{} total samples", samples.len());

        Ok((selected_classes, SampleCollection::try_new(samples, classes)?))
    }
}

impl PipelineCommand for LcoArgs {
    fn run(&self) -> anyhow::Result<()> {
        validate_output(&self.output)?;

        let (selected_classes, collection) = self.assemble_collection()?;

        let seeds = if self.random_seed.is_empty() {
            vec![0]
        }
        else {
            self.random_seed.clone()
        };

        let mut all_splits = Vec::new();
        for seed in seeds {
            info!("Random seed {}", seed);
            let mut splitter = LeaveClassOutSplitter::try_new(
                selected_classes.clone(),
                self.neg_test_size,
                Some(self.pos_test_count),
                seed,
            )?;
            let mut orchestrator = SplitOrchestrator::new(false, true, seed);
            all_splits.extend(orchestrator.generate(&collection, &mut splitter)?);
        }

        info!("Output will be saved to {}", self.output.display());
        SplitRunWriter::new(&self.output).write_run(all_splits)?;
        Ok(())
    }
}
