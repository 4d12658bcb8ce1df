use hashbrown::HashSet;
use itertools::Itertools;
use log::debug;
use rand::rngs::StdRng;
use rand::{
    Rng,
    SeedableRng,
};

use super::{
    GenomeDraw,
    IndexSplit,
    SampleSplitter,
    SplitError,
    SplitMeta,
};
use crate::data_structs::genome_map::GenomeMap;
use crate::data_structs::sample::SampleCollection;

/// Bootstrap splitter over whole genomes.
///
/// Each repetition draws `round(n_genomes * train_ratio)` genomes **with
/// replacement** from the unique genome set; genomes never drawn form
/// the test set. Both sets are mapped back to contigs through the
/// summary table, so all contigs of one genome always land on the same
/// side of a split. Samples whose contig belongs to neither set are
/// omitted from that repetition.
#[derive(Debug)]
pub struct GenomeBootstrapSplitter {
    genome_map:  GenomeMap,
    n_splits:    usize,
    train_ratio: f64,
    rng:         StdRng,
}

impl GenomeBootstrapSplitter {
    pub fn try_new(
        genome_map: GenomeMap,
        n_splits: usize,
        train_ratio: f64,
        random_seed: u64,
    ) -> Result<Self, SplitError> {
        if train_ratio <= 0.0 || train_ratio >= 1.0 {
            return Err(SplitError::Configuration(format!(
                "Train ratio has to be a fraction between 0.0 and 1.0, got {}",
                train_ratio
            )));
        }
        Ok(Self {
            genome_map,
            n_splits,
            train_ratio,
            rng: StdRng::seed_from_u64(random_seed),
        })
    }
}

impl SampleSplitter for GenomeBootstrapSplitter {
    fn split(
        &mut self,
        collection: &SampleCollection,
    ) -> Result<Vec<IndexSplit>, SplitError> {
        let genome_ids: Vec<String> = self
            .genome_map
            .unique_genomes()
            .into_iter()
            .map(str::to_string)
            .collect();
        if genome_ids.is_empty() {
            return Err(SplitError::Configuration(
                "No genomes with known contigs in the summary table".to_string(),
            ));
        }

        let train_num = (genome_ids.len() as f64 * self.train_ratio).round() as usize;

        let mut splits = Vec::with_capacity(self.n_splits);
        for rep in 0..self.n_splits {
            // Sampling with replacement; repeatedly drawn genomes are
            // intentionally over-represented in the merged sequence.
            let train_genomes: Vec<String> = (0..train_num)
                .map(|_| genome_ids[self.rng.gen_range(0..genome_ids.len())].clone())
                .collect();
            let train_set: HashSet<&str> =
                train_genomes.iter().map(String::as_str).collect();
            // Set difference: a genome drawn into train can never also
            // be tested on in this repetition.
            let test_genomes: Vec<String> = genome_ids
                .iter()
                .filter(|genome_id| !train_set.contains(genome_id.as_str()))
                .cloned()
                .sorted()
                .collect();
            let test_set: HashSet<&str> =
                test_genomes.iter().map(String::as_str).collect();

            let train_contigs: HashSet<&str> =
                self.genome_map.contigs_of(&train_set).into_iter().collect();
            let test_contigs: HashSet<&str> =
                self.genome_map.contigs_of(&test_set).into_iter().collect();
            drop(train_set);
            drop(test_set);

            let mut train = Vec::new();
            let mut test = Vec::new();
            let mut unmapped = 0usize;
            for (idx, sample) in collection.samples().iter().enumerate() {
                if train_contigs.contains(sample.contig_id()) {
                    train.push(idx);
                }
                else if test_contigs.contains(sample.contig_id()) {
                    test.push(idx);
                }
                else {
                    unmapped += 1;
                }
            }
            if unmapped > 0 {
                debug!(
                    "Split {}: {} samples mapped to neither train nor test",
                    rep, unmapped
                );
            }

            let meta = SplitMeta {
                label: format!("Split {}", rep),
                name:  format!("split_{}", rep),
                group: format!("split_{}", rep),
            };
            splits.push(
                IndexSplit::new(meta, train, test).with_genomes(GenomeDraw {
                    train_genomes,
                    test_genomes,
                }),
            );
        }
        Ok(splits)
    }
}
