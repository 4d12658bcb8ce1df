use log::{
    debug,
    info,
};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::merge::merge_samples;
use super::{
    SampleSplitter,
    SplitMeta,
};
use crate::data_structs::sample::SampleCollection;

/// One merged train/test sequence pair with its metadata.
#[derive(Debug, Clone)]
pub struct MergedSplit {
    pub meta:  SplitMeta,
    pub train: DataFrame,
    pub test:  DataFrame,
}

/// Drives a splitter and the sample merger to produce merged splits.
///
/// The orchestrator owns the random state used for merge-time shuffling,
/// independent of the splitter's state. Shuffling can be configured
/// separately for the train and test side; cross-validation runs
/// typically shuffle only the test sequence, so the training sequence
/// keeps the sample order the splitter produced.
pub struct SplitOrchestrator {
    shuffle_train: bool,
    shuffle_test:  bool,
    rng:           StdRng,
}

impl SplitOrchestrator {
    pub fn new(
        shuffle_train: bool,
        shuffle_test: bool,
        merge_seed: u64,
    ) -> Self {
        Self {
            shuffle_train,
            shuffle_test,
            rng: StdRng::seed_from_u64(merge_seed),
        }
    }

    /// Generates every split of `splitter` over `collection` and merges
    /// each index partition into one train and one test sequence.
    ///
    /// All splits are produced in memory; nothing is persisted here, so
    /// a failing splitter can never leave a partial run on disk.
    pub fn generate<S>(
        &mut self,
        collection: &SampleCollection,
        splitter: &mut S,
    ) -> anyhow::Result<Vec<MergedSplit>>
    where
        S: SampleSplitter, {
        let index_splits = splitter.split(collection)?;

        let mut merged = Vec::with_capacity(index_splits.len());
        for split in index_splits {
            if let Some(draw) = &split.genomes {
                info!(
                    "{}: train genomes: {}",
                    split.meta.name,
                    draw.train_genomes.join(",")
                );
                info!(
                    "{}: test genomes: {}",
                    split.meta.name,
                    draw.test_genomes.join(",")
                );
            }
            let train =
                merge_samples(collection, &split.train, self.shuffle_train, &mut self.rng)?;
            let test =
                merge_samples(collection, &split.test, self.shuffle_test, &mut self.rng)?;
            debug!(
                "{}: merged {} train and {} test domains",
                split.meta.name,
                train.height(),
                test.height()
            );
            merged.push(MergedSplit {
                meta: split.meta,
                train,
                test,
            });
        }
        Ok(merged)
    }
}
