use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{
    IndexSplit,
    SampleSplitter,
    SplitError,
    SplitMeta,
};
use crate::data_structs::sample::SampleCollection;

/// K-fold splitter over a sample collection.
///
/// The index set is shuffled once, then partitioned into `n_folds`
/// contiguous folds (the first `n mod k` folds get one extra sample).
/// Each fold in turn becomes the test set; the train set is the
/// ascending complement. Test sets are pairwise disjoint and cover every
/// sample exactly once.
#[derive(Debug)]
pub struct KFoldSplitter {
    n_folds: usize,
    rng:     StdRng,
}

impl KFoldSplitter {
    pub fn new(
        n_folds: usize,
        random_seed: u64,
    ) -> Self {
        Self {
            n_folds,
            rng: StdRng::seed_from_u64(random_seed),
        }
    }
}

impl SampleSplitter for KFoldSplitter {
    fn split(
        &mut self,
        collection: &SampleCollection,
    ) -> Result<Vec<IndexSplit>, SplitError> {
        let n_samples = collection.len();
        if self.n_folds < 2 {
            return Err(SplitError::Configuration(format!(
                "Fold count has to be at least 2, got {}",
                self.n_folds
            )));
        }
        if self.n_folds > n_samples {
            return Err(SplitError::Configuration(format!(
                "Cannot split {} samples into {} folds",
                n_samples, self.n_folds
            )));
        }

        // Single global shuffle; folds are contiguous windows of it.
        let mut order: Vec<usize> = (0..n_samples).collect();
        order.shuffle(&mut self.rng);

        let base = n_samples / self.n_folds;
        let remainder = n_samples % self.n_folds;

        let mut splits = Vec::with_capacity(self.n_folds);
        let mut start = 0;
        for fold in 0..self.n_folds {
            let size = base + usize::from(fold < remainder);
            let test = order[start..start + size].to_vec();
            start += size;

            let mut in_test = vec![false; n_samples];
            for &idx in &test {
                in_test[idx] = true;
            }
            let train: Vec<usize> = (0..n_samples).filter(|&idx| !in_test[idx]).collect();

            debug!(
                "Fold {}: {} train, {} test samples",
                fold + 1,
                train.len(),
                test.len()
            );
            let meta = SplitMeta {
                label: format!("Fold {}", fold + 1),
                name:  format!("fold{}", fold + 1),
                group: format!("fold{}", fold + 1),
            };
            splits.push(IndexSplit::new(meta, train, test));
        }
        Ok(splits)
    }
}
