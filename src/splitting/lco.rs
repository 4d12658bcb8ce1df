use itertools::Itertools;
use log::{
    debug,
    warn,
};
use rand::rngs::StdRng;
use rand::seq::{
    index,
    SliceRandom,
};
use rand::{
    Rng,
    SeedableRng,
};

use super::{
    IndexSplit,
    SampleSplitter,
    SplitError,
    SplitMeta,
};
use crate::data_structs::class::NEG_CLASS_NAME;
use crate::data_structs::sample::SampleCollection;

/// Selects the positive classes eligible for leave-class-out validation.
///
/// Hybrid classes (`;`-joined), `Other`, unknown (`?`) and `Nucleoside`
/// classes are excluded; the remaining unique names are sorted to give a
/// stable class ordering.
pub fn select_lco_classes<S: AsRef<str>>(classes: &[S]) -> Vec<String> {
    classes
        .iter()
        .map(AsRef::as_ref)
        .filter(|class| {
            !class.contains(';')
                && !class.contains("Other")
                && !class.contains('?')
                && !class.contains("Nucleoside")
        })
        .unique()
        .sorted()
        .map(str::to_string)
        .collect()
}

/// Splitter that partitions a labelled sample collection in
/// Leave-Class-Out fashion.
///
/// For each positive class, the train split contains a fixed random
/// subset of the negative samples plus all positive samples *except* the
/// class under test, and the test split contains the remaining negatives
/// plus all samples of that class. The negative shuffle-split is drawn
/// once and reused verbatim across all classes. The positive test set
/// can be resampled to a fixed count: classes larger than the count are
/// downsampled without replacement, smaller classes keep every sample
/// and draw the remainder with replacement.
#[derive(Debug)]
pub struct LeaveClassOutSplitter {
    unique_classes: Vec<String>,
    neg_test_size:  f64,
    pos_test_count: Option<usize>,
    random_seed:    u64,
    rng:            StdRng,
}

impl LeaveClassOutSplitter {
    /// Creates a splitter for the given ordered positive class names.
    ///
    /// `neg_test_size` is the fraction of negative samples used for
    /// testing; the rest is used for training.
    pub fn try_new(
        unique_classes: Vec<String>,
        neg_test_size: f64,
        pos_test_count: Option<usize>,
        random_seed: u64,
    ) -> Result<Self, SplitError> {
        if !(0.0..=1.0).contains(&neg_test_size) {
            return Err(SplitError::Configuration(format!(
                "Negative test size has to be a fraction between 0.0 and 1.0, got {}",
                neg_test_size
            )));
        }
        if pos_test_count == Some(0) {
            return Err(SplitError::Configuration(
                "Positive test count has to be at least 1".to_string(),
            ));
        }
        Ok(Self {
            unique_classes,
            neg_test_size,
            pos_test_count,
            random_seed,
            rng: StdRng::seed_from_u64(random_seed),
        })
    }

    // Shuffle-split of the negative indices, drawn once per `split` call
    // and shared by every class iteration.
    fn split_negatives(
        &mut self,
        neg_idx: &[usize],
    ) -> (Vec<usize>, Vec<usize>) {
        let mut order = neg_idx.to_vec();
        order.shuffle(&mut self.rng);
        let n_test = (self.neg_test_size * neg_idx.len() as f64).ceil() as usize;
        let neg_test = order[..n_test].to_vec();
        let neg_train = order[n_test..].to_vec();
        (neg_train, neg_test)
    }

    fn resample_test_indices(
        &mut self,
        pos_test_idx: Vec<usize>,
    ) -> Vec<usize> {
        let Some(target) = self.pos_test_count else {
            return pos_test_idx;
        };
        let natural = pos_test_idx.len();
        if natural == 0 {
            return pos_test_idx;
        }
        if natural > target {
            // More samples than requested, choose without replacement.
            index::sample(&mut self.rng, natural, target)
                .iter()
                .map(|i| pos_test_idx[i])
                .collect()
        }
        else {
            // Keep every sample, then draw the remainder with
            // replacement to reach the target exactly.
            let mut upsampled = pos_test_idx.clone();
            upsampled.extend(
                (0..target - natural).map(|_| pos_test_idx[self.rng.gen_range(0..natural)]),
            );
            upsampled
        }
    }
}

impl SampleSplitter for LeaveClassOutSplitter {
    fn split(
        &mut self,
        collection: &SampleCollection,
    ) -> Result<Vec<IndexSplit>, SplitError> {
        let classes = collection.classes();
        let neg_idx: Vec<usize> = classes
            .iter()
            .enumerate()
            .filter_map(|(idx, class)| class.is_negative().then_some(idx))
            .collect();
        if neg_idx.is_empty() {
            return Err(SplitError::Configuration(format!(
                "No negative samples. Add samples with class = {}.",
                NEG_CLASS_NAME
            )));
        }

        let (neg_train_idx, neg_test_idx) = self.split_negatives(&neg_idx);

        let class_names = self.unique_classes.clone();
        let mut splits = Vec::with_capacity(class_names.len());
        for class_name in &class_names {
            // Train on all other classes except negative.
            let pos_train_idx: Vec<usize> = classes
                .iter()
                .enumerate()
                .filter_map(|(idx, class)| {
                    (!class.matches(class_name) && !class.is_negative()).then_some(idx)
                })
                .collect();
            // Test on the given class.
            let pos_test_idx: Vec<usize> = classes
                .iter()
                .enumerate()
                .filter_map(|(idx, class)| class.matches(class_name).then_some(idx))
                .collect();
            let natural = pos_test_idx.len();
            if natural == 0 {
                warn!("No samples of class {} found", class_name);
            }
            let pos_test_idx = self.resample_test_indices(pos_test_idx);

            debug!(
                "Train: {} pos, {} neg. Test: {} pos, {} neg",
                pos_train_idx.len(),
                neg_train_idx.len(),
                pos_test_idx.len(),
                neg_test_idx.len()
            );

            // Unions of the positive and negative partitions.
            let mut train = pos_train_idx;
            train.extend_from_slice(&neg_train_idx);
            let mut test = pos_test_idx;
            test.extend_from_slice(&neg_test_idx);

            let label = match self.pos_test_count {
                Some(count) => {
                    format!("{} ({} BGCs sampled {}x)", class_name, natural, count)
                },
                None => format!("{} ({} BGCs)", class_name, natural),
            };
            let meta = SplitMeta {
                label,
                name: format!("{}.seed{}", class_name, self.random_seed),
                group: class_name.clone(),
            };
            splits.push(IndexSplit::new(meta, train, test));
        }
        Ok(splits)
    }
}
