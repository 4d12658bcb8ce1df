use polars::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data_structs::sample::SampleCollection;
use crate::data_structs::schema::DomainSchema;

/// Merges the samples selected by `indices` into one long sequence,
/// generating an artificial genome from a set of short samples.
///
/// `indices` may contain duplicates (e.g. from sampling with
/// replacement); every occurrence contributes one copy of the sample.
/// If `shuffle` is set, the index order is randomized with the caller's
/// random state before concatenation, which determines the physical
/// ordering of samples in the result but not which samples are included.
/// Record order within each sample is always preserved. An empty index
/// array yields an empty frame with the canonical domain schema.
pub fn merge_samples<R: Rng>(
    collection: &SampleCollection,
    indices: &[usize],
    shuffle: bool,
    rng: &mut R,
) -> PolarsResult<DataFrame> {
    let mut order = indices.to_vec();
    if shuffle {
        order.shuffle(rng);
    }

    let mut selected = order.iter().map(|&idx| collection.sample(idx).domains());
    let Some(first) = selected.next() else {
        return Ok(DomainSchema::empty_frame());
    };

    let mut merged = first.clone();
    for frame in selected {
        merged.vstack_mut(frame)?;
    }
    merged.rechunk_mut();
    Ok(merged)
}
