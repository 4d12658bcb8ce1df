//! Common helpers shared across the crate: deterministic seed derivation
//! for parallel workers, schema construction from parallel arrays, and
//! small diagnostics over cluster-state sequences.

use itertools::Itertools;
use polars::prelude::*;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Derives a worker seed from a global seed and a stable entity identifier.
///
/// Workers that process independent entities (e.g. one reference bacterium
/// each) must seed their generators deterministically so results do not
/// depend on scheduling order or worker count. The derivation is FNV-1a
/// over the big-endian bytes of `global_seed` followed by the UTF-8 bytes
/// of `entity_id`, which any other implementation can reproduce exactly.
pub fn derive_seed(
    global_seed: u64,
    entity_id: &str,
) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in global_seed
        .to_be_bytes()
        .into_iter()
        .chain(entity_id.bytes())
    {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Counts BGC regions in a sequence of per-domain cluster states.
///
/// Every maximal run of consecutive `1` states counts as one region.
pub fn count_cluster_regions<I>(states: I) -> usize
where
    I: IntoIterator<Item = i64>, {
    let mut prev = 0;
    let mut clusters = 0;
    for state in states {
        if state == 1 && prev == 0 {
            clusters += 1;
        }
        prev = state;
    }
    clusters
}

/// Creates a schema from separate arrays of names and data types.
pub(crate) fn schema_from_arrays(
    names: &[&str],
    dtypes: &[DataType],
) -> Schema {
    Schema::from_iter(names.iter().cloned().map_into().zip(dtypes.iter().cloned()))
}
