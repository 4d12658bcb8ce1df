//! Train/test splitting core.
//!
//! Three splitter variants implement the [`SampleSplitter`] trait:
//! [`KFoldSplitter`](kfold::KFoldSplitter) for k-fold cross-validation,
//! [`LeaveClassOutSplitter`](lco::LeaveClassOutSplitter) for
//! leave-class-out validation and
//! [`GenomeBootstrapSplitter`](bootstrap::GenomeBootstrapSplitter) for
//! genome-aware bootstrap resampling. Each splitter owns its own seeded
//! random state; a process-wide generator is never touched, so splitter
//! instances running in separate workers cannot interfere with each
//! other's sequences.

use std::error::Error;
use std::fmt::{
    Display,
    Formatter,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::sample::SampleCollection;

pub mod bootstrap;
pub mod kfold;
pub mod lco;
pub mod merge;
pub mod orchestrator;

#[cfg(test)]
mod tests;

/// Errors raised by the splitting core.
#[derive(Debug)]
pub enum SplitError {
    /// Invalid splitter configuration: a fraction outside its valid
    /// range, an incompatible fold count, missing negative samples or
    /// duplicate split identifiers.
    Configuration(String),
    /// Inputs violate a splitting invariant, e.g. merged-sequence
    /// identifiers collide with existing output.
    DataIntegrity(String),
}

impl Display for SplitError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SplitError::Configuration(desc) => {
                write!(f, "Configuration error: {}", desc)
            },
            SplitError::DataIntegrity(desc) => {
                write!(f, "Data integrity error: {}", desc)
            },
        }
    }
}

impl Error for SplitError {}

/// Metadata describing one generated split.
///
/// `name` is unique within a run and names the persisted sequence files;
/// `group` identifies which class or fold a split belongs to, so
/// evaluation can aggregate related splits (e.g. all seeds of one class).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMeta {
    pub label: String,
    pub name:  String,
    pub group: String,
}

/// Genome identifiers drawn during one bootstrap repetition, kept for
/// audit logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeDraw {
    /// Genomes drawn into training, with repetition.
    pub train_genomes: Vec<String>,
    /// Genomes never drawn, eligible for testing.
    pub test_genomes:  Vec<String>,
}

/// One labelled train/test index partition of a sample collection.
///
/// Index vectors may overlap or contain duplicates depending on the
/// splitter's sampling policy; they always index into the collection the
/// split was generated from.
#[derive(Debug, Clone)]
pub struct IndexSplit {
    pub meta:  SplitMeta,
    pub train: Vec<usize>,
    pub test:  Vec<usize>,
    /// Audit record of the drawn genomes, for genome-aware splits.
    pub genomes: Option<GenomeDraw>,
}

impl IndexSplit {
    pub fn new(
        meta: SplitMeta,
        train: Vec<usize>,
        test: Vec<usize>,
    ) -> Self {
        Self {
            meta,
            train,
            test,
            genomes: None,
        }
    }

    pub fn with_genomes(
        mut self,
        genomes: GenomeDraw,
    ) -> Self {
        self.genomes = Some(genomes);
        self
    }
}

/// Partitions a sample collection into labelled train/test index splits.
///
/// Splitters read the collection but never mutate it; `split` takes the
/// receiver mutably only to advance the splitter's own random state.
pub trait SampleSplitter {
    fn split(
        &mut self,
        collection: &SampleCollection,
    ) -> Result<Vec<IndexSplit>, SplitError>;
}
