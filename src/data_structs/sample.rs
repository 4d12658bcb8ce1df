use polars::prelude::*;

use crate::data_structs::class::SampleClass;
use crate::splitting::SplitError;

/// Ordered protein-domain records belonging to one contig.
///
/// Samples are immutable once loaded; identity is the contig ID.
#[derive(Debug, Clone)]
pub struct DomainSample {
    contig_id: String,
    domains:   DataFrame,
}

impl DomainSample {
    pub fn new(
        contig_id: impl Into<String>,
        domains: DataFrame,
    ) -> Self {
        Self {
            contig_id: contig_id.into(),
            domains,
        }
    }

    /// Returns the contig identifier.
    pub fn contig_id(&self) -> &str {
        &self.contig_id
    }

    /// Returns the domain records of this sample.
    pub fn domains(&self) -> &DataFrame {
        &self.domains
    }

    /// Number of domain records.
    pub fn len(&self) -> usize {
        self.domains.height()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.height() == 0
    }
}

/// An array of samples with a parallel array of class labels.
#[derive(Debug, Clone, Default)]
pub struct SampleCollection {
    samples: Vec<DomainSample>,
    classes: Vec<SampleClass>,
}

impl SampleCollection {
    /// Creates a labelled collection. Samples and classes have to be the
    /// same length.
    pub fn try_new(
        samples: Vec<DomainSample>,
        classes: Vec<SampleClass>,
    ) -> Result<Self, SplitError> {
        if samples.len() != classes.len() {
            return Err(SplitError::Configuration(format!(
                "Samples and classes have to be the same length, got {} and {}",
                samples.len(),
                classes.len()
            )));
        }
        Ok(Self { samples, classes })
    }

    /// Creates a collection where every sample carries the negative
    /// label. Used by splitters that ignore classes.
    pub fn unlabelled(samples: Vec<DomainSample>) -> Self {
        let classes = vec![SampleClass::Negative; samples.len()];
        Self { samples, classes }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[DomainSample] {
        &self.samples
    }

    pub fn classes(&self) -> &[SampleClass] {
        &self.classes
    }

    /// Returns the sample at `idx`. Panics if out of bounds.
    pub fn sample(
        &self,
        idx: usize,
    ) -> &DomainSample {
        &self.samples[idx]
    }

    /// Total number of domain records across all samples.
    pub fn total_domains(&self) -> usize {
        self.samples.iter().map(DomainSample::len).sum()
    }
}
