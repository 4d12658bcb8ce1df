use hashbrown::HashSet;
use polars::prelude::*;

use crate::data_structs::schema::SummarySchema;

/// Ordered contig-to-genome mapping loaded from a labelled contig
/// summary table. Multiple contigs may belong to one genome; contigs
/// without a known accession are kept in the table but excluded from
/// every lookup.
#[derive(Debug, Clone, Default)]
pub struct GenomeMap {
    // (genome_id, contig_id) pairs in table row order
    rows: Vec<(String, String)>,
}

impl GenomeMap {
    pub fn new(rows: Vec<(String, String)>) -> Self {
        Self { rows }
    }

    /// Builds the mapping from a summary frame with the
    /// [`SummarySchema`] columns.
    pub fn from_summary(summary: &DataFrame) -> anyhow::Result<Self> {
        let genome_col = summary.column(SummarySchema::GENOME_ID_COL)?.str()?;
        let contig_col = summary.column(SummarySchema::NCBI_ID_COL)?.str()?;
        let rows = genome_col
            .into_iter()
            .zip(contig_col.into_iter())
            .filter_map(|(genome_id, contig_id)| {
                Some((genome_id?.to_string(), contig_id?.to_string()))
            })
            .collect();
        Ok(Self { rows })
    }

    /// Unique genome IDs that own at least one known contig, in order of
    /// first appearance.
    pub fn unique_genomes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|(_, contig_id)| contig_id.as_str() != SummarySchema::UNKNOWN_MARKER)
            .filter_map(|(genome_id, _)| {
                seen.insert(genome_id.as_str())
                    .then_some(genome_id.as_str())
            })
            .collect()
    }

    /// Contig IDs of every genome in `genome_ids`, in table row order,
    /// excluding unknown contigs.
    pub fn contigs_of(
        &self,
        genome_ids: &HashSet<&str>,
    ) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|(genome_id, contig_id)| {
                genome_ids.contains(genome_id.as_str())
                    && contig_id.as_str() != SummarySchema::UNKNOWN_MARKER
            })
            .map(|(_, contig_id)| contig_id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
