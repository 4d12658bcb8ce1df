use std::fs::File;
use std::path::Path;

use anyhow::{
    anyhow,
    bail,
};
use hashbrown::HashMap;
use polars::prelude::*;

use crate::data_structs::genome_map::GenomeMap;
use crate::data_structs::sample::DomainSample;
use crate::data_structs::schema::{
    DomainSchema,
    SummarySchema,
    BITSCORE_COL,
    CONTIG_ID_COL,
    EVALUE_COL,
};

/// Reads a Domain CSV file into a frame, optionally filtered by domain
/// independent e-value and bitscore thresholds.
///
/// Filtering on bitscore fails if the column is not present in the file.
pub fn read_domains(
    path: impl AsRef<Path>,
    max_evalue: Option<f64>,
    min_bitscore: Option<f64>,
) -> anyhow::Result<DataFrame> {
    let mut domains = DomainSchema::read_options()
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;

    if let Some(max_evalue) = max_evalue {
        domains = domains
            .lazy()
            .filter(col(EVALUE_COL).lt(lit(max_evalue)))
            .collect()?;
    }
    if let Some(min_bitscore) = min_bitscore {
        if domains.column(BITSCORE_COL).is_err() {
            bail!("Cannot filter on bitscore, column not present.");
        }
        domains = domains
            .lazy()
            .filter(col(BITSCORE_COL).gt(lit(min_bitscore)))
            .collect()?;
    }
    Ok(domains)
}

/// Groups a Domain frame into one sample per unique `sample_column`
/// value, preserving both the group order of first appearance and the
/// record order within each group.
pub fn domains_to_samples(
    domains: &DataFrame,
    sample_column: &str,
) -> anyhow::Result<Vec<DomainSample>> {
    domains
        .partition_by_stable([sample_column], true)?
        .into_iter()
        .map(|group| {
            let sample_id = group
                .column(sample_column)?
                .str()?
                .get(0)
                .ok_or_else(|| anyhow!("Null sample id in column {}", sample_column))?
                .to_string();
            Ok(DomainSample::new(sample_id, group))
        })
        .collect()
}

/// Reads a `contig_id -> class` table, e.g. BGC product classes of
/// positive samples.
pub fn read_classes(
    path: impl AsRef<Path>,
    class_column: &str,
) -> anyhow::Result<HashMap<String, String>> {
    let classes = DomainSchema::read_options()
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    let contig_col = classes.column(CONTIG_ID_COL)?.str()?;
    let class_col = classes.column(class_column)?.str()?;
    Ok(contig_col
        .into_iter()
        .zip(class_col.into_iter())
        .filter_map(|(contig_id, class)| {
            Some((contig_id?.to_string(), class?.to_string()))
        })
        .collect())
}

/// Reads a labelled contig summary table into a genome mapping.
pub fn read_summary(path: impl AsRef<Path>) -> anyhow::Result<GenomeMap> {
    let summary = SummarySchema::read_options()
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    GenomeMap::from_summary(&summary)
}

/// Writes a frame as a headered CSV file.
pub fn write_domains(
    path: impl AsRef<Path>,
    domains: &mut DataFrame,
) -> anyhow::Result<()> {
    let file = File::create(path.as_ref())?;
    CsvWriter::new(file)
        .include_header(true)
        .with_separator(b',')
        .finish(domains)?;
    Ok(())
}
