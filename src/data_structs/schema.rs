use once_cell::sync::Lazy;
use polars::prelude::*;

use crate::utils::schema_from_arrays;

/// Column holding the sample (contig) identifier in a Domain CSV table.
pub const CONTIG_ID_COL: &str = "contig_id";
/// Column holding the protein identifier a domain belongs to.
pub const PROTEIN_ID_COL: &str = "protein_id";
/// Gene coordinate columns.
pub const GENE_START_COL: &str = "gene_start";
pub const GENE_END_COL: &str = "gene_end";
pub const GENE_STRAND_COL: &str = "gene_strand";
/// Column holding the Pfam accession of a domain.
pub const PFAM_ID_COL: &str = "pfam_id";
/// Domain independent e-value column.
pub const EVALUE_COL: &str = "evalue";
/// Domain bitscore column.
pub const BITSCORE_COL: &str = "bitscore";
/// Binary cluster-membership label column.
pub const IN_CLUSTER_COL: &str = "in_cluster";

static DOMAIN_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    schema_from_arrays(DomainSchema::col_names(), DomainSchema::col_types())
});

/// Canonical column layout of a Domain CSV table.
///
/// One row per protein-domain annotation. Input files may carry extra
/// columns (e.g. model predictions); those are read and passed through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomainSchema;

impl DomainSchema {
    /// Returns the canonical column names.
    pub const fn col_names() -> &'static [&'static str] {
        &[
            CONTIG_ID_COL,
            PROTEIN_ID_COL,
            GENE_START_COL,
            GENE_END_COL,
            GENE_STRAND_COL,
            PFAM_ID_COL,
            EVALUE_COL,
            BITSCORE_COL,
            IN_CLUSTER_COL,
        ]
    }

    /// Returns data types for each canonical column.
    pub const fn col_types() -> &'static [DataType] {
        &[
            DataType::String,  // contig_id
            DataType::String,  // protein_id
            DataType::Int64,   // gene_start
            DataType::Int64,   // gene_end
            DataType::String,  // gene_strand
            DataType::String,  // pfam_id
            DataType::Float64, // evalue
            DataType::Float64, // bitscore
            DataType::Int64,   // in_cluster
        ]
    }

    /// Returns the canonical schema.
    pub fn schema() -> &'static Schema {
        &DOMAIN_SCHEMA
    }

    /// An empty frame with the canonical schema.
    pub fn empty_frame() -> DataFrame {
        DataFrame::empty_with_schema(&DOMAIN_SCHEMA)
    }

    /// Read options for a Domain CSV file. Column types beyond the
    /// canonical set are inferred.
    pub fn read_options() -> CsvReadOptions {
        CsvReadOptions::default()
            .with_has_header(true)
            .with_parse_options(
                CsvParseOptions::default()
                    .with_separator(b',')
                    .with_try_parse_dates(false),
            )
    }
}

/// Column layout of the labelled contig summary table used for
/// genome-aware splitting. The table is `;`-separated and maps each
/// contig (`NCBI ID`) to the genome it was assembled from (`Genome ID`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SummarySchema;

impl SummarySchema {
    /// Genome identifier column.
    pub const GENOME_ID_COL: &'static str = "Genome ID";
    /// Contig identifier column.
    pub const NCBI_ID_COL: &'static str = "NCBI ID";
    /// Marker for contigs with no known NCBI accession.
    pub const UNKNOWN_MARKER: &'static str = "?";

    /// Read options for a summary CSV file.
    pub fn read_options() -> CsvReadOptions {
        CsvReadOptions::default()
            .with_has_header(true)
            .with_parse_options(
                CsvParseOptions::default()
                    .with_separator(b';')
                    .with_try_parse_dates(false),
            )
    }
}
