//! # bgcval
//!
//! `bgcval` is a Rust library and command-line tool for building
//! reproducible train/test splits for biosynthetic gene cluster (BGC)
//! detection models. It ingests tables of protein-domain annotations
//! (Domain CSV files), groups them into per-contig samples, and partitions
//! those samples under three validation regimes:
//!
//! * **K-fold cross-validation** over merged "fake genome" sequences
//!   ([`KFoldSplitter`]): samples are shuffled once, partitioned into
//!   folds, and each fold's samples are concatenated into a single long
//!   test sequence.
//! * **Leave-Class-Out validation** ([`LeaveClassOutSplitter`]): one BGC
//!   product class at a time is withheld entirely from training and used
//!   for testing, with optional upsampling of rare classes to a fixed
//!   test count.
//! * **Genome-aware bootstrap resampling** ([`GenomeBootstrapSplitter`]):
//!   genomes are repeatedly drawn with replacement into a training set,
//!   and contigs are assigned at the genome level so that no genome ever
//!   contributes to both sides of a split.
//!
//! All sampling is driven by explicit, per-splitter random states, so two
//! runs with the same seed and inputs produce byte-identical splits.
//! Merged train/test sequences and a `splits.csv` manifest are persisted
//! as plain CSV for downstream model training and evaluation.
//!
//! ## Structure
//!
//! * [`data_structs`]: domain-table schema, per-contig samples and
//!   labelled sample collections, and the contig-to-genome mapping used
//!   by bootstrap splitting.
//! * [`splitting`]: the splitter implementations, the sample merger and
//!   the orchestrator that ties them together.
//! * [`io`]: Domain CSV reading/filtering and split-run persistence.
//! * [`utils`]: seed derivation and small diagnostic helpers.
//!
//! ## Usage
//!
//! ```no_run
//! use bgcval::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let domains = read_domains("samples.csv", Some(0.01), None)?;
//!     let samples = domains_to_samples(&domains, CONTIG_ID_COL)?;
//!     let collection = SampleCollection::unlabelled(samples);
//!
//!     let mut splitter = KFoldSplitter::new(5, 0);
//!     let mut orchestrator = SplitOrchestrator::new(false, true, 0);
//!     let splits = orchestrator.generate(&collection, &mut splitter)?;
//!
//!     SplitRunWriter::new("out/cv").write_run(splits)?;
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod io;
pub mod prelude;
pub mod splitting;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
