pub use crate::data_structs::class::{
    SampleClass,
    NEG_CLASS_NAME,
};
pub use crate::data_structs::genome_map::GenomeMap;
pub use crate::data_structs::sample::{
    DomainSample,
    SampleCollection,
};
pub use crate::data_structs::schema::{
    DomainSchema,
    SummarySchema,
    CONTIG_ID_COL,
    EVALUE_COL,
    IN_CLUSTER_COL,
};
pub use crate::io::domains::{
    domains_to_samples,
    read_classes,
    read_domains,
    read_summary,
    write_domains,
};
pub use crate::io::manifest::{
    SplitRunWriter,
    MANIFEST_FILE_NAME,
};
pub use crate::splitting::bootstrap::GenomeBootstrapSplitter;
pub use crate::splitting::kfold::KFoldSplitter;
pub use crate::splitting::lco::{
    select_lco_classes,
    LeaveClassOutSplitter,
};
pub use crate::splitting::merge::merge_samples;
pub use crate::splitting::orchestrator::{
    MergedSplit,
    SplitOrchestrator,
};
pub use crate::splitting::{
    GenomeDraw,
    IndexSplit,
    SampleSplitter,
    SplitError,
    SplitMeta,
};
pub use crate::utils::{
    count_cluster_regions,
    derive_seed,
};
