//! Reading Domain CSV tables and persisting generated split runs.

pub mod domains;
pub mod manifest;

pub use domains::{
    domains_to_samples,
    read_classes,
    read_domains,
    read_summary,
    write_domains,
};
pub use manifest::{
    SplitRunWriter,
    MANIFEST_FILE_NAME,
};
