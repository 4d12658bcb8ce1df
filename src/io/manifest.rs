use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use hashbrown::HashSet;
use log::info;
use polars::prelude::*;

use crate::io::domains::write_domains;
use crate::splitting::orchestrator::MergedSplit;
use crate::splitting::SplitError;

/// File name of the split manifest within a run directory.
pub const MANIFEST_FILE_NAME: &str = "splits.csv";

/// Persists merged splits and their manifest into one run directory.
///
/// Sequence files are named `{name}.train.csv` / `{name}.test.csv`; the
/// manifest lists one row per split with its `label`, `name` and
/// `group`. Split names are validated and checked against existing
/// files before anything is written, so a run either persists completely
/// or not at all; a failing write mid-run aborts without retries.
pub struct SplitRunWriter {
    out_dir: PathBuf,
}

impl SplitRunWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn sequence_path(
        &self,
        name: &str,
        side: &str,
    ) -> PathBuf {
        self.out_dir.join(format!("{}.{}.csv", name, side))
    }

    /// Writes every split sequence and the manifest.
    pub fn write_run(
        &self,
        mut splits: Vec<MergedSplit>,
    ) -> anyhow::Result<()> {
        {
            let mut seen = HashSet::new();
            for split in &splits {
                if !seen.insert(split.meta.name.as_str()) {
                    return Err(SplitError::Configuration(format!(
                        "Duplicate split name: {}",
                        split.meta.name
                    ))
                    .into());
                }
            }
        }

        fs::create_dir_all(&self.out_dir)?;
        for split in &splits {
            for side in ["train", "test"] {
                let path = self.sequence_path(&split.meta.name, side);
                if path.exists() {
                    return Err(SplitError::DataIntegrity(format!(
                        "Split sequence file already exists: {}",
                        path.display()
                    ))
                    .into());
                }
            }
        }

        for split in &mut splits {
            let train_path = self.sequence_path(&split.meta.name, "train");
            write_domains(&train_path, &mut split.train)?;
            info!(
                "Saved {} train sequence to: {}",
                split.meta.name,
                train_path.display()
            );
            let test_path = self.sequence_path(&split.meta.name, "test");
            write_domains(&test_path, &mut split.test)?;
            info!(
                "Saved {} test sequence to: {}",
                split.meta.name,
                test_path.display()
            );
        }

        let mut manifest = df!(
            "label" => splits.iter().map(|s| s.meta.label.clone()).collect::<Vec<_>>(),
            "name" => splits.iter().map(|s| s.meta.name.clone()).collect::<Vec<_>>(),
            "group" => splits.iter().map(|s| s.meta.group.clone()).collect::<Vec<_>>(),
        )?;
        let manifest_path = self.out_dir.join(MANIFEST_FILE_NAME);
        write_domains(&manifest_path, &mut manifest)?;
        info!("Saved splits meta file to: {}", manifest_path.display());
        Ok(())
    }
}
