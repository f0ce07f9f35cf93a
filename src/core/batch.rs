// Batch driver: resolves source files and runs the per-file pipeline

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::align::align;
use crate::core::constants::{DEFAULT_SRC_PATTERN, DEFAULT_TGT_DIR};
use crate::core::error::{PoslogError, Result};
use crate::core::log_reader::load_log;
use crate::core::resample::resample;
use crate::core::writer::{write_outputs, OutputPaths};
use crate::models::config_model::Params;

/// Where the raw logs come from. The three modes are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Pattern(String),
    Default,
}

impl Source {
    pub fn from_args(src_file: Option<PathBuf>, src_dir: Option<String>) -> Result<Self> {
        match (src_file, src_dir) {
            (None, None) => Ok(Source::Default),
            (None, Some(pattern)) => Ok(Source::Pattern(pattern)),
            (Some(file), None) => Ok(Source::File(file)),
            (Some(_), Some(_)) => Err(PoslogError::config(
                "'src_file' and 'src_dir' are specified at the same time",
            )),
        }
    }

    /// Expands to the ordered list of files to process.
    pub fn resolve(&self, root: &Path) -> Result<Vec<PathBuf>> {
        match self {
            Source::File(path) => Ok(vec![path.clone()]),
            Source::Pattern(pattern) => expand_pattern(pattern),
            Source::Default => {
                let pattern = root.join(DEFAULT_SRC_PATTERN);
                expand_pattern(&pattern.to_string_lossy())
            }
        }
    }
}

fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern)
        .map_err(|e| PoslogError::config(format!("invalid pattern {pattern:?}: {e}")))?;

    let files = readable_files(paths);
    debug!("pattern {} matched {} files", pattern, files.len());
    Ok(files)
}

// Unreadable entries are skipped, not fatal
fn readable_files<E, I>(entries: I) -> Vec<PathBuf>
where
    E: std::fmt::Display,
    I: IntoIterator<Item = std::result::Result<PathBuf, E>>,
{
    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("skipping unreadable entry: {}", e),
        }
    }
    files
}

pub fn default_tgt_dir(root: &Path) -> PathBuf {
    root.join(DEFAULT_TGT_DIR)
}

/// load → resample → align → write, for one file.
pub fn process_file(src: &Path, tgt_dir: &Path, params: &Params) -> Result<OutputPaths> {
    let raw = load_log(src)?;
    let resampled = resample(&raw, params)?;
    let aligned = align(&resampled, params)?;
    write_outputs(&aligned, src, tgt_dir, params)
}

/// Runs every resolved file in order. The first failure aborts the batch.
pub fn create_logs(
    source: &Source,
    tgt_dir: Option<&Path>,
    root: &Path,
    params: &Params,
) -> Result<Vec<OutputPaths>> {
    let tgt_dir = match tgt_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_tgt_dir(root),
    };
    fs::create_dir_all(&tgt_dir)?;

    let files = source.resolve(root)?;
    if files.is_empty() {
        info!("no source files found");
    }

    files
        .iter()
        .map(|src| process_file(src, &tgt_dir, params))
        .collect()
}
