use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::constants::{BEGIN_FORMAT, DEFAULT_CONF_FILE};
use crate::core::error::{PoslogError, Result};
use crate::models::config_model::{ConfigDocument, Params};

pub fn default_conf_file(root: &Path) -> PathBuf {
    root.join(DEFAULT_CONF_FILE)
}

/// Loads run parameters from `conf_file`, or from `<root>/config/default.yaml`.
pub fn load_params(conf_file: Option<&Path>, root: &Path) -> Result<Params> {
    let file_path = match conf_file {
        Some(p) => p.to_path_buf(),
        None => default_conf_file(root),
    };

    let data = fs::read_to_string(&file_path).map_err(|e| {
        PoslogError::config(format!("File read error: {e} {}", file_path.display()))
    })?;

    let params = parse_params(&data)?;

    info!("{} has been loaded", display_name(&file_path));

    Ok(params)
}

pub fn parse_params(data: &str) -> Result<Params> {
    let doc: ConfigDocument = serde_yaml::from_str(data)
        .map_err(|e| PoslogError::config(format!("YAML parse error: {e}")))?;

    let begin = NaiveDateTime::parse_from_str(doc.begin.trim(), BEGIN_FORMAT).map_err(|e| {
        PoslogError::config(format!(
            "'begin' must match {BEGIN_FORMAT}, got {:?}: {e}",
            doc.begin
        ))
    })?;

    if !doc.freq.is_finite() || doc.freq <= 0.0 {
        return Err(PoslogError::config(format!(
            "'freq' must be a positive number, got {}",
            doc.freq
        )));
    }

    Ok(Params::new(begin, doc.freq)
        .with_time_basis(doc.time_basis)
        .with_tail(doc.tail)
        .with_compression(doc.compression))
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
