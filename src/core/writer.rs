// Output writers: CSV table and binary artifact

use chrono::{NaiveDateTime, Utc};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::compression::compress;
use crate::core::constants::*;
use crate::core::error::{PoslogError, Result};
use crate::core::format::AlignedSeries;
use crate::models::config_model::Params;
use crate::utils::conf_helper::display_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub text: PathBuf,
    pub binary: PathBuf,
}

impl OutputPaths {
    /// `<tgt_dir>/<source stem>.csv` and `<tgt_dir>/<source stem>.pkl`.
    pub fn for_source(src: &Path, tgt_dir: &Path) -> Result<Self> {
        let stem = src.file_stem().ok_or_else(|| {
            PoslogError::config(format!("source path has no file name: {}", src.display()))
        })?;
        let stem = stem.to_string_lossy();
        Ok(Self {
            text: tgt_dir.join(format!("{}.{}", stem, TEXT_EXTENSION)),
            binary: tgt_dir.join(format!("{}.{}", stem, BINARY_EXTENSION)),
        })
    }
}

pub fn write_outputs(
    series: &AlignedSeries,
    src: &Path,
    tgt_dir: &Path,
    params: &Params,
) -> Result<OutputPaths> {
    let paths = OutputPaths::for_source(src, tgt_dir)?;

    write_csv(series, &paths.text)?;
    info!("written to {}", display_name(&paths.text));

    write_artifact(series, &paths.binary, params.compression)?;
    info!("written to {}", display_name(&paths.binary));

    Ok(paths)
}

pub fn write_csv<P: AsRef<Path>>(series: &AlignedSeries, path: P) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;

    for (ts, pos) in series.timestamps.iter().zip(series.positions.iter()) {
        writer.write_record(&[
            ts.format(OUTPUT_TIME_FORMAT).to_string(),
            format_float(pos[0]),
            format_float(pos[1]),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Shortest round-trip form, with a signed two-digit exponent (`1e+16`, `1.5e-05`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

pub fn naive_to_micros(ts: &NaiveDateTime) -> i64 {
    ts.and_utc().timestamp_micros()
}

pub fn encode_records(series: &AlignedSeries) -> Vec<u8> {
    let mut raw = Vec::with_capacity(series.len() * RECORD_SIZE);
    for (ts, pos) in series.timestamps.iter().zip(series.positions.iter()) {
        raw.extend_from_slice(&naive_to_micros(ts).to_le_bytes());
        raw.extend_from_slice(&pos[0].to_le_bytes());
        raw.extend_from_slice(&pos[1].to_le_bytes());
    }
    raw
}

pub fn write_artifact<P: AsRef<Path>>(
    series: &AlignedSeries,
    path: P,
    compression: CompressionType,
) -> Result<()> {
    let row_count = u32::try_from(series.len())
        .map_err(|_| PoslogError::CorruptedData(format!("too many rows: {}", series.len())))?;

    let raw = encode_records(series);
    let compressed = compress(&raw, compression)?;
    let raw_length = u32::try_from(raw.len())
        .map_err(|_| PoslogError::CorruptedData(format!("payload too large: {} bytes", raw.len())))?;
    let compressed_length = u32::try_from(compressed.len()).map_err(|_| {
        PoslogError::CorruptedData(format!("payload too large: {} bytes", compressed.len()))
    })?;
    let created = Utc::now().timestamp_micros() as f64 / 1e6;

    let mut file = BufWriter::new(File::create(path.as_ref())?);

    file.write_all(MAGIC)?;
    file.write_all(&[VERSION, compression as u8])?;
    file.write_all(&created.to_le_bytes())?;
    file.write_all(&row_count.to_le_bytes())?;
    file.write_all(&raw_length.to_le_bytes())?;
    file.write_all(&compressed_length.to_le_bytes())?;
    file.write_all(&compressed)?;
    file.write_all(FOOTER_MAGIC)?;

    file.flush()?;
    Ok(())
}
