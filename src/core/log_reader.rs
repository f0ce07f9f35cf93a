// Raw position log reader: headerless `timestamp,x,y` rows

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::core::constants::RAW_COLUMNS;
use crate::core::error::{PoslogError, Result};
use crate::core::format::{RawSample, RawTable};
use crate::utils::conf_helper::display_name;

pub fn load_log<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = parse_log(file, path)?;
    if table.is_empty() {
        warn!("{} has no rows", display_name(path));
    }

    info!("{} has been loaded", display_name(path));

    Ok(table)
}

/// Parses rows from any reader. `origin` is only used in error messages.
pub fn parse_log<R: Read>(rdr: R, origin: &Path) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let mut table = RawTable::new();

    for result in reader.records() {
        let record = result.map_err(|e| match PoslogError::from(e) {
            PoslogError::Format { line, message, .. } => PoslogError::format(origin, line, message),
            other => other,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // csv skips fully empty lines, but a line of blanks survives as one empty field
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        if record.len() != RAW_COLUMNS {
            return Err(PoslogError::format(
                origin,
                line,
                format!("expected {} columns, got {}", RAW_COLUMNS, record.len()),
            ));
        }

        let mut values = [0.0f64; RAW_COLUMNS];
        for (i, field) in record.iter().enumerate() {
            values[i] = field.parse::<f64>().map_err(|e| {
                PoslogError::format(origin, line, format!("column {}: {:?} {}", i + 1, field, e))
            })?;
        }

        table.push(RawSample::new(values[0], values[1], values[2]));
    }

    Ok(table)
}
