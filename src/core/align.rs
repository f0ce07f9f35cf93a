// Shifts resampled epoch timestamps onto the configured start time

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta};

use crate::core::error::{PoslogError, Result};
use crate::core::format::{AlignedSeries, ResampledSeries};
use crate::models::config_model::{Params, TimeBasis};

/// Epoch seconds to a naive calendar timestamp, rounded to the microsecond.
pub fn epoch_to_naive(ts: f64, basis: TimeBasis) -> Result<NaiveDateTime> {
    let micros = (ts * 1e6).round();
    if !micros.is_finite() || micros.abs() > i64::MAX as f64 {
        return Err(PoslogError::domain(format!(
            "timestamp {ts} cannot be represented as a calendar time"
        )));
    }
    let micros = micros as i64;
    let secs = micros.div_euclid(1_000_000);
    let nanos = (micros.rem_euclid(1_000_000) * 1_000) as u32;

    let utc = DateTime::from_timestamp(secs, nanos).ok_or_else(|| {
        PoslogError::domain(format!("timestamp {ts} cannot be represented as a calendar time"))
    })?;

    Ok(match basis {
        TimeBasis::Utc => utc.naive_utc(),
        TimeBasis::Local => utc.with_timezone(&Local).naive_local(),
    })
}

pub fn align(resampled: &ResampledSeries, params: &Params) -> Result<AlignedSeries> {
    let mut aligned = AlignedSeries::with_capacity(resampled.len());
    if resampled.is_empty() {
        return Ok(aligned);
    }
    let first = resampled.timestamps[0];

    let offset: TimeDelta = params.begin - epoch_to_naive(first, params.time_basis)?;

    for (ts, pos) in resampled.timestamps.iter().zip(resampled.positions.iter()) {
        let shifted = epoch_to_naive(*ts, params.time_basis)?
            .checked_add_signed(offset)
            .ok_or_else(|| PoslogError::domain(format!("aligned timestamp for {ts} overflows")))?;
        aligned.timestamps.push(shifted);
        aligned.positions.push(*pos);
    }

    Ok(aligned)
}
