// Uniform resampling of a raw log by linear interpolation

use tracing::debug;

use crate::core::constants::GRID_EPSILON;
use crate::core::error::{PoslogError, Result};
use crate::core::format::{RawTable, ResampledSeries};
use crate::models::config_model::{Params, TailPolicy};

/// Piecewise-linear interpolant over strictly increasing `xs`. No extrapolation.
pub struct LinearInterpolator<'a> {
    xs: &'a [f64],
    ys: &'a [f64],
}

impl<'a> LinearInterpolator<'a> {
    pub fn new(xs: &'a [f64], ys: &'a [f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(PoslogError::domain(format!(
                "length mismatch: {} timestamps, {} values",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(PoslogError::domain(format!(
                "at least 2 samples are needed to interpolate, got {}",
                xs.len()
            )));
        }
        if let Some(bad) = xs.iter().find(|x| !x.is_finite()) {
            return Err(PoslogError::domain(format!("non-finite timestamp {bad}")));
        }
        if let Some(i) = xs.windows(2).position(|w| w[1] <= w[0]) {
            return Err(PoslogError::domain(format!(
                "timestamps are not strictly increasing at row {}: {} then {}",
                i + 2,
                xs[i],
                xs[i + 1]
            )));
        }
        Ok(Self { xs, ys })
    }

    pub fn min(&self) -> f64 {
        self.xs[0]
    }

    pub fn max(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    pub fn at(&self, t: f64) -> Result<f64> {
        if !(t >= self.min() && t <= self.max()) {
            return Err(PoslogError::domain(format!(
                "timestamp {} is outside the interpolation range [{}, {}]",
                t,
                self.min(),
                self.max()
            )));
        }

        // first index with xs[hi] >= t
        let hi = self.xs.partition_point(|&x| x < t);
        if self.xs[hi] == t {
            return Ok(self.ys[hi]);
        }

        let lo = hi - 1;
        let (x0, x1) = (self.xs[lo], self.xs[hi]);
        let (y0, y1) = (self.ys[lo], self.ys[hi]);
        Ok(y0 + (y1 - y0) * ((t - x0) / (x1 - x0)))
    }
}

/// Grid from the first raw timestamp with step `1/freq`.
///
/// Mirrors `arange(start, end + step, step)`: every point up to `end`, plus one
/// overshooting point when the span is not a whole number of steps. Under
/// `TailPolicy::Strict` that overshoot is an error, under `Trim` it is dropped.
pub fn resample_grid(start: f64, end: f64, params: &Params) -> Result<Vec<f64>> {
    let freq = params.freq;
    let span_steps = (end - start) * freq;
    if !span_steps.is_finite() || span_steps < 0.0 {
        return Err(PoslogError::domain(format!(
            "invalid timestamp range [{start}, {end}] at {freq} Hz"
        )));
    }

    let whole = (span_steps + GRID_EPSILON).floor();
    let overshoots = span_steps - whole > GRID_EPSILON;
    if overshoots && params.tail == TailPolicy::Strict {
        return Err(PoslogError::domain(format!(
            "resampled timestamp {} exceeds the last raw timestamp {}",
            start + (whole + 1.0) / freq,
            end
        )));
    }

    let count = whole as usize + 1;
    let grid = (0..count)
        .map(|i| (start + i as f64 / freq).min(end))
        .collect();
    Ok(grid)
}

pub fn resample(raw: &RawTable, params: &Params) -> Result<ResampledSeries> {
    let x_interp = LinearInterpolator::new(&raw.timestamps, &raw.xs)?;
    let y_interp = LinearInterpolator::new(&raw.timestamps, &raw.ys)?;

    let grid = resample_grid(x_interp.min(), x_interp.max(), params)?;
    debug!(
        "resampling {} raw rows onto {} points at {} Hz",
        raw.len(),
        grid.len(),
        params.freq
    );

    let mut series = ResampledSeries::with_capacity(grid.len());
    for t in grid {
        series.positions.push([x_interp.at(t)?, y_interp.at(t)?]);
        series.timestamps.push(t);
    }

    Ok(series)
}
