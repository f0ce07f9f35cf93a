// Data structures for raw, resampled and aligned position series

use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSample {
    pub timestamp: f64,
    pub x: f64,
    pub y: f64,
}

impl RawSample {
    pub fn new(timestamp: f64, x: f64, y: f64) -> Self {
        Self { timestamp, x, y }
    }
}

/// Columnar view of one input log, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub timestamps: Vec<f64>,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl RawTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: RawSample) {
        self.timestamps.push(sample.timestamp);
        self.xs.push(sample.x);
        self.ys.push(sample.y);
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

impl FromIterator<RawSample> for RawTable {
    fn from_iter<I: IntoIterator<Item = RawSample>>(iter: I) -> Self {
        let mut table = RawTable::new();
        for sample in iter {
            table.push(sample);
        }
        table
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResampledSeries {
    pub timestamps: Vec<f64>,
    pub positions: Vec<[f64; 2]>,
}

impl ResampledSeries {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(cap),
            positions: Vec::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    pub timestamps: Vec<NaiveDateTime>,
    pub positions: Vec<[f64; 2]>,
}

impl AlignedSeries {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(cap),
            positions: Vec::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ArtifactHeader {
    pub version: u8,
    pub compression: u8,
    pub created: f64,
    pub row_count: u32,
    pub raw_length: u32,
    pub compressed_length: u32,
}
