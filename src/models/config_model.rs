use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::core::constants::CompressionType;

/// Raw YAML document, before validation.
#[derive(Debug, Deserialize)]
pub struct ConfigDocument {
    pub begin: String,
    pub freq: f64,
    #[serde(default)]
    pub time_basis: TimeBasis,
    #[serde(default)]
    pub tail: TailPolicy,
    #[serde(default)]
    pub compression: CompressionType,
}

/// How numeric epoch timestamps become calendar timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBasis {
    #[default]
    Local,
    Utc,
}

/// What to do with a grid point that lands past the last raw timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailPolicy {
    #[default]
    Strict,
    Trim,
}

/// Validated run parameters. Built once, then passed by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub begin: NaiveDateTime,
    pub freq: f64,
    pub time_basis: TimeBasis,
    pub tail: TailPolicy,
    pub compression: CompressionType,
}

impl Params {
    pub fn new(begin: NaiveDateTime, freq: f64) -> Self {
        Self {
            begin,
            freq,
            time_basis: TimeBasis::default(),
            tail: TailPolicy::default(),
            compression: CompressionType::default(),
        }
    }

    pub fn with_time_basis(mut self, time_basis: TimeBasis) -> Self {
        self.time_basis = time_basis;
        self
    }

    pub fn with_tail(mut self, tail: TailPolicy) -> Self {
        self.tail = tail;
        self
    }

    pub fn with_compression(mut self, compression: CompressionType) -> Self {
        self.compression = compression;
        self
    }
}
