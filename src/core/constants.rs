// Format constants for the position log formatter

use serde::Deserialize;

pub const MAGIC: &[u8; 4] = b"PLOG";
pub const FOOTER_MAGIC: &[u8; 4] = b"PEND";
pub const VERSION: u8 = 1;

// Compression codes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionType {
    None = 0,
    Zlib = 1,
    Lz4 = 2,
    Zstd = 3,
}

impl CompressionType {
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(CompressionType::None),
            1 => Some(CompressionType::Zlib),
            2 => Some(CompressionType::Lz4),
            3 => Some(CompressionType::Zstd),
            _ => None,
        }
    }
}

impl Default for CompressionType {
    fn default() -> Self {
        CompressionType::Zlib
    }
}

// Record format: (timestamp_micros: i64, x: f64, y: f64)
pub const RECORD_SIZE: usize = 8 + 8 + 8; // 24 bytes

// Header: MAGIC(4) version(u8) comp(u8) created(f64) rows(u32) raw_len(u32) comp_len(u32)
pub const HEADER_SIZE: usize = 4 + 1 + 1 + 8 + 4 + 4 + 4; // 26 bytes

// Footer: FOOTER_MAGIC(4)
pub const FOOTER_SIZE: usize = 4;

// Input rows: timestamp, x, y
pub const RAW_COLUMNS: usize = 3;

pub const BEGIN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub const DEFAULT_CONF_FILE: &str = "config/default.yaml";
pub const DEFAULT_SRC_PATTERN: &str = "raw/*.csv";
pub const DEFAULT_TGT_DIR: &str = "formatted";

pub const TEXT_EXTENSION: &str = "csv";
pub const BINARY_EXTENSION: &str = "pkl";

// Slack, in grid steps, for float noise at the end of the raw range
pub const GRID_EPSILON: f64 = 1e-9;
