pub mod align;
pub mod batch;
pub mod compression;
pub mod constants;
pub mod error;
pub mod format;
pub mod log_reader;
pub mod reader;
pub mod resample;
pub mod writer;
