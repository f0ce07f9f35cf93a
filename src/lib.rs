// Position log formatter
// Main library entry point

pub mod core;
pub mod models;
pub mod utils;

// Re-export main types
pub use crate::core::error::{PoslogError, Result};
pub use crate::core::batch::{create_logs, process_file, Source};
pub use crate::core::reader::ArtifactReader;
pub use crate::core::format::{AlignedSeries, RawSample, RawTable, ResampledSeries};
pub use models::config_model::{Params, TailPolicy, TimeBasis};
pub use utils::conf_helper::load_params;
