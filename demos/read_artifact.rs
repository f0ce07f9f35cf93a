// Example usage of the artifact reader

use poslog::{ArtifactReader, Result};
use tracing::{debug, info, Level};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "formatted/sample.pkl".to_string());

    let reader = ArtifactReader::open(&path)?;
    let header = reader.header();
    info!(
        "{}: version {}, compression {}, {} rows",
        path, header.version, header.compression, header.row_count
    );

    let series = reader.series();
    if let (Some(first), Some(last)) = (series.timestamps.first(), series.timestamps.last()) {
        info!("First record: {} {:?}", first, series.positions[0]);
        info!("Last record: {} {:?}", last, series.positions[series.len() - 1]);
    }

    for (ts, pos) in series.timestamps.iter().zip(series.positions.iter()).take(10) {
        debug!("  {} x={} y={}", ts.format("%Y-%m-%d %H:%M:%S%.6f"), pos[0], pos[1]);
    }

    Ok(())
}
