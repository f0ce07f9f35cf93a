// Binary artifact reader

use crate::core::compression::decompress;
use crate::core::constants::*;
use crate::core::error::{PoslogError, Result};
use crate::core::format::*;
use chrono::{DateTime, NaiveDateTime};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub struct ArtifactReader {
    path: PathBuf,
    header: ArtifactHeader,
    series: AlignedSeries,
}

impl ArtifactReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = BufReader::new(File::open(&path)?);

        let header = Self::read_header(&mut file)?;
        let series = Self::read_payload(&mut file, &header)?;
        Self::read_footer(&mut file)?;

        Ok(Self {
            path,
            header,
            series,
        })
    }

    fn read_header<R: Read>(file: &mut R) -> Result<ArtifactHeader> {
        let mut prefix = [0u8; HEADER_SIZE];
        file.read_exact(&mut prefix)?;

        let magic = &prefix[0..4];
        if magic != MAGIC {
            return Err(PoslogError::InvalidMagic {
                expected: MAGIC.to_vec(),
                got: magic.to_vec(),
            });
        }

        let version = prefix[4];
        if version != VERSION {
            return Err(PoslogError::UnsupportedVersion(version));
        }

        Ok(ArtifactHeader {
            version,
            compression: prefix[5],
            created: f64::from_le_bytes(le_array(&prefix[6..14])),
            row_count: u32::from_le_bytes(le_array(&prefix[14..18])),
            raw_length: u32::from_le_bytes(le_array(&prefix[18..22])),
            compressed_length: u32::from_le_bytes(le_array(&prefix[22..26])),
        })
    }

    fn read_payload<R: Read>(file: &mut R, header: &ArtifactHeader) -> Result<AlignedSeries> {
        let compression = CompressionType::from_u8(header.compression)
            .ok_or(PoslogError::UnsupportedCompression(header.compression))?;

        let expected = header.row_count as usize * RECORD_SIZE;
        if header.raw_length as usize != expected {
            return Err(PoslogError::CorruptedData(format!(
                "{} rows need {} bytes, header says {}",
                header.row_count, expected, header.raw_length
            )));
        }

        let mut compressed_data = vec![0u8; header.compressed_length as usize];
        file.read_exact(&mut compressed_data)?;

        let raw_data = decompress(&compressed_data, compression)?;
        if raw_data.len() != expected {
            return Err(PoslogError::CorruptedData(format!(
                "Expected {} bytes, got {}",
                expected,
                raw_data.len()
            )));
        }

        let mut series = AlignedSeries::with_capacity(header.row_count as usize);
        for record in raw_data.chunks_exact(RECORD_SIZE) {
            let micros = i64::from_le_bytes(le_array(&record[0..8]));
            let x = f64::from_le_bytes(le_array(&record[8..16]));
            let y = f64::from_le_bytes(le_array(&record[16..24]));
            series.timestamps.push(micros_to_naive(micros)?);
            series.positions.push([x, y]);
        }

        Ok(series)
    }

    fn read_footer<R: Read>(file: &mut R) -> Result<()> {
        let mut footer = [0u8; FOOTER_SIZE];
        file.read_exact(&mut footer)?;
        if &footer != FOOTER_MAGIC {
            return Err(PoslogError::InvalidMagic {
                expected: FOOTER_MAGIC.to_vec(),
                got: footer.to_vec(),
            });
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> &ArtifactHeader {
        &self.header
    }

    pub fn series(&self) -> &AlignedSeries {
        &self.series
    }

    pub fn into_series(self) -> AlignedSeries {
        self.series
    }
}

fn micros_to_naive(micros: i64) -> Result<NaiveDateTime> {
    DateTime::from_timestamp_micros(micros)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| PoslogError::CorruptedData(format!("timestamp out of range: {micros}")))
}

// Callers always pass a slice of exactly N bytes
fn le_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}
