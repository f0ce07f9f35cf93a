// Compression backend implementations

use crate::core::constants::CompressionType;
use crate::core::error::{PoslogError, Result};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

pub fn compress(data: &[u8], compression: CompressionType) -> Result<Vec<u8>> {
    match compression {
        CompressionType::None => Ok(data.to_vec()),

        CompressionType::Zlib => {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder
                .write_all(data)
                .map_err(|e| PoslogError::CompressionFailed(format!("Zlib: {}", e)))?;
            encoder
                .finish()
                .map_err(|e| PoslogError::CompressionFailed(format!("Zlib: {}", e)))
        }

        #[cfg(feature = "lz4")]
        CompressionType::Lz4 => lz4::block::compress(data, None, true)
            .map_err(|e| PoslogError::CompressionFailed(format!("LZ4: {}", e))),

        #[cfg(not(feature = "lz4"))]
        CompressionType::Lz4 => Err(PoslogError::UnsupportedCompression(2)),

        #[cfg(feature = "zstd")]
        CompressionType::Zstd => zstd::encode_all(data, 0)
            .map_err(|e| PoslogError::CompressionFailed(format!("Zstd: {}", e))),

        #[cfg(not(feature = "zstd"))]
        CompressionType::Zstd => Err(PoslogError::UnsupportedCompression(3)),
    }
}

pub fn decompress(data: &[u8], compression: CompressionType) -> Result<Vec<u8>> {
    match compression {
        CompressionType::None => Ok(data.to_vec()),

        CompressionType::Zlib => {
            let mut decoder = ZlibDecoder::new(data);
            let mut decompressed = Vec::new();
            decoder
                .read_to_end(&mut decompressed)
                .map_err(|e| PoslogError::DecompressionFailed(format!("Zlib: {}", e)))?;
            Ok(decompressed)
        }

        // Size is prepended by `compress`
        #[cfg(feature = "lz4")]
        CompressionType::Lz4 => lz4::block::decompress(data, None)
            .map_err(|e| PoslogError::DecompressionFailed(format!("LZ4: {}", e))),

        #[cfg(not(feature = "lz4"))]
        CompressionType::Lz4 => Err(PoslogError::UnsupportedCompression(2)),

        #[cfg(feature = "zstd")]
        CompressionType::Zstd => zstd::decode_all(data)
            .map_err(|e| PoslogError::DecompressionFailed(format!("Zstd: {}", e))),

        #[cfg(not(feature = "zstd"))]
        CompressionType::Zstd => Err(PoslogError::UnsupportedCompression(3)),
    }
}
