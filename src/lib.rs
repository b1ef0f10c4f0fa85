//! huffpack: byte-stream Huffman codec.
//!
//! Compresses an arbitrary byte sequence with classic Huffman coding:
//! - frequency analysis over the input
//! - greedy minimum-combination prefix-code tree
//! - per-symbol bit codes from the tree paths
//! - MSB-first bit packing into a self-describing container
//!
//! The container carries the serialized frequency table and the exact
//! payload bit count, so decompression rebuilds the identical tree and
//! knows precisely where the bitstream ends.

pub mod code;
pub mod config;
pub mod container;
pub mod error;
pub mod freq;
pub mod pack;
pub mod tree;

use crate::config::CompressionConfig;
use crate::error::HuffError;
use crate::freq::FrequencyTable;
use tracing::debug;

/// Compressed output container
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CompressedOutput {
    pub original_size: usize,
    pub compressed_size: usize,
    pub data: Vec<u8>,
    pub ratio: f64,
    pub metadata: CompressionMetadata,
}

/// Metadata about the compression process
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CompressionMetadata {
    pub entropy_bits: f64,
    pub distinct_symbols: usize,
    pub payload_bits: u64,
}

/// The main codec engine
pub struct Compressor {
    config: CompressionConfig,
}

impl Compressor {
    /// Create a new compressor with the given configuration
    pub fn new(config: CompressionConfig) -> Self {
        Self { config }
    }

    /// Create a compressor with default configuration
    pub fn default() -> Self {
        Self::new(CompressionConfig::default())
    }

    /// Compress data into a self-describing container. Empty input yields
    /// a header-only container; the tree builder is never handed an empty
    /// frequency table.
    pub fn compress(&self, data: &[u8]) -> Result<CompressedOutput, HuffError> {
        if data.len() > self.config.max_input_size {
            return Err(HuffError::InputTooLarge {
                limit: self.config.max_input_size,
                actual: data.len(),
            });
        }

        let table = FrequencyTable::analyze(data);
        let (payload, bit_len) = if table.is_empty() {
            (Vec::new(), 0)
        } else {
            let root = tree::build_tree(&table)?;
            let codes = code::code_table(&root);
            pack::pack(data, &codes)?
        };
        let compressed = container::write_container(&table, bit_len, &payload);
        debug!(
            input = data.len(),
            distinct = table.distinct(),
            payload_bits = bit_len,
            compressed = compressed.len(),
            "packed input into container"
        );

        let ratio = if data.is_empty() {
            1.0
        } else {
            compressed.len() as f64 / data.len() as f64
        };

        Ok(CompressedOutput {
            original_size: data.len(),
            compressed_size: compressed.len(),
            ratio,
            metadata: CompressionMetadata {
                entropy_bits: table.entropy_bits(),
                distinct_symbols: table.distinct(),
                payload_bits: bit_len,
            },
            data: compressed,
        })
    }

    /// Decompress a container produced by [`compress`](Self::compress).
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, HuffError> {
        let (table, bit_len, payload) = container::parse_container(data)?;

        if table.is_empty() {
            if bit_len != 0 || !payload.is_empty() {
                return Err(HuffError::Payload(
                    "payload present without a frequency table".into(),
                ));
            }
            return Ok(Vec::new());
        }

        let root = tree::build_tree(&table)?;
        debug!(
            distinct = table.distinct(),
            payload_bits = bit_len,
            "walking container payload"
        );
        pack::unpack(payload, bit_len, &root, table.total())
    }
}
