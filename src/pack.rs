//! Bit-level packing (compression) and tree-walk decoding (decompression).

use crate::error::HuffError;
use crate::tree::HuffNode;
use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use std::collections::HashMap;

/// Concatenate each input byte's code in input order, MSB first, and pack
/// the bit sequence into bytes. Returns the packed bytes together with the
/// exact number of payload bits; the final byte is zero-padded up to the
/// byte boundary, and the bit count lets the decoder stop before the pad.
pub fn pack(data: &[u8], codes: &HashMap<u8, Vec<bool>>) -> Result<(Vec<u8>, u64), HuffError> {
    let mut writer = BitWriter::endian(Vec::new(), BigEndian);
    let mut bit_len = 0u64;
    for &b in data {
        let code = codes
            .get(&b)
            .ok_or_else(|| HuffError::Payload(format!("no code for byte {}", b)))?;
        for &bit in code {
            writer.write_bit(bit)?;
        }
        bit_len += code.len() as u64;
    }
    writer.byte_align()?;
    Ok((writer.into_writer(), bit_len))
}

/// Walk `bit_len` bits of `payload` through the tree: left on 0, right
/// on 1, emitting a symbol and resetting to the root at each leaf.
/// `expected` is the symbol count promised by the container header.
pub fn unpack(
    payload: &[u8],
    bit_len: u64,
    root: &HuffNode,
    expected: u64,
) -> Result<Vec<u8>, HuffError> {
    if bit_len > payload.len() as u64 * 8 {
        return Err(HuffError::Payload(format!(
            "bit length {} exceeds {} payload bytes",
            bit_len,
            payload.len()
        )));
    }

    let mut reader = BitReader::endian(payload, BigEndian);
    let mut output = Vec::with_capacity(expected.min(bit_len) as usize);
    let mut node = root;
    for _ in 0..bit_len {
        let bit = reader.read_bit()?;
        let next = if bit {
            node.right.as_deref()
        } else {
            node.left.as_deref()
        };
        node = match next {
            Some(child) => child,
            None => return Err(HuffError::Payload("bit walk reached a missing branch".into())),
        };
        if let Some(sym) = node.symbol {
            output.push(sym);
            node = root;
        }
    }

    if !std::ptr::eq(node, root) {
        return Err(HuffError::Payload("bitstream ended inside a code".into()));
    }
    if output.len() as u64 != expected {
        return Err(HuffError::Payload(format!(
            "decoded {} symbols, header promised {}",
            output.len(),
            expected
        )));
    }
    Ok(output)
}
