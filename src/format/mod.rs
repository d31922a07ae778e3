//! Pixel format enumerations on both sides of the upload boundary.

pub mod source;
pub mod target;

use serde::{Deserialize, Serialize};

/// Numeric meaning of one channel value, as stored in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleType {
    /// 8-bit unsigned normalized.
    UNorm8,
    /// 8-bit signed normalized.
    SNorm8,
    /// 16-bit float.
    Float16,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
    /// 16-bit unsigned integer.
    UInt16,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit unsigned integer.
    UInt32,
    /// 32-bit signed integer.
    Int32,
    /// Block-compressed payload; channels are not individually addressable.
    Compressed,
}

impl SampleType {
    /// Size of one channel value in bytes, `None` for compressed payloads.
    pub fn size_bytes(self) -> Option<usize> {
        match self {
            Self::UNorm8 | Self::SNorm8 => Some(1),
            Self::Float16 | Self::UInt16 | Self::Int16 => Some(2),
            Self::Float32 | Self::UInt32 | Self::Int32 => Some(4),
            Self::Float64 => Some(8),
            Self::Compressed => None,
        }
    }
}

/// Bytes needed for a `width` x `height` image made of `block` sized blocks
/// of `bytes_per_block` bytes each. Partial blocks at the edges count as whole.
/// `None` when the size does not fit in `usize`.
pub(crate) fn blocked_data_size(
    width: u32,
    height: u32,
    block: (u32, u32),
    bytes_per_block: usize,
) -> Option<usize> {
    let (bw, bh) = block;
    let blocks_x = usize::try_from(width.div_ceil(bw)).ok()?;
    let blocks_y = usize::try_from(height.div_ceil(bh)).ok()?;
    blocks_x.checked_mul(blocks_y)?.checked_mul(bytes_per_block)
}
