//! Formats a GPU texture can be allocated with.

use serde::{Deserialize, Serialize};

use super::{SampleType, blocked_data_size};

/// GPU-consumable texture format.
///
/// Deliberately narrower than [`SourceFormat`](crate::SourceFormat): there is no
/// 3-channel 8-bit normalized format, no 16-bit signed or 32-bit unsigned integer
/// format, no 64-bit float format and no 1- or 2-channel sRGB format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum TargetFormat {
    /// No upload path exists.
    #[default]
    Invalid,

    UNorm8,
    UNorm8Vec2,
    UNorm8Vec4,

    SNorm8,
    SNorm8Vec2,
    SNorm8Vec4,

    Float16,
    Float16Vec2,
    Float16Vec3,
    Float16Vec4,

    Float32,
    Float32Vec2,
    Float32Vec3,
    Float32Vec4,

    UInt16,
    UInt16Vec2,
    UInt16Vec3,
    UInt16Vec4,

    Int32,
    Int32Vec2,
    Int32Vec3,
    Int32Vec4,

    UNorm8Vec4Srgb,

    Bc6FloatVec3,
    Bc6UFloatVec3,
    Bc7UNorm8Vec4,
    Bc7UNorm8Vec4Srgb,

    Bc1UNorm8Vec4,
    Bc3UNorm8Vec4,
}

impl TargetFormat {
    /// `false` only for [`TargetFormat::Invalid`].
    pub fn is_valid(self) -> bool {
        self != Self::Invalid
    }

    /// Channel value type.
    pub fn sample_type(self) -> SampleType {
        self.layout().0
    }

    /// Channels per texel, `0` for `Invalid`.
    pub fn channel_count(self) -> usize {
        self.layout().1
    }

    /// `true` for sRGB-encoded formats.
    pub fn is_srgb(self) -> bool {
        matches!(self, Self::UNorm8Vec4Srgb | Self::Bc7UNorm8Vec4Srgb)
    }

    /// `true` for the BCn block-compressed formats.
    pub fn is_compressed(self) -> bool {
        self.sample_type() == SampleType::Compressed
    }

    /// Texel footprint of one block: 4x4 for BCn, 1x1 otherwise.
    pub fn block_size(self) -> (u32, u32) {
        if self.is_compressed() { (4, 4) } else { (1, 1) }
    }

    /// Bytes per block; for uncompressed formats a block is a single texel.
    pub fn bytes_per_block(self) -> usize {
        match self {
            Self::Bc1UNorm8Vec4 => 8,
            Self::Bc3UNorm8Vec4
            | Self::Bc6FloatVec3
            | Self::Bc6UFloatVec3
            | Self::Bc7UNorm8Vec4
            | Self::Bc7UNorm8Vec4Srgb => 16,
            _ => {
                let (sample, channels) = self.layout();
                sample.size_bytes().unwrap_or(0) * channels
            }
        }
    }

    /// Bytes occupied by a tightly packed `width` x `height` texture, `None` on
    /// overflow.
    pub fn data_size(self, width: u32, height: u32) -> Option<usize> {
        blocked_data_size(width, height, self.block_size(), self.bytes_per_block())
    }

    fn layout(self) -> (SampleType, usize) {
        use SampleType as S;
        match self {
            Self::Invalid => (S::UNorm8, 0),

            Self::UNorm8 => (S::UNorm8, 1),
            Self::UNorm8Vec2 => (S::UNorm8, 2),
            Self::UNorm8Vec4 | Self::UNorm8Vec4Srgb => (S::UNorm8, 4),

            Self::SNorm8 => (S::SNorm8, 1),
            Self::SNorm8Vec2 => (S::SNorm8, 2),
            Self::SNorm8Vec4 => (S::SNorm8, 4),

            Self::Float16 => (S::Float16, 1),
            Self::Float16Vec2 => (S::Float16, 2),
            Self::Float16Vec3 => (S::Float16, 3),
            Self::Float16Vec4 => (S::Float16, 4),

            Self::Float32 => (S::Float32, 1),
            Self::Float32Vec2 => (S::Float32, 2),
            Self::Float32Vec3 => (S::Float32, 3),
            Self::Float32Vec4 => (S::Float32, 4),

            Self::UInt16 => (S::UInt16, 1),
            Self::UInt16Vec2 => (S::UInt16, 2),
            Self::UInt16Vec3 => (S::UInt16, 3),
            Self::UInt16Vec4 => (S::UInt16, 4),

            Self::Int32 => (S::Int32, 1),
            Self::Int32Vec2 => (S::Int32, 2),
            Self::Int32Vec3 => (S::Int32, 3),
            Self::Int32Vec4 => (S::Int32, 4),

            Self::Bc6FloatVec3 | Self::Bc6UFloatVec3 => (S::Compressed, 3),
            Self::Bc7UNorm8Vec4
            | Self::Bc7UNorm8Vec4Srgb
            | Self::Bc1UNorm8Vec4
            | Self::Bc3UNorm8Vec4 => (S::Compressed, 4),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/target.rs"]
mod tests;
