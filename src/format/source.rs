//! Formats a decoder can hand us.

use serde::{Deserialize, Serialize};

use super::{SampleType, blocked_data_size};

/// In-memory layout of a decoded image.
///
/// The set is closed: every consumer matches it exhaustively. [`SourceFormat::Count`]
/// is a sentinel one past the last real format. It is never produced from image
/// data, and passing it to any query is a programming error that panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum SourceFormat {
    /// No format; propagates as [`TargetFormat::Invalid`](crate::TargetFormat::Invalid).
    Invalid = 0,

    UNorm8,
    UNorm8Vec2,
    UNorm8Vec3,
    UNorm8Vec4,

    SNorm8,
    SNorm8Vec2,
    SNorm8Vec3,
    SNorm8Vec4,

    Float16,
    Float16Vec2,
    Float16Vec3,
    Float16Vec4,

    Float32,
    Float32Vec2,
    Float32Vec3,
    Float32Vec4,

    Double64,
    Double64Vec2,
    Double64Vec3,
    Double64Vec4,

    UInt16,
    UInt16Vec2,
    UInt16Vec3,
    UInt16Vec4,

    Int16,
    Int16Vec2,
    Int16Vec3,
    Int16Vec4,

    UInt32,
    UInt32Vec2,
    UInt32Vec3,
    UInt32Vec4,

    Int32,
    Int32Vec2,
    Int32Vec3,
    Int32Vec4,

    UNorm8Srgb,
    UNorm8Vec2Srgb,
    UNorm8Vec3Srgb,
    UNorm8Vec4Srgb,

    /// BPTC signed float RGB.
    Bc6FloatVec3,
    /// BPTC unsigned float RGB.
    Bc6UFloatVec3,
    /// BPTC unorm RGBA.
    Bc7UNorm8Vec4,
    /// BPTC unorm RGBA, sRGB encoded.
    Bc7UNorm8Vec4Srgb,

    /// S3TC DXT1.
    Bc1UNorm8Vec4,
    /// S3TC DXT5.
    Bc3UNorm8Vec4,

    /// Sentinel, one past the last real format.
    #[serde(skip)]
    Count,
}

impl SourceFormat {
    /// Every real format, in enumerant order. Excludes `Invalid` and `Count`.
    pub const ALL: [SourceFormat; 46] = [
        Self::UNorm8,
        Self::UNorm8Vec2,
        Self::UNorm8Vec3,
        Self::UNorm8Vec4,
        Self::SNorm8,
        Self::SNorm8Vec2,
        Self::SNorm8Vec3,
        Self::SNorm8Vec4,
        Self::Float16,
        Self::Float16Vec2,
        Self::Float16Vec3,
        Self::Float16Vec4,
        Self::Float32,
        Self::Float32Vec2,
        Self::Float32Vec3,
        Self::Float32Vec4,
        Self::Double64,
        Self::Double64Vec2,
        Self::Double64Vec3,
        Self::Double64Vec4,
        Self::UInt16,
        Self::UInt16Vec2,
        Self::UInt16Vec3,
        Self::UInt16Vec4,
        Self::Int16,
        Self::Int16Vec2,
        Self::Int16Vec3,
        Self::Int16Vec4,
        Self::UInt32,
        Self::UInt32Vec2,
        Self::UInt32Vec3,
        Self::UInt32Vec4,
        Self::Int32,
        Self::Int32Vec2,
        Self::Int32Vec3,
        Self::Int32Vec4,
        Self::UNorm8Srgb,
        Self::UNorm8Vec2Srgb,
        Self::UNorm8Vec3Srgb,
        Self::UNorm8Vec4Srgb,
        Self::Bc6FloatVec3,
        Self::Bc6UFloatVec3,
        Self::Bc7UNorm8Vec4,
        Self::Bc7UNorm8Vec4Srgb,
        Self::Bc1UNorm8Vec4,
        Self::Bc3UNorm8Vec4,
    ];

    /// Raw enumerant value of [`SourceFormat::Count`].
    pub const COUNT: u32 = Self::Count as u32;

    /// Convert a raw enumerant value.
    ///
    /// `0` is `Invalid`; the `Count` sentinel and anything above it yield `None`.
    pub fn from_index(index: u32) -> Option<Self> {
        if index == Self::Invalid as u32 {
            return Some(Self::Invalid);
        }
        Self::ALL.get(index as usize - 1).copied()
    }

    /// Channel value type.
    pub fn sample_type(self) -> SampleType {
        self.layout().0
    }

    /// Channels per texel (1–4), `0` for `Invalid`.
    pub fn channel_count(self) -> usize {
        self.layout().1
    }

    /// `true` for the perceptually (sRGB) encoded formats.
    pub fn is_srgb(self) -> bool {
        self.layout().2
    }

    /// `true` for the BCn block-compressed formats.
    pub fn is_compressed(self) -> bool {
        self.sample_type() == SampleType::Compressed
    }

    /// Texel footprint of one addressable block: 4x4 for BCn, 1x1 otherwise.
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
                let (sample, channels, _) = self.layout();
                sample.size_bytes().unwrap_or(0) * channels
            }
        }
    }

    /// Bytes occupied by a tightly packed `width` x `height` image, `None` on
    /// overflow.
    pub fn data_size(self, width: u32, height: u32) -> Option<usize> {
        blocked_data_size(width, height, self.block_size(), self.bytes_per_block())
    }

    fn layout(self) -> (SampleType, usize, bool) {
        use SampleType as S;
        match self {
            Self::Invalid => (S::UNorm8, 0, false),

            Self::UNorm8 => (S::UNorm8, 1, false),
            Self::UNorm8Vec2 => (S::UNorm8, 2, false),
            Self::UNorm8Vec3 => (S::UNorm8, 3, false),
            Self::UNorm8Vec4 => (S::UNorm8, 4, false),

            Self::SNorm8 => (S::SNorm8, 1, false),
            Self::SNorm8Vec2 => (S::SNorm8, 2, false),
            Self::SNorm8Vec3 => (S::SNorm8, 3, false),
            Self::SNorm8Vec4 => (S::SNorm8, 4, false),

            Self::Float16 => (S::Float16, 1, false),
            Self::Float16Vec2 => (S::Float16, 2, false),
            Self::Float16Vec3 => (S::Float16, 3, false),
            Self::Float16Vec4 => (S::Float16, 4, false),

            Self::Float32 => (S::Float32, 1, false),
            Self::Float32Vec2 => (S::Float32, 2, false),
            Self::Float32Vec3 => (S::Float32, 3, false),
            Self::Float32Vec4 => (S::Float32, 4, false),

            Self::Double64 => (S::Float64, 1, false),
            Self::Double64Vec2 => (S::Float64, 2, false),
            Self::Double64Vec3 => (S::Float64, 3, false),
            Self::Double64Vec4 => (S::Float64, 4, false),

            Self::UInt16 => (S::UInt16, 1, false),
            Self::UInt16Vec2 => (S::UInt16, 2, false),
            Self::UInt16Vec3 => (S::UInt16, 3, false),
            Self::UInt16Vec4 => (S::UInt16, 4, false),

            Self::Int16 => (S::Int16, 1, false),
            Self::Int16Vec2 => (S::Int16, 2, false),
            Self::Int16Vec3 => (S::Int16, 3, false),
            Self::Int16Vec4 => (S::Int16, 4, false),

            Self::UInt32 => (S::UInt32, 1, false),
            Self::UInt32Vec2 => (S::UInt32, 2, false),
            Self::UInt32Vec3 => (S::UInt32, 3, false),
            Self::UInt32Vec4 => (S::UInt32, 4, false),

            Self::Int32 => (S::Int32, 1, false),
            Self::Int32Vec2 => (S::Int32, 2, false),
            Self::Int32Vec3 => (S::Int32, 3, false),
            Self::Int32Vec4 => (S::Int32, 4, false),

            Self::UNorm8Srgb => (S::UNorm8, 1, true),
            Self::UNorm8Vec2Srgb => (S::UNorm8, 2, true),
            Self::UNorm8Vec3Srgb => (S::UNorm8, 3, true),
            Self::UNorm8Vec4Srgb => (S::UNorm8, 4, true),

            Self::Bc6FloatVec3 | Self::Bc6UFloatVec3 => (S::Compressed, 3, false),
            Self::Bc7UNorm8Vec4 | Self::Bc1UNorm8Vec4 | Self::Bc3UNorm8Vec4 => {
                (S::Compressed, 4, false)
            }
            Self::Bc7UNorm8Vec4Srgb => (S::Compressed, 4, true),

            Self::Count => panic!("SourceFormat::Count passed as a pixel format"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/source.rs"]
mod tests;
