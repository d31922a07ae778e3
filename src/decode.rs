//! Bridge from `image` decoding to [`SourceFormat`] buffers.

use anyhow::Context;
use image::{ColorType, DynamicImage};

use crate::config::UploadConfig;
use crate::format::source::SourceFormat;
use crate::foundation::error::{TexconvError, TexconvResult};
use crate::upload::{PreparedUpload, Uploader, prepare_upload, texel_count};

/// Raw decoded texels plus the format describing them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedTexture {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Layout of `data`.
    pub format: SourceFormat,
    /// Tightly packed, native-endian channel values.
    pub data: Vec<u8>,
}

impl DecodedTexture {
    /// `width * height`, `None` when it overflows `usize`.
    pub fn texel_count(&self) -> Option<usize> {
        texel_count(self.width, self.height)
    }

    /// Run [`prepare_upload`] on this texture.
    pub fn into_upload(self, config: &UploadConfig) -> TexconvResult<PreparedUpload> {
        prepare_upload(self.format, self.data, self.width, self.height, config)
    }

    /// Prepare this texture with an existing [`Uploader`].
    pub fn upload_with(self, uploader: &Uploader) -> TexconvResult<PreparedUpload> {
        uploader.prepare(self.format, self.data, self.width, self.height)
    }
}

/// Source format for an `image` color type.
///
/// 8-bit data maps to the sRGB formats when `srgb` is set. 16-bit data maps to
/// the unsigned integer formats and 32-bit float data to the float formats,
/// neither of which carries an sRGB tag.
pub fn source_format_for(color: ColorType, srgb: bool) -> Option<SourceFormat> {
    use SourceFormat as S;
    let format = match (color, srgb) {
        (ColorType::L8, false) => S::UNorm8,
        (ColorType::La8, false) => S::UNorm8Vec2,
        (ColorType::Rgb8, false) => S::UNorm8Vec3,
        (ColorType::Rgba8, false) => S::UNorm8Vec4,
        (ColorType::L8, true) => S::UNorm8Srgb,
        (ColorType::La8, true) => S::UNorm8Vec2Srgb,
        (ColorType::Rgb8, true) => S::UNorm8Vec3Srgb,
        (ColorType::Rgba8, true) => S::UNorm8Vec4Srgb,
        (ColorType::L16, _) => S::UInt16,
        (ColorType::La16, _) => S::UInt16Vec2,
        (ColorType::Rgb16, _) => S::UInt16Vec3,
        (ColorType::Rgba16, _) => S::UInt16Vec4,
        (ColorType::Rgb32F, _) => S::Float32Vec3,
        (ColorType::Rgba32F, _) => S::Float32Vec4,
        _ => return None,
    };
    Some(format)
}

/// Take the texels of an already decoded image.
pub fn from_dynamic_image(image: DynamicImage, srgb: bool) -> TexconvResult<DecodedTexture> {
    let color = image.color();
    let format = source_format_for(color, srgb)
        .ok_or_else(|| TexconvError::unsupported(format!("image color type {color:?}")))?;
    let (width, height) = (image.width(), image.height());
    Ok(DecodedTexture {
        width,
        height,
        format,
        data: image.into_bytes(),
    })
}

/// Decode encoded image bytes into a [`DecodedTexture`].
pub fn decode_texture(bytes: &[u8], srgb: bool) -> TexconvResult<DecodedTexture> {
    let image = image::load_from_memory(bytes).context("decode image from memory")?;
    from_dynamic_image(image, srgb)
}

#[cfg(test)]
#[path = "../tests/unit/decode.rs"]
mod tests;
