//! Resolve a decoded buffer's format and rewrite the buffer for upload.

use crate::config::UploadConfig;
use crate::convert::routine::ConversionRoutine;
use crate::format::source::SourceFormat;
use crate::format::target::TargetFormat;
use crate::foundation::error::{TexconvError, TexconvResult};
use crate::resolve::resolve;

/// Texture bytes ready to hand to a GPU allocation in `target` format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedUpload {
    /// Format the texture must be allocated with.
    pub target: TargetFormat,
    /// Routine that was applied to `data`, if any.
    pub conversion: Option<ConversionRoutine>,
    /// Tightly packed texel data in `target` layout.
    pub data: Vec<u8>,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
}

/// Resolves formats and converts buffers under one [`UploadConfig`].
///
/// The rayon pool requested by `threading.threads` is built once here and reused
/// for every texture prepared through this value.
#[derive(Debug)]
pub struct Uploader {
    config: UploadConfig,
    pool: Option<rayon::ThreadPool>,
}

impl Uploader {
    /// Validate `config` and build its thread pool when parallel conversion is on.
    pub fn new(config: &UploadConfig) -> TexconvResult<Self> {
        let pool = if config.threading.parallel {
            config.threading.build_pool()?
        } else {
            None
        };
        Ok(Self {
            config: config.clone(),
            pool,
        })
    }

    /// Settings this uploader was built with.
    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Dedicated pool, `None` when sequential or running on the global pool.
    pub fn thread_pool(&self) -> Option<&rayon::ThreadPool> {
        self.pool.as_ref()
    }

    /// Resolve `source` and convert `data` in place.
    ///
    /// `data` holds a tightly packed `width` x `height` image in `source` layout.
    /// When a conversion applies, the buffer is grown to the target footprint and
    /// rewritten; otherwise it is passed through untouched.
    ///
    /// Returns [`TexconvError::Unsupported`] for formats without a GPU target and
    /// [`TexconvError::Buffer`] when `data` is shorter than the image or the image
    /// size overflows `usize`.
    #[tracing::instrument(level = "debug", skip(self, data), fields(bytes = data.len()))]
    pub fn prepare(
        &self,
        source: SourceFormat,
        mut data: Vec<u8>,
        width: u32,
        height: u32,
    ) -> TexconvResult<PreparedUpload> {
        let resolution = resolve(source, &self.config.policy);
        if !resolution.is_supported() {
            return Err(TexconvError::unsupported(format!(
                "{source:?} has no GPU upload format"
            )));
        }

        let needed = source.data_size(width, height).ok_or_else(|| {
            TexconvError::buffer(format!("{source:?} {width}x{height} overflows usize"))
        })?;
        if data.len() < needed {
            return Err(TexconvError::buffer(format!(
                "{source:?} {width}x{height} needs {needed} bytes, got {}",
                data.len()
            )));
        }

        tracing::debug!(
            target_format = ?resolution.target,
            conversion = ?resolution.conversion,
            "resolved upload format"
        );

        if let Some(routine) = resolution.conversion {
            let texel_count = texel_count(width, height).ok_or_else(|| {
                TexconvError::buffer(format!("{width}x{height} texel count overflows usize"))
            })?;
            let target_len = routine
                .target_bytes(texel_count)
                .ok_or_else(|| TexconvError::buffer("texel count overflows the target size"))?;
            data.resize(target_len, 0);
            self.convert_in_place(routine, &mut data, texel_count)?;
        }

        Ok(PreparedUpload {
            target: resolution.target,
            conversion: resolution.conversion,
            data,
            width,
            height,
        })
    }

    fn convert_in_place(
        &self,
        routine: ConversionRoutine,
        data: &mut [u8],
        texel_count: usize,
    ) -> TexconvResult<()> {
        let threading = &self.config.threading;
        if !threading.parallel {
            return routine.apply_in_place(data, texel_count);
        }

        let chunk_texels = threading.normalized_chunk_texels();
        match &self.pool {
            Some(pool) => {
                pool.install(|| routine.apply_in_place_parallel(data, texel_count, chunk_texels))
            }
            None => routine.apply_in_place_parallel(data, texel_count, chunk_texels),
        }
    }
}

/// One-shot [`Uploader::prepare`].
///
/// Builds a fresh [`Uploader`] (and thread pool, when configured) per call. Keep an
/// [`Uploader`] around when preparing many textures.
pub fn prepare_upload(
    source: SourceFormat,
    data: Vec<u8>,
    width: u32,
    height: u32,
    config: &UploadConfig,
) -> TexconvResult<PreparedUpload> {
    Uploader::new(config)?.prepare(source, data, width, height)
}

pub(crate) fn texel_count(width: u32, height: u32) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)
}

#[cfg(test)]
#[path = "../tests/unit/upload.rs"]
mod tests;
