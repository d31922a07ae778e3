//! Byte-buffer front end for the kernels.

use half::f16;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{TexconvError, TexconvResult};

use super::element::{Element, ElementKind, FloatElement, FloatKind, IntElement, IntKind};
use super::{kernels, parallel};

/// Buffer rewrite required before a texture upload.
///
/// Every routine is safe to run in place: channel expansion walks texels
/// backwards, and the premultiply kernels keep the texel footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionRoutine {
    /// 3-channel texels widened to 4 channels with an opaque alpha.
    ExpandRgbToRgba {
        /// Channel value type.
        element: ElementKind,
    },
    /// Integer alpha premultiplication, optionally through linear light.
    PremultiplyAlpha {
        /// Channel value type.
        element: IntKind,
        /// Linearize color before the multiply and re-encode after it.
        srgb: bool,
    },
    /// Float alpha premultiplication.
    PremultiplyAlphaFloat {
        /// Channel value type.
        element: FloatKind,
    },
}

#[derive(Clone, Copy, Debug)]
enum Exec {
    Sequential,
    Parallel { chunk_texels: usize },
}

impl ConversionRoutine {
    /// Channel value type the routine reads and writes.
    pub fn element(self) -> ElementKind {
        match self {
            Self::ExpandRgbToRgba { element } => element,
            Self::PremultiplyAlpha { element, .. } => element.into(),
            Self::PremultiplyAlphaFloat { element } => element.into(),
        }
    }

    /// Channels per source texel.
    pub fn source_channels(self) -> usize {
        match self {
            Self::ExpandRgbToRgba { .. } => 3,
            Self::PremultiplyAlpha { .. } | Self::PremultiplyAlphaFloat { .. } => 4,
        }
    }

    /// Channels per converted texel.
    pub fn target_channels(self) -> usize {
        4
    }

    /// Bytes read for `texel_count` texels, `None` on overflow.
    pub fn source_bytes(self, texel_count: usize) -> Option<usize> {
        byte_len(texel_count, self.source_channels(), self.element())
    }

    /// Bytes written for `texel_count` texels, `None` on overflow.
    pub fn target_bytes(self, texel_count: usize) -> Option<usize> {
        byte_len(texel_count, self.target_channels(), self.element())
    }

    /// Convert `texel_count` texels from `src` into `dst`.
    ///
    /// Byte buffers need not be aligned for the element type; misaligned
    /// buffers go through an aligned scratch copy.
    #[tracing::instrument(level = "trace", skip_all, fields(routine = ?self, texel_count = texel_count))]
    pub fn apply(self, src: &[u8], texel_count: usize, dst: &mut [u8]) -> TexconvResult<()> {
        self.run(src, texel_count, dst, Exec::Sequential)
    }

    /// [`ConversionRoutine::apply`] split into rayon chunks of `chunk_texels`.
    #[tracing::instrument(level = "trace", skip_all, fields(routine = ?self, texel_count = texel_count))]
    pub fn apply_parallel(
        self,
        src: &[u8],
        texel_count: usize,
        dst: &mut [u8],
        chunk_texels: usize,
    ) -> TexconvResult<()> {
        self.run(src, texel_count, dst, Exec::Parallel { chunk_texels })
    }

    /// Convert `texel_count` texels held at the start of `buf`, in place.
    ///
    /// `buf` must be large enough for the converted layout
    /// ([`ConversionRoutine::target_bytes`]).
    #[tracing::instrument(level = "trace", skip_all, fields(routine = ?self, texel_count = texel_count))]
    pub fn apply_in_place(self, buf: &mut [u8], texel_count: usize) -> TexconvResult<()> {
        self.run_in_place(buf, texel_count, Exec::Sequential)
    }

    /// [`ConversionRoutine::apply_in_place`] split into rayon chunks.
    ///
    /// Channel expansion always runs sequentially here.
    #[tracing::instrument(level = "trace", skip_all, fields(routine = ?self, texel_count = texel_count))]
    pub fn apply_in_place_parallel(
        self,
        buf: &mut [u8],
        texel_count: usize,
        chunk_texels: usize,
    ) -> TexconvResult<()> {
        self.run_in_place(buf, texel_count, Exec::Parallel { chunk_texels })
    }

    fn run(self, src: &[u8], n: usize, dst: &mut [u8], exec: Exec) -> TexconvResult<()> {
        let src_len = self.checked_len(self.source_bytes(n), src.len(), "source")?;
        let dst_len = self.checked_len(self.target_bytes(n), dst.len(), "destination")?;
        let (src, dst) = (&src[..src_len], &mut dst[..dst_len]);

        match self {
            Self::ExpandRgbToRgba { element } => match element {
                ElementKind::U8 => expand::<u8>(src, n, dst, exec),
                ElementKind::I8 => expand::<i8>(src, n, dst, exec),
                ElementKind::U16 => expand::<u16>(src, n, dst, exec),
                ElementKind::I32 => expand::<i32>(src, n, dst, exec),
                ElementKind::F16 => expand::<f16>(src, n, dst, exec),
                ElementKind::F32 => expand::<f32>(src, n, dst, exec),
            },
            Self::PremultiplyAlpha { element, srgb } => match element {
                IntKind::U8 => premultiply::<u8>(src, n, dst, srgb, exec),
                IntKind::I8 => premultiply::<i8>(src, n, dst, srgb, exec),
                IntKind::U16 => premultiply::<u16>(src, n, dst, srgb, exec),
                IntKind::I32 => premultiply::<i32>(src, n, dst, srgb, exec),
            },
            Self::PremultiplyAlphaFloat { element } => match element {
                FloatKind::F16 => premultiply_float::<f16>(src, n, dst, exec),
                FloatKind::F32 => premultiply_float::<f32>(src, n, dst, exec),
            },
        }
        Ok(())
    }

    fn run_in_place(self, buf: &mut [u8], n: usize, exec: Exec) -> TexconvResult<()> {
        // The converted layout is never smaller than the source layout.
        let len = self.checked_len(self.target_bytes(n), buf.len(), "buffer")?;
        let buf = &mut buf[..len];

        match self {
            Self::ExpandRgbToRgba { element } => match element {
                ElementKind::U8 => expand_in_place::<u8>(buf, n),
                ElementKind::I8 => expand_in_place::<i8>(buf, n),
                ElementKind::U16 => expand_in_place::<u16>(buf, n),
                ElementKind::I32 => expand_in_place::<i32>(buf, n),
                ElementKind::F16 => expand_in_place::<f16>(buf, n),
                ElementKind::F32 => expand_in_place::<f32>(buf, n),
            },
            Self::PremultiplyAlpha { element, srgb } => match element {
                IntKind::U8 => premultiply_in_place::<u8>(buf, n, srgb, exec),
                IntKind::I8 => premultiply_in_place::<i8>(buf, n, srgb, exec),
                IntKind::U16 => premultiply_in_place::<u16>(buf, n, srgb, exec),
                IntKind::I32 => premultiply_in_place::<i32>(buf, n, srgb, exec),
            },
            Self::PremultiplyAlphaFloat { element } => match element {
                FloatKind::F16 => premultiply_float_in_place::<f16>(buf, n, exec),
                FloatKind::F32 => premultiply_float_in_place::<f32>(buf, n, exec),
            },
        }
        Ok(())
    }

    fn checked_len(self, needed: Option<usize>, have: usize, what: &str) -> TexconvResult<usize> {
        let needed = needed.ok_or_else(|| {
            TexconvError::buffer(format!("{what} size overflows usize for {self:?}"))
        })?;
        if have < needed {
            return Err(TexconvError::buffer(format!(
                "{what} holds {have} bytes, {self:?} needs {needed}"
            )));
        }
        Ok(needed)
    }
}

fn byte_len(texel_count: usize, channels: usize, element: ElementKind) -> Option<usize> {
    texel_count
        .checked_mul(channels)?
        .checked_mul(element.size_bytes())
}

fn expand<T: Element>(src: &[u8], n: usize, dst: &mut [u8], exec: Exec) {
    with_typed(src, |s: &[T]| {
        with_typed_mut(dst, |d: &mut [T]| match exec {
            Exec::Sequential => kernels::expand_rgb_to_rgba(s, n, d),
            Exec::Parallel { chunk_texels } => {
                parallel::expand_rgb_to_rgba_par(s, n, d, chunk_texels)
            }
        })
    });
}

fn expand_in_place<T: Element>(buf: &mut [u8], n: usize) {
    with_typed_mut(buf, |b: &mut [T]| {
        kernels::expand_rgb_to_rgba_in_place(b, n)
    });
}

fn premultiply<T: IntElement>(src: &[u8], n: usize, dst: &mut [u8], srgb: bool, exec: Exec) {
    with_typed(src, |s: &[T]| {
        with_typed_mut(dst, |d: &mut [T]| match exec {
            Exec::Sequential => kernels::premultiply_alpha(s, n, d, srgb),
            Exec::Parallel { chunk_texels } => {
                parallel::premultiply_alpha_par(s, n, d, srgb, chunk_texels)
            }
        })
    });
}

fn premultiply_in_place<T: IntElement>(buf: &mut [u8], n: usize, srgb: bool, exec: Exec) {
    with_typed_mut(buf, |b: &mut [T]| match exec {
        Exec::Sequential => kernels::premultiply_alpha_in_place(b, n, srgb),
        Exec::Parallel { chunk_texels } => {
            parallel::premultiply_alpha_in_place_par(b, n, srgb, chunk_texels)
        }
    });
}

fn premultiply_float<T: FloatElement>(src: &[u8], n: usize, dst: &mut [u8], exec: Exec) {
    with_typed(src, |s: &[T]| {
        with_typed_mut(dst, |d: &mut [T]| match exec {
            Exec::Sequential => kernels::premultiply_alpha_float(s, n, d),
            Exec::Parallel { chunk_texels } => {
                parallel::premultiply_alpha_float_par(s, n, d, chunk_texels)
            }
        })
    });
}

fn premultiply_float_in_place<T: FloatElement>(buf: &mut [u8], n: usize, exec: Exec) {
    with_typed_mut(buf, |b: &mut [T]| match exec {
        Exec::Sequential => kernels::premultiply_alpha_float_in_place(b, n),
        Exec::Parallel { chunk_texels } => {
            parallel::premultiply_alpha_float_in_place_par(b, n, chunk_texels)
        }
    });
}

// Zero-copy typed view when the byte slice is aligned for `T`, otherwise an
// aligned scratch copy. Callers pass whole multiples of `size_of::<T>()`.
fn with_typed<T: Element, R>(bytes: &[u8], f: impl FnOnce(&[T]) -> R) -> R {
    match bytemuck::try_cast_slice::<u8, T>(bytes) {
        Ok(typed) => f(typed),
        Err(_) => {
            let scratch: Vec<T> = bytemuck::allocation::pod_collect_to_vec(bytes);
            f(&scratch)
        }
    }
}

fn with_typed_mut<T: Element, R>(bytes: &mut [u8], f: impl FnOnce(&mut [T]) -> R) -> R {
    match bytemuck::try_cast_slice_mut::<u8, T>(bytes) {
        Ok(typed) => f(typed),
        Err(_) => {
            let mut scratch: Vec<T> = bytemuck::allocation::pod_collect_to_vec(bytes);
            let out = f(&mut scratch);
            bytes.copy_from_slice(bytemuck::cast_slice(&scratch));
            out
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/routine.rs"]
mod tests;
