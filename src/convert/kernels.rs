//! Texel buffer transforms.
//!
//! Every kernel operates on a flat slice of interleaved channel values and
//! touches only the first `texel_count` texels. None allocate and none fail; a
//! slice shorter than `texel_count` texels is a caller bug and panics on the
//! slice index.
//!
//! The premultiply kernels keep the texel footprint, so their `_in_place` forms
//! are plain element-wise rewrites. Channel expansion grows each texel from 3 to
//! 4 values; its in-place form walks texels from the last to the first so no
//! source texel is overwritten before it is read.

use crate::color::transfer::{linear_to_srgb, srgb_to_linear};

use super::element::{Element, FloatElement, IntElement};

/// Widen 3-channel texels to 4 channels with an opaque alpha.
///
/// # Panics
///
/// If `src` holds fewer than `3 * texel_count` values or `dst` fewer than
/// `4 * texel_count`.
pub fn expand_rgb_to_rgba<T: Element>(src: &[T], texel_count: usize, dst: &mut [T]) {
    let src = &src[..3 * texel_count];
    let dst = &mut dst[..4 * texel_count];
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(3)) {
        d[..3].copy_from_slice(s);
        d[3] = T::OPAQUE;
    }
}

/// [`expand_rgb_to_rgba`] over a single buffer.
///
/// The first `3 * texel_count` values hold the source texels; on return the
/// first `4 * texel_count` values hold the expanded texels.
///
/// # Panics
///
/// If `buf` holds fewer than `4 * texel_count` values.
pub fn expand_rgb_to_rgba_in_place<T: Element>(buf: &mut [T], texel_count: usize) {
    let buf = &mut buf[..4 * texel_count];
    // Descending: texel i is written to [4i, 4i+4), which only overlaps source
    // texels at index >= i. Those above i have already moved and texel i itself
    // is read by copy_within before the write.
    for i in (0..texel_count).rev() {
        buf.copy_within(3 * i..3 * i + 3, 4 * i);
        buf[4 * i + 3] = T::OPAQUE;
    }
}

/// Premultiply color by alpha for integer texels.
///
/// Alpha is normalized by the type maximum. With `srgb` set, color channels are
/// linearized before the multiply and re-encoded after it. Results are rounded
/// by adding `0.5` and truncating toward zero; the narrowing cast saturates at
/// the type bounds. Alpha is copied unchanged.
///
/// Signed types are premultiplied too, even though signed color is not
/// colorimetrically meaningful: requesting premultiplication must always result
/// in premultiplied data regardless of format.
///
/// # Panics
///
/// If either slice holds fewer than `4 * texel_count` values.
pub fn premultiply_alpha<T: IntElement>(src: &[T], texel_count: usize, dst: &mut [T], srgb: bool) {
    let src = &src[..4 * texel_count];
    let dst = &mut dst[..4 * texel_count];
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        d.copy_from_slice(&premultiply_texel([s[0], s[1], s[2], s[3]], srgb));
    }
}

/// [`premultiply_alpha`] rewriting `buf` in place.
pub fn premultiply_alpha_in_place<T: IntElement>(buf: &mut [T], texel_count: usize, srgb: bool) {
    for px in buf[..4 * texel_count].chunks_exact_mut(4) {
        let out = premultiply_texel([px[0], px[1], px[2], px[3]], srgb);
        px.copy_from_slice(&out);
    }
}

/// Premultiply color by alpha for float texels.
///
/// Float data is taken to be linear already, so no transfer curve is applied.
/// Alpha is copied unchanged.
///
/// # Panics
///
/// If either slice holds fewer than `4 * texel_count` values.
pub fn premultiply_alpha_float<T: FloatElement>(src: &[T], texel_count: usize, dst: &mut [T]) {
    let src = &src[..4 * texel_count];
    let dst = &mut dst[..4 * texel_count];
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        d.copy_from_slice(&premultiply_texel_float([s[0], s[1], s[2], s[3]]));
    }
}

/// [`premultiply_alpha_float`] rewriting `buf` in place.
pub fn premultiply_alpha_float_in_place<T: FloatElement>(buf: &mut [T], texel_count: usize) {
    for px in buf[..4 * texel_count].chunks_exact_mut(4) {
        let out = premultiply_texel_float([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }
}

#[inline]
fn premultiply_texel<T: IntElement>(px: [T; 4], srgb: bool) -> [T; 4] {
    let max = T::MAX_F32;
    let alpha = px[3].to_f32() / max;

    let mut out = px;
    for (o, &c) in out[..3].iter_mut().zip(&px[..3]) {
        let mut p = c.to_f32();
        if srgb {
            p = max * srgb_to_linear(p / max);
        }
        p *= alpha;
        if srgb {
            p = max * linear_to_srgb(p / max);
        }
        *o = T::from_f32(p + 0.5);
    }
    out
}

#[inline]
fn premultiply_texel_float<T: FloatElement>(px: [T; 4]) -> [T; 4] {
    let alpha = px[3].to_f32();
    let mut out = px;
    for (o, &c) in out[..3].iter_mut().zip(&px[..3]) {
        *o = T::from_f32(c.to_f32() * alpha);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/convert/kernels.rs"]
mod tests;
