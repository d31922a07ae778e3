//! Rayon-chunked variants of the conversion kernels.
//!
//! Texels are split into contiguous runs of `chunk_texels` and each run is
//! handed to the sequential kernel. Every texel's reads and writes stay inside
//! its own run, so runs are independent. These functions execute on the
//! current rayon pool; wrap calls in [`rayon::ThreadPool::install`] to pick one.
//!
//! There is no parallel in-place channel expansion: within a single buffer the
//! output of one run overlaps the input of the next.

use rayon::prelude::*;

use super::element::{Element, FloatElement, IntElement};
use super::kernels;

/// Parallel [`kernels::expand_rgb_to_rgba`].
pub fn expand_rgb_to_rgba_par<T: Element>(
    src: &[T],
    texel_count: usize,
    dst: &mut [T],
    chunk_texels: usize,
) {
    let chunk = chunk_texels.max(1);
    dst[..4 * texel_count]
        .par_chunks_mut(4 * chunk)
        .zip(src[..3 * texel_count].par_chunks(3 * chunk))
        .for_each(|(d, s)| kernels::expand_rgb_to_rgba(s, s.len() / 3, d));
}

/// Parallel [`kernels::premultiply_alpha`].
pub fn premultiply_alpha_par<T: IntElement>(
    src: &[T],
    texel_count: usize,
    dst: &mut [T],
    srgb: bool,
    chunk_texels: usize,
) {
    let chunk = 4 * chunk_texels.max(1);
    dst[..4 * texel_count]
        .par_chunks_mut(chunk)
        .zip(src[..4 * texel_count].par_chunks(chunk))
        .for_each(|(d, s)| kernels::premultiply_alpha(s, s.len() / 4, d, srgb));
}

/// Parallel [`kernels::premultiply_alpha_in_place`].
pub fn premultiply_alpha_in_place_par<T: IntElement>(
    buf: &mut [T],
    texel_count: usize,
    srgb: bool,
    chunk_texels: usize,
) {
    buf[..4 * texel_count]
        .par_chunks_mut(4 * chunk_texels.max(1))
        .for_each(|run| kernels::premultiply_alpha_in_place(run, run.len() / 4, srgb));
}

/// Parallel [`kernels::premultiply_alpha_float`].
pub fn premultiply_alpha_float_par<T: FloatElement>(
    src: &[T],
    texel_count: usize,
    dst: &mut [T],
    chunk_texels: usize,
) {
    let chunk = 4 * chunk_texels.max(1);
    dst[..4 * texel_count]
        .par_chunks_mut(chunk)
        .zip(src[..4 * texel_count].par_chunks(chunk))
        .for_each(|(d, s)| kernels::premultiply_alpha_float(s, s.len() / 4, d));
}

/// Parallel [`kernels::premultiply_alpha_float_in_place`].
pub fn premultiply_alpha_float_in_place_par<T: FloatElement>(
    buf: &mut [T],
    texel_count: usize,
    chunk_texels: usize,
) {
    buf[..4 * texel_count]
        .par_chunks_mut(4 * chunk_texels.max(1))
        .for_each(|run| kernels::premultiply_alpha_float_in_place(run, run.len() / 4));
}

#[cfg(test)]
#[path = "../../tests/unit/convert/parallel.rs"]
mod tests;
