//! CPU-side texel conversion ahead of upload.

pub mod element;
pub mod kernels;
pub mod parallel;
pub mod routine;
