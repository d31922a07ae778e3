//! texconv negotiates texture formats and rewrites decoded pixel buffers ahead of
//! GPU upload.
//!
//! # Pipeline overview
//!
//! 1. **Decode** (optional): encoded bytes -> [`DecodedTexture`] via the `image` crate
//! 2. **Resolve**: `SourceFormat + ConversionPolicy -> Resolution` (target format and
//!    optional [`ConversionRoutine`])
//! 3. **Convert**: run the routine over the texel buffer, in place when possible
//!
//! [`prepare_upload`] performs steps 2 and 3 in one call; an [`Uploader`] does the
//! same for many textures while keeping one thread pool.
//!
//! Design constraints:
//!
//! - **No unsafe**: typed views of byte buffers go through `bytemuck`.
//! - **Pure resolution**: [`resolve`] depends only on its arguments. Unsupported
//!   formats resolve to [`TargetFormat::Invalid`] and log a warning.
//! - **Bit-exact kernels**: integer premultiplication rounds by adding `0.5` and
//!   truncating; sRGB data is premultiplied in linear light.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod decode;
mod foundation;
mod resolve;
mod upload;

pub mod color;
pub mod convert;
pub mod format;

pub use color::transfer::{linear_to_srgb, srgb_to_linear};
pub use config::{ConversionPolicy, ConversionThreading, UploadConfig};
pub use convert::element::{Element, ElementKind, FloatElement, FloatKind, IntElement, IntKind};
pub use convert::routine::ConversionRoutine;
pub use decode::{DecodedTexture, decode_texture, from_dynamic_image, source_format_for};
pub use format::SampleType;
pub use format::source::SourceFormat;
pub use format::target::TargetFormat;
pub use foundation::error::{TexconvError, TexconvResult};
pub use resolve::{Resolution, resolve, resolve_target_format};
pub use upload::{PreparedUpload, Uploader, prepare_upload};
