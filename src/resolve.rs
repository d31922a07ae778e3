//! Source-to-target format negotiation.

use serde::{Deserialize, Serialize};

use crate::config::ConversionPolicy;
use crate::convert::element::{ElementKind, FloatKind, IntKind};
use crate::convert::routine::ConversionRoutine;
use crate::format::source::SourceFormat;
use crate::format::target::TargetFormat;

/// Outcome of [`resolve`]: the format to allocate and the rewrite, if any,
/// the source buffer needs before it matches that format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Format to allocate the GPU texture with.
    pub target: TargetFormat,
    /// `None` means the source bytes upload as-is.
    pub conversion: Option<ConversionRoutine>,
}

impl Resolution {
    /// `false` when the source has no upload path.
    pub fn is_supported(&self) -> bool {
        self.target.is_valid()
    }
}

/// [`resolve_target_format`] taking a [`ConversionPolicy`].
pub fn resolve(source: SourceFormat, policy: &ConversionPolicy) -> Resolution {
    let (target, conversion) = resolve_target_format(
        source,
        policy.premultiply_alpha,
        policy.avoid_three_component_formats,
    );
    Resolution { target, conversion }
}

/// Pick the GPU format for `source` and the conversion its buffer needs.
///
/// - 3-channel 8-bit formats always expand to 4 channels; no 3-channel 8-bit
///   target exists.
/// - Other 3-channel formats expand only with `avoid_three_component_formats`.
/// - 4-channel formats gain a premultiply routine with `premultiply_alpha`; the
///   target format never changes because of it.
/// - Block-compressed formats never convert, since premultiplying them would
///   need a decompress/recompress round trip.
/// - Formats without a target (64-bit float, 16-bit signed and 32-bit unsigned
///   integer, 1/2-channel sRGB) resolve to [`TargetFormat::Invalid`] and log a
///   warning. `Invalid` input resolves to `Invalid` silently.
///
/// # Panics
///
/// On [`SourceFormat::Count`], which no decoder can produce.
pub fn resolve_target_format(
    source: SourceFormat,
    premultiply_alpha: bool,
    avoid_three_component_formats: bool,
) -> (TargetFormat, Option<ConversionRoutine>) {
    use SourceFormat as S;
    use TargetFormat as T;

    let expand = |element| Some(ConversionRoutine::ExpandRgbToRgba { element });
    let premultiply = |element, srgb| {
        premultiply_alpha.then_some(ConversionRoutine::PremultiplyAlpha { element, srgb })
    };
    let premultiply_float = |element| {
        premultiply_alpha.then_some(ConversionRoutine::PremultiplyAlphaFloat { element })
    };
    let three_or_four = |vec3, vec4, element| {
        if avoid_three_component_formats {
            (vec4, expand(element))
        } else {
            (vec3, None)
        }
    };

    match source {
        S::UNorm8 => (T::UNorm8, None),
        S::UNorm8Vec2 => (T::UNorm8Vec2, None),
        S::UNorm8Vec3 => (T::UNorm8Vec4, expand(ElementKind::U8)),
        S::UNorm8Vec4 => (T::UNorm8Vec4, premultiply(IntKind::U8, false)),

        S::SNorm8 => (T::SNorm8, None),
        S::SNorm8Vec2 => (T::SNorm8Vec2, None),
        S::SNorm8Vec3 => (T::SNorm8Vec4, expand(ElementKind::I8)),
        // Signed color is not meaningful to premultiply, but it is done anyway
        // so a premultiply request always yields premultiplied data.
        S::SNorm8Vec4 => (T::SNorm8Vec4, premultiply(IntKind::I8, false)),

        S::Float16 => (T::Float16, None),
        S::Float16Vec2 => (T::Float16Vec2, None),
        S::Float16Vec3 => three_or_four(T::Float16Vec3, T::Float16Vec4, ElementKind::F16),
        S::Float16Vec4 => (T::Float16Vec4, premultiply_float(FloatKind::F16)),

        S::Float32 => (T::Float32, None),
        S::Float32Vec2 => (T::Float32Vec2, None),
        S::Float32Vec3 => three_or_four(T::Float32Vec3, T::Float32Vec4, ElementKind::F32),
        S::Float32Vec4 => (T::Float32Vec4, premultiply_float(FloatKind::F32)),

        S::Double64 | S::Double64Vec2 | S::Double64Vec3 | S::Double64Vec4 => {
            unsupported(source, "64-bit float texture formats are not supported")
        }

        S::UInt16 => (T::UInt16, None),
        S::UInt16Vec2 => (T::UInt16Vec2, None),
        S::UInt16Vec3 => three_or_four(T::UInt16Vec3, T::UInt16Vec4, ElementKind::U16),
        S::UInt16Vec4 => (T::UInt16Vec4, premultiply(IntKind::U16, false)),

        S::Int16 | S::Int16Vec2 | S::Int16Vec3 | S::Int16Vec4 => {
            unsupported(source, "signed 16-bit integer texture formats are not supported")
        }

        S::UInt32 | S::UInt32Vec2 | S::UInt32Vec3 | S::UInt32Vec4 => {
            unsupported(source, "unsigned 32-bit integer texture formats are not supported")
        }

        S::Int32 => (T::Int32, None),
        S::Int32Vec2 => (T::Int32Vec2, None),
        S::Int32Vec3 => three_or_four(T::Int32Vec3, T::Int32Vec4, ElementKind::I32),
        S::Int32Vec4 => (T::Int32Vec4, premultiply(IntKind::I32, false)),

        S::UNorm8Srgb | S::UNorm8Vec2Srgb => {
            unsupported(source, "one and two channel sRGB texture formats are not supported")
        }
        S::UNorm8Vec3Srgb => (T::UNorm8Vec4Srgb, expand(ElementKind::U8)),
        S::UNorm8Vec4Srgb => (T::UNorm8Vec4Srgb, premultiply(IntKind::U8, true)),

        S::Bc6FloatVec3 => (T::Bc6FloatVec3, None),
        S::Bc6UFloatVec3 => (T::Bc6UFloatVec3, None),
        S::Bc7UNorm8Vec4 => (T::Bc7UNorm8Vec4, None),
        S::Bc7UNorm8Vec4Srgb => (T::Bc7UNorm8Vec4Srgb, None),
        S::Bc1UNorm8Vec4 => (T::Bc1UNorm8Vec4, None),
        S::Bc3UNorm8Vec4 => (T::Bc3UNorm8Vec4, None),

        S::Invalid => (T::Invalid, None),
        S::Count => panic!("SourceFormat::Count passed to resolve_target_format"),
    }
}

fn unsupported(
    source: SourceFormat,
    reason: &'static str,
) -> (TargetFormat, Option<ConversionRoutine>) {
    tracing::warn!(source_format = ?source, "{reason}");
    (TargetFormat::Invalid, None)
}

#[cfg(test)]
#[path = "../tests/unit/resolve.rs"]
mod tests;
