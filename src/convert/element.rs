//! Numeric kinds the conversion kernels are generic over.

use half::f16;
use serde::{Deserialize, Serialize};

/// Element type of one channel value in an interleaved texel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// 8-bit unsigned integer (unsigned normalized formats).
    U8,
    /// 8-bit signed integer (signed normalized formats).
    I8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit signed integer.
    I32,
    /// IEEE 754 half-precision float.
    F16,
    /// IEEE 754 single-precision float.
    F32,
}

impl ElementKind {
    /// Storage size of one element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::F16 => 2,
            Self::I32 | Self::F32 => 4,
        }
    }

    /// `true` for the floating-point kinds.
    pub fn is_float(self) -> bool {
        matches!(self, Self::F16 | Self::F32)
    }
}

/// Integer subset of [`ElementKind`], accepted by the integer premultiply kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum IntKind {
    U8,
    I8,
    U16,
    I32,
}

/// Float subset of [`ElementKind`], accepted by the float premultiply kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum FloatKind {
    F16,
    F32,
}

impl From<IntKind> for ElementKind {
    fn from(kind: IntKind) -> Self {
        match kind {
            IntKind::U8 => Self::U8,
            IntKind::I8 => Self::I8,
            IntKind::U16 => Self::U16,
            IntKind::I32 => Self::I32,
        }
    }
}

impl From<FloatKind> for ElementKind {
    fn from(kind: FloatKind) -> Self {
        match kind {
            FloatKind::F16 => Self::F16,
            FloatKind::F32 => Self::F32,
        }
    }
}

/// A channel value type the kernels can read and write.
///
/// Integer implementations convert from `f32` by truncating toward zero and
/// saturating at the type's bounds; float implementations round to nearest.
pub trait Element: bytemuck::Pod + Send + Sync + 'static {
    /// Runtime tag for this type.
    const KIND: ElementKind;

    /// Fully opaque alpha: the maximum value for integers, `1.0` for floats.
    const OPAQUE: Self;

    /// Widen to `f32` without normalizing.
    fn to_f32(self) -> f32;

    /// Narrow from `f32` without normalizing.
    fn from_f32(v: f32) -> Self;
}

/// Integer element types, whose maximum value defines the normalized range.
pub trait IntElement: Element {
    /// `Self::MAX` as `f32`.
    const MAX_F32: f32;
}

/// Floating-point element types, assumed to hold linear values.
pub trait FloatElement: Element {}

macro_rules! int_element {
    ($ty:ty, $kind:ident) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$kind;
            const OPAQUE: Self = <$ty>::MAX;

            #[inline]
            fn to_f32(self) -> f32 {
                self as f32
            }

            #[inline]
            fn from_f32(v: f32) -> Self {
                v as $ty
            }
        }

        impl IntElement for $ty {
            const MAX_F32: f32 = <$ty>::MAX as f32;
        }
    };
}

int_element!(u8, U8);
int_element!(i8, I8);
int_element!(u16, U16);
int_element!(i32, I32);

impl Element for f16 {
    const KIND: ElementKind = ElementKind::F16;
    const OPAQUE: Self = f16::ONE;

    #[inline]
    fn to_f32(self) -> f32 {
        f16::to_f32(self)
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        f16::from_f32(v)
    }
}

impl FloatElement for f16 {}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::F32;
    const OPAQUE: Self = 1.0;

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v
    }
}

impl FloatElement for f32 {}

#[cfg(test)]
#[path = "../../tests/unit/convert/element.rs"]
mod tests;
