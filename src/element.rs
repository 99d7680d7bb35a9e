//! The closed set of element types a container may hold.
//!
//! [`Element`] is sealed: only the types listed in [`ElementKind`] implement it,
//! so naming any other type as an element fails to build.
//!
//! ```compile_fail
//! // `i64` is not a permitted element type.
//! let _ = pjplot::type_name::<i64>();
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// RGBA colour with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new color with explicit RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
}

impl Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

/// Tag for each permitted element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    I32,
    U8,
    U32,
    F32,
    F64,
    Rgba,
}

impl ElementKind {
    /// Every permitted kind, in declaration order.
    pub const ALL: [ElementKind; 6] = [
        ElementKind::I32,
        ElementKind::U8,
        ElementKind::U32,
        ElementKind::F32,
        ElementKind::F64,
        ElementKind::Rgba,
    ];

    /// Stable display name of the element type.
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::I32 => "i32",
            ElementKind::U8 => "u8",
            ElementKind::U32 => "u32",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
            ElementKind::Rgba => "rgba",
        }
    }
}

// Every kind in `ALL` must have a non-empty name; `name` itself is an exhaustive match.
const _: () = {
    let mut i = 0;
    while i < ElementKind::ALL.len() {
        assert!(!ElementKind::ALL[i].name().is_empty());
        i += 1;
    }
};

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type that may be stored in an [`NdArray`](crate::NdArray).
pub trait Element: sealed::Sealed + Copy + Default + Debug + PartialEq + 'static {
    const KIND: ElementKind;
}

macro_rules! impl_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Element for $ty {
                const KIND: ElementKind = ElementKind::$kind;
            }
        )*
    };
}

impl_element! {
    i32 => I32,
    u8 => U8,
    u32 => U32,
    f32 => F32,
    f64 => F64,
    Rgba => Rgba,
}

/// Human-readable name of a permitted element type.
pub const fn type_name<T: Element>() -> &'static str {
    T::KIND.name()
}
