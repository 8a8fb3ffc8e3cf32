//! Color space value types, conversion, and chromatic adaptation.
mod adapt;
mod convert;
mod lab;

pub use self::adapt::{SingularMatrixError, VonKriesAdaptation};
pub use self::convert::{
    LabToXyz, LmsToXyz, XyzToLab, XyzToLms, BRADFORD, BRADFORD_INVERSE, CAT02, VON_KRIES,
};

/// A color exposed as a vector of its three components.
///
/// Every color space type stores the same three numbers under different
/// names; this view lets matrix-based conversion treat them uniformly. The
/// components keep the canonical order of their space.
pub trait ColorVector {
    /// The components of the color as a vector.
    fn vector(&self) -> [f32; 3];
}

/// A color in the CIE 1931 XYZ tristimulus space.
///
/// The device-independent pivot for all conversions in this crate. White
/// points are plain `CieXyz` values; two of them denote the same viewing
/// condition exactly when their components compare equal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CieXyz {
    /// The first CIE standard observer.
    pub x: f32,
    /// The second CIE standard observer, the luminance.
    pub y: f32,
    /// The third CIE standard observer.
    pub z: f32,
}

/// A color in the LMS cone response space.
///
/// The computational domain of chromatic adaptation. Which cone fundamentals
/// apply is decided by the matrix of the converter that produced the value,
/// not by the type.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lms {
    /// Long wavelength cone response.
    pub l: f32,
    /// Medium wavelength cone response.
    pub m: f32,
    /// Short wavelength cone response.
    pub s: f32,
}

/// A color in the CIE L*a*b* space, relative to some reference white.
///
/// Lightness ranges 0 to 100; the chroma axes are unbounded in principle,
/// common content stays within about ±128.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CieLab {
    /// Perceptual lightness.
    pub l: f32,
    /// The green/red opponent axis.
    pub a: f32,
    /// The blue/yellow opponent axis.
    pub b: f32,
}

/// The standard illuminants.
///
/// | Illuminant | X       | Y       | Z       |
/// |------------|---------|---------|---------|
/// | A          | 1.09850 | 1.00000 | 0.35585 |
/// | B          | 0.99072 | 1.00000 | 0.85223 |
/// | C          | 0.98074 | 1.00000 | 1.18232 |
/// | D50        | 0.96422 | 1.00000 | 0.82521 |
/// | D55        | 0.95682 | 1.00000 | 0.92149 |
/// | D65        | 0.95047 | 1.00000 | 1.08883 |
/// | D75        | 0.94972 | 1.00000 | 1.22638 |
/// | E          | 1.00000 | 1.00000 | 1.00000 |
/// | F2         | 0.99186 | 1.00000 | 0.67393 |
/// | F7         | 0.95041 | 1.00000 | 1.08747 |
/// | F11        | 1.00962 | 1.00000 | 0.64350 |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Illuminant {
    A,
    B,
    C,
    D50,
    D55,
    D65,
    D75,
    E,
    F2,
    F7,
    F11,
}

impl CieXyz {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        CieXyz { x, y, z }
    }
}

impl Lms {
    pub const fn new(l: f32, m: f32, s: f32) -> Self {
        Lms { l, m, s }
    }
}

impl CieLab {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        CieLab { l, a, b }
    }
}

impl Illuminant {
    /// The white point of the illuminant.
    pub const fn white_point(self) -> CieXyz {
        use Illuminant::*;
        match self {
            A => CieXyz::new(1.09850, 1.00000, 0.35585),
            B => CieXyz::new(0.99072, 1.00000, 0.85223),
            C => CieXyz::new(0.98074, 1.00000, 1.18232),
            D50 => CieXyz::new(0.96422, 1.00000, 0.82521),
            D55 => CieXyz::new(0.95682, 1.00000, 0.92149),
            D65 => CieXyz::new(0.95047, 1.00000, 1.08883),
            D75 => CieXyz::new(0.94972, 1.00000, 1.22638),
            E => CieXyz::new(1.00000, 1.00000, 1.00000),
            F2 => CieXyz::new(0.99186, 1.00000, 0.67393),
            F7 => CieXyz::new(0.95041, 1.00000, 1.08747),
            F11 => CieXyz::new(1.00962, 1.00000, 0.64350),
        }
    }
}

macro_rules! color_vector {
    ($space:ident { $c0:ident, $c1:ident, $c2:ident }) => {
        impl ColorVector for $space {
            fn vector(&self) -> [f32; 3] {
                [self.$c0, self.$c1, self.$c2]
            }
        }

        impl From<[f32; 3]> for $space {
            fn from([$c0, $c1, $c2]: [f32; 3]) -> Self {
                $space { $c0, $c1, $c2 }
            }
        }

        impl From<$space> for [f32; 3] {
            fn from(color: $space) -> [f32; 3] {
                color.vector()
            }
        }
    };
}

color_vector!(CieXyz { x, y, z });
color_vector!(Lms { l, m, s });
color_vector!(CieLab { l, a, b });
