//! Pairwise converters between color spaces, one direction each.
use crate::color::{lab, CieLab, CieXyz, ColorVector, Illuminant, Lms};
use crate::color_matrix::RowMatrix;

/// The Bradford cone response matrix, XYZ to LMS.
///
/// The default transform for chromatic adaptation, as tabulated on
/// <http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html>.
#[rustfmt::skip]
pub const BRADFORD: RowMatrix = RowMatrix::new([
     0.8951,  0.2664, -0.1614,
    -0.7502,  1.7135,  0.0367,
     0.0389, -0.0685,  1.0296,
]);

/// The published inverse of [`BRADFORD`], LMS to XYZ.
#[rustfmt::skip]
pub const BRADFORD_INVERSE: RowMatrix = RowMatrix::new([
     0.9869929, -0.1470543,  0.1599627,
     0.4323053,  0.5183603,  0.0492912,
    -0.0085287,  0.0400428,  0.9684867,
]);

/// Hunt-Pointer-Estevez fundamentals normalized to D65.
///
/// The matrix of the classic von Kries transform.
#[rustfmt::skip]
pub const VON_KRIES: RowMatrix = RowMatrix::new([
     0.40024, 0.70760, -0.08081,
    -0.22630, 1.16532,  0.04570,
     0.00000, 0.00000,  0.91822,
]);

/// The CAT02 transform of CIECAM02.
#[rustfmt::skip]
pub const CAT02: RowMatrix = RowMatrix::new([
     0.7328, 0.4296, -0.1624,
    -0.7036, 1.6975,  0.0061,
     0.0030, 0.0136,  0.9834,
]);

/// Converts tristimulus coordinates into cone responses.
///
/// A pure matrix multiplication; the default matrix is [`BRADFORD`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XyzToLms {
    matrix: RowMatrix,
}

/// Converts cone responses back into tristimulus coordinates.
///
/// The default matrix is [`BRADFORD_INVERSE`]. A caller pairing this with a
/// custom [`XyzToLms`] supplies the matching inverse itself, or builds both
/// through [`VonKriesAdaptation::with_matrix`].
///
/// [`VonKriesAdaptation::with_matrix`]: crate::color::VonKriesAdaptation::with_matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LmsToXyz {
    matrix: RowMatrix,
}

/// Converts tristimulus coordinates into Lab relative to a reference white.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XyzToLab {
    white: CieXyz,
}

/// Converts Lab coordinates back into tristimulus values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabToXyz {
    white: CieXyz,
}

impl XyzToLms {
    /// Use a custom cone response matrix.
    pub const fn with_matrix(matrix: RowMatrix) -> Self {
        XyzToLms { matrix }
    }

    pub fn convert(&self, xyz: CieXyz) -> Lms {
        Lms::from(self.matrix.mul_vec(xyz.vector()))
    }
}

impl LmsToXyz {
    /// Use a custom cone response matrix, the inverse of the forward one.
    pub const fn with_matrix(matrix: RowMatrix) -> Self {
        LmsToXyz { matrix }
    }

    pub fn convert(&self, lms: Lms) -> CieXyz {
        CieXyz::from(self.matrix.mul_vec(lms.vector()))
    }
}

impl XyzToLab {
    /// Evaluate Lab relative to the given reference white.
    pub const fn with_white_point(white: CieXyz) -> Self {
        XyzToLab { white }
    }

    pub fn convert(&self, xyz: CieXyz) -> CieLab {
        CieLab::from(lab::lab_from_xyz(xyz.vector(), self.white.vector()))
    }
}

impl LabToXyz {
    /// Interpret Lab relative to the given reference white.
    pub const fn with_white_point(white: CieXyz) -> Self {
        LabToXyz { white }
    }

    pub fn convert(&self, lab: CieLab) -> CieXyz {
        CieXyz::from(lab::lab_to_xyz(lab.vector(), self.white.vector()))
    }
}

impl Default for XyzToLms {
    fn default() -> Self {
        Self::with_matrix(BRADFORD)
    }
}

impl Default for LmsToXyz {
    fn default() -> Self {
        Self::with_matrix(BRADFORD_INVERSE)
    }
}

impl Default for XyzToLab {
    fn default() -> Self {
        Self::with_white_point(Illuminant::D50.white_point())
    }
}

impl Default for LabToXyz {
    fn default() -> Self {
        Self::with_white_point(Illuminant::D50.white_point())
    }
}
