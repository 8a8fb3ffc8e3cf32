//! Re-renders colors under a different reference white.
use crate::color::convert::{LmsToXyz, XyzToLms};
use crate::color::{CieXyz, Lms};
use crate::color_matrix::RowMatrix;

/// The von Kries chromatic adaptation model.
///
/// Converts into cone response space, scales each channel by the ratio of
/// the target to the source white point, and converts back. Transformation
/// described on <http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html>.
///
/// The two converters decide the cone fundamentals. The default is Bradford;
/// [`with_matrix`] accepts any published alternative such as [`VON_KRIES`] or
/// [`CAT02`], and [`with_converters`] takes arbitrary converter pairs.
///
/// [`with_matrix`]: VonKriesAdaptation::with_matrix
/// [`with_converters`]: VonKriesAdaptation::with_converters
/// [`VON_KRIES`]: crate::color::VON_KRIES
/// [`CAT02`]: crate::color::CAT02
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VonKriesAdaptation {
    to_lms: XyzToLms,
    to_xyz: LmsToXyz,
}

/// Error when a cone response matrix has no inverse.
///
/// Returned by [`VonKriesAdaptation::with_matrix`] for a matrix whose
/// determinant vanishes or is not finite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SingularMatrixError {
    inner: (),
}

impl VonKriesAdaptation {
    /// Derive both converters from one cone response matrix.
    ///
    /// The backwards direction uses the computed inverse, so this fails at
    /// construction when the matrix can not be inverted. It never defers the
    /// failure to [`adapt`].
    ///
    /// [`adapt`]: Self::adapt
    pub fn with_matrix(matrix: RowMatrix) -> Result<Self, SingularMatrixError> {
        let det = matrix.det();
        if det == 0.0 || !det.is_finite() {
            return Err(SingularMatrixError { inner: () });
        }

        Ok(VonKriesAdaptation {
            to_lms: XyzToLms::with_matrix(matrix),
            to_xyz: LmsToXyz::with_matrix(matrix.inv()),
        })
    }

    /// Compose from explicit converters.
    ///
    /// The pair is taken as given; nothing checks that one inverts the other.
    pub const fn with_converters(to_lms: XyzToLms, to_xyz: LmsToXyz) -> Self {
        VonKriesAdaptation { to_lms, to_xyz }
    }

    /// Re-render `color` as if captured under `target_white`.
    ///
    /// Equal white points return `color` unchanged, without a conversion
    /// round trip. A zero channel in the source white divides into infinity
    /// or NaN per IEEE-754 and propagates into the result unchecked.
    pub fn adapt(&self, color: CieXyz, source_white: CieXyz, target_white: CieXyz) -> CieXyz {
        if source_white == target_white {
            return color;
        }

        let color = self.to_lms.convert(color);
        let source = self.to_lms.convert(source_white);
        let target = self.to_lms.convert(target_white);

        let adapted = Lms::new(
            color.l * (target.l / source.l),
            color.m * (target.m / source.m),
            color.s * (target.s / source.s),
        );

        self.to_xyz.convert(adapted)
    }
}

impl Default for VonKriesAdaptation {
    fn default() -> Self {
        VonKriesAdaptation {
            to_lms: XyzToLms::default(),
            to_xyz: LmsToXyz::default(),
        }
    }
}
