//! Raster sample decoding and color adaptation primitives for image codecs.
//!
//! Three engines live here, for format codecs and color management to build
//! on:
//!
//! 1. Bit-depth raster decoders, unpacking windows of 1-, 4-, 8- or any
//!    other bit wide grayscale samples into an RGBA [`PixelMatrix`].
//! 2. The packed texel codec, mapping normalized RGBA to fixed-width layouts
//!    such as 5-6-5 or 8-8-8-8 and back.
//! 3. Color space conversion with von Kries chromatic adaptation over CIE
//!    XYZ tristimulus values.
//!
//! Everything is synchronous and pure; the only write any call performs is
//! into the caller's destination matrix. Container parsing, resizing, and
//! encoding belong to other crates.
//!
//! # Usage
//!
//! Decoding a bilevel raster where a set bit is black:
//!
//! ```
//! use image_raster::{raster, PixelMatrix};
//!
//! let mut pixels = PixelMatrix::new(4, 1);
//! raster::decode_white_is_zero_1bit(&[0b0101_0000], &mut pixels, 0, 0, 4, 1);
//!
//! assert_eq!(pixels.pixel(0, 0), [0xff, 0xff, 0xff, 0xff]);
//! assert_eq!(pixels.pixel(1, 0), [0x00, 0x00, 0x00, 0xff]);
//! ```
//!
//! Re-rendering a color under another reference white:
//!
//! ```
//! use image_raster::color::{Illuminant, VonKriesAdaptation};
//!
//! let adaptation = VonKriesAdaptation::default();
//! let d65 = Illuminant::D65.white_point();
//! let d50 = Illuminant::D50.white_point();
//!
//! let adapted = adaptation.adapt(d65, d65, d50);
//! assert!((adapted.x - d50.x).abs() < 1e-4);
//! ```
#![deny(unsafe_code)]

mod bits;
pub mod color;
mod color_matrix;
mod matrix;
pub mod raster;
pub mod texel;


pub use self::color_matrix::RowMatrix;
pub use self::matrix::PixelMatrix;
