//! Decoding bit-packed grayscale rasters into RGBA texels.
//!
//! The sample stream is row-major with samples in big-endian bit order, each
//! row padded up to a whole byte: a row occupies
//! `ceil(width * bits_per_sample / 8)` bytes regardless of where the decoded
//! window lands in the destination. Decoding is a single stateless pass; the
//! functions keep nothing between calls and never touch destination texels
//! outside the requested window.
//!
//! The per-depth entry points funnel into the same routine as the generic
//! ones, with the depth constant-folded, so specialization can not change
//! the decoded output.
use crate::bits::FromBits;
use crate::matrix::PixelMatrix;

/// Decode samples of which zero is white.
///
/// A raw sample inverts to the intensity `(max - raw) * 255 / max` with
/// `max = 2^bits_per_sample - 1` and lands as an opaque gray texel at
/// `(left + x, top + y)`. The window offsets only the destination; the input
/// is always read from its own origin.
///
/// # Panics
///
/// When `bits_per_sample` is 0 or above 32, when `input` is shorter than
/// `height` rows require, or when the window exceeds the destination bounds.
pub fn decode_white_is_zero(
    input: &[u8],
    bits_per_sample: u32,
    pixels: &mut PixelMatrix,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
) {
    decode_samples(
        input,
        bits_per_sample,
        pixels,
        left,
        top,
        width,
        height,
        white_is_zero,
    )
}

/// [`decode_white_is_zero`] fixed to bilevel samples.
pub fn decode_white_is_zero_1bit(
    input: &[u8],
    pixels: &mut PixelMatrix,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
) {
    decode_samples(input, 1, pixels, left, top, width, height, white_is_zero)
}

/// [`decode_white_is_zero`] fixed to nibble samples.
pub fn decode_white_is_zero_4bit(
    input: &[u8],
    pixels: &mut PixelMatrix,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
) {
    decode_samples(input, 4, pixels, left, top, width, height, white_is_zero)
}

/// [`decode_white_is_zero`] fixed to byte samples.
pub fn decode_white_is_zero_8bit(
    input: &[u8],
    pixels: &mut PixelMatrix,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
) {
    decode_samples(input, 8, pixels, left, top, width, height, white_is_zero)
}

/// Decode samples of which zero is black.
///
/// The dual of [`decode_white_is_zero`]: intensity `raw * 255 / max`, with
/// identical stream geometry, windowing, and failure behavior.
pub fn decode_black_is_zero(
    input: &[u8],
    bits_per_sample: u32,
    pixels: &mut PixelMatrix,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
) {
    decode_samples(
        input,
        bits_per_sample,
        pixels,
        left,
        top,
        width,
        height,
        black_is_zero,
    )
}

/// [`decode_black_is_zero`] fixed to bilevel samples.
pub fn decode_black_is_zero_1bit(
    input: &[u8],
    pixels: &mut PixelMatrix,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
) {
    decode_samples(input, 1, pixels, left, top, width, height, black_is_zero)
}

/// [`decode_black_is_zero`] fixed to nibble samples.
pub fn decode_black_is_zero_4bit(
    input: &[u8],
    pixels: &mut PixelMatrix,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
) {
    decode_samples(input, 4, pixels, left, top, width, height, black_is_zero)
}

/// [`decode_black_is_zero`] fixed to byte samples.
pub fn decode_black_is_zero_8bit(
    input: &[u8],
    pixels: &mut PixelMatrix,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
) {
    decode_samples(input, 8, pixels, left, top, width, height, black_is_zero)
}

fn white_is_zero(raw: u32, max: u32) -> u8 {
    ((max - raw) as u64 * 255 / max as u64) as u8
}

fn black_is_zero(raw: u32, max: u32) -> u8 {
    (raw as u64 * 255 / max as u64) as u8
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
fn decode_samples(
    input: &[u8],
    bits_per_sample: u32,
    pixels: &mut PixelMatrix,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
    shade: impl Fn(u32, u32) -> u8,
) {
    assert!(
        matches!(bits_per_sample, 1..=32),
        "Bits per sample out of range: {}",
        bits_per_sample,
    );

    let bits = bits_per_sample as usize;
    let stride = (width * bits).div_ceil(8);
    let max = FromBits::from_range(0..bits).mask();

    for y in 0..height {
        let row = &input[y * stride..][..stride];
        let out = &mut pixels.row_mut(top + y)[left..left + width];

        for (x, texel) in out.iter_mut().enumerate() {
            let sample = FromBits::from_range(x * bits..(x + 1) * bits).extract_be(row);
            let value = shade(sample, max);
            *texel = [value, value, value, 0xff];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_zero_keeps_byte_samples() {
        let mut pixels = PixelMatrix::new(3, 1);
        decode_black_is_zero_8bit(&[0, 128, 255], &mut pixels, 0, 0, 3, 1);

        assert_eq!(pixels.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(pixels.pixel(1, 0), [128, 128, 128, 255]);
        assert_eq!(pixels.pixel(2, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn black_is_zero_bilevel() {
        let mut pixels = PixelMatrix::new(4, 1);
        decode_black_is_zero_1bit(&[0b0101_0000], &mut pixels, 0, 0, 4, 1);

        assert_eq!(pixels.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(pixels.pixel(1, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn intensity_scaling_of_uneven_depths() {
        // 2-bit samples 0..=3 in one byte.
        let mut pixels = PixelMatrix::new(4, 1);
        decode_white_is_zero(&[0b00_01_10_11], 2, &mut pixels, 0, 0, 4, 1);

        assert_eq!(pixels.pixel(0, 0), [255, 255, 255, 255]);
        assert_eq!(pixels.pixel(1, 0), [170, 170, 170, 255]);
        assert_eq!(pixels.pixel(2, 0), [85, 85, 85, 255]);
        assert_eq!(pixels.pixel(3, 0), [0, 0, 0, 255]);
    }

    #[test]
    #[should_panic]
    fn zero_bits_per_sample_is_rejected() {
        let mut pixels = PixelMatrix::new(1, 1);
        decode_white_is_zero(&[0], 0, &mut pixels, 0, 0, 1, 1);
    }
}
