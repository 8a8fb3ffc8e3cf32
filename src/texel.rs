//! Packed texel layouts and their scalar codec.
//!
//! A packed texel is one fixed-width binary unit holding up to four color
//! channels. Its description splits into [`SampleBits`], the placement of
//! fields within the texel word, and [`SampleParts`], the order in which the
//! red, green, blue and alpha channels fill those fields. Pack and unpack
//! share one bit-shifting implementation over that description; no layout
//! gets its own hand-written codec.
use crate::bits::FromBits;

/// The bit-placement of samples within a texel.
///
/// Texel words are little-endian with the first sample in the low-order
/// bits. So `UInt565` has its first channel in the 5 low-order bits of a u16
/// little endian interpretation of the bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
#[repr(u8)]
pub enum SampleBits {
    /// Three packed integers.
    UInt565,
    /// Four packed integers, a nibble each.
    UInt4x4,
    /// Four packed integers, the last a single flag bit.
    UInt5551,
    /// Three 8-bit integers.
    UInt8x3,
    /// Four 8-bit integers.
    UInt8x4,
    /// Four packed integers, three wide channels and a two-bit rest.
    UInt1010102,
}

/// The order in which color channels fill the fields of a texel.
///
/// Names read from the low-order field upwards, `BgrA` puts blue first and
/// alpha last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SampleParts {
    Rgb,
    Bgr,
    RgbA,
    BgrA,
    ARgb,
    ABgr,
}

/// One unit of a packed texture, a bit placement and a channel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Texel {
    bits: SampleBits,
    parts: SampleParts,
}

/// Error from combining a bit placement with a mismatched channel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TexelError {
    inner: (),
}

impl SampleBits {
    /// Determine the number of channel fields in these samples.
    pub fn channels(self) -> u8 {
        use SampleBits::*;
        match self {
            UInt565 | UInt8x3 => 3,
            UInt4x4 | UInt5551 | UInt8x4 | UInt1010102 => 4,
        }
    }

    /// Determine the number of bytes for texels containing these samples.
    pub fn bytes(self) -> u16 {
        use SampleBits::*;
        match self {
            UInt565 | UInt4x4 | UInt5551 => 2,
            UInt8x3 => 3,
            UInt8x4 | UInt1010102 => 4,
        }
    }

    fn fields(self) -> [FromBits; 4] {
        use SampleBits::*;
        let bits = FromBits::from_range;
        match self {
            UInt565 => [bits(0..5), bits(5..11), bits(11..16), FromBits::NO_BITS],
            UInt4x4 => [bits(0..4), bits(4..8), bits(8..12), bits(12..16)],
            UInt5551 => [bits(0..5), bits(5..10), bits(10..15), bits(15..16)],
            UInt8x3 => [bits(0..8), bits(8..16), bits(16..24), FromBits::NO_BITS],
            UInt8x4 => [bits(0..8), bits(8..16), bits(16..24), bits(24..32)],
            UInt1010102 => [bits(0..10), bits(10..20), bits(20..30), bits(30..32)],
        }
    }
}

impl SampleParts {
    /// Determine the number of channels.
    pub fn channels(self) -> u8 {
        use SampleParts::*;
        match self {
            Rgb | Bgr => 3,
            RgbA | BgrA | ARgb | ABgr => 4,
        }
    }

    /// Whether an alpha channel is among the parts.
    pub fn has_alpha(self) -> bool {
        self.channels() == 4
    }

    /// The canonical r, g, b, a position of each successive field.
    fn positions(self) -> [u8; 4] {
        use SampleParts::*;
        match self {
            Rgb => [0, 1, 2, 0],
            Bgr => [2, 1, 0, 0],
            RgbA => [0, 1, 2, 3],
            BgrA => [2, 1, 0, 3],
            ARgb => [3, 0, 1, 2],
            ABgr => [3, 2, 1, 0],
        }
    }
}

impl Texel {
    /// Blue in the 5 low-order bits, then green and red.
    pub const BGR565: Texel = Texel {
        bits: SampleBits::UInt565,
        parts: SampleParts::Bgr,
    };

    pub const BGRA4444: Texel = Texel {
        bits: SampleBits::UInt4x4,
        parts: SampleParts::BgrA,
    };

    pub const BGRA5551: Texel = Texel {
        bits: SampleBits::UInt5551,
        parts: SampleParts::BgrA,
    };

    pub const RGB888: Texel = Texel {
        bits: SampleBits::UInt8x3,
        parts: SampleParts::Rgb,
    };

    pub const RGBA8888: Texel = Texel {
        bits: SampleBits::UInt8x4,
        parts: SampleParts::RgbA,
    };

    pub const ARGB8888: Texel = Texel {
        bits: SampleBits::UInt8x4,
        parts: SampleParts::ARgb,
    };

    pub const RGBA1010102: Texel = Texel {
        bits: SampleBits::UInt1010102,
        parts: SampleParts::RgbA,
    };

    /// Combine a bit placement with a channel order.
    ///
    /// Fails when the two disagree on the number of channels. The check runs
    /// here so that pack and unpack can not observe a half-described layout.
    pub fn new(bits: SampleBits, parts: SampleParts) -> Result<Self, TexelError> {
        if bits.channels() != parts.channels() {
            return Err(TexelError { inner: () });
        }

        Ok(Texel { bits, parts })
    }

    pub fn bits(self) -> SampleBits {
        self.bits
    }

    pub fn parts(self) -> SampleParts {
        self.parts
    }

    /// The number of bytes of one packed texel.
    pub fn bytes(self) -> u16 {
        self.bits.bytes()
    }

    /// The field of each channel, in canonical r, g, b, a order.
    fn field_bits(self) -> [FromBits; 4] {
        let mut vals = [FromBits::NO_BITS; 4];
        let fields = self.bits.fields();
        let positions = self.parts.positions();

        for idx in 0..self.parts.channels() as usize {
            vals[positions[idx] as usize] = fields[idx];
        }

        vals
    }

    /// Pack normalized red, green, blue, alpha into texel bits.
    ///
    /// Each present channel is scaled to its field width with
    /// round-to-nearest and clamped to the representable range. Channels the
    /// layout has no field for are discarded.
    pub fn pack(self, rgba: [f32; 4]) -> u32 {
        let mut word = 0;

        for (bits, value) in self.field_bits().iter().zip(rgba) {
            if bits.len == 0 {
                continue;
            }

            let max_val = bits.mask();
            // Equivalent to `x.round() as u32` for positive-normal f32.
            let round = |x| (x + 0.5) as u32;
            let raw = round(value * max_val as f32);
            word = bits.insert_word(word, raw.min(max_val));
        }

        word
    }

    /// Unpack texel bits into normalized red, green, blue, alpha.
    ///
    /// Each field is rescaled by its maximum representable value. Absent
    /// color channels read as zero, an absent alpha as fully opaque.
    pub fn unpack(self, word: u32) -> [f32; 4] {
        let mut rgba = [0.0, 0.0, 0.0, 1.0];

        for (bits, value) in self.field_bits().iter().zip(rgba.iter_mut()) {
            if bits.len == 0 {
                continue;
            }

            *value = bits.extract_word(word) as f32 / bits.mask() as f32;
        }

        rgba
    }
}

#[cfg(test)]
mod tests {
    use super::{SampleBits, SampleParts, Texel};

    const LAYOUTS: [Texel; 7] = [
        Texel::BGR565,
        Texel::BGRA4444,
        Texel::BGRA5551,
        Texel::RGB888,
        Texel::RGBA8888,
        Texel::ARGB8888,
        Texel::RGBA1010102,
    ];

    fn assert_round_trip(texel: Texel, rgba: [f32; 4]) {
        let out = texel.unpack(texel.pack(rgba));

        for ((bits, expected), actual) in texel.field_bits().iter().zip(rgba).zip(out) {
            if bits.len == 0 {
                continue;
            }

            let step = 1.0 / bits.mask() as f32;
            assert!(
                (expected - actual).abs() <= step,
                "{:?}: {} and {} differ by more than {}",
                texel,
                expected,
                actual,
                step,
            );
        }
    }

    #[test]
    fn round_trips_within_quantization() {
        let corners = [
            [1.0, 1.0, 1.0, 1.0],
            [0.0, 0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
            [0.25, 0.5, 0.75, 1.0],
        ];

        for texel in LAYOUTS {
            for rgba in corners {
                assert_round_trip(texel, rgba);
            }
        }
    }

    #[test]
    fn bgr565_yellow() {
        // Red and green saturated, blue empty: 0–3f–1f from the top.
        assert_eq!(Texel::BGR565.pack([1.0, 1.0, 0.0, 1.0]), 0xffe0);
        assert_eq!(Texel::BGR565.unpack(0xffe0), [1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn pack_rounds_to_nearest() {
        // 0.5 * 31 = 15.5 rounds up.
        let packed = Texel::BGR565.pack([0.0, 0.0, 0.5, 1.0]);
        assert_eq!(packed, 16);
    }

    #[test]
    fn pack_clamps_out_of_range() {
        assert_eq!(Texel::RGBA8888.pack([2.0, -1.0, 1.5, 1.0]), 0xffff_00ff);
    }

    #[test]
    fn missing_alpha_reads_opaque() {
        assert_eq!(Texel::BGR565.unpack(0)[3], 1.0);
        assert_eq!(Texel::RGB888.unpack(0)[3], 1.0);
    }

    #[test]
    fn alpha_is_discarded_without_a_field() {
        assert_eq!(
            Texel::BGR565.pack([0.0, 0.0, 0.0, 1.0]),
            Texel::BGR565.pack([0.0, 0.0, 0.0, 0.25]),
        );
    }

    #[test]
    fn argb_field_order() {
        let packed = Texel::ARGB8888.pack([1.0, 0.0, 0.0, 1.0]);
        // Alpha in the low byte, red above it.
        assert_eq!(packed, 0x0000_ffff);
    }

    #[test]
    fn channel_count_mismatch_is_rejected() {
        assert!(Texel::new(SampleBits::UInt565, SampleParts::RgbA).is_err());
        assert!(Texel::new(SampleBits::UInt4x4, SampleParts::Bgr).is_err());
        assert!(Texel::new(SampleBits::UInt565, SampleParts::Bgr).is_ok());
    }
}
