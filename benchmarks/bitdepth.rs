//! Benchmarks raster decoding across sample depths, and texel packing.
use brunch::Bench;

use image_raster::texel::Texel;
use image_raster::{raster, PixelMatrix};

struct Decode {
    bits: u32,
    sz: usize,
}

impl Decode {
    fn name(&self) -> String {
        format!("raster::decode_white_is_zero({} bit, {})", self.bits, self.sz)
    }

    fn prepare(self) -> impl FnMut() {
        let stride = (self.sz * self.bits as usize).div_ceil(8);
        let input = vec![0x5Au8; stride * self.sz];
        let mut pixels = PixelMatrix::new(self.sz, self.sz);

        move || raster::decode_white_is_zero(&input, self.bits, &mut pixels, 0, 0, self.sz, self.sz)
    }
}

fn main() {
    let tests = [
        Decode { bits: 1, sz: 128 },
        Decode { bits: 4, sz: 128 },
        Decode { bits: 8, sz: 128 },
    ];

    let mut benches = brunch::Benches::default();
    benches.extend(tests.map(|decode| {
        let name = decode.name();
        Bench::new(name).run(decode.prepare())
    }));

    benches.extend([Bench::new("texel::pack(Bgr565, 4096)").run(|| {
        let mut acc = 0u32;
        for i in 0..4096u32 {
            let value = i as f32 / 4096.0;
            acc = acc.wrapping_add(Texel::BGR565.pack([value, value, value, 1.0]));
        }
        acc
    })]);

    benches.finish();
}
