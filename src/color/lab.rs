//! The CIE Lab companding pair.
use libm::cbrtf;

// 6**3 / 29**3, the threshold below which the companding is linear.
const EPSILON: f32 = 216.0 / 24389.0;
// 29**3 / 3**3, the slope of the linear segment.
const KAPPA: f32 = 24389.0 / 27.0;

pub(crate) fn lab_from_xyz([x, y, z]: [f32; 3], [xn, yn, zn]: [f32; 3]) -> [f32; 3] {
    let fx = forward(x / xn);
    let fy = forward(y / yn);
    let fz = forward(z / zn);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

pub(crate) fn lab_to_xyz([l, a, b]: [f32; 3], [xn, yn, zn]: [f32; 3]) -> [f32; 3] {
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    [inverse(fx) * xn, inverse(fy) * yn, inverse(fz) * zn]
}

fn forward(t: f32) -> f32 {
    if t > EPSILON {
        cbrtf(t)
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn inverse(f: f32) -> f32 {
    let t = f * f * f;
    if t > EPSILON {
        t
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}
