// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Interchangeable implementations of the vector hot paths.
//!
//! The scalar kernel is the reference. The SIMD kernel is compiled in with the
//! `simd` feature and must agree with the scalar results to within
//! [`FLOAT_EQUAL_EPSILON`](super::FLOAT_EQUAL_EPSILON).

use std::fmt;

use super::Vec3;

/// A strategy for the normalization and angle trigonometry used by [`Vec3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    /// Plain `f32` arithmetic, one component at a time.
    Scalar,
    /// Four-lane `wide::f32x4` arithmetic.
    #[cfg(feature = "simd")]
    Simd,
}

#[cfg(feature = "simd")]
const PREFERRED: Kernel = Kernel::Simd;
#[cfg(not(feature = "simd"))]
const PREFERRED: Kernel = Kernel::Scalar;

#[cfg(feature = "simd")]
const AVAILABLE: &[Kernel] = &[Kernel::Scalar, Kernel::Simd];
#[cfg(not(feature = "simd"))]
const AVAILABLE: &[Kernel] = &[Kernel::Scalar];

impl Kernel {
    /// The kernel [`Vec3`] methods use: SIMD when compiled in, scalar otherwise.
    #[inline]
    pub const fn preferred() -> Self {
        PREFERRED
    }

    /// Every kernel compiled into this build, scalar first.
    #[inline]
    pub fn available() -> &'static [Kernel] {
        AVAILABLE
    }

    /// A short lowercase name, matching the configuration spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Kernel::Scalar => "scalar",
            #[cfg(feature = "simd")]
            Kernel::Simd => "simd",
        }
    }

    /// Tolerant normalization with a `(0, 0, 1)` fallback. See [`Vec3::normalize`].
    #[inline]
    pub fn normalize(self, v: Vec3) -> Vec3 {
        match self {
            Kernel::Scalar => scalar::normalize(v),
            #[cfg(feature = "simd")]
            Kernel::Simd => simd::normalize(v),
        }
    }

    /// Tolerant planar normalization with a `(0, 1, 0)` fallback. See
    /// [`Vec3::normalize_2d`].
    #[inline]
    pub fn normalize_2d(self, v: Vec3) -> Vec3 {
        match self {
            Kernel::Scalar => scalar::normalize_2d(v),
            #[cfg(feature = "simd")]
            Kernel::Simd => simd::normalize_2d(v),
        }
    }

    /// Sines and cosines of an angle triple given in degrees.
    #[inline]
    pub fn sin_cos(self, degrees: Vec3) -> (Vec3, Vec3) {
        match self {
            Kernel::Scalar => scalar::sin_cos(degrees),
            #[cfg(feature = "simd")]
            Kernel::Simd => simd::sin_cos(degrees),
        }
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::preferred()
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod scalar {
    use crate::math::{deg2rad, fzero, Vec3, FLOAT_CMP_EPSILON};

    pub(super) fn normalize(v: Vec3) -> Vec3 {
        let len = v.length() + FLOAT_CMP_EPSILON;
        if fzero(len) {
            return Vec3::Z;
        }
        let inv = 1.0 / len;
        Vec3::new(v.x * inv, v.y * inv, v.z * inv)
    }

    pub(super) fn normalize_2d(v: Vec3) -> Vec3 {
        let len = v.length_2d() + FLOAT_CMP_EPSILON;
        if fzero(len) {
            return Vec3::Y;
        }
        let inv = 1.0 / len;
        Vec3::new(v.x * inv, v.y * inv, 0.0)
    }

    pub(super) fn sin_cos(degrees: Vec3) -> (Vec3, Vec3) {
        let r = Vec3::new(deg2rad(degrees.x), deg2rad(degrees.y), deg2rad(degrees.z));
        (
            Vec3::new(r.x.sin(), r.y.sin(), r.z.sin()),
            Vec3::new(r.x.cos(), r.y.cos(), r.z.cos()),
        )
    }
}

#[cfg(feature = "simd")]
mod simd {
    use wide::f32x4;

    use crate::math::{fzero, Vec3, DEG_TO_RAD, FLOAT_CMP_EPSILON};

    pub(super) fn normalize(v: Vec3) -> Vec3 {
        scale_to_unit(f32x4::from([v.x, v.y, v.z, 0.0]), Vec3::Z)
    }

    pub(super) fn normalize_2d(v: Vec3) -> Vec3 {
        scale_to_unit(f32x4::from([v.x, v.y, 0.0, 0.0]), Vec3::Y)
    }

    // Sums the squares in the same order as the scalar path so both kernels
    // see the same length.
    fn scale_to_unit(lanes: f32x4, fallback: Vec3) -> Vec3 {
        let [x, y, z, _] = (lanes * lanes).to_array();
        let len = f64::from(x + y + z).sqrt() as f32 + FLOAT_CMP_EPSILON;
        if fzero(len) {
            return fallback;
        }
        let [x, y, z, _] = (lanes * f32x4::splat(1.0 / len)).to_array();
        Vec3::new(x, y, z)
    }

    pub(super) fn sin_cos(degrees: Vec3) -> (Vec3, Vec3) {
        let radians =
            f32x4::from([degrees.x, degrees.y, degrees.z, 0.0]) * f32x4::splat(DEG_TO_RAD);
        let (s, c) = radians.sin_cos();
        let [sx, sy, sz, _] = s.to_array();
        let [cx, cy, cz, _] = c.to_array();
        (Vec3::new(sx, sy, sz), Vec3::new(cx, cy, cz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{fequal, FLOAT_CMP_EPSILON};

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        fequal(a.x, b.x) && fequal(a.y, b.y) && fequal(a.z, b.z)
    }

    const SAMPLES: &[Vec3] = &[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(3.0, 4.0, 12.0),
        Vec3::new(-250.0, 0.125, 77.0),
        Vec3::new(0.004, -0.003, 0.002),
        Vec3::new(1.0e4, -2.0e4, 3.0e3),
        Vec3::new(-45.0, 270.0, 180.0),
    ];

    #[test]
    fn test_preferred_is_available() {
        assert!(Kernel::available().contains(&Kernel::preferred()));
        assert_eq!(Kernel::available()[0], Kernel::Scalar);
        assert_eq!(Kernel::default(), Kernel::preferred());
    }

    #[test]
    fn test_scalar_names() {
        assert_eq!(Kernel::Scalar.name(), "scalar");
        assert_eq!(Kernel::Scalar.to_string(), "scalar");
    }

    #[test]
    fn test_scalar_normalize_applies_bias() {
        let n = Kernel::Scalar.normalize(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(n.x, 1.0 / (1.0 + FLOAT_CMP_EPSILON));
        assert!(n.x < 1.0);
        assert_eq!(n.y, 0.0);
    }

    #[test]
    fn test_scalar_sin_cos() {
        let (s, c) = Kernel::Scalar.sin_cos(Vec3::new(90.0, 0.0, 180.0));
        assert!(vec3_approx_eq(s, Vec3::new(1.0, 0.0, 0.0)));
        assert!(vec3_approx_eq(c, Vec3::new(0.0, 1.0, -1.0)));
    }

    #[test]
    fn test_every_kernel_matches_scalar() {
        for &kernel in Kernel::available() {
            for &v in SAMPLES {
                assert!(
                    vec3_approx_eq(kernel.normalize(v), Kernel::Scalar.normalize(v)),
                    "{kernel} normalize diverged for {v:?}"
                );
                assert!(
                    vec3_approx_eq(kernel.normalize_2d(v), Kernel::Scalar.normalize_2d(v)),
                    "{kernel} normalize_2d diverged for {v:?}"
                );
                let (s, c) = kernel.sin_cos(v);
                let (rs, rc) = Kernel::Scalar.sin_cos(v);
                assert!(vec3_approx_eq(s, rs), "{kernel} sin diverged for {v:?}");
                assert!(vec3_approx_eq(c, rc), "{kernel} cos diverged for {v:?}");
            }
        }
    }

    #[cfg(feature = "simd")]
    #[test]
    fn test_simd_fallback_axes() {
        assert_eq!(Kernel::Simd.normalize(Vec3::ZERO), Vec3::Z);
        assert_eq!(Kernel::Simd.normalize_2d(Vec3::new(0.0, 0.0, 5.0)), Vec3::Y);
        assert_eq!(Kernel::Simd.name(), "simd");
    }
}
