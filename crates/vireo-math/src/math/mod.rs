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

//! Scalar helpers and vector primitives.
//!
//! Angles handed to this module are in **degrees** unless a function name says
//! otherwise. Wraparound goes through the 16-bit angle domain used by the
//! network protocol (65536 units per turn), so results are quantized to
//! `360 / 65536` degrees.

// --- Fundamental Constants ---

/// Threshold below which a value is treated as zero by [`fzero`].
pub const FLOAT_EPSILON: f32 = 0.01;
/// Tolerance used by [`fequal`].
pub const FLOAT_EQUAL_EPSILON: f32 = 0.001;
/// Bias added to lengths before the near-zero test in the tolerant normalizers.
pub const FLOAT_CMP_EPSILON: f32 = 1.192_092_9e-7;

pub use std::f32::consts::PI;

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Number of units in one full turn of the 16-bit angle domain.
pub const ANGLE_UNITS: f32 = 65536.0;

const UNITS_PER_DEGREE: f32 = ANGLE_UNITS / 360.0;
const DEGREES_PER_UNIT: f32 = 360.0 / ANGLE_UNITS;

// --- Declare Sub-Modules ---

pub mod basis;
pub mod kernel;
pub mod vector2;
pub mod vector3;

// --- Re-export Principal Types ---

pub use self::basis::{Basis, BasisCache};
pub use self::kernel::Kernel;
pub use self::vector2::{dot_product_2d, Vec2};
pub use self::vector3::{cross_product, dot_product, Vec3};

// --- Utility Functions ---

/// Bounds `x` to the `[a, b]` range. The caller guarantees `a <= b`.
///
/// # Examples
///
/// ```
/// use vireo_math::math::clamp;
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-3, -2, 2), -2);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(x: T, a: T, b: T) -> T {
    let lower = if x < a { a } else { x };
    if lower > b {
        b
    } else {
        lower
    }
}

/// Returns `true` if `e` is within [`FLOAT_EPSILON`] of zero.
///
/// This is the guard used before dividing by a length.
///
/// ```
/// use vireo_math::math::fzero;
/// assert!(fzero(0.009));
/// assert!(!fzero(-0.01));
/// ```
#[inline]
pub fn fzero(e: f32) -> bool {
    e.abs() < FLOAT_EPSILON
}

/// Returns `true` if `a` and `b` differ by less than [`FLOAT_EQUAL_EPSILON`].
#[inline]
pub fn fequal(a: f32, b: f32) -> bool {
    (a - b).abs() < FLOAT_EQUAL_EPSILON
}

/// Converts an angle from radians to degrees.
#[inline]
pub fn rad2deg(r: f32) -> f32 {
    r * RAD_TO_DEG
}

/// Converts an angle from degrees to radians.
///
/// ```
/// use vireo_math::math::{deg2rad, PI};
/// assert_eq!(deg2rad(180.0), PI);
/// ```
#[inline]
pub fn deg2rad(d: f32) -> f32 {
    d * DEG_TO_RAD
}

/// Encodes an angle in degrees into the 16-bit angle domain.
///
/// The scaled value is truncated toward zero and then masked to 16 bits, so
/// negative angles wrap the way a two's-complement mask does (`-1°` lands just
/// below a full turn). Out-of-range and NaN inputs follow Rust's saturating
/// float-to-int cast.
///
/// ```
/// use vireo_math::math::angle_to_fixed;
/// assert_eq!(angle_to_fixed(0.0), 0);
/// assert_eq!(angle_to_fixed(90.0), 16384);
/// assert_eq!(angle_to_fixed(360.0), 0);
/// ```
#[inline]
pub fn angle_to_fixed(a: f32) -> u16 {
    ((a * UNITS_PER_DEGREE) as i32 & 0xFFFF) as u16
}

/// Decodes a 16-bit angle back into degrees in `[0, 360)`.
#[inline]
pub fn fixed_to_angle(units: u16) -> f32 {
    DEGREES_PER_UNIT * f32::from(units)
}

/// Wraps an angle in degrees into `[0, 360)` through the 16-bit angle domain.
///
/// ```
/// use vireo_math::math::mod_angles;
/// assert_eq!(mod_angles(0.0), 0.0);
/// assert_eq!(mod_angles(360.0), 0.0);
/// assert_eq!(mod_angles(450.0), 90.0);
/// ```
#[inline]
pub fn mod_angles(a: f32) -> f32 {
    fixed_to_angle(angle_to_fixed(a))
}

/// Wraps an angle in degrees into `[-180, 180)` through the 16-bit angle domain.
///
/// ```
/// use vireo_math::math::normalize_angles;
/// assert_eq!(normalize_angles(90.0), 90.0);
/// assert_eq!(normalize_angles(180.0), -180.0);
/// ```
#[inline]
pub fn normalize_angles(a: f32) -> f32 {
    fixed_to_angle(angle_to_fixed(a + 180.0)) - 180.0
}

/// Signed shortest angular delta from `b` to `a`, in `[-180, 180)`.
#[inline]
pub fn angles_difference(a: f32, b: f32) -> f32 {
    normalize_angles(a - b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(3, 3, 3), 3);
    }

    #[test]
    fn test_fzero_threshold() {
        assert!(fzero(0.0));
        assert!(fzero(-0.0099));
        assert!(!fzero(0.01));
        assert!(!fzero(f32::NAN));
    }

    #[test]
    fn test_fequal() {
        assert!(fequal(1.0, 1.0005));
        assert!(!fequal(1.0, 1.002));
    }

    #[test]
    fn test_degree_radian_conversion() {
        assert_abs_diff_eq!(deg2rad(90.0), PI / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rad2deg(PI), 180.0, epsilon = 1e-4);
        assert_abs_diff_eq!(rad2deg(deg2rad(37.5)), 37.5, epsilon = 1e-4);
    }

    #[test]
    fn test_fixed_angle_encoding() {
        assert_eq!(angle_to_fixed(180.0), 32768);
        assert_eq!(angle_to_fixed(270.0), 49152);
        // -90 truncates to -16384, which masks to 49152.
        assert_eq!(angle_to_fixed(-90.0), 49152);
        assert_eq!(fixed_to_angle(16384), 90.0);
        assert_eq!(fixed_to_angle(0), 0.0);
    }

    #[test]
    fn test_mod_angles_wraps_negative_values() {
        assert_abs_diff_eq!(mod_angles(-1.0), mod_angles(359.0), epsilon = 0.01);
        assert_abs_diff_eq!(mod_angles(-90.0), 270.0, epsilon = 0.01);
        assert_abs_diff_eq!(mod_angles(720.0 + 45.0), 45.0, epsilon = 0.01);
    }

    #[test]
    fn test_mod_angles_truncates_instead_of_flooring() {
        // A sub-unit negative angle truncates to 0 units rather than wrapping.
        assert_eq!(mod_angles(-0.001), 0.0);
        // A sub-unit positive angle is quantized down to 0 as well.
        assert_eq!(mod_angles(0.004), 0.0);
    }

    #[test]
    fn test_normalize_angles_range() {
        let mut a = -1080.0_f32;
        while a <= 1080.0 {
            let n = normalize_angles(a);
            assert!((-180.0..180.0).contains(&n), "{a} normalized to {n}");
            a += 7.3;
        }
    }

    #[test]
    fn test_angles_difference() {
        assert_abs_diff_eq!(angles_difference(190.0, 10.0), -180.0, epsilon = 0.01);
        assert_abs_diff_eq!(angles_difference(10.0, 350.0), 20.0, epsilon = 0.01);
        assert_abs_diff_eq!(angles_difference(350.0, 10.0), -20.0, epsilon = 0.01);
    }
}
