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

//! Local coordinate frames derived from pitch/yaw/roll angles.
//!
//! Angles are a [`Vec3`] in degrees with `x` = pitch, `y` = yaw, `z` = roll.
//! The rotation composes yaw, then pitch, then roll, in the engine's
//! right-handed world where `+z` is up. At zero angles the frame is
//! `forward = +x`, `right = -y`, `up = +z`.

use serde::{Deserialize, Serialize};

use super::{Kernel, Vec3};

/// The forward, right and up axes of an orientation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    /// The direction the orientation faces.
    pub forward: Vec3,
    /// The direction to the right of `forward`.
    pub right: Vec3,
    /// The direction above `forward`.
    pub up: Vec3,
}

impl Basis {
    /// Computes the frame for `angles` (degrees) with the preferred kernel.
    #[inline]
    pub fn from_angles(angles: Vec3) -> Self {
        Self::from_angles_with(Kernel::preferred(), angles)
    }

    /// Computes the frame for `angles` (degrees) with an explicit kernel.
    pub fn from_angles_with(kernel: Kernel, angles: Vec3) -> Self {
        let (s, c) = kernel.sin_cos(angles);
        Self {
            forward: forward_axis(s, c),
            right: right_axis(s, c),
            up: up_axis(s, c),
        }
    }
}

// `s` and `c` hold the sine and cosine of (pitch, yaw, roll) in x, y, z.

#[inline]
pub(crate) fn forward_axis(s: Vec3, c: Vec3) -> Vec3 {
    Vec3::new(c.x * c.y, c.x * s.y, -s.x)
}

#[inline]
pub(crate) fn right_axis(s: Vec3, c: Vec3) -> Vec3 {
    Vec3::new(
        -s.z * s.x * c.y + c.z * s.y,
        -s.z * s.x * s.y - c.z * c.y,
        -s.z * c.x,
    )
}

#[inline]
pub(crate) fn up_axis(s: Vec3, c: Vec3) -> Vec3 {
    Vec3::new(
        c.z * s.x * c.y + s.z * s.y,
        c.z * s.x * s.y - s.z * c.y,
        c.z * c.x,
    )
}

/// Remembers the frame of the most recently requested angles.
///
/// Owned by its caller, so each thread or entity keeps its own. A lookup with
/// the same angles (compared exactly) returns the stored frame; anything else
/// recomputes and replaces it.
///
/// ```
/// use vireo_math::{BasisCache, Vec3};
///
/// let mut cache = BasisCache::new();
/// let view = Vec3::new(0.0, 90.0, 0.0);
/// let forward = cache.get(view).forward;
/// assert_eq!(cache.get(view).forward, forward);
/// assert_eq!(cache.misses(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BasisCache {
    kernel: Kernel,
    entry: Option<(Vec3, Basis)>,
    misses: u64,
}

impl BasisCache {
    /// Creates an empty cache backed by the preferred kernel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache backed by `kernel`.
    pub fn with_kernel(kernel: Kernel) -> Self {
        Self {
            kernel,
            entry: None,
            misses: 0,
        }
    }

    /// Returns the frame for `angles`, recomputing it only if the angles changed.
    pub fn get(&mut self, angles: Vec3) -> &Basis {
        let entry = match self.entry.take() {
            Some(hit) if hit.0 == angles => hit,
            _ => {
                self.misses += 1;
                (angles, Basis::from_angles_with(self.kernel, angles))
            }
        };
        &self.entry.insert(entry).1
    }

    /// Number of lookups that had to recompute the frame.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops the stored frame.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-5);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-5);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn test_identity_frame() {
        let basis = Basis::from_angles_with(Kernel::Scalar, Vec3::ZERO);
        assert_eq!(basis.forward, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(basis.right, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(basis.up, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let basis = Basis::from_angles(Vec3::new(0.0, 90.0, 0.0));
        assert_vec3_near(basis.forward, Vec3::new(0.0, 1.0, 0.0));
        assert_vec3_near(basis.right, Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_near(basis.up, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_positive_pitch_looks_down() {
        let basis = Basis::from_angles(Vec3::new(90.0, 0.0, 0.0));
        assert_vec3_near(basis.forward, Vec3::new(0.0, 0.0, -1.0));
        assert_vec3_near(basis.up, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_roll_tilts_right_and_up() {
        let basis = Basis::from_angles(Vec3::new(0.0, 0.0, 90.0));
        assert_vec3_near(basis.forward, Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_near(basis.right, Vec3::new(0.0, 0.0, -1.0));
        assert_vec3_near(basis.up, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_frame_is_orthonormal() {
        let basis = Basis::from_angles(Vec3::new(-33.0, 127.5, 12.0));
        for axis in [basis.forward, basis.right, basis.up] {
            assert_abs_diff_eq!(axis.length(), 1.0, epsilon = 1e-5);
        }
        assert_abs_diff_eq!(basis.forward.dot(basis.right), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(basis.forward.dot(basis.up), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(basis.right.dot(basis.up), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cache_reuses_matching_angles() {
        let mut cache = BasisCache::with_kernel(Kernel::Scalar);
        let a = Vec3::new(10.0, 20.0, 30.0);
        let b = Vec3::new(10.0, 20.0, 31.0);

        let first = *cache.get(a);
        assert_eq!(*cache.get(a), first);
        assert_eq!(cache.misses(), 1);

        assert_ne!(*cache.get(b), first);
        assert_eq!(cache.misses(), 2);

        cache.clear();
        assert_eq!(*cache.get(b), Basis::from_angles_with(Kernel::Scalar, b));
        assert_eq!(cache.misses(), 3);
    }
}
