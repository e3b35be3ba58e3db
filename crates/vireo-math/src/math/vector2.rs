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

//! Planar vector used by pathfinding and other code that ignores height.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::error::MathError;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 2-dimensional vector with `f32` components.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Vec2 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
}

impl Vec2 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new `Vec2` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculates the length of the vector.
    ///
    /// The square root is taken in double precision and narrowed back.
    #[inline]
    pub fn length(&self) -> f32 {
        f64::from(self.x * self.x + self.y * self.y).sqrt() as f32
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Only an exactly zero length is special-cased, and it yields `Vec2::ZERO`.
    /// Tiny but non-zero vectors are still scaled.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::ZERO;
        }
        let inv = 1.0 / len;
        Self::new(self.x * inv, self.y * inv)
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// Free-function form of [`Vec2::dot`].
#[inline]
pub fn dot_product_2d(a: Vec2, b: Vec2) -> f32 {
    a.dot(b)
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl TryFrom<&[f32]> for Vec2 {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        match *slice {
            [x, y] => Ok(Self { x, y }),
            _ => Err(MathError::SliceLength {
                expected: 2,
                actual: slice.len(),
            }),
        }
    }
}

// --- Operator Overloads ---

impl Add for Vec2 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    /// Divides each component by the scalar. A zero divisor yields IEEE
    /// infinities or NaN.
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;
    /// Allows accessing a vector component by index (`v[0]`, `v[1]`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index out of bounds for Vec2"),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    /// Allows mutably accessing a vector component by index (`v[0] = ...`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Index out of bounds for Vec2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::fequal;

    fn vec2_approx_eq(a: Vec2, b: Vec2) -> bool {
        fequal(a.x, b.x) && fequal(a.y, b.y)
    }

    #[test]
    fn test_vec2_ops() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(3.0 * v1, v1 * 3.0);
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));
        assert_eq!(Vec2::new(4.0, 6.0) / 2.0, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_vec2_division_by_zero_is_unguarded() {
        let v = Vec2::new(1.0, -1.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!((Vec2::ZERO / 0.0).x.is_nan());
    }

    #[test]
    fn test_vec2_length() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec2::ZERO.length(), 0.0);
    }

    #[test]
    fn test_vec2_normalize() {
        let n = Vec2::new(3.0, 4.0).normalize();
        assert!(vec2_approx_eq(n, Vec2::new(0.6, 0.8)));
        assert!(fequal(n.length(), 1.0));

        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);

        // Exact-zero test only: tiny vectors are still scaled to unit length.
        let tiny = Vec2::new(1e-4, 0.0).normalize();
        assert!(vec2_approx_eq(tiny, Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_vec2_dot_is_commutative() {
        let a = Vec2::new(1.5, -2.25);
        let b = Vec2::new(-0.75, 8.0);
        assert_eq!(dot_product_2d(a, b), dot_product_2d(b, a));
        assert_eq!(a.dot(b), 1.5 * -0.75 + -2.25 * 8.0);
    }

    #[test]
    fn test_vec2_from_slice() {
        let v = Vec2::try_from(&[1.0_f32, 2.0][..]).unwrap();
        assert_eq!(v, Vec2::new(1.0, 2.0));
        assert_eq!(
            Vec2::try_from(&[1.0_f32][..]),
            Err(MathError::SliceLength {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_vec2_index() {
        let mut v = Vec2::new(5.0, 6.0);
        assert_eq!(v[0], 5.0);
        assert_eq!(v[1], 6.0);
        v[0] = 10.0;
        assert_eq!(v.x, 10.0);
    }

    #[test]
    #[should_panic]
    fn test_vec2_index_out_of_bounds() {
        let v = Vec2::new(1.0, 2.0);
        let _ = v[2];
    }
}
