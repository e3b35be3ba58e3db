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

//! The 3-component vector used for positions, directions and Euler angles.
//!
//! `Vec3` doubles as a pitch/yaw/roll triple in degrees (`x`, `y`, `z`); the
//! angle methods ([`Vec3::clamp_angles`], [`Vec3::angle_vectors`] and friends)
//! read it that way, the rest treat it as a point or direction. The layout is
//! three contiguous `f32` with no padding, so slices of `Vec3` can be handed to
//! code that expects a flat float buffer via [`Vec3::flatten`].

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::basis::{forward_axis, right_axis, up_axis};
use super::{
    deg2rad, fzero, normalize_angles, rad2deg, Basis, Kernel, Vec2, FLOAT_EQUAL_EPSILON,
};
use crate::error::MathError;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 3-dimensional vector with `f32` components.
///
/// Equality is exact and component-wise. Use [`fequal`](super::fequal) on the
/// components when a tolerance is needed.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Vec3 {
    /// The x component, or pitch in degrees.
    pub x: f32,
    /// The y component, or yaw in degrees.
    pub y: f32,
    /// The z component, or roll in degrees.
    pub z: f32,
}

impl Vec3 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new `Vec3` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    // --- Flat buffer access ---

    /// Returns the components as an owned array.
    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Writes the components into `out` in `x, y, z` order.
    #[inline]
    pub fn copy_to_array(&self, out: &mut [f32; 3]) {
        *out = self.to_array();
    }

    /// Borrows the vector as a `[x, y, z]` array.
    #[inline]
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    /// Mutably borrows the vector as a `[x, y, z]` array.
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 3] {
        bytemuck::cast_mut(self)
    }

    /// Borrows the vector as a three-element slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.as_array()
    }

    /// Views a slice of vectors as one contiguous float buffer.
    #[inline]
    pub fn flatten(vectors: &[Vec3]) -> &[f32] {
        bytemuck::cast_slice(vectors)
    }

    /// Mutable counterpart of [`Vec3::flatten`].
    #[inline]
    pub fn flatten_mut(vectors: &mut [Vec3]) -> &mut [f32] {
        bytemuck::cast_slice_mut(vectors)
    }

    // --- Lengths and distances ---

    /// Calculates the squared length. Prefer this when only comparing lengths.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Calculates the length. The square root is taken in double precision.
    #[inline]
    pub fn length(&self) -> f32 {
        f64::from(self.length_squared()).sqrt() as f32
    }

    /// Calculates the length of the `(x, y)` projection, ignoring `z`.
    #[inline]
    pub fn length_2d(&self) -> f32 {
        f64::from(self.x * self.x + self.y * self.y).sqrt() as f32
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(&self, rhs: Self) -> f32 {
        (*self - rhs).length()
    }

    /// Distance between two points projected onto the `xy` plane.
    #[inline]
    pub fn distance_2d(&self, rhs: Self) -> f32 {
        (*self - rhs).length_2d()
    }

    /// Squared distance between two points.
    #[inline]
    pub fn distance_squared(&self, rhs: Self) -> f32 {
        (*self - rhs).length_squared()
    }

    // --- Normalization ---

    /// Returns the unit vector, or `(0, 0, 1)` when the length is exactly zero.
    ///
    /// Unlike [`Vec3::normalize`] this adds no bias and only special-cases an
    /// exact zero, so very short vectors are still scaled to unit length.
    pub fn normalize_exact(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::Z;
        }
        let inv = 1.0 / len;
        Self::new(self.x * inv, self.y * inv, self.z * inv)
    }

    /// Returns the unit vector, or `(0, 0, 1)` when the vector is nearly zero.
    ///
    /// [`FLOAT_CMP_EPSILON`](super::FLOAT_CMP_EPSILON) is added to the length
    /// before it is tested with [`fzero`] and inverted, so any vector shorter
    /// than about `0.01` takes the fallback and results are a hair under unit
    /// length.
    #[inline]
    pub fn normalize(&self) -> Self {
        Kernel::preferred().normalize(*self)
    }

    /// Normalizes the `(x, y)` projection with the same policy as
    /// [`Vec3::normalize`]. The result has `z = 0`; the fallback is `(0, 1, 0)`.
    #[inline]
    pub fn normalize_2d(&self) -> Self {
        Kernel::preferred().normalize_2d(*self)
    }

    // --- Projection and state ---

    /// Drops `z`, returning a planar vector.
    #[inline]
    pub fn make_2d(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns a copy with `z` set to zero.
    #[inline]
    pub fn get_2d(&self) -> Self {
        Self::new(self.x, self.y, 0.0)
    }

    /// Returns `true` if every component is individually near zero.
    ///
    /// This is a per-component test, not a magnitude test: `(0.009, 0.009,
    /// 0.009)` is empty although its length exceeds `0.01`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        fzero(self.x) && fzero(self.y) && fzero(self.z)
    }

    /// Sets all components to zero.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }

    /// Divides by `rhs + FLOAT_EQUAL_EPSILON`.
    ///
    /// This is the biased division older gameplay code used for in-place
    /// scaling; it keeps small divisors finite but never divides exactly.
    #[inline]
    pub fn div_biased(self, rhs: f32) -> Self {
        self * (1.0 / (rhs + FLOAT_EQUAL_EPSILON))
    }

    // --- Angles ---

    /// Treats the vector as pitch/yaw angles: wraps `x` and `y` into
    /// `[-180, 180)` and discards roll.
    pub fn clamp_angles(&mut self) -> &mut Self {
        self.x = normalize_angles(self.x);
        self.y = normalize_angles(self.y);
        self.z = 0.0;
        self
    }

    /// Elevation of the direction, or 0 when `z` is near zero.
    ///
    /// Note: the `atan2` result is already in radians and is passed through
    /// [`deg2rad`] once more, so the value is `elevation_radians * PI / 180`.
    /// Callers depend on this scaling; use [`Vec3::angles`] for the elevation
    /// in degrees.
    pub fn pitch(&self) -> f32 {
        if fzero(self.z) {
            return 0.0;
        }
        deg2rad(self.z.atan2(self.length_2d()))
    }

    /// Heading of the direction in degrees, or 0 when `x` and `y` are near zero.
    pub fn yaw(&self) -> f32 {
        if fzero(self.x) && fzero(self.y) {
            return 0.0;
        }
        rad2deg(self.y.atan2(self.x))
    }

    /// Converts a direction into `(pitch, yaw, 0)` in degrees.
    ///
    /// Pitch is positive above the horizon. A vertical direction (`x` and `y`
    /// both near zero) returns a pitch of `90` if `z > 0` and `270` otherwise,
    /// with zero yaw.
    pub fn angles(&self) -> Self {
        if fzero(self.x) && fzero(self.y) {
            return Self::new(if self.z > 0.0 { 90.0 } else { 270.0 }, 0.0, 0.0);
        }
        Self::new(
            rad2deg(self.z.atan2(self.length_2d())),
            rad2deg(self.y.atan2(self.x)),
            0.0,
        )
    }

    /// Treats the vector as `(pitch, yaw, roll)` in degrees and writes the
    /// requested frame axes.
    ///
    /// All nine sines and cosines are computed whatever is requested; only the
    /// outputs passed as `Some` are written.
    pub fn angle_vectors(
        &self,
        forward: Option<&mut Vec3>,
        right: Option<&mut Vec3>,
        up: Option<&mut Vec3>,
    ) {
        let (s, c) = Kernel::preferred().sin_cos(*self);

        if let Some(forward) = forward {
            *forward = forward_axis(s, c);
        }
        if let Some(right) = right {
            *right = right_axis(s, c);
        }
        if let Some(up) = up {
            *up = up_axis(s, c);
        }
    }

    /// All three frame axes for these angles.
    #[inline]
    pub fn basis(&self) -> Basis {
        Basis::from_angles(*self)
    }

    /// The forward axis for these angles.
    pub fn forward(&self) -> Self {
        let mut out = Self::ZERO;
        self.angle_vectors(Some(&mut out), None, None);
        out
    }

    /// The right axis for these angles.
    pub fn right(&self) -> Self {
        let mut out = Self::ZERO;
        self.angle_vectors(None, Some(&mut out), None);
        out
    }

    /// The up axis for these angles.
    pub fn upward(&self) -> Self {
        let mut out = Self::ZERO;
        self.angle_vectors(None, None, Some(&mut out));
        out
    }

    // --- Products ---

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector and another.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

/// Free-function form of [`Vec3::dot`].
#[inline]
pub fn dot_product(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Free-function form of [`Vec3::cross`].
#[inline]
pub fn cross_product(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

// --- Conversions ---

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        let array: [f32; 3] = slice.try_into().map_err(|_| MathError::SliceLength {
            expected: 3,
            actual: slice.len(),
        })?;
        Ok(array.into())
    }
}

// --- Operator Overloads ---

impl Neg for Vec3 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<f32> for Vec3 {
    type Output = Self;
    /// Adds the scalar to every component.
    #[inline]
    fn add(self, rhs: f32) -> Self::Output {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Sub<f32> for Vec3 {
    type Output = Self;
    /// Subtracts the scalar from every component.
    #[inline]
    fn sub(self, rhs: f32) -> Self::Output {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    /// Divides each component by the scalar, unguarded.
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    /// Divides in place, unguarded. See [`Vec3::div_biased`] for the biased form.
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    /// Allows accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Vec3"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    /// Allows mutably accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for Vec3"),
        }
    }
}
