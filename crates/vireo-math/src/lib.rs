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

//! # Vireo Math
//!
//! Vector and scalar-angle primitives shared by the engine client: planar and
//! spatial vectors, degree/radian helpers, 16-bit angle wraparound, and the
//! forward/right/up basis derived from pitch/yaw/roll angles.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod math;

pub use config::{KernelPreference, MathConfig};
pub use error::MathError;
pub use math::{Basis, BasisCache, Kernel, Vec2, Vec3};
