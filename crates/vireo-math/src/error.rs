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

//! Error types for the fallible edges of the crate.
//!
//! The numeric operations themselves are total; only conversions from
//! untyped buffers and kernel configuration can fail.

use thiserror::Error;

/// An error raised while converting foreign data or resolving configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A float slice did not have the number of components the target type needs.
    #[error("expected a slice of {expected} floats, got {actual}")]
    SliceLength {
        /// The number of components the target type stores.
        expected: usize,
        /// The length of the slice that was supplied.
        actual: usize,
    },

    /// A kernel name could not be parsed.
    #[error("unknown math kernel '{0}' (expected auto, scalar or simd)")]
    UnknownKernel(String),

    /// The requested kernel was not compiled into this build.
    #[error("math kernel '{0}' is not available in this build")]
    KernelUnavailable(&'static str),
}
