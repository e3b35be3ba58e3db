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

//! Runtime selection of the vector kernel.
//!
//! The kernel is normally fixed at build time by the `simd` feature. Tools and
//! tests that want to pin a specific path can describe it in a [`MathConfig`],
//! either deserialized from a settings file or read from the
//! `VIREO_MATH_KERNEL` environment variable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::math::Kernel;

/// Which kernel a caller asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelPreference {
    /// Use whatever [`Kernel::preferred`] returns.
    #[default]
    Auto,
    /// Always use the scalar reference path.
    Scalar,
    /// Use the SIMD path; resolving fails if it was not compiled in.
    Simd,
}

impl FromStr for KernelPreference {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "scalar" => Ok(Self::Scalar),
            "simd" => Ok(Self::Simd),
            other => Err(MathError::UnknownKernel(other.to_string())),
        }
    }
}

impl fmt::Display for KernelPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Scalar => "scalar",
            Self::Simd => "simd",
        })
    }
}

/// Settings for the math layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    /// The requested kernel.
    pub kernel: KernelPreference,
}

impl MathConfig {
    /// Environment variable read by [`MathConfig::from_env`].
    pub const KERNEL_ENV_VAR: &'static str = "VIREO_MATH_KERNEL";

    /// Builds a config from the process environment.
    pub fn from_env() -> Result<Self, MathError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MathError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kernel = match lookup(Self::KERNEL_ENV_VAR) {
            Some(value) => value.parse()?,
            None => KernelPreference::default(),
        };
        Ok(Self { kernel })
    }

    /// Turns the preference into a concrete kernel.
    pub fn resolve_kernel(&self) -> Result<Kernel, MathError> {
        let kernel = match self.kernel {
            KernelPreference::Auto => Kernel::preferred(),
            KernelPreference::Scalar => Kernel::Scalar,
            #[cfg(feature = "simd")]
            KernelPreference::Simd => Kernel::Simd,
            #[cfg(not(feature = "simd"))]
            KernelPreference::Simd => {
                log::warn!("SIMD math kernel requested but this build has no `simd` feature");
                return Err(MathError::KernelUnavailable("simd"));
            }
        };
        log::debug!("Math kernel resolved to '{kernel}' (requested '{}')", self.kernel);
        Ok(kernel)
    }
}
