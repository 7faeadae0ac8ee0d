// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Container-wide floating-point precision.

use crate::GraphError;
use tensor_core::DType;

/// Width of the floating-point elements a container emits.
///
/// Serialised as the bit width (`32` or `16`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum FloatPrecision {
    /// Standard 32-bit floats.
    #[default]
    Full,
    /// Reduced 16-bit floats.
    Half,
}

impl FloatPrecision {
    /// Returns the bit width.
    pub fn bits(self) -> u32 {
        match self {
            Self::Full => 32,
            Self::Half => 16,
        }
    }

    /// Rewrites `FLOAT` to `FLOAT16` under [`FloatPrecision::Half`].
    ///
    /// Every other element type passes through unchanged.
    pub fn apply(self, dtype: DType) -> DType {
        match (self, dtype) {
            (Self::Half, DType::Float) => DType::Float16,
            _ => dtype,
        }
    }
}

impl TryFrom<u32> for FloatPrecision {
    type Error = GraphError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(Self::Full),
            16 => Ok(Self::Half),
            other => Err(GraphError::InvalidConfiguration(format!(
                "float precision can only be 16 or 32, got {other}"
            ))),
        }
    }
}

impl From<FloatPrecision> for u32 {
    fn from(p: FloatPrecision) -> Self {
        p.bits()
    }
}

impl std::fmt::Display for FloatPrecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
