// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Constant tensor encoding.
//!
//! [`make_tensor`] turns a name, element type, concrete dims and a flat
//! content buffer into a [`TensorProto`], storing the values in the typed
//! field ONNX prescribes for the element type:
//!
//! ```text
//! FLOAT                        → float_data
//! FLOAT16, BFLOAT16            → int32_data (bit patterns)
//! INT8/16/32, UINT8/16, BOOL   → int32_data
//! INT64                        → int64_data
//! UINT32, UINT64               → uint64_data
//! DOUBLE                       → double_data
//! STRING                       → string_data
//! raw bytes (any fixed width)  → raw_data
//! ```

use crate::{DType, TensorError};
use half::{bf16, f16};

/// Flattened (row-major) tensor values handed to [`make_tensor`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TensorData {
    /// Single-precision values; also accepted for `FLOAT16`, `BFLOAT16` and `DOUBLE`.
    Float(Vec<f32>),
    /// Double-precision values; also accepted for the narrower float types.
    Double(Vec<f64>),
    /// Integer values for any integer element type (range-checked).
    Int(Vec<i64>),
    /// Boolean values.
    Bool(Vec<bool>),
    /// UTF-8 strings.
    String(Vec<String>),
    /// Pre-encoded little-endian bytes.
    Raw(Vec<u8>),
}

impl TensorData {
    /// Returns the number of values (bytes for [`TensorData::Raw`]).
    pub fn len(&self) -> usize {
        match self {
            Self::Float(v) => v.len(),
            Self::Double(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Bool(v) => v.len(),
            Self::String(v) => v.len(),
            Self::Raw(v) => v.len(),
        }
    }

    /// Returns `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Int(_) => "integer",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Raw(_) => "raw",
        }
    }
}

impl From<Vec<f32>> for TensorData {
    fn from(v: Vec<f32>) -> Self {
        Self::Float(v)
    }
}

impl From<&[f32]> for TensorData {
    fn from(v: &[f32]) -> Self {
        Self::Float(v.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for TensorData {
    fn from(v: [f32; N]) -> Self {
        Self::Float(v.to_vec())
    }
}

impl From<Vec<f64>> for TensorData {
    fn from(v: Vec<f64>) -> Self {
        Self::Double(v)
    }
}

impl From<Vec<i64>> for TensorData {
    fn from(v: Vec<i64>) -> Self {
        Self::Int(v)
    }
}

impl From<Vec<i32>> for TensorData {
    fn from(v: Vec<i32>) -> Self {
        Self::Int(v.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<bool>> for TensorData {
    fn from(v: Vec<bool>) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<String>> for TensorData {
    fn from(v: Vec<String>) -> Self {
        Self::String(v)
    }
}

impl From<Vec<&str>> for TensorData {
    fn from(v: Vec<&str>) -> Self {
        Self::String(v.into_iter().map(str::to_string).collect())
    }
}

/// A named constant tensor in ONNX layout.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct TensorProto {
    pub name: String,
    /// `TensorProto.DataType` code.
    pub data_type: i32,
    pub dims: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub float_data: Vec<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub int32_data: Vec<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub int64_data: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uint64_data: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub double_data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub string_data: Vec<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub raw_data: Vec<u8>,
}

impl TensorProto {
    /// Returns the element type, if the code is a known one.
    pub fn dtype(&self) -> Option<DType> {
        DType::from_code(self.data_type)
    }

    /// Returns the number of elements implied by `dims`, or `None` if a dim
    /// is negative or the count overflows.
    pub fn num_elements(&self) -> Option<usize> {
        self.dims.iter().try_fold(1usize, |acc, &d| {
            acc.checked_mul(usize::try_from(d).ok()?)
        })
    }

    /// Decodes the stored values of a floating-point tensor as `f32`.
    ///
    /// Returns `None` for non-float tensors and for tensors stored as raw bytes.
    pub fn float_values(&self) -> Option<Vec<f32>> {
        if !self.raw_data.is_empty() {
            return None;
        }
        match self.dtype()? {
            DType::Float => Some(self.float_data.clone()),
            DType::Double => Some(self.double_data.iter().map(|&v| v as f32).collect()),
            DType::Float16 => Some(
                self.int32_data
                    .iter()
                    .map(|&bits| f16::from_bits(bits as u16).to_f32())
                    .collect(),
            ),
            DType::BFloat16 => Some(
                self.int32_data
                    .iter()
                    .map(|&bits| bf16::from_bits(bits as u16).to_f32())
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// Builds a [`TensorProto`] from a flat content buffer.
///
/// `dims` must already be concrete. The content length must equal the
/// product of `dims` (or, for [`TensorData::Raw`], that product times the
/// element width).
///
/// # Examples
/// ```
/// use tensor_core::{make_tensor, DType};
/// let t = make_tensor("W", DType::Float, &[3, 1], vec![0.1f32, 0.2, 0.3].into()).unwrap();
/// assert_eq!(t.dims, vec![3, 1]);
/// assert_eq!(t.float_data.len(), 3);
/// ```
pub fn make_tensor(
    name: &str,
    dtype: DType,
    dims: &[usize],
    content: TensorData,
) -> Result<TensorProto, TensorError> {
    let overflow = || TensorError::ShapeOverflow {
        name: name.to_string(),
        dims: dims.to_vec(),
    };
    let expected = dims
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(overflow)?;
    let onnx_dims = dims
        .iter()
        .map(|&d| i64::try_from(d))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| overflow())?;
    let mut tensor = TensorProto {
        name: name.to_string(),
        data_type: dtype.code(),
        dims: onnx_dims,
        ..Default::default()
    };

    let incompatible = |content: &TensorData| TensorError::IncompatibleContent {
        name: name.to_string(),
        dtype,
        content: content.kind(),
    };

    if let TensorData::Raw(bytes) = content {
        let width = dtype.size_bytes().ok_or_else(|| incompatible(&TensorData::Raw(Vec::new())))?;
        let expected_bytes = expected.checked_mul(width).ok_or_else(overflow)?;
        check_len(name, expected_bytes, bytes.len())?;
        tensor.raw_data = bytes;
        return Ok(tensor);
    }

    check_len(name, expected, content.len())?;

    match (dtype, content) {
        (DType::Float, TensorData::Float(v)) => tensor.float_data = v,
        (DType::Float, TensorData::Double(v)) => {
            tensor.float_data = v.into_iter().map(|x| x as f32).collect()
        }
        (DType::Double, TensorData::Double(v)) => tensor.double_data = v,
        (DType::Double, TensorData::Float(v)) => {
            tensor.double_data = v.into_iter().map(f64::from).collect()
        }
        (DType::Float16, TensorData::Float(v)) => {
            tensor.int32_data = v.into_iter().map(|x| f16::from_f32(x).to_bits() as i32).collect()
        }
        (DType::Float16, TensorData::Double(v)) => {
            tensor.int32_data = v.into_iter().map(|x| f16::from_f64(x).to_bits() as i32).collect()
        }
        (DType::BFloat16, TensorData::Float(v)) => {
            tensor.int32_data = v.into_iter().map(|x| bf16::from_f32(x).to_bits() as i32).collect()
        }
        (DType::BFloat16, TensorData::Double(v)) => {
            tensor.int32_data = v.into_iter().map(|x| bf16::from_f64(x).to_bits() as i32).collect()
        }
        (DType::Int64, TensorData::Int(v)) => tensor.int64_data = v,
        (
            DType::Int8 | DType::Int16 | DType::Int32 | DType::Uint8 | DType::Uint16,
            TensorData::Int(v),
        ) => {
            let (min, max) = int_range(dtype);
            tensor.int32_data = v
                .into_iter()
                .map(|x| check_range(name, dtype, x, min, max).map(|x| x as i32))
                .collect::<Result<_, _>>()?;
        }
        (DType::Uint32 | DType::Uint64, TensorData::Int(v)) => {
            let (min, max) = int_range(dtype);
            tensor.uint64_data = v
                .into_iter()
                .map(|x| check_range(name, dtype, x, min, max).map(|x| x as u64))
                .collect::<Result<_, _>>()?;
        }
        (DType::Bool, TensorData::Bool(v)) => {
            tensor.int32_data = v.into_iter().map(i32::from).collect()
        }
        (DType::String, TensorData::String(v)) => {
            tensor.string_data = v.into_iter().map(String::into_bytes).collect()
        }
        (_, other) => return Err(incompatible(&other)),
    }

    Ok(tensor)
}

fn check_len(name: &str, expected: usize, actual: usize) -> Result<(), TensorError> {
    if expected != actual {
        return Err(TensorError::ContentLengthMismatch {
            name: name.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Inclusive value range of an integer element type, clamped to `i64`.
fn int_range(dtype: DType) -> (i64, i64) {
    match dtype {
        DType::Int8 => (i8::MIN.into(), i8::MAX.into()),
        DType::Int16 => (i16::MIN.into(), i16::MAX.into()),
        DType::Int32 => (i32::MIN.into(), i32::MAX.into()),
        DType::Uint8 => (0, u8::MAX.into()),
        DType::Uint16 => (0, u16::MAX.into()),
        DType::Uint32 => (0, u32::MAX.into()),
        _ => (0, i64::MAX),
    }
}

fn check_range(name: &str, dtype: DType, value: i64, min: i64, max: i64) -> Result<i64, TensorError> {
    if value < min || value > max {
        return Err(TensorError::ValueOutOfRange {
            name: name.to_string(),
            dtype,
            value,
        });
    }
    Ok(value)
}
