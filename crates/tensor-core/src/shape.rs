// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor shape descriptors with possibly unresolved dimensions.

use std::fmt;

/// A single tensor dimension.
///
/// Declared types of graph inputs and outputs often leave the batch
/// dimension open, either anonymously ([`Dim::Unknown`]) or under a
/// symbolic name shared across tensors ([`Dim::Param`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dim {
    /// A concrete extent.
    Value(usize),
    /// A named symbolic extent (ONNX `dim_param`).
    Param(String),
    /// An extent that is not known at all.
    Unknown,
}

impl Dim {
    /// Returns the concrete extent, if any.
    pub fn value(&self) -> Option<usize> {
        match self {
            Dim::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns `true` if the extent is concrete.
    pub fn is_known(&self) -> bool {
        matches!(self, Dim::Value(_))
    }
}

impl From<usize> for Dim {
    fn from(v: usize) -> Self {
        Dim::Value(v)
    }
}

impl From<Option<usize>> for Dim {
    fn from(v: Option<usize>) -> Self {
        v.map_or(Dim::Unknown, Dim::Value)
    }
}

impl From<&str> for Dim {
    fn from(name: &str) -> Self {
        Dim::Param(name.to_string())
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Value(v) => write!(f, "{v}"),
            Dim::Param(name) => f.write_str(name),
            Dim::Unknown => f.write_str("?"),
        }
    }
}

/// Describes the dimensionality of a tensor.
///
/// Shapes are immutable once created. A shape whose dimensions are all
/// [`Dim::Value`] is *concrete*; only concrete shapes can back a constant
/// tensor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    dims: Vec<Dim>,
}

impl Shape {
    /// Creates a new shape from the given dimensions.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Dim, Shape};
    /// let s = Shape::new(vec![Dim::Unknown, Dim::Value(3)]);
    /// assert_eq!(s.rank(), 2);
    /// assert!(!s.is_concrete());
    /// ```
    pub fn new(dims: Vec<Dim>) -> Self {
        Self { dims }
    }

    /// Creates a shape whose dimensions are all concrete.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::Shape;
    /// let s = Shape::fixed(&[2, 3, 4]);
    /// assert_eq!(s.num_elements(), Some(24));
    /// ```
    pub fn fixed(dims: &[usize]) -> Self {
        Self {
            dims: dims.iter().copied().map(Dim::Value).collect(),
        }
    }

    /// Creates a scalar shape (rank 0).
    pub fn scalar() -> Self {
        Self { dims: vec![] }
    }

    /// Returns the number of dimensions (rank).
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Returns the dimensions as a slice.
    pub fn dims(&self) -> &[Dim] {
        &self.dims
    }

    /// Returns `true` if every dimension is concrete.
    pub fn is_concrete(&self) -> bool {
        self.dims.iter().all(Dim::is_known)
    }

    /// Returns the concrete extents, or `None` if any dimension is unresolved.
    pub fn to_concrete(&self) -> Option<Vec<usize>> {
        self.dims.iter().map(Dim::value).collect()
    }

    /// Returns the position of the first unresolved dimension.
    pub fn first_unresolved(&self) -> Option<usize> {
        self.dims.iter().position(|d| !d.is_known())
    }

    /// Returns the total number of elements, or `None` if the shape is not
    /// concrete or the count overflows. A scalar holds one element.
    pub fn num_elements(&self) -> Option<usize> {
        self.dims
            .iter()
            .try_fold(1usize, |acc, d| acc.checked_mul(d.value()?))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Dim>> for Shape {
    fn from(dims: Vec<Dim>) -> Self {
        Self::new(dims)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self::fixed(&dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self::fixed(dims)
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self::fixed(&dims)
    }
}

/// `None` entries become [`Dim::Unknown`].
impl From<Vec<Option<usize>>> for Shape {
    fn from(dims: Vec<Option<usize>>) -> Self {
        Self::new(dims.into_iter().map(Dim::from).collect())
    }
}

impl<const N: usize> From<[Option<usize>; N]> for Shape {
    fn from(dims: [Option<usize>; N]) -> Self {
        Self::new(dims.into_iter().map(Dim::from).collect())
    }
}
