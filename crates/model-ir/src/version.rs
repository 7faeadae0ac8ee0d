// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Targeted ONNX release versions.
//!
//! Converters gate operators and attributes on the ONNX release they
//! target, so the container keeps that release as a structured, totally
//! ordered value rather than a string.

use crate::GraphError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Pre-release tag of a version (`1.3.0a1`, `1.3.0b2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreRelease {
    Alpha(u32),
    Beta(u32),
}

/// An ONNX release version such as `1.2` or `1.1.2`.
///
/// # Parsing
/// Accepts `MAJOR.MINOR` or `MAJOR.MINOR.PATCH`, optionally followed by a
/// pre-release tag `aN` or `bN`. A missing patch component is zero, so
/// `"1.2"` and `"1.2.0"` are equal. A pre-release sorts before its release.
///
/// # Examples
/// ```
/// use model_ir::OnnxVersion;
///
/// let v: OnnxVersion = "1.2".parse().unwrap();
/// assert!(v > "1.1.2".parse().unwrap());
/// assert!(v >= OnnxVersion::new(1, 2, 0));
/// assert!("1.3.0b1".parse::<OnnxVersion>().unwrap() < "1.3".parse().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OnnxVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre: Option<PreRelease>,
}

impl OnnxVersion {
    /// Creates a release version.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Parses a version string.
    pub fn parse(s: &str) -> Result<Self, GraphError> {
        let input = s.trim();
        let invalid = |detail: &str| GraphError::InvalidVersion {
            input: s.to_string(),
            detail: detail.to_string(),
        };

        // Split off an `aN` / `bN` suffix.
        let (numeric, pre) = match input.find(|c: char| c == 'a' || c == 'b') {
            Some(pos) => {
                let (head, tail) = input.split_at(pos);
                let digits = &tail[1..];
                let n: u32 = digits
                    .bytes()
                    .all(|b| b.is_ascii_digit())
                    .then(|| digits.parse().ok())
                    .flatten()
                    .ok_or_else(|| invalid("pre-release tag must be 'a' or 'b' followed by a number"))?;
                let tag = if tail.starts_with('a') {
                    PreRelease::Alpha(n)
                } else {
                    PreRelease::Beta(n)
                };
                (head, Some(tag))
            }
            None => (input, None),
        };

        let parts: Vec<&str> = numeric.split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid("expected MAJOR.MINOR or MAJOR.MINOR.PATCH"));
        }

        let mut nums = [0u32; 3];
        for (slot, part) in nums.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("components must be non-negative integers"));
            }
            *slot = part
                .parse()
                .map_err(|_| invalid("components must be non-negative integers"))?;
        }

        Ok(Self {
            major: nums[0],
            minor: nums[1],
            patch: nums[2],
            pre,
        })
    }
}

impl FromStr for OnnxVersion {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for OnnxVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre, other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            })
    }
}

impl PartialOrd for OnnxVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for OnnxVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        match self.pre {
            Some(PreRelease::Alpha(n)) => write!(f, "a{n}"),
            Some(PreRelease::Beta(n)) => write!(f, "b{n}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> OnnxVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_two_and_three_parts() {
        assert_eq!(v("1.2"), OnnxVersion::new(1, 2, 0));
        assert_eq!(v("1.1.2"), OnnxVersion::new(1, 1, 2));
        assert_eq!(v(" 1.3.0 "), OnnxVersion::new(1, 3, 0));
    }

    #[test]
    fn test_parse_accepts_leading_zeros() {
        assert_eq!(v("1.02"), OnnxVersion::new(1, 2, 0));
        assert_eq!(v("1.2.03b01"), v("1.2.3b1"));
    }

    #[test]
    fn test_parse_pre_release() {
        let b = v("1.3.0b1");
        assert_eq!(b.pre, Some(PreRelease::Beta(1)));
        assert_eq!(v("1.4a2").pre, Some(PreRelease::Alpha(2)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "1", "1.2.3.4", "one.two", "1..2", "+1.2", "1.2c1", "1.2b", "1.2b+1", "-1.2"] {
            assert!(OnnxVersion::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_ordering() {
        assert!(v("1.1.2") < v("1.2"));
        assert!(v("1.2") < v("1.10"));
        assert!(v("1.3.0a1") < v("1.3.0b1"));
        assert!(v("1.3.0b1") < v("1.3.0"));
        assert!(v("1.2.1") > v("1.2"));
        assert_eq!(v("1.2").cmp(&v("1.2.0")), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(v("1.2").to_string(), "1.2.0");
        assert_eq!(v("1.3b4").to_string(), "1.3.0b4");
    }
}
