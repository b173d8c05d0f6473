//! # Scalar-or-array input handling
//!
//! Every public entry point of this crate accepts either a single value or a
//! homogeneous array per argument. Rather than dispatching dynamically on the
//! input shape, the crate models the two cases as an explicit tagged variant,
//! [`ScalarOrArray`], and runs the per-element math once against this uniform
//! representation. Results are lowered back to the scalar variant when every
//! input was scalar.
//!
//! Broadcasting follows the usual 1-D rules: array lengths must be equal, or
//! one of them must be 1 (a length-1 array repeats against the others, as does
//! a scalar). Incompatible lengths fail the whole call with
//! [`SunpathError::ShapeMismatch`].

use serde::{Deserialize, Serialize};

use crate::sunpath_errors::SunpathError;

/// A single value or a homogeneous array of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarOrArray<T> {
    Scalar(T),
    Array(Vec<T>),
}

impl<T> ScalarOrArray<T> {
    /// Number of elements, or `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            ScalarOrArray::Scalar(_) => None,
            ScalarOrArray::Array(values) => Some(values.len()),
        }
    }

    /// `true` when holding the array variant, regardless of its length.
    pub fn is_array(&self) -> bool {
        matches!(self, ScalarOrArray::Array(_))
    }

    /// Element used at broadcast position `index`.
    ///
    /// A scalar and a length-1 array repeat their single value for every
    /// position; a longer array is indexed directly.
    pub fn broadcast_get(&self, index: usize) -> &T {
        match self {
            ScalarOrArray::Scalar(value) => value,
            ScalarOrArray::Array(values) if values.len() == 1 => &values[0],
            ScalarOrArray::Array(values) => &values[index],
        }
    }

    /// Apply `f` to every element, preserving the variant.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> ScalarOrArray<U> {
        match self {
            ScalarOrArray::Scalar(value) => ScalarOrArray::Scalar(f(value)),
            ScalarOrArray::Array(values) => ScalarOrArray::Array(values.iter().map(f).collect()),
        }
    }

    /// The single value, or `None` for the array variant.
    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            ScalarOrArray::Scalar(value) => Some(value),
            ScalarOrArray::Array(_) => None,
        }
    }

    /// The elements as a slice, or `None` for the scalar variant.
    pub fn as_array(&self) -> Option<&[T]> {
        match self {
            ScalarOrArray::Scalar(_) => None,
            ScalarOrArray::Array(values) => Some(values),
        }
    }
}

impl<T> From<T> for ScalarOrArray<T> {
    fn from(value: T) -> Self {
        ScalarOrArray::Scalar(value)
    }
}

impl<T> From<Vec<T>> for ScalarOrArray<T> {
    fn from(values: Vec<T>) -> Self {
        ScalarOrArray::Array(values)
    }
}

impl<T: Clone> From<&[T]> for ScalarOrArray<T> {
    fn from(values: &[T]) -> Self {
        ScalarOrArray::Array(values.to_vec())
    }
}

/// Resolve the common element count of a set of broadcast participants.
///
/// `lens` holds the result of [`ScalarOrArray::len`] for each input; scalars
/// (`None`) accept any length. Array lengths must all be equal or 1.
///
/// Return
/// ------
/// * the broadcast element count (1 when every input is scalar), or
///   [`SunpathError::ShapeMismatch`] on the first incompatible length.
pub fn broadcast_len(lens: &[Option<usize>]) -> Result<usize, SunpathError> {
    let mut resolved: usize = 1;
    for &len in lens.iter().flatten() {
        if len == resolved || len == 1 {
            continue;
        }
        if resolved == 1 {
            resolved = len;
        } else {
            return Err(SunpathError::ShapeMismatch {
                expected: resolved,
                found: len,
            });
        }
    }
    Ok(resolved)
}

/// Lower a fully computed element vector back to the caller-facing variant.
///
/// Scalar mode (`array_input == false`) always carries exactly one element.
pub(crate) fn pack<T>(mut values: Vec<T>, array_input: bool) -> ScalarOrArray<T> {
    if !array_input && values.len() == 1 {
        ScalarOrArray::Scalar(values.remove(0))
    } else {
        ScalarOrArray::Array(values)
    }
}
