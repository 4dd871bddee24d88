// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 the hemesh2 authors
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::fmt;

use crate::geometry::Point2;
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateError {
    /// The triangle's vertices are collinear; barycentric coordinates are
    /// undefined.
    DegenerateTriangle,
}

impl fmt::Display for PredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateError::DegenerateTriangle => {
                write!(f, "degenerate (zero-area) triangle")
            }
        }
    }
}

impl std::error::Error for PredicateError {}

/// Barycentric coordinates of `p` with respect to triangle `a`,`b`,`c`,
/// each the ratio of a sub-triangle's signed area to the full one.
///
/// Fails with [`PredicateError::DegenerateTriangle`] when the doubled area
/// of `a`,`b`,`c` is within [`Scalar::tolerance`] of zero, instead of
/// dividing through and propagating NaN/infinity.
pub fn barycentric<T>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
) -> Result<(T, T, T), PredicateError>
where
    T: Scalar,
{
    let area = orient2d(a, b, c);
    if area.abs() <= T::tolerance() {
        return Err(PredicateError::DegenerateTriangle);
    }

    let alpha = orient2d(p, b, c) / area;
    let beta = orient2d(a, p, c) / area;
    let gamma = orient2d(a, b, p) / area;

    Ok((alpha, beta, gamma))
}

/// Whether `p` lies inside triangle `a`,`b`,`c` or on its boundary.
///
/// Accepts iff all three barycentric coordinates are ≥ `-tolerance()` and
/// their sum is within `tolerance()` of one. Winding does not matter: the
/// area ratios flip sign together for a clockwise triangle.
pub fn point_in_triangle<T>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
) -> Result<bool, PredicateError>
where
    T: Scalar,
{
    let (alpha, beta, gamma) = barycentric(p, a, b, c)?;
    let eps = T::tolerance();
    let lo = -eps;

    Ok(alpha >= lo
        && beta >= lo
        && gamma >= lo
        && (alpha + beta + gamma - T::one()).abs() <= eps)
}
