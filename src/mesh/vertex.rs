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

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// A mesh vertex. Its index in `Mesh::vertices` equals its position in the
/// input point array and is the basis of all topological comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Vertex<T>
where
    T: Scalar,
{
    pub position: Point2<T>,
    /// One half-edge whose origin is this vertex; which one is not
    /// canonical (construction leaves the last incident write in place).
    /// `None` only for a vertex no triangle references.
    pub half_edge: Option<usize>,
}

impl<T> Vertex<T>
where
    T: Scalar,
{
    pub fn new(position: Point2<T>) -> Self {
        Self {
            position,
            half_edge: None,
        }
    }
}
