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

use ahash::AHashMap;

use crate::{
    mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex},
    numeric::scalar::Scalar,
};

/// Half-edge graph over a 2D triangulated mesh.
///
/// The three arenas own every entity for the lifetime of the mesh; queries
/// work on indices into them. The graph is immutable once
/// [`Mesh::from_arrays`] returns: every operation after construction is a
/// read.
#[derive(Debug, Clone)]
pub struct Mesh<T>
where
    T: Scalar,
{
    pub vertices: Vec<Vertex<T>>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,

    /// Directed vertex pair (origin, target) of each half-edge, mapped to
    /// its index. Twin pairing is a reverse-pair lookup in this map.
    pub edge_map: AHashMap<(usize, usize), usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// A triangle references a vertex index outside the point array.
    InvalidTriangle { face: usize, vertex: usize },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::InvalidTriangle { face, vertex } => write!(
                f,
                "triangle {} references out-of-range vertex index {}",
                face, vertex
            ),
        }
    }
}

impl std::error::Error for MeshError {}

/// Outcome of point location. A point outside the region reachable from
/// the start face is a normal result, not an error; only predicate
/// failures (degenerate triangles) surface as `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceLocation {
    /// Index of the first visited face containing the query point.
    Found(usize),
    /// The search exhausted every face reachable from the start face
    /// without a containment hit.
    NotFound,
}
