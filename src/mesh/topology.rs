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

//! Read-only queries over the half-edge graph.
//!
//! Face adjacency comes in two named relations and every ring query says
//! which one it walks: *edge-adjacent* (faces joined by a twin pair) and
//! *vertex-adjacent* (faces sharing at least one vertex, the relation the
//! flat-list variant in [`crate::flat`] uses).

use ahash::AHashSet;
use smallvec::SmallVec;

use crate::{
    geometry::Point2,
    kernel::predicates::{PredicateError, point_in_triangle},
    mesh::basic_types::{FaceLocation, Mesh},
    numeric::scalar::Scalar,
};

impl<T> Mesh<T>
where
    T: Scalar,
{
    /// Vertex a half-edge points at (origin of its `next`).
    #[inline]
    pub fn target(&self, he: usize) -> usize {
        self.half_edges[self.half_edges[he].next].origin
    }

    /// A boundary half-edge has no oppositely-directed partner.
    #[inline]
    pub fn is_boundary(&self, he: usize) -> bool {
        self.half_edges[he].twin.is_none()
    }

    pub fn boundary_half_edges(&self) -> Vec<usize> {
        (0..self.half_edges.len())
            .filter(|&he| self.is_boundary(he))
            .collect()
    }

    /// Indices of the half-edges bounding face `f`, starting at the face's
    /// anchor.
    pub fn face_half_edges(&self, f: usize) -> SmallVec<[usize; 3]> {
        let e0 = self.faces[f].half_edge;
        let e1 = self.half_edges[e0].next;
        let e2 = self.half_edges[e1].next;
        debug_assert_eq!(self.half_edges[e2].next, e0);
        SmallVec::from_slice(&[e0, e1, e2])
    }

    #[inline]
    pub fn face_vertices(&self, f: usize) -> [usize; 3] {
        self.faces[f].vertices
    }

    /// All half-edges whose origin is `v`, by full scan.
    ///
    /// O(E), which is fine at the mesh sizes this crate targets, and it
    /// needs no twin hops, so boundary vertices cost nothing special.
    pub fn outgoing_half_edges(&self, v: usize) -> Vec<usize> {
        (0..self.half_edges.len())
            .filter(|&he| self.half_edges[he].origin == v)
            .collect()
    }

    /// Vertices joined to `v` by an edge: the next- and prev-origins of
    /// every half-edge leaving `v`.
    pub fn one_ring_neighbors(&self, v: usize) -> AHashSet<usize> {
        let mut ring = AHashSet::new();
        for he in self.outgoing_half_edges(v) {
            ring.insert(self.target(he));
            ring.insert(self.half_edges[self.half_edges[he].prev].origin);
        }
        ring
    }

    /// Vertices within two edge hops of `v`, excluding `v` itself.
    pub fn vertex_two_ring(&self, v: usize) -> AHashSet<usize> {
        let ring1 = self.one_ring_neighbors(v);
        let mut out = ring1.clone();
        for &u in &ring1 {
            out.extend(self.one_ring_neighbors(u));
        }
        out.remove(&v);
        out
    }

    /// Faces joined to `f` across one of its edges (twin hops); at most
    /// three, fewer on the boundary.
    pub fn edge_adjacent_faces(&self, f: usize) -> SmallVec<[usize; 3]> {
        self.face_half_edges(f)
            .iter()
            .filter_map(|&he| self.half_edges[he].twin)
            .map(|t| self.half_edges[t].face)
            .collect()
    }

    /// Faces within two *edge-adjacency* hops of `f`, excluding `f`.
    pub fn face_two_ring_by_edge(&self, f: usize) -> AHashSet<usize> {
        let ring1 = self.edge_adjacent_faces(f);
        let mut out: AHashSet<usize> = ring1.iter().copied().collect();
        for &g in &ring1 {
            out.extend(self.edge_adjacent_faces(g));
        }
        out.remove(&f);
        out
    }

    /// Unique faces incident to `v`.
    pub fn faces_around_vertex(&self, v: usize) -> AHashSet<usize> {
        self.outgoing_half_edges(v)
            .iter()
            .map(|&he| self.half_edges[he].face)
            .collect()
    }

    /// Faces sharing at least one vertex with `f` — the same relation the
    /// flat-list variant uses for its face rings.
    pub fn vertex_adjacent_faces(&self, f: usize) -> AHashSet<usize> {
        let mut out = AHashSet::new();
        for &v in &self.faces[f].vertices {
            out.extend(self.faces_around_vertex(v));
        }
        out.remove(&f);
        out
    }

    /// Faces within two *vertex-adjacency* hops of `f`, excluding `f`.
    /// Matches [`crate::flat::face_two_ring`] on the same mesh.
    pub fn face_two_ring_by_vertex(&self, f: usize) -> AHashSet<usize> {
        let ring1 = self.vertex_adjacent_faces(f);
        let mut out = ring1.clone();
        for &g in &ring1 {
            out.extend(self.vertex_adjacent_faces(g));
        }
        out.remove(&f);
        out
    }

    /// Finds a face containing `p` by depth-first search from `start`,
    /// moving between faces through twin pointers.
    ///
    /// Returns [`FaceLocation::NotFound`] when `p` lies outside the region
    /// reachable from `start`; a degenerate face encountered along the way
    /// surfaces as `Err`.
    pub fn locate_face(
        &self,
        p: &Point2<T>,
        start: usize,
    ) -> Result<FaceLocation, PredicateError> {
        let mut visited = AHashSet::new();
        let mut stack = vec![start];

        while let Some(f) = stack.pop() {
            if !visited.insert(f) {
                continue;
            }

            let [a, b, c] = self.faces[f].vertices;
            if point_in_triangle(
                p,
                &self.vertices[a].position,
                &self.vertices[b].position,
                &self.vertices[c].position,
            )? {
                return Ok(FaceLocation::Found(f));
            }

            for g in self.edge_adjacent_faces(f) {
                if !visited.contains(&g) {
                    stack.push(g);
                }
            }
        }

        Ok(FaceLocation::NotFound)
    }
}
