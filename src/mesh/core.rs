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

use ahash::AHashMap;

use crate::{
    geometry::Point2,
    mesh::{
        basic_types::{Mesh, MeshError},
        face::Face,
        half_edge::HalfEdge,
        vertex::Vertex,
    },
    numeric::scalar::Scalar,
};

impl<T> Mesh<T>
where
    T: Scalar,
{
    /// Builds the half-edge graph from raw point/triangle arrays in one
    /// pass.
    ///
    /// Each triangle contributes three half-edges created in input vertex
    /// order and linked into a next/prev 3-cycle; twins are then paired in
    /// O(E) expected time through the directed edge map. Half-edges whose
    /// reverse direction never appears stay unpaired (`twin == None`) and
    /// mark the mesh boundary.
    ///
    /// Triangles are assumed non-degenerate with consistent winding, but
    /// every vertex index is validated up front: an out-of-range index
    /// fails with [`MeshError::InvalidTriangle`] before any entity is
    /// created.
    pub fn from_arrays(
        points: &[Point2<T>],
        triangles: &[[usize; 3]],
    ) -> Result<Self, MeshError> {
        for (f, tri) in triangles.iter().enumerate() {
            for &v in tri {
                if v >= points.len() {
                    return Err(MeshError::InvalidTriangle { face: f, vertex: v });
                }
            }
        }

        let mut mesh = Self {
            vertices: points.iter().map(|&p| Vertex::new(p)).collect(),
            half_edges: Vec::with_capacity(triangles.len() * 3),
            faces: Vec::with_capacity(triangles.len()),
            edge_map: AHashMap::with_capacity(triangles.len() * 3),
        };

        for (f, &tri) in triangles.iter().enumerate() {
            mesh.push_face(f, tri);
        }
        mesh.pair_twins();

        Ok(mesh)
    }

    /// Appends face `f` and its three half-edges, wired into a 3-cycle.
    fn push_face(&mut self, f: usize, tri: [usize; 3]) {
        let [v0, v1, v2] = tri;
        let e0 = self.half_edges.len();
        let (e1, e2) = (e0 + 1, e0 + 2);

        self.half_edges.push(HalfEdge::new(v0, f));
        self.half_edges.push(HalfEdge::new(v1, f));
        self.half_edges.push(HalfEdge::new(v2, f));

        self.half_edges[e0].next = e1;
        self.half_edges[e0].prev = e2;
        self.half_edges[e1].next = e2;
        self.half_edges[e1].prev = e0;
        self.half_edges[e2].next = e0;
        self.half_edges[e2].prev = e1;

        self.faces.push(Face::new(tri, e0));

        // A shared vertex keeps whichever incident half-edge was written
        // last; any outgoing half-edge is a valid anchor.
        self.vertices[v0].half_edge = Some(e0);
        self.vertices[v1].half_edge = Some(e1);
        self.vertices[v2].half_edge = Some(e2);

        self.edge_map.insert((v0, v1), e0);
        self.edge_map.insert((v1, v2), e1);
        self.edge_map.insert((v2, v0), e2);
    }

    /// Pairs every half-edge with the one running the same undirected edge
    /// in the opposite direction, symmetric on both sides. Expected O(E)
    /// via the edge map; assignments match the exhaustive pairwise scan
    /// for manifold input.
    fn pair_twins(&mut self) {
        for he in 0..self.half_edges.len() {
            if self.half_edges[he].twin.is_some() {
                continue;
            }
            let from = self.half_edges[he].origin;
            let to = self.target(he);
            if let Some(&rev) = self.edge_map.get(&(to, from)) {
                self.half_edges[he].twin = Some(rev);
                self.half_edges[rev].twin = Some(he);
            }
        }
    }
}
