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

use ahash::AHashSet;

use crate::{
    flat::adjacency::vertex_adjacent_faces,
    geometry::Point2,
    kernel::predicates::{PredicateError, point_in_triangle},
    mesh::basic_types::FaceLocation,
    numeric::scalar::Scalar,
};

/// Finds a triangle containing `p` by depth-first search from `start`
/// over the vertex-sharing face adjacency, testing containment at each
/// visited triangle.
///
/// Returns [`FaceLocation::NotFound`] once every triangle reachable from
/// `start` has been visited without a hit — the normal outcome for a
/// point outside the mesh. A degenerate triangle encountered during the
/// walk surfaces as `Err`.
pub fn locate_triangle<T>(
    points: &[Point2<T>],
    triangles: &[[usize; 3]],
    p: &Point2<T>,
    start: usize,
) -> Result<FaceLocation, PredicateError>
where
    T: Scalar,
{
    let mut visited = AHashSet::new();
    let mut stack = vec![start];

    while let Some(f) = stack.pop() {
        if !visited.insert(f) {
            continue;
        }

        let [a, b, c] = triangles[f];
        if point_in_triangle(p, &points[a], &points[b], &points[c])? {
            return Ok(FaceLocation::Found(f));
        }

        for g in vertex_adjacent_faces(f, triangles) {
            if !visited.contains(&g) {
                stack.push(g);
            }
        }
    }

    Ok(FaceLocation::NotFound)
}
