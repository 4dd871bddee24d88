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

/// The undirected edge list of a triangle set: each unordered vertex pair
/// once, normalized low-high.
pub fn unique_edges(triangles: &[[usize; 3]]) -> Vec<(usize, usize)> {
    let mut seen = AHashSet::new();
    let mut edges = Vec::new();
    for tri in triangles {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = if a < b { (a, b) } else { (b, a) };
            if seen.insert(key) {
                edges.push(key);
            }
        }
    }
    edges
}

/// Vertices directly connected to `v` in an undirected edge list.
pub fn vertex_one_ring(v: usize, connections: &[(usize, usize)]) -> AHashSet<usize> {
    let mut ring = AHashSet::new();
    for &(a, b) in connections {
        if a == v {
            ring.insert(b);
        } else if b == v {
            ring.insert(a);
        }
    }
    ring
}

/// Vertices within two hops of `v` in an undirected edge list, excluding
/// `v` itself.
pub fn vertex_two_ring(v: usize, connections: &[(usize, usize)]) -> AHashSet<usize> {
    let ring1 = vertex_one_ring(v, connections);
    let mut out = ring1.clone();
    for &u in &ring1 {
        out.extend(vertex_one_ring(u, connections));
    }
    out.remove(&v);
    out
}

fn shares_vertex(a: &[usize; 3], b: &[usize; 3]) -> bool {
    a.iter().any(|v| b.contains(v))
}

/// All other faces sharing at least one vertex index with face `f`.
pub fn vertex_adjacent_faces(f: usize, triangles: &[[usize; 3]]) -> AHashSet<usize> {
    triangles
        .iter()
        .enumerate()
        .filter(|&(g, tri)| g != f && shares_vertex(&triangles[f], tri))
        .map(|(g, _)| g)
        .collect()
}

/// Faces within two vertex-sharing hops of `f`, excluding `f` itself.
pub fn face_two_ring(f: usize, triangles: &[[usize; 3]]) -> AHashSet<usize> {
    let ring1 = vertex_adjacent_faces(f, triangles);
    let mut out = ring1.clone();
    for &g in &ring1 {
        out.extend(vertex_adjacent_faces(g, triangles));
    }
    out.remove(&f);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_edges_dedups_shared_diagonal() {
        let triangles = [[0, 1, 2], [0, 2, 3]];
        let edges = unique_edges(&triangles);
        assert_eq!(edges.len(), 5);
        assert_eq!(edges.iter().filter(|&&e| e == (0, 2)).count(), 1);
    }

    #[test]
    fn one_ring_reads_both_pair_orders() {
        let connections = [(0, 1), (2, 0), (1, 2)];
        let ring = vertex_one_ring(0, &connections);
        assert_eq!(ring, [1, 2].into_iter().collect());
    }
}
