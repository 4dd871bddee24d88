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

//! Line-oriented text loaders for the raw mesh arrays, plus segment
//! extraction for rendering consumers. Points and triangles live in two
//! parallel sources: one `x y` pair per line, one `i j k` index triple
//! per line (0-based). Blank lines and `#` comments are skipped.

use std::io::{self, BufRead};

use crate::{
    flat::adjacency::unique_edges,
    geometry::{Point2, Segment2},
    numeric::scalar::Scalar,
};

fn invalid(line: usize, msg: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("line {}: {}", line + 1, msg),
    )
}

/// Read one point per line as two whitespace-separated floats.
pub fn read_points<T, R>(reader: R) -> io::Result<Vec<Point2<T>>>
where
    T: Scalar,
    R: BufRead,
{
    let mut points = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') {
            continue;
        }

        let mut parts = s.split_whitespace();
        let x = parse_coord::<T>(parts.next(), n)?;
        let y = parse_coord::<T>(parts.next(), n)?;
        if parts.next().is_some() {
            return Err(invalid(n, "expected exactly two coordinates"));
        }
        points.push(Point2::new(x, y));
    }
    Ok(points)
}

/// Read one triangle per line as three whitespace-separated 0-based
/// vertex indices. Index range is validated later, at mesh construction.
pub fn read_triangles<R>(reader: R) -> io::Result<Vec<[usize; 3]>>
where
    R: BufRead,
{
    let mut triangles = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') {
            continue;
        }

        let mut parts = s.split_whitespace();
        let i = parse_index(parts.next(), n)?;
        let j = parse_index(parts.next(), n)?;
        let k = parse_index(parts.next(), n)?;
        if parts.next().is_some() {
            return Err(invalid(n, "expected exactly three vertex indices"));
        }
        triangles.push([i, j, k]);
    }
    Ok(triangles)
}

/// Undirected segments of the triangle set, one per unique edge — the
/// geometry a renderer draws underneath the per-half-edge arrows.
pub fn mesh_segments<T>(points: &[Point2<T>], triangles: &[[usize; 3]]) -> Vec<Segment2<T>>
where
    T: Scalar,
{
    unique_edges(triangles)
        .into_iter()
        .map(|(a, b)| Segment2::new(points[a], points[b]))
        .collect()
}

fn parse_coord<T>(token: Option<&str>, line: usize) -> io::Result<T>
where
    T: Scalar,
{
    let token = token.ok_or_else(|| invalid(line, "missing coordinate"))?;
    let value: f64 = token
        .parse()
        .map_err(|_| invalid(line, "malformed coordinate"))?;
    T::from_f64(value).ok_or_else(|| invalid(line, "coordinate out of range"))
}

fn parse_index(token: Option<&str>, line: usize) -> io::Result<usize> {
    token
        .ok_or_else(|| invalid(line, "missing vertex index"))?
        .parse()
        .map_err(|_| invalid(line, "malformed vertex index"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_points_and_triangles() {
        let pts = read_points::<f64, _>("0.0 0.0\n1.0 0.0\n# comment\n\n0.0 1.0\n".as_bytes())
            .unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1], Point2::new(1.0, 0.0));

        let tris = read_triangles("0 1 2\n".as_bytes()).unwrap();
        assert_eq!(tris, vec![[0, 1, 2]]);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(read_points::<f64, _>("0.0\n".as_bytes()).is_err());
        assert!(read_points::<f64, _>("0.0 x\n".as_bytes()).is_err());
        assert!(read_triangles("0 1\n".as_bytes()).is_err());
        assert!(read_triangles("0 1 2 3\n".as_bytes()).is_err());
    }

    #[test]
    fn segments_cover_unique_edges_once() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let triangles = [[0, 1, 2], [0, 2, 3]];
        assert_eq!(mesh_segments(&points, &triangles).len(), 5);
    }
}
