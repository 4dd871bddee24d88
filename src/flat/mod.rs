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

//! Brute-force adjacency and point-location queries over raw
//! point/triangle arrays, with no half-edge graph involved.
//!
//! Semantically these mirror the graph-walk queries on
//! [`Mesh`](crate::mesh::basic_types::Mesh); face rings here use the
//! *vertex-adjacent* relation (faces sharing at least one vertex), which
//! the graph exposes as `face_two_ring_by_vertex`.

pub mod adjacency;
pub mod locate;

pub use adjacency::{face_two_ring, unique_edges, vertex_two_ring};
pub use locate::locate_triangle;
