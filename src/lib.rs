// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
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

//! Half-edge topology for triangulated surfaces.
//!
//! [`Graph`] tracks which nodes border which faces, which edges are shared
//! and which lie on an open boundary. It never owns or inspects vertex
//! data: nodes borrow caller values for the lifetime of the graph.
//!
//! ```
//! use hegraph::Graph;
//!
//! let points: Vec<[f64; 3]> = (0..9)
//!     .map(|k| [(k / 3) as f64, (k % 3) as f64, 0.0])
//!     .collect();
//!
//! let mut graph = Graph::new();
//! graph.uv(3, 3, &points).unwrap();
//! assert_eq!(graph.num_faces(), 8);
//! assert_eq!(graph.null_edge_loop().unwrap().len(), 8);
//! ```

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{EdgeId, Face, FaceId, Graph, HalfEdge, Node, NodeId};
