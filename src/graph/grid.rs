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

use log::debug;

use crate::{
    error::{GraphError, Result},
    graph::basic_types::Graph,
};

// half-edges per grid cell: two faces of three
const EDGES_PER_CELL: usize = 6;

impl<'a, T> Graph<'a, T> {
    /// Triangulates a `width` x `height` grid of points into an empty graph.
    ///
    /// `points` is column-major: `points[i * height + j]` is column `i`, row
    /// `j`. The first two columns are built as a strip of fans; each further
    /// column is fanned off the previous column's border and zipped to it
    /// with [`close_edges`](Self::close_edges). The result has
    /// `2 (width - 1) (height - 1)` faces and one boundary loop of
    /// `2 (width + height) - 4` half-edges.
    pub fn uv(&mut self, width: usize, height: usize, points: &'a [T]) -> Result<()> {
        if !self.is_empty() {
            return Err(GraphError::OutOfSequence {
                operation: "uv",
                reason: "grid must be built into an empty graph",
            });
        }
        if width < 2 {
            return Err(GraphError::invalid_param("width", width, "must be at least 2"));
        }
        if height < 2 {
            return Err(GraphError::invalid_param("height", height, "must be at least 2"));
        }
        let total = width
            .checked_mul(height)
            .ok_or_else(|| GraphError::invalid_param("width", width, "width * height overflow"))?;
        if points.len() != total {
            return Err(GraphError::invalid_param(
                "points",
                points.len(),
                "must hold width * height entries",
            ));
        }

        // cells < total, so only the half-edge count can still overflow
        let cells = (width - 1) * (height - 1);
        let half_edges = cells
            .checked_mul(EDGES_PER_CELL)
            .filter(|&m| isize::try_from(m).is_ok())
            .ok_or_else(|| GraphError::invalid_param("points", total, "grid too large"))?;
        self.nodes.reserve(total);
        self.half_edges.reserve(half_edges);
        self.faces.reserve(cells * 2);
        debug!("building {}x{} grid", width, height);

        // first two columns
        for j in 0..height {
            let p = &points[j];
            if j < 2 {
                self.add(p)?;
            } else {
                self.add_at_index(p, -3)?;
            }

            let q = &points[j + height];
            match j {
                0 => {
                    self.add(q)?;
                }
                1 => {
                    self.add_at_index(q, -2)?;
                }
                _ => {
                    self.add_at_index(q, -1)?;
                }
            }
        }

        let stride = EDGES_PER_CELL * (height - 1);
        for i in 2..width {
            // border half-edge of the previous column's second face
            let base = (i - 2) * stride + EDGES_PER_CELL - 1;
            let col = i * height;

            self.add_at_index(&points[col], base as isize)?;
            self.add_at_index(&points[col + 1], -3)?;
            for j in 2..height {
                let ha = self.edge(-3)?;
                let hb = self.edge((base + (j - 1) * EDGES_PER_CELL) as isize)?;
                self.close_edges(ha, hb)?;
                self.add(&points[col + j])?;
            }
        }

        debug!(
            "grid done: {} nodes, {} half-edges, {} faces",
            self.nodes.len(),
            self.half_edges.len(),
            self.faces.len()
        );
        Ok(())
    }
}
