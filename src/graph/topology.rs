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

use ahash::AHashSet;
use log::debug;

use crate::{
    error::{GraphError, Result},
    graph::basic_types::{EdgeId, FaceId, Graph, NodeId},
};

impl<'a, T> Graph<'a, T> {
    /// All half-edges without an opposite partner, in storage order.
    pub fn null_edges(&self) -> Vec<EdgeId> {
        self.edge_ids().filter(|&e| self[e].is_border()).collect()
    }

    pub fn has_border(&self) -> bool {
        self.half_edges.iter().any(|he| he.is_border())
    }

    /// First border half-edge in storage order.
    pub fn first_null(&self) -> Result<EdgeId> {
        self.edge_ids()
            .find(|&e| self[e].is_border())
            .ok_or(GraphError::NoBoundary)
    }

    /// Walks the boundary cycle through `start` by repeated border
    /// successors until it comes back around.
    fn walk_boundary(&self, start: EdgeId) -> Result<Vec<EdgeId>> {
        let limit = self.half_edges.len();
        let mut cycle = Vec::new();
        let mut e = start;
        loop {
            cycle.push(e);
            e = self.next_null_of(e, true);
            if e == start {
                return Ok(cycle);
            }
            if cycle.len() > limit {
                return Err(GraphError::inconsistent(format!(
                    "boundary walk from half-edge {} never returns",
                    start.0
                )));
            }
        }
    }

    /// The boundary cycle through [`first_null`](Self::first_null), in walk
    /// order: each entry is `next_null(prev, true)` of the one before it.
    pub fn null_edge_loop(&self) -> Result<Vec<EdgeId>> {
        let start = self.first_null()?;
        self.walk_boundary(start)
    }

    /// Every boundary cycle, each starting at its lowest-indexed half-edge.
    /// Empty for a closed surface.
    pub fn null_edge_loops(&self) -> Result<Vec<Vec<EdgeId>>> {
        let mut seen = AHashSet::new();
        let mut loops = Vec::new();
        for e in self.null_edges() {
            if seen.contains(&e) {
                continue;
            }
            let cycle = self.walk_boundary(e)?;
            seen.extend(cycle.iter().copied());
            loops.push(cycle);
        }
        Ok(loops)
    }

    pub fn last_edge(&self) -> Result<EdgeId> {
        self.edge(-1)
    }

    pub fn last_face(&self) -> Result<FaceId> {
        self.face(-1)
    }

    /// Most recently registered node.
    pub fn last_node(&self) -> Result<NodeId> {
        self.node(-1)
    }

    pub fn set_node_visited(&mut self, n: NodeId, visited: bool) -> Result<()> {
        self.get_node(n)?;
        self.node_mut(n).visited = visited;
        Ok(())
    }

    pub fn set_edge_visited(&mut self, e: EdgeId, visited: bool) -> Result<()> {
        self.get_edge(e)?;
        self.edge_mut(e).visited = visited;
        Ok(())
    }

    /// Clears every visitation flag.
    pub fn reset(&mut self) {
        for he in &mut self.half_edges {
            he.visited = false;
        }
        for node in &mut self.nodes {
            node.visited = false;
        }
    }

    /// Drops every node, half-edge and face. Handles taken before the call
    /// are plain indices: they fail with `InvalidReference` until the arena
    /// grows past them again, then they name whatever record sits there.
    pub fn clear(&mut self) {
        debug!(
            "clearing graph: {} nodes, {} half-edges, {} faces",
            self.nodes.len(),
            self.half_edges.len(),
            self.faces.len()
        );
        self.half_edges.clear();
        self.faces.clear();
        self.nodes.clear();
    }

    /// Checks the structural invariants: triangular `next` cycles that
    /// agree with face membership, symmetric partners joining the same two
    /// nodes in opposite directions, and node edges that leave their node.
    pub fn validate_connectivity(&self) -> Result<()> {
        let m = self.half_edges.len();
        let in_range = |e: EdgeId| e.0 < m;

        for (i, he) in self.half_edges.iter().enumerate() {
            if he.node.0 >= self.nodes.len() || he.face.0 >= self.faces.len() {
                return Err(GraphError::inconsistent(format!(
                    "half-edge {} links a missing node or face",
                    i
                )));
            }
            let cycle = self
                .half_edges
                .get(he.next.0)
                .and_then(|h1| self.half_edges.get(h1.next.0))
                .map(|h2| h2.next);
            if cycle != Some(EdgeId(i)) {
                return Err(GraphError::inconsistent(format!(
                    "half-edge {} is not on a three-edge next cycle",
                    i
                )));
            }
            if self[he.next].face != he.face {
                return Err(GraphError::inconsistent(format!(
                    "half-edge {} and its next lie on different faces",
                    i
                )));
            }
        }

        // every next cycle is known to be in range from here on
        for (i, he) in self.half_edges.iter().enumerate() {
            let Some(o) = he.opp else { continue };
            let e = EdgeId(i);
            if !in_range(o) || o == e {
                return Err(GraphError::inconsistent(format!(
                    "half-edge {} has an invalid partner",
                    i
                )));
            }
            if self[o].opp != Some(e) {
                return Err(GraphError::inconsistent(format!(
                    "half-edge {} partner {} does not point back",
                    i, o.0
                )));
            }
            if !self.is_opp_of(e, o) {
                return Err(GraphError::inconsistent(format!(
                    "half-edge {} and partner {} do not join the same nodes",
                    i, o.0
                )));
            }
        }

        let mut claimed = AHashSet::new();
        for (fi, face) in self.faces.iter().enumerate() {
            if !in_range(face.edge) || self[face.edge].face.0 != fi {
                return Err(GraphError::inconsistent(format!(
                    "face {} half-edge does not belong to it",
                    fi
                )));
            }
            for e in self.face_edges_of(FaceId(fi)) {
                if !claimed.insert(e) {
                    return Err(GraphError::inconsistent(format!(
                        "half-edge {} claimed by more than one face",
                        e.0
                    )));
                }
            }
        }
        if claimed.len() != m {
            return Err(GraphError::inconsistent(format!(
                "{} half-edges belong to no face",
                m - claimed.len()
            )));
        }

        for (ni, node) in self.nodes.iter().enumerate() {
            if let Some(e) = node.edge {
                if !in_range(e) || self.tail_of(e).0 != ni {
                    return Err(GraphError::inconsistent(format!(
                        "node {}: half-edge {} does not leave it",
                        ni, e.0
                    )));
                }
            }
        }

        Ok(())
    }
}
