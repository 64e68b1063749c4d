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

use smallvec::SmallVec;

use crate::{
    error::{GraphError, Result},
    graph::basic_types::{EdgeId, FaceId, Graph, NodeId},
};

/// A topology vertex: a borrowed handle on caller data plus one emanating
/// half-edge.
#[derive(Debug)]
pub struct Node<'a, T> {
    pub(crate) data: &'a T,
    pub(crate) edge: Option<EdgeId>, // emanating, None until the node joins a face
    pub(crate) visited: bool,
}

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<'a, T> Node<'a, T> {
    pub(crate) fn new(data: &'a T) -> Self {
        Self {
            data,
            edge: None,
            visited: false,
        }
    }

    pub fn data(&self) -> &'a T {
        self.data
    }

    pub fn edge(&self) -> Option<EdgeId> {
        self.edge
    }

    pub fn visited(&self) -> bool {
        self.visited
    }
}

impl<'a, T> Graph<'a, T> {
    /// Next emanating half-edge counter-clockwise around the tail of `e`.
    #[inline]
    pub(crate) fn rot_ccw(&self, e: EdgeId) -> Option<EdgeId> {
        self[self.prev_of(e)].opp
    }

    /// Next emanating half-edge clockwise around the tail of `e`.
    #[inline]
    pub(crate) fn rot_cw(&self, e: EdgeId) -> Option<EdgeId> {
        self[e].opp.map(|t| self[t].next)
    }

    /// True if the faces around the tail of `start` form a full ring.
    pub(crate) fn closed_from(&self, start: EdgeId) -> bool {
        let stop = self.prev_of(start);
        let mut e = self[start].opp;
        while let Some(cur) = e {
            if cur == stop {
                return true;
            }
            e = self[self[cur].next].opp;
        }
        false
    }

    /// Emanating half-edges of the fan containing `start`, counter-clockwise.
    /// Open fans start at their clockwise-most spoke.
    fn fan(&self, start: EdgeId) -> (Vec<EdgeId>, bool) {
        let closed = self.closed_from(start);
        let mut first = start;
        if !closed {
            while let Some(e) = self.rot_cw(first) {
                first = e;
            }
        }

        let mut ring = Vec::new();
        let mut e = Some(first);
        while let Some(cur) = e {
            ring.push(cur);
            e = self.rot_ccw(cur).filter(|&nx| nx != first);
        }
        (ring, closed)
    }

    /// Ordered emanating half-edges of `n`.
    ///
    /// For an interior node the sequence is the full cyclic ring starting at
    /// the node's stored edge. For a boundary node it runs from the clockwise
    /// extreme (a border half-edge leaving `n`) to the counter-clockwise
    /// extreme. Nodes that belong to no face have an empty valence.
    pub fn valence(&self, n: NodeId) -> Result<Vec<EdgeId>> {
        match self.get_node(n)?.edge {
            Some(start) => Ok(self.fan(start).0),
            None => Ok(Vec::new()),
        }
    }

    /// True iff the faces around `n` close into a ring (no border edge
    /// touches the node).
    pub fn closed(&self, n: NodeId) -> Result<bool> {
        Ok(self
            .get_node(n)?
            .edge
            .is_some_and(|start| self.closed_from(start)))
    }

    /// The two border half-edges at the ends of an open fan: the one leaving
    /// `n`, then the one arriving at it. Empty for closed or isolated nodes.
    pub fn nulls(&self, n: NodeId) -> Result<SmallVec<[EdgeId; 2]>> {
        let mut out = SmallVec::new();
        let Some(start) = self.get_node(n)?.edge else {
            return Ok(out);
        };
        let (ring, closed) = self.fan(start);
        if !closed && let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
            out.push(first);
            out.push(self.prev_of(last));
        }
        Ok(out)
    }

    /// Any border half-edge leaving `n`.
    pub fn null(&self, n: NodeId) -> Result<EdgeId> {
        self.nulls(n)?
            .first()
            .copied()
            .ok_or(GraphError::NoBoundary)
    }

    /// Nodes adjacent to `n`, in valence order. Boundary nodes get one
    /// extra trailing neighbour reached across the last face of the fan.
    pub fn neighbors(&self, n: NodeId) -> Result<Vec<NodeId>> {
        let Some(start) = self.get_node(n)?.edge else {
            return Ok(Vec::new());
        };
        let (ring, closed) = self.fan(start);
        let mut out: Vec<NodeId> = ring.iter().map(|&e| self[e].node).collect();
        if !closed && let Some(&last) = ring.last() {
            out.push(self[self[last].next].node);
        }
        Ok(out)
    }

    /// Faces around `n`, one per emanating half-edge.
    pub fn node_faces(&self, n: NodeId) -> Result<Vec<FaceId>> {
        Ok(self
            .valence(n)?
            .into_iter()
            .map(|e| self[e].face)
            .collect())
    }
}
