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

use crate::{
    error::{GraphError, Result},
    graph::basic_types::{EdgeId, FaceId, Graph, NodeId},
};

#[derive(Clone, Copy, Debug)]
pub struct HalfEdge {
    pub(crate) node: NodeId,        // points to Node it ends at
    pub(crate) face: FaceId,
    pub(crate) opp: Option<EdgeId>, // None on the border
    pub(crate) next: EdgeId,        // ccw within the face
    pub(crate) visited: bool,
}

impl HalfEdge {
    pub(crate) fn new(node: NodeId, face: FaceId, next: EdgeId) -> Self {
        Self {
            node,
            face,
            opp: None,
            next,
            visited: false,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn face(&self) -> FaceId {
        self.face
    }

    pub fn opp(&self) -> Option<EdgeId> {
        self.opp
    }

    pub fn next(&self) -> EdgeId {
        self.next
    }

    #[inline]
    pub fn is_border(&self) -> bool {
        self.opp.is_none()
    }

    pub fn visited(&self) -> bool {
        self.visited
    }
}

impl<'a, T> Graph<'a, T> {
    #[inline]
    pub(crate) fn prev_of(&self, e: EdgeId) -> EdgeId {
        self[self[e].next].next
    }

    #[inline]
    pub(crate) fn tail_of(&self, e: EdgeId) -> NodeId {
        self[self.prev_of(e)].node
    }

    #[inline]
    pub(crate) fn seal_unchecked(&mut self, e: EdgeId, other: EdgeId) {
        self.edge_mut(e).opp = Some(other);
        self.edge_mut(other).opp = Some(e);
    }

    /// Previous half-edge in the face (`next` twice, faces being triangles).
    pub fn prev(&self, e: EdgeId) -> Result<EdgeId> {
        self.get_edge(e)?;
        Ok(self.prev_of(e))
    }

    pub fn is_border(&self, e: EdgeId) -> Result<bool> {
        Ok(self.get_edge(e)?.is_border())
    }

    /// `(tail, head)` of `e`: the half-edge runs from its previous
    /// half-edge's node to its own node.
    pub fn endpoints(&self, e: EdgeId) -> Result<(NodeId, NodeId)> {
        let head = self.get_edge(e)?.node;
        Ok((self.tail_of(e), head))
    }

    /// Data at the head of `e`.
    pub fn a(&self, e: EdgeId) -> Result<&'a T> {
        let head = self.get_edge(e)?.node;
        Ok(self[head].data)
    }

    /// Data at the tail of `e`.
    pub fn b(&self, e: EdgeId) -> Result<&'a T> {
        self.get_edge(e)?;
        Ok(self[self.tail_of(e)].data)
    }

    /// Pairs two border half-edges that run between the same nodes in
    /// opposite directions.
    pub fn seal(&mut self, e: EdgeId, other: EdgeId) -> Result<()> {
        self.get_border(e)?;
        self.get_border(other)?;
        if e == other || !self.is_opp_of(e, other) {
            return Err(GraphError::NotClosable { edge: e.0 });
        }
        self.seal_unchecked(e, other);
        Ok(())
    }

    /// Border successor (`clockwise`) or predecessor of a border half-edge.
    ///
    /// The successor is found by rotating around the head of `e` until an
    /// emanating half-edge without partner is reached; the predecessor by
    /// rotating around the tail until an arriving half-edge without partner
    /// is reached. Both may lie on the same face as `e`.
    pub fn next_null(&self, e: EdgeId, clockwise: bool) -> Result<EdgeId> {
        self.get_border(e)?;
        Ok(self.next_null_of(e, clockwise))
    }

    pub(crate) fn next_null_of(&self, e: EdgeId, clockwise: bool) -> EdgeId {
        if clockwise {
            let mut t = self[e].next;
            while let Some(o) = self[t].opp {
                t = self[o].next;
            }
            t
        } else {
            let mut t = self.prev_of(e);
            while let Some(o) = self[t].opp {
                t = self.prev_of(o);
            }
            t
        }
    }

    #[inline]
    fn ccw_from_of(&self, e: EdgeId, other: EdgeId) -> bool {
        self[e].node == self.tail_of(other)
    }

    #[inline]
    fn cw_from_of(&self, e: EdgeId, other: EdgeId) -> bool {
        self.tail_of(e) == self[other].node
    }

    #[inline]
    pub(crate) fn is_opp_of(&self, e: EdgeId, other: EdgeId) -> bool {
        self.ccw_from_of(e, other) && self.cw_from_of(e, other)
    }

    /// True if `e` ends where `other` starts.
    pub fn ccw_from(&self, e: EdgeId, other: EdgeId) -> Result<bool> {
        self.get_edge(e)?;
        self.get_edge(other)?;
        Ok(self.ccw_from_of(e, other))
    }

    /// True if `e` starts where `other` ends.
    pub fn cw_from(&self, e: EdgeId, other: EdgeId) -> Result<bool> {
        self.get_edge(e)?;
        self.get_edge(other)?;
        Ok(self.cw_from_of(e, other))
    }

    /// True if `e` and `other` join the same two nodes in opposite directions.
    pub fn is_opp(&self, e: EdgeId, other: EdgeId) -> Result<bool> {
        self.get_edge(e)?;
        self.get_edge(other)?;
        Ok(self.is_opp_of(e, other))
    }

    /// True if the border loop through `e` is a three-edge hole.
    pub fn triangle(&self, e: EdgeId) -> Result<bool> {
        self.get_border(e)?;
        Ok(self.triangle_of(e))
    }

    pub(crate) fn triangle_of(&self, e: EdgeId) -> bool {
        let pred = self.next_null_of(e, false);
        self.next_null_of(e, true) == self.next_null_of(pred, false)
    }
}
