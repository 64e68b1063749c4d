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
    error::Result,
    graph::basic_types::{EdgeId, FaceId, Graph, NodeId},
};

#[derive(Clone, Copy, Debug)]
pub struct Face {
    pub(crate) edge: EdgeId, // any of its three half-edges
}

impl Face {
    pub(crate) fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    pub fn edge(&self) -> EdgeId {
        self.edge
    }
}

impl<'a, T> Graph<'a, T> {
    #[inline]
    pub(crate) fn face_edges_of(&self, f: FaceId) -> [EdgeId; 3] {
        let ea = self[f].edge;
        let eb = self[ea].next;
        [ea, eb, self[eb].next]
    }

    /// The face's half-edges `[ea, eb, ec]`, `ea` being the stored edge.
    pub fn face_edges(&self, f: FaceId) -> Result<[EdgeId; 3]> {
        self.get_face(f)?;
        Ok(self.face_edges_of(f))
    }

    /// Heads of `[ea, eb, ec]`.
    pub fn face_nodes(&self, f: FaceId) -> Result<[NodeId; 3]> {
        Ok(self.face_edges(f)?.map(|e| self[e].node))
    }

    /// Caller data at `face_nodes(f)`.
    pub fn face_data(&self, f: FaceId) -> Result<[&'a T; 3]> {
        Ok(self.face_nodes(f)?.map(|n| self[n].data))
    }

    /// Faces sharing an edge with `f`, skipping border edges.
    pub fn edge_neighbors(&self, f: FaceId) -> Result<SmallVec<[FaceId; 3]>> {
        Ok(self
            .face_edges(f)?
            .iter()
            .filter_map(|&e| self[e].opp)
            .map(|o| self[o].face)
            .collect())
    }
}
