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

use std::{fmt, ops::Index};

use crate::{
    error::{GraphError, Result},
    graph::{face::Face, half_edge::HalfEdge, node::Node},
};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) usize);

        impl $name {
            pub(crate) const KIND: &'static str = $kind;

            /// Position of the record in its arena.
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", $kind, self.0)
            }
        }
    };
}

define_id!(
    /// Handle of a [`Node`] in its graph.
    NodeId,
    "node"
);
define_id!(
    /// Handle of a [`HalfEdge`] in its graph.
    EdgeId,
    "half-edge"
);
define_id!(
    /// Handle of a [`Face`] in its graph.
    FaceId,
    "face"
);

/// Half-edge topology over vertex data owned by the caller.
///
/// The graph owns three arenas (nodes, half-edges, faces) that only grow;
/// links between records are handles into those arenas. Vertex data is
/// borrowed for `'a` and never copied, built or dropped by the graph.
#[derive(Debug)]
pub struct Graph<'a, T> {
    pub(crate) nodes: Vec<Node<'a, T>>,
    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) faces: Vec<Face>,
}

impl<T> Clone for Graph<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            half_edges: self.half_edges.clone(),
            faces: self.faces.clone(),
        }
    }
}

impl<T> Default for Graph<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves `idx` against an arena of `len` records; negative values count
/// back from the end (`-1` is the last record).
pub(crate) fn resolve_index(len: usize, idx: isize) -> Option<usize> {
    if idx < 0 {
        len.checked_sub(idx.unsigned_abs())
    } else {
        let i = idx as usize;
        (i < len).then_some(i)
    }
}

#[inline]
fn invalid(kind: &'static str, index: usize) -> GraphError {
    GraphError::InvalidReference {
        kind,
        index: index as isize,
    }
}

impl<'a, T> Graph<'a, T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Pre-reserves the three arenas.
    pub fn with_capacity(nodes: usize, half_edges: usize, faces: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            half_edges: Vec::with_capacity(half_edges),
            faces: Vec::with_capacity(faces),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.half_edges.is_empty() && self.faces.is_empty()
    }

    pub fn nodes(&self) -> &[Node<'a, T>] {
        &self.nodes
    }

    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + use<'a, T> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + use<'a, T> {
        (0..self.half_edges.len()).map(EdgeId)
    }

    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + use<'a, T> {
        (0..self.faces.len()).map(FaceId)
    }

    pub fn get_node(&self, n: NodeId) -> Result<&Node<'a, T>> {
        self.nodes.get(n.0).ok_or(invalid(NodeId::KIND, n.0))
    }

    pub fn get_edge(&self, e: EdgeId) -> Result<&HalfEdge> {
        self.half_edges.get(e.0).ok_or(invalid(EdgeId::KIND, e.0))
    }

    pub fn get_face(&self, f: FaceId) -> Result<&Face> {
        self.faces.get(f.0).ok_or(invalid(FaceId::KIND, f.0))
    }

    /// Looks up a border half-edge, failing with `NotBorder` if it is sealed.
    pub(crate) fn get_border(&self, e: EdgeId) -> Result<&HalfEdge> {
        let he = self.get_edge(e)?;
        if he.is_border() {
            Ok(he)
        } else {
            Err(GraphError::NotBorder { edge: e.0 })
        }
    }

    #[inline]
    pub(crate) fn edge_mut(&mut self, e: EdgeId) -> &mut HalfEdge {
        &mut self.half_edges[e.0]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, n: NodeId) -> &mut Node<'a, T> {
        &mut self.nodes[n.0]
    }

    /// Node at `idx`; negative values count back from the newest node.
    pub fn node(&self, idx: isize) -> Result<NodeId> {
        resolve_index(self.nodes.len(), idx)
            .map(NodeId)
            .ok_or(GraphError::InvalidReference {
                kind: NodeId::KIND,
                index: idx,
            })
    }

    /// Half-edge at `idx`; negative values count back from the newest
    /// half-edge, so `edge(-1)` is the last one created.
    pub fn edge(&self, idx: isize) -> Result<EdgeId> {
        resolve_index(self.half_edges.len(), idx)
            .map(EdgeId)
            .ok_or(GraphError::InvalidReference {
                kind: EdgeId::KIND,
                index: idx,
            })
    }

    /// Face at `idx`; negative values count back from the newest face.
    pub fn face(&self, idx: isize) -> Result<FaceId> {
        resolve_index(self.faces.len(), idx)
            .map(FaceId)
            .ok_or(GraphError::InvalidReference {
                kind: FaceId::KIND,
                index: idx,
            })
    }
}

impl<'a, T> Index<NodeId> for Graph<'a, T> {
    type Output = Node<'a, T>;

    fn index(&self, n: NodeId) -> &Self::Output {
        &self.nodes[n.0]
    }
}

impl<T> Index<EdgeId> for Graph<'_, T> {
    type Output = HalfEdge;

    fn index(&self, e: EdgeId) -> &Self::Output {
        &self.half_edges[e.0]
    }
}

impl<T> Index<FaceId> for Graph<'_, T> {
    type Output = Face;

    fn index(&self, f: FaceId) -> &Self::Output {
        &self.faces[f.0]
    }
}
