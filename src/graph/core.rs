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

use log::{debug, trace};

use crate::{
    error::{GraphError, Result},
    graph::{
        basic_types::{EdgeId, FaceId, Graph, NodeId},
        face::Face,
        half_edge::HalfEdge,
        node::Node,
    },
};

impl<'a, T> Graph<'a, T> {
    /// Appends a face whose half-edges `[ea, eb, ec]` point at `heads`,
    /// linked `ea -> eb -> ec -> ea`, all unsealed. Half-edges are stored in
    /// that order.
    fn push_facet(&mut self, heads: [NodeId; 3]) -> (FaceId, [EdgeId; 3]) {
        let f = FaceId(self.faces.len());
        let base = self.half_edges.len();
        let edges = [EdgeId(base), EdgeId(base + 1), EdgeId(base + 2)];

        for i in 0..3 {
            self.half_edges
                .push(HalfEdge::new(heads[i], f, edges[(i + 1) % 3]));
        }
        self.faces.push(Face::new(edges[0]));

        (f, edges)
    }

    /// Registers vertex data without connecting it.
    pub fn add_node(&mut self, v: &'a T) -> NodeId {
        let idx = self.nodes.len();
        self.nodes.push(Node::new(v));
        NodeId(idx)
    }

    /// Builds the first face from the three registered nodes. All three
    /// half-edges are left on the border.
    pub fn seed_nodes(&mut self) -> Result<FaceId> {
        if self.nodes.len() != 3 {
            return Err(GraphError::OutOfSequence {
                operation: "seed_nodes",
                reason: "exactly three nodes must be registered",
            });
        }
        if !self.faces.is_empty() {
            return Err(GraphError::OutOfSequence {
                operation: "seed_nodes",
                reason: "graph is already seeded",
            });
        }

        let (na, nb, nc) = (NodeId(0), NodeId(1), NodeId(2));
        // ea: a -> b, eb: b -> c, ec: c -> a
        let (f, [ea, eb, ec]) = self.push_facet([nb, nc, na]);
        self.node_mut(na).edge = Some(ea);
        self.node_mut(nb).edge = Some(eb);
        self.node_mut(nc).edge = Some(ec);

        debug!("seeded face {} from the first three nodes", f.0);
        Ok(f)
    }

    /// Grows the graph by one node. The first two calls only register data,
    /// the third seeds the first face and every later call fans a new face
    /// off the most recent half-edge.
    pub fn add(&mut self, v: &'a T) -> Result<NodeId> {
        match self.nodes.len() {
            0 | 1 => Ok(self.add_node(v)),
            2 => {
                let n = self.add_node(v);
                self.seed_nodes()?;
                Ok(n)
            }
            _ => {
                if self.half_edges.is_empty() {
                    return Err(GraphError::OutOfSequence {
                        operation: "add",
                        reason: "nodes were registered without seeding a face",
                    });
                }
                let e = self.last_edge()?;
                self.add_at(v, e)?;
                self.last_node()
            }
        }
    }

    /// Adds a node and the face joining it to border half-edge `e`.
    ///
    /// The new half-edges are stored as `ea` (new node to head of `e`),
    /// `eb` (sealed against `e`) and `ec` (tail of `e` to new node), so
    /// afterwards `edge(-1)` and `edge(-3)` are the two new border edges.
    pub fn add_at(&mut self, v: &'a T, e: EdgeId) -> Result<FaceId> {
        let head = self.get_border(e)?.node;
        let tail = self.tail_of(e);

        let n = self.add_node(v);
        let (f, [ea, eb, _ec]) = self.push_facet([head, tail, n]);
        self.node_mut(n).edge = Some(ea);
        self.seal_unchecked(e, eb);

        trace!("add_at: node {} on half-edge {} -> face {}", n.0, e.0, f.0);
        Ok(f)
    }

    /// [`add_at`](Self::add_at) against the half-edge at `idx` (negative
    /// values count back from the newest half-edge).
    pub fn add_at_index(&mut self, v: &'a T, idx: isize) -> Result<FaceId> {
        let e = self.edge(idx)?;
        self.add_at(v, e)
    }

    /// Splits border half-edge `e` with a new node, dividing its face in two.
    /// `e` must be a border half-edge; a shared edge fails with `NotBorder`.
    ///
    /// With `e: P -> Q` in face `(P, Q, R)`, `e` becomes `P -> n` and keeps
    /// the existing face `(P, n, R)`; the new face `(n, Q, R)` takes the
    /// remaining side `Q -> R`. Returns the new face.
    pub fn insert(&mut self, v: &'a T, e: EdgeId) -> Result<FaceId> {
        let q = self.get_border(e)?.node;
        let old_face = self[e].face;
        let e1 = self[e].next; // Q -> R
        let e2 = self[e1].next; // R -> P
        let r = self[e1].node;

        let n = NodeId(self.nodes.len());
        let f = FaceId(self.faces.len());
        let base = self.half_edges.len();
        let eb = EdgeId(base); // n -> R, old face
        let ec = EdgeId(base + 1); // R -> n, new face
        let ea = EdgeId(base + 2); // n -> Q, new face

        self.half_edges.push(HalfEdge::new(r, old_face, e2));
        self.half_edges.push(HalfEdge::new(n, f, ea));
        self.half_edges.push(HalfEdge::new(q, f, e1));
        self.seal_unchecked(eb, ec);

        self.faces.push(Face::new(ea));
        self.nodes.push(Node::new(v));
        self.node_mut(n).edge = Some(ea);

        let side = self.edge_mut(e1);
        side.face = f;
        side.next = ec;

        let split = self.edge_mut(e);
        split.node = n;
        split.next = eb;
        self.faces[old_face.0].edge = e;

        trace!("insert: node {} on half-edge {} -> face {}", n.0, e.0, f.0);
        Ok(f)
    }

    /// Seals a face across two consecutive border half-edges, `ha` ending
    /// where `hb` starts. The third side of the new face is a new border
    /// half-edge from the tail of `ha` to the head of `hb`.
    ///
    /// A three-edge hole is rejected with `NotClosable`: the new side would
    /// double the third border edge. Fill it with [`close`](Self::close).
    pub fn close_edges(&mut self, ha: EdgeId, hb: EdgeId) -> Result<FaceId> {
        self.get_border(ha)?;
        let head_b = self.get_border(hb)?.node;
        let tail_a = self.tail_of(ha);
        let tail_b = self.tail_of(hb);

        if ha == hb || self[ha].node != tail_b || tail_a == head_b || self.triangle_of(ha) {
            return Err(GraphError::NotClosable { edge: ha.0 });
        }

        let (f, [ea, eb, _ec]) = self.push_facet([tail_b, tail_a, head_b]);
        self.seal_unchecked(ha, eb);
        self.seal_unchecked(hb, ea);

        trace!("close: half-edges {} and {} -> face {}", ha.0, hb.0, f.0);
        Ok(f)
    }

    /// Seals a face between border half-edge `e` and an existing node `n`.
    /// Only `e` gets a partner; the two new sides stay on the border.
    pub fn close_to_node(&mut self, e: EdgeId, n: NodeId) -> Result<FaceId> {
        let head = self.get_border(e)?.node;
        self.get_node(n)?;
        let tail = self.tail_of(e);
        if n == head || n == tail {
            return Err(GraphError::NotClosable { edge: e.0 });
        }

        let (f, [ea, eb, _ec]) = self.push_facet([head, tail, n]);
        self.seal_unchecked(e, eb);
        self.node_mut(n).edge.get_or_insert(ea);

        trace!("close: half-edge {} to node {} -> face {}", e.0, n.0, f.0);
        Ok(f)
    }

    /// Fills the three-edge hole bounded by `e` with a single face.
    pub fn close(&mut self, e: EdgeId) -> Result<FaceId> {
        let head = self.get_border(e)?.node;
        if !self.triangle_of(e) {
            return Err(GraphError::NotClosable { edge: e.0 });
        }
        let pred = self.next_null_of(e, false);
        let succ = self.next_null_of(e, true);

        let heads = [self[pred].node, self[succ].node, head];
        let (f, [ea, eb, ec]) = self.push_facet(heads);
        self.seal_unchecked(ea, e);
        self.seal_unchecked(eb, pred);
        self.seal_unchecked(ec, succ);

        trace!("close: hole at half-edge {} -> face {}", e.0, f.0);
        Ok(f)
    }

    /// Points `n` at different caller data.
    pub fn set_data(&mut self, n: NodeId, v: &'a T) -> Result<()> {
        self.get_node(n)?;
        self.node_mut(n).data = v;
        Ok(())
    }
}
