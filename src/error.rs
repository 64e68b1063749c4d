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

//! Error types for graph construction and traversal.

use thiserror::Error;

/// Result type alias using [`GraphError`].
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors reported by [`Graph`](crate::graph::Graph) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A construction step was called before (or after) the state it needs.
    #[error("{operation} called out of sequence: {reason}")]
    OutOfSequence {
        operation: &'static str,
        reason: &'static str,
    },

    /// A boundary query ran on a graph (or node) without border half-edges.
    #[error("graph has no border half-edge")]
    NoBoundary,

    /// A handle or index does not resolve to a live record.
    #[error("{kind} index {index} does not resolve to a live record")]
    InvalidReference { kind: &'static str, index: isize },

    /// The hole at `edge` cannot be sealed by a single face.
    #[error("half-edge {edge} does not bound a closable hole")]
    NotClosable { edge: usize },

    /// The half-edge already has an opposite partner.
    #[error("half-edge {edge} is not a border half-edge")]
    NotBorder { edge: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    /// A structural invariant does not hold.
    #[error("inconsistent topology: {details}")]
    Inconsistent { details: String },
}

impl GraphError {
    /// Create an invalid parameter error.
    pub fn invalid_param<V: std::fmt::Display>(
        name: &'static str,
        value: V,
        reason: &'static str,
    ) -> Self {
        GraphError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    pub(crate) fn inconsistent(details: impl Into<String>) -> Self {
        GraphError::Inconsistent {
            details: details.into(),
        }
    }
}
