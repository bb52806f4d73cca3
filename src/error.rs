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

//! Errors raised by topology lookups and edge construction.
//!
//! Both kinds are programming errors: a lookup only fails when the caller
//! broke a mesh invariant or a documented precondition, and an edge only
//! fails when both endpoints are the same vertex.

use thiserror::Error;

use crate::mesh::{NeighborsArr3, TriInd, VertInd, VerticesArr3};

/// Result type alias using [`CdtError`].
pub type Result<T> = std::result::Result<T, CdtError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CdtError {
    /// The vertex is not one of the triangle's corners.
    #[error("vertex {vertex} is not a corner of triangle {vertices:?}")]
    VertexNotFound {
        vertex: VertInd,
        vertices: VerticesArr3,
    },

    /// The triangle is not one of the triangle's neighbors.
    #[error("triangle {neighbor} is not a neighbor of triangle with neighbors {neighbors:?}")]
    NeighborNotFound {
        neighbor: TriInd,
        neighbors: NeighborsArr3,
    },

    /// Every corner of the triangle is one of the edge's endpoints.
    #[error("no corner of triangle {vertices:?} is opposed to edge ({v1}, {v2})")]
    EdgeNotInTriangle {
        v1: VertInd,
        v2: VertInd,
        vertices: VerticesArr3,
    },

    /// Both endpoints of an edge are the same vertex.
    #[error("degenerate edge: both endpoints are vertex {vertex}")]
    DegenerateEdge { vertex: VertInd },
}
