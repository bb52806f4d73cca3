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

use crate::mesh::index::{Index, TriInd, VertInd};

pub type VerticesArr3 = [VertInd; 3];
pub type NeighborsArr3 = [TriInd; 3];
pub type TriIndVec = Vec<TriInd>;
pub type TriangleVec = Vec<Triangle>;

/// Triangulation triangle with counter-clockwise winding.
///
/// ```text
///          v3
///          /\
///       n2/  \n1
///        /    \
///       /______\
///     v1   n3   v2
/// ```
///
/// `neighbors[k]` is the triangle across the side opposite `vertices[k]`,
/// i.e. across `(vertices[ccw(k)], vertices[cw(k)])`. A side on the
/// boundary stores [`NO_NEIGHBOR`](crate::mesh::NO_NEIGHBOR). Every routine
/// that rewrites a triangle has to keep both the winding and this
/// vertex/neighbor correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    pub vertices: VerticesArr3,
    pub neighbors: NeighborsArr3,
}

impl Triangle {
    #[inline]
    pub const fn new(vertices: VerticesArr3, neighbors: NeighborsArr3) -> Self {
        Self {
            vertices,
            neighbors,
        }
    }

    /// Vertex at corner `k`.
    #[inline]
    pub fn vertex(&self, k: Index) -> VertInd {
        self.vertices[usize::from(k)]
    }

    /// Neighbor across the side opposite corner `k`.
    #[inline]
    pub fn neighbor(&self, k: Index) -> TriInd {
        self.neighbors[usize::from(k)]
    }
}
