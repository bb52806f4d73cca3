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

use std::hash::{Hash, Hasher};

use ahash::AHashSet;

use crate::{
    error::{CdtError, Result},
    mesh::index::VertInd,
};

/// Undirected edge between two distinct vertices.
///
/// The vertex with the smaller index is always stored first, so `(a, b)`
/// and `(b, a)` build the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(VertInd, VertInd)", into = "(VertInd, VertInd)"))]
pub struct Edge {
    vertices: (VertInd, VertInd),
}

pub type EdgeVec = Vec<Edge>;
pub type EdgeUSet = AHashSet<Edge>;

impl Edge {
    pub fn new(i_v1: VertInd, i_v2: VertInd) -> Result<Self> {
        if i_v1 == i_v2 {
            return Err(CdtError::DegenerateEdge { vertex: i_v1 });
        }
        let vertices = if i_v1 < i_v2 {
            (i_v1, i_v2)
        } else {
            (i_v2, i_v1)
        };
        Ok(Edge { vertices })
    }

    #[inline]
    pub fn v1(&self) -> VertInd {
        self.vertices.0
    }

    #[inline]
    pub fn v2(&self) -> VertInd {
        self.vertices.1
    }

    #[inline]
    pub fn verts(&self) -> &(VertInd, VertInd) {
        &self.vertices
    }
}

impl TryFrom<(VertInd, VertInd)> for Edge {
    type Error = CdtError;

    fn try_from((a, b): (VertInd, VertInd)) -> Result<Self> {
        Edge::new(a, b)
    }
}

impl From<Edge> for (VertInd, VertInd) {
    fn from(e: Edge) -> Self {
        e.vertices
    }
}

#[inline]
pub fn edge_get_v1(e: &Edge) -> VertInd {
    e.v1()
}

#[inline]
pub fn edge_get_v2(e: &Edge) -> VertInd {
    e.v2()
}

#[inline]
pub fn edge_make(i_v1: VertInd, i_v2: VertInd) -> Result<Edge> {
    Edge::new(i_v1, i_v2)
}

#[inline(always)]
fn hash_combine(seed: &mut u64, key: VertInd) {
    *seed ^= (key.raw() as u64)
        .wrapping_add(0x9e37_79b9)
        .wrapping_add(*seed << 6)
        .wrapping_add(*seed >> 2);
}

/// Combined hash of a vertex pair that does not depend on argument order.
///
/// The pair is combined in both orders and the smaller seed wins.
pub fn hash_vertex_pair(a: VertInd, b: VertInd) -> u64 {
    let mut seed1 = 0u64;
    hash_combine(&mut seed1, a);
    hash_combine(&mut seed1, b);
    let mut seed2 = 0u64;
    hash_combine(&mut seed2, b);
    hash_combine(&mut seed2, a);
    seed1.min(seed2)
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_vertex_pair(self.vertices.0, self.vertices.1));
    }
}
