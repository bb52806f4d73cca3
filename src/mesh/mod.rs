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

pub mod index;
pub mod topology;
pub mod tri_ind_set;
pub mod triangle;

pub use index::{Index, IndexSizeType, NO_NEIGHBOR, NO_VERTEX, TriInd, VertInd, ccw, cw};
pub use topology::{
    neighbor_ind, opo_nbr, opo_vrt, opposed_triangle, opposed_triangle_ind,
    opposed_triangle_ind_edge, opposed_vertex, opposed_vertex_ind, vertex_ind,
    vertices_share_edge,
};
pub use tri_ind_set::{FlatTriIndSet, HashTriIndSet, TriIndSet, TriIndUMap, TriIndUSet};
pub use triangle::{NeighborsArr3, TriIndVec, Triangle, TriangleVec, VerticesArr3};
