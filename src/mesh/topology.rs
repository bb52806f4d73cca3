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

//! Index arithmetic for moving around a triangle mesh.
//!
//! All functions are pure reads over a single [`Triangle`] (or over
//! caller-maintained lists of incident triangles). Lookups that search for
//! a vertex or neighbor which the mesh invariants say must be present fail
//! with a [`CdtError`] instead of returning a sentinel: a miss means the
//! mesh is corrupt or the caller broke a precondition.

use crate::{
    error::{CdtError, Result},
    mesh::{
        index::{Index, TriInd, VertInd},
        triangle::Triangle,
    },
};

/// Neighbor slot opposed to a vertex corner.
#[inline]
pub const fn opo_nbr(vert_index: Index) -> Index {
    vert_index
}

/// Vertex slot opposed to a neighbor corner.
#[inline]
pub const fn opo_vrt(neighbor_index: Index) -> Index {
    neighbor_index
}

#[inline]
fn find_vertex(tri: &Triangle, v: VertInd) -> Option<Index> {
    tri.vertices.iter().position(|&x| x == v).map(|k| k as Index)
}

#[inline]
fn find_neighbor(tri: &Triangle, t: TriInd) -> Option<Index> {
    tri.neighbors.iter().position(|&x| x == t).map(|k| k as Index)
}

fn vertex_not_found(tri: &Triangle, vertex: VertInd) -> CdtError {
    tracing::warn!(?tri, %vertex, "vertex is not a corner of triangle");
    CdtError::VertexNotFound {
        vertex,
        vertices: tri.vertices,
    }
}

fn neighbor_not_found(tri: &Triangle, neighbor: TriInd) -> CdtError {
    tracing::warn!(?tri, %neighbor, "triangle is not a neighbor");
    CdtError::NeighborNotFound {
        neighbor,
        neighbors: tri.neighbors,
    }
}

/// Slot of the neighbor opposed to vertex `i_vert`.
pub fn opposed_triangle_ind(tri: &Triangle, i_vert: VertInd) -> Result<Index> {
    find_vertex(tri, i_vert)
        .map(opo_nbr)
        .ok_or_else(|| vertex_not_found(tri, i_vert))
}

/// Slot of the neighbor across edge `(i_vedge1, i_vedge2)`.
///
/// Both vertices must be distinct corners of `tri`; otherwise the returned
/// slot is merely the first corner that is neither of them. An error is
/// only reported when no such corner exists at all.
pub fn opposed_triangle_ind_edge(
    tri: &Triangle,
    i_vedge1: VertInd,
    i_vedge2: VertInd,
) -> Result<Index> {
    debug_assert!(i_vedge1 != i_vedge2, "edge endpoints must be distinct");
    tri.vertices
        .iter()
        .position(|&v| v != i_vedge1 && v != i_vedge2)
        .map(|k| opo_nbr(k as Index))
        .ok_or_else(|| {
            tracing::warn!(?tri, %i_vedge1, %i_vedge2, "no corner opposed to edge");
            CdtError::EdgeNotInTriangle {
                v1: i_vedge1,
                v2: i_vedge2,
                vertices: tri.vertices,
            }
        })
}

/// Slot of the vertex opposed to neighbor triangle `i_topo`.
pub fn opposed_vertex_ind(tri: &Triangle, i_topo: TriInd) -> Result<Index> {
    find_neighbor(tri, i_topo)
        .map(opo_vrt)
        .ok_or_else(|| neighbor_not_found(tri, i_topo))
}

/// Slot holding neighbor `i_tnbr`.
pub fn neighbor_ind(tri: &Triangle, i_tnbr: TriInd) -> Result<Index> {
    find_neighbor(tri, i_tnbr).ok_or_else(|| neighbor_not_found(tri, i_tnbr))
}

/// Slot holding vertex `i_v`.
pub fn vertex_ind(tri: &Triangle, i_v: VertInd) -> Result<Index> {
    find_vertex(tri, i_v).ok_or_else(|| vertex_not_found(tri, i_v))
}

/// Triangle across the side opposed to vertex `i_vert`.
///
/// May be [`NO_NEIGHBOR`](crate::mesh::NO_NEIGHBOR) when that side is on
/// the boundary; that is a valid answer, not a failure.
pub fn opposed_triangle(tri: &Triangle, i_vert: VertInd) -> Result<TriInd> {
    opposed_triangle_ind(tri, i_vert).map(|k| tri.neighbor(k))
}

/// Vertex of `tri` opposed to its neighbor `i_topo`.
pub fn opposed_vertex(tri: &Triangle, i_topo: TriInd) -> Result<VertInd> {
    opposed_vertex_ind(tri, i_topo).map(|k| tri.vertex(k))
}

/// Whether two vertices share at least one triangle, given the triangles
/// incident to each of them.
pub fn vertices_share_edge(a_tris: &[TriInd], b_tris: &[TriInd]) -> bool {
    a_tris.iter().any(|t| b_tris.contains(t))
}
