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

use cdt_core::CdtError;
use cdt_core::geometry::V2d;
use cdt_core::kernel::{
    PtTriLocation, edge_neighbor, is_on_edge, locate_point_triangle, orient2d,
};
use cdt_core::mesh::{
    NO_NEIGHBOR, TriInd, TriIndVec, Triangle, TriangleVec, VertInd, ccw, cw, neighbor_ind,
    opposed_triangle, opposed_triangle_ind, opposed_triangle_ind_edge, opposed_vertex,
    opposed_vertex_ind, vertex_ind, vertices_share_edge,
};

const V0: VertInd = VertInd(0);
const V1: VertInd = VertInd(1);
const V2: VertInd = VertInd(2);
const V3: VertInd = VertInd(3);
const T0: TriInd = TriInd(0);
const T1: TriInd = TriInd(1);

/// Unit square split along the diagonal v0-v2.
///
/// ```text
///  v3 ______ v2
///    |    /|
///    | t1/ |
///    |  /  |
///    | / t0|
///    |/____|
///  v0       v1
/// ```
fn create_square() -> (Vec<V2d<f64>>, TriangleVec) {
    let points = vec![
        V2d::new(0.0, 0.0),
        V2d::new(1.0, 0.0),
        V2d::new(1.0, 1.0),
        V2d::new(0.0, 1.0),
    ];
    let triangles = vec![
        Triangle::new([V0, V1, V2], [NO_NEIGHBOR, T1, NO_NEIGHBOR]),
        Triangle::new([V0, V2, V3], [NO_NEIGHBOR, NO_NEIGHBOR, T0]),
    ];
    (points, triangles)
}

fn point<'a>(points: &'a [V2d<f64>], v: VertInd) -> &'a V2d<f64> {
    &points[v.index()]
}

#[test]
fn square_is_well_formed() {
    let (points, triangles) = create_square();
    for t in &triangles {
        let [a, b, c] = t.vertices;
        assert!(a != b && b != c && a != c);
        let o = orient2d(point(&points, c), point(&points, a), point(&points, b));
        assert!(o > 0.0, "triangle {t:?} must be CCW");
    }
}

#[test]
fn neighbor_sits_across_side_opposite_vertex() {
    let (_, triangles) = create_square();
    for (ti, t) in triangles.iter().enumerate() {
        for k in 0..3 {
            let n = t.neighbor(k);
            if n == NO_NEIGHBOR {
                continue;
            }
            let other = &triangles[n.index()];
            let (a, b) = (t.vertex(ccw(k)), t.vertex(cw(k)));
            assert!(other.vertices.contains(&a) && other.vertices.contains(&b));
            // adjacency is symmetric
            let back = opposed_triangle_ind_edge(other, a, b).unwrap();
            assert_eq!(other.neighbor(back), TriInd::new(ti));
        }
    }
}

#[test]
fn opposed_triangle_both_directions() {
    let (_, triangles) = create_square();
    let (t0, t1) = (&triangles[0], &triangles[1]);

    assert_eq!(opposed_triangle_ind(t0, V1), Ok(1));
    assert_eq!(opposed_triangle(t0, V1), Ok(T1));
    assert_eq!(opposed_triangle_ind(t1, V3), Ok(2));
    assert_eq!(opposed_triangle(t1, V3), Ok(T0));

    assert_eq!(opposed_triangle(t0, V0), Ok(NO_NEIGHBOR));
}

#[test]
fn opposed_triangle_across_shared_edge() {
    let (_, triangles) = create_square();
    assert_eq!(opposed_triangle_ind_edge(&triangles[0], V0, V2), Ok(1));
    assert_eq!(opposed_triangle_ind_edge(&triangles[0], V2, V0), Ok(1));
    assert_eq!(opposed_triangle_ind_edge(&triangles[1], V2, V0), Ok(2));
}

#[test]
fn opposed_vertex_both_directions() {
    let (_, triangles) = create_square();
    let (t0, t1) = (&triangles[0], &triangles[1]);

    assert_eq!(opposed_vertex_ind(t0, T1), Ok(1));
    assert_eq!(opposed_vertex(t0, T1), Ok(V1));
    assert_eq!(opposed_vertex_ind(t1, T0), Ok(2));
    assert_eq!(opposed_vertex(t1, T0), Ok(V3));
}

#[test]
fn corner_lookups() {
    let (_, triangles) = create_square();
    assert_eq!(vertex_ind(&triangles[1], V2), Ok(1));
    assert_eq!(neighbor_ind(&triangles[1], T0), Ok(2));
}

#[test]
fn corrupted_link_is_reported() {
    let (_, mut triangles) = create_square();
    triangles[0].neighbors[1] = NO_NEIGHBOR;

    // t1 still points at t0, but t0 no longer points back
    let t1_seen_from_t0 = opposed_vertex_ind(&triangles[0], T1);
    assert_eq!(
        t1_seen_from_t0,
        Err(CdtError::NeighborNotFound {
            neighbor: T1,
            neighbors: [NO_NEIGHBOR; 3],
        })
    );
    assert!(opposed_vertex(&triangles[0], T1).is_err());
    assert!(neighbor_ind(&triangles[0], T1).is_err());
    assert_eq!(opposed_vertex_ind(&triangles[1], T0), Ok(2));
}

#[test]
fn missing_vertex_is_reported() {
    let (_, triangles) = create_square();
    assert!(matches!(
        opposed_triangle_ind(&triangles[0], V3),
        Err(CdtError::VertexNotFound { vertex: V3, .. })
    ));
    assert!(opposed_triangle(&triangles[0], V3).is_err());
    assert!(vertex_ind(&triangles[1], V1).is_err());
}

#[test]
fn point_on_shared_edge_leads_to_neighbor() {
    let (points, triangles) = create_square();
    let t0 = &triangles[0];
    let [a, b, c] = t0.vertices.map(|v| *point(&points, v));

    let loc = locate_point_triangle(&V2d::new(0.5, 0.5), &a, &b, &c);
    assert_eq!(loc, PtTriLocation::OnEdge3);
    assert!(is_on_edge(loc));
    assert_eq!(t0.neighbor(edge_neighbor(loc)), T1);
}

fn incident_triangles(triangles: &[Triangle], n_vertices: usize) -> Vec<TriIndVec> {
    let mut incident = vec![TriIndVec::new(); n_vertices];
    for (ti, t) in triangles.iter().enumerate() {
        for v in t.vertices {
            incident[v.index()].push(TriInd::new(ti));
        }
    }
    incident
}

#[test]
fn vertices_share_edge_from_incidence() {
    let (points, triangles) = create_square();
    let incident = incident_triangles(&triangles, points.len());

    assert!(vertices_share_edge(&incident[0], &incident[2]));
    assert!(vertices_share_edge(&incident[0], &incident[1]));
    assert!(vertices_share_edge(&incident[3], &incident[2]));
    assert!(!vertices_share_edge(&incident[1], &incident[3]));
    assert!(!vertices_share_edge(&[], &incident[0]));
}
