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

use num_traits::Float;

use crate::{
    geometry::V2d,
    kernel::orientation::{PtLineLocation, locate_point_line},
    mesh::index::Index,
    numeric::scalar::Scalar,
};

/// Location of a point relative to a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PtTriLocation {
    Inside,
    Outside,
    /// On side `v1 v2`.
    OnEdge1,
    /// On side `v2 v3`.
    OnEdge2,
    /// On side `v3 v1`.
    OnEdge3,
}

/// Locate `p` against the counter-clockwise triangle `(v1, v2, v3)`.
///
/// The sides are tested in the order `v1 v2`, `v2 v3`, `v3 v1` with an
/// exact sign test. A point right of any side is `Outside`; otherwise the
/// first side it lies on decides the `OnEdge*` result. A point sitting on
/// a vertex lies on two sides and is reported for the earlier one, so `v1`
/// and `v2` give `OnEdge1` and `v3` gives `OnEdge2`. There is no separate
/// on-vertex location.
pub fn locate_point_triangle<T: Scalar>(
    p: &V2d<T>,
    v1: &V2d<T>,
    v2: &V2d<T>,
    v3: &V2d<T>,
) -> PtTriLocation {
    const SIDES: [PtTriLocation; 3] = [
        PtTriLocation::OnEdge1,
        PtTriLocation::OnEdge2,
        PtTriLocation::OnEdge3,
    ];

    let mut result = PtTriLocation::Inside;
    for (side, (a, b)) in SIDES.into_iter().zip([(v1, v2), (v2, v3), (v3, v1)]) {
        match locate_point_line(p, a, b, T::zero()) {
            PtLineLocation::Right => return PtTriLocation::Outside,
            PtLineLocation::OnLine if result == PtTriLocation::Inside => result = side,
            _ => {}
        }
    }
    result
}

/// Whether the location is on one of the three sides.
#[inline]
pub fn is_on_edge(location: PtTriLocation) -> bool {
    matches!(
        location,
        PtTriLocation::OnEdge1 | PtTriLocation::OnEdge2 | PtTriLocation::OnEdge3
    )
}

/// Neighbor slot across the side an on-edge location refers to.
///
/// The neighbor across a side is stored at the corner opposite it: side
/// `v1 v2` maps to slot 2, `v2 v3` to slot 0 and `v3 v1` to slot 1.
///
/// # Panics
/// If `location` is not on an edge; check [`is_on_edge`] first.
#[inline]
pub fn edge_neighbor(location: PtTriLocation) -> Index {
    match location {
        PtTriLocation::OnEdge1 => 2,
        PtTriLocation::OnEdge2 => 0,
        PtTriLocation::OnEdge3 => 1,
        other => panic!("edge_neighbor called with non-edge location {other:?}"),
    }
}

/// Whether `p` lies strictly inside the circumcircle of the
/// counter-clockwise triangle `(v1, v2, v3)`.
///
/// Points on the circle are not inside. Evaluated as the incircle
/// determinant with coordinates taken relative to `p`; plain arithmetic,
/// so nearly cocircular inputs can be misclassified with floats.
pub fn is_in_circumcircle<T: Scalar>(p: &V2d<T>, v1: &V2d<T>, v2: &V2d<T>, v3: &V2d<T>) -> bool {
    let ax = v1.x - p.x;
    let ay = v1.y - p.y;
    let bx = v2.x - p.x;
    let by = v2.y - p.y;
    let cx = v3.x - p.x;
    let cy = v3.y - p.y;

    let aa = ax * ax + ay * ay;
    let bb = bx * bx + by * by;
    let cc = cx * cx + cy * cy;

    let det = ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by);
    det > T::zero()
}

/// Squared Euclidean distance; enough for comparisons.
#[inline]
pub fn distance_squared<T: Scalar>(a: &V2d<T>, b: &V2d<T>) -> T {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

#[inline]
pub fn distance<T: Scalar + Float>(a: &V2d<T>, b: &V2d<T>) -> T {
    distance_squared(a, b).sqrt()
}
