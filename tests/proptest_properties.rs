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

//! Property-based checks of the algebraic invariants.
//!
//! Coordinates are integers so every predicate is evaluated exactly.

use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};

use cdt_core::geometry::{Edge, V2d, hash_vertex_pair};
use cdt_core::kernel::{PtTriLocation, locate_point_triangle, orient2d};
use cdt_core::mesh::{Index, IndexSizeType, VertInd, ccw, cw};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = i64> {
    -10_000_i64..10_000
}

fn point() -> impl Strategy<Value = V2d<i64>> {
    (coordinate(), coordinate()).prop_map(|(x, y)| V2d::new(x, y))
}

fn corner() -> impl Strategy<Value = Index> {
    0u8..3
}

proptest! {
    #[test]
    fn prop_ccw_cw_are_inverse(i in corner()) {
        prop_assert_eq!(cw(ccw(i)), i);
        prop_assert_eq!(ccw(cw(i)), i);
        prop_assert_eq!(ccw(ccw(ccw(i))), i);
        prop_assert!(ccw(i) < 3 && cw(i) < 3);
    }

    #[test]
    fn prop_edge_is_undirected(a in any::<IndexSizeType>(), b in any::<IndexSizeType>()) {
        prop_assume!(a != b);
        let (va, vb) = (VertInd(a), VertInd(b));
        let ab = Edge::new(va, vb).unwrap();
        let ba = Edge::new(vb, va).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!(ab.v1() < ab.v2());

        let state = BuildHasherDefault::<DefaultHasher>::default();
        prop_assert_eq!(state.hash_one(ab), state.hash_one(ba));
        prop_assert_eq!(hash_vertex_pair(va, vb), hash_vertex_pair(vb, va));
    }

    #[test]
    fn prop_degenerate_edge_fails(a in any::<IndexSizeType>()) {
        prop_assert!(Edge::new(VertInd(a), VertInd(a)).is_err());
    }

    #[test]
    fn prop_orient_antisymmetric(p in point(), v1 in point(), v2 in point()) {
        prop_assert_eq!(orient2d(&p, &v1, &v2), -orient2d(&p, &v2, &v1));
    }

    #[test]
    fn prop_orient_invariant_under_rotation(p in point(), v1 in point(), v2 in point()) {
        // (v1, v2, p), (v2, p, v1) and (p, v1, v2) describe the same triangle
        let o = orient2d(&p, &v1, &v2);
        prop_assert_eq!(o, orient2d(&v1, &v2, &p));
        prop_assert_eq!(o, orient2d(&v2, &p, &v1));
    }

    #[test]
    fn prop_triangle_corners_are_on_edges(v1 in point(), v2 in point(), v3 in point()) {
        prop_assume!(orient2d(&v3, &v1, &v2) > 0);
        for v in [&v1, &v2, &v3] {
            let loc = locate_point_triangle(v, &v1, &v2, &v3);
            prop_assert!(
                matches!(loc, PtTriLocation::OnEdge1 | PtTriLocation::OnEdge2 | PtTriLocation::OnEdge3),
                "corner {:?} located as {:?}", v, loc
            );
        }
    }

    #[test]
    fn prop_scaled_centroid_is_inside(v1 in point(), v2 in point(), v3 in point()) {
        prop_assume!(orient2d(&v3, &v1, &v2) > 0);
        // scale by 3 so the centroid has integer coordinates
        let s = |p: &V2d<i64>| V2d::new(p.x * 3, p.y * 3);
        let c = V2d::new(v1.x + v2.x + v3.x, v1.y + v2.y + v3.y);
        prop_assert_eq!(
            locate_point_triangle(&c, &s(&v1), &s(&v2), &s(&v3)),
            PtTriLocation::Inside
        );
    }
}
