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

use crate::{geometry::V2d, numeric::scalar::Scalar};

/// Side of a directed line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PtLineLocation {
    Left,
    Right,
    OnLine,
}

/// Orient `p` against the directed line `v1 -> v2`.
///
/// Returns twice the signed area of triangle `(v1, v2, p)`:
/// - >0 if `p` is left of the line (counter-clockwise)
/// - <0 if `p` is right of the line (clockwise)
/// - =0 if collinear
pub fn orient2d<T: Scalar>(p: &V2d<T>, v1: &V2d<T>, v2: &V2d<T>) -> T {
    (v2.x - v1.x) * (p.y - v1.y) - (v2.y - v1.y) * (p.x - v1.x)
}

/// Classify an [`orient2d`] value.
///
/// Anything within `[-tolerance, tolerance]` is `OnLine`; pass `T::zero()`
/// for an exact sign test.
pub fn classify_orientation<T: Scalar>(orientation: T, tolerance: T) -> PtLineLocation {
    if orientation < -tolerance {
        PtLineLocation::Right
    } else if orientation > tolerance {
        PtLineLocation::Left
    } else {
        PtLineLocation::OnLine
    }
}

/// Which side of line `v1 -> v2` the point `p` lies on.
pub fn locate_point_line<T: Scalar>(
    p: &V2d<T>,
    v1: &V2d<T>,
    v2: &V2d<T>,
    tolerance: T,
) -> PtLineLocation {
    classify_orientation(orient2d(p, v1, v2), tolerance)
}
