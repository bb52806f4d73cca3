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

use crate::{
    geometry::point_2::{V2d, get_x_v2d, get_y_v2d},
    numeric::scalar::Scalar,
};

/// Axis-aligned 2D bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Box2d<T> {
    pub min: V2d<T>,
    pub max: V2d<T>,
}

impl<T: Scalar> Box2d<T> {
    pub fn new(min: V2d<T>, max: V2d<T>) -> Self {
        Box2d { min, max }
    }

    /// Inverted box that any first point collapses onto.
    ///
    /// `min` holds the largest representable value and `max` its negation,
    /// so the first [`envelop_point`](Self::envelop_point) yields a
    /// zero-area box at that point.
    pub fn empty() -> Self {
        let big = T::greatest();
        Box2d {
            min: V2d::new(big, big),
            max: V2d::new(-big, -big),
        }
    }

    /// Grow the box to cover `p`.
    #[inline]
    pub fn envelop_point(&mut self, p: &V2d<T>) {
        self.envelop_xy(p.x, p.y);
    }

    /// Grow the box to cover the point `(x, y)`.
    #[inline]
    pub fn envelop_xy(&mut self, x: T, y: T) {
        self.min.x = x.min(self.min.x);
        self.max.x = x.max(self.max.x);
        self.min.y = y.min(self.min.y);
        self.max.y = y.max(self.max.y);
    }
}

impl<T: Scalar> Default for Box2d<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Bounding box of any point collection, read through coordinate getters.
///
/// An empty collection gives [`Box2d::empty`].
pub fn envelop_box<T, P, I, Fx, Fy>(points: I, get_x: Fx, get_y: Fy) -> Box2d<T>
where
    T: Scalar,
    I: IntoIterator<Item = P>,
    Fx: Fn(&P) -> T,
    Fy: Fn(&P) -> T,
{
    let mut bbox = Box2d::empty();
    for p in points {
        bbox.envelop_xy(get_x(&p), get_y(&p));
    }
    bbox
}

/// Bounding box of a slice of [`V2d`].
pub fn envelop_box_v2d<T: Scalar>(vertices: &[V2d<T>]) -> Box2d<T> {
    envelop_box(vertices, |v| get_x_v2d(v), |v| get_y_v2d(v))
}
