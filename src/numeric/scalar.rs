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

use num_traits::{Bounded, Num};

use std::{fmt::Debug, ops::Neg};

/// Coordinate type accepted by every geometric primitive and predicate.
///
/// Only the operations the predicates actually need are required: ordering,
/// ring arithmetic, negation and a representable maximum. The trait is
/// implemented automatically for every type meeting the bounds, so `f32`,
/// `f64`, `i32` and `i64` all work out of the box. Integer coordinates keep
/// the predicates exact as long as the products fit.
pub trait Scalar: Copy + Debug + PartialOrd + Num + Neg<Output = Self> + Bounded {
    #[inline(always)]
    fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Largest representable value, used to seed empty extents.
    #[inline(always)]
    fn greatest() -> Self {
        <Self as Bounded>::max_value()
    }
}

impl<T> Scalar for T where T: Copy + Debug + PartialOrd + Num + Neg<Output = T> + Bounded {}
