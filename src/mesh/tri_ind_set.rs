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

//! Collections of triangle indices.
//!
//! Incidence bookkeeping (triangles around a vertex, triangles touched by a
//! constraint, ...) only ever inserts, erases, tests membership and
//! iterates, so it is written against [`TriIndSet`]. Two backends exist:
//! a hashed set for large or fast-changing collections, and a sorted inline
//! vector for the typical handful of triangles around one vertex. The
//! `flat-sets` feature switches [`TriIndUSet`] to the latter.

use ahash::{AHashMap, AHashSet};
use smallvec::SmallVec;

use crate::mesh::index::TriInd;

pub trait TriIndSet: Default {
    /// Returns `false` if `t` was already present.
    fn insert(&mut self, t: TriInd) -> bool;

    /// Returns `false` if `t` was not present.
    fn erase(&mut self, t: TriInd) -> bool;

    fn contains(&self, t: TriInd) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> impl Iterator<Item = TriInd> + '_;

    /// Whether the two sets have a triangle in common.
    fn shares_any<S: TriIndSet>(&self, other: &S) -> bool {
        if self.len() <= other.len() {
            self.iter().any(|t| other.contains(t))
        } else {
            other.iter().any(|t| self.contains(t))
        }
    }
}

/// Hashed backend.
#[derive(Debug, Clone, Default)]
pub struct HashTriIndSet(AHashSet<TriInd>);

impl TriIndSet for HashTriIndSet {
    #[inline]
    fn insert(&mut self, t: TriInd) -> bool {
        self.0.insert(t)
    }

    #[inline]
    fn erase(&mut self, t: TriInd) -> bool {
        self.0.remove(&t)
    }

    #[inline]
    fn contains(&self, t: TriInd) -> bool {
        self.0.contains(&t)
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    fn iter(&self) -> impl Iterator<Item = TriInd> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<TriInd> for HashTriIndSet {
    fn from_iter<I: IntoIterator<Item = TriInd>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Sorted inline backend; iterates in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatTriIndSet(SmallVec<[TriInd; 8]>);

impl FlatTriIndSet {
    pub fn as_slice(&self) -> &[TriInd] {
        &self.0
    }
}

impl TriIndSet for FlatTriIndSet {
    fn insert(&mut self, t: TriInd) -> bool {
        match self.0.binary_search(&t) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, t);
                true
            }
        }
    }

    fn erase(&mut self, t: TriInd) -> bool {
        match self.0.binary_search(&t) {
            Ok(pos) => {
                self.0.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    #[inline]
    fn contains(&self, t: TriInd) -> bool {
        self.0.binary_search(&t).is_ok()
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    fn iter(&self) -> impl Iterator<Item = TriInd> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<TriInd> for FlatTriIndSet {
    fn from_iter<I: IntoIterator<Item = TriInd>>(iter: I) -> Self {
        let mut tris: SmallVec<[TriInd; 8]> = iter.into_iter().collect();
        tris.sort_unstable();
        tris.dedup();
        Self(tris)
    }
}

#[cfg(not(feature = "flat-sets"))]
pub type TriIndUSet = HashTriIndSet;
#[cfg(feature = "flat-sets")]
pub type TriIndUSet = FlatTriIndSet;

pub type TriIndUMap = AHashMap<TriInd, TriInd>;
