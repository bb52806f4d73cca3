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

//! Typed handles into caller-owned vertex and triangle sequences.
//!
//! Handles are plain unsigned integers wrapped in `#[repr(transparent)]`
//! newtypes so a vertex index can never be passed where a triangle index is
//! expected. The width is `u32` unless the `index64` feature is enabled.
//! The maximum value of each handle is reserved as the "no such entity"
//! sentinel and must only ever be compared against, never used to index.

use std::fmt;

#[cfg(not(feature = "index64"))]
pub type IndexSizeType = u32;
#[cfg(feature = "index64")]
pub type IndexSizeType = u64;

/// Corner of a triangle: always in `0..3`.
///
/// The same slot addresses a vertex (`vertices[k]`) and the neighbor across
/// the side opposite that vertex (`neighbors[k]`).
pub type Index = u8;

/// Vertex index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct VertInd(pub IndexSizeType);

/// Triangle index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct TriInd(pub IndexSizeType);

/// No valid vertex.
pub const NO_VERTEX: VertInd = VertInd(IndexSizeType::MAX);

/// No valid neighbor: the triangle side lies on the boundary.
pub const NO_NEIGHBOR: TriInd = TriInd(IndexSizeType::MAX);

macro_rules! impl_index_type {
    ($name:ident, $sentinel:ident, $display:literal) => {
        impl $name {
            /// Wrap a `usize` position in the owning sequence.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(
                    (index as u128) < IndexSizeType::MAX as u128,
                    "index {} does not fit a {} handle",
                    index,
                    $display
                );
                Self(index as IndexSizeType)
            }

            /// Position in the owning sequence.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn raw(self) -> IndexSizeType {
                self.0
            }

            /// `false` only for the sentinel.
            #[inline]
            pub fn is_valid(self) -> bool {
                self != $sentinel
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $sentinel
            }
        }

        impl From<IndexSizeType> for $name {
            fn from(v: IndexSizeType) -> Self {
                Self(v)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.0)
                } else {
                    write!(f, "{}(NONE)", $display)
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}", self.0)
                } else {
                    f.write_str("none")
                }
            }
        }
    };
}

impl_index_type!(VertInd, NO_VERTEX, "V");
impl_index_type!(TriInd, NO_NEIGHBOR, "T");

/// Advance a vertex or neighbor corner counter-clockwise.
#[inline]
pub const fn ccw(i: Index) -> Index {
    (i + 1) % 3
}

/// Advance a vertex or neighbor corner clockwise.
#[inline]
pub const fn cw(i: Index) -> Index {
    (i + 2) % 3
}
