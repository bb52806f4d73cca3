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

//! Mesh topology and geometric predicates for constrained Delaunay
//! triangulation.
//!
//! Triangles reference their vertices and neighbors purely by index into
//! caller-owned sequences. This crate provides the typed indices and their
//! sentinels, the triangle record and the index arithmetic used to move
//! across it, canonical undirected edges, and the orientation, location and
//! incircle predicates the triangulation algorithms decide with. Every
//! operation is a pure read; nothing here owns or mutates a mesh.

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;

pub use error::{CdtError, Result};
pub use geometry::{Box2d, Edge, V2d};
pub use kernel::{PtLineLocation, PtTriLocation};
pub use mesh::{NO_NEIGHBOR, NO_VERTEX, TriInd, Triangle, VertInd};
pub use numeric::Scalar;
