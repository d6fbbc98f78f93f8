// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Overlap tests for ships.
//!
//! Ships are axis-aligned rectangles, so two ships share a cell exactly when their
//! column ranges intersect and their row ranges intersect. Each axis is checked
//! independently with [`ranges_overlap`].

use crate::ships::Ship;

/// Returns true if the closed ranges `[a_start, a_end]` and `[b_start, b_end]` share at
/// least one integer point. Both ranges must have `start <= end`.
pub fn ranges_overlap(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> bool {
    !(a_end < b_start || b_end < a_start)
}

/// Returns true if the two ships share at least one cell.
///
/// A horizontal and a vertical ship that cross overlap only on the shared crossing cell;
/// parallel ships on adjacent rows never overlap.
pub fn rectangles_overlap<I, J>(a: &Ship<I>, b: &Ship<J>) -> bool {
    ranges_overlap(a.x1(), a.x2(), b.x1(), b.x2())
        && ranges_overlap(a.y1(), a.y2(), b.y1(), b.y2())
}

/// Returns true if `candidate` overlaps any of the `placed` ships. Stops at the first
/// overlap found.
pub fn any_overlap<'a, I, J, P>(candidate: &Ship<J>, placed: P) -> bool
where
    I: 'a,
    P: IntoIterator<Item = &'a Ship<I>>,
{
    placed
        .into_iter()
        .any(|ship| rectangles_overlap(candidate, ship))
}
