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
//! Random placement of straight-line ships on a square grid.
//!
//! [`geometry`] decides whether two ships share a cell. [`placement`] draws random,
//! in-bounds ships and keeps the first one that does not overlap anything already placed,
//! giving up after a bounded number of attempts. [`board`] holds the board size,
//! coordinates, and an occupancy grid for materializing a finished layout.

pub mod board;
pub mod geometry;
pub mod placement;
pub mod ships;
