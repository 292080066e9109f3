/*
generator.rs

Copyright 2025 Hervé Quatremain

This file is part of Numkudo.

Numkudo is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Numkudo is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Numkudo. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate cross-number puzzles.
//!
//! A puzzle is a square grid partitioned into blocked cells and digit
//! cells. Every run of at least two consecutive digit cells in a row or in
//! a column forms one embedded number. The player receives the grid with
//! only the blocked cells and a few revealed digits, plus the list of the
//! embedded numbers grouped by length, and must place every number back.
//!
//! [`puzzle::PuzzleGenerator`] drives a fixed pipeline over one mutable
//! [`board::Board`]:
//!
//! 1. [`black_cells::place_initial`] blocks 8 to 12% of the cells at
//!    random.
//! 2. [`digits::fill_random`] gives every free cell a digit.
//! 3. [`digits::break_repetitions`] caps runs of identical digits.
//! 4. [`black_cells::insert_separators`] splits long runs and separates
//!    adjacent numbers.
//! 5. [`digits::fix_leading_zeros`] removes zeros from sequence heads.
//! 6. [`coverage::enforce`] repairs free cells that no sequence covers,
//!    and the leading-zero fix runs once more.
//! 7. [`numbers::extract`] collects the embedded numbers by length.
//! 8. [`hints::select`] reveals a few cells, and
//!    [`hints::build_puzzle_grid`] produces the player-facing grid.
//!
//! The stages share [`sequences::find_sequences`], a pure scan that
//! partitions the board into maximal runs of free cells. Each stage
//! assumes the state left by its predecessor, so the order is fixed.

pub mod black_cells;
pub mod board;
pub mod coverage;
pub mod digits;
pub mod hints;
pub mod numbers;
pub mod puzzle;
pub mod sequences;
