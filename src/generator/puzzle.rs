/*
puzzle.rs

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

//! Run the puzzle generation pipeline.

use std::collections::BTreeMap;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::black_cells;
use super::board::Board;
use super::coverage;
use super::digits;
use super::hints::{self, HintCell};
use super::numbers;

/// Default number of rows and columns.
pub const DEFAULT_SIZE: usize = 15;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GeneratorError {
    /// The requested grid cannot hold a two-cell sequence.
    InvalidSize,
}

/// Complete output of one generation run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PuzzleResult {
    /// Full solution: the digit of every cell, blocked cells included.
    pub solution_grid: Vec<Vec<u8>>,

    /// Player-facing grid: blocked marker, revealed digit, or empty string
    /// per cell.
    pub puzzle_grid: Vec<Vec<String>>,

    /// Blocked cells as (row, column) pairs.
    pub black_cells: Vec<(usize, usize)>,

    /// Embedded numbers, grouped by digit count (2 to 7).
    pub available_numbers: BTreeMap<usize, Vec<String>>,

    /// Cells revealed to the player.
    pub hint_cells: Vec<HintCell>,

    /// Whether the full pipeline completed.
    pub success: bool,
}

/// Cross-number puzzle generator.
///
/// One generator owns one board and one random source. A single call to
/// [`PuzzleGenerator::generate`] resets the board and runs the full
/// pipeline; the returned [`PuzzleResult`] is an immutable bundle with no
/// further lifecycle. Callers that serve several requests concurrently must
/// create one generator per request: the pipeline holds no locks and the
/// board is mutated in place.
pub struct PuzzleGenerator {
    /// Grid and blocked-cell set, reset at the beginning of each run.
    board: Board,

    /// Random source for every stage. Seeded generators are deterministic:
    /// identical seeds yield identical puzzles.
    rng: StdRng,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Create a generator with the default grid size and a random seed.
    pub fn new() -> Self {
        Self {
            board: Board::new(DEFAULT_SIZE),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator with the default grid size and the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            board: Board::new(DEFAULT_SIZE),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator for the given grid size.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid cannot hold a two-cell
    /// sequence.
    pub fn with_size(size: usize) -> Result<Self, GeneratorError> {
        if size < 2 {
            return Err(GeneratorError::InvalidSize);
        }
        Ok(Self {
            board: Board::new(size),
            rng: StdRng::from_os_rng(),
        })
    }

    /// Create a generator for the given grid size and seed.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid cannot hold a two-cell
    /// sequence.
    pub fn with_size_and_seed(size: usize, seed: u64) -> Result<Self, GeneratorError> {
        if size < 2 {
            return Err(GeneratorError::InvalidSize);
        }
        Ok(Self {
            board: Board::new(size),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Grid size.
    pub fn size(&self) -> usize {
        self.board.size
    }

    /// Generate a puzzle.
    ///
    /// The stages run strictly in sequence over the shared board; each one
    /// relies on the state that its predecessor left behind.
    pub fn generate(&mut self) -> PuzzleResult {
        self.board = Board::new(self.board.size);
        let board: &mut Board = &mut self.board;
        let rng: &mut StdRng = &mut self.rng;

        black_cells::place_initial(board, rng);
        debug!("Initial blocked cells: {}", board.num_black());

        digits::fill_random(board, rng);
        digits::break_repetitions(board, rng);

        black_cells::insert_separators(board, rng);
        debug!("Blocked cells after separators: {}", board.num_black());

        digits::fix_leading_zeros(board, rng);
        coverage::enforce(board, rng);
        // Converting a blocked cell during the coverage repair can put a 0
        // back at the head of a sequence.
        digits::fix_leading_zeros(board, rng);

        let available_numbers: BTreeMap<usize, Vec<String>> = numbers::extract(board, rng);
        let hint_cells: Vec<HintCell> = hints::select(board, rng);
        let puzzle_grid: Vec<Vec<String>> = hints::build_puzzle_grid(board, &hint_cells);

        PuzzleResult {
            solution_grid: board.grid().clone(),
            puzzle_grid,
            black_cells: board.black_cell_list(),
            available_numbers,
            hint_cells,
            success: true,
        }
    }
}
