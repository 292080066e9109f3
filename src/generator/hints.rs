/*
hints.rs

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

//! Hint cells and the player-facing grid.
//!
//! A few cells are revealed at the beginning of the game to give the player
//! a starting point. The player-facing grid only shows the blocked cells
//! and those hints; every other cell is blank.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::board::Board;

/// Marker used for blocked cells in the player-facing grid.
pub const BLACK_MARKER: &str = "BLACK";

/// Smallest number of revealed cells.
const MIN_HINTS: usize = 5;

/// Largest number of revealed cells.
const MAX_HINTS: usize = 8;

/// A free cell whose digit is revealed to the player.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct HintCell {
    /// Cell row.
    pub row: usize,

    /// Cell column.
    pub col: usize,

    /// Revealed digit.
    pub digit: u8,
}

/// Select the cells whose digits are revealed to the player.
///
/// Between five and eight free cells are drawn without replacement. Every
/// free cell is eligible, including cells holding 0.
pub fn select(board: &Board, rng: &mut impl Rng) -> Vec<HintCell> {
    let count: usize = rng.random_range(MIN_HINTS..=MAX_HINTS);
    let candidates: Vec<HintCell> = board
        .free_cells()
        .iter()
        .map(|&(row, col)| HintCell {
            row,
            col,
            digit: board.digit(row, col),
        })
        .collect();

    debug!("Revealing {count} of {} free cells", candidates.len());
    candidates
        .choose_multiple(rng, count.min(candidates.len()))
        .copied()
        .collect()
}

/// Build the player-facing grid.
///
/// Blocked cells get the [`BLACK_MARKER`] string, hint cells show their
/// digit, and all the other cells are empty strings.
pub fn build_puzzle_grid(board: &Board, hints: &[HintCell]) -> Vec<Vec<String>> {
    let mut grid: Vec<Vec<String>> = vec![vec![String::new(); board.size]; board.size];

    for (row, col) in board.black_cell_list() {
        grid[row][col] = BLACK_MARKER.to_string();
    }
    for hint in hints {
        grid[hint.row][hint.col] = hint.digit.to_string();
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_board() -> Board {
        let mut board: Board = Board::new(15);
        let mut rng: StdRng = StdRng::seed_from_u64(13);
        crate::generator::black_cells::place_initial(&mut board, &mut rng);
        crate::generator::digits::fill_random(&mut board, &mut rng);
        board
    }

    #[test]
    fn test_hint_count_and_targets() {
        let board: Board = sample_board();
        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let hints: Vec<HintCell> = select(&board, &mut rng);

            assert!(hints.len() >= MIN_HINTS, "seed {seed}");
            assert!(hints.len() <= MAX_HINTS, "seed {seed}");
            for hint in &hints {
                assert!(!board.is_black(hint.row, hint.col));
                assert_eq!(hint.digit, board.digit(hint.row, hint.col));
            }
        }
    }

    #[test]
    fn test_hints_are_pairwise_distinct() {
        let board: Board = sample_board();
        let mut rng: StdRng = StdRng::seed_from_u64(37);
        let hints: Vec<HintCell> = select(&board, &mut rng);

        let mut coordinates: Vec<(usize, usize)> =
            hints.iter().map(|h| (h.row, h.col)).collect();
        coordinates.sort_unstable();
        coordinates.dedup();
        assert_eq!(coordinates.len(), hints.len());
    }

    #[test]
    fn test_hint_count_is_clamped_to_small_boards() {
        // A 2x2 board has fewer free cells than the smallest hint count
        let mut board: Board = Board::new(2);
        board.set_black(0, 0);
        let mut rng: StdRng = StdRng::seed_from_u64(43);
        let hints: Vec<HintCell> = select(&board, &mut rng);
        assert_eq!(hints.len(), 3);
    }

    #[test]
    fn test_puzzle_grid_content() {
        let board: Board = sample_board();
        let mut rng: StdRng = StdRng::seed_from_u64(53);
        let hints: Vec<HintCell> = select(&board, &mut rng);
        let grid: Vec<Vec<String>> = build_puzzle_grid(&board, &hints);

        for row in 0..board.size {
            for col in 0..board.size {
                let cell: &String = &grid[row][col];
                if board.is_black(row, col) {
                    assert_eq!(cell, BLACK_MARKER);
                } else if let Some(hint) = hints.iter().find(|h| (h.row, h.col) == (row, col)) {
                    assert_eq!(*cell, hint.digit.to_string());
                } else {
                    assert!(cell.is_empty());
                }
            }
        }
    }
}
