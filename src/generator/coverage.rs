/*
coverage.rs

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

//! Make sure that every free cell is part of a number.
//!
//! After the separators are inserted, a free cell can end up walled in by
//! blocked cells, with no sequence covering it. Such a cell would be a hole
//! in the puzzle: the player could never deduce its digit. [`enforce`]
//! repairs these cells, converting a neighboring blocked cell back to free
//! when no other repair is available.

use std::collections::BTreeSet;

use log::debug;
use rand::Rng;

use super::board::Board;
use super::sequences;

/// Repair every free cell that no sequence covers.
///
/// A single repair pass handles each uncovered cell once. Repairing a cell
/// cannot uncover another one (blocked cells are only removed here, never
/// added), but the pass still re-runs until no uncovered cell remains, with
/// one pass per board row as the upper bound.
pub fn enforce(board: &mut Board, rng: &mut impl Rng) {
    for _ in 0..board.size.max(1) {
        let orphans: Vec<(usize, usize)> = uncovered_cells(board);
        if orphans.is_empty() {
            return;
        }
        debug!("{} uncovered cells to repair", orphans.len());
        for (row, col) in orphans {
            repair_cell(board, row, col, rng);
        }
    }
    debug!("Some cells are still uncovered after the last repair pass");
}

/// Free cells that no sequence of two or more cells covers.
fn uncovered_cells(board: &Board) -> Vec<(usize, usize)> {
    let mut covered: BTreeSet<(usize, usize)> = BTreeSet::new();
    for seq in sequences::find_sequences(board) {
        for cell in &seq.cells {
            covered.insert(*cell);
        }
    }

    board
        .free_cells()
        .into_iter()
        .filter(|cell| !covered.contains(cell))
        .collect()
}

// Repair one uncovered cell.
//
// If the cell can merge into a horizontal or vertical run of free
// neighbors, the next sequence extraction covers it and nothing needs to
// change. Otherwise the cell is walled in, and one of its blocked
// neighbors is converted back to free.
fn repair_cell(board: &mut Board, row: usize, col: usize, rng: &mut impl Rng) {
    if extends_horizontally(board, row, col) || extends_vertically(board, row, col) {
        return;
    }
    convert_neighbor(board, row, col, rng);
}

// Whether the cell merges into a horizontal run of at least three cells.
fn extends_horizontally(board: &Board, row: usize, col: usize) -> bool {
    if col > 0 && !board.is_black(row, col - 1) {
        if col > 1 && !board.is_black(row, col - 2) {
            return true;
        }
        return col + 1 < board.size && !board.is_black(row, col + 1);
    }
    if col + 1 < board.size && !board.is_black(row, col + 1) {
        return col + 2 < board.size && !board.is_black(row, col + 2);
    }
    false
}

// Whether the cell merges into a vertical run of at least three cells.
fn extends_vertically(board: &Board, row: usize, col: usize) -> bool {
    if row > 0 && !board.is_black(row - 1, col) {
        if row > 1 && !board.is_black(row - 2, col) {
            return true;
        }
        return row + 1 < board.size && !board.is_black(row + 1, col);
    }
    if row + 1 < board.size && !board.is_black(row + 1, col) {
        return row + 2 < board.size && !board.is_black(row + 2, col);
    }
    false
}

// Convert the first blocked neighbor (up, down, left, right priority) back
// to a free cell with a fresh random digit.
fn convert_neighbor(board: &mut Board, row: usize, col: usize, rng: &mut impl Rng) {
    let mut neighbors: Vec<(usize, usize)> = Vec::with_capacity(4);
    if row > 0 {
        neighbors.push((row - 1, col));
    }
    if row + 1 < board.size {
        neighbors.push((row + 1, col));
    }
    if col > 0 {
        neighbors.push((row, col - 1));
    }
    if col + 1 < board.size {
        neighbors.push((row, col + 1));
    }

    for (nr, nc) in neighbors {
        if board.is_black(nr, nc) {
            let digit: u8 = rng.random_range(0..=9);
            debug!("Converting blocked cell ({nr}, {nc}) to free to cover ({row}, {col})");
            board.clear_black(nr, nc);
            board.set_digit(nr, nc, digit);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_isolated_cell_gets_a_converted_neighbor() {
        // One free cell walled in by blocked cells on all sides
        let mut board: Board = Board::new(15);
        for row in 0..board.size {
            for col in 0..board.size {
                if (row, col) != (7, 7) {
                    board.set_black(row, col);
                }
            }
        }
        let before: usize = board.num_black();

        let mut rng: StdRng = StdRng::seed_from_u64(17);
        enforce(&mut board, &mut rng);

        // Exactly one neighbor converted, up first
        assert_eq!(board.num_black(), before - 1);
        assert!(!board.is_black(6, 7));

        // The cell is now covered by a vertical sequence
        assert!(uncovered_cells(&board).is_empty());
    }

    #[test]
    fn test_isolated_corner_cell() {
        let mut board: Board = Board::new(15);
        for row in 0..board.size {
            for col in 0..board.size {
                if (row, col) != (0, 0) {
                    board.set_black(row, col);
                }
            }
        }

        let mut rng: StdRng = StdRng::seed_from_u64(29);
        enforce(&mut board, &mut rng);

        // The corner has no cell above it; the one below is converted
        assert!(!board.is_black(1, 0));
        assert!(uncovered_cells(&board).is_empty());
    }

    #[test]
    fn test_covered_board_is_untouched() {
        let mut board: Board = Board::new(6);
        board.set_black(2, 3);
        let before: Vec<(usize, usize)> = board.black_cell_list();

        let mut rng: StdRng = StdRng::seed_from_u64(41);
        enforce(&mut board, &mut rng);
        assert_eq!(board.black_cell_list(), before);
    }
}
