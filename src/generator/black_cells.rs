/*
black_cells.rs

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

//! Place the blocked cells that separate the embedded numbers.
//!
//! [`place_initial`] blocks a first batch of cells on the empty board.
//! [`insert_separators`] runs later, once the digits are in place, and adds
//! more blocked cells to keep the numbers short and separated. Both
//! functions only ever add blocked cells.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::board::Board;
use super::sequences::{self, Direction, Sequence};

/// Bounds for the initial blocked-cell density.
const INITIAL_DENSITY_MIN: f64 = 0.08;
const INITIAL_DENSITY_MAX: f64 = 0.12;

/// Sequences longer than this are split near their middle.
const MAX_SEQUENCE_LEN: usize = 7;

/// Probability to block the cell just past the trailing end of a sequence.
const TRAILING_BLOCK_PROBABILITY: f64 = 0.4;

/// Probability for each stride insertion inside a long sequence.
const STRIDE_BLOCK_PROBABILITY: f64 = 0.3;

/// Block an initial batch of 8 to 12% of the cells, at random.
///
/// Duplicate draws are ignored, so the loop runs until the target count of
/// distinct cells is reached.
pub fn place_initial(board: &mut Board, rng: &mut impl Rng) {
    let total: usize = board.num_cells();
    let min: usize = (total as f64 * INITIAL_DENSITY_MIN) as usize;
    let max: usize = (total as f64 * INITIAL_DENSITY_MAX) as usize;
    let target: usize = rng.random_range(min..=max);

    while board.num_black() < target {
        let row: usize = rng.random_range(0..board.size);
        let col: usize = rng.random_range(0..board.size);
        board.set_black(row, col);
    }
    debug!("Placed {target} initial blocked cells");
}

/// Add blocked cells that separate the numbers.
///
/// Three passes run in order: very long sequences are split near their
/// middle, adjacent numbers get separators, and a few extra blocked cells
/// are sprinkled over the remaining free cells for variety.
pub fn insert_separators(board: &mut Board, rng: &mut impl Rng) {
    split_long_sequences(board, rng);
    separate_adjacent_numbers(board, rng);
    sprinkle_extra(board, rng);
}

// Split every sequence longer than MAX_SEQUENCE_LEN near its middle.
//
// This is best effort: one split per sequence, and the random offset can
// land in a spot that leaves a piece longer than wanted. The sequence list
// is not re-checked afterwards.
fn split_long_sequences(board: &mut Board, rng: &mut impl Rng) {
    for seq in sequences::find_sequences(board) {
        if seq.len() <= MAX_SEQUENCE_LEN {
            continue;
        }
        let break_point: i64 = seq.len() as i64 / 2 + rng.random_range(-1..=1);
        if break_point > 0 && (break_point as usize) < seq.len() {
            let (row, col) = seq.cells[break_point as usize];
            debug!("Splitting a {}-cell sequence at ({row}, {col})", seq.len());
            board.set_black(row, col);
        }
    }
}

// Separate adjacent numbers: block the cell just past the trailing end of
// short sequences, and insert separators at a random stride inside the
// longer ones.
fn separate_adjacent_numbers(board: &mut Board, rng: &mut impl Rng) {
    let seqs: Vec<Sequence> = sequences::find_sequences(board);

    for seq in &seqs {
        if seq.len() < 3 || seq.len() > MAX_SEQUENCE_LEN {
            continue;
        }
        let (last_row, last_col) = seq.last();
        match seq.direction {
            Direction::Horizontal => {
                let next_col: usize = last_col + 1;
                if next_col < board.size
                    && !board.is_black(last_row, next_col)
                    && rng.random_bool(TRAILING_BLOCK_PROBABILITY)
                {
                    board.set_black(last_row, next_col);
                }
            }
            Direction::Vertical => {
                let next_row: usize = last_row + 1;
                if next_row < board.size
                    && !board.is_black(next_row, last_col)
                    && rng.random_bool(TRAILING_BLOCK_PROBABILITY)
                {
                    board.set_black(next_row, last_col);
                }
            }
        }
    }

    // One stride per sequence, separators from offset 3 onwards
    for seq in &seqs {
        if seq.len() < 4 {
            continue;
        }
        let stride: usize = rng.random_range(3..=5);
        let mut i: usize = 3;
        while i < seq.len() {
            if rng.random_bool(STRIDE_BLOCK_PROBABILITY) {
                let (row, col) = seq.cells[i];
                board.set_black(row, col);
            }
            i += stride;
        }
    }
}

// Block 5 to 10% of the currently free cells, chosen without replacement.
fn sprinkle_extra(board: &mut Board, rng: &mut impl Rng) {
    let free: Vec<(usize, usize)> = board.free_cells();
    if free.is_empty() {
        return;
    }
    let count: usize = rng.random_range(free.len() / 20..=free.len() / 10);
    let chosen: Vec<(usize, usize)> = free.choose_multiple(rng, count).copied().collect();
    for (row, col) in chosen {
        board.set_black(row, col);
    }
    debug!("Sprinkled {count} extra blocked cells");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_initial_density_is_within_bounds() {
        for seed in 0..20 {
            let mut board: Board = Board::new(15);
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            place_initial(&mut board, &mut rng);

            // 8 to 12% of 225 cells
            assert!(board.num_black() >= 18, "seed {seed}");
            assert!(board.num_black() <= 27, "seed {seed}");
        }
    }

    #[test]
    fn test_separators_only_add_blocked_cells() {
        let mut board: Board = Board::new(15);
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        place_initial(&mut board, &mut rng);
        let before: Vec<(usize, usize)> = board.black_cell_list();

        insert_separators(&mut board, &mut rng);
        for cell in before {
            assert!(board.is_black(cell.0, cell.1));
        }
    }

    #[test]
    fn test_long_run_is_split() {
        // A single 9-cell horizontal run; everything else is blocked. The
        // split is best effort and a piece can keep up to 8 cells, so only
        // that bound is asserted.
        for seed in 0..20 {
            let mut board: Board = Board::new(15);
            for row in 0..board.size {
                for col in 0..board.size {
                    if row != 7 || !(3..12).contains(&col) {
                        board.set_black(row, col);
                    }
                }
            }

            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            insert_separators(&mut board, &mut rng);

            let longest: usize = sequences::find_sequences(&board)
                .iter()
                .map(|s| s.len())
                .max()
                .unwrap_or(0);
            assert!(longest <= 8, "seed {seed}: a {longest}-cell run remains");
            // The 9-cell run must not survive intact
            assert!((3..12).any(|col| board.is_black(7, col)), "seed {seed}");
        }
    }
}
