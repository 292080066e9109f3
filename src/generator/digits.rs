/*
digits.rs

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

//! Fill the board with digits and repair undesirable digit patterns.

use log::debug;
use rand::Rng;

use super::board::Board;
use super::sequences;

/// Probability for a free cell to receive the digit 0.
const ZERO_PROBABILITY: f64 = 0.15;

/// Longest allowed run of identical digits among consecutive free cells.
const MAX_IDENTICAL_RUN: usize = 3;

/// Give every free cell a random digit.
///
/// The digit 0 is drawn less often than the others, because 0 can never
/// start a number and would otherwise be over-represented at repair time.
pub fn fill_random(board: &mut Board, rng: &mut impl Rng) {
    for row in 0..board.size {
        for col in 0..board.size {
            if board.is_black(row, col) {
                continue;
            }
            let digit: u8 = if rng.random_bool(ZERO_PROBABILITY) {
                0
            } else {
                rng.random_range(1..=9)
            };
            board.set_digit(row, col, digit);
        }
    }
}

/// Break runs of identical digits (8888, 777, and so on).
///
/// Rows are scanned left to right and columns top to bottom. A blocked
/// cell resets the run. When a run of identical digits among consecutive
/// free cells exceeds three, the offending cell is resampled with a
/// different digit and the run restarts there.
///
/// The vertical scan runs after the horizontal one, so a vertical resample
/// can in principle recreate a horizontal run. The digits are close to
/// uniform, which makes that outcome unlikely; it is not rechecked.
pub fn break_repetitions(board: &mut Board, rng: &mut impl Rng) {
    // Horizontal runs
    for row in 0..board.size {
        let mut run_digit: Option<u8> = None;
        let mut run_len: usize = 1;

        for col in 0..board.size {
            if board.is_black(row, col) {
                run_digit = None;
                run_len = 1;
                continue;
            }
            let digit: u8 = board.digit(row, col);
            if run_digit == Some(digit) {
                run_len += 1;
                if run_len > MAX_IDENTICAL_RUN {
                    let new_digit: u8 = resample_digit(digit, rng);
                    debug!("Run of {run_len} x {digit} at ({row}, {col}): now {new_digit}");
                    board.set_digit(row, col, new_digit);
                    run_digit = Some(new_digit);
                    run_len = 1;
                }
            } else {
                run_digit = Some(digit);
                run_len = 1;
            }
        }
    }

    // Vertical runs
    for col in 0..board.size {
        let mut run_digit: Option<u8> = None;
        let mut run_len: usize = 1;

        for row in 0..board.size {
            if board.is_black(row, col) {
                run_digit = None;
                run_len = 1;
                continue;
            }
            let digit: u8 = board.digit(row, col);
            if run_digit == Some(digit) {
                run_len += 1;
                if run_len > MAX_IDENTICAL_RUN {
                    let new_digit: u8 = resample_digit(digit, rng);
                    debug!("Run of {run_len} x {digit} at ({row}, {col}): now {new_digit}");
                    board.set_digit(row, col, new_digit);
                    run_digit = Some(new_digit);
                    run_len = 1;
                }
            } else {
                run_digit = Some(digit);
                run_len = 1;
            }
        }
    }
}

// Draw a digit that differs from the current run digit.
fn resample_digit(current: u8, rng: &mut impl Rng) -> u8 {
    loop {
        let digit: u8 = rng.random_range(0..=9);
        if digit != current {
            return digit;
        }
    }
}

/// Resample the first cell of every sequence that starts with 0.
///
/// Numbers never start with 0, so the head of each sequence gets a digit
/// between 1 and 9. The cell may also belong to a perpendicular sequence;
/// that sequence is not rechecked.
pub fn fix_leading_zeros(board: &mut Board, rng: &mut impl Rng) {
    for seq in sequences::find_sequences(board) {
        let (row, col) = seq.first();
        if board.digit(row, col) == 0 {
            let digit: u8 = rng.random_range(1..=9);
            debug!("Leading zero at ({row}, {col}): now {digit}");
            board.set_digit(row, col, digit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Longest run of identical digits among consecutive free cells.
    // `vertical` selects the axis to scan.
    fn longest_identical_run(board: &Board, vertical: bool) -> usize {
        let mut longest: usize = 0;
        for a in 0..board.size {
            let mut run_digit: Option<u8> = None;
            let mut run_len: usize = 0;
            for b in 0..board.size {
                let (row, col) = if vertical { (b, a) } else { (a, b) };
                if board.is_black(row, col) {
                    run_digit = None;
                    run_len = 0;
                } else if run_digit == Some(board.digit(row, col)) {
                    run_len += 1;
                } else {
                    run_digit = Some(board.digit(row, col));
                    run_len = 1;
                }
                longest = longest.max(run_len);
            }
        }
        longest
    }

    #[test]
    fn test_fill_random_uses_digits_only() {
        let mut board: Board = Board::new(15);
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        fill_random(&mut board, &mut rng);

        for row in 0..board.size {
            for col in 0..board.size {
                assert!(board.digit(row, col) <= 9);
            }
        }
    }

    #[test]
    fn test_break_repetitions_caps_vertical_runs() {
        // Worst case: the whole board holds the same digit. The vertical
        // scan runs last, so the vertical bound is unconditional; the
        // horizontal bound is only statistical on such a degenerate board.
        let mut board: Board = Board::new(15);
        board.set_black(4, 4);
        board.set_black(9, 2);
        let mut rng: StdRng = StdRng::seed_from_u64(11);

        for row in 0..board.size {
            for col in 0..board.size {
                board.set_digit(row, col, 8);
            }
        }
        break_repetitions(&mut board, &mut rng);
        assert!(longest_identical_run(&board, true) <= MAX_IDENTICAL_RUN);
    }

    #[test]
    fn test_break_repetitions_on_random_fill() {
        let mut board: Board = Board::new(15);
        let mut rng: StdRng = StdRng::seed_from_u64(23);
        fill_random(&mut board, &mut rng);
        break_repetitions(&mut board, &mut rng);
        assert!(longest_identical_run(&board, false) <= MAX_IDENTICAL_RUN);
        assert!(longest_identical_run(&board, true) <= MAX_IDENTICAL_RUN);
    }

    #[test]
    fn test_fix_leading_zeros() {
        let mut board: Board = Board::new(5);
        // Single free row starting with 0
        for row in 0..5 {
            for col in 0..5 {
                if row != 1 {
                    board.set_black(row, col);
                }
            }
        }
        board.set_digit(1, 0, 0);
        board.set_digit(1, 2, 0);

        let mut rng: StdRng = StdRng::seed_from_u64(3);
        fix_leading_zeros(&mut board, &mut rng);

        assert!(board.digit(1, 0) >= 1);
        // Only the head of the sequence is fixed
        assert_eq!(board.digit(1, 2), 0);
    }
}
