/*
numbers.rs

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

//! Extract the numbers embedded in the board.
//!
//! Each sequence of 2 to 7 cells yields one number: the digit string read
//! from its cells in order. The numbers are grouped by digit count, so the
//! player gets one list per number length to place in the grid.

use std::collections::BTreeMap;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::board::Board;
use super::sequences;

/// Shortest number length collected.
pub const MIN_NUMBER_LEN: usize = 2;

/// Longest number length collected.
pub const MAX_NUMBER_LEN: usize = 7;

/// Largest number of distinct numbers kept per length.
const MAX_PER_LENGTH: usize = 15;

/// Collect the embedded numbers, grouped by digit count.
///
/// Duplicates are dropped, keeping the first occurrence. When a length
/// holds more than fifteen distinct numbers, a random sample of fifteen of
/// them is kept.
pub fn extract(board: &Board, rng: &mut impl Rng) -> BTreeMap<usize, Vec<String>> {
    let mut buckets: BTreeMap<usize, Vec<String>> = (MIN_NUMBER_LEN..=MAX_NUMBER_LEN)
        .map(|len| (len, Vec::new()))
        .collect();

    for seq in sequences::find_sequences(board) {
        if let Some(bucket) = buckets.get_mut(&seq.len()) {
            let number: String = seq
                .cells
                .iter()
                .map(|&(row, col)| board.digit(row, col).to_string())
                .collect();

            // Numbers never start with 0. The leading-zero fix normally
            // guarantees this; skip defensively anyway.
            if number.starts_with('0') {
                debug!("Skipping number {number} with a leading zero");
                continue;
            }
            if !bucket.contains(&number) {
                bucket.push(number);
            }
        }
    }

    for (len, bucket) in buckets.iter_mut() {
        if bucket.len() > MAX_PER_LENGTH {
            debug!(
                "Keeping {MAX_PER_LENGTH} of the {} numbers with {len} digits",
                bucket.len()
            );
            let kept: Vec<String> = bucket.choose_multiple(rng, MAX_PER_LENGTH).cloned().collect();
            *bucket = kept;
        }
    }
    buckets
}
