/*
session.rs

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

//! Keep track of the most recently generated puzzle.
//!
//! Callers that expose a "current puzzle" view read the snapshot from
//! here. An empty session means that no puzzle has been generated yet;
//! that is a regular state, not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generator::puzzle::PuzzleResult;

/// Snapshot of the last generated puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurrentPuzzle {
    /// Full solution grid.
    pub grid: Vec<Vec<u8>>,

    /// Blocked cells as (row, column) pairs.
    pub black_cells: Vec<(usize, usize)>,

    /// When the puzzle was generated.
    pub generated_at: DateTime<Utc>,
}

/// Hold the most recently generated puzzle.
#[derive(Debug, Default)]
pub struct Session {
    /// Latest snapshot, or [`None`] before the first generation.
    current: Option<CurrentPuzzle>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Record the given result as the current puzzle.
    pub fn set_result(&mut self, result: &PuzzleResult) {
        self.current = Some(CurrentPuzzle {
            grid: result.solution_grid.clone(),
            black_cells: result.black_cells.clone(),
            generated_at: Utc::now(),
        });
    }

    /// The current puzzle, or [`None`] if no puzzle has been generated
    /// yet.
    pub fn current(&self) -> Option<&CurrentPuzzle> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::puzzle::PuzzleGenerator;

    #[test]
    fn test_empty_session_has_no_puzzle() {
        let session: Session = Session::new();
        assert!(session.current().is_none());
    }

    #[test]
    fn test_session_holds_the_latest_result() {
        let mut generator: PuzzleGenerator = PuzzleGenerator::with_seed(8);
        let mut session: Session = Session::new();

        let first = generator.generate();
        session.set_result(&first);
        let second = generator.generate();
        session.set_result(&second);

        let current: &CurrentPuzzle = session.current().expect("No current puzzle");
        assert_eq!(current.grid, second.solution_grid);
        assert_eq!(current.black_cells, second.black_cells);
    }
}
