/*
cli_options.rs

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

//! Process command-line options.
//!
//! Numkudo generates cross-number puzzles and prints them as JSON, one
//! document per puzzle. Front ends consume these documents as-is: the
//! solution grid, the player-facing grid, the blocked cells, the numbers
//! grouped by length, and the revealed cells.
//!
//! # Examples
//!
//! Generate one puzzle:
//!
//! ```
//! $ numkudo
//! {"solution_grid":[[8,3,1,...]],"puzzle_grid":[["","","BLACK",...]],...}
//! ```
//!
//! Generate three reproducible puzzles and print some statistics:
//!
//! ```
//! $ numkudo -c 3 --seed 42 -s
//! ...
//!
//!   total time = 0.00094s
//! average time = 0.00031s
//!     max time = 0.00052s
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::time::Instant;

use crate::generator::puzzle::{DEFAULT_SIZE, GeneratorError, PuzzleGenerator, PuzzleResult};
use crate::session::Session;

/// Generate cross-number puzzles and print them as JSON.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for the random source, for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rows and columns in the grid
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Pretty-print the JSON documents
    #[arg(short, long, default_value_t = false)]
    pretty: bool,

    /// Print the current puzzle snapshot (solution grid and blocked cells)
    /// after the last generation
    #[arg(long, default_value_t = false)]
    current: bool,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse the command-line options and generate the requested puzzles.
///
/// The returned value is the process exit status.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut generator: PuzzleGenerator = match build_generator(&args) {
        Ok(g) => g,
        Err(GeneratorError::InvalidSize) => {
            eprintln!(
                "Invalid grid size {}: the grid must hold at least one two-cell number.",
                args.size
            );
            return 1;
        }
    };

    debug!("Grid size: {}", generator.size());

    let mut session: Session = Session::new();
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;

    for i in 0..args.count {
        debug!("Generating puzzle {i}");
        let start: Instant = Instant::now();
        let result: PuzzleResult = generator.generate();
        let duration: f32 = start.elapsed().as_secs_f32();
        total += duration;
        if duration > max {
            max = duration;
        }

        let document: Result<String, serde_json::Error> = if args.pretty {
            serde_json::to_string_pretty(&result)
        } else {
            serde_json::to_string(&result)
        };
        match document {
            Ok(document) => println!("{document}"),
            Err(error) => {
                eprintln!("Cannot serialize the puzzle: {error}");
                return 1;
            }
        }
        session.set_result(&result);
    }

    if args.current {
        match session.current() {
            Some(current) => match serde_json::to_string(current) {
                Ok(document) => println!("{document}"),
                Err(error) => {
                    eprintln!("Cannot serialize the current puzzle: {error}");
                    return 1;
                }
            },
            None => eprintln!("No puzzle has been generated yet."),
        }
    }

    if args.summary && args.count > 0 {
        println!(
            "
  total time = {}s
average time = {}s
    max time = {}s",
            total,
            total / args.count as f32,
            max
        );
    }
    0
}

// Build the generator from the size and seed options.
fn build_generator(args: &Args) -> Result<PuzzleGenerator, GeneratorError> {
    match args.seed {
        Some(seed) => PuzzleGenerator::with_size_and_seed(args.size, seed),
        None => PuzzleGenerator::with_size(args.size),
    }
}
