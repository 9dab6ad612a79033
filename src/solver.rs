use crate::checker;
use crate::error::{Error, Result};
use crate::puzzle::{coords_of, Puzzle, EMPTY, SIDE};

// Hard ceiling on candidate placements tried per solve. Constraint
// pruning keeps real puzzles far below this; the guard turns a
// pathological input into Unsolvable instead of a hang.
const MAX_NODES: u64 = 2_000_000;

/// Counters from one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub backtracks: u64,
}

/// Backtracking solver. Stateless; all search state is per-call.
#[derive(Debug, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Validate `input` and fill every empty cell, returning the first
    /// solution under ascending cell and candidate order, or
    /// `Unsolvable` if no complete assignment exists.
    pub fn solve(&self, input: &str) -> Result<Puzzle> {
        self.solve_with_stats(input).map(|(solved, _)| solved)
    }

    pub fn solve_with_stats(&self, input: &str) -> Result<(Puzzle, SearchStats)> {
        let puzzle: Puzzle = input.parse()?;
        let mut stats = SearchStats::default();
        if puzzle.is_complete() {
            return Ok((puzzle, stats));
        }
        // A duplicated given can never be repaired by filling empties,
        // and the per-candidate checks below never re-inspect filled
        // cells against each other.
        if !givens_consistent(&puzzle) {
            return Err(Error::Unsolvable);
        }
        match search(puzzle, 0, &mut stats)? {
            Some(solved) => Ok((solved, stats)),
            None => Err(Error::Unsolvable),
        }
    }
}

// Depth-first search over empty cells in ascending flat order. Each
// accepted candidate recurses on its own copy of the grid, so a failed
// branch is discarded whole and the parent's state never needs undoing.
// Failure unwinds to whichever ancestor still has candidates left.
fn search(puzzle: Puzzle, from: usize, stats: &mut SearchStats) -> Result<Option<Puzzle>> {
    let idx = match puzzle.first_empty_from(from) {
        Some(idx) => idx,
        None => return Ok(Some(puzzle)),
    };
    let (row, column) = coords_of(idx);
    for value in 1..=9 {
        stats.nodes += 1;
        if stats.nodes > MAX_NODES {
            return Ok(None);
        }
        if !checker::check_placement(&puzzle, row, column, value)?.valid {
            continue;
        }
        let mut child = puzzle.clone();
        child.set(idx, value);
        if let Some(solved) = search(child, idx + 1, stats)? {
            return Ok(Some(solved));
        }
        stats.backtracks += 1;
    }
    Ok(None)
}

fn unit_consistent(puzzle: &Puzzle, cells: impl Iterator<Item = usize>) -> bool {
    let mut seen = [false; 10];
    for idx in cells {
        let b = puzzle.cell(idx);
        if b == EMPTY {
            continue;
        }
        let d = (b - b'0') as usize;
        if seen[d] {
            return false;
        }
        seen[d] = true;
    }
    true
}

// No filled cell's digit repeats within its row, column, or region.
fn givens_consistent(puzzle: &Puzzle) -> bool {
    for r in 0..SIDE {
        if !unit_consistent(puzzle, (0..SIDE).map(|c| r * SIDE + c)) {
            return false;
        }
    }
    for c in 0..SIDE {
        if !unit_consistent(puzzle, (0..SIDE).map(|r| r * SIDE + c)) {
            return false;
        }
    }
    for band in 0..3 {
        for stack in 0..3 {
            let start = band * SIDE * 3 + stack * 3;
            let region = (0..3).flat_map(move |r| (0..3).map(move |c| start + r * SIDE + c));
            if !unit_consistent(puzzle, region) {
                return false;
            }
        }
    }
    true
}
