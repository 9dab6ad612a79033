use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::puzzle::{row_start, Digit, Puzzle, SIDE};

/// Constraint kind violated by a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conflict {
    Row,
    Column,
    Region,
}

impl Display for Conflict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Conflict::Row => "row",
            Conflict::Column => "column",
            Conflict::Region => "region",
        })
    }
}

/// Aggregate verdict for one candidate at one cell. `conflicts` is empty
/// exactly when `valid` is true, and lists the violated kinds in
/// row, column, region order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<Conflict>,
}

fn digit_byte(value: Digit) -> u8 {
    b'0' + value
}

/// True iff `value` does not already occur among the 9 cells of `row`.
/// The target cell itself is included in the scan, so a cell's own
/// pre-existing value counts as a conflict.
pub fn check_row(puzzle: &Puzzle, row: char, value: Digit) -> Result<bool> {
    let start = row_start(row)?;
    Ok(!puzzle.row(start).contains(&digit_byte(value)))
}

/// True iff `value` does not occur among the 9 cells of `column` (1-9).
pub fn check_col(puzzle: &Puzzle, column: u8, value: Digit) -> Result<bool> {
    if !(1..=9).contains(&column) {
        return Err(Error::InvalidCoordinate);
    }
    let first = column as usize - 1;
    let target = digit_byte(value);
    Ok(!(0..SIDE).any(|r| puzzle.cell(first + r * SIDE) == target))
}

/// True iff `value` does not occur among the 9 cells of the 3x3 region
/// containing (`row`, `column`). Region membership is band arithmetic:
/// rows A-C/D-F/G-I by thirds, columns likewise.
pub fn check_region(puzzle: &Puzzle, row: char, column: u8, value: Digit) -> Result<bool> {
    if !(1..=9).contains(&column) {
        return Err(Error::InvalidCoordinate);
    }
    let row_band = row_start(row)? / (SIDE * 3);
    let col_band = (column as usize - 1) / 3;
    let start = row_band * SIDE * 3 + col_band * 3;
    let target = digit_byte(value);
    // Three 3-cell row slices at start, start+9, start+18.
    Ok(!(0..3).any(|r| {
        let off = start + r * SIDE;
        (0..3).any(|c| puzzle.cell(off + c) == target)
    }))
}

/// Runs the row, column, and region checks and aggregates the verdict.
/// Pure; never mutates the puzzle.
pub fn check_placement(puzzle: &Puzzle, row: char, column: u8, value: Digit) -> Result<Placement> {
    let row_ok = check_row(puzzle, row, value)?;
    let col_ok = check_col(puzzle, column, value)?;
    let region_ok = check_region(puzzle, row, column, value)?;

    let mut conflicts = Vec::new();
    if !row_ok {
        conflicts.push(Conflict::Row);
    }
    if !col_ok {
        conflicts.push(Conflict::Column);
    }
    if !region_ok {
        conflicts.push(Conflict::Region);
    }

    Ok(Placement {
        valid: conflicts.is_empty(),
        conflicts,
    })
}
