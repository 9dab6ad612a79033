//! Transport-agnostic boundary for the two service call shapes. An HTTP
//! layer mounts these handlers as-is; the wire shapes and error strings
//! are part of the service contract.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::checker::{self, Placement};
use crate::error::{Error, Result};
use crate::puzzle::{Digit, Puzzle};
use crate::solver::Solver;

/// Body of a solve call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolveRequest {
    pub puzzle: Option<String>,
}

/// Body of a check call. Fields stay optional so presence is checked by
/// the handler in contract order, not by deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckRequest {
    pub puzzle: Option<String>,
    pub coordinate: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub solution: String,
}

/// Wire shape shared by both endpoints: the payload on success, otherwise
/// `{ "error": <message> }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply<T> {
    Ok(T),
    Err { error: String },
}

impl<T> From<Result<T>> for Reply<T> {
    fn from(res: Result<T>) -> Self {
        match res {
            Ok(payload) => Reply::Ok(payload),
            Err(err) => Reply::Err {
                error: err.to_string(),
            },
        }
    }
}

pub fn solve(req: &SolveRequest) -> Reply<Solution> {
    let outcome = try_solve(req);
    if let Err(err) = &outcome {
        warn!("solve request rejected: {err}");
    }
    outcome.into()
}

fn try_solve(req: &SolveRequest) -> Result<Solution> {
    let puzzle = req
        .puzzle
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingField)?;
    let solved = Solver::new().solve(puzzle)?;
    Ok(Solution {
        solution: solved.to_string(),
    })
}

pub fn check(req: &CheckRequest) -> Reply<Placement> {
    let outcome = try_check(req);
    if let Err(err) = &outcome {
        warn!("check request rejected: {err}");
    }
    outcome.into()
}

// Contract order: field presence, coordinate syntax, value syntax, puzzle
// validation, then the placement check itself.
fn try_check(req: &CheckRequest) -> Result<Placement> {
    let (puzzle, coordinate, value) = match (&req.puzzle, &req.coordinate, &req.value) {
        (Some(p), Some(c), Some(v)) if !p.is_empty() && !c.is_empty() && !v.is_empty() => (p, c, v),
        _ => return Err(Error::MissingField),
    };
    let (row, column) = parse_coordinate(coordinate)?;
    let value = parse_value(value)?;
    let puzzle: Puzzle = puzzle.parse()?;
    checker::check_placement(&puzzle, row, column, value)
}

// Exactly two characters, row letter then column digit. Row letter
// validity is the checker's call; a column outside 1-9 is rejected here.
fn parse_coordinate(coordinate: &str) -> Result<(char, u8)> {
    let mut chars = coordinate.chars();
    let (row, col) = match (chars.next(), chars.next(), chars.next()) {
        (Some(row), Some(col), None) => (row, col),
        _ => return Err(Error::InvalidCoordinate),
    };
    let column = col
        .to_digit(10)
        .filter(|d| (1..=9).contains(d))
        .ok_or(Error::InvalidCoordinate)? as u8;
    Ok((row, column))
}

fn parse_value(value: &str) -> Result<Digit> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch @ '1'..='9'), None) => Ok(ch as u8 - b'0'),
        _ => Err(Error::InvalidValue),
    }
}
