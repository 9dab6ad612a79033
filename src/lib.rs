pub mod api;
pub mod checker;
pub mod error;
pub mod puzzle;
pub mod solver;

pub use checker::{check_col, check_placement, check_region, check_row, Conflict, Placement};
pub use error::Error;
pub use puzzle::{validate, Digit, Puzzle};
pub use solver::{SearchStats, Solver};
