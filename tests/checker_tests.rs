use pretty_assertions::assert_eq;
use sudoq::{
    check_col, check_placement, check_region, check_row, validate, Conflict, Error, Puzzle,
};

const PUZZLE: &str =
    "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

fn puzzle() -> Puzzle {
    PUZZLE.parse().expect("sample puzzle is well-formed")
}

#[test]
fn validate_passes_through_a_well_formed_string() {
    assert_eq!(validate(PUZZLE), Ok(PUZZLE));
}

#[test]
fn validate_round_trips_through_puzzle() {
    assert_eq!(puzzle().to_string(), PUZZLE);
}

#[test]
fn validate_rejects_missing_input() {
    assert_eq!(validate(""), Err(Error::MissingField));
    assert_eq!(
        Error::MissingField.to_string(),
        "Required field(s) missing"
    );
}

#[test]
fn validate_rejects_wrong_length() {
    let input = ".2.3674.3.7.2..9.47...8..1..16....926914.";
    assert_eq!(validate(input), Err(Error::InvalidLength));
    assert_eq!(
        Error::InvalidLength.to_string(),
        "Expected puzzle to be 81 characters long"
    );
}

#[test]
fn validate_rejects_invalid_characters() {
    let input =
        "1?50.2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
    assert_eq!(validate(input), Err(Error::InvalidCharacters));
    assert_eq!(
        Error::InvalidCharacters.to_string(),
        "Invalid characters in puzzle"
    );
}

#[test]
fn validate_rejects_zero_as_placeholder() {
    let input = PUZZLE.replacen('.', "0", 1);
    assert_eq!(validate(&input), Err(Error::InvalidCharacters));
}

#[test]
fn row_placement_accepts_an_absent_value() {
    assert_eq!(check_row(&puzzle(), 'B', 5), Ok(true));
}

#[test]
fn row_placement_rejects_a_present_value() {
    assert_eq!(check_row(&puzzle(), 'A', 5), Ok(false));
}

#[test]
fn row_letters_are_case_insensitive() {
    assert_eq!(check_row(&puzzle(), 'b', 5), Ok(true));
    assert_eq!(check_row(&puzzle(), 'a', 5), Ok(false));
}

#[test]
fn row_placement_rejects_an_unknown_row() {
    assert_eq!(check_row(&puzzle(), 'P', 5), Err(Error::InvalidCoordinate));
    assert_eq!(Error::InvalidCoordinate.to_string(), "Invalid coordinate");
}

#[test]
fn col_placement_accepts_an_absent_value() {
    assert_eq!(check_col(&puzzle(), 4, 4), Ok(true));
}

#[test]
fn col_placement_rejects_a_present_value() {
    assert_eq!(check_col(&puzzle(), 1, 1), Ok(false));
}

#[test]
fn col_placement_rejects_out_of_range_columns() {
    assert_eq!(check_col(&puzzle(), 0, 5), Err(Error::InvalidCoordinate));
    assert_eq!(check_col(&puzzle(), 10, 5), Err(Error::InvalidCoordinate));
}

#[test]
fn region_placement_accepts_an_absent_value() {
    assert_eq!(check_region(&puzzle(), 'C', 1, 7), Ok(true));
}

#[test]
fn region_placement_rejects_a_present_value() {
    assert_eq!(check_region(&puzzle(), 'C', 1, 1), Ok(false));
}

// Rows D-F form the middle band. F2 sits in the middle-left region,
// which holds an 8 at E1; the bottom-left region does not.
#[test]
fn region_bands_split_at_rows_d_and_g() {
    assert_eq!(check_region(&puzzle(), 'F', 2, 8), Ok(false));
    assert_eq!(check_region(&puzzle(), 'G', 1, 2), Ok(false));
    assert_eq!(check_region(&puzzle(), 'G', 1, 5), Ok(true));
}

#[test]
fn region_placement_rejects_bad_coordinates() {
    assert_eq!(
        check_region(&puzzle(), 'Z', 1, 7),
        Err(Error::InvalidCoordinate)
    );
    assert_eq!(
        check_region(&puzzle(), 'C', 0, 7),
        Err(Error::InvalidCoordinate)
    );
}

#[test]
fn placement_with_no_conflicts_is_valid() {
    let result = check_placement(&puzzle(), 'C', 1, 7).unwrap();
    assert!(result.valid);
    assert_eq!(result.conflicts, vec![]);
}

#[test]
fn placement_with_row_conflict() {
    let result = check_placement(&puzzle(), 'E', 2, 4).unwrap();
    assert!(!result.valid);
    assert_eq!(result.conflicts, vec![Conflict::Row]);
}

#[test]
fn placement_with_column_conflict() {
    let result = check_placement(&puzzle(), 'F', 2, 6).unwrap();
    assert!(!result.valid);
    assert_eq!(result.conflicts, vec![Conflict::Column]);
}

#[test]
fn placement_with_region_conflict() {
    let result = check_placement(&puzzle(), 'D', 3, 3).unwrap();
    assert!(!result.valid);
    assert_eq!(result.conflicts, vec![Conflict::Region]);
}

#[test]
fn placement_with_row_and_column_conflicts() {
    let result = check_placement(&puzzle(), 'D', 1, 1).unwrap();
    assert!(!result.valid);
    assert_eq!(result.conflicts, vec![Conflict::Row, Conflict::Column]);
}

#[test]
fn placement_with_row_and_region_conflicts() {
    let result = check_placement(&puzzle(), 'D', 1, 9).unwrap();
    assert!(!result.valid);
    assert_eq!(result.conflicts, vec![Conflict::Row, Conflict::Region]);
}

#[test]
fn placement_with_column_and_region_conflicts() {
    let result = check_placement(&puzzle(), 'D', 1, 2).unwrap();
    assert!(!result.valid);
    assert_eq!(result.conflicts, vec![Conflict::Column, Conflict::Region]);
}

#[test]
fn placement_with_all_three_conflicts() {
    let result = check_placement(&puzzle(), 'E', 2, 7).unwrap();
    assert!(!result.valid);
    assert_eq!(
        result.conflicts,
        vec![Conflict::Row, Conflict::Column, Conflict::Region]
    );
}
