//! Contract tests for the solve and check request/response pairs.
use serde_json::{json, Value};
use sudoku_check::api::{check, solve, CheckRequest, SolveRequest};

const PUZZLE: &str =
    "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
const SOLUTION: &str =
    "135762984946381257728459613694517832812936745357824196473298561581673429269145378";

fn solve_json(puzzle: Option<&str>) -> Value {
    let request = SolveRequest {
        puzzle: puzzle.map(str::to_string),
    };
    serde_json::to_value(solve(&request)).unwrap()
}

fn check_json(puzzle: Option<&str>, coordinate: Option<&str>, value: Option<&str>) -> Value {
    let request = CheckRequest {
        puzzle: puzzle.map(str::to_string),
        coordinate: coordinate.map(str::to_string),
        value: value.map(str::to_string),
    };
    serde_json::to_value(check(&request)).unwrap()
}

#[test]
fn solve_with_valid_puzzle() {
    assert_eq!(solve_json(Some(PUZZLE)), json!({ "solution": SOLUTION }));
}

#[test]
fn solve_with_missing_puzzle() {
    assert_eq!(solve_json(None), json!({ "error": "Required field missing" }));
}

#[test]
fn solve_with_invalid_characters() {
    let input =
        "ab5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
    assert_eq!(
        solve_json(Some(input)),
        json!({ "error": "Invalid characters in puzzle" })
    );
}

#[test]
fn solve_with_incorrect_length() {
    assert_eq!(
        solve_json(Some("8.2.3674.3.7.2..9.47...8..1..16....926914.37.")),
        json!({ "error": "Expected puzzle to be 81 characters long" })
    );
}

#[test]
fn solve_with_unsolvable_puzzle() {
    let input =
        "115..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
    assert_eq!(
        solve_json(Some(input)),
        json!({ "error": "Puzzle cannot be solved" })
    );
}

#[test]
fn check_with_valid_placement() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("A2"), Some("3")),
        json!({ "valid": true })
    );
}

#[test]
fn check_with_single_conflict() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("A2"), Some("8")),
        json!({ "valid": false, "conflict": ["row"] })
    );
}

#[test]
fn check_with_multiple_conflicts() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("A2"), Some("6")),
        json!({ "valid": false, "conflict": ["column", "region"] })
    );
}

#[test]
fn check_with_all_conflicts() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("A2"), Some("2")),
        json!({ "valid": false, "conflict": ["row", "column", "region"] })
    );
}

#[test]
fn check_existing_value_against_itself() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("A1"), Some("1")),
        json!({ "valid": true })
    );
}

#[test]
fn check_with_missing_fields() {
    let expected = json!({ "error": "Required field(s) missing" });
    assert_eq!(check_json(None, Some("A2"), Some("3")), expected);
    assert_eq!(check_json(Some(PUZZLE), None, Some("3")), expected);
    assert_eq!(check_json(Some(PUZZLE), Some("A2"), None), expected);
    assert_eq!(check_json(None, None, None), expected);
}

#[test]
fn check_with_invalid_characters() {
    let input =
        "ab5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
    assert_eq!(
        check_json(Some(input), Some("A2"), Some("3")),
        json!({ "error": "Invalid characters in puzzle" })
    );
}

#[test]
fn check_with_incorrect_length() {
    assert_eq!(
        check_json(Some("8.2.3674.3.7.2..9.47...8..1..16....926914.37."), Some("A2"), Some("3")),
        json!({ "error": "Expected puzzle to be 81 characters long" })
    );
}

#[test]
fn check_with_invalid_coordinate() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("XZ18"), Some("3")),
        json!({ "error": "Invalid coordinate" })
    );
}

#[test]
fn check_with_invalid_value() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("A2"), Some("15")),
        json!({ "error": "Invalid value" })
    );
}

#[test]
fn check_validation_order() {
    // puzzle errors win over coordinate and value errors
    assert_eq!(
        check_json(Some("1.5..x.84"), Some("XZ18"), Some("15")),
        json!({ "error": "Invalid characters in puzzle" })
    );
    // coordinate errors win over value errors
    assert_eq!(
        check_json(Some(PUZZLE), Some("XZ18"), Some("15")),
        json!({ "error": "Invalid coordinate" })
    );
}

#[test]
fn requests_deserialize_from_json_bodies() {
    let request: SolveRequest = serde_json::from_value(json!({ "puzzle": PUZZLE })).unwrap();
    assert_eq!(request.puzzle.as_deref(), Some(PUZZLE));

    let request: CheckRequest =
        serde_json::from_value(json!({ "puzzle": PUZZLE, "coordinate": "A2", "value": "3" }))
            .unwrap();
    assert_eq!(request.coordinate.as_deref(), Some("A2"));

    // absent fields deserialize to None instead of failing
    let request: CheckRequest = serde_json::from_value(json!({})).unwrap();
    assert!(request.puzzle.is_none() && request.coordinate.is_none() && request.value.is_none());
}
