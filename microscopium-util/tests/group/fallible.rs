//! Errors from key and transform functions reach the caller unchanged.

use std::collections::HashMap;
use std::num::ParseIntError;

use microscopium_util::try_group_by_with;

#[derive(Debug, PartialEq)]
enum SampleError {
    MissingPlate(String),
    BadWell(ParseIntError),
}

fn plate_of(name: &&str) -> Result<String, SampleError> {
    name.split_once('-')
        .map(|(plate, _)| plate.to_string())
        .ok_or_else(|| SampleError::MissingPlate(name.to_string()))
}

fn well_of(name: &str) -> Result<u32, SampleError> {
    let (_, well) = name.split_once('-').unwrap_or((name, ""));
    well.parse().map_err(SampleError::BadWell)
}

#[test]
fn test_success_collects_all() {
    let names = ["p1-3", "p2-7", "p1-12"];
    let grouped = try_group_by_with(plate_of, names, well_of).unwrap();

    assert_eq!(grouped["p1"], vec![3, 12]);
    assert_eq!(grouped["p2"], vec![7]);
}

#[test]
fn test_key_error_is_returned_verbatim() {
    let names = ["p1-3", "orphan", "p2-7"];
    let result = try_group_by_with(plate_of, names, well_of);

    assert_eq!(
        result,
        Err(SampleError::MissingPlate("orphan".to_string()))
    );
}

#[test]
fn test_transform_error_is_returned_verbatim() {
    let names = ["p1-3", "p1-x"];
    let result: Result<HashMap<String, Vec<u32>>, SampleError> =
        try_group_by_with(plate_of, names, well_of);

    let expected = "x".parse::<u32>().unwrap_err();
    assert_eq!(result, Err(SampleError::BadWell(expected)));
}

#[test]
fn test_stops_consuming_after_error() {
    let mut consumed = 0;
    let input = (0..10).inspect(|_| consumed += 1);
    let result = try_group_by_with(
        |x: &i32| if *x < 4 { Ok(*x % 2) } else { Err(*x) },
        input,
        Ok::<i32, i32>,
    );

    assert_eq!(result, Err(4));
    assert_eq!(consumed, 5);
}
