//! Golden file integration tests.
//!
//! Verifies that every computation path produces correct results against
//! known values from tests/testdata/fibonacci_golden.json. Exact literals
//! for n <= 1000; prefix and digit-count checks above that.

use std::str::FromStr;

use num_bigint::BigUint;
use serde::Deserialize;

use fibexact::engine::FibEngine;
use fibexact::index::Index;
use fibexact::iterator::fib_linear;
use fibexact::{fastdoubling, matrix};

#[derive(Deserialize)]
struct GoldenData {
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: u64,
    fib: Option<String>,
    fib_prefix: Option<String>,
    fib_digits: Option<usize>,
}

fn load_golden() -> GoldenData {
    let data = std::fs::read_to_string("tests/testdata/fibonacci_golden.json")
        .expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

#[test]
fn golden_engine_exact() {
    let golden = load_golden();
    let engine = FibEngine::new();

    for entry in &golden.values {
        if let Some(ref expected) = entry.fib {
            let expected_val = BigUint::from_str(expected).unwrap();
            assert_eq!(
                engine.compute(entry.n),
                expected_val,
                "FibEngine F({}) mismatch",
                entry.n
            );
        }
    }
}

#[test]
fn golden_doubling_loop_exact() {
    let golden = load_golden();

    for entry in &golden.values {
        if let Some(ref expected) = entry.fib {
            let expected_val = BigUint::from_str(expected).unwrap();
            assert_eq!(
                fastdoubling::fib(Index::new(entry.n)),
                expected_val,
                "fastdoubling F({}) mismatch",
                entry.n
            );
        }
    }
}

#[test]
fn golden_matrix_exact() {
    let golden = load_golden();

    for entry in &golden.values {
        if let Some(ref expected) = entry.fib {
            let expected_val = BigUint::from_str(expected).unwrap();
            assert_eq!(
                matrix::fib(Index::new(entry.n)),
                expected_val,
                "matrix F({}) mismatch",
                entry.n
            );
        }
    }
}

#[test]
fn golden_prefix_and_digits() {
    let golden = load_golden();
    let engine = FibEngine::new();

    for entry in &golden.values {
        if entry.fib_prefix.is_none() && entry.fib_digits.is_none() {
            continue;
        }
        let result_str = engine.compute(entry.n).to_string();
        if let Some(ref expected_prefix) = entry.fib_prefix {
            assert!(
                result_str.starts_with(expected_prefix),
                "F({}) prefix mismatch: expected starts_with {}, got {}...",
                entry.n,
                expected_prefix,
                &result_str[..expected_prefix.len().min(result_str.len())]
            );
        }
        if let Some(expected_digits) = entry.fib_digits {
            assert_eq!(
                result_str.len(),
                expected_digits,
                "F({}) digit count mismatch",
                entry.n
            );
        }
    }
}

#[test]
fn golden_cross_path_consistency() {
    let golden = load_golden();
    let engine = FibEngine::new();

    for entry in &golden.values {
        if entry.fib.is_none() {
            continue;
        }
        let from_engine = engine.compute(entry.n);
        let from_loop = fastdoubling::fib(Index::new(entry.n));
        let from_matrix = matrix::fib(Index::new(entry.n));

        assert_eq!(from_engine, from_loop, "F({}) engine != loop", entry.n);
        assert_eq!(from_engine, from_matrix, "F({}) engine != matrix", entry.n);
        if entry.n <= 1000 {
            assert_eq!(
                from_engine,
                fib_linear(Index::new(entry.n)),
                "F({}) engine != linear",
                entry.n
            );
        }
    }
}

#[test]
fn invalid_indices_rejected() {
    assert!(Index::try_from(-1i64).is_err());
    assert!(Index::try_from(1.5f64).is_err());
    assert!(Index::from_str("-7").is_err());
}
