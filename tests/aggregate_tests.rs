use betti_summary::aggregate::{aggregate, average, Aggregate};
use betti_summary::source::MemorySource;
use betti_summary::{BettiError, BettiVector};
use proptest::prelude::*;
use std::path::PathBuf;

fn source_with(contents: &[&str]) -> (MemorySource, Vec<PathBuf>) {
    let mut src = MemorySource::new();
    let mut paths = Vec::new();
    for (i, text) in contents.iter().enumerate() {
        let p = PathBuf::from(format!("analysis/10/{}.txt_betti.txt", i));
        src.insert(p.clone(), *text);
        paths.push(p);
    }
    (src, paths)
}

#[test]
fn test_sums_two_files() {
    let (src, paths) = source_with(&["1 2 3", "4 5 6"]);
    let agg = aggregate(&src, &paths, false).unwrap();
    assert_eq!(agg.totals, vec![5, 7, 9]);
    assert_eq!(agg.files, 2);
}

#[test]
fn test_average_of_identical_files() {
    let (src, paths) = source_with(&["2 4\n", "2 4\n"]);
    let agg = aggregate(&src, &paths, false).unwrap();
    assert_eq!(average(&agg, 2).unwrap(), vec![2.0, 4.0]);
    assert_eq!(agg.mean().unwrap(), vec![2.0, 4.0]);
}

#[test]
fn test_average_with_zero_count_is_none() {
    let agg = Aggregate::new();
    assert!(average(&agg, 0).is_none());
    assert!(agg.mean().is_none());
}

#[test]
fn test_longer_vector_grows_aggregate() {
    let (src, paths) = source_with(&["1 1", "1 1 5 2"]);
    let agg = aggregate(&src, &paths, false).unwrap();
    assert_eq!(agg.totals, vec![2, 2, 5, 2]);
}

#[test]
fn test_shorter_vector_leaves_tail_untouched() {
    let (src, paths) = source_with(&["1 1 1", "1"]);
    let agg = aggregate(&src, &paths, false).unwrap();
    assert_eq!(agg.totals, vec![2, 1, 1]);
}

#[test]
fn test_strict_dims_rejects_mismatch() {
    let (src, paths) = source_with(&["1 1", "1 1 5"]);
    match aggregate(&src, &paths, true) {
        Err(BettiError::DimensionMismatch {
            path,
            expected,
            found,
        }) => {
            assert_eq!(path, paths[1]);
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
        }
        other => panic!("expected dimension mismatch, got {:?}", other),
    }
}

#[test]
fn test_parse_error_names_file() {
    let (src, paths) = source_with(&["1 2", "1 two"]);
    match aggregate(&src, &paths, false) {
        Err(BettiError::Parse { path, token, .. }) => {
            assert_eq!(path, paths[1]);
            assert_eq!(token, "two");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_not_found() {
    let (src, mut paths) = source_with(&["1 2"]);
    paths.push(PathBuf::from("analysis/10/1.txt_betti.txt"));
    assert!(matches!(
        aggregate(&src, &paths, false),
        Err(BettiError::NotFound { .. })
    ));
}

#[test]
fn test_no_files_gives_empty_aggregate() {
    let src = MemorySource::new();
    let agg = aggregate(&src, &[], false).unwrap();
    assert!(agg.is_empty());
    assert_eq!(agg.files, 0);
}

#[test]
fn test_sum_from_vectors() {
    let vs = [BettiVector(vec![1, 0]), BettiVector(vec![2, 3, 4])];
    let agg = Aggregate::try_from_vectors(&vs).unwrap();
    assert_eq!(agg.totals, vec![3, 3, 4]);
    assert_eq!(agg.files, 2);
}

#[test]
fn test_overflowing_total_is_an_error() {
    let (src, paths) = source_with(&["18446744073709551615 1", "1 1"]);
    match aggregate(&src, &paths, false) {
        Err(BettiError::Overflow { path, dimension }) => {
            assert_eq!(path, paths[1]);
            assert_eq!(dimension, 0);
        }
        other => panic!("expected overflow, got {:?}", other),
    }
}

#[test]
fn test_overflow_leaves_aggregate_unchanged() {
    let mut agg = Aggregate::try_from_vectors(&[BettiVector(vec![1, u64::MAX])]).unwrap();
    assert_eq!(agg.add(&BettiVector(vec![5, 1, 7])), Err(1));
    assert_eq!(agg.totals, vec![1, u64::MAX]);
    assert_eq!(agg.files, 1);
}

prop_compose! {
    fn arb_vectors()(
        dims in 1usize..6,
    )(
        rows in proptest::collection::vec(
            proptest::collection::vec(0u64..100_000, dims),
            1..20,
        )
    ) -> Vec<Vec<u64>> {
        rows
    }
}

fn render(row: &[u64]) -> String {
    row.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_totals_are_columnwise_sums(rows in arb_vectors()) {
        let texts: Vec<String> = rows.iter().map(|r| render(r)).collect();
        let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
        let (src, paths) = source_with(&refs);

        let agg = aggregate(&src, &paths, true).unwrap();
        for k in 0..rows[0].len() {
            let expected: u64 = rows.iter().map(|r| r[k]).sum();
            prop_assert_eq!(agg.totals[k], expected);
        }

        // Same inputs, same answer.
        let again = aggregate(&src, &paths, true).unwrap();
        prop_assert_eq!(&agg, &again);
    }

    #[test]
    fn test_average_divides_each_total(rows in arb_vectors(), count in 1usize..50) {
        let vs: Vec<BettiVector> = rows.into_iter().map(BettiVector).collect();
        let agg = Aggregate::try_from_vectors(&vs).unwrap();
        let avg = average(&agg, count).unwrap();
        prop_assert_eq!(avg.len(), agg.len());
        for (a, &t) in avg.iter().zip(&agg.totals) {
            prop_assert_eq!(*a, t as f64 / count as f64);
        }
    }
}
