//! Tests for cross-benchmark ranking.

use perfcmp::compare::compare;
use perfcmp::{Comparator, MeasurementSummary, StatisticKind, Statistics};

fn summary_with_average(name: &str, average: f64) -> MeasurementSummary {
    MeasurementSummary {
        test_name: name.to_string(),
        statistics: Statistics {
            average,
            ..Statistics::default()
        },
        operation_count: 10,
        ops_per_sec: 10.0,
    }
}

fn summary(name: &str, samples: &[f64]) -> MeasurementSummary {
    MeasurementSummary::from_samples(name, samples, None, 10.0).unwrap()
}

#[test]
fn twice_as_slow_reports_one_hundred_percent() {
    let cmp = compare(&[summary_with_average("A", 5.0), summary_with_average("B", 10.0)]);
    let rows = cmp.get(StatisticKind::Average).unwrap();

    assert_eq!(rows[0].test_name, "A");
    assert_eq!(rows[0].value, 5.0);
    assert!(rows[0].is_fastest);
    assert_eq!(rows[0].percent_slower_than_fastest, 0.0);

    assert_eq!(rows[1].test_name, "B");
    assert_eq!(rows[1].percent_slower_than_fastest, 100.0);
    assert!(rows[1].is_slowest);
}

#[test]
fn distinct_values_flag_exactly_one_each() {
    let cmp = compare(&[
        summary("c", &[3.0, 3.1, 3.2]),
        summary("a", &[1.0, 1.1, 1.2]),
        summary("d", &[4.0, 4.1, 4.2]),
        summary("b", &[2.0, 2.1, 2.2]),
    ]);

    for (kind, rows) in cmp.iter() {
        assert_eq!(rows.len(), 4, "{}", kind);
        assert_eq!(rows.iter().filter(|r| r.is_fastest).count(), 1, "{}", kind);
        assert_eq!(rows.iter().filter(|r| r.is_slowest).count(), 1, "{}", kind);
        assert!(rows.windows(2).all(|w| w[0].value <= w[1].value), "{}", kind);
        assert_eq!(rows[0].test_name, "a");
        assert_eq!(rows[0].percent_slower_than_fastest, 0.0);
        assert_eq!(rows[3].test_name, "d");
    }
}

#[test]
fn equal_values_flag_nothing() {
    let cmp = compare(&[
        summary_with_average("A", 7.0),
        summary_with_average("B", 7.0),
    ]);
    let rows = cmp.get(StatisticKind::Average).unwrap();
    assert!(rows.iter().all(|r| !r.is_fastest && !r.is_slowest));
    assert!(rows.iter().all(|r| r.percent_slower_than_fastest == 0.0));
}

#[test]
fn zero_values_report_zero_percent() {
    // Every kind but average is zero for these summaries.
    let cmp = compare(&[
        summary_with_average("A", 1.0),
        summary_with_average("B", 2.0),
    ]);
    let rows = cmp.get(StatisticKind::Median).unwrap();
    assert!(rows.iter().all(|r| r.value == 0.0));
    assert!(rows.iter().all(|r| r.percent_slower_than_fastest == 0.0));
    assert!(cmp.fastest(StatisticKind::Median).is_none());
}

#[test]
fn ties_for_fastest_keep_input_order() {
    let cmp = compare(&[
        summary_with_average("first", 1.0),
        summary_with_average("second", 1.0),
        summary_with_average("third", 4.0),
    ]);
    let rows = cmp.get(StatisticKind::Average).unwrap();
    assert_eq!(rows[0].test_name, "first");
    assert!(rows[0].is_fastest);
    assert!(!rows[1].is_fastest);
    assert_eq!(rows[1].percent_slower_than_fastest, 0.0);
    assert_eq!(rows[2].percent_slower_than_fastest, 300.0);
}

#[test]
fn comparison_is_recomputed_on_each_call() {
    let mut comparator = Comparator::new();
    comparator.add(summary_with_average("A", 2.0));
    assert!(comparator.compare().fastest(StatisticKind::Average).is_none());

    comparator.add(summary_with_average("B", 3.0));
    let cmp = comparator.compare();
    assert_eq!(cmp.fastest(StatisticKind::Average).unwrap().test_name, "A");
    assert_eq!(
        cmp.row(StatisticKind::Average, "B")
            .unwrap()
            .percent_slower_than_fastest,
        50.0
    );
}
