//! Worked examples for summaries and normalization.

use perfcmp::{statistics, Error, MeasurementSummary, SampleStore, StatisticKind};

fn store_with(entries: &[(&str, &[f64])]) -> SampleStore {
    let mut store = SampleStore::new();
    for (name, samples) in entries {
        for &s in *samples {
            store.record(name, s);
        }
    }
    store
}

// ============================================================================
// Raw and normalized statistics
// ============================================================================

#[test]
fn three_identical_samples() {
    let store = store_with(&[("A", &[10.0, 10.0, 10.0])]);
    let s = statistics::summarize(&store, "A", 10.0).unwrap().statistics;

    assert_eq!(s.average, 10.0);
    assert_eq!(s.median, 10.0);
    assert_eq!(s.min, 10.0);
    assert_eq!(s.max, 10.0);
    assert_eq!(s.normalized_average, 10.0);
    assert_eq!(
        statistics::normalized_samples(&store, "A", 10.0).unwrap(),
        vec![10.0, 10.0]
    );
}

#[test]
fn wide_pairs_fall_back_to_raw_population() {
    let store = store_with(&[("A", &[1.0, 100.0, 100.0, 1.0])]);
    assert_eq!(store.sorted("A").unwrap(), vec![1.0, 1.0, 100.0, 100.0]);

    let s = statistics::summarize(&store, "A", 10.0).unwrap().statistics;
    assert_eq!(s.normalized_median, 50.5);
    assert_eq!(s.normalized_average, s.average);
}

#[test]
fn one_and_two_samples_skip_normalization() {
    for samples in [&[7.0][..], &[2.0, 40.0][..]] {
        let s = MeasurementSummary::from_samples("x", samples, None, 10.0)
            .unwrap()
            .statistics;
        for (raw, normalized) in [
            (StatisticKind::Average, StatisticKind::NormalizedAverage),
            (StatisticKind::Max, StatisticKind::NormalizedMax),
            (StatisticKind::Min, StatisticKind::NormalizedMin),
            (StatisticKind::Median, StatisticKind::NormalizedMedian),
        ] {
            assert_eq!(s.get(raw), s.get(normalized), "{} vs {}", raw, normalized);
        }
    }
}

#[test]
fn tight_population_kept_whole() {
    let samples = [10.2, 10.0, 10.4, 10.1, 10.3, 10.5];
    let store = store_with(&[("A", &samples)]);
    assert_eq!(
        statistics::normalized_samples(&store, "A", 10.0).unwrap(),
        store.sorted("A").unwrap()
    );
}

#[test]
fn warmup_spike_is_discarded() {
    // One slow first invocation and one suspiciously fast one pair up and drop out.
    let samples = [250.0, 10.0, 10.2, 9.9, 10.1, 0.5];
    let s = MeasurementSummary::from_samples("jit", &samples, None, 10.0)
        .unwrap()
        .statistics;

    assert_eq!(s.min, 0.5);
    assert_eq!(s.max, 250.0);
    assert_eq!(s.normalized_min, 9.9);
    assert_eq!(s.normalized_max, 10.2);
    assert!(s.normalized_min >= s.min && s.normalized_max <= s.max);
}

#[test]
fn threshold_widens_population() {
    let samples = [5.0, 9.5, 9.6, 10.0];
    let strict = MeasurementSummary::from_samples("x", &samples, None, 10.0).unwrap();
    let loose = MeasurementSummary::from_samples("x", &samples, None, 60.0).unwrap();

    assert_eq!(strict.statistics.normalized_min, 9.5);
    assert_eq!(loose.statistics.normalized_min, 5.0);
}

// ============================================================================
// Throughput
// ============================================================================

#[test]
fn ops_per_sec_defaults_to_one_second() {
    let store = store_with(&[("A", &[1.0, 1.0, 1.0, 1.0])]);
    let summary = statistics::summarize(&store, "A", 10.0).unwrap();
    assert_eq!(summary.operation_count, 4);
    assert_eq!(summary.ops_per_sec, 4.0);
}

// ============================================================================
// Not found
// ============================================================================

#[test]
fn unknown_name_is_not_found_without_affecting_others() {
    let store = store_with(&[("B", &[3.0, 4.0])]);

    let err = statistics::summarize(&store, "A", 10.0).unwrap_err();
    assert_eq!(
        err,
        Error::NotFound {
            name: "A".to_string()
        }
    );
    assert!(err.to_string().contains("'A'"));

    assert!(statistics::summarize(&store, "B", 10.0).is_ok());
    assert!(store.sorted("A").is_err());
}

#[test]
fn sorting_does_not_reorder_storage() {
    let store = store_with(&[("A", &[3.0, 1.0, 2.0])]);
    let _ = statistics::summarize(&store, "A", 10.0).unwrap();
    assert_eq!(store.get("A").unwrap().samples(), &[3.0, 1.0, 2.0]);
}
