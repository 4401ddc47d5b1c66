use patent_fetch::report::{BenchSample, TargetSummary};

fn sample(patent: &str, index: u32, seconds: f64, status: &str) -> BenchSample {
    BenchSample {
        patent: patent.into(),
        index,
        seconds,
        status: status.into(),
    }
}

#[test]
fn total_is_the_sum_of_samples() {
    let mut s = TargetSummary::new("Legacy");
    s.record(sample("US7654321B2", 1, 0.25, "200"));
    s.record(sample("US7654321B2", 2, 0.50, "200"));
    s.record(sample("US10283223B2", 1, 1.25, "ERR: operation timed out"));

    assert_eq!(s.calls, 3);
    let by_hand: f64 = s.samples.iter().map(|x| x.seconds).sum();
    assert!((s.total_seconds - by_hand).abs() < 1e-9);
    assert!((s.average_seconds() - by_hand / 3.0).abs() < 1e-9);
}

#[test]
fn error_samples_still_count() {
    let mut s = TargetSummary::new("New");
    s.record(sample("US7654321B2", 1, 2.0, "ERR: connection refused"));
    assert_eq!(s.calls, 1);
    assert!((s.total_seconds - 2.0).abs() < 1e-9);
}

#[test]
fn empty_target_has_zero_average() {
    let s = TargetSummary::new("Official");
    assert_eq!(s.calls, 0);
    assert_eq!(s.average_seconds(), 0.0);
}
