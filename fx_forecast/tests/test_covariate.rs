use chrono::NaiveDate;
use fx_data::Series;
use fx_forecast::covariate::extend;
use fx_forecast::ForecastError;
use pretty_assertions::assert_eq;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn sparse_sentiment() -> Series {
    vec![(day(1), 0.2), (day(3), -0.1)].into_iter().collect()
}

#[test]
fn test_forward_fill_across_gaps() {
    let targets = vec![day(1), day(2), day(3), day(4)];
    let resolved = extend(&sparse_sentiment(), targets).unwrap();

    assert_eq!(resolved[&day(1)], 0.2);
    assert_eq!(resolved[&day(2)], 0.2);
    assert_eq!(resolved[&day(3)], -0.1);
    assert_eq!(resolved[&day(4)], -0.1);
}

#[test]
fn test_stale_value_is_carried_indefinitely() {
    // No decay, no bound: day 30 still gets the day-3 score
    let resolved = extend(&sparse_sentiment(), vec![day(30)]).unwrap();
    assert_eq!(resolved[&day(30)], -0.1);
}

#[test]
fn test_date_before_all_observations_is_unresolvable() {
    let before = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
    let err = extend(&sparse_sentiment(), vec![before, day(2)]).unwrap_err();

    match err {
        ForecastError::UnresolvableCovariate { date } => assert_eq!(date, before),
        other => panic!("expected UnresolvableCovariate, got {other:?}"),
    }
}

#[test]
fn test_extension_is_idempotent() {
    let targets = vec![day(1), day(2), day(3), day(4), day(10)];
    let first = extend(&sparse_sentiment(), targets.clone()).unwrap();
    let second = extend(&sparse_sentiment(), targets).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_no_targets_yields_empty_mapping() {
    let resolved = extend(&sparse_sentiment(), Vec::new()).unwrap();
    assert!(resolved.is_empty());
}
