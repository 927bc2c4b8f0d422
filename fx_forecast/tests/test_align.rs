use chrono::NaiveDate;
use fx_data::Series;
use fx_forecast::align;
use pretty_assertions::assert_eq;

fn day(month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, d).unwrap()
}

#[test]
fn test_align_keeps_exactly_the_shared_dates() {
    let rate: Series = vec![
        (day(6, 1), 1380.0),
        (day(6, 2), 1382.0),
        (day(6, 4), 1379.0),
        (day(6, 5), 1385.0),
    ]
    .into_iter()
    .collect();

    let sentiment: Series = vec![
        (day(6, 2), 0.3),
        (day(6, 3), -0.2),
        (day(6, 4), 0.1),
    ]
    .into_iter()
    .collect();

    let aligned = align(&rate, &sentiment);

    let dates: Vec<NaiveDate> = aligned.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day(6, 2), day(6, 4)]);

    assert_eq!(aligned[0].rate, 1382.0);
    assert_eq!(aligned[0].sentiment, 0.3);
    assert_eq!(aligned[1].rate, 1379.0);
    assert_eq!(aligned[1].sentiment, 0.1);
}

#[test]
fn test_align_output_is_sorted_ascending() {
    // Build from deliberately unsorted inputs
    let rate: Series = vec![(day(6, 9), 3.0), (day(6, 1), 1.0), (day(6, 5), 2.0)]
        .into_iter()
        .collect();
    let sentiment: Series = vec![(day(6, 5), 0.5), (day(6, 9), 0.9), (day(6, 1), 0.1)]
        .into_iter()
        .collect();

    let aligned = align(&rate, &sentiment);
    let dates: Vec<NaiveDate> = aligned.iter().map(|r| r.date).collect();

    assert_eq!(dates, vec![day(6, 1), day(6, 5), day(6, 9)]);
}

#[test]
fn test_align_disjoint_series_is_empty_not_an_error() {
    // Rates in July, sentiment in August: nothing matches
    let rate: Series = (1..=10).map(|d| (day(7, d), 1380.0)).collect();
    let sentiment: Series = (1..=10).map(|d| (day(8, d), 0.2)).collect();

    let aligned = align(&rate, &sentiment);
    assert!(aligned.is_empty());
}

#[test]
fn test_align_empty_inputs() {
    let empty = Series::new();
    let rate: Series = vec![(day(6, 1), 1380.0)].into_iter().collect();

    assert!(align(&rate, &empty).is_empty());
    assert!(align(&empty, &rate).is_empty());
    assert!(align(&empty, &empty).is_empty());
}
