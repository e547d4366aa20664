use super::*;

#[test]
fn test_interval_classification_boundaries() {
    let spec = RangeSpec::Interval {
        min: 70.0,
        max: 100.0,
    };
    assert_eq!(classify(69.9, &spec), Status::Low);
    assert_eq!(classify(70.0, &spec), Status::Normal);
    assert_eq!(classify(85.0, &spec), Status::Normal);
    assert_eq!(classify(100.0, &spec), Status::Normal);
    assert_eq!(classify(100.1, &spec), Status::High);
}

#[test]
fn test_interval_low_iff_below_min_high_iff_above_max() {
    let spec = RangeSpec::Interval {
        min: 4.0,
        max: 10.0,
    };
    for v in [-3.0, 0.0, 3.9, 4.0, 7.0, 10.0, 10.5, 40.0] {
        let status = classify(v, &spec);
        assert_eq!(status == Status::Low, v < 4.0);
        assert_eq!(status == Status::High, v > 10.0);
    }
}

#[test]
fn test_less_than_only_flags_high() {
    let spec = RangeSpec::LessThan(5.0);
    assert_eq!(classify(6.0, &spec), Status::High);
    assert_eq!(classify(5.0, &spec), Status::Normal);
    assert_eq!(classify(0.0, &spec), Status::Normal);
    assert_eq!(classify(-2.0, &spec), Status::Normal);
}

#[test]
fn test_greater_than_only_flags_low() {
    let spec = RangeSpec::GreaterThan(60.0);
    assert_eq!(classify(50.0, &spec), Status::Low);
    assert_eq!(classify(60.0, &spec), Status::Normal);
    assert_eq!(classify(75.0, &spec), Status::Normal);
}

#[test]
fn test_unparseable_and_nan_stay_unchecked() {
    let spec = RangeSpec::Unparseable("see note".to_string());
    assert_eq!(classify(120.0, &spec), Status::Unchecked);

    let interval = RangeSpec::Interval {
        min: 0.0,
        max: 1.0,
    };
    assert_eq!(classify(f64::NAN, &interval), Status::Unchecked);
}

#[test]
fn test_parse_range_interval() {
    assert_eq!(
        parse_range("70-100"),
        RangeSpec::Interval {
            min: 70.0,
            max: 100.0
        }
    );
    assert_eq!(
        parse_range(" 3.5 - 7.2 "),
        RangeSpec::Interval { min: 3.5, max: 7.2 }
    );
}

#[test]
fn test_parse_range_one_sided() {
    assert_eq!(parse_range("<5"), RangeSpec::LessThan(5.0));
    assert_eq!(parse_range("< 5.5"), RangeSpec::LessThan(5.5));
    assert_eq!(parse_range("> 60"), RangeSpec::GreaterThan(60.0));
}

#[test]
fn test_parse_range_rejects_garbage() {
    assert_eq!(
        parse_range("negative"),
        RangeSpec::Unparseable("negative".to_string())
    );
    assert_eq!(parse_range(""), RangeSpec::Unparseable(String::new()));
    assert_eq!(
        parse_range("<high"),
        RangeSpec::Unparseable("<high".to_string())
    );
}

#[test]
fn test_display_round_trips_shapes() {
    assert_eq!(parse_range("70-100").display(), "70-100");
    assert_eq!(parse_range("<5").display(), "<5");
    assert_eq!(parse_range(">60").display(), ">60");
    assert_eq!(parse_range("n/a").display(), "n/a");
}
