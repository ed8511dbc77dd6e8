//! Integration tests: behavioural properties of the interpolation engine.
//!
//! Sample data is the month-start USD/PHP series from 2002, the same series
//! shipped in `fxinterp_engine::dataset`.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use fxinterp_engine::{Date, EpochConvention, FxError, InterpolationEngine};

fn engine_from(samples: &[(&str, f64)]) -> InterpolationEngine {
    let mut engine = InterpolationEngine::new();
    engine.extend(samples.iter().copied()).unwrap();
    engine
}

#[test]
fn test_january_segment_scenario() {
    let engine = engine_from(&[("2002-01-01", 26.5850), ("2002-02-01", 26.2703)]);

    // 2002-01-16 sits 15 of 31 days into the segment
    let jan16 = engine.evaluate("2002-01-16").unwrap();
    assert_abs_diff_eq!(jan16, 26.5850 + (26.2703 - 26.5850) * 15.0 / 31.0, epsilon = 1e-9);
    assert_abs_diff_eq!(jan16, 26.43272, epsilon = 1e-4);

    // The exact half-way point falls between Jan 16 and Jan 17
    let jan17 = engine.evaluate("2002-01-17").unwrap();
    assert_abs_diff_eq!((jan16 + jan17) / 2.0, 26.42765, epsilon = 1e-4);
}

#[test]
fn test_constant_series_stays_constant() {
    let engine = engine_from(&[
        ("2002-01-01", 10.0),
        ("2002-01-11", 10.0),
        ("2002-01-21", 10.0),
    ]);

    for date in ["2001-06-30", "2002-01-01", "2002-01-05", "2002-01-21", "2002-03-15"] {
        assert_abs_diff_eq!(engine.evaluate(date).unwrap(), 10.0, epsilon = 1e-9);
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    let engine = engine_from(&[
        ("2002-01-01", 26.5850),
        ("2002-02-01", 26.2703),
        ("2002-03-01", 26.7617),
    ]);

    let first = engine.evaluate("2002-02-14").unwrap();
    let second = engine.evaluate("2002-02-14").unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(engine.len(), 3);
}

#[test]
fn test_duplicate_date_rejected() {
    let mut engine = engine_from(&[("2002-01-01", 26.5850), ("2002-02-01", 26.2703)]);

    let err = engine.add_sample("2002-01-01", 99.0).unwrap_err();
    assert_eq!(
        err,
        FxError::DuplicateSample {
            date: "2002-01-01".to_string(),
            ordinal: Date::parse("2002-01-01").unwrap().ordinal(),
        }
    );
    assert_eq!(engine.len(), 2);
    assert_abs_diff_eq!(engine.evaluate("2002-01-01").unwrap(), 26.5850, epsilon = 1e-9);
}

#[test]
fn test_insufficient_data_guard() {
    let mut engine = InterpolationEngine::new();
    assert!(matches!(
        engine.evaluate("2002-01-16"),
        Err(FxError::InsufficientData { required: 2, actual: 0 })
    ));

    engine.add_sample("2002-01-01", 26.5850).unwrap();
    assert!(matches!(
        engine.evaluate("2002-01-16"),
        Err(FxError::InsufficientData { required: 2, actual: 1 })
    ));
}

#[test]
fn test_extrapolation_is_allowed() {
    let engine = engine_from(&[
        ("2002-01-01", 26.5850),
        ("2002-02-01", 26.2703),
        ("2002-03-01", 26.7617),
    ]);

    let value = engine.evaluate("2002-04-01").unwrap();
    assert!(value.is_finite());
    assert!(!engine.covers(&Date::parse("2002-04-01").unwrap()));
}

#[test]
fn test_daily_change_matches_finite_difference() {
    let engine = engine_from(&[
        ("2002-01-01", 26.5850),
        ("2002-02-01", 26.2703),
        ("2002-03-01", 26.7617),
        ("2002-04-01", 27.2878),
    ]);

    let before = engine.evaluate("2002-02-09").unwrap();
    let after = engine.evaluate("2002-02-11").unwrap();
    let slope = engine.daily_change("2002-02-10").unwrap();

    // Central difference is exact up to the cubic term
    assert_abs_diff_eq!(slope, (after - before) / 2.0, epsilon = 1e-5);
}

/// Distinct day offsets from 2002-01-01 paired with plausible rates.
fn samples_strategy() -> impl Strategy<Value = Vec<(i64, f64)>> {
    prop::collection::btree_set(0i64..730, 2..6).prop_flat_map(|days| {
        let n = days.len();
        (Just(days), prop::collection::vec(20.0f64..45.0, n))
            .prop_map(|(days, rates)| days.into_iter().zip(rates).collect::<Vec<_>>())
    })
}

fn date_text(offset: i64) -> String {
    Date::parse("2002-01-01")
        .unwrap()
        .add_days(offset)
        .unwrap()
        .to_string()
}

fn build(convention: EpochConvention, samples: &[(i64, f64)]) -> InterpolationEngine {
    let mut engine = InterpolationEngine::with_epoch(convention);
    for &(offset, rate) in samples {
        engine.add_sample(&date_text(offset), rate).unwrap();
    }
    engine
}

proptest! {
    #[test]
    fn test_reproduces_every_sample(samples in samples_strategy()) {
        let engine = build(EpochConvention::ProlepticOrdinal, &samples);
        for &(offset, rate) in &samples {
            let value = engine.evaluate(&date_text(offset)).unwrap();
            prop_assert!((value - rate).abs() < 1e-9, "day {}: {} vs {}", offset, value, rate);
        }
    }

    #[test]
    fn test_insertion_order_does_not_matter(
        (samples, shuffled) in samples_strategy()
            .prop_flat_map(|s| (Just(s.clone()), Just(s).prop_shuffle())),
        t in 0.0f64..1.0,
    ) {
        let a = build(EpochConvention::ProlepticOrdinal, &samples);
        let b = build(EpochConvention::ProlepticOrdinal, &shuffled);

        let (lo, hi) = (samples[0].0, samples[samples.len() - 1].0);
        let query = date_text(lo + ((hi - lo) as f64 * t) as i64);

        let va = a.evaluate(&query).unwrap();
        let vb = b.evaluate(&query).unwrap();
        prop_assert!((va - vb).abs() <= 1e-6 * va.abs().max(1.0), "{} vs {}", va, vb);
    }

    #[test]
    fn test_epoch_choice_does_not_matter(samples in samples_strategy(), offset in -60i64..800) {
        let ordinal = build(EpochConvention::ProlepticOrdinal, &samples);
        let reference = build(EpochConvention::default_reference(), &samples);

        let query = date_text(offset);
        let a = ordinal.evaluate(&query).unwrap();
        let b = reference.evaluate(&query).unwrap();
        prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0), "{} vs {}", a, b);
    }
}
