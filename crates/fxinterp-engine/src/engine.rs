//! The interpolation engine.

use tracing::{debug, warn};

use fxinterp_core::{Date, DateAxis, EpochConvention, FxError, FxResult};
use fxinterp_math::interpolation::{Interpolator, LagrangeInterpolator};

use crate::error::from_math_error;
use crate::sample::{parse_rate, validate_rate, Sample, SampleRecord};

/// Minimum number of samples before `evaluate` will run.
pub const MIN_SAMPLES: usize = 2;

/// Holds an ordered sample set and evaluates its interpolating polynomial.
///
/// Every date, whether it belongs to a sample or a query, is converted on the
/// engine's single [`DateAxis`]. Samples are kept in insertion order and are
/// never removed; no two samples share an axis ordinal.
///
/// Failed calls leave the engine unchanged.
#[derive(Debug, Clone, Default)]
pub struct InterpolationEngine {
    axis: DateAxis,
    samples: Vec<Sample>,
}

impl InterpolationEngine {
    /// Creates an empty engine on the proleptic ordinal axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty engine using the given epoch convention.
    #[must_use]
    pub fn with_epoch(convention: EpochConvention) -> Self {
        Self {
            axis: DateAxis::new(convention),
            samples: Vec::new(),
        }
    }

    /// The axis used for every date conversion.
    pub fn axis(&self) -> DateAxis {
        self.axis
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no sample has been added.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in insertion order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Earliest and latest sample dates.
    pub fn date_range(&self) -> Option<(Date, Date)> {
        let first = self.samples.first()?.date();
        Some(self.samples.iter().fold((first, first), |(lo, hi), s| {
            (lo.min(s.date()), hi.max(s.date()))
        }))
    }

    /// True when `date` lies within the sample date range.
    ///
    /// Purely informational: evaluation outside the range is allowed.
    pub fn covers(&self, date: &Date) -> bool {
        self.date_range().is_some_and(|(lo, hi)| lo <= *date && *date <= hi)
    }

    /// Adds a sample from a `YYYY-MM-DD` date and a rate.
    ///
    /// Returns the number of samples after the insertion.
    ///
    /// # Errors
    ///
    /// - `DateFormat` if the date does not parse
    /// - `InvalidRate` if the rate is `NaN` or infinite
    /// - `DuplicateSample` if a sample already exists on that day
    pub fn add_sample(&mut self, date: &str, rate: f64) -> FxResult<usize> {
        let date = Date::parse(date)?;
        self.add_date_sample(date, rate)
    }

    /// Adds a sample from textual date and rate, as typed by a user.
    pub fn add_sample_text(&mut self, date: &str, rate: &str) -> FxResult<usize> {
        let date = Date::parse(date)?;
        let rate = parse_rate(rate)?;
        self.add_date_sample(date, rate)
    }

    /// Adds a sample from a raw record.
    pub fn add_record(&mut self, record: &SampleRecord) -> FxResult<usize> {
        self.add_sample_text(&record.date, &record.rate)
    }

    /// Adds a sample for an already parsed date.
    pub fn add_date_sample(&mut self, date: Date, rate: f64) -> FxResult<usize> {
        let rate = validate_rate(rate)?;
        let ordinal = self.axis.ordinal(&date);

        if let Some(existing) = self.samples.iter().find(|s| s.ordinal() == ordinal) {
            warn!(
                date = %date,
                ordinal,
                existing_rate = existing.rate(),
                "rejected duplicate sample"
            );
            return Err(FxError::duplicate_sample(date.to_string(), ordinal));
        }

        self.samples.push(Sample::new(date, ordinal, rate));
        debug!(date = %date, ordinal, rate, count = self.samples.len(), "sample added");
        Ok(self.samples.len())
    }

    /// Adds several `(date, rate)` samples in order.
    ///
    /// Stops at the first failure; samples added before it are kept.
    pub fn extend<I, S>(&mut self, samples: I) -> FxResult<usize>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (date, rate) in samples {
            self.add_sample(date.as_ref(), rate)?;
        }
        Ok(self.samples.len())
    }

    /// Estimates the rate on a `YYYY-MM-DD` date.
    ///
    /// The value carries full `f64` precision; round only for display.
    ///
    /// # Errors
    ///
    /// - `DateFormat` if the target does not parse
    /// - `InsufficientData` if fewer than [`MIN_SAMPLES`] samples are held
    pub fn evaluate(&self, target: &str) -> FxResult<f64> {
        let target = Date::parse(target)?;
        self.evaluate_date(target)
    }

    /// Estimates the rate on an already parsed date.
    pub fn evaluate_date(&self, target: Date) -> FxResult<f64> {
        let interp = self.interpolator()?;
        let x = self.axis.ordinal(&target) as f64;
        let value = interp.interpolate(x).map_err(from_math_error)?;

        debug!(
            target = %target,
            x,
            samples = self.samples.len(),
            extrapolated = !interp.in_range(x),
            value,
            "evaluated"
        );
        Ok(value)
    }

    /// Estimates several dates independently, one result per target.
    pub fn evaluate_many<I, S>(&self, targets: I) -> Vec<FxResult<f64>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        targets
            .into_iter()
            .map(|target| self.evaluate(target.as_ref()))
            .collect()
    }

    /// Slope of the interpolating polynomial at `target`, in rate units per day.
    pub fn daily_change(&self, target: &str) -> FxResult<f64> {
        let target = Date::parse(target)?;
        self.daily_change_date(target)
    }

    /// Slope of the interpolating polynomial at an already parsed date.
    pub fn daily_change_date(&self, target: Date) -> FxResult<f64> {
        let interp = self.interpolator()?;
        interp
            .derivative(self.axis.ordinal(&target) as f64)
            .map_err(from_math_error)
    }

    /// Builds a fresh interpolator over the current samples.
    fn interpolator(&self) -> FxResult<LagrangeInterpolator> {
        if self.samples.len() < MIN_SAMPLES {
            return Err(FxError::insufficient_data(MIN_SAMPLES, self.samples.len()));
        }

        let (xs, ys) = self
            .samples
            .iter()
            .map(|s| (s.ordinal() as f64, s.rate()))
            .unzip();
        LagrangeInterpolator::new(xs, ys).map_err(from_math_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_sample_engine() -> InterpolationEngine {
        let mut engine = InterpolationEngine::new();
        engine.add_sample("2002-01-01", 26.5850).unwrap();
        engine.add_sample("2002-02-01", 26.2703).unwrap();
        engine
    }

    #[test]
    fn test_add_sample_returns_count() {
        let mut engine = InterpolationEngine::new();
        assert!(engine.is_empty());
        assert_eq!(engine.add_sample("2002-01-01", 26.5850).unwrap(), 1);
        assert_eq!(engine.add_sample("2002-02-01", 26.2703).unwrap(), 2);
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut engine = InterpolationEngine::new();
        engine.add_sample("2002-03-01", 26.7617).unwrap();
        engine.add_sample("2002-01-01", 26.5850).unwrap();

        let dates: Vec<String> = engine.samples().iter().map(|s| s.date().to_string()).collect();
        assert_eq!(dates, ["2002-03-01", "2002-01-01"]);
    }

    #[test]
    fn test_duplicate_rejected_without_mutation() {
        let mut engine = two_sample_engine();
        let err = engine.add_sample("2002-02-01", 27.0).unwrap_err();

        assert!(matches!(err, FxError::DuplicateSample { .. }));
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.samples()[1].rate(), 26.2703);
    }

    #[test]
    fn test_invalid_inputs_leave_engine_usable() {
        let mut engine = two_sample_engine();

        assert!(matches!(
            engine.add_sample("2002-13-01", 1.0),
            Err(FxError::DateFormat { .. })
        ));
        assert!(matches!(
            engine.add_sample("2002-03-01", f64::NAN),
            Err(FxError::InvalidRate { .. })
        ));
        assert!(matches!(
            engine.add_sample_text("2002-03-01", "twenty"),
            Err(FxError::InvalidRate { .. })
        ));
        assert!(matches!(
            engine.evaluate("16/01/2002"),
            Err(FxError::DateFormat { .. })
        ));

        assert_eq!(engine.len(), 2);
        assert!(engine.evaluate("2002-01-16").is_ok());
    }

    #[test]
    fn test_insufficient_data() {
        let mut engine = InterpolationEngine::new();
        assert_eq!(
            engine.evaluate("2002-01-16"),
            Err(FxError::insufficient_data(2, 0))
        );

        engine.add_sample("2002-01-01", 26.5850).unwrap();
        assert_eq!(
            engine.evaluate("2002-01-16"),
            Err(FxError::insufficient_data(2, 1))
        );
        assert!(engine.daily_change("2002-01-16").is_err());
    }

    #[test]
    fn test_evaluate_at_sample_dates() {
        let engine = two_sample_engine();
        assert_relative_eq!(engine.evaluate("2002-01-01").unwrap(), 26.5850, epsilon = 1e-9);
        assert_relative_eq!(engine.evaluate("2002-02-01").unwrap(), 26.2703, epsilon = 1e-9);
    }

    #[test]
    fn test_two_samples_linear() {
        let engine = two_sample_engine();
        let slope = (26.2703 - 26.5850) / 31.0;

        // 2002-01-16 is 15 days after the first sample
        assert_relative_eq!(
            engine.evaluate("2002-01-16").unwrap(),
            26.5850 + 15.0 * slope,
            epsilon = 1e-9
        );
        // Outside the segment on both sides
        assert_relative_eq!(
            engine.evaluate("2001-12-01").unwrap(),
            26.5850 - 31.0 * slope,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            engine.evaluate("2002-03-01").unwrap(),
            26.5850 + 59.0 * slope,
            epsilon = 1e-9
        );
        assert_relative_eq!(engine.daily_change("2002-05-05").unwrap(), slope, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_many() {
        let engine = two_sample_engine();
        let results = engine.evaluate_many(["2002-01-01", "bogus", "2002-02-01"]);

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(FxError::DateFormat { .. })));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_extend_stops_at_first_error() {
        let mut engine = InterpolationEngine::new();
        let err = engine
            .extend([
                ("2002-01-01", 1.0),
                ("2002-02-01", 2.0),
                ("2002-01-01", 3.0),
                ("2002-03-01", 4.0),
            ])
            .unwrap_err();

        assert!(matches!(err, FxError::DuplicateSample { .. }));
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn test_date_range_and_coverage() {
        let mut engine = InterpolationEngine::new();
        assert!(engine.date_range().is_none());

        engine.add_sample("2002-03-01", 26.7617).unwrap();
        engine.add_sample("2002-01-01", 26.5850).unwrap();

        let (lo, hi) = engine.date_range().unwrap();
        assert_eq!(lo.to_string(), "2002-01-01");
        assert_eq!(hi.to_string(), "2002-03-01");
        assert!(engine.covers(&Date::parse("2002-02-10").unwrap()));
        assert!(!engine.covers(&Date::parse("2002-04-10").unwrap()));
    }

    #[test]
    fn test_reference_epoch_ordinals() {
        let mut engine = InterpolationEngine::with_epoch(EpochConvention::default_reference());
        engine.add_sample("2002-02-01", 26.2703).unwrap();
        assert_eq!(engine.samples()[0].ordinal(), 31);
        assert_eq!(engine.axis().convention(), EpochConvention::default_reference());
    }
}
