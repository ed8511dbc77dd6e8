//! Built-in sample series.

use fxinterp_core::{EpochConvention, FxResult};

use crate::engine::InterpolationEngine;

/// Month-start USD to PHP rates, January 2002 to December 2003.
pub const USD_PHP_2002_2003: [(&str, f64); 24] = [
    ("2002-01-01", 26.5850),
    ("2002-02-01", 26.2703),
    ("2002-03-01", 26.7617),
    ("2002-04-01", 27.2878),
    ("2002-05-01", 27.3863),
    ("2002-06-01", 28.6447),
    ("2002-07-01", 28.0576),
    ("2002-08-01", 28.0241),
    ("2002-09-01", 28.5094),
    ("2002-10-01", 29.0770),
    ("2002-11-01", 29.9216),
    ("2002-12-01", 30.1003),
    ("2003-01-01", 31.1729),
    ("2003-02-01", 32.1087),
    ("2003-03-01", 32.8384),
    ("2003-04-01", 32.1492),
    ("2003-05-01", 34.0153),
    ("2003-06-01", 35.4584),
    ("2003-07-01", 35.5996),
    ("2003-08-01", 35.8302),
    ("2003-09-01", 36.3606),
    ("2003-10-01", 38.1060),
    ("2003-11-01", 39.6118),
    ("2003-12-01", 40.8515),
];

/// Builds an engine seeded with [`USD_PHP_2002_2003`].
pub fn usd_php_2002_2003(convention: EpochConvention) -> FxResult<InterpolationEngine> {
    let mut engine = InterpolationEngine::with_epoch(convention);
    engine.extend(USD_PHP_2002_2003)?;
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_loads() {
        let engine = usd_php_2002_2003(EpochConvention::default_reference()).unwrap();
        assert_eq!(engine.len(), 24);
        assert_eq!(engine.samples()[0].ordinal(), 0);
        assert_eq!(engine.samples()[23].rate(), 40.8515);
    }

    #[test]
    fn test_series_reproduces_its_samples() {
        let engine = usd_php_2002_2003(EpochConvention::default_reference()).unwrap();
        for (date, rate) in USD_PHP_2002_2003 {
            let value = engine.evaluate(date).unwrap();
            assert!((value - rate).abs() < 1e-9, "{date}: {value} vs {rate}");
        }
    }
}
