//! Sampling of the x-axis.
use crate::errors::ValidationError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of samples of one domain.
pub const MAX_POINTS: usize = 10_000_000;

/// Half-open sampled interval `[x_min, x_max)` with spacing `dx`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSpec {
    pub x_min: f64,
    pub x_max: f64,
    pub dx: f64,
}

impl Default for DomainSpec {
    fn default() -> Self {
        Self {
            x_min: -20.0,
            x_max: 20.0,
            dx: 0.01,
        }
    }
}

impl DomainSpec {
    pub fn new(x_min: f64, x_max: f64, dx: f64) -> Self {
        Self { x_min, x_max, dx }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self.x_min, self.x_max, self.dx)
    }

    pub fn sample(&self) -> Result<Array1<f64>, ValidationError> {
        sample(self.x_min, self.x_max, self.dx)
    }

    /// Number of points `sample` produces, without allocating them.
    pub fn len(&self) -> Result<usize, ValidationError> {
        self.validate()?;
        Ok(((self.x_max - self.x_min) / self.dx).ceil() as usize)
    }
}

fn validate(min: f64, max: f64, step: f64) -> Result<(), ValidationError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ValidationError::NonFiniteBound { min, max });
    }
    // `!(step > 0)` also rejects NaN
    if !(step > 0.0) {
        return Err(ValidationError::StepNotPositive { step });
    }
    if min >= max {
        return Err(ValidationError::EmptyInterval { min, max });
    }
    let points = ((max - min) / step).ceil();
    if !points.is_finite() || points > MAX_POINTS as f64 {
        return Err(ValidationError::TooManyPoints {
            points,
            limit: MAX_POINTS,
        });
    }
    Ok(())
}

/// Strictly increasing samples `min, min + step, ...` below `max`,
/// `ceil((max - min) / step)` of them.
pub fn sample(min: f64, max: f64, step: f64) -> Result<Array1<f64>, ValidationError> {
    validate(min, max, step)?;
    Ok(Array1::range(min, max, step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_domain_has_4000_points() {
        let x = DomainSpec::default().sample().unwrap();
        assert_eq!(x.len(), 4000);
        assert_eq!(DomainSpec::default().len().unwrap(), 4000);
        assert_relative_eq!(x[0], -20.0);
        assert!(x[x.len() - 1] < 20.0);
    }

    #[test]
    fn test_sample_is_strictly_increasing_with_expected_length() {
        let cases = [
            (0.0, 1.0, 0.25),
            (-3.0, 2.5, 0.5),
            (1.0, 1.7, 0.3),
            (-1.0, 1.0, 0.01),
        ];
        for (min, max, step) in cases {
            let x = sample(min, max, step).unwrap();
            assert_eq!(x.len(), ((max - min) / step).ceil() as usize);
            assert_eq!(x[0], min);
            assert!(x.windows(2).into_iter().all(|w| w[1] > w[0]));
            assert!(x.iter().all(|&v| v < max));
        }
    }

    #[test]
    fn test_sample_spacing() {
        let x = sample(0.0, 1.0, 0.25).unwrap();
        assert_eq!(x.to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_non_positive_step_fails() {
        assert_eq!(
            sample(0.0, 1.0, 0.0),
            Err(ValidationError::StepNotPositive { step: 0.0 })
        );
        assert!(matches!(
            sample(0.0, 1.0, -0.1),
            Err(ValidationError::StepNotPositive { .. })
        ));
        assert!(sample(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_empty_interval_fails() {
        assert_eq!(
            sample(1.0, 1.0, 0.1),
            Err(ValidationError::EmptyInterval { min: 1.0, max: 1.0 })
        );
        assert!(sample(2.0, 1.0, 0.1).is_err());
        assert!(sample(f64::NEG_INFINITY, 1.0, 0.1).is_err());
    }

    #[test]
    fn test_too_many_points_fails() {
        assert!(matches!(
            sample(0.0, 1e300, 1e-300),
            Err(ValidationError::TooManyPoints { .. })
        ));
        let fine = DomainSpec::new(-20.0, 20.0, 1e-12);
        assert!(matches!(
            fine.len(),
            Err(ValidationError::TooManyPoints { limit: MAX_POINTS, .. })
        ));
        assert!(DomainSpec::new(0.0, 1.0, 1e-6).len().is_ok());
    }
}
