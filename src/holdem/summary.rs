use crate::core::EquityError;

/// Two-sided 95% quantile of the standard normal distribution.
const Z_95: f64 = 1.96;

/// Mean and 95% confidence interval of repeated Monte Carlo estimates.
///
/// The interval is the normal approximation `mean ± 1.96 * s / sqrt(n)`
/// where `s` is the sample standard deviation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateSummary {
    pub mean: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    pub runs: usize,
}

impl EstimateSummary {
    /// Summarize a set of estimates.
    ///
    /// With a single estimate the interval collapses onto the mean. An
    /// empty slice is `EquityError::NoEstimates`.
    ///
    /// ```
    /// use holdem_equity::holdem::EstimateSummary;
    ///
    /// let summary = EstimateSummary::from_estimates(&[0.4, 0.5, 0.6]).unwrap();
    /// assert!((summary.mean - 0.5).abs() < 1e-12);
    /// assert!(summary.ci_low < 0.5 && summary.ci_high > 0.5);
    /// ```
    pub fn from_estimates(estimates: &[f64]) -> Result<Self, EquityError> {
        let runs = estimates.len();
        if runs == 0 {
            return Err(EquityError::NoEstimates);
        }
        let mean = estimates.iter().sum::<f64>() / runs as f64;
        if runs < 2 {
            return Ok(Self {
                mean,
                ci_low: mean,
                ci_high: mean,
                runs,
            });
        }

        let variance = estimates
            .iter()
            .map(|e| (e - mean) * (e - mean))
            .sum::<f64>()
            / (runs - 1) as f64;
        let half = Z_95 * variance.sqrt() / (runs as f64).sqrt();
        Ok(Self {
            mean,
            ci_low: mean - half,
            ci_high: mean + half,
            runs,
        })
    }

    /// Half the width of the interval.
    pub fn half_width(&self) -> f64 {
        (self.ci_high - self.ci_low) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        self.ci_low <= value && value <= self.ci_high
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_known_values() {
        // mean 2.5, sample variance 5/3
        let summary = EstimateSummary::from_estimates(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let half = 1.96 * (5.0f64 / 3.0).sqrt() / 2.0;

        assert_eq!(4, summary.runs);
        assert_relative_eq!(2.5, summary.mean);
        assert_relative_eq!(2.5 - half, summary.ci_low);
        assert_relative_eq!(2.5 + half, summary.ci_high);
        assert_relative_eq!(half, summary.half_width());
    }

    #[test]
    fn test_single_estimate_is_degenerate() {
        let summary = EstimateSummary::from_estimates(&[0.463]).unwrap();
        assert_eq!(summary.mean, summary.ci_low);
        assert_eq!(summary.mean, summary.ci_high);
        assert!(summary.contains(0.463));
    }

    #[test]
    fn test_identical_estimates() {
        let summary = EstimateSummary::from_estimates(&[0.25; 10]).unwrap();
        assert_relative_eq!(0.25, summary.ci_low);
        assert_relative_eq!(0.25, summary.ci_high);
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            Err(EquityError::NoEstimates),
            EstimateSummary::from_estimates(&[])
        );
    }
}
