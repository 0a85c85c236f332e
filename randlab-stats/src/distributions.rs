//! Inverse CDF sampling: maps uniform values in [0, 1] to draws from a
//! table-defined or binomial distribution.

use crate::StatsError;

/// Distribution defined by a table of labels and probabilities.
///
/// Entries keep their given order; sampling walks the cumulative sum and
/// returns the first label whose cumulative probability reaches the input.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDistribution {
    entries: Vec<(String, f64)>,
}

impl TableDistribution {
    /// Build from (label, probability) entries. Probabilities must each be
    /// in [0, 1] and sum to 1 within 1e-5.
    pub fn new(entries: Vec<(String, f64)>) -> Result<Self, StatsError> {
        for &(_, p) in &entries {
            if !(0.0..=1.0).contains(&p) {
                return Err(StatsError::InvalidProbability { value: p });
            }
        }
        let sum: f64 = entries.iter().map(|&(_, p)| p).sum();
        if (sum - 1.0).abs() > 1e-5 {
            return Err(StatsError::BadProbabilities { sum });
        }
        Ok(TableDistribution { entries })
    }

    /// Draw the label for a uniform value `u` in [0, 1].
    pub fn sample(&self, u: f64) -> &str {
        let mut cumulative = 0.0;
        for (label, p) in &self.entries {
            cumulative += p;
            if u <= cumulative {
                return label;
            }
        }
        // Rounding left the cumulative sum fractionally below u; the sum-to-1
        // check guarantees at least one entry exists
        &self.entries[self.entries.len() - 1].0
    }

    /// Draw one label per uniform input.
    pub fn sample_many(&self, uniforms: &[f64]) -> Vec<String> {
        uniforms.iter().map(|&u| self.sample(u).to_string()).collect()
    }
}

/// Binomial distribution over `trials` trials with success probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    trials: u32,
    success: f64,
}

impl Binomial {
    pub fn new(trials: u32, success: f64) -> Result<Self, StatsError> {
        if trials == 0 {
            return Err(StatsError::ZeroTrials);
        }
        if !(0.0..=1.0).contains(&success) {
            return Err(StatsError::InvalidProbability { value: success });
        }
        Ok(Binomial { trials, success })
    }

    /// Draw the number of successes for a uniform value `u` in [0, 1]:
    /// the smallest k with CDF(k) >= u, clamped to the trial count.
    ///
    /// The pmf is accumulated iteratively
    /// (`pmf(k+1) = pmf(k) * (n-k)/(k+1) * p/(1-p)`), so no factorials are
    /// materialized.
    pub fn sample(&self, u: f64) -> u32 {
        let n = self.trials;
        let p = self.success;
        if p == 0.0 {
            return 0;
        }
        if p == 1.0 {
            return n;
        }
        let q = 1.0 - p;
        let ratio = p / q;
        let mut pmf = q.powi(n as i32);
        let mut cdf = pmf;
        let mut k = 0u32;
        while k < n && u > cdf {
            pmf *= (n - k) as f64 / (k + 1) as f64 * ratio;
            k += 1;
            cdf += pmf;
        }
        k
    }

    /// Draw one value per uniform input.
    pub fn sample_many(&self, uniforms: &[f64]) -> Vec<u32> {
        uniforms.iter().map(|&u| self.sample(u)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TableDistribution {
        TableDistribution::new(vec![
            ("low".to_string(), 0.2),
            ("mid".to_string(), 0.5),
            ("high".to_string(), 0.3),
        ])
        .unwrap()
    }

    #[test]
    fn test_table_cumulative_walk() {
        let dist = table();
        assert_eq!(dist.sample(0.0), "low");
        assert_eq!(dist.sample(0.2), "low"); // boundary belongs to the left entry
        assert_eq!(dist.sample(0.21), "mid");
        assert_eq!(dist.sample(0.7), "mid");
        assert_eq!(dist.sample(0.71), "high");
        assert_eq!(dist.sample(1.0), "high");
    }

    #[test]
    fn test_table_sample_many() {
        let dist = table();
        assert_eq!(
            dist.sample_many(&[0.1, 0.5, 0.9]),
            vec!["low".to_string(), "mid".to_string(), "high".to_string()]
        );
    }

    #[test]
    fn test_table_validation() {
        assert_eq!(
            TableDistribution::new(vec![("a".to_string(), 0.5), ("b".to_string(), 0.4)]),
            Err(StatsError::BadProbabilities { sum: 0.9 })
        );
        assert_eq!(
            TableDistribution::new(vec![("a".to_string(), 1.5), ("b".to_string(), -0.5)]),
            Err(StatsError::InvalidProbability { value: 1.5 })
        );
        assert_eq!(
            TableDistribution::new(vec![]),
            Err(StatsError::BadProbabilities { sum: 0.0 })
        );
    }

    #[test]
    fn test_binomial_two_trials_half() {
        // n=2, p=0.5: pmf 0.25 / 0.5 / 0.25, cdf 0.25 / 0.75 / 1.0
        let dist = Binomial::new(2, 0.5).unwrap();
        assert_eq!(dist.sample(0.0), 0);
        assert_eq!(dist.sample(0.25), 0);
        assert_eq!(dist.sample(0.26), 1);
        assert_eq!(dist.sample(0.75), 1);
        assert_eq!(dist.sample(0.76), 2);
        assert_eq!(dist.sample(0.999), 2);
    }

    #[test]
    fn test_binomial_numerical_tail_clamps() {
        let dist = Binomial::new(5, 0.3).unwrap();
        assert_eq!(dist.sample(1.0), 5);
    }

    #[test]
    fn test_binomial_degenerate_probabilities() {
        assert_eq!(Binomial::new(10, 0.0).unwrap().sample(0.99), 0);
        assert_eq!(Binomial::new(10, 1.0).unwrap().sample(0.01), 10);
    }

    #[test]
    fn test_binomial_validation() {
        assert_eq!(Binomial::new(0, 0.5), Err(StatsError::ZeroTrials));
        assert_eq!(
            Binomial::new(3, 1.2),
            Err(StatsError::InvalidProbability { value: 1.2 })
        );
    }
}
