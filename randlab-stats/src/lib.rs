pub mod chi_square;
pub mod distributions;
pub mod queue;

pub use chi_square::{chi_square, ChiSquareReport, Significance};

/// Statistics input error
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The sample is empty
    EmptySample,
    /// Fewer than two chi-square intervals
    InvalidIntervals { intervals: usize },
    /// A sample value falls outside [0, 1]
    NotNormalized { value: f64 },
    /// The normalization modulus is zero
    ZeroModulus,
    /// Table probabilities do not sum to 1
    BadProbabilities { sum: f64 },
    /// A probability falls outside [0, 1]
    InvalidProbability { value: f64 },
    /// A binomial distribution needs at least one trial
    ZeroTrials,
    /// A rate parameter must be positive
    RateNotPositive { param: &'static str },
    /// The queue model is unstable at this load
    UnstableQueue { utilization: f64, limit: f64 },
    /// A finite queue needs capacity for at least one customer
    ZeroCapacity,
    /// Arrival and service traces differ in length
    TraceLengthMismatch { arrivals: usize, services: usize },
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StatsError::EmptySample => write!(f, "sample is empty"),
            StatsError::InvalidIntervals { intervals } => {
                write!(f, "need at least 2 intervals, got {}", intervals)
            }
            StatsError::NotNormalized { value } => {
                write!(f, "sample value {} is outside [0, 1]", value)
            }
            StatsError::ZeroModulus => write!(f, "normalization modulus must be positive"),
            StatsError::BadProbabilities { sum } => {
                write!(f, "probabilities sum to {}, expected 1", sum)
            }
            StatsError::InvalidProbability { value } => {
                write!(f, "probability {} is outside [0, 1]", value)
            }
            StatsError::ZeroTrials => write!(f, "binomial trial count must be at least 1"),
            StatsError::RateNotPositive { param } => {
                write!(f, "rate {} must be positive", param)
            }
            StatsError::UnstableQueue { utilization, limit } => {
                write!(
                    f,
                    "queue is unstable: utilization {} must stay below {}",
                    utilization, limit
                )
            }
            StatsError::ZeroCapacity => write!(f, "queue capacity must be at least 1"),
            StatsError::TraceLengthMismatch { arrivals, services } => {
                write!(
                    f,
                    "trace lengths differ: {} arrivals vs {} services",
                    arrivals, services
                )
            }
        }
    }
}

impl std::error::Error for StatsError {}

/// Normalize an integer sequence into [0, 1) by dividing by the modulus.
///
/// The modulus is 10^d for the digit-window generators and m for the
/// congruential family; every value must be below it.
pub fn normalize(sequence: &[u64], modulus: u64) -> Result<Vec<f64>, StatsError> {
    if modulus == 0 {
        return Err(StatsError::ZeroModulus);
    }
    let scale = modulus as f64;
    Ok(sequence.iter().map(|&v| v as f64 / scale).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let normalized = normalize(&[0, 2500, 5000, 9999], 10000).unwrap();
        assert_eq!(normalized, vec![0.0, 0.25, 0.5, 0.9999]);
    }

    #[test]
    fn test_normalize_zero_modulus() {
        assert_eq!(normalize(&[1, 2], 0), Err(StatsError::ZeroModulus));
    }
}
