//! Summary statistics over restart histories.

use crate::climb::RestartRecord;

/// Aggregate statistics of restart distances.
///
/// # Examples
///
/// ```
/// use u_tsp_climb::stats::Statistics;
///
/// let stats = Statistics::from_distances(&[10.0, 10.0, 10.0]).unwrap();
/// assert_eq!(stats.mean, 10.0);
/// assert_eq!(stats.std_dev, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Number of samples.
    pub count: usize,
    /// Shortest distance.
    pub best: f64,
    /// Longest distance.
    pub worst: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator); 0 for one sample.
    pub std_dev: f64,
}

impl Statistics {
    /// Computes statistics of `distances`. Returns `None` if empty.
    pub fn from_distances(distances: &[f64]) -> Option<Self> {
        if distances.is_empty() {
            return None;
        }
        let count = distances.len();
        let mean = distances.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let ss: f64 = distances.iter().map(|d| (d - mean) * (d - mean)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            0.0
        };
        let best = distances.iter().copied().fold(f64::INFINITY, f64::min);
        let worst = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count,
            best,
            worst,
            mean,
            std_dev,
        })
    }

    /// Computes statistics of the distances recorded in `history`.
    pub fn from_history(history: &[RestartRecord]) -> Option<Self> {
        let distances: Vec<f64> = history.iter().map(|r| r.distance).collect();
        Self::from_distances(&distances)
    }
}

/// Best-so-far distance after each restart, in history order.
pub fn convergence_curve(history: &[RestartRecord]) -> Vec<f64> {
    history
        .iter()
        .scan(f64::INFINITY, |best, record| {
            if record.distance < *best {
                *best = record.distance;
            }
            Some(*best)
        })
        .collect()
}

/// One equal-width histogram bin covering `[lower, upper)`; the last bin
/// also includes `upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Buckets `distances` into `min(len, max_bins)` equal-width bins over
/// `[min, max]`.
///
/// When every value is equal a single bin holds them all. Returns an
/// empty vector for empty input or `max_bins == 0`.
pub fn histogram(distances: &[f64], max_bins: usize) -> Vec<HistogramBin> {
    let bins = distances.len().min(max_bins);
    if bins == 0 {
        return Vec::new();
    }

    let lo = distances.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;
    if span <= 0.0 {
        return vec![HistogramBin {
            lower: lo,
            upper: hi,
            count: distances.len(),
        }];
    }

    let width = span / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|k| HistogramBin {
            lower: lo + k as f64 * width,
            upper: if k + 1 == bins {
                hi
            } else {
                lo + (k + 1) as f64 * width
            },
            count: 0,
        })
        .collect();

    for &d in distances {
        let k = (((d - lo) / width) as usize).min(bins - 1);
        out[k].count += 1;
    }
    out
}
