//! Descriptive statistics over a sample of counts.
//!
//! Sample standard deviation (n - 1 denominator). Percentiles interpolate
//! linearly between closest ranks at position `q * (n - 1)`. Every reported
//! value is rounded to 2 decimals, ties to even.

use serde::Serialize;

/// `count` plus the summary, which is absent for an empty sample.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DescribeStats {
    pub count: usize,
    pub summary: Option<SummaryStats>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    /// `None` with a single observation.
    pub std: Option<f64>,
    pub min: f64,
    #[serde(rename = "25%")]
    pub p25: f64,
    #[serde(rename = "50%")]
    pub p50: f64,
    #[serde(rename = "75%")]
    pub p75: f64,
    pub max: f64,
}

/// Round to 2 decimal places, ties to even.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Summarize `values`. Order of the input does not matter.
pub fn describe(values: &[u64]) -> DescribeStats {
    let count = values.len();
    if count == 0 {
        return DescribeStats {
            count,
            summary: None,
        };
    }

    let mut sorted: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    sorted.sort_by(f64::total_cmp);

    let n = count as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let std = (count > 1).then(|| {
        let ss: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();
        (ss / (n - 1.0)).sqrt()
    });

    DescribeStats {
        count,
        summary: Some(SummaryStats {
            mean: round2(mean),
            std: std.map(round2),
            min: round2(sorted[0]),
            p25: round2(percentile(&sorted, 0.25)),
            p50: round2(percentile(&sorted, 0.50)),
            p75: round2(percentile(&sorted, 0.75)),
            max: round2(sorted[count - 1]),
        }),
    }
}

/// Linear-interpolated percentile of already sorted, non-empty data.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let w = pos - lo as f64;
    sorted[lo] * (1.0 - w) + sorted[hi] * w
}
