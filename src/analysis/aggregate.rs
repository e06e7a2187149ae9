use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use super::chart::HistogramBin;

// ---------------------------------------------------------------------------
// Counting
// ---------------------------------------------------------------------------

/// Count occurrences of each present label, most frequent first.
///
/// Missing labels are skipped. Ties keep first-appearance order because the
/// final sort is stable.
pub fn value_counts(labels: &[Option<String>]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for label in labels.iter().flatten() {
        match index.get(label.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label, counts.len());
                counts.push((label.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// ---------------------------------------------------------------------------
// Grouped means
// ---------------------------------------------------------------------------

/// `f64` with a total order so it can key a `BTreeMap`.
#[derive(Debug, Clone, Copy)]
pub struct OrdF64(pub f64);

impl PartialEq for OrdF64 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrdF64 {}

impl PartialOrd for OrdF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Mean of `values` per key, keys ascending.
///
/// Pairs with a missing key or value are skipped; a key whose values are all
/// missing does not appear.
pub fn group_mean<K, I>(pairs: I) -> Vec<(K, f64)>
where
    K: Ord,
    I: IntoIterator<Item = (Option<K>, Option<f64>)>,
{
    let mut sums: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for (key, value) in pairs {
        if let (Some(k), Some(v)) = (key, value) {
            let entry = sums.entry(k).or_insert((0.0, 0));
            entry.0 += v;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

/// Stable sort by value, largest first.
pub fn sort_descending<K>(rows: &mut [(K, f64)]) {
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
}

// ---------------------------------------------------------------------------
// Histogram + density
// ---------------------------------------------------------------------------

/// Equal-width histogram over the data range.
///
/// A degenerate range (all values equal) is widened by 0.5 on each side.
/// Values equal to the upper edge land in the last bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (mut lo, mut hi) = min_max(values);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + i as f64 * width,
            end: if i + 1 == bins {
                hi
            } else {
                lo + (i + 1) as f64 * width
            },
            count,
        })
        .collect()
}

/// Gaussian kernel density estimate over the data range, scaled so its area
/// matches a histogram with bins of `bin_width`.
///
/// Uses Scott's rule for the bandwidth. Returns no points when the sample
/// has fewer than two values or no spread.
pub fn kde_curve(values: &[f64], points: usize, bin_width: f64) -> Vec<[f64; 2]> {
    let n = values.len();
    if n < 2 || points < 2 {
        return Vec::new();
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let bandwidth = variance.sqrt() * (n as f64).powf(-0.2);
    if bandwidth <= 0.0 || !bandwidth.is_finite() {
        return Vec::new();
    }

    let (lo, hi) = min_max(values);
    let step = (hi - lo) / (points - 1) as f64;
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let scale = n as f64 * bin_width;

    (0..points)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density: f64 = values
                .iter()
                .map(|&xi| {
                    let z = (x - xi) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            [x, density * scale]
        })
        .collect()
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
