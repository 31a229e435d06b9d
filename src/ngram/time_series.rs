//! Sparse year-indexed count series.

use std::collections::BTreeMap;

/// A sparse mapping from year to a non-negative count.
///
/// Only years present in the source data are stored. Absent years are treated
/// as zero by windowed sums and arithmetic but are never materialized as
/// explicit zero entries. Iteration is in ascending year order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    points: BTreeMap<i32, f64>,
}

impl TimeSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        TimeSeries::default()
    }

    /// Record a count for a year, replacing any previous value.
    pub fn insert(&mut self, year: i32, count: f64) {
        self.points.insert(year, count);
    }

    /// Return the count recorded for a year, if any.
    pub fn get(&self, year: i32) -> Option<f64> {
        self.points.get(&year).copied()
    }

    /// Return the years with recorded counts, in ascending order.
    pub fn years(&self) -> Vec<i32> {
        self.points.keys().copied().collect()
    }

    /// Return the recorded counts, in ascending year order.
    pub fn counts(&self) -> Vec<f64> {
        self.points.values().copied().collect()
    }

    /// Return the number of recorded years.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Return whether the series has no recorded years.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(year, count)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.points.iter().map(|(&year, &count)| (year, count))
    }

    /// Return a copy of the series restricted to `[start_year, end_year]`,
    /// inclusive of both ends. A reversed window (`start_year > end_year`)
    /// yields an empty series.
    pub fn restricted_to(&self, start_year: i32, end_year: i32) -> TimeSeries {
        if start_year > end_year {
            return TimeSeries::new();
        }
        TimeSeries {
            points: self
                .points
                .range(start_year..=end_year)
                .map(|(&year, &count)| (year, count))
                .collect(),
        }
    }

    /// Return the sum of all recorded counts.
    pub fn sum(&self) -> f64 {
        self.points.values().sum()
    }

    /// Return the yearwise sum of this series and `other`. Years missing from
    /// one side contribute zero.
    pub fn plus(&self, other: &TimeSeries) -> TimeSeries {
        let mut result = self.points.clone();
        for (&year, &count) in &other.points {
            *result.entry(year).or_insert(0.0) += count;
        }
        TimeSeries { points: result }
    }

    /// Return the yearwise quotient of this series by `other`. Years whose
    /// divisor is zero or unrecorded yield zero rather than a division fault.
    pub fn divided_by(&self, other: &TimeSeries) -> TimeSeries {
        let points = self
            .points
            .iter()
            .map(|(&year, &count)| {
                let quotient = match other.get(year) {
                    Some(total) if total != 0.0 => count / total,
                    _ => 0.0,
                };
                (year, quotient)
            })
            .collect();
        TimeSeries { points }
    }
}

impl FromIterator<(i32, f64)> for TimeSeries {
    fn from_iter<T: IntoIterator<Item = (i32, f64)>>(iter: T) -> Self {
        TimeSeries {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(pairs: &[(i32, f64)]) -> TimeSeries {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_years_in_ascending_order() {
        let ts = series(&[(2008, 4.0), (2005, 1.0), (2007, 3.0)]);
        assert_eq!(ts.years(), vec![2005, 2007, 2008]);
        assert_eq!(ts.counts(), vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_restricted_to_window() {
        let ts = series(&[(2005, 1.0), (2006, 2.0), (2007, 3.0), (2008, 4.0)]);

        let window = ts.restricted_to(2006, 2007);
        assert_eq!(window.years(), vec![2006, 2007]);
        assert_eq!(window.sum(), 5.0);
    }

    #[test]
    fn test_reversed_window_is_empty() {
        let ts = series(&[(2005, 1.0), (2008, 4.0)]);
        assert!(ts.restricted_to(2008, 2005).is_empty());
    }

    #[test]
    fn test_plus_treats_missing_years_as_zero() {
        let a = series(&[(2000, 1.0), (2001, 2.0)]);
        let b = series(&[(2001, 10.0), (2002, 20.0)]);

        let sum = a.plus(&b);
        assert_eq!(sum.get(2000), Some(1.0));
        assert_eq!(sum.get(2001), Some(12.0));
        assert_eq!(sum.get(2002), Some(20.0));
    }

    #[test]
    fn test_divided_by_zero_or_missing_divisor() {
        let counts = series(&[(2000, 5.0), (2001, 6.0), (2002, 7.0)]);
        let totals = series(&[(2000, 10.0), (2001, 0.0)]);

        let weights = counts.divided_by(&totals);
        assert_eq!(weights.get(2000), Some(0.5));
        // Zero divisor and missing divisor both yield zero, never a fault.
        assert_eq!(weights.get(2001), Some(0.0));
        assert_eq!(weights.get(2002), Some(0.0));
    }

    #[test]
    fn test_defensive_window_copy() {
        let ts = series(&[(2005, 1.0)]);
        let mut copy = ts.restricted_to(2000, 2020);
        copy.insert(2005, 99.0);

        assert_eq!(ts.get(2005), Some(1.0));
    }
}
