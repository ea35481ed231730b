use smallvec::SmallVec;

/// Sorted real roots, no two closer than the merge tolerance they were
/// built with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootSet {
    values: SmallVec<[f64; 6]>,
}

impl RootSet {
    /// Sorts `values` and keeps a value only if it is more than `epsilon`
    /// away from the last value kept.
    pub fn from_values(values: impl IntoIterator<Item = f64>, epsilon: f64) -> Self {
        let mut sorted: SmallVec<[f64; 6]> = values.into_iter().collect();
        sorted.sort_by(f64::total_cmp);

        let mut kept: SmallVec<[f64; 6]> = SmallVec::new();
        for value in sorted {
            match kept.last() {
                Some(last) if (value - last).abs() <= epsilon => {}
                _ => kept.push(value),
            }
        }
        RootSet { values: kept }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Whether some root lies within `tolerance` of `value`.
    pub fn contains_near(&self, value: f64, tolerance: f64) -> bool {
        self.iter().any(|root| (root - value).abs() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sorted_and_merged() {
        let roots = RootSet::from_values([3.0, -1.0, 3.000001, 0.0, -1.0], 1e-5);
        assert_eq!(roots.as_slice(), &[-1.0, 0.0, 3.0]);
    }

    #[test]
    fn test_merging_compares_against_last_kept() {
        // Each step is within epsilon of its neighbour but the chain is not.
        let roots = RootSet::from_values([0.0, 0.6e-5, 1.2e-5], 1e-5);
        assert_eq!(roots.as_slice(), &[0.0, 1.2e-5]);
    }

    #[test]
    fn test_merging_is_idempotent() {
        let once = RootSet::from_values([2.0, 2.0, 2.000004, 7.5], 1e-5);
        let twice = RootSet::from_values(once.iter(), 1e-5);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_empty() {
        let roots = RootSet::from_values([], 1e-5);
        assert!(roots.is_empty());
        assert!(!roots.contains_near(0.0, 1.0));
    }
}
