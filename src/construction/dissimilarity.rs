//! Time-window dissimilarity.

use std::fmt::Debug;

use crate::models::TimeInterval;

/// Measures how different two time windows are.
///
/// Implementations must be symmetric, non-negative and return zero for
/// identical windows. The measure feeds the window-distance statistic and
/// relatedness-based removal.
pub trait WindowDissimilarity: Debug + Send + Sync {
    /// Dissimilarity of `a` and `b`.
    fn dissimilarity(&self, a: &TimeInterval, b: &TimeInterval) -> f64;
}

/// Length of the symmetric difference of two windows.
///
/// The total length covered by exactly one of the two windows. Identical
/// windows score zero, nested windows score the uncovered part of the larger
/// one, and disjoint windows score the sum of their lengths. The gap between
/// disjoint windows does not count.
///
/// # Examples
///
/// ```
/// use u_techroute::construction::{SymmetricDifference, WindowDissimilarity};
/// use u_techroute::models::TimeInterval;
///
/// let a = TimeInterval::new(0.0, 10.0).unwrap();
/// let b = TimeInterval::new(5.0, 20.0).unwrap();
/// assert_eq!(SymmetricDifference.dissimilarity(&a, &b), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymmetricDifference;

impl WindowDissimilarity for SymmetricDifference {
    fn dissimilarity(&self, a: &TimeInterval, b: &TimeInterval) -> f64 {
        (a.length() + b.length() - 2.0 * a.overlap(b)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tw(a: f64, b: f64) -> TimeInterval {
        TimeInterval::new(a, b).expect("valid")
    }

    #[test]
    fn test_identical_is_zero() {
        let a = tw(100.0, 200.0);
        assert_eq!(SymmetricDifference.dissimilarity(&a, &a), 0.0);
    }

    #[test]
    fn test_nested_and_disjoint() {
        let outer = tw(0.0, 100.0);
        let inner = tw(20.0, 50.0);
        assert_eq!(SymmetricDifference.dissimilarity(&outer, &inner), 70.0);
        let far = tw(150.0, 160.0);
        assert_eq!(SymmetricDifference.dissimilarity(&outer, &far), 110.0);
    }

    #[test]
    fn test_gap_between_disjoint_windows_is_ignored() {
        let a = tw(0.0, 10.0);
        let near = tw(20.0, 30.0);
        let far = tw(1000.0, 1010.0);
        assert_eq!(
            SymmetricDifference.dissimilarity(&a, &near),
            SymmetricDifference.dissimilarity(&a, &far)
        );
        // touching windows share no time either
        assert_eq!(SymmetricDifference.dissimilarity(&a, &tw(10.0, 25.0)), 25.0);
    }

    proptest! {
        #[test]
        fn prop_symmetric_and_non_negative(
            a in 0.0..1000.0f64, la in 0.0..500.0f64,
            b in 0.0..1000.0f64, lb in 0.0..500.0f64,
        ) {
            let x = tw(a, a + la);
            let y = tw(b, b + lb);
            let d1 = SymmetricDifference.dissimilarity(&x, &y);
            let d2 = SymmetricDifference.dissimilarity(&y, &x);
            prop_assert!(d1 >= 0.0);
            prop_assert!(d1 <= x.length() + y.length() + 1e-9);
            prop_assert!((d1 - d2).abs() < 1e-9);
        }
    }
}
