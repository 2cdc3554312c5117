use std::{cmp::Ordering, hash::Hash, hash::Hasher};

/// A wrapper around f64 that provides total ordering and proper equality semantics.
///
/// Standard f64 does not implement `Ord` or `Eq` due to NaN values and signed zeros.
/// This wrapper compares with [`f64::total_cmp`], so heap scores always have a
/// well-defined order. For finite scores the order matches the ordinary `<`.
#[derive(Debug, Copy, Clone, Default)]
#[repr(transparent)]
pub struct TotalF64(pub f64);

impl PartialEq for TotalF64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for TotalF64 {
    fn from(x: f64) -> Self {
        TotalF64(x)
    }
}

impl From<TotalF64> for f64 {
    fn from(x: TotalF64) -> Self {
        x.0
    }
}

impl Hash for TotalF64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        assert_eq!(TotalF64(1.0), TotalF64(1.0));
        assert_ne!(TotalF64(1.0), TotalF64(2.0));
        assert_eq!(TotalF64(f64::NAN), TotalF64(f64::NAN));
    }

    #[test]
    fn test_negative_zero_is_distinct() {
        assert_ne!(TotalF64(0.0), TotalF64(-0.0));
        assert!(TotalF64(0.0) > TotalF64(-0.0));
    }

    #[test]
    fn test_ordering_matches_finite_lt() {
        let values = [-3.5, -1.0, 0.0, 0.25, 7.0, 1e9];
        for a in values {
            for b in values {
                assert_eq!(TotalF64(a) < TotalF64(b), a < b, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_ordering_with_nan_and_infinities() {
        let nan = TotalF64(f64::NAN);
        assert!(nan > TotalF64(f64::INFINITY));
        assert!(TotalF64(f64::INFINITY) > TotalF64(1.0));
        assert!(TotalF64(1.0) > TotalF64(f64::NEG_INFINITY));
    }

    #[test]
    fn test_conversions() {
        let total: TotalF64 = 3.5.into();
        assert_eq!(total.0, 3.5);
        let back: f64 = total.into();
        assert_eq!(back, 3.5);
    }

    #[test]
    fn test_sort() {
        let mut values = [
            TotalF64(3.0),
            TotalF64(f64::NAN),
            TotalF64(1.0),
            TotalF64(f64::NEG_INFINITY),
            TotalF64(-0.0),
            TotalF64(0.0),
        ];

        values.sort();

        assert_eq!(values[0], TotalF64(f64::NEG_INFINITY));
        assert_eq!(values[1], TotalF64(-0.0));
        assert_eq!(values[2], TotalF64(0.0));
        assert_eq!(values[3], TotalF64(1.0));
        assert_eq!(values[4], TotalF64(3.0));
        assert_eq!(values[5], TotalF64(f64::NAN));
    }
}
