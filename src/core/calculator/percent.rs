/// Round to one decimal, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole * 100`, rounded to one decimal.
/// Returns `None` when `whole` is zero instead of dividing by it.
pub fn percent_of(part: usize, whole: usize) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(round1(part as f64 / whole as f64 * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(percent_of(2, 3), Some(66.7));
        assert_eq!(percent_of(1, 3), Some(33.3));
        assert_eq!(percent_of(7, 10), Some(70.0));
        assert_eq!(percent_of(0, 4), Some(0.0));
        assert_eq!(round1(12.25), 12.3);
    }

    #[test]
    fn zero_whole_is_guarded() {
        assert_eq!(percent_of(0, 0), None);
    }
}
