/// Nearest integer, ties to even.
pub fn round(x: f64) -> i64 {
    x.round_ties_even() as i64
}

/// Round to two decimals, ties to even.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// `part` as a percentage of `total`, two decimals. A zero total gives 0.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        round2(100.0 * part / total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round() {
        assert_eq!(round(2.4), 2);
        assert_eq!(round(2.6), 3);
        assert_eq!(round(2.5), 2);
        assert_eq!(round(3.5), 4);
        assert_eq!(round(-1.5), -2);
        assert_eq!(round(0.0), 0);
    }

    #[test]
    fn test_round_idempotent() {
        for x in [0.49, 1.5, 99.999, 1234.5678] {
            assert_eq!(round(round(x) as f64), round(x));
        }
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1.0, 3.0), 33.33);
        assert_eq!(percentage(2.0, 3.0), 66.67);
        assert_eq!(percentage(10.0, 20.0), 50.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
    }
}
