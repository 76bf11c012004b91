//! Shared rounding for every displayed dose and MME value.

/// Rounds to one decimal place, halves away from zero.
///
/// All MME, target dose and breakthrough values pass through here so that
/// standard and methadone conversions round identically.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to_tenth(3.333_333), 3.3);
        assert_eq!(round_to_tenth(3.36), 3.4);
        assert_eq!(round_to_tenth(20.0), 20.0);
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(-0.25), -0.3);
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(round_to_tenth(0.0), 0.0);
    }
}
