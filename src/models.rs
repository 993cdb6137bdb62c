//! Shared types used across the generators.

use std::fmt;
use std::str::FromStr;

/// Numeric identifier of a simulated vehicle.
///
/// The decimal form is both the secret store key and the `CAR_ID` header
/// value, so `007` and `7` name the same car. Any value from `i128::MIN`
/// up to (but not including) `i128::MAX` has a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CarId(pub i128);

impl CarId {
    /// Key under which this car's secret is stored.
    pub fn key(&self) -> String {
        self.0.to_string()
    }

    /// Placeholder secret derivation: the identifier plus one.
    ///
    /// `None` only for `i128::MAX`, whose successor does not fit.
    pub fn derive_secret(&self) -> Option<i128> {
        self.0.checked_add(1)
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CarId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i128>()
            .map(CarId)
            .map_err(|e| format!("invalid car id '{s}': {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_ids() {
        assert_eq!("7".parse::<CarId>().unwrap(), CarId(7));
        assert_eq!("007".parse::<CarId>().unwrap(), CarId(7));
        assert_eq!("-3".parse::<CarId>().unwrap(), CarId(-3));
        assert_eq!("+12".parse::<CarId>().unwrap(), CarId(12));
    }

    #[test]
    fn parses_ids_beyond_64_bits() {
        let id = "9223372036854775807".parse::<CarId>().unwrap();
        assert_eq!(id, CarId(i64::MAX as i128));
        assert_eq!(id.derive_secret(), Some(9_223_372_036_854_775_808));
        assert_eq!(
            "18446744073709551616".parse::<CarId>().unwrap().key(),
            "18446744073709551616"
        );
    }

    #[test]
    fn rejects_non_numeric() {
        let err = "seven".parse::<CarId>().unwrap_err();
        assert!(err.contains("seven"), "got: {err}");
        assert!("1.5".parse::<CarId>().is_err());
        assert!("".parse::<CarId>().is_err());
    }

    #[test]
    fn key_is_normalised_decimal() {
        assert_eq!("0042".parse::<CarId>().unwrap().key(), "42");
        assert_eq!(CarId(-1).key(), "-1");
    }

    #[test]
    fn secret_is_id_plus_one() {
        for id in [-5, -1, 0, 1, 7, 1_000_000, i128::MAX - 1] {
            assert_eq!(CarId(id).derive_secret(), Some(id + 1));
        }
    }

    #[test]
    fn secret_overflows_at_max() {
        assert_eq!(CarId(i128::MAX).derive_secret(), None);
    }
}
