use std::fmt::Display;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::error::{Error, Result};

fn digits() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"^[0-9]+$").expect("digit pattern is valid"))
}

/// Renders `arg` and checks that it is one or more ASCII decimal digits.
/// Returns the rendered string on success.
pub fn check_non_negative<A: Display + ?Sized>(arg: &A) -> Result<String> {
    let rendered = arg.to_string();
    if digits().is_match(&rendered) {
        Ok(rendered)
    } else {
        debug!("rejected argument {:?}", rendered);
        Err(Error::invalid_argument(rendered))
    }
}

/// Validates `arg` and parses it as a value of `T`. Digit strings too large
/// for `T` are rejected like any other invalid argument.
pub fn parse_non_negative<T, A>(arg: &A) -> Result<T>
where
    T: num::Num,
    A: Display + ?Sized,
{
    let rendered = check_non_negative(arg)?;
    T::from_str_radix(&rendered, 10).map_err(|_| {
        debug!("argument {:?} is out of range", rendered);
        Error::invalid_argument(rendered)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_digits() {
        assert_eq!("5", check_non_negative(&5).unwrap());
        assert_eq!("007", check_non_negative("007").unwrap());
        // floats with no fractional part render without a decimal point
        assert_eq!("2", check_non_negative(&2.0_f64).unwrap());
        assert_eq!(7u64, parse_non_negative::<u64, _>("007").unwrap());
    }

    #[test]
    fn test_rejects_non_digits() {
        for arg in ["-1", "1.5", "abc", "", " 1", "1 ", "+1", "0x10"] {
            let err = check_non_negative(arg).unwrap_err();
            assert_eq!(Error::invalid_argument(arg.to_string()), err);
        }
        assert!(check_non_negative(&-1).is_err());
        assert!(check_non_negative(&1.5).is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(255u8, parse_non_negative::<u8, _>(&255).unwrap());
        assert!(parse_non_negative::<u8, _>(&256).is_err());
        assert!(parse_non_negative::<u64, _>("18446744073709551616").is_err());
    }
}
