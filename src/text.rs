use rand::Rng;
use thiserror::Error;

pub const DEFAULT_DECIMALS: u32 = 1;
pub const MAX_DECIMALS: u32 = 100;
pub const DEFAULT_RANDOM_LEN: usize = 20;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Error, PartialEq)]
pub enum TextError {
    #[error("invalid 24h time: {0:?}")]
    InvalidTime(String),
}

/// `"13:05"` -> `"01:05 PM"`. Anything after `HH:MM` is dropped.
pub fn convert_24hr_to_12hr(time24: &str) -> Result<String, TextError> {
    let invalid = || TextError::InvalidTime(time24.to_string());
    let hour: u32 = time24
        .get(0..2)
        .and_then(|h| h.parse().ok())
        .filter(|h| *h < 24)
        .ok_or_else(invalid)?;
    let minutes = time24
        .get(2..5)
        .filter(|m| m.starts_with(':'))
        .ok_or_else(invalid)?;

    let h = match hour % 12 {
        0 => 12,
        h => h,
    };
    let ampm = if hour < 12 { "AM" } else { "PM" };
    Ok(format!("{h:02}{minutes} {ampm}"))
}

/// Seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Keeps ASCII digits, `.` and `-`: `"1,234.50 $"` -> `"1234.50"`.
pub fn strip_number_formatting(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Rounds to at most `decimals` places; `2.0` stays `2.0`, not `2.00`.
///
/// `decimals` is capped at [`MAX_DECIMALS`]. A value with no fractional digits
/// left at that scale (including huge and non-finite values) is returned as is.
pub fn to_fixed_if_necessary(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let scaled = value * factor;
    // Past 2^52 an f64 has no fractional bits to round away.
    if !(scaled.abs() < 2f64.powi(52)) {
        return value;
    }
    scaled.round() / factor
}

pub fn random_string(len: usize) -> String {
    random_string_with(&mut rand::rng(), len)
}

pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHANUMERIC[rng.random_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    #[rstest]
    #[case("00:00", "12:00 AM")]
    #[case("09:30", "09:30 AM")]
    #[case("12:00", "12:00 PM")]
    #[case("13:05", "01:05 PM")]
    #[case("23:59:59", "11:59 PM")]
    fn converts_24hr_to_12hr(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_24hr_to_12hr(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("7:30")]
    #[case("24:00")]
    #[case("ab:cd")]
    #[case("1200")]
    fn rejects_bad_times(#[case] input: &str) {
        assert_eq!(
            convert_24hr_to_12hr(input),
            Err(TextError::InvalidTime(input.to_string()))
        );
    }

    #[test]
    fn elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(9), "00:09");
        assert_eq!(format_elapsed(75), "01:15");
        assert_eq!(format_elapsed(6000), "100:00");
    }

    #[test]
    fn strips_formatting() {
        assert_eq!(strip_number_formatting("1,234.50 $"), "1234.50");
        assert_eq!(strip_number_formatting("-12 345"), "-12345");
        assert_eq!(strip_number_formatting("abc"), "");
    }

    #[test]
    fn fixed_if_necessary() {
        assert_eq!(to_fixed_if_necessary(1.25, DEFAULT_DECIMALS), 1.3);
        assert_eq!(to_fixed_if_necessary(2.0, 2), 2.0);
        assert_eq!(to_fixed_if_necessary(1.23456, 3), 1.235);
        assert_eq!(to_fixed_if_necessary(7.6, 0), 8.0);
        assert_eq!(to_fixed_if_necessary(-2.46, 1), -2.5);
    }

    #[test]
    fn fixed_if_necessary_keeps_large_values() {
        assert_eq!(to_fixed_if_necessary(1e308, 1), 1e308);
        assert_eq!(to_fixed_if_necessary(-1e308, 3), -1e308);
        assert_eq!(to_fixed_if_necessary(1.5, 400), 1.5);
        assert_eq!(to_fixed_if_necessary(1.5, u32::MAX), 1.5);
        assert_eq!(to_fixed_if_necessary(f64::INFINITY, 2), f64::INFINITY);
        assert!(to_fixed_if_necessary(f64::NAN, 2).is_nan());
    }

    #[test]
    fn random_strings() {
        let s = random_string(DEFAULT_RANDOM_LEN);
        assert_eq!(s.len(), DEFAULT_RANDOM_LEN);
        assert!(s.bytes().all(|b| ALPHANUMERIC.contains(&b)));
        assert_eq!(random_string(0), "");

        let a = random_string_with(&mut StdRng::seed_from_u64(7), 32);
        let b = random_string_with(&mut StdRng::seed_from_u64(7), 32);
        assert_eq!(a, b);
    }

    #[test]
    fn blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }
}
