use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::num_vec::Vector3;




/// Parse a coordinate typed by the user. A string of the form `a/b` is read
/// as a fraction when both parts are numbers and `b` is non-zero; anything
/// else is parsed as a plain float. A plain float is the longest leading
/// number in the text, so trailing characters are ignored (`2abc` is 2, `1/`
/// is 1). Returns `None` when the text does not start with a number or the
/// result is not finite.
pub fn parse_coordinate(text: &str) -> Option<f64> {
    let clean = text.trim();

    if clean.contains('/') {
        let parts: Vec<_> = clean.split('/').collect();

        if let [num, den] = parts[..] {
            if let (Some(num), Some(den)) = (parse_plain(num), parse_plain(den)) {
                if den != 0.0 {
                    return Some(num / den).filter(|x| x.is_finite());
                }
            }
        }
    }
    parse_plain(clean)
}

fn parse_plain(text: &str) -> Option<f64> {
    let prefix = numeric_prefix(text.trim());

    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// The longest prefix of `text` of the form `[+-]digits[.digits][e[+-]digits]`
/// with at least one mantissa digit, or an empty string.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let int_end = digits_from(i);
    let mut num_digits = int_end - i;
    i = int_end;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_end = digits_from(i + 1);
        num_digits += frac_end - (i + 1);
        i = frac_end;
    }
    if num_digits == 0 {
        return "";
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;

        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_end = digits_from(j);

        if exp_end > j {
            i = exp_end;
        }
    }
    &text[..i]
}

/// Parse a vector written as comma-separated coordinates, e.g. `3,1,0` or
/// `1/2, 3`. Two coordinates give a vector in the xy-plane.
pub fn parse_vector(text: &str) -> Result<Vector3> {
    let coords = text
        .split(',')
        .map(parse_coordinate)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| Error::InvalidVector(text.to_string()))?;

    match coords[..] {
        [x, y] => Ok(Vector3::planar(x, y)),
        [x, y, z] => Ok(Vector3::new(x, y, z)),
        _ => Err(Error::InvalidVector(text.to_string())),
    }
}




/**
 * A single coordinate as edited by the user: the raw text as typed, and the
 * last numeric value that text successfully parsed to.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateEntry {
    text: String,
    value: f64,
}




// ============================================================================
impl CoordinateEntry {

    pub fn new(value: f64) -> Self {
        Self { text: value.to_string(), value }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Store the new text. The numeric value is replaced only if the text
    /// parses; returns whether it did.
    pub fn update(&mut self, text: &str) -> bool {
        self.text = text.to_string();

        match parse_coordinate(text) {
            Some(value) => {
                self.value = value;
                true
            }
            None => false,
        }
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_coordinate("3"), Some(3.0));
        assert_eq!(parse_coordinate("  -2.5 "), Some(-2.5));
        assert_eq!(parse_coordinate("1e3"), Some(1000.0));
    }

    #[test]
    fn parses_fractions() {
        assert_eq!(parse_coordinate("1/2"), Some(0.5));
        assert_eq!(parse_coordinate(" -3 / 4 "), Some(-0.75));
    }

    #[test]
    fn fraction_with_zero_denominator_falls_back_to_leading_number() {
        assert_eq!(parse_coordinate("1/0"), Some(1.0));
        assert_eq!(parse_coordinate("1/"), Some(1.0));
        assert_eq!(parse_coordinate("1/2/3"), Some(1.0));
    }

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(parse_coordinate("2abc"), Some(2.0));
        assert_eq!(parse_coordinate("1e"), Some(1.0));
        assert_eq!(parse_coordinate("1.5e-1x"), Some(0.15));
        assert_eq!(parse_coordinate(".5"), Some(0.5));
        assert_eq!(parse_coordinate("3./4"), Some(0.75));
    }

    #[test]
    fn text_without_leading_number_is_rejected() {
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("-"), None);
        assert_eq!(parse_coordinate("."), None);
        assert_eq!(parse_coordinate("a/b"), None);
        assert_eq!(parse_coordinate("x2"), None);
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_coordinate("inf"), None);
        assert_eq!(parse_coordinate("1e999"), None);
    }

    #[test]
    fn parses_vectors() {
        assert_eq!(parse_vector("3,1").unwrap(), Vector3::planar(3.0, 1.0));
        assert_eq!(parse_vector("2, 2, 1/2").unwrap(), Vector3::new(2.0, 2.0, 0.5));
        assert!(parse_vector("1").is_err());
        assert!(parse_vector("1,2,3,4").is_err());
        assert!(parse_vector("1,x").is_err());
    }

    #[test]
    fn entry_keeps_last_good_value() {
        let mut entry = CoordinateEntry::new(3.0);
        assert_eq!(entry.text(), "3");

        assert!(entry.update("1/4"));
        assert_eq!(entry.value(), 0.25);

        assert!(!entry.update("abc"));
        assert_eq!(entry.text(), "abc");
        assert_eq!(entry.value(), 0.25);

        assert!(entry.update("1/"));
        assert_eq!(entry.text(), "1/");
        assert_eq!(entry.value(), 1.0);
    }
}
