//! Iranian identifier formats: mobile numbers, national IDs, postal codes and
//! Sheba (IBAN) account numbers

use crate::value::as_text;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\+98|0)?9\d{9}$").unwrap());

static SHEBA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^IR\d{24}$").unwrap());

/// Remove the separators people type inside long numbers
fn strip_separators(s: &str) -> String {
    s.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

/// Iranian mobile number, with optional `+98` or `0` prefix
pub fn phone(value: &Value) -> bool {
    as_text(value).is_some_and(|s| MOBILE_REGEX.is_match(&strip_separators(&s)))
}

/// Ten digits once spaces and hyphens are removed
pub fn postal_code(value: &Value) -> bool {
    as_text(value).is_some_and(|s| {
        let digits = strip_separators(&s);
        digits.len() == 10 && digits.bytes().all(|b| b.is_ascii_digit())
    })
}

pub fn national_id(value: &Value) -> bool {
    as_text(value).is_some_and(|s| is_valid_national_id(&s))
}

/// Checksum of the 10-digit national ID (کد ملی)
///
/// Weighted sum of the first nine digits with weights 10..2, `r = sum % 11`;
/// the check digit is `r` when `r < 2`, otherwise `11 - r`. Strings of one
/// repeated digit pass the checksum but are never issued.
pub fn is_valid_national_id(code: &str) -> bool {
    if code.len() != 10 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u32> = code.bytes().map(|b| u32::from(b - b'0')).collect();
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let sum: u32 = digits[..9]
        .iter()
        .zip((2..=10).rev())
        .map(|(d, weight)| d * weight)
        .sum();
    let remainder = sum % 11;
    let check = digits[9];

    if remainder < 2 {
        check == remainder
    } else {
        check == 11 - remainder
    }
}

pub fn sheba(value: &Value) -> bool {
    as_text(value).is_some_and(|s| is_valid_sheba(&s))
}

/// `IR` followed by 24 digits, with a valid IBAN mod-97 checksum
pub fn is_valid_sheba(input: &str) -> bool {
    let normalized = strip_separators(&input.to_uppercase());
    if !SHEBA_REGEX.is_match(&normalized) {
        return false;
    }
    iban_mod97(&normalized) == Some(1)
}

/// ISO 13616 remainder: move the first four characters to the end, expand
/// letters to `code - 55`, then fold the digit string through mod 97 in
/// seven-digit chunks after a two-digit head
pub fn iban_mod97(iban: &str) -> Option<u32> {
    if iban.len() < 4 || !iban.is_ascii() {
        return None;
    }
    let (head, tail) = iban.split_at(4);

    let mut numeric = String::with_capacity(iban.len() * 2);
    for c in tail.chars().chain(head.chars()) {
        match c {
            '0'..='9' => numeric.push(c),
            'A'..='Z' => numeric.push_str(&(c as u32 - 55).to_string()),
            _ => return None,
        }
    }
    if numeric.len() < 2 {
        return None;
    }

    let (first, rest) = numeric.split_at(2);
    let mut remainder: u64 = first.parse().ok()?;
    for chunk in rest.as_bytes().chunks(7) {
        for digit in chunk {
            remainder = remainder * 10 + u64::from(digit - b'0');
        }
        remainder %= 97;
    }
    Some((remainder % 97) as u32)
}
