use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ChequeError, Result};

static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:\.(\d+))?$").expect("valid decimal regex"));

/// Largest whole-dollar amount both numeral expanders can spell out
/// (the English scale words stop at trillion).
pub const MAX_WHOLE: u64 = 1_000_000_000_000_000 - 1;

/// A validated cheque amount: whole dollars plus cents in [0, 99].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAmount {
    pub whole: u64,
    pub subunit: u8,
}

/// Parses a raw amount string such as `"123"`, `"123.45"` or `"1,234.50"`.
///
/// Surrounding whitespace and comma grouping separators are stripped before
/// validation. Amounts are accepted exactly as written: anything with more
/// than two fractional digits is rejected rather than rounded.
pub fn parse_amount(raw: &str) -> Result<ParsedAmount> {
    let cleaned: String = raw.trim().replace(',', "");

    if let Some(rest) = cleaned.strip_prefix('-') {
        if DECIMAL_RE.is_match(rest) {
            return Err(ChequeError::NegativeAmount(raw.trim().to_string()));
        }
    }

    let captures = DECIMAL_RE
        .captures(&cleaned)
        .ok_or_else(|| ChequeError::InvalidFormat(raw.trim().to_string()))?;

    let frac = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    if frac.len() > 2 {
        return Err(ChequeError::PrecisionExceeded(raw.trim().to_string()));
    }

    let int_part = cleaned.split('.').next().unwrap_or(&cleaned);
    let whole: u64 = int_part
        .parse()
        .ok()
        .filter(|&n| n <= MAX_WHOLE)
        .ok_or_else(|| ChequeError::RangeExceeded(raw.trim().to_string()))?;

    // One fractional digit means tenths: "123.4" is 40 cents.
    let subunit = match frac.len() {
        0 => 0,
        1 => frac.parse::<u8>().expect("single digit") * 10,
        _ => frac.parse::<u8>().expect("two digits"),
    };

    Ok(ParsedAmount { whole, subunit })
}
