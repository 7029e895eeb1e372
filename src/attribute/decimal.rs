//! Decimal string (DS) specifics: strict numeral validation and the
//! opt-in reformatting path.
//!
//! The default accessor hands back the source tokens untouched. Device
//! records carry meaning in the spelling itself (trailing zeros, the
//! exponent form the device chose), so a numeric rewrite only happens when
//! the caller passes a formatter explicitly.

use super::Attribute;
use crate::error::{AttrError, AttrResult};
use crate::Tag;

/// Locale-independent fixed-fraction formatter for decimal values.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DecimalFormat {
    decimals: usize,
}

impl DecimalFormat {
    /// A formatter printing `decimals` digits after the point.
    pub fn with_decimals(decimals: usize) -> Self {
        Self { decimals }
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }
}

impl Attribute {
    /// String values with optional numeric reformatting.
    ///
    /// Without a formatter this is `string_values`: the unmodified source
    /// tokens. With one, every value is parsed and re-rendered, which
    /// discards the source spelling.
    pub fn formatted_string_values(
        &self,
        format: Option<&DecimalFormat>,
    ) -> AttrResult<Vec<String>> {
        match format {
            None => self.string_values(),
            Some(fmt) => Ok(self
                .double_values()?
                .into_iter()
                .map(|v| fmt.format(v))
                .collect()),
        }
    }
}

/// Parse every token or fail the whole call: a partially numeric value is
/// not meaningful to a consumer.
pub(crate) fn parse_all(tag: Tag, tokens: &[String]) -> AttrResult<Vec<f64>> {
    tokens
        .iter()
        .map(|token| {
            if !is_decimal_numeral(token) {
                return Err(AttrError::NumericParse {
                    tag,
                    token: token.clone(),
                });
            }
            token.parse::<f64>().map_err(|_| AttrError::NumericParse {
                tag,
                token: token.clone(),
            })
        })
        .collect()
}

/// Optional sign, digits, optional fraction, optional exponent. Stricter
/// than `f64::from_str`, which also accepts spellings like `inf` and `nan`
/// that are not legal in a decimal string.
fn is_decimal_numeral(token: &str) -> bool {
    let bytes = token.as_bytes();
    let mut i = 0;

    if let Some(&b'+') | Some(&b'-') = bytes.first() {
        i += 1;
    }

    let int_digits = digit_run(bytes, i);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = digit_run(bytes, i);
        i += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if let Some(&b'e') | Some(&b'E') = bytes.get(i) {
        i += 1;
        if let Some(&b'+') | Some(&b'-') = bytes.get(i) {
            i += 1;
        }
        let exp_digits = digit_run(bytes, i);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == bytes.len()
}

fn digit_run(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}
