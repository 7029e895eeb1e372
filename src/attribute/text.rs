//! Byte-level rules shared by the text VRs: structural padding, the
//! backslash delimiter and representation-defined whitespace handling.

use crate::error::{AttrError, AttrResult};
use crate::ValueRepresentation;

pub(crate) const DELIMITER: char = '\\';

/// Decode a text value field into its tokens.
///
/// A single trailing byte equal to the VR's pad byte is structural and is
/// stripped, never more than one. Empty tokens are kept: the position of a
/// token is its value index, and an entirely empty field is an empty value
/// list.
pub(crate) fn decode_tokens(data: &[u8], vr: &ValueRepresentation) -> AttrResult<Vec<String>> {
    let text = std::str::from_utf8(data).map_err(|e| {
        AttrError::Format(format!("{} value is not valid text = {}", vr.code(), e))
    })?;
    let text = strip_pad(text, vr.padding());
    if text.is_empty() {
        return Ok(vec![]);
    }

    let tokens: Vec<String> = if vr.splits_values() {
        text.split(DELIMITER).map(str::to_owned).collect()
    } else {
        vec![text.to_owned()]
    };

    if trims_whitespace(vr) {
        Ok(tokens.into_iter().map(|t| t.trim().to_owned()).collect())
    } else {
        Ok(tokens)
    }
}

/// Join tokens and pad to even length. The even-length rule is what makes
/// the single-byte strip on decode lossless.
pub(crate) fn encode_tokens(tokens: &[String], vr: &ValueRepresentation) -> AttrResult<Vec<u8>> {
    if let Some(max) = vr.max_value_len() {
        for token in tokens {
            if token.len() > max {
                return Err(AttrError::Format(format!(
                    "{} value {:?} is longer than the {} byte maximum",
                    vr.code(),
                    token,
                    max
                )));
            }
        }
    }

    let mut bytes = tokens.join("\\").into_bytes();
    if bytes.len() % 2 == 1 {
        bytes.push(vr.padding());
    }
    Ok(bytes)
}

fn strip_pad(text: &str, pad: u8) -> &str {
    // The pad bytes are ascii, slicing one off cannot split a char.
    if !text.is_empty() && text.as_bytes()[text.len() - 1] == pad {
        &text[..text.len() - 1]
    } else {
        text
    }
}

/// DS and IS are bounded numeric text: surrounding whitespace per token is
/// insignificant and dropped at decode time. The plain text VRs keep their
/// bytes verbatim.
fn trims_whitespace(vr: &ValueRepresentation) -> bool {
    match vr {
        ValueRepresentation::DS | ValueRepresentation::IS => true,
        _ => false,
    }
}
