//! Value representation defines how the bytes of a data element are
//! interpreted. Every VR defined for the record format is created from the
//! macro `vr!` together with its decoding policy: the width of the length
//! field on the wire, what the value field contains, the structural pad
//! byte, whether the value is backslash-delimited, and the maximum encoded
//! length of one value.

use crate::error::{AttrError, AttrResult};
use std::fmt;
use std::io::Read;

/// Width of the length field that follows the VR code on the wire.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LengthWidth {
    /// A 2-byte length.
    Short,
    /// 2 reserved bytes, then a 4-byte length.
    Long,
}

/// What the value field of an element contains.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValueKind {
    /// Delimiter-separated ASCII-compatible text.
    Text,
    /// Fixed-width binary values; the width of one value in bytes.
    Binary(usize),
    /// Bytes kept uninterpreted.
    Opaque,
}

macro_rules! vr {
    ( $(( $name:ident, $repr:expr, $desc:expr, $width:expr, $kind:expr, $pad:expr, $splits:expr, $maxlen:expr )),+ $(,)? ) => {

        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Eq, PartialEq)]
        pub enum ValueRepresentation {
            $($name,)+
            UNKNOWN(String),
        }

        impl ValueRepresentation {

            pub fn from_chars(first: char, second: char) -> Self {
                let vr_str = format!("{}{}", first, second);
                match vr_str.as_str() {
                    $(
                        $repr => ValueRepresentation::$name,
                    )+
                    _ => ValueRepresentation::UNKNOWN(vr_str),
                }
            }

            /// Will parse the value representation from a `Read` trait
            pub fn parse<T>(reader: &mut T) -> AttrResult<Self>
            where
                T: Read,
            {
                let mut buf = [0; 2];
                reader.read_exact(&mut buf)?;

                match std::str::from_utf8(&buf) {
                    Ok(vr) => Ok(match vr {
                        $(
                            $repr => ValueRepresentation::$name,
                        )+
                        _ => ValueRepresentation::UNKNOWN(String::from(vr)),
                    }),
                    Err(e) => Err(AttrError::Format(format!(
                        "VR bytes are not ascii text = {}",
                        e
                    ))),
                }
            }

            /// The two-character code as written on the wire.
            pub fn code(&self) -> &str {
                match self {
                    $(ValueRepresentation::$name => $repr,)+
                    ValueRepresentation::UNKNOWN(code) => code.as_str(),
                }
            }

            pub fn length_width(&self) -> LengthWidth {
                match self {
                    $(ValueRepresentation::$name => $width,)+
                    // Codes outside the table are framed like UN.
                    ValueRepresentation::UNKNOWN(_) => LengthWidth::Long,
                }
            }

            pub fn kind(&self) -> ValueKind {
                match self {
                    $(ValueRepresentation::$name => $kind,)+
                    ValueRepresentation::UNKNOWN(_) => ValueKind::Opaque,
                }
            }

            /// Pad byte appended when the encoded value field is odd.
            pub fn padding(&self) -> u8 {
                match self {
                    $(ValueRepresentation::$name => $pad,)+
                    ValueRepresentation::UNKNOWN(_) => 0x00,
                }
            }

            /// True when the value field may hold several backslash
            /// separated values.
            pub fn splits_values(&self) -> bool {
                match self {
                    $(ValueRepresentation::$name => $splits,)+
                    ValueRepresentation::UNKNOWN(_) => false,
                }
            }

            /// Maximum encoded length of a single value, when the format
            /// bounds it. Checked when encoding.
            pub fn max_value_len(&self) -> Option<usize> {
                match self {
                    $(ValueRepresentation::$name => $maxlen,)+
                    ValueRepresentation::UNKNOWN(_) => None,
                }
            }
        }

        impl fmt::Display for ValueRepresentation {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match *self {
                    $(ValueRepresentation::$name => write!(f, "{}", $desc),)+
                    ValueRepresentation::UNKNOWN(ref x) => write!(f, "Unknown VR({})", x),
                }
            }
        }
    }
}

vr! {
    (CS, "CS", "Code String", LengthWidth::Short, ValueKind::Text, b' ', true, Some(16)),
    (DA, "DA", "Date", LengthWidth::Short, ValueKind::Text, b' ', true, Some(8)),
    (DS, "DS", "Decimal String", LengthWidth::Short, ValueKind::Text, b' ', true, Some(16)),
    (IS, "IS", "Integer String", LengthWidth::Short, ValueKind::Text, b' ', true, Some(12)),
    (LO, "LO", "Long String", LengthWidth::Short, ValueKind::Text, b' ', true, Some(64)),
    (PN, "PN", "Person Name", LengthWidth::Short, ValueKind::Text, b' ', true, Some(64)),
    (SH, "SH", "Short String", LengthWidth::Short, ValueKind::Text, b' ', true, Some(16)),
    (ST, "ST", "Short Text", LengthWidth::Short, ValueKind::Text, b' ', false, Some(1024)),
    (TM, "TM", "Time", LengthWidth::Short, ValueKind::Text, b' ', true, Some(16)),
    (UI, "UI", "Unique Identifier", LengthWidth::Short, ValueKind::Text, 0x00, true, Some(64)),
    (SS, "SS", "Signed Short", LengthWidth::Short, ValueKind::Binary(2), 0x00, false, None),
    (US, "US", "Unsigned Short", LengthWidth::Short, ValueKind::Binary(2), 0x00, false, None),
    (SL, "SL", "Signed Long", LengthWidth::Short, ValueKind::Binary(4), 0x00, false, None),
    (UL, "UL", "Unsigned Long", LengthWidth::Short, ValueKind::Binary(4), 0x00, false, None),

    // Long length framing, value bytes kept as-is.
    (OB, "OB", "Other Byte", LengthWidth::Long, ValueKind::Opaque, 0x00, false, None),
    (OW, "OW", "Other Word", LengthWidth::Long, ValueKind::Opaque, 0x00, false, None),
    (UN, "UN", "Unknown", LengthWidth::Long, ValueKind::Opaque, 0x00, false, None)
}
