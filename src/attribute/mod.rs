//! Decoded data elements. An `Attribute` owns the typed values of one tag,
//! with the concrete shape of the values selected by the VR. Uniform
//! accessors expose them as strings, numbers, dates or raw bytes
//! regardless of the representation; an accessor that does not apply to
//! the representation fails on its own without touching the rest of the
//! record.

use crate::error::{AttrError, AttrResult};
use crate::vr::ValueKind;
use crate::{Tag, ValueRepresentation};
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use chrono::NaiveDate;
use nom::number::Endianness;

pub(crate) mod decimal;
pub(crate) mod factory;
pub(crate) mod text;

pub use decimal::DecimalFormat;
pub use factory::AttributeFactory;

/// Typed value storage, one variant per family of representations.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// CS, LO, PN, SH, ST, TM, UI: delimiter-separated text tokens.
    Text(Vec<String>),
    /// DS: decimal numerals kept in their source spelling.
    Decimal(Vec<String>),
    /// IS: integer numerals kept in their source spelling.
    Integer(Vec<String>),
    /// DA: dates in `YYYYMMDD` spelling.
    Date(Vec<String>),
    UnsignedShort(Vec<u16>),
    SignedShort(Vec<i16>),
    UnsignedLong(Vec<u32>),
    SignedLong(Vec<i32>),
    /// OB, OW, UN and unrecognized VRs: bytes kept uninterpreted.
    Opaque(Vec<u8>),
}

/// One decoded data element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    tag: Tag,
    vr: ValueRepresentation,
    value: AttributeValue,
}

impl Attribute {
    pub(crate) fn new(tag: Tag, vr: ValueRepresentation, value: AttributeValue) -> Self {
        Self { tag, vr, value }
    }

    /// Build a text-family attribute from its tokens. Fails with
    /// `ValueConversion` when the VR does not hold text.
    pub fn strings(
        tag: Tag,
        vr: ValueRepresentation,
        tokens: Vec<String>,
    ) -> AttrResult<Attribute> {
        match vr.kind() {
            ValueKind::Text => {
                let value = match vr {
                    ValueRepresentation::DS => AttributeValue::Decimal(tokens),
                    ValueRepresentation::IS => AttributeValue::Integer(tokens),
                    ValueRepresentation::DA => AttributeValue::Date(tokens),
                    _ => AttributeValue::Text(tokens),
                };
                Ok(Attribute::new(tag, vr, value))
            }
            _ => Err(AttrError::ValueConversion {
                vr,
                requested: "text",
            }),
        }
    }

    /// Build a DS attribute from numbers, rendered in their shortest
    /// decimal spelling.
    pub fn decimals(tag: Tag, values: &[f64]) -> Attribute {
        let tokens = values.iter().map(|v| v.to_string()).collect();
        Attribute::new(
            tag,
            ValueRepresentation::DS,
            AttributeValue::Decimal(tokens),
        )
    }

    pub fn unsigned_shorts(tag: Tag, values: Vec<u16>) -> Attribute {
        Attribute::new(
            tag,
            ValueRepresentation::US,
            AttributeValue::UnsignedShort(values),
        )
    }

    pub fn signed_shorts(tag: Tag, values: Vec<i16>) -> Attribute {
        Attribute::new(
            tag,
            ValueRepresentation::SS,
            AttributeValue::SignedShort(values),
        )
    }

    pub fn unsigned_longs(tag: Tag, values: Vec<u32>) -> Attribute {
        Attribute::new(
            tag,
            ValueRepresentation::UL,
            AttributeValue::UnsignedLong(values),
        )
    }

    pub fn signed_longs(tag: Tag, values: Vec<i32>) -> Attribute {
        Attribute::new(
            tag,
            ValueRepresentation::SL,
            AttributeValue::SignedLong(values),
        )
    }

    /// Build an opaque attribute. Fails with `ValueConversion` when the VR
    /// interprets its bytes.
    pub fn bytes(tag: Tag, vr: ValueRepresentation, data: Vec<u8>) -> AttrResult<Attribute> {
        match vr.kind() {
            ValueKind::Opaque => Ok(Attribute::new(tag, vr, AttributeValue::Opaque(data))),
            _ => Err(AttrError::ValueConversion {
                vr,
                requested: "raw bytes",
            }),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn vr(&self) -> &ValueRepresentation {
        &self.vr
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    /// Number of values held by this attribute.
    pub fn multiplicity(&self) -> usize {
        match &self.value {
            AttributeValue::Text(v)
            | AttributeValue::Decimal(v)
            | AttributeValue::Integer(v)
            | AttributeValue::Date(v) => v.len(),
            AttributeValue::UnsignedShort(v) => v.len(),
            AttributeValue::SignedShort(v) => v.len(),
            AttributeValue::UnsignedLong(v) => v.len(),
            AttributeValue::SignedLong(v) => v.len(),
            AttributeValue::Opaque(_) => 1,
        }
    }

    /// The values as strings. Text tokens come back verbatim, numbers in
    /// their canonical decimal spelling. Opaque bytes have no string form.
    pub fn string_values(&self) -> AttrResult<Vec<String>> {
        match &self.value {
            AttributeValue::Text(tokens)
            | AttributeValue::Decimal(tokens)
            | AttributeValue::Integer(tokens)
            | AttributeValue::Date(tokens) => Ok(tokens.clone()),
            AttributeValue::UnsignedShort(v) => Ok(v.iter().map(|n| n.to_string()).collect()),
            AttributeValue::SignedShort(v) => Ok(v.iter().map(|n| n.to_string()).collect()),
            AttributeValue::UnsignedLong(v) => Ok(v.iter().map(|n| n.to_string()).collect()),
            AttributeValue::SignedLong(v) => Ok(v.iter().map(|n| n.to_string()).collect()),
            AttributeValue::Opaque(_) => Err(self.conversion_error("string")),
        }
    }

    /// The values as floating point numbers.
    ///
    /// All or nothing: one bad token fails the whole call, the attribute
    /// itself stays usable through `string_values`.
    pub fn double_values(&self) -> AttrResult<Vec<f64>> {
        match &self.value {
            AttributeValue::Decimal(tokens) => decimal::parse_all(self.tag, tokens),
            AttributeValue::Integer(tokens) => self
                .parse_int_tokens(tokens)
                .map(|v| v.into_iter().map(|n| n as f64).collect()),
            AttributeValue::UnsignedShort(v) => Ok(v.iter().map(|n| f64::from(*n)).collect()),
            AttributeValue::SignedShort(v) => Ok(v.iter().map(|n| f64::from(*n)).collect()),
            AttributeValue::UnsignedLong(v) => Ok(v.iter().map(|n| f64::from(*n)).collect()),
            AttributeValue::SignedLong(v) => Ok(v.iter().map(|n| f64::from(*n)).collect()),
            AttributeValue::Text(_) | AttributeValue::Date(_) | AttributeValue::Opaque(_) => {
                Err(self.conversion_error("floating point"))
            }
        }
    }

    /// The values as integers.
    pub fn int_values(&self) -> AttrResult<Vec<i64>> {
        match &self.value {
            AttributeValue::Integer(tokens) => self.parse_int_tokens(tokens),
            AttributeValue::UnsignedShort(v) => Ok(v.iter().map(|n| i64::from(*n)).collect()),
            AttributeValue::SignedShort(v) => Ok(v.iter().map(|n| i64::from(*n)).collect()),
            AttributeValue::UnsignedLong(v) => Ok(v.iter().map(|n| i64::from(*n)).collect()),
            AttributeValue::SignedLong(v) => Ok(v.iter().map(|n| i64::from(*n)).collect()),
            _ => Err(self.conversion_error("integer")),
        }
    }

    /// The values as dates, for the DA representation.
    pub fn date_values(&self) -> AttrResult<Vec<NaiveDate>> {
        match &self.value {
            AttributeValue::Date(tokens) => tokens
                .iter()
                .map(|t| NaiveDate::parse_from_str(t, "%Y%m%d").map_err(|e| e.into()))
                .collect(),
            _ => Err(self.conversion_error("date")),
        }
    }

    /// The raw bytes of an opaque value.
    pub fn byte_values(&self) -> AttrResult<&[u8]> {
        match &self.value {
            AttributeValue::Opaque(bytes) => Ok(bytes),
            _ => Err(self.conversion_error("raw bytes")),
        }
    }

    /// The encoded value field, always even in length.
    pub fn value_bytes(&self, endianness: Endianness) -> AttrResult<Vec<u8>> {
        let bytes = match &self.value {
            AttributeValue::Text(tokens)
            | AttributeValue::Decimal(tokens)
            | AttributeValue::Integer(tokens)
            | AttributeValue::Date(tokens) => text::encode_tokens(tokens, &self.vr)?,
            AttributeValue::UnsignedShort(values) => {
                let mut out = Vec::with_capacity(values.len() * 2);
                for v in values {
                    match endianness {
                        Endianness::Little => out.write_u16::<LittleEndian>(*v)?,
                        Endianness::Big => out.write_u16::<BigEndian>(*v)?,
                    }
                }
                out
            }
            AttributeValue::SignedShort(values) => {
                let mut out = Vec::with_capacity(values.len() * 2);
                for v in values {
                    match endianness {
                        Endianness::Little => out.write_i16::<LittleEndian>(*v)?,
                        Endianness::Big => out.write_i16::<BigEndian>(*v)?,
                    }
                }
                out
            }
            AttributeValue::UnsignedLong(values) => {
                let mut out = Vec::with_capacity(values.len() * 4);
                for v in values {
                    match endianness {
                        Endianness::Little => out.write_u32::<LittleEndian>(*v)?,
                        Endianness::Big => out.write_u32::<BigEndian>(*v)?,
                    }
                }
                out
            }
            AttributeValue::SignedLong(values) => {
                let mut out = Vec::with_capacity(values.len() * 4);
                for v in values {
                    match endianness {
                        Endianness::Little => out.write_i32::<LittleEndian>(*v)?,
                        Endianness::Big => out.write_i32::<BigEndian>(*v)?,
                    }
                }
                out
            }
            AttributeValue::Opaque(bytes) => {
                let mut out = bytes.clone();
                if out.len() % 2 == 1 {
                    out.push(self.vr.padding());
                }
                out
            }
        };
        Ok(bytes)
    }

    fn parse_int_tokens(&self, tokens: &[String]) -> AttrResult<Vec<i64>> {
        tokens
            .iter()
            .map(|token| {
                token.parse::<i64>().map_err(|_| AttrError::NumericParse {
                    tag: self.tag,
                    token: token.clone(),
                })
            })
            .collect()
    }

    fn conversion_error(&self, requested: &'static str) -> AttrError {
        AttrError::ValueConversion {
            vr: self.vr.clone(),
            requested,
        }
    }
}
