//! Selects and runs the concrete decoder for a VR.
//!
//! The caller hands over exactly the declared value field, so a decoder
//! can never consume more or fewer stream bytes than the element framed.
//! Picking the wrong variant for a code would be a bug in the dispatch
//! table, not a recoverable condition, which is why the table is written
//! out per code below.

use super::{text, Attribute, AttributeValue};
use crate::encoding::UnknownVrPolicy;
use crate::error::{AttrError, AttrResult};
use crate::vr::ValueKind;
use crate::{Tag, ValueRepresentation};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use log::debug;
use nom::number::Endianness;
use std::io::Cursor;

/// Builds the concrete attribute for a (tag, VR, value bytes) triple.
#[derive(Debug, Clone)]
pub struct AttributeFactory {
    endianness: Endianness,
    unknown_vr: UnknownVrPolicy,
}

impl AttributeFactory {
    pub fn new(endianness: Endianness) -> Self {
        Self {
            endianness,
            unknown_vr: UnknownVrPolicy::default(),
        }
    }

    pub fn with_unknown_vr(mut self, policy: UnknownVrPolicy) -> Self {
        self.unknown_vr = policy;
        self
    }

    /// Explicit-VR path: dispatch strictly on the supplied code.
    pub fn create(
        &self,
        tag: Tag,
        vr: ValueRepresentation,
        data: &[u8],
    ) -> AttrResult<Attribute> {
        let value = match vr.kind() {
            ValueKind::Text => {
                let tokens = text::decode_tokens(data, &vr)?;
                match vr {
                    ValueRepresentation::DS => AttributeValue::Decimal(tokens),
                    ValueRepresentation::IS => AttributeValue::Integer(tokens),
                    ValueRepresentation::DA => AttributeValue::Date(tokens),
                    _ => AttributeValue::Text(tokens),
                }
            }
            ValueKind::Binary(width) => self.decode_binary(tag, &vr, width, data)?,
            ValueKind::Opaque => {
                if let ValueRepresentation::UNKNOWN(code) = &vr {
                    match self.unknown_vr {
                        UnknownVrPolicy::Preserve => {
                            debug!("unrecognized VR {:?} for {}, keeping raw bytes", code, tag)
                        }
                        UnknownVrPolicy::Reject => {
                            return Err(AttrError::Format(format!(
                                "unrecognized VR {:?} for element {}",
                                code, tag
                            )))
                        }
                    }
                }
                AttributeValue::Opaque(data.to_vec())
            }
        };

        Ok(Attribute::new(tag, vr, value))
    }

    /// Implicit-VR path: the dictionary supplies the code.
    pub fn create_implicit(&self, tag: Tag, data: &[u8]) -> AttrResult<Attribute> {
        let vr = tag
            .implicit_vr()
            .ok_or_else(|| AttrError::UnrecognizedTag(tag))?;
        debug!("implicit VR of {} resolved to {}", tag, vr.code());
        self.create(tag, vr, data)
    }

    fn decode_binary(
        &self,
        tag: Tag,
        vr: &ValueRepresentation,
        width: usize,
        data: &[u8],
    ) -> AttrResult<AttributeValue> {
        if data.len() % width != 0 {
            return Err(AttrError::Format(format!(
                "element {} holds {} value bytes, not a multiple of the {} value width {}",
                tag,
                data.len(),
                vr.code(),
                width
            )));
        }

        let count = data.len() / width;
        let mut rdr = Cursor::new(data);
        let value = match vr {
            ValueRepresentation::US => {
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    let v = match self.endianness {
                        Endianness::Little => rdr.read_u16::<LittleEndian>()?,
                        Endianness::Big => rdr.read_u16::<BigEndian>()?,
                    };
                    values.push(v);
                }
                AttributeValue::UnsignedShort(values)
            }
            ValueRepresentation::SS => {
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    let v = match self.endianness {
                        Endianness::Little => rdr.read_i16::<LittleEndian>()?,
                        Endianness::Big => rdr.read_i16::<BigEndian>()?,
                    };
                    values.push(v);
                }
                AttributeValue::SignedShort(values)
            }
            ValueRepresentation::UL => {
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    let v = match self.endianness {
                        Endianness::Little => rdr.read_u32::<LittleEndian>()?,
                        Endianness::Big => rdr.read_u32::<BigEndian>()?,
                    };
                    values.push(v);
                }
                AttributeValue::UnsignedLong(values)
            }
            ValueRepresentation::SL => {
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    let v = match self.endianness {
                        Endianness::Little => rdr.read_i32::<LittleEndian>()?,
                        Endianness::Big => rdr.read_i32::<BigEndian>()?,
                    };
                    values.push(v);
                }
                AttributeValue::SignedLong(values)
            }
            other => {
                return Err(AttrError::Format(format!(
                    "no binary decoder for {}",
                    other.code()
                )))
            }
        };
        Ok(value)
    }
}

impl Default for AttributeFactory {
    fn default() -> Self {
        AttributeFactory::new(Endianness::Little)
    }
}
