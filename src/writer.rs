//! Serializes attributes back to the element framing. The reverse of the
//! parser module: tag, VR code and length per the VR's width policy, then
//! the value bytes.

use crate::error::{AttrError, AttrResult};
use crate::vr::LengthWidth;
use crate::{Attribute, Encoding};
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use nom::number::Endianness;
use std::io::Write;

pub(crate) fn write_u16<W: Write>(w: &mut W, value: u16, endian: Endianness) -> AttrResult<()> {
    match endian {
        Endianness::Little => w.write_u16::<LittleEndian>(value)?,
        Endianness::Big => w.write_u16::<BigEndian>(value)?,
    }
    Ok(())
}

pub(crate) fn write_u32<W: Write>(w: &mut W, value: u32, endian: Endianness) -> AttrResult<()> {
    match endian {
        Endianness::Little => w.write_u32::<LittleEndian>(value)?,
        Endianness::Big => w.write_u32::<BigEndian>(value)?,
    }
    Ok(())
}

/// Write one element.
pub(crate) fn write_element<W: Write>(
    w: &mut W,
    attribute: &Attribute,
    encoding: Encoding,
) -> AttrResult<()> {
    let endian = encoding.endianness();
    let value = attribute.value_bytes(endian)?;
    let tag = attribute.tag();

    write_u16(w, tag.group(), endian)?;
    write_u16(w, tag.element(), endian)?;

    if encoding.is_vr_explicit() {
        let vr = attribute.vr();
        let code = vr.code().as_bytes();
        if code.len() != 2 {
            return Err(AttrError::Format(format!(
                "VR code {:?} is not two bytes",
                vr.code()
            )));
        }
        w.write_all(code)?;

        match vr.length_width() {
            LengthWidth::Short => {
                if value.len() > std::u16::MAX as usize {
                    return Err(AttrError::LengthOverflow {
                        tag,
                        length: value.len(),
                        limit: std::u16::MAX as usize,
                    });
                }
                write_u16(w, value.len() as u16, endian)?;
            }
            LengthWidth::Long => {
                write_u16(w, 0, endian)?; // reserved
                if value.len() > std::u32::MAX as usize {
                    return Err(AttrError::LengthOverflow {
                        tag,
                        length: value.len(),
                        limit: std::u32::MAX as usize,
                    });
                }
                write_u32(w, value.len() as u32, endian)?;
            }
        }
    } else {
        if value.len() > std::u32::MAX as usize {
            return Err(AttrError::LengthOverflow {
                tag,
                length: value.len(),
                limit: std::u32::MAX as usize,
            });
        }
        write_u32(w, value.len() as u32, endian)?;
    }

    w.write_all(&value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tag, ValueRepresentation};

    #[test]
    fn short_framed_element_bytes() {
        let attribute = Attribute::strings(
            Tag::new(0x003A, 0x0203),
            ValueRepresentation::SH,
            vec!["aVR".to_string()],
        )
        .unwrap();

        let mut out = vec![];
        write_element(&mut out, &attribute, Encoding::little_endian_explicit()).unwrap();
        assert_eq!(
            vec![
                0x3A, 0x00, 0x03, 0x02, // tag
                b'S', b'H', // VR code
                0x04, 0x00, // 2-byte length, padded to 4
                b'a', b'V', b'R', b' ', // value
            ],
            out
        );
    }

    #[test]
    fn long_framed_element_bytes() {
        let attribute = Attribute::bytes(
            Tag::new(0x5400, 0x1010),
            ValueRepresentation::OW,
            vec![0xAB, 0xCD],
        )
        .unwrap();

        let mut out = vec![];
        write_element(&mut out, &attribute, Encoding::little_endian_explicit()).unwrap();
        assert_eq!(
            vec![
                0x00, 0x54, 0x10, 0x10, // tag
                b'O', b'W', // VR code
                0x00, 0x00, // reserved
                0x02, 0x00, 0x00, 0x00, // 4-byte length
                0xAB, 0xCD, // value
            ],
            out
        );
    }

    #[test]
    fn implicit_element_has_no_vr_code() {
        let attribute = Attribute::strings(
            Tag::new(0x003A, 0x0203),
            ValueRepresentation::SH,
            vec!["aVR".to_string()],
        )
        .unwrap();

        let mut out = vec![];
        write_element(&mut out, &attribute, Encoding::little_endian_implicit()).unwrap();
        assert_eq!(
            vec![
                0x3A, 0x00, 0x03, 0x02, // tag
                0x04, 0x00, 0x00, 0x00, // 4-byte length when no VR
                b'a', b'V', b'R', b' ', // value
            ],
            out
        );
    }

    #[test]
    fn big_endian_header_fields() {
        let attribute = Attribute::unsigned_shorts(Tag::new(0x003A, 0x0005), vec![12]);

        let mut out = vec![];
        write_element(&mut out, &attribute, Encoding::big_endian_explicit()).unwrap();
        assert_eq!(
            vec![
                0x00, 0x3A, 0x00, 0x05, // tag
                b'U', b'S', // VR code
                0x00, 0x02, // length
                0x00, 0x0C, // value
            ],
            out
        );
    }
}
