//! All the functions to parse the element framing.

use crate::vr::LengthWidth;
use crate::{Tag, ValueRepresentation};
use nom::bytes::streaming::take;
use nom::character::streaming::one_of;
use nom::number::streaming::{be_u16, be_u32, le_u16, le_u32};
use nom::number::Endianness;
use nom::IResult;

pub(crate) mod element;

/// The value of a data element is just a number of bytes.
pub(crate) fn parse_data(buf: &[u8], length: u32) -> IResult<&[u8], &[u8]> {
    take(length)(buf)
}

/// A tag is made of two u16: the group and the element.
pub(crate) fn parse_tag(buf: &[u8], endian: Endianness) -> IResult<&[u8], Tag> {
    let (rest, group) = parse_u16(buf, endian)?;
    let (rest, element) = parse_u16(rest, endian)?;
    Ok((rest, Tag::new(group, element)))
}

/// Parse a 4 bytes unsigned integer according to the endianness
pub(crate) fn parse_u32(buf: &[u8], endian: Endianness) -> IResult<&[u8], u32> {
    match endian {
        Endianness::Little => le_u32(buf),
        Endianness::Big => be_u32(buf),
    }
}

/// Parse a 2 bytes unsigned integer according to the endianness
pub(crate) fn parse_u16(buf: &[u8], endian: Endianness) -> IResult<&[u8], u16> {
    match endian {
        Endianness::Little => le_u16(buf),
        Endianness::Big => be_u16(buf),
    }
}

/// Value Representation is encoded as two characters (ascii).
pub(crate) fn parse_vr(buf: &[u8]) -> IResult<&[u8], ValueRepresentation> {
    let (rest, first_char) = one_of(VR_CHARS)(buf)?;
    let (rest, second_char) = one_of(VR_CHARS)(rest)?;
    Ok((
        rest,
        ValueRepresentation::from_chars(first_char, second_char),
    ))
}

/// The width of the length field depends on the framing:
/// - no VR on the wire => 4 bytes
/// - short VR => 2 bytes
/// - long VR => 2 reserved bytes, then 4 bytes of length.
pub(crate) fn parse_length<'buf>(
    buf: &'buf [u8],
    vr: &Option<ValueRepresentation>,
    endian: Endianness,
) -> IResult<&'buf [u8], u32> {
    match vr {
        Some(vr) => match vr.length_width() {
            LengthWidth::Long => {
                let (buf, _reserved) = parse_u16(buf, endian)?;
                parse_u32(buf, endian)
            }
            LengthWidth::Short => {
                let (buf, length) = parse_u16(buf, endian)?;
                Ok((buf, length as u32))
            }
        },
        None => parse_u32(buf, endian),
    }
}

const VR_CHARS: &str = "qwertyuiopasdfghjklzxcvbnmQWERTYUIOPASDFGHJKLZXCVBNM";
