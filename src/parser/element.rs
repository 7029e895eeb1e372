use super::{parse_data, parse_length, parse_tag, parse_vr};
use crate::{Encoding, Tag, ValueRepresentation};
use log::trace;
use nom::combinator::cond;
use nom::IResult;

/// One data element as framed on the wire, value bytes still raw.
///
/// The value slice holds exactly the declared number of bytes: whatever a
/// concrete decoder does with them, the next element starts right after.
#[derive(Debug)]
pub(crate) struct RawElement<'buf> {
    pub tag: Tag,
    pub vr: Option<ValueRepresentation>,
    pub length: u32,
    pub data: &'buf [u8],
}

pub(crate) fn parse_element(buf: &[u8], encoding: Encoding) -> IResult<&[u8], RawElement> {
    let endian = encoding.endianness();
    let (buf, tag) = parse_tag(buf, endian)?;
    trace!("TAG = {}", tag);
    let (buf, vr) = cond(encoding.is_vr_explicit(), parse_vr)(buf)?;
    trace!("VR = {:?}", vr);
    let (buf, length) = parse_length(buf, &vr, endian)?;
    trace!("LENGTH = {}", length);

    let (buf, data) = parse_data(buf, length)?;

    Ok((
        buf,
        RawElement {
            tag,
            vr,
            length,
            data,
        },
    ))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_lee_element() {
        let vr = "SH".as_bytes();
        let label = "aVR ".as_bytes();
        let mut data = vec![
            0x3A, 0x00, 0x03, 0x02, // channel label
            vr[0], vr[1], // SH short string
            0x04, 0x00, // length is two bytes for SH
        ];
        data.extend_from_slice(label);

        let element = parse_element(&data, Encoding::little_endian_explicit());
        assert!(element.is_ok());
        let (_, element) = element.unwrap();

        assert_eq!(Tag::new(0x003A, 0x0203), element.tag);
        assert_eq!(element.length, 4);
        assert_eq!(std::str::from_utf8(element.data).unwrap(), "aVR ");
        assert_eq!(
            ValueRepresentation::SH,
            *element.vr.as_ref().unwrap()
        );
    }

    #[test]
    fn parse_lei_element() {
        let label = "aVR ".as_bytes();
        let mut data = vec![
            0x3A, 0x00, 0x03, 0x02, // channel label
            0x04, 0x00, 0x00, 0x00, // length is four bytes when no VR
        ];
        data.extend_from_slice(label);

        let element = parse_element(&data, Encoding::little_endian_implicit());
        assert!(element.is_ok());
        let (_, element) = element.unwrap();
        assert_eq!(Tag::new(0x003A, 0x0203), element.tag);
        assert_eq!(element.length, 4);
        assert_eq!(std::str::from_utf8(element.data).unwrap(), "aVR ");
        assert!(element.vr.is_none());
    }

    #[test]
    fn parse_bee_element() {
        let vr = "SH".as_bytes();
        let label = "aVR ".as_bytes();
        let mut data = vec![
            0x00, 0x3A, 0x02, 0x03, // channel label
            vr[0], vr[1], // SH short string
            0x00, 0x04, // length is two bytes for SH
        ];
        data.extend_from_slice(label);

        let element = parse_element(&data, Encoding::big_endian_explicit());
        assert!(element.is_ok());
        let (_, element) = element.unwrap();
        assert_eq!(Tag::new(0x003A, 0x0203), element.tag);
        assert_eq!(element.length, 4);
        assert_eq!(std::str::from_utf8(element.data).unwrap(), "aVR ");
        assert_eq!(
            ValueRepresentation::SH,
            *element.vr.as_ref().unwrap()
        );
    }

    #[test]
    fn parse_long_framed_element() {
        let vr = "OW".as_bytes();
        let mut data = vec![
            0x00, 0x54, 0x10, 0x10, // waveform data
            vr[0], vr[1], // OW other word
            0x00, 0x00, // reserved
            0x04, 0x00, 0x00, 0x00, // 4-byte length
        ];
        data.extend_from_slice(&[0xAB, 0xCD, 0xEF, 0x01]);

        let element = parse_element(&data, Encoding::little_endian_explicit());
        assert!(element.is_ok());
        let (rest, element) = element.unwrap();
        assert!(rest.is_empty());
        assert_eq!(Tag::new(0x5400, 0x1010), element.tag);
        assert_eq!(element.length, 4);
        assert_eq!(element.data, &[0xAB, 0xCD, 0xEF, 0x01]);
    }

    #[test]
    fn missing_value_bytes_are_incomplete() {
        let vr = "SH".as_bytes();
        let data = vec![
            0x3A, 0x00, 0x03, 0x02, //
            vr[0], vr[1], //
            0x0A, 0x00, // declares 10 bytes
            b'a', b'V', b'R', b' ', b'a', b'V', // but only 6 present
        ];

        match parse_element(&data, Encoding::little_endian_explicit()) {
            Err(nom::Err::Incomplete(_)) => {}
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }
}
