//! The decoded record: attributes keyed and iterated in ascending tag
//! order, which is also the canonical order on the wire.

use crate::attribute::AttributeFactory;
use crate::error::{AttrError, AttrResult};
use crate::parser::element::{parse_element, RawElement};
use crate::writer;
use crate::{Attribute, Encoding, Tag};
use log::{debug, trace};
use std::collections::BTreeMap;
use std::io::Write;

/// Ordered mapping from tag to attribute.
///
/// The list owns its attributes. Decoding stops at the first structural
/// error and the partial list is discarded; accessor errors on one
/// attribute never touch its neighbours.
#[derive(Debug, Default)]
pub struct AttributeList {
    attributes: BTreeMap<Tag, Attribute>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replacing any attribute already stored under the same tag.
    /// Returns the displaced attribute.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.attributes.insert(attribute.tag(), attribute)
    }

    pub fn get(&self, tag: Tag) -> Option<&Attribute> {
        self.attributes.get(&tag)
    }

    pub fn remove(&mut self, tag: Tag) -> Option<Attribute> {
        self.attributes.remove(&tag)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attributes in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    /// Decode a whole record with the default factory for the encoding.
    pub fn decode_from(buf: &[u8], encoding: Encoding) -> AttrResult<AttributeList> {
        let factory = AttributeFactory::new(encoding.endianness());
        Self::decode_with(buf, encoding, &factory)
    }

    /// Decode a whole record, ending normally at an element boundary.
    pub fn decode_with(
        buf: &[u8],
        encoding: Encoding,
        factory: &AttributeFactory,
    ) -> AttrResult<AttributeList> {
        debug!("decode record of {} bytes", buf.len());
        let mut list = AttributeList::new();
        let mut current = buf;

        while !current.is_empty() {
            let (rest, element) = next_element(current, encoding)?;
            let attribute = build(&element, factory)?;
            trace!("decoded {} as {}", attribute.tag(), attribute.vr());
            list.insert(attribute);
            current = rest;
        }

        debug!("decoded {} attributes", list.len());
        Ok(list)
    }

    /// Decode exactly `extent` bytes of elements from the front of `buf`.
    ///
    /// For records nested in a container that declared their size. An
    /// element reaching past the extent is an overflow, not a truncation:
    /// the underlying stream continues, its framing is what lied.
    pub fn decode_extent(
        buf: &[u8],
        extent: usize,
        encoding: Encoding,
    ) -> AttrResult<AttributeList> {
        let factory = AttributeFactory::new(encoding.endianness());
        let mut list = AttributeList::new();
        let mut current = buf;
        let mut remaining = extent;

        while remaining > 0 {
            let (rest, element) = next_element(current, encoding)?;
            let consumed = current.len() - rest.len();
            if consumed > remaining {
                return Err(AttrError::LengthOverflow {
                    tag: element.tag,
                    length: element.length as usize,
                    limit: remaining,
                });
            }
            remaining -= consumed;
            let attribute = build(&element, &factory)?;
            list.insert(attribute);
            current = rest;
        }

        Ok(list)
    }

    /// Serialize every attribute in ascending tag order.
    pub fn encode_to<W: Write>(&self, w: &mut W, encoding: Encoding) -> AttrResult<()> {
        for attribute in self.attributes.values() {
            writer::write_element(w, attribute, encoding)?;
        }
        Ok(())
    }

    pub fn encode_to_vec(&self, encoding: Encoding) -> AttrResult<Vec<u8>> {
        let mut out = vec![];
        self.encode_to(&mut out, encoding)?;
        Ok(out)
    }
}

fn next_element(buf: &[u8], encoding: Encoding) -> AttrResult<(&[u8], RawElement)> {
    match parse_element(buf, encoding) {
        Ok(parsed) => Ok(parsed),
        // The stream is no longer trustworthy after either of these, the
        // caller gets the error instead of a partial attribute.
        Err(nom::Err::Incomplete(_)) => Err(AttrError::StreamTruncated),
        Err(e) => Err(AttrError::Format(format!("{}", e))),
    }
}

fn build(element: &RawElement, factory: &AttributeFactory) -> AttrResult<Attribute> {
    if element.length % 2 == 1 {
        return Err(AttrError::Format(format!(
            "element {} has odd value length {}",
            element.tag, element.length
        )));
    }
    match &element.vr {
        Some(vr) => factory.create(element.tag, vr.clone(), element.data),
        None => factory.create_implicit(element.tag, element.data),
    }
}
