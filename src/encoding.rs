//! Wire-level encoding parameters. They decide how each element is framed:
//! the byte order of the fixed-width fields and whether the VR code is
//! present on the wire (explicit) or has to come from the tag dictionary
//! (implicit).

use nom::number::Endianness;

/// Byte order and VR explicitness for one record.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Encoding {
    endianness: Endianness,
    explicit_vr: bool,
}

impl Encoding {
    pub fn little_endian_explicit() -> Self {
        Self {
            endianness: Endianness::Little,
            explicit_vr: true,
        }
    }

    pub fn big_endian_explicit() -> Self {
        Self {
            endianness: Endianness::Big,
            explicit_vr: true,
        }
    }

    pub fn little_endian_implicit() -> Self {
        Self {
            endianness: Endianness::Little,
            explicit_vr: false,
        }
    }

    /// Return the endianness in which the record data was encoded.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Return true if the value representation is explicit in data elements
    pub fn is_vr_explicit(&self) -> bool {
        self.explicit_vr
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::little_endian_explicit()
    }
}

/// How the factory treats a VR code it does not recognize.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UnknownVrPolicy {
    /// Keep the code and the raw value bytes as an opaque attribute.
    Preserve,
    /// Fail the decode with a framing error.
    Reject,
}

impl Default for UnknownVrPolicy {
    fn default() -> Self {
        UnknownVrPolicy::Preserve
    }
}
