//! Tags are represented by two 2bytes unsigned integers: gggg,eeee where
//! gggg is the group and eeee is the element. The pair orders a record:
//! attribute lists iterate and re-encode in ascending (group, element).
//!
//! Tags known to the record format live in `tags/dictionary.csv` and are
//! compiled in by the build script through the `dictionary!` macro. The
//! dictionary supplies the keyword, the display name and the VR to assume
//! when an element carries none on the wire.

use crate::vr::ValueRepresentation;
use std::fmt;

/// Identifier of one data element.
///
/// Field order matters: the derived `Ord` compares the group first, which
/// is the canonical element order of the format.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tag {
    group: u16,
    element: u16,
}

impl Tag {
    pub const fn new(group: u16, element: u16) -> Tag {
        Tag { group, element }
    }

    pub fn group(&self) -> u16 {
        self.group
    }

    pub fn element(&self) -> u16 {
        self.element
    }

    pub fn keyword(&self) -> Option<&'static str> {
        self.entry().map(|e| e.keyword)
    }

    /// The VR to assume when the element carries none on the wire.
    pub fn implicit_vr(&self) -> Option<ValueRepresentation> {
        self.entry().map(|e| {
            let code = e.vr.as_bytes();
            ValueRepresentation::from_chars(code[0] as char, code[1] as char)
        })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04x},{:04x})", self.group, self.element)
    }
}

/// One row of the compiled tag dictionary.
#[derive(Debug)]
pub struct DictionaryEntry {
    pub tag: Tag,
    /// Two-character VR code of the tag.
    pub vr: &'static str,
    /// Number of values the tag holds, 0 when unbounded.
    pub multiplicity: usize,
    pub keyword: &'static str,
    pub name: &'static str,
}

macro_rules! dictionary {
    ($(( $group:expr, $element:expr, $vr:expr, $multiplicity:expr, $keyword:expr, $name:expr )),+ $(,)?) => {

        impl Tag {
            /// Look up the dictionary entry for this tag, if it is known.
            pub fn entry(&self) -> Option<&'static DictionaryEntry> {
                match (self.group, self.element) {
                    $(
                        ($group, $element) => {
                            static ENTRY: DictionaryEntry = DictionaryEntry {
                                tag: Tag::new($group, $element),
                                vr: $vr,
                                multiplicity: $multiplicity,
                                keyword: $keyword,
                                name: $name,
                            };
                            Some(&ENTRY)
                        }
                    )+
                    _ => None,
                }
            }

            /// Find a known tag by its dictionary keyword.
            #[allow(unreachable_patterns)]
            pub fn from_keyword(keyword: &str) -> Option<Tag> {
                match keyword {
                    $($keyword => Some(Tag::new($group, $element)),)+
                    _ => None,
                }
            }
        }
    };
}

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_group_then_element() {
        let mut tags = vec![
            Tag::new(0x0010, 0x0010),
            Tag::new(0x0008, 0x0020),
            Tag::new(0x0008, 0x0018),
        ];
        tags.sort();
        assert_eq!(
            vec![
                Tag::new(0x0008, 0x0018),
                Tag::new(0x0008, 0x0020),
                Tag::new(0x0010, 0x0010),
            ],
            tags
        );
    }

    #[test]
    fn display_is_lowercase_hex_pair() {
        assert_eq!("(003a,001a)", format!("{}", Tag::new(0x003A, 0x001A)));
    }

    #[test]
    fn known_tag_has_entry() {
        let entry = Tag::new(0x0010, 0x0010).entry().unwrap();
        assert_eq!("PatientName", entry.keyword);
        assert_eq!("PN", entry.vr);
        assert_eq!(1, entry.multiplicity);
    }

    #[test]
    fn keyword_lookup_is_bidirectional() {
        let tag = Tag::from_keyword("SamplingFrequency").unwrap();
        assert_eq!(Tag::new(0x003A, 0x001A), tag);
        assert_eq!(Some("SamplingFrequency"), tag.keyword());
    }

    #[test]
    fn private_tag_has_no_entry() {
        let tag = Tag::new(0x0009, 0x0001);
        assert!(tag.entry().is_none());
        assert!(tag.implicit_vr().is_none());
    }

    #[test]
    fn implicit_vr_comes_from_dictionary() {
        use crate::ValueRepresentation;
        assert_eq!(
            Some(ValueRepresentation::DS),
            Tag::new(0x003A, 0x001A).implicit_vr()
        );
        assert_eq!(
            Some(ValueRepresentation::US),
            Tag::new(0x003A, 0x0005).implicit_vr()
        );
    }
}
