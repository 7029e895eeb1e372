mod attribute;
mod encoding;
mod error;
mod list;
mod parser;
mod tag;
mod vr;
mod writer;

/*
    Crate exports.
*/
pub use attribute::{Attribute, AttributeFactory, AttributeValue, DecimalFormat};
pub use encoding::{Encoding, UnknownVrPolicy};
pub use error::{AttrError, AttrResult};
pub use list::AttributeList;
pub use tag::{DictionaryEntry, Tag};
pub use vr::{LengthWidth, ValueKind, ValueRepresentation};
