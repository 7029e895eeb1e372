use crate::tag::Tag;
use crate::ValueRepresentation;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttrError {
    #[error("Invalid element framing = {0}")]
    Format(String),

    #[error("Input ended in the middle of an element")]
    StreamTruncated,

    #[error("Value length {length} of element {tag} does not fit within {limit} bytes")]
    LengthOverflow { tag: Tag, length: usize, limit: usize },

    #[error("No dictionary entry for tag {0}, cannot infer a value representation")]
    UnrecognizedTag(Tag),

    #[error("Value {token:?} of element {tag} is not a decimal numeral")]
    NumericParse { tag: Tag, token: String },

    #[error("Cannot read {requested} values out of a {vr} attribute")]
    ValueConversion {
        vr: ValueRepresentation,
        requested: &'static str,
    },

    #[error("Cannot parse DA value to date = {0}")]
    ParseDate(#[from] chrono::format::ParseError),

    #[error(transparent)]
    IoError(#[from] io::Error),
}

pub type AttrResult<T> = Result<T, AttrError>;
