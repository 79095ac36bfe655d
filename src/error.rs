use thiserror::Error;

/// All errors that the crate can generate. Every one of them is the result of a
/// call that violated a precondition; none are transient, and layout itself
/// never fails.
#[derive(Error, Debug)]
pub enum TypesetError {
    #[error("text is not valid UTF-8 (valid up to byte {valid_up_to})")]
    /// Text handed to a write was not valid UTF-8, or a sub-span write split a
    /// multi-byte character
    MalformedText { valid_up_to: usize },

    #[error("no content block is selected")]
    /// A sub-span write was attempted before any content block was selected
    NoSelection,

    #[error("content handle was not issued by this typesetter")]
    /// The content handle does not belong to this typesetter's content store
    InvalidHandle,

    #[error("span end {end} exceeds the content block length {len}")]
    /// A sub-span write reached past the end of the selected content block
    OutOfRange { end: usize, len: usize },

    #[error("span begin {begin} is after span end {end}")]
    /// A sub-span write had its bounds reversed
    InvertedRange { begin: usize, end: usize },

    #[error("the typesetter has already completed its book")]
    /// The typesetter was used after [`complete`](crate::BookTypesetter::complete)
    AlreadyCompleted,

    #[error("style was not created by this typesetter")]
    /// The style does not belong to this typesetter's style registry
    UnknownStyle,

    #[error("break margin must be finite and non-negative, got {0}")]
    /// A line or section break was given a negative, infinite, or NaN margin
    InvalidMargin(f32),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}

impl From<std::str::Utf8Error> for TypesetError {
    fn from(e: std::str::Utf8Error) -> Self {
        TypesetError::MalformedText {
            valid_up_to: e.valid_up_to(),
        }
    }
}
