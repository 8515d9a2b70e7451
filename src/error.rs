use std::num::ParseIntError;
use thiserror::Error;

/// Errors from parsing the `{1, 3, 64}` text form of a bitset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBitSetError {
    #[error("bitset must start with '{{'")]
    MissingOpenBrace,

    #[error("bitset must end with '}}'")]
    MissingCloseBrace,

    /// An empty slot between separators, e.g. `{1, , 3}`.
    #[error("empty element at position {position}")]
    EmptyElement { position: usize },

    /// An element above [`BitSet::MAX_PARSED_MEMBER`](crate::BitSet::MAX_PARSED_MEMBER).
    #[error("element {element} exceeds the largest parsable member {max}")]
    ElementTooLarge { element: String, max: usize },

    #[error("invalid element {element:?}: {source}")]
    InvalidElement {
        element: String,
        #[source]
        source: ParseIntError,
    },
}
