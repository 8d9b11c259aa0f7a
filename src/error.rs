use thiserror::Error;

/// Every failure a `PersonalName` can produce.
///
/// All variants are raised synchronously at the point of misuse; nothing is
/// retried internally. Well-formed requests that simply have no data (an
/// unset element type, an alt-name index past the end of the list) are not
/// errors and return an empty string instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("configuration key {0} already set")]
    DuplicateKey(String),

    #[error("configuration entry {0:?} is not a single key=value pair")]
    MalformedEntry(String),

    #[error("index {0} must be an integer")]
    MalformedIndex(String),

    #[error("delimiter {0} must be a single character")]
    MalformedDelimiter(String),

    #[error("alternate name list is missing its end delimiter")]
    UnterminatedAltList,

    #[error("start must come before end")]
    InvertedRange,

    #[error("cannot mix positive and negative indices")]
    MixedIndexSigns,

    #[error("first element is one")]
    ZeroIndex,

    #[error("no alternate names found")]
    NoAltNames,

    #[error("unsupported element type {0}")]
    UnknownTag(String),

    #[error("element {0} not found in main name")]
    ElementNotFound(String),

    #[error("{0}: use alt_name for alternate names")]
    NicknameViaElement(String),
}
