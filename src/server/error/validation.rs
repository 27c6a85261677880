use thiserror::Error;

/// Field-level validation failures for boat and load representations.
///
/// Each variant carries the exact client-facing message for the failing
/// check. Checks run in a fixed order (name → type → length for boats,
/// content → creation_date → volume for loads) and the first failure wins;
/// there is no multi-error aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `name` is not a string of at most 30 characters.
    #[error("The attribute name must be a string of at most 30 characters")]
    NameNotString,

    /// `name` contains a character outside `[A-Za-z0-9 ]`.
    #[error("The attribute name must not contain special characters")]
    NameSpecialChars,

    /// `type` is not a string of at most 30 characters.
    #[error("The attribute type must be a string of at most 30 characters")]
    TypeNotString,

    /// `type` contains a character outside `[A-Za-z0-9 ]`.
    #[error("The attribute type must not contain special characters")]
    TypeSpecialChars,

    /// `length` is not a number, or is out of range for the request kind.
    ///
    /// Full updates require a length strictly greater than zero; partial
    /// updates permit exactly zero.
    #[error("The attribute length must be a number greater than zero")]
    LengthOutOfRange,

    /// `content` is not a string of at most 75 characters.
    #[error("The attribute content must be a string of at most 75 characters")]
    ContentNotString,

    /// `creation_date` is not a string at all.
    #[error("The attribute creation_date must be a string")]
    DateNotString,

    /// `creation_date` does not match the `MM/DD/YYYY` shape.
    #[error("The attribute creation_date must be in the format MM/DD/YYYY")]
    DateBadFormat,

    /// `volume` is not a number, or is out of range for the request kind.
    ///
    /// Same full/partial asymmetry as `LengthOutOfRange`.
    #[error("The attribute volume must be a number greater than zero")]
    VolumeOutOfRange,
}
