//! Traits for interpreting font data

use types::Tag;

use crate::font_data::FontData;

/// A type that can be read from raw table data.
///
/// This trait is implemented for tables that are self-describing: that
/// is, tables that do not require any external state in order to interpret their
/// underlying bytes. (Tables that require external state implement
/// [`FontReadWithArgs`] instead)
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    ///
    /// In the case of a table, this method is responsible for ensuring the input
    /// data is consistent: that every field and array the table describes is
    /// within the bounds of `data`.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// A trait for a type that needs additional arguments to be read.
pub trait ReadArgs {
    type Args: Copy;
}

/// A trait for types that require external data in order to be constructed.
///
/// `hmtx` is the canonical example: its layout depends on counts stored in
/// `maxp` and `hhea`. Any type that requires external arguments also has a
/// custom `read` constructor where you can pass those arguments like normal.
pub trait FontReadWithArgs<'a>: Sized + ReadArgs {
    /// read an item, using the provided args.
    ///
    /// If a type requires multiple arguments, they will be passed as a tuple.
    fn read_with_args(data: FontData<'a>, args: &Self::Args) -> Result<Self, ReadError>;
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReadError {
    /// The data ended before everything the table describes could be read.
    OutOfBounds,
    /// A byte range was not a multiple of the size of the items it holds.
    InvalidArrayLen,
    /// The sfnt version at the start of a font was not recognized.
    InvalidSfnt(u32),
    /// A table was requested that the font does not contain.
    TableIsMissing(Tag),
    /// A table required to interpret another table is missing.
    MissingDependency(Tag),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "data ended before the table was complete"),
            ReadError::InvalidArrayLen => {
                write!(f, "Specified array length not a multiple of item size")
            }
            ReadError::InvalidSfnt(ver) => write!(f, "Invalid sfnt version 0x{ver:08X}"),
            ReadError::TableIsMissing(tag) => write!(f, "the {tag} table is missing"),
            ReadError::MissingDependency(tag) => {
                write!(f, "the {tag} table is required but missing")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "std")]
    fn error_messages() {
        assert_eq!(
            ReadError::OutOfBounds.to_string(),
            "data ended before the table was complete"
        );
        assert_eq!(
            ReadError::MissingDependency(Tag::new(b"hhea")).to_string(),
            "the hhea table is required but missing"
        );
    }
}
