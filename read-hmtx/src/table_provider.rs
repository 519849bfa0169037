//! a trait for things that can serve font tables

use types::Tag;

use crate::{tables, FontData, FontRead, ReadError};

/// A table that has an associated tag.
///
/// This is true of top-level tables, but not their various subtables.
pub trait TopLevelTable {
    /// The table's tag.
    const TAG: Tag;
}

/// An interface for accessing tables from a font (or font-like object)
///
/// This is the table locator: implementors only need to say where the bytes
/// for a given tag are. The provided methods handle parsing, including
/// gathering the values from `maxp` and `hhea` that `hmtx` is read with.
pub trait TableProvider<'a> {
    fn data_for_tag(&self, tag: Tag) -> Option<FontData<'a>>;

    fn expect_data_for_tag(&self, tag: Tag) -> Result<FontData<'a>, ReadError> {
        self.data_for_tag(tag).ok_or(ReadError::TableIsMissing(tag))
    }

    fn maxp(&self) -> Result<tables::maxp::Maxp<'a>, ReadError> {
        self.expect_data_for_tag(tables::maxp::Maxp::TAG)
            .and_then(FontRead::read)
    }

    fn hhea(&self) -> Result<tables::hhea::Hhea<'a>, ReadError> {
        self.expect_data_for_tag(tables::hhea::Hhea::TAG)
            .and_then(FontRead::read)
    }

    /// Read the `hmtx` table, if the font has one.
    ///
    /// `hmtx` cannot be interpreted without `maxp` and `hhea`, so if either
    /// is missing this returns [`ReadError::MissingDependency`], whether or
    /// not the font contains `hmtx`. If they are present but `hmtx` is not,
    /// this returns `Ok(None)`.
    fn hmtx(&self) -> Result<Option<tables::hmtx::Hmtx<'a>>, ReadError> {
        let num_glyphs = self.maxp().map_err(into_dependency_error)?.num_glyphs();
        let number_of_h_metrics = self
            .hhea()
            .map_err(into_dependency_error)?
            .number_of_h_metrics();
        let Some(data) = self.data_for_tag(tables::hmtx::Hmtx::TAG) else {
            return Ok(None);
        };
        tables::hmtx::Hmtx::read(data, number_of_h_metrics, num_glyphs).map(Some)
    }
}

fn into_dependency_error(err: ReadError) -> ReadError {
    match err {
        ReadError::TableIsMissing(tag) => ReadError::MissingDependency(tag),
        other => other,
    }
}
