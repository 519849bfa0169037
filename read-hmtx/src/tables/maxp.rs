//! The [maxp (Maximum Profile)](https://docs.microsoft.com/en-us/typography/opentype/spec/maxp) table
//!
//! Only the prefix shared by versions 0.5 and 1.0 is interpreted; the
//! TrueType-specific limits that follow in version 1.0 are not needed to
//! read horizontal metrics.

use std::ops::Range;

use types::{FixedSize, Tag, Version16Dot16};

use crate::{FontData, FontRead, MinByteRange, ReadError, TableRef, TopLevelTable};

/// The [maxp](https://docs.microsoft.com/en-us/typography/opentype/spec/maxp) table
pub type Maxp<'a> = TableRef<'a, MaxpMarker>;

/// The layout of a [`Maxp`] table.
#[derive(Debug, Clone, Copy)]
#[doc(hidden)]
pub struct MaxpMarker {}

impl MaxpMarker {
    pub fn version_byte_range(&self) -> Range<usize> {
        let start = 0;
        start..start + Version16Dot16::RAW_BYTE_LEN
    }

    pub fn num_glyphs_byte_range(&self) -> Range<usize> {
        let start = self.version_byte_range().end;
        start..start + u16::RAW_BYTE_LEN
    }
}

impl TopLevelTable for Maxp<'_> {
    /// `maxp`
    const TAG: Tag = Tag::new(b"maxp");
}

impl<'a> FontRead<'a> for Maxp<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        cursor.advance::<Version16Dot16>();
        cursor.advance::<u16>();
        cursor.finish(MaxpMarker {})
    }
}

impl<'a> Maxp<'a> {
    /// The version: 0x00005000 for version 0.5, 0x00010000 for version 1.0.
    pub fn version(&self) -> Version16Dot16 {
        let range = self.shape.version_byte_range();
        self.data.read_at(range.start).unwrap_or_default()
    }

    /// The number of glyphs in the font.
    pub fn num_glyphs(&self) -> u16 {
        let range = self.shape.num_glyphs_byte_range();
        self.data.read_at(range.start).unwrap_or_default()
    }
}

impl MinByteRange for Maxp<'_> {
    fn min_byte_range(&self) -> Range<usize> {
        0..self.shape.num_glyphs_byte_range().end
    }
}

impl std::fmt::Debug for Maxp<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Maxp")
            .field("version", &self.version())
            .field("num_glyphs", &self.num_glyphs())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_version_0_5() {
        let data = FontData::new(hmtx_test_data::maxp::VERSION_0_5_FIVE_GLYPHS);
        let maxp = Maxp::read(data).unwrap();
        assert_eq!(maxp.version(), Version16Dot16::VERSION_0_5);
        assert_eq!(maxp.num_glyphs(), 5);
        assert_eq!(maxp.min_byte_range(), 0..6);
    }

    #[test]
    fn too_short() {
        let data = FontData::new(&[0, 0, 0x50, 0, 0]);
        assert!(matches!(Maxp::read(data), Err(ReadError::OutOfBounds)));
    }
}
