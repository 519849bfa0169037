//! The [hmtx (Horizontal Metrics)](https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx) table
//!
//! The table is made of two arrays, whose lengths come from other tables:
//!
//! - `number_of_h_metrics` (from `hhea`) [`LongMetric`] records, and
//! - `num_glyphs - number_of_h_metrics` (with `num_glyphs` from `maxp`) left
//!   side bearings, one for each remaining glyph.
//!
//! By convention the glyphs covered by the second array share the advance
//! width of the last long metric. This is not checked when reading; the
//! [`Hmtx::advance`] and [`Hmtx::side_bearing`] accessors apply it on lookup.

use std::ops::Range;

use types::{BigEndian, FixedSize, GlyphId16, Tag};

use crate::{
    FontData, FontReadWithArgs, MinByteRange, ReadArgs, ReadError, TableRef, TopLevelTable,
};

/// The [hmtx (Horizontal Metrics)](https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx) table
pub type Hmtx<'a> = TableRef<'a, HmtxMarker>;

/// The layout of a [`Hmtx`] table, computed from its read arguments.
#[derive(Debug, Clone, Copy)]
#[doc(hidden)]
pub struct HmtxMarker {
    h_metrics_byte_len: usize,
    left_side_bearings_byte_len: usize,
}

impl HmtxMarker {
    pub fn h_metrics_byte_range(&self) -> Range<usize> {
        let start = 0;
        start..start + self.h_metrics_byte_len
    }

    pub fn left_side_bearings_byte_range(&self) -> Range<usize> {
        let start = self.h_metrics_byte_range().end;
        start..start + self.left_side_bearings_byte_len
    }
}

/// The number of left side bearings that follow the long metrics.
///
/// A font that declares more long metrics than glyphs has no trailing
/// bearings, rather than a negative number of them.
pub fn trailing_bearing_count(number_of_h_metrics: u16, num_glyphs: u16) -> usize {
    num_glyphs.saturating_sub(number_of_h_metrics) as usize
}

impl TopLevelTable for Hmtx<'_> {
    /// `hmtx`
    const TAG: Tag = Tag::new(b"hmtx");
}

impl ReadArgs for Hmtx<'_> {
    /// `(number_of_h_metrics, num_glyphs)`
    type Args = (u16, u16);
}

impl<'a> FontReadWithArgs<'a> for Hmtx<'a> {
    fn read_with_args(data: FontData<'a>, args: &(u16, u16)) -> Result<Self, ReadError> {
        let (number_of_h_metrics, num_glyphs) = *args;
        let mut cursor = data.cursor();
        let h_metrics_byte_len = number_of_h_metrics as usize * LongMetric::RAW_BYTE_LEN;
        cursor.advance_by(h_metrics_byte_len);
        let left_side_bearings_byte_len =
            trailing_bearing_count(number_of_h_metrics, num_glyphs) * i16::RAW_BYTE_LEN;
        cursor.advance_by(left_side_bearings_byte_len);
        cursor.finish(HmtxMarker {
            h_metrics_byte_len,
            left_side_bearings_byte_len,
        })
    }
}

impl<'a> Hmtx<'a> {
    /// A constructor that requires additional arguments.
    ///
    /// `number_of_h_metrics` is `hhea.numberOfHMetrics` and `num_glyphs` is
    /// `maxp.numGlyphs`. Returns [`ReadError::OutOfBounds`] if `data` ends
    /// before both arrays are complete; bytes past the end of the arrays
    /// are ignored.
    pub fn read(
        data: FontData<'a>,
        number_of_h_metrics: u16,
        num_glyphs: u16,
    ) -> Result<Self, ReadError> {
        let args = (number_of_h_metrics, num_glyphs);
        Self::read_with_args(data, &args)
    }

    /// Paired advance width and left side bearing values for each glyph
    /// with an explicit advance. Records are indexed by glyph ID.
    pub fn h_metrics(&self) -> &'a [LongMetric] {
        let range = self.shape.h_metrics_byte_range();
        self.data.read_array(range).unwrap_or_default()
    }

    /// Left side bearings for glyph IDs greater than or equal to
    /// `number_of_h_metrics`.
    pub fn left_side_bearings(&self) -> &'a [BigEndian<i16>] {
        let range = self.shape.left_side_bearings_byte_range();
        self.data.read_array(range).unwrap_or_default()
    }

    /// The number of glyphs covered by this table.
    pub fn num_glyphs(&self) -> usize {
        self.h_metrics().len() + self.left_side_bearings().len()
    }

    /// Returns the advance width for the given glyph identifier.
    ///
    /// Glyphs past the last long metric use that metric's advance. Returns
    /// `None` for glyphs not covered by the table.
    pub fn advance(&self, glyph_id: GlyphId16) -> Option<u16> {
        let ix = glyph_id.to_usize();
        if ix >= self.num_glyphs() {
            return None;
        }
        let metrics = self.h_metrics();
        metrics
            .get(ix)
            .or_else(|| metrics.last())
            .map(LongMetric::advance)
    }

    /// Returns the left side bearing for the given glyph identifier.
    pub fn side_bearing(&self, glyph_id: GlyphId16) -> Option<i16> {
        let ix = glyph_id.to_usize();
        let metrics = self.h_metrics();
        match metrics.get(ix) {
            Some(metric) => Some(metric.side_bearing()),
            None => self
                .left_side_bearings()
                .get(ix - metrics.len())
                .map(BigEndian::get),
        }
    }
}

impl MinByteRange for Hmtx<'_> {
    fn min_byte_range(&self) -> Range<usize> {
        0..self.shape.left_side_bearings_byte_range().end
    }
}

impl std::fmt::Debug for Hmtx<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hmtx")
            .field("h_metrics", &self.h_metrics())
            .field("left_side_bearings", &self.left_side_bearings())
            .finish()
    }
}

/// An advance width and left side bearing pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::AnyBitPattern)]
#[repr(C)]
#[repr(packed)]
pub struct LongMetric {
    /// Advance width, in font design units.
    pub advance: BigEndian<u16>,
    /// Glyph left side bearing, in font design units.
    pub side_bearing: BigEndian<i16>,
}

impl LongMetric {
    /// Advance width, in font design units.
    pub fn advance(&self) -> u16 {
        self.advance.get()
    }

    /// Glyph left side bearing, in font design units.
    pub fn side_bearing(&self) -> i16 {
        self.side_bearing.get()
    }
}

impl FixedSize for LongMetric {
    const RAW_BYTE_LEN: usize = u16::RAW_BYTE_LEN + i16::RAW_BYTE_LEN;
}
