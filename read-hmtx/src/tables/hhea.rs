//! The [hhea (Horizontal Header)](https://docs.microsoft.com/en-us/typography/opentype/spec/hhea) table

use std::ops::Range;

use types::{FWord, FixedSize, MajorMinor, Scalar, Tag, UfWord};

use crate::{FontData, FontRead, MinByteRange, ReadError, TableRef, TopLevelTable};

/// The [hhea](https://docs.microsoft.com/en-us/typography/opentype/spec/hhea) table
pub type Hhea<'a> = TableRef<'a, HheaMarker>;

/// The layout of a [`Hhea`] table.
///
/// Every field is fixed size, so the layout is a constant.
#[derive(Debug, Clone, Copy)]
#[doc(hidden)]
pub struct HheaMarker {}

// byte offsets of each field
const VERSION: usize = 0;
const ASCENDER: usize = 4;
const DESCENDER: usize = 6;
const LINE_GAP: usize = 8;
const ADVANCE_WIDTH_MAX: usize = 10;
const MIN_LEFT_SIDE_BEARING: usize = 12;
const MIN_RIGHT_SIDE_BEARING: usize = 14;
const X_MAX_EXTENT: usize = 16;
const CARET_SLOPE_RISE: usize = 18;
const CARET_SLOPE_RUN: usize = 20;
const CARET_OFFSET: usize = 22;
// four reserved int16 fields live at 24..32
const METRIC_DATA_FORMAT: usize = 32;
const NUMBER_OF_H_METRICS: usize = 34;

impl HheaMarker {
    pub fn number_of_h_metrics_byte_range(&self) -> Range<usize> {
        NUMBER_OF_H_METRICS..NUMBER_OF_H_METRICS + u16::RAW_BYTE_LEN
    }
}

impl TopLevelTable for Hhea<'_> {
    /// `hhea`
    const TAG: Tag = Tag::new(b"hhea");
}

impl<'a> FontRead<'a> for Hhea<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        cursor.advance::<MajorMinor>();
        // ascender through caret offset
        cursor.advance_by(10 * FWord::RAW_BYTE_LEN);
        // reserved fields
        cursor.advance_by(4 * i16::RAW_BYTE_LEN);
        cursor.advance::<i16>();
        cursor.advance::<u16>();
        cursor.finish(HheaMarker {})
    }
}

impl<'a> Hhea<'a> {
    fn field<T: Scalar + Default>(&self, offset: usize) -> T {
        self.data.read_at(offset).unwrap_or_default()
    }

    /// The major/minor version (1, 0)
    pub fn version(&self) -> MajorMinor {
        self.field(VERSION)
    }

    /// Typographic ascent.
    pub fn ascender(&self) -> FWord {
        self.field(ASCENDER)
    }

    /// Typographic descent.
    pub fn descender(&self) -> FWord {
        self.field(DESCENDER)
    }

    /// Typographic line gap. Negative values are treated as zero by most
    /// implementations.
    pub fn line_gap(&self) -> FWord {
        self.field(LINE_GAP)
    }

    /// Maximum advance width value in the `hmtx` table.
    pub fn advance_width_max(&self) -> UfWord {
        self.field(ADVANCE_WIDTH_MAX)
    }

    /// Minimum left sidebearing value in the `hmtx` table for glyphs with
    /// contours (empty glyphs should be ignored).
    pub fn min_left_side_bearing(&self) -> FWord {
        self.field(MIN_LEFT_SIDE_BEARING)
    }

    /// Minimum right sidebearing value; calculated as min(aw - (lsb + xMax - xMin))
    /// for glyphs with contours (empty glyphs should be ignored).
    pub fn min_right_side_bearing(&self) -> FWord {
        self.field(MIN_RIGHT_SIDE_BEARING)
    }

    /// Max(lsb + (xMax - xMin)).
    pub fn x_max_extent(&self) -> FWord {
        self.field(X_MAX_EXTENT)
    }

    /// Used to calculate the slope of the cursor (rise/run); 1 for vertical.
    pub fn caret_slope_rise(&self) -> i16 {
        self.field(CARET_SLOPE_RISE)
    }

    /// 0 for vertical.
    pub fn caret_slope_run(&self) -> i16 {
        self.field(CARET_SLOPE_RUN)
    }

    /// The amount by which a slanted highlight on a glyph needs to be shifted
    /// to produce the best appearance. Set to 0 for non-slanted fonts
    pub fn caret_offset(&self) -> i16 {
        self.field(CARET_OFFSET)
    }

    /// 0 for current format.
    pub fn metric_data_format(&self) -> i16 {
        self.field(METRIC_DATA_FORMAT)
    }

    /// Number of LongMetric entries in the `hmtx` table.
    pub fn number_of_h_metrics(&self) -> u16 {
        let range = self.shape.number_of_h_metrics_byte_range();
        self.field(range.start)
    }
}

impl MinByteRange for Hhea<'_> {
    fn min_byte_range(&self) -> Range<usize> {
        0..self.shape.number_of_h_metrics_byte_range().end
    }
}

impl std::fmt::Debug for Hhea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hhea")
            .field("version", &self.version())
            .field("ascender", &self.ascender())
            .field("descender", &self.descender())
            .field("line_gap", &self.line_gap())
            .field("advance_width_max", &self.advance_width_max())
            .field("number_of_h_metrics", &self.number_of_h_metrics())
            .finish_non_exhaustive()
    }
}
