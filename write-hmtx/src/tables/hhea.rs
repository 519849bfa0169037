//! The hhea table

use read::{tables::hhea as read_hhea, FontData, TopLevelTable};
use types::{FWord, MajorMinor, Tag, UfWord};

use crate::{
    from_obj::{FromObjRef, FromTableRef},
    tables::hmtx::Hmtx,
    validate::{Validate, ValidationCtx},
    FontWrite, TableWriter,
};

/// The [hhea](https://docs.microsoft.com/en-us/typography/opentype/spec/hhea) Horizontal Header Table
///
/// The table is always written as version 1.0 with a `metricDataFormat` of
/// 0, whatever the values in the table it was read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hhea {
    /// Typographic ascent.
    pub ascender: FWord,
    /// Typographic descent.
    pub descender: FWord,
    /// Typographic line gap.
    pub line_gap: FWord,
    /// Maximum advance width value in the `hmtx` table.
    pub advance_width_max: UfWord,
    /// Minimum left sidebearing value in the `hmtx` table for glyphs with
    /// contours.
    pub min_left_side_bearing: FWord,
    /// Minimum right sidebearing value.
    pub min_right_side_bearing: FWord,
    /// Max(lsb + (xMax - xMin)).
    pub x_max_extent: FWord,
    /// Used to calculate the slope of the cursor (rise/run); 1 for vertical.
    pub caret_slope_rise: i16,
    /// 0 for vertical.
    pub caret_slope_run: i16,
    /// The amount by which a slanted highlight on a glyph needs to be shifted
    /// to produce the best appearance.
    pub caret_offset: i16,
    /// Number of LongMetric entries in the `hmtx` table.
    pub number_of_h_metrics: u16,
}

impl Hhea {
    /// Set `number_of_h_metrics` to match the number of long metrics in `hmtx`.
    ///
    /// Nothing checks that the two agree when `hmtx` is written, so callers
    /// that change the shape of `hmtx` should call this before writing `hhea`.
    ///
    /// The count saturates at `u16::MAX`; an `hmtx` that large fails
    /// validation when it is written.
    pub fn sync_number_of_h_metrics(&mut self, hmtx: &Hmtx) {
        self.number_of_h_metrics = u16::try_from(hmtx.h_metrics.len()).unwrap_or(u16::MAX);
    }
}

impl TopLevelTable for Hhea {
    const TAG: Tag = Tag::new(b"hhea");
}

impl FontWrite for Hhea {
    fn write_into(&self, writer: &mut TableWriter) {
        MajorMinor::VERSION_1_0.write_into(writer);
        self.ascender.write_into(writer);
        self.descender.write_into(writer);
        self.line_gap.write_into(writer);
        self.advance_width_max.write_into(writer);
        self.min_left_side_bearing.write_into(writer);
        self.min_right_side_bearing.write_into(writer);
        self.x_max_extent.write_into(writer);
        self.caret_slope_rise.write_into(writer);
        self.caret_slope_run.write_into(writer);
        self.caret_offset.write_into(writer);
        // reserved
        [0i16; 4].write_into(writer);
        // metric data format
        0i16.write_into(writer);
        self.number_of_h_metrics.write_into(writer);
    }
}

impl Validate for Hhea {
    fn validate_impl(&self, _ctx: &mut ValidationCtx) {}
}

impl<'a> FromObjRef<read_hhea::Hhea<'a>> for Hhea {
    fn from_obj_ref(obj: &read_hhea::Hhea<'a>, _: FontData) -> Self {
        Hhea {
            ascender: obj.ascender(),
            descender: obj.descender(),
            line_gap: obj.line_gap(),
            advance_width_max: obj.advance_width_max(),
            min_left_side_bearing: obj.min_left_side_bearing(),
            min_right_side_bearing: obj.min_right_side_bearing(),
            x_max_extent: obj.x_max_extent(),
            caret_slope_rise: obj.caret_slope_rise(),
            caret_slope_run: obj.caret_slope_run(),
            caret_offset: obj.caret_offset(),
            number_of_h_metrics: obj.number_of_h_metrics(),
        }
    }
}

impl<'a> FromTableRef<read_hhea::Hhea<'a>> for Hhea {}
