//! The maxp table

use read::{tables::maxp as read_maxp, FontData, TopLevelTable};
use types::{Tag, Version16Dot16};

use crate::{
    from_obj::{FromObjRef, FromTableRef},
    validate::{Validate, ValidationCtx},
    FontWrite, TableWriter,
};

/// The [maxp](https://docs.microsoft.com/en-us/typography/opentype/spec/maxp) table
///
/// Only the glyph count is modelled, and the table is always written in the
/// version 0.5 form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maxp {
    /// The number of glyphs in the font.
    pub num_glyphs: u16,
}

impl Maxp {
    /// Construct a new `Maxp`
    pub fn new(num_glyphs: u16) -> Self {
        Self { num_glyphs }
    }
}

impl TopLevelTable for Maxp {
    const TAG: Tag = Tag::new(b"maxp");
}

impl FontWrite for Maxp {
    fn write_into(&self, writer: &mut TableWriter) {
        Version16Dot16::VERSION_0_5.write_into(writer);
        self.num_glyphs.write_into(writer);
    }
}

impl Validate for Maxp {
    fn validate_impl(&self, _ctx: &mut ValidationCtx) {}
}

impl<'a> FromObjRef<read_maxp::Maxp<'a>> for Maxp {
    fn from_obj_ref(obj: &read_maxp::Maxp<'a>, _: FontData) -> Self {
        Maxp {
            num_glyphs: obj.num_glyphs(),
        }
    }
}

impl<'a> FromTableRef<read_maxp::Maxp<'a>> for Maxp {}
