//! Typed font tables

use std::ops::Range;

use crate::font_data::FontData;

/// Return the minimum range of the table bytes
///
/// This is the range actually described by the table's fields; any bytes
/// after it are padding or garbage and are ignored.
pub trait MinByteRange {
    fn min_byte_range(&self) -> Range<usize>;
}

/// Typed access to raw table data.
///
/// `T` is a 'shape' type recording the layout computed while the table was
/// validated. Accessors on specific tables use it to locate their fields.
#[derive(Clone, Copy)]
pub struct TableRef<'a, T> {
    pub(crate) shape: T,
    pub(crate) data: FontData<'a>,
}

impl<'a, T> TableRef<'a, T> {
    /// Return a reference to this table's raw data.
    pub fn offset_data(&self) -> FontData<'a> {
        self.data
    }

    /// Return a reference to the table's 'Shape' struct.
    ///
    /// This is a low level implementation detail, but it can be useful in
    /// some cases where you want to know things about a table's layout, such
    /// as the byte offsets of specific fields.
    pub fn shape(&self) -> &T {
        &self.shape
    }
}

impl<'a, T> TableRef<'a, T>
where
    TableRef<'a, T>: MinByteRange,
{
    /// Return the minimum bytes of this table
    pub fn min_table_bytes(&self) -> &'a [u8] {
        self.data
            .as_bytes()
            .get(self.min_byte_range())
            .unwrap_or_default()
    }
}
