//! raw font bytes

use std::ops::{Range, RangeBounds};

use bytemuck::AnyBitPattern;
use types::{FixedSize, Scalar};

use crate::read::ReadError;
use crate::table_ref::TableRef;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

/// A cursor for validating bytes during parsing.
///
/// The cursor only tracks a position; bounds are checked when reading, or
/// when the cursor is [finished][Cursor::finish].
pub(crate) struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes in `range`, if it is in bounds.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        self.bytes.get(bounds).map(|bytes| FontData { bytes })
    }

    /// Read a scalar at the provided location in the data.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        let end = offset
            .checked_add(T::RAW_BYTE_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        self.bytes
            .get(offset..end)
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Interpret the bytes in `range` as a slice of some type `T`.
    ///
    /// The range must be in bounds and its length must be a multiple of
    /// `T::RAW_BYTE_LEN`.
    pub fn read_array<T: AnyBitPattern + FixedSize>(
        &self,
        range: Range<usize>,
    ) -> Result<&'a [T], ReadError> {
        let bytes = self
            .bytes
            .get(range)
            .ok_or(ReadError::OutOfBounds)?;
        bytemuck::try_cast_slice(bytes).map_err(|_| ReadError::InvalidArrayLen)
    }

    fn check_in_bounds(&self, offset: usize) -> Result<(), ReadError> {
        self.bytes
            .get(..offset)
            .ok_or(ReadError::OutOfBounds)
            .map(|_| ())
    }

    pub(crate) fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    /// Return the data as a byte slice
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    pub(crate) fn advance<T: Scalar>(&mut self) {
        self.pos = self.pos.saturating_add(T::RAW_BYTE_LEN);
    }

    pub(crate) fn advance_by(&mut self, n_bytes: usize) {
        self.pos = self.pos.saturating_add(n_bytes);
    }

    pub(crate) fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.advance::<T>();
        temp
    }

    /// Ensure everything advanced over is in bounds, and wrap the data.
    pub(crate) fn finish<T>(self, shape: T) -> Result<TableRef<'a, T>, ReadError> {
        let data = self.data;
        data.check_in_bounds(self.pos)?;
        Ok(TableRef { data, shape })
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(src: &'a [u8]) -> FontData<'a> {
        FontData::new(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::BigEndian;

    #[test]
    fn read_at_out_of_bounds() {
        let data = FontData::new(&[0, 1, 2]);
        assert_eq!(data.read_at::<u16>(1).unwrap(), 0x0102);
        assert!(matches!(
            data.read_at::<u16>(2),
            Err(ReadError::OutOfBounds)
        ));
        assert!(matches!(
            data.read_at::<u16>(usize::MAX),
            Err(ReadError::OutOfBounds)
        ));
    }

    #[test]
    fn read_array_checks_len() {
        let data = FontData::new(&[0, 1, 0, 2, 0]);
        let array: &[BigEndian<u16>] = data.read_array(0..4).unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[1].get(), 2);
        assert!(matches!(
            data.read_array::<BigEndian<u16>>(0..3),
            Err(ReadError::InvalidArrayLen)
        ));
        assert!(matches!(
            data.read_array::<BigEndian<u16>>(2..6),
            Err(ReadError::OutOfBounds)
        ));
    }

    #[test]
    fn cursor_tracks_position() {
        let data = FontData::new(&[0, 7, 0xff, 0xfe, 1]);
        let mut cursor = data.cursor();
        assert_eq!(cursor.read::<u16>().unwrap(), 7);
        assert_eq!(cursor.read::<i16>().unwrap(), -2);
        cursor.advance_by(2);
        assert!(matches!(cursor.finish(()), Err(ReadError::OutOfBounds)));
    }

    #[test]
    fn slice_checks_bounds() {
        let data = FontData::new(&[1, 2, 3, 4]);
        assert_eq!(data.slice(1..3).unwrap().as_bytes(), &[2, 3]);
        assert_eq!(data.slice(2..).unwrap().as_bytes(), &[3, 4]);
        assert!(data.slice(3..5).is_none());
    }
}
