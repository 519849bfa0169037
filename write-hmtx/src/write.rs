use crate::{error::Error, validate::Validate};

/// A type that that can be written out as part of a font file.
///
/// Implementations append their big-endian encoding to a [`TableWriter`].
pub trait FontWrite {
    /// Write our data into this [TableWriter].
    fn write_into(&self, writer: &mut TableWriter);
}

/// An object that accumulates the bytes of a serialized table.
#[derive(Debug, Default)]
pub struct TableWriter {
    bytes: Vec<u8>,
}

/// Attempt to serialize a table.
///
/// If the table is malformed, this will return an [`Error::ValidationFailed`],
/// otherwise it will return the bytes encoding the table.
pub fn dump_table<T: FontWrite + Validate>(table: &T) -> Result<Vec<u8>, Error> {
    table.validate()?;
    let mut writer = TableWriter::default();
    table.write_into(&mut writer);
    Ok(writer.into_data())
}

/// Serialize a table into the provided sink, returning the number of bytes
/// written.
///
/// The table is validated and encoded before anything is written, so a
/// validation failure leaves the sink untouched. A failure from the sink
/// itself is returned as [`Error::WriteFailed`].
pub fn write_table<T, W>(table: &T, sink: &mut W) -> Result<usize, Error>
where
    T: FontWrite + Validate,
    W: std::io::Write + ?Sized,
{
    let bytes = dump_table(table)?;
    sink.write_all(&bytes).map_err(Error::WriteFailed)?;
    Ok(bytes.len())
}

impl TableWriter {
    /// Write raw bytes into this table.
    ///
    /// The caller is responsible for ensuring bytes are in big-endian order.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes)
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn into_data(self) -> Vec<u8> {
        self.bytes
    }
}

macro_rules! write_be_bytes {
    ($ty:ty) => {
        impl FontWrite for $ty {
            #[inline]
            fn write_into(&self, writer: &mut TableWriter) {
                writer.write_slice(&self.to_be_bytes())
            }
        }
    };
}

write_be_bytes!(u8);
write_be_bytes!(i8);
write_be_bytes!(u16);
write_be_bytes!(i16);
write_be_bytes!(u32);
write_be_bytes!(i32);
write_be_bytes!(hmtx_types::Tag);
write_be_bytes!(hmtx_types::FWord);
write_be_bytes!(hmtx_types::UfWord);
write_be_bytes!(hmtx_types::MajorMinor);
write_be_bytes!(hmtx_types::Version16Dot16);

impl<T: FontWrite> FontWrite for [T] {
    fn write_into(&self, writer: &mut TableWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}

impl<T: FontWrite> FontWrite for Vec<T> {
    fn write_into(&self, writer: &mut TableWriter) {
        self.as_slice().write_into(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_big_endian() {
        let mut writer = TableWriter::default();
        600u16.write_into(&mut writer);
        (-5i16).write_into(&mut writer);
        vec![1u8, 2].write_into(&mut writer);
        hmtx_types::Tag::new(b"hmtx").write_into(&mut writer);
        assert_eq!(
            writer.into_data(),
            [0x02, 0x58, 0xFF, 0xFB, 1, 2, b'h', b'm', b't', b'x']
        );
    }
}
