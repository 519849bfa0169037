//!  A builder for top-level font objects

use std::collections::BTreeMap;
use std::{borrow::Cow, fmt::Display};

use read::{FontRef, TableProvider, TopLevelTable};
use types::{Tag, TT_SFNT_VERSION};

use crate::{validate::Validate, FontWrite, TableWriter};

const TABLE_RECORD_LEN: usize = 16;

/// Build a font from some set of tables.
#[derive(Debug, Clone, Default)]
pub struct FontBuilder<'a> {
    tables: BTreeMap<Tag, Cow<'a, [u8]>>,
}

/// An error returned when attempting to add a table to the builder.
///
/// This wraps a compilation error, adding the tag of the table where it was
/// encountered.
#[derive(Debug)]
#[non_exhaustive]
pub struct BuilderError {
    /// The tag of the root table where the error occurred
    pub tag: Tag,
    /// The underlying error
    pub inner: crate::error::Error,
}

/// The binary search fields of the table directory.
///
/// See <https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SearchRange {
    search_range: u16,
    entry_selector: u16,
    range_shift: u16,
}

impl SearchRange {
    fn compute(n_items: usize, item_size: usize) -> Self {
        let entry_selector = n_items.checked_ilog2().unwrap_or(0);
        let search_range = if n_items == 0 {
            0
        } else {
            (1usize << entry_selector) * item_size
        };
        let range_shift = n_items * item_size - search_range;
        // the fields are u16; large directories saturate rather than wrap
        let saturate = |value: usize| u16::try_from(value).unwrap_or(u16::MAX);
        SearchRange {
            search_range: saturate(search_range),
            entry_selector: entry_selector as u16,
            range_shift: saturate(range_shift),
        }
    }
}

impl<'a> FontBuilder<'a> {
    /// Create a new builder to compile a binary font
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table to the builder.
    ///
    /// The table can be any top-level table defined in this crate. This function
    /// will attempt to compile the table and then add it to the builder if
    /// successful, returning an error otherwise.
    pub fn add_table<T>(&mut self, table: &T) -> Result<&mut Self, BuilderError>
    where
        T: FontWrite + Validate + TopLevelTable,
    {
        let tag = T::TAG;
        let bytes = crate::dump_table(table).map_err(|inner| BuilderError { inner, tag })?;
        Ok(self.add_raw(tag, bytes))
    }

    /// A builder method to add raw data for the provided tag
    pub fn add_raw(&mut self, tag: Tag, data: impl Into<Cow<'a, [u8]>>) -> &mut Self {
        self.tables.insert(tag, data.into());
        self
    }

    /// Copy each table from the source font if it does not already exist
    pub fn copy_missing_tables(&mut self, font: FontRef<'a>) -> &mut Self {
        for record in font.table_directory.table_records() {
            let tag = record.tag();
            if !self.tables.contains_key(&tag) {
                if let Some(data) = font.data_for_tag(tag) {
                    self.add_raw(tag, data.as_bytes());
                } else {
                    log::warn!("data for '{tag}' is malformed");
                }
            }
        }
        self
    }

    /// Returns `true` if the builder contains a table with this tag.
    pub fn contains(&self, tag: Tag) -> bool {
        self.tables.contains_key(&tag)
    }

    /// Assemble all the tables into a binary font file with a [Table Directory].
    ///
    /// [Table Directory]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory
    pub fn build(&mut self) -> Vec<u8> {
        assert!(self.tables.len() <= u16::MAX as usize);
        let header_len = std::mem::size_of::<u32>() // sfnt
            + std::mem::size_of::<u16>() * 4 // num_tables to range_shift
            + self.tables.len() * TABLE_RECORD_LEN;
        let computed = SearchRange::compute(self.tables.len(), TABLE_RECORD_LEN);

        let mut writer = TableWriter::default();
        TT_SFNT_VERSION.write_into(&mut writer);
        (self.tables.len() as u16).write_into(&mut writer);
        computed.search_range.write_into(&mut writer);
        computed.entry_selector.write_into(&mut writer);
        computed.range_shift.write_into(&mut writer);

        let mut position = header_len as u32;
        for (tag, data) in &self.tables {
            let length = data.len() as u32;
            let (checksum, padding) = checksum_and_padding(data);
            tag.write_into(&mut writer);
            checksum.write_into(&mut writer);
            position.write_into(&mut writer);
            length.write_into(&mut writer);
            position += length + padding;
        }

        let mut data = writer.into_data();
        for table in self.tables.values() {
            data.extend_from_slice(table);
            let rem = round4(table.len()) - table.len();
            let padding = [0u8; 4];
            data.extend_from_slice(&padding[..rem]);
        }
        data
    }
}

/// <https://github.com/google/woff2/blob/a0d0ed7da27b708c0a4e96ad7a998bddc933c06e/src/round.h#L19>
fn round4(sz: usize) -> usize {
    (sz + 3) & !3
}

fn checksum_and_padding(table: &[u8]) -> (u32, u32) {
    let checksum = read::tables::compute_checksum(table);
    let padding = round4(table.len()) - table.len();
    (checksum, padding as u32)
}

impl Display for BuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to build '{}' table: '{}'", self.tag, self.inner)
    }
}

impl std::error::Error for BuilderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use read::{FontRef, TableProvider};
    use types::Tag;

    use super::{checksum_and_padding, SearchRange, TABLE_RECORD_LEN};
    use crate::{
        tables::{hmtx::Hmtx, maxp::Maxp},
        FontBuilder,
    };

    #[test]
    fn sets_binary_search_assists() {
        // Based on Roboto's num tables
        let data = b"doesn't matter".to_vec();
        let mut builder = FontBuilder::default();
        (0..0x16u32).for_each(|i| {
            builder.add_raw(Tag::from_be_bytes(i.to_ne_bytes()), &data);
        });
        let bytes = builder.build();
        let font = FontRef::new(&bytes).unwrap();
        let td = font.table_directory;
        assert_eq!(
            (256, 4, 96),
            (td.search_range(), td.entry_selector(), td.range_shift())
        );
    }

    #[test]
    fn search_range_small_counts() {
        let compute = |n| {
            let r = SearchRange::compute(n, TABLE_RECORD_LEN);
            (r.search_range, r.entry_selector, r.range_shift)
        };
        assert_eq!(compute(0), (0, 0, 0));
        assert_eq!(compute(1), (16, 0, 0));
        assert_eq!(compute(3), (32, 1, 16));
        assert_eq!(compute(4), (64, 2, 0));
    }

    #[test]
    fn search_range_saturates() {
        let compute = |n| {
            let r = SearchRange::compute(n, TABLE_RECORD_LEN);
            (r.search_range, r.entry_selector, r.range_shift)
        };
        assert_eq!(compute(4095), (32768, 11, 32752));
        assert_eq!(compute(4096), (u16::MAX, 12, 0));
        assert_eq!(compute(5000), (u16::MAX, 12, 14464));
    }

    #[test]
    fn survives_no_tables() {
        let bytes = FontBuilder::default().build();
        let font = FontRef::new(&bytes).unwrap();
        assert_eq!(font.table_directory.num_tables(), 0);
    }

    #[test]
    fn pad4() {
        for i in 0..10 {
            let pad = checksum_and_padding(&vec![0; i]).1;
            assert!(pad < 4);
            assert!((i + pad as usize) % 4 == 0, "pad {i} +{pad} bytes");
        }
    }

    #[test]
    fn tables_are_located() {
        let mut builder = FontBuilder::new();
        builder
            .add_table(&Maxp::new(5))
            .unwrap()
            .add_raw(Tag::new(b"odd_"), vec![1u8, 2, 3]);
        let bytes = builder.build();
        // header, two records, maxp padded to 8, three odd bytes padded to 4
        assert_eq!(bytes.len(), 12 + 32 + 8 + 4);

        let font = FontRef::new(&bytes).unwrap();
        assert_eq!(font.maxp().unwrap().num_glyphs(), 5);
        assert_eq!(
            font.data_for_tag(Tag::new(b"odd_")).unwrap().as_bytes(),
            &[1, 2, 3]
        );
        let record = font.table_directory.table_records()[0];
        assert_eq!(record.tag(), Tag::new(b"maxp"));
        assert_eq!(record.checksum(), checksum_and_padding(&bytes[44..50]).0);
    }

    #[test]
    fn copy_missing_tables() {
        let mut builder = FontBuilder::new();
        builder.add_table(&Maxp::new(5)).unwrap();
        builder.add_raw(Tag::new(b"keep"), vec![9u8; 4]);
        let source = builder.build();
        let source = FontRef::new(&source).unwrap();

        let mut builder = FontBuilder::new();
        builder.add_table(&Maxp::new(2)).unwrap();
        builder.copy_missing_tables(source);
        assert!(builder.contains(Tag::new(b"keep")));
        let bytes = builder.build();
        let font = FontRef::new(&bytes).unwrap();
        // existing tables are not replaced
        assert_eq!(font.maxp().unwrap().num_glyphs(), 2);
        assert_eq!(
            font.data_for_tag(Tag::new(b"keep")).unwrap().as_bytes(),
            &[9; 4]
        );
    }

    #[test]
    fn add_invalid_table() {
        let hmtx = Hmtx::new(Vec::new(), vec![0; u16::MAX as usize + 1]);
        let err = FontBuilder::new().add_table(&hmtx).unwrap_err();
        assert_eq!(err.tag, Tag::new(b"hmtx"));
        assert!(err.to_string().starts_with("failed to build 'hmtx' table"));
    }
}
