//! Reading and writing `hmtx` together with the tables it depends on

use read::{ReadError, TableProvider};

use crate::{
    error::Error,
    font_builder::{BuilderError, FontBuilder},
    from_obj::ToOwnedTable,
    tables::{hhea::Hhea, hmtx, hmtx::Hmtx, maxp::Maxp},
};

/// The horizontal metrics of a font, and the tables needed to interpret them.
///
/// `maxp` provides the glyph count and `hhea` the number of long metrics;
/// together they determine the layout of `hmtx`. Any of the three may be
/// absent when the value is built by hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsTables {
    pub maxp: Option<Maxp>,
    pub hhea: Option<Hhea>,
    pub hmtx: Option<Hmtx>,
}

impl MetricsTables {
    /// Decode the metrics tables from a font.
    ///
    /// Returns [`ReadError::MissingDependency`] if the font lacks `maxp` or
    /// `hhea`, even if it also lacks `hmtx`. A font with both dependencies
    /// but no `hmtx` is not an error; the `hmtx` field will be `None`.
    pub fn read<'a>(font: &impl TableProvider<'a>) -> Result<Self, ReadError> {
        let hmtx: Option<Hmtx> = font.hmtx()?.map(|hmtx| hmtx.to_owned_table());
        if hmtx.is_none() {
            log::debug!("font has no hmtx table");
        }
        Ok(MetricsTables {
            maxp: Some(font.maxp()?.to_owned_table()),
            hhea: Some(font.hhea()?.to_owned_table()),
            hmtx,
        })
    }

    /// Write the `hmtx` table to `sink`, returning the number of bytes written.
    ///
    /// If either `hmtx` or `hhea` is missing, nothing is written.
    pub fn write_hmtx<W>(&self, sink: &mut W) -> Result<usize, Error>
    where
        W: std::io::Write + ?Sized,
    {
        hmtx::encode(self.hmtx.as_ref(), self.hhea.as_ref(), sink)
    }

    /// Shrink `hmtx` by folding repeated trailing advances into the side
    /// bearings array, and update `hhea` to match.
    ///
    /// See [`Hmtx::compacted`].
    pub fn compact(&mut self) {
        let Some(hmtx) = self.hmtx.take() else {
            return;
        };
        let hmtx = hmtx.compacted();
        if let Some(hhea) = self.hhea.as_mut() {
            hhea.sync_number_of_h_metrics(&hmtx);
        }
        self.hmtx = Some(hmtx);
    }

    /// Add `hhea` and `hmtx` to `builder`.
    ///
    /// `hmtx` is only added alongside `hhea`. `maxp` is never added, since
    /// only its glyph count is modelled here; copy it from the source font
    /// with [`FontBuilder::copy_missing_tables`].
    pub fn add_to_builder(&self, builder: &mut FontBuilder<'_>) -> Result<(), BuilderError> {
        let Some(hhea) = self.hhea.as_ref() else {
            if self.hmtx.is_some() {
                log::warn!("no hhea table, hmtx will not be added");
            }
            return Ok(());
        };
        builder.add_table(hhea)?;
        if let Some(hmtx) = self.hmtx.as_ref() {
            builder.add_table(hmtx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hmtx_test_data::{hhea as hhea_data, hmtx as hmtx_data, maxp as maxp_data};
    use pretty_assertions::assert_eq;
    use read::FontRef;
    use types::{GlyphId16, Tag};

    use super::*;
    use crate::tables::hmtx::LongMetric;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn build_font(tables: &[(&[u8; 4], &'static [u8])]) -> Vec<u8> {
        let mut builder = FontBuilder::new();
        for (tag, data) in tables {
            builder.add_raw(Tag::new(tag), *data);
        }
        builder.build()
    }

    fn complete_font() -> Vec<u8> {
        build_font(&[
            (b"maxp", maxp_data::VERSION_0_5_FIVE_GLYPHS),
            (b"hhea", hhea_data::THREE_METRICS),
            (b"hmtx", hmtx_data::FIVE_GLYPHS_THREE_METRICS),
        ])
    }

    #[test]
    fn read_and_write() {
        init_logging();
        let bytes = complete_font();
        let font = FontRef::new(&bytes).unwrap();
        let tables = MetricsTables::read(&font).unwrap();
        assert_eq!(tables.maxp, Some(Maxp::new(5)));
        assert_eq!(tables.hhea.as_ref().unwrap().number_of_h_metrics, 3);
        let hmtx = tables.hmtx.as_ref().unwrap();
        assert_eq!(
            hmtx.h_metrics,
            [
                LongMetric::new(600, 10),
                LongMetric::new(650, 12),
                LongMetric::new(700, -5)
            ]
        );
        assert_eq!(hmtx.left_side_bearings, [3, -2]);

        let mut out = Vec::new();
        assert_eq!(tables.write_hmtx(&mut out).unwrap(), 16);
        assert_eq!(out, hmtx_data::FIVE_GLYPHS_THREE_METRICS);
    }

    #[test]
    fn hmtx_absent() {
        init_logging();
        let bytes = build_font(&[
            (b"maxp", maxp_data::VERSION_0_5_FIVE_GLYPHS),
            (b"hhea", hhea_data::THREE_METRICS),
        ]);
        let font = FontRef::new(&bytes).unwrap();
        let tables = MetricsTables::read(&font).unwrap();
        assert!(tables.hhea.is_some());
        assert_eq!(tables.hmtx, None);

        let mut out = Vec::new();
        assert_eq!(tables.write_hmtx(&mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_dependencies() {
        let bytes = build_font(&[
            (b"hhea", hhea_data::THREE_METRICS),
            (b"hmtx", hmtx_data::FIVE_GLYPHS_THREE_METRICS),
        ]);
        let font = FontRef::new(&bytes).unwrap();
        assert_eq!(
            MetricsTables::read(&font),
            Err(ReadError::MissingDependency(Tag::new(b"maxp")))
        );

        // a missing dependency is reported even without hmtx
        let bytes = build_font(&[(b"maxp", maxp_data::VERSION_0_5_FIVE_GLYPHS)]);
        let font = FontRef::new(&bytes).unwrap();
        assert_eq!(
            MetricsTables::read(&font),
            Err(ReadError::MissingDependency(Tag::new(b"hhea")))
        );
    }

    #[test]
    fn truncated_hmtx() {
        let bytes = build_font(&[
            (b"maxp", maxp_data::VERSION_0_5_FIVE_GLYPHS),
            (b"hhea", hhea_data::THREE_METRICS),
            (b"hmtx", &hmtx_data::FIVE_GLYPHS_THREE_METRICS[..15]),
        ]);
        let font = FontRef::new(&bytes).unwrap();
        assert_eq!(MetricsTables::read(&font), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn write_without_hhea() {
        init_logging();
        let tables = MetricsTables {
            hmtx: Some(Hmtx::new(vec![LongMetric::new(500, 0)], vec![])),
            ..Default::default()
        };
        let mut out = Vec::new();
        assert_eq!(tables.write_hmtx(&mut out).unwrap(), 0);

        let mut builder = FontBuilder::new();
        tables.add_to_builder(&mut builder).unwrap();
        assert!(!builder.contains(Tag::new(b"hmtx")));
    }

    #[test]
    fn compact_and_rebuild() {
        init_logging();
        let bytes = build_font(&[
            (b"maxp", maxp_data::VERSION_0_5_FIVE_GLYPHS),
            (b"hhea", hhea_data::THREE_METRICS),
        ]);
        let source = FontRef::new(&bytes).unwrap();
        let mut tables = MetricsTables::read(&source).unwrap();
        tables.hmtx = Some(Hmtx::new(
            vec![
                LongMetric::new(600, 10),
                LongMetric::new(700, 12),
                LongMetric::new(700, -5),
            ],
            vec![3, -2],
        ));
        tables.compact();
        assert_eq!(tables.hhea.as_ref().unwrap().number_of_h_metrics, 2);

        let mut builder = FontBuilder::new();
        tables.add_to_builder(&mut builder).unwrap();
        builder.copy_missing_tables(source);
        let rebuilt = builder.build();
        let font = FontRef::new(&rebuilt).unwrap();

        let hmtx = font.hmtx().unwrap().unwrap();
        assert_eq!(hmtx.h_metrics().len(), 2);
        assert_eq!(hmtx.left_side_bearings().len(), 3);
        let advances: Vec<_> = (0..5)
            .map(|gid| hmtx.advance(GlyphId16::new(gid)).unwrap())
            .collect();
        assert_eq!(advances, [600, 700, 700, 700, 700]);
        let bearings: Vec<_> = (0..5)
            .map(|gid| hmtx.side_bearing(GlyphId16::new(gid)).unwrap())
            .collect();
        assert_eq!(bearings, [10, 12, -5, 3, -2]);

        let reread = MetricsTables::read(&font).unwrap();
        assert_eq!(reread, tables);
    }
}
