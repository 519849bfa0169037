//! The [hmtx (Horizontal Metrics)](https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx) table

use read::{tables::hmtx as read_hmtx, FontData, ReadError, TopLevelTable};
use types::Tag;

use crate::{
    error::Error,
    from_obj::{FromObjRef, FromTableRef, ToOwnedObj, ToOwnedTable},
    tables::hhea::Hhea,
    validate::{Validate, ValidationCtx},
    write::write_table,
    FontWrite, TableWriter,
};

/// The [hmtx (Horizontal Metrics)](https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx) table
///
/// The number of long metrics must match `hhea.numberOfHMetrics`, and the
/// total number of entries must match `maxp.numGlyphs`; neither is checked
/// here. See [`Hhea::sync_number_of_h_metrics`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hmtx {
    /// Paired advance width and left side bearing values for each glyph.
    /// Records are indexed by glyph ID.
    pub h_metrics: Vec<LongMetric>,
    /// Left side bearings for glyph IDs greater than or equal to
    /// numberOfHMetrics.
    pub left_side_bearings: Vec<i16>,
}

/// An advance width and left side bearing pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LongMetric {
    /// Advance width, in font design units.
    pub advance: u16,
    /// Glyph left side bearing, in font design units.
    pub side_bearing: i16,
}

impl Hmtx {
    /// Construct a new `Hmtx` table.
    pub fn new(h_metrics: Vec<LongMetric>, left_side_bearings: Vec<i16>) -> Self {
        Self {
            h_metrics,
            left_side_bearings,
        }
    }

    /// Parse `data` as an `hmtx` table and convert it to an owned table.
    ///
    /// The two counts come from `hhea` and `maxp`; see
    /// [`read_hmtx::Hmtx::read`].
    pub fn decode(
        data: FontData,
        number_of_h_metrics: u16,
        num_glyphs: u16,
    ) -> Result<Self, ReadError> {
        read_hmtx::Hmtx::read(data, number_of_h_metrics, num_glyphs).map(|t| t.to_owned_table())
    }

    /// The total number of glyphs with metrics in this table.
    pub fn num_glyphs(&self) -> usize {
        self.h_metrics.len() + self.left_side_bearings.len()
    }

    /// Move long metrics that repeat the final advance into the bearings array.
    ///
    /// Glyphs past the last long metric share its advance, so a run of equal
    /// advances at the end of `h_metrics` only needs to be stored once. At
    /// least one long metric is always kept. The advance and side bearing of
    /// every glyph are unchanged, but the number of long metrics may shrink;
    /// the caller must update `hhea` to match.
    pub fn compacted(mut self) -> Self {
        let Some(last_advance) = self.h_metrics.last().map(|metric| metric.advance) else {
            return self;
        };
        let n_repeated = self
            .h_metrics
            .iter()
            .rev()
            .skip(1)
            .take_while(|metric| metric.advance == last_advance)
            .count();
        if n_repeated == 0 {
            return self;
        }

        let keep = self.h_metrics.len() - n_repeated;
        let mut left_side_bearings: Vec<_> = self
            .h_metrics
            .split_off(keep)
            .into_iter()
            .map(|metric| metric.side_bearing)
            .collect();
        left_side_bearings.extend(self.left_side_bearings);
        self.left_side_bearings = left_side_bearings;
        self
    }
}

impl LongMetric {
    /// Construct a new `LongMetric`
    pub fn new(advance: u16, side_bearing: i16) -> Self {
        Self {
            advance,
            side_bearing,
        }
    }
}

/// Write `hmtx` into `sink`, returning the number of bytes written.
///
/// The table can only be interpreted alongside `hhea`, so if either table is
/// missing nothing is written and this returns `Ok(0)`. Otherwise each long
/// metric is written (advance, then side bearing) followed by each trailing
/// side bearing, all big-endian.
pub fn encode<W>(hmtx: Option<&Hmtx>, hhea: Option<&Hhea>, sink: &mut W) -> Result<usize, Error>
where
    W: std::io::Write + ?Sized,
{
    match (hmtx, hhea) {
        (Some(hmtx), Some(_)) => write_table(hmtx, sink),
        (None, _) => {
            log::debug!("no hmtx table, nothing to write");
            Ok(0)
        }
        (Some(_), None) => {
            log::debug!("no hhea table, skipping hmtx");
            Ok(0)
        }
    }
}

impl TopLevelTable for Hmtx {
    const TAG: Tag = Tag::new(b"hmtx");
}

impl FontWrite for Hmtx {
    fn write_into(&self, writer: &mut TableWriter) {
        self.h_metrics.write_into(writer);
        self.left_side_bearings.write_into(writer);
    }
}

impl FontWrite for LongMetric {
    fn write_into(&self, writer: &mut TableWriter) {
        self.advance.write_into(writer);
        self.side_bearing.write_into(writer);
    }
}

impl Validate for Hmtx {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("Hmtx", |ctx| {
            ctx.in_field("h_metrics", |ctx| {
                if self.h_metrics.len() > (u16::MAX as usize) {
                    ctx.report("array exceeds max length");
                }
            });
            ctx.in_field("left_side_bearings", |ctx| {
                if self.num_glyphs() > (u16::MAX as usize) {
                    ctx.report("total number of glyphs exceeds max length");
                }
            });
        })
    }
}

impl<'a> FromObjRef<read_hmtx::Hmtx<'a>> for Hmtx {
    fn from_obj_ref(obj: &read_hmtx::Hmtx<'a>, _: FontData) -> Self {
        let offset_data = obj.offset_data();
        Hmtx {
            h_metrics: obj.h_metrics().to_owned_obj(offset_data),
            left_side_bearings: obj.left_side_bearings().to_owned_obj(offset_data),
        }
    }
}

impl<'a> FromTableRef<read_hmtx::Hmtx<'a>> for Hmtx {}

impl FromObjRef<read_hmtx::LongMetric> for LongMetric {
    fn from_obj_ref(obj: &read_hmtx::LongMetric, _: FontData) -> Self {
        LongMetric {
            advance: obj.advance(),
            side_bearing: obj.side_bearing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use hmtx_test_data::{bebuffer::BeBuffer, hmtx as test_data};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn metrics(pairs: &[(u16, i16)]) -> Vec<LongMetric> {
        pairs
            .iter()
            .map(|&(advance, side_bearing)| LongMetric::new(advance, side_bearing))
            .collect()
    }

    fn five_glyphs_three_metrics() -> Hmtx {
        Hmtx::new(metrics(&[(600, 10), (650, 12), (700, -5)]), vec![3, -2])
    }

    fn hhea_with(number_of_h_metrics: u16) -> Hhea {
        Hhea {
            number_of_h_metrics,
            ..Default::default()
        }
    }

    // a sink that fails after accepting `capacity` bytes
    struct FailingSink {
        capacity: usize,
        written: Vec<u8>,
    }

    impl std::io::Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let room = self.capacity - self.written.len();
            if room == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "sink is full",
                ));
            }
            let n = room.min(buf.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn decode_worked_example() {
        let data = FontData::new(test_data::FIVE_GLYPHS_THREE_METRICS);
        let hmtx = Hmtx::decode(data, 3, 5).unwrap();
        assert_eq!(hmtx, five_glyphs_three_metrics());
        assert_eq!(hmtx.num_glyphs(), 5);
    }

    #[test]
    fn encode_worked_example() {
        init_logging();
        let hmtx = five_glyphs_three_metrics();
        let mut out = Vec::new();
        let written = encode(Some(&hmtx), Some(&hhea_with(3)), &mut out).unwrap();
        assert_eq!(written, 16);
        assert_eq!(out, test_data::FIVE_GLYPHS_THREE_METRICS);
    }

    #[rstest]
    #[case::worked_example(&[(600, 10), (650, 12), (700, -5)], &[3, -2])]
    #[case::no_trailing(&[(500, 1), (510, -2)], &[])]
    #[case::single_metric(&[(1000, 0)], &[-1, -2, -3, -4])]
    #[case::empty(&[], &[])]
    fn round_trip(#[case] long_metrics: &[(u16, i16)], #[case] bearings: &[i16]) {
        let hmtx = Hmtx::new(metrics(long_metrics), bearings.to_vec());
        let number_of_h_metrics = long_metrics.len() as u16;
        let num_glyphs = hmtx.num_glyphs() as u16;

        let mut out = Vec::new();
        let written = encode(Some(&hmtx), Some(&hhea_with(number_of_h_metrics)), &mut out).unwrap();
        assert_eq!(written, 4 * long_metrics.len() + 2 * bearings.len());
        assert_eq!(written, out.len());

        let decoded = Hmtx::decode(FontData::new(&out), number_of_h_metrics, num_glyphs).unwrap();
        assert_eq!(decoded, hmtx);
    }

    #[test]
    fn encode_absent_tables() {
        init_logging();
        let hmtx = five_glyphs_three_metrics();
        let hhea = hhea_with(3);
        let mut out = Vec::new();
        assert_eq!(encode(None, Some(&hhea), &mut out).unwrap(), 0);
        assert_eq!(encode(Some(&hmtx), None, &mut out).unwrap(), 0);
        assert_eq!(encode(None, None, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn encode_does_not_check_hhea() {
        // the declared count is the caller's responsibility
        let hmtx = five_glyphs_three_metrics();
        let mut out = Vec::new();
        let written = encode(Some(&hmtx), Some(&hhea_with(1)), &mut out).unwrap();
        assert_eq!(written, 16);
    }

    #[test]
    fn sink_failure() {
        let hmtx = five_glyphs_three_metrics();
        let mut sink = FailingSink {
            capacity: 6,
            written: Vec::new(),
        };
        let err = encode(Some(&hmtx), Some(&hhea_with(3)), &mut sink).unwrap_err();
        match err {
            Error::WriteFailed(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::WriteZero),
            other => panic!("unexpected error {other}"),
        }
        assert_eq!(sink.written.len(), 6);
    }

    #[test]
    fn too_many_glyphs() {
        let hmtx = Hmtx::new(
            vec![LongMetric::default(); 2],
            vec![0; u16::MAX as usize],
        );
        let mut out = Vec::new();
        let err = encode(Some(&hmtx), Some(&hhea_with(2)), &mut out).unwrap_err();
        assert!(matches!(err, Error::ValidationFailed(ref report) if report.len() == 1));
        // nothing is written when validation fails
        assert!(out.is_empty());
    }

    #[test]
    fn too_many_long_metrics() {
        let hmtx = Hmtx::new(vec![LongMetric::default(); u16::MAX as usize + 1], vec![]);
        let report = hmtx.validate().unwrap_err();
        // both the long metrics and the total glyph count overflow
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn more_metrics_than_glyphs() {
        // declared glyph count is smaller than the number of long metrics;
        // there are no trailing bearings to read
        let buf = BeBuffer::new().long_metrics([(500, 1), (510, 2), (520, 3)]);
        let hmtx = Hmtx::decode(FontData::new(&buf), 3, 2).unwrap();
        assert_eq!(hmtx.h_metrics.len(), 3);
        assert!(hmtx.left_side_bearings.is_empty());
    }

    #[test]
    fn truncated() {
        let data = FontData::new(test_data::TRUNCATED_THIRD_METRIC);
        assert_eq!(Hmtx::decode(data, 3, 3), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn compact_repeated_advances() {
        let hmtx = Hmtx::new(
            metrics(&[(600, 10), (700, 12), (700, -5), (700, 4)]),
            vec![3, -2],
        );
        let compacted = hmtx.clone().compacted();
        assert_eq!(
            compacted,
            Hmtx::new(metrics(&[(600, 10), (700, 12)]), vec![-5, 4, 3, -2])
        );

        // every glyph keeps its metrics
        let bytes = crate::dump_table(&compacted).unwrap();
        let read = read_hmtx::Hmtx::read(FontData::new(&bytes), 2, 6).unwrap();
        let original = crate::dump_table(&hmtx).unwrap();
        let original = read_hmtx::Hmtx::read(FontData::new(&original), 4, 6).unwrap();
        for gid in 0..6 {
            let gid = types::GlyphId16::new(gid);
            assert_eq!(read.advance(gid), original.advance(gid));
            assert_eq!(read.side_bearing(gid), original.side_bearing(gid));
        }
    }

    #[rstest]
    #[case::distinct(&[(600, 10), (650, 12)])]
    #[case::single(&[(600, 10)])]
    #[case::empty(&[])]
    fn compact_is_noop(#[case] long_metrics: &[(u16, i16)]) {
        let hmtx = Hmtx::new(metrics(long_metrics), vec![1, 2]);
        assert_eq!(hmtx.clone().compacted(), hmtx);
    }

    #[test]
    fn compact_keeps_one_metric() {
        let hmtx = Hmtx::new(metrics(&[(500, 1), (500, 2), (500, 3)]), vec![]);
        let compacted = hmtx.compacted();
        assert_eq!(compacted.h_metrics, metrics(&[(500, 1)]));
        assert_eq!(compacted.left_side_bearings, [2, 3]);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_round_trip() {
        let hmtx = five_glyphs_three_metrics();
        let json = serde_json::to_string(&hmtx).unwrap();
        let back: Hmtx = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hmtx);
    }
}
