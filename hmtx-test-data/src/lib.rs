//! test data shared between the hmtx crates.

pub mod bebuffer;

pub mod hmtx {
    //! Raw `hmtx` tables.

    /// Five glyphs, three long metrics, two trailing side bearings.
    #[rustfmt::skip]
    pub static FIVE_GLYPHS_THREE_METRICS: &[u8] = &[
        0x02, 0x58, 0x00, 0x0A, // advance 600, lsb 10
        0x02, 0x8A, 0x00, 0x0C, // advance 650, lsb 12
        0x02, 0xBC, 0xFF, 0xFB, // advance 700, lsb -5
        0x00, 0x03,             // lsb 3
        0xFF, 0xFE,             // lsb -2
    ];

    /// Two complete long metrics, followed by half of a third.
    #[rustfmt::skip]
    pub static TRUNCATED_THIRD_METRIC: &[u8] = &[
        0x01, 0xF4, 0x00, 0x00, // advance 500, lsb 0
        0x01, 0xF4, 0x00, 0x14, // advance 500, lsb 20
        0x02, 0x26,             // advance 550, lsb missing
    ];
}

pub mod maxp {
    //! Raw `maxp` tables.

    #[rustfmt::skip]
    pub static VERSION_0_5_FIVE_GLYPHS: &[u8] = &[
        0x00, 0x00, 0x50, 0x00, // version 0.5
        0x00, 0x05,             // num_glyphs 5
    ];
}

pub mod hhea {
    //! Raw `hhea` tables.

    #[rustfmt::skip]
    pub static THREE_METRICS: &[u8] = &[
        0x00, 0x01, 0x00, 0x00, // version 1.0
        0x03, 0x20,             // ascender 800
        0xFF, 0x38,             // descender -200
        0x00, 0x00,             // line gap 0
        0x02, 0xBC,             // advance width max 700
        0xFF, 0xFB,             // min lsb -5
        0x00, 0x0A,             // min rsb 10
        0x02, 0x80,             // x max extent 640
        0x00, 0x01,             // caret slope rise 1
        0x00, 0x00,             // caret slope run 0
        0x00, 0x00,             // caret offset 0
        0x00, 0x00, 0x00, 0x00, // reserved
        0x00, 0x00, 0x00, 0x00, // reserved
        0x00, 0x00,             // metric data format
        0x00, 0x03,             // number_of_h_metrics 3
    ];
}
