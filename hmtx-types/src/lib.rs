//! Common [scalar data types][data types] used when reading and writing the
//! horizontal metrics tables.
//!
//! [data types]: https://docs.microsoft.com/en-us/typography/opentype/spec/otff#data-types

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod fword;
mod glyph_id;
mod raw;
mod tag;
mod version;

pub use fword::{FWord, UfWord};
pub use glyph_id::GlyphId16;
pub use raw::{BigEndian, FixedSize, Scalar};
pub use tag::{InvalidTag, Tag};
pub use version::{MajorMinor, Version16Dot16};

/// The SFNT version for fonts containing TrueType outlines.
pub const TT_SFNT_VERSION: u32 = 0x00010000;
/// The SFNT version for fonts containing CFF outlines.
pub const CFF_SFNT_VERSION: u32 = 0x4F54544F;
/// The legacy Apple SFNT version (`'true'`) for TrueType fonts.
pub const TRUE_SFNT_VERSION: u32 = 0x74727565;
