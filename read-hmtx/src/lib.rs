//! Reading the OpenType horizontal metrics table
//!
//! This crate provides memory safe zero-allocation parsing of the
//! [`hmtx`][hmtx] table, and of the two sibling tables it cannot be read
//! without: `maxp`, which supplies the glyph count, and `hhea`, which supplies
//! the number of long (advance + side bearing) metrics.
//!
//! The `hmtx` table is not self-describing. Its layout is:
//!
//! - `number_of_h_metrics` four-byte records, each an advance width followed
//!   by a left side bearing;
//! - `num_glyphs - number_of_h_metrics` two-byte left side bearings for the
//!   remaining glyphs.
//!
//! The table can be read directly, passing those two counts explicitly, or
//! through a [`TableProvider`], which gathers them from the font.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use read_hmtx::{FontRef, TableProvider};
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = FontRef::new(&font_bytes).expect("failed to read font data");
//! match font.hmtx().expect("malformed hmtx") {
//!     Some(hmtx) => println!("{} long metrics", hmtx.h_metrics().len()),
//!     None => println!("font has no hmtx table"),
//! }
//! ```
//!
//! [hmtx]: https://learn.microsoft.com/en-us/typography/opentype/spec/hmtx

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod font_data;
mod font_ref;
mod read;
mod table_provider;
mod table_ref;
pub mod tables;

pub use font_data::FontData;
pub use font_ref::{FontRef, TableDirectory, TableRecord};
pub use read::{FontRead, FontReadWithArgs, ReadArgs, ReadError};
pub use table_provider::{TableProvider, TopLevelTable};
pub use table_ref::{MinByteRange, TableRef};

/// Public re-export of the hmtx-types crate.
pub extern crate hmtx_types as types;
