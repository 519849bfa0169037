//! Writing the OpenType horizontal metrics table
//!
//! This crate holds owned versions of the `hmtx` table and of the two tables
//! it depends on, `maxp` and `hhea`. Tables can be built by hand, or
//! converted from the zero-copy tables in [`read_hmtx`], modified, and then
//! written back to bytes.
//!
//! The main entry point is [`MetricsTables`], which decodes all three tables
//! from a font and writes `hmtx` back out to any [`std::io::Write`] sink:
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use write_hmtx::{read::FontRef, MetricsTables};
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = FontRef::new(&font_bytes).expect("failed to read font data");
//! let tables = MetricsTables::read(&font).expect("missing maxp or hhea");
//!
//! let mut out = Vec::new();
//! let written = tables.write_hmtx(&mut out).expect("write failed");
//! assert_eq!(written, out.len());
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod font_builder;
pub mod from_obj;
mod metrics;
pub mod tables;
pub mod validate;
mod write;

pub use error::Error;
pub use font_builder::{BuilderError, FontBuilder};
pub use metrics::MetricsTables;
pub use validate::Validate;
pub use write::{dump_table, write_table, FontWrite, TableWriter};

/// Public re-export of the read-hmtx crate.
pub extern crate read_hmtx as read;

/// Public re-export of the hmtx-types crate.
pub extern crate hmtx_types as types;
