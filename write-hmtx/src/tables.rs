//! A directory of the tables this crate can write.

pub mod hhea;
pub mod hmtx;
pub mod maxp;
