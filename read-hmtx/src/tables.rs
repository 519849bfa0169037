//! The tables read by this crate

pub mod hhea;
pub mod hmtx;
pub mod maxp;

/// Calculate a font table checksum.
///
/// The table is summed as a sequence of big-endian `u32`s; a trailing partial
/// word is padded with zeros.
pub fn compute_checksum(table: &[u8]) -> u32 {
    let mut chunks = table.chunks_exact(4);
    let mut sum = 0u32;
    for chunk in chunks.by_ref() {
        let word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        sum = sum.wrapping_add(word);
    }

    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut last = [0u8; 4];
        last[..rem.len()].copy_from_slice(rem);
        sum = sum.wrapping_add(u32::from_be_bytes(last));
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::compute_checksum;

    #[test]
    fn checksum_pads_partial_word() {
        assert_eq!(compute_checksum(&[]), 0);
        assert_eq!(compute_checksum(&[0, 0, 0, 1, 0, 0, 0, 2]), 3);
        assert_eq!(compute_checksum(&[0, 0, 0, 1, 1]), 0x0100_0001);
        assert_eq!(compute_checksum(&[0xff, 0xff, 0xff, 0xff, 0, 0, 0, 2]), 1);
    }
}
