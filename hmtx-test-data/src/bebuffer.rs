//! small utilities used in tests

use hmtx_types::Scalar;

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return a reference to the contents of the buffer
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw().as_ref());
        }
        self
    }

    /// Write an `(advance, side_bearing)` pair for each item.
    pub fn long_metrics(self, metrics: impl IntoIterator<Item = (u16, i16)>) -> Self {
        metrics
            .into_iter()
            .fold(self, |buf, (advance, lsb)| buf.push(advance).push(lsb))
    }

    /// Drop the last `n` bytes, simulating data that ends early.
    pub fn truncate_by(mut self, n: usize) -> Self {
        self.data.truncate(self.data.len().saturating_sub(n));
        self
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_big_endian() {
        let buf = BeBuffer::new().push(600u16).push(-2i16);
        assert_eq!(buf.data(), &[0x02, 0x58, 0xFF, 0xFE]);
    }

    #[test]
    fn matches_canned_example() {
        let buf = BeBuffer::new()
            .long_metrics([(600, 10), (650, 12), (700, -5)])
            .extend([3i16, -2]);
        assert_eq!(buf.data(), crate::hmtx::FIVE_GLYPHS_THREE_METRICS);
    }
}
