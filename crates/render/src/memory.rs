//! Linear-memory view of the output buffer.

use crate::env::{output_offset, OUTPUT_BASE, SAMPLE_BYTES};

/// Host-provided linear memory, addressed as output samples.
///
/// Wraps a byte slice owned by the caller. Samples are stored little-endian
/// at [`output_offset`], whatever the host byte order.
///
/// # Example
///
/// ```
/// use tonefill_render::LinearMemory;
///
/// let mut bytes = [0u8; 16];
/// let mut memory = LinearMemory::new(&mut bytes);
/// memory.write_f32(1, 0.5);
/// assert_eq!(memory.read_f32(1), Some(0.5));
/// assert_eq!(memory.capacity(), 4);
/// assert_eq!(&bytes[4..8], &0.5f32.to_le_bytes());
/// ```
#[derive(Debug)]
pub struct LinearMemory<'a> {
    bytes: &'a mut [u8],
}

impl<'a> LinearMemory<'a> {
    /// Wrap a host memory region.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    /// Number of whole output samples that fit.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len().saturating_sub(OUTPUT_BASE) / SAMPLE_BYTES
    }

    /// Store `value` in output slot `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.capacity()`.
    #[inline]
    pub fn write_f32(&mut self, index: usize, value: f32) {
        let offset = output_offset(index);
        self.bytes[offset..offset + SAMPLE_BYTES].copy_from_slice(&value.to_le_bytes());
    }

    /// Read output slot `index`, or `None` past the end of memory.
    #[inline]
    pub fn read_f32(&self, index: usize) -> Option<f32> {
        let offset = output_offset(index);
        let slot = self.bytes.get(offset..offset + SAMPLE_BYTES)?;
        let mut raw = [0u8; SAMPLE_BYTES];
        raw.copy_from_slice(slot);
        Some(f32::from_le_bytes(raw))
    }

    /// The first `len` output samples (fewer if memory is shorter).
    pub fn samples(&self, len: usize) -> impl Iterator<Item = f32> + '_ {
        (0..len.min(self.capacity())).filter_map(move |index| self.read_f32(index))
    }

    /// Raw bytes of the whole region.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }
}
