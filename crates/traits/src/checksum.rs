//! Incremental checksum trait.
//!
//! One contract for every accumulator in crccheck:
//!
//! - **Streaming**: any chunking of the same byte sequence gives the same result
//! - **Non-destructive finalize**: reading the check value never ends the computation
//! - **Checkpointing**: the raw accumulator can be read and restored

use core::fmt::Debug;

use crate::{ByteOrder, CheckBytes};

/// Incremental checksum accumulator.
///
/// Implementors are runtime-parametrized (a CRC engine bound to a parameter
/// set, a word checksum of a given width), so construction is left to the
/// concrete type; this trait covers everything after construction.
///
/// # Usage
///
/// ```rust
/// use traits::{ByteOrder, Checksum};
/// # #[derive(Clone)]
/// # struct Sum8(u8);
/// # impl Checksum for Sum8 {
/// #   type Output = u8;
/// #   fn width(&self) -> u32 { 8 }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
/// #   }
/// #   fn value(&self) -> u8 { self.0 }
/// #   fn finalize(&self) -> u8 { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// #   fn reset_to(&mut self, value: u8) { self.0 = value; }
/// # }
/// let mut sum = Sum8(0);
/// sum.update(&[0xDE, 0xAD]);
/// sum.update(&[0xBE, 0xEF]);
/// assert_eq!(sum.finalize(), 0x38);
/// assert_eq!(sum.finalize_bytes(ByteOrder::Big).as_slice(), &[0x38]);
/// ```
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent and must not change the accumulator
/// - `reset()` must restore the state the accumulator had when constructed
/// - `reset_to(v)` followed by `value()` must return `v` for every in-range `v`
pub trait Checksum: Clone {
  /// The check value type.
  type Output: Copy + Eq + Debug + Into<u128>;

  /// Width of the check value in bits.
  #[must_use]
  fn width(&self) -> u32;

  /// Number of bytes needed to encode the check value (`ceil(width / 8)`).
  #[inline]
  #[must_use]
  fn output_len(&self) -> usize {
    (self.width() as usize).div_ceil(8)
  }

  /// Feed more data into the accumulator.
  fn update(&mut self, data: &[u8]);

  /// Update the accumulator with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the accumulator with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// The raw accumulator, before any output transformation.
  ///
  /// Intended for checkpointing; feed it back through [`reset_to`](Self::reset_to).
  #[must_use]
  fn value(&self) -> Self::Output;

  /// The reported check value.
  ///
  /// Does not modify the accumulator, so more data may be processed afterwards.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// The reported check value encoded into [`output_len`](Self::output_len) bytes.
  #[inline]
  #[must_use]
  fn finalize_bytes(&self, order: ByteOrder) -> CheckBytes {
    CheckBytes::new(self.finalize().into(), self.output_len(), order)
  }

  /// The reported check value as lowercase hex, no prefix, no separators.
  #[cfg(feature = "alloc")]
  #[inline]
  #[must_use]
  fn finalize_hex(&self, order: ByteOrder) -> alloc::string::String {
    self.finalize_bytes(order).to_hex()
  }

  /// Restore the accumulator to its initial value.
  fn reset(&mut self);

  /// Load an explicit accumulator value (resume from a checkpoint).
  fn reset_to(&mut self, value: Self::Output);

  /// Compute the check value of `data` on a fresh copy of this accumulator.
  ///
  /// `self` is left untouched.
  #[inline]
  #[must_use]
  fn checksum(&self, data: &[u8]) -> Self::Output {
    let mut h = self.clone();
    h.reset();
    h.update(data);
    h.finalize()
  }

  /// Wrap a reader to compute the checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use crccheck::{Crc, CrcParams};
  /// use traits::Checksum;
  ///
  /// let file = std::fs::File::open("data.bin")?;
  /// let mut reader = Crc::new(&CrcParams::CRC32_ISO_HDLC).reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:08x}", reader.check());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(self, inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner, self)
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(self, inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner, self)
  }
}
