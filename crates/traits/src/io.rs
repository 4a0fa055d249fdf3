//! `Read`/`Write` adapters that checksum data in flight.
//!
//! Both adapters own an accumulator instance (any [`Checksum`]), so runtime
//! parametrized engines plug in the same way as fixed ones.
//!
//! # Example
//!
//! ```rust
//! # use traits::Checksum;
//! # #[derive(Clone)]
//! # struct Sum(u32);
//! # impl Checksum for Sum {
//! #   type Output = u32;
//! #   fn width(&self) -> u32 { 32 }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn value(&self) -> u32 { self.0 }
//! #   fn finalize(&self) -> u32 { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! #   fn reset_to(&mut self, value: u32) { self.0 = value; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum(0).reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(
//!   reader.check(),
//!   u32::from(b'a') + u32::from(b'b') + u32::from(b'c')
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, IoSlice, IoSliceMut, Read, Write};

use crate::Checksum;

/// Feed the first `n` bytes spread across `bufs` into `on_data`.
#[inline]
fn feed_prefix<'a>(bufs: impl Iterator<Item = &'a [u8]>, n: usize, mut on_data: impl FnMut(&[u8])) {
  let mut remaining = n;
  for buf in bufs {
    let take = remaining.min(buf.len());
    if take == 0 {
      break;
    }
    if let Some(data) = buf.get(..take) {
      on_data(data);
    }
    remaining -= take;
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`] and computes a checksum transparently.
///
/// All reads pass through to the inner reader while updating the accumulator
/// with the bytes actually read (short reads are handled).
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `C`: The accumulator type (a CRC engine, a word checksum, ...)
#[derive(Clone)]
pub struct ChecksumReader<R, C: Checksum> {
  inner: R,
  hasher: C,
}

impl<R, C: Checksum> ChecksumReader<R, C> {
  /// Wrap `inner`, accumulating into `hasher` from its current state.
  #[inline]
  #[must_use]
  pub fn new(inner: R, hasher: C) -> Self {
    Self { inner, hasher }
  }

  /// The current check value.
  ///
  /// Does not consume the reader; further reads keep updating it.
  #[inline]
  #[must_use]
  pub fn check(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// The accumulator.
  #[inline]
  pub fn hasher(&self) -> &C {
    &self.hasher
  }

  /// Mutable access to the accumulator.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Unwrap, returning the inner reader and the accumulator.
  #[inline]
  pub fn into_parts(self) -> (R, C) {
    (self.inner, self.hasher)
  }

  /// Unwrap, discarding the accumulator.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: Read, C: Checksum> Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    feed_prefix(bufs.iter().map(|b| &**b), n, |data| self.hasher.update(data));
    Ok(n)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Writer
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Write`] and computes a checksum transparently.
///
/// Only the bytes the inner writer accepted are accumulated, so a short or
/// failed write leaves the check value consistent with the written output.
///
/// # Example
///
/// ```rust
/// # use traits::Checksum;
/// # #[derive(Clone)]
/// # struct Sum(u32);
/// # impl Checksum for Sum {
/// #   type Output = u32;
/// #   fn width(&self) -> u32 { 32 }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn value(&self) -> u32 { self.0 }
/// #   fn finalize(&self) -> u32 { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// #   fn reset_to(&mut self, value: u32) { self.0 = value; }
/// # }
/// # use std::io::Write;
/// let mut writer = Sum(0).writer(Vec::new());
/// writer.write_all(b"hello world")?;
/// let (out, sum) = writer.into_parts();
/// assert_eq!(out, b"hello world".to_vec());
/// assert_eq!(
///   sum.finalize(),
///   b"hello world".iter().fold(0u32, |acc, &b| acc.wrapping_add(u32::from(b)))
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct ChecksumWriter<W, C: Checksum> {
  inner: W,
  hasher: C,
}

impl<W, C: Checksum> ChecksumWriter<W, C> {
  /// Wrap `inner`, accumulating into `hasher` from its current state.
  #[inline]
  #[must_use]
  pub fn new(inner: W, hasher: C) -> Self {
    Self { inner, hasher }
  }

  /// The current check value.
  #[inline]
  #[must_use]
  pub fn check(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// The accumulator.
  #[inline]
  pub fn hasher(&self) -> &C {
    &self.hasher
  }

  /// Mutable access to the accumulator.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Unwrap, returning the inner writer and the accumulator.
  #[inline]
  pub fn into_parts(self) -> (W, C) {
    (self.inner, self.hasher)
  }

  /// Unwrap, discarding the accumulator.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: Write, C: Checksum> Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    feed_prefix(bufs.iter().map(|b| &**b), n, |data| self.hasher.update(data));
    Ok(n)
  }
}

#[cfg(test)]
mod tests {
  use std::{io::Cursor, vec, vec::Vec};

  use super::*;

  #[derive(Clone)]
  struct Sum(u32);

  impl Checksum for Sum {
    type Output = u32;
    fn width(&self) -> u32 {
      32
    }
    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
    }
    fn value(&self) -> u32 {
      self.0
    }
    fn finalize(&self) -> u32 {
      self.0
    }
    fn reset(&mut self) {
      self.0 = 0;
    }
    fn reset_to(&mut self, value: u32) {
      self.0 = value;
    }
  }

  /// Writer that accepts at most `cap` bytes per call.
  struct Trickle {
    out: Vec<u8>,
    cap: usize,
  }

  impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      let n = buf.len().min(self.cap);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }
    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  fn sum(data: &[u8]) -> u32 {
    data.iter().map(|&b| u32::from(b)).sum()
  }

  #[test]
  fn reader_small_buffer() {
    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let mut reader = Sum(0).reader(Cursor::new(data.clone()));
    let mut buf = [0u8; 7];
    let mut seen = Vec::new();
    loop {
      let n = reader.read(&mut buf).unwrap();
      if n == 0 {
        break;
      }
      seen.extend_from_slice(&buf[..n]);
    }
    assert_eq!(seen, data);
    assert_eq!(reader.check(), sum(&data));
  }

  #[test]
  fn reader_vectored() {
    let data = b"abcdefghij".to_vec();
    let mut reader = ChecksumReader::new(Cursor::new(data.clone()), Sum(0));
    let mut a = [0u8; 3];
    let mut b = [0u8; 20];
    let n = reader.read_vectored(&mut [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b)]).unwrap();
    assert_eq!(n, data.len());
    assert_eq!(reader.check(), sum(&data));
  }

  #[test]
  fn reader_resumes_from_state() {
    let mut reader = ChecksumReader::new(Cursor::new(vec![1u8, 2, 3]), Sum(100));
    io::copy(&mut reader, &mut io::sink()).unwrap();
    assert_eq!(reader.check(), 106);
    let (_, hasher) = reader.into_parts();
    assert_eq!(hasher.value(), 106);
  }

  #[test]
  fn writer_counts_only_accepted_bytes() {
    let mut writer = ChecksumWriter::new(Trickle { out: Vec::new(), cap: 3 }, Sum(0));
    let n = writer.write(b"hello").unwrap();
    assert_eq!(n, 3);
    assert_eq!(writer.check(), sum(b"hel"));
    writer.write_all(b"lo world").unwrap();
    let (inner, hasher) = writer.into_parts();
    assert_eq!(inner.out, b"hello world".to_vec());
    assert_eq!(hasher.finalize(), sum(&inner.out));
  }

  #[test]
  fn writer_vectored() {
    let mut writer = Sum(0).writer(Vec::new());
    let n = writer.write_vectored(&[IoSlice::new(b"ab"), IoSlice::new(b"cd")]).unwrap();
    assert!(n > 0);
    let written = writer.inner().clone();
    assert_eq!(writer.check(), sum(&written));
  }
}
