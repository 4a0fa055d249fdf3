//! Bitwise reference kernel for every CRC width from 1 to 128.
//!
//! This is the canonical "source of truth" for CRC computation: one bit per
//! step, no tables, directly mirroring the polynomial-division definition.
//! The table kernel must produce identical registers for every input.
//!
//! # Register Layout
//!
//! The `width`-bit register lives left-aligned in a `u128` (bit `width - 1`
//! of the CRC sits at bit 127), with the polynomial aligned the same way.
//! Each input byte is XORed into bits 120..=127. One code path therefore
//! covers both cases of the MSB-first model:
//!
//! | Width | Effect of the aligned layout |
//! |-------|------------------------------|
//! | `< 8` | register enlarged to 8 bits, byte XORed in whole |
//! | `>= 8` | byte XORed into the most significant byte lane |
//!
//! Bits below the aligned register are always zero after a full byte, so
//! the layout never leaks state between bytes.

// Loop indices are bounded by `data.len()`; clippy cannot prove it in const fn.
#![allow(clippy::indexing_slicing)]

use super::reflect::reflect_byte;

/// Top bit of the aligned register.
const TOP_BIT: u128 = 1 << 127;

/// Shift that moves a right-aligned `width`-bit value to the top of a `u128`.
#[inline]
#[must_use]
pub const fn align_shift(width: u32) -> u32 {
  128 - width
}

/// Run eight shift/conditional-XOR steps on an aligned register.
#[inline]
#[must_use]
pub const fn step8(mut reg: u128, poly_aligned: u128) -> u128 {
  let mut bit = 0u32;
  while bit < 8 {
    reg = if reg & TOP_BIT != 0 { (reg << 1) ^ poly_aligned } else { reg << 1 };
    bit += 1;
  }
  reg
}

/// Feed one byte into an aligned register.
#[inline]
#[must_use]
pub const fn bitwise_byte(reg: u128, poly_aligned: u128, reflect_in: bool, byte: u8) -> u128 {
  let byte = if reflect_in { reflect_byte(byte) } else { byte };
  step8(reg ^ ((byte as u128) << 120), poly_aligned)
}

/// Bitwise CRC update over `data` (MSB-first, aligned register).
///
/// # Arguments
///
/// * `reg` - Aligned register state
/// * `poly_aligned` - Polynomial shifted by [`align_shift`]
/// * `reflect_in` - Process each byte LSB-first
/// * `data` - Input bytes
///
/// # Returns
///
/// The aligned register after consuming `data`.
#[must_use]
pub const fn bitwise_update(mut reg: u128, poly_aligned: u128, reflect_in: bool, data: &[u8]) -> u128 {
  let mut i = 0usize;
  while i < data.len() {
    reg = bitwise_byte(reg, poly_aligned, reflect_in, data[i]);
    i += 1;
  }
  reg
}

/// Complete bitwise CRC of `data`: init, update, output reflection, final XOR.
///
/// Values are right-aligned `width`-bit integers; the result lies in
/// `[0, 2^width)`. Usable in const context, e.g. to pin check values at
/// compile time.
#[must_use]
pub const fn crc_bitwise(
  width: u32,
  poly: u128,
  init: u128,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u128,
  data: &[u8],
) -> u128 {
  let shift = align_shift(width);
  let reg = bitwise_update(init << shift, poly << shift, reflect_in, data) >> shift;
  let reg = if reflect_out { super::reflect::reflect_bits(reg, width) } else { reg };
  reg ^ xor_out
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time check values
// ─────────────────────────────────────────────────────────────────────────────

const CHECK: &[u8] = b"123456789";

const _: () = {
  // CRC-32/ISO-HDLC
  assert!(crc_bitwise(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, CHECK) == 0xCBF4_3926);
  // CRC-16/XMODEM
  assert!(crc_bitwise(16, 0x1021, 0, false, false, 0, CHECK) == 0x31C3);
  // CRC-3/ROHC (narrower than a byte)
  assert!(crc_bitwise(3, 0x3, 0x7, true, true, 0, CHECK) == 0x6);
  // CRC-12/3GPP (reflect_out without reflect_in)
  assert!(crc_bitwise(12, 0x80F, 0, false, true, 0, CHECK) == 0xDAF);
};

#[cfg(test)]
mod tests {
  use super::*;

  /// Right-aligned MSB-first reference for widths >= 8, written independently.
  fn crc_msb_first(width: u32, poly: u128, init: u128, data: &[u8]) -> u128 {
    let mask = if width == 128 { u128::MAX } else { (1u128 << width) - 1 };
    let top = 1u128 << (width - 1);
    let mut crc = init;
    for &b in data {
      crc ^= u128::from(b) << (width - 8);
      for _ in 0..8 {
        crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
        crc &= mask;
      }
    }
    crc
  }

  /// 8-bit enlarged register reference for widths < 8.
  fn crc_narrow(width: u32, poly: u128, init: u128, data: &[u8]) -> u128 {
    let pad = 8 - width;
    let mut crc = init << pad;
    let poly = poly << pad;
    for &b in data {
      crc ^= u128::from(b);
      for _ in 0..8 {
        crc = if crc & 0x80 != 0 { (crc << 1) ^ poly } else { crc << 1 };
        crc &= 0xFF;
      }
    }
    crc >> pad
  }

  #[test]
  fn empty_returns_init() {
    assert_eq!(crc_bitwise(32, 0x04C1_1DB7, 0x1234_5678, false, false, 0, &[]), 0x1234_5678);
    assert_eq!(crc_bitwise(5, 0x05, 0x1F, true, true, 0x1F, &[]), 0x1F ^ 0x1F);
  }

  #[test]
  fn matches_right_aligned_reference() {
    let data = b"The quick brown fox jumps over the lazy dog";
    for (width, poly, init) in [
      (8u32, 0x07u128, 0x00u128),
      (16, 0x8005, 0xFFFF),
      (24, 0x86_4CFB, 0xB7_04CE),
      (32, 0x04C1_1DB7, 0xFFFF_FFFF),
      (40, 0x00_0482_0009, 0),
      (64, 0x42F0_E1EB_A9EA_3693, u128::from(u64::MAX)),
      (82, 0x308C_0111_0114_0144_0411, 0),
      (128, 0x87, u128::MAX),
    ] {
      let shift = align_shift(width);
      let got = bitwise_update(init << shift, poly << shift, false, data) >> shift;
      assert_eq!(got, crc_msb_first(width, poly, init, data), "width {width}");
    }
  }

  #[test]
  fn narrow_widths_match_enlarged_register() {
    let data = b"123456789\x00\xFF\x80";
    for (width, poly, init) in [(3u32, 0x3u128, 0x7u128), (4, 0x3, 0), (5, 0x15, 0x1F), (6, 0x27, 0x3F), (7, 0x4F, 0x7F)] {
      let shift = align_shift(width);
      let got = bitwise_update(init << shift, poly << shift, false, data) >> shift;
      assert_eq!(got, crc_narrow(width, poly, init, data), "width {width}");
    }
  }

  #[test]
  fn incremental() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let poly = 0x04C1_1DB7u128 << 96;
    let init = 0xFFFF_FFFFu128 << 96;
    let oneshot = bitwise_update(init, poly, true, data);

    for split in 1..data.len() {
      let first = bitwise_update(init, poly, true, &data[..split]);
      let second = bitwise_update(first, poly, true, &data[split..]);
      assert_eq!(second, oneshot, "Incremental mismatch at split {split}");
    }
  }

  #[test]
  fn low_bits_stay_clear() {
    let shift = align_shift(5);
    let low = (1u128 << shift) - 1;
    let mut reg = 0x1Fu128 << shift;
    for b in 0u8..=255 {
      reg = bitwise_byte(reg, 0x05 << shift, true, b);
      assert_eq!(reg & low, 0, "byte {b}");
    }
  }

  #[test]
  fn crc32c_check_value() {
    let crc = crc_bitwise(32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, CHECK);
    assert_eq!(crc, 0xE306_9283);
  }

  #[test]
  fn crc82_darc_check_value() {
    let crc = crc_bitwise(82, 0x308C_0111_0114_0144_0411, 0, true, true, 0, CHECK);
    assert_eq!(crc, 0x9EA8_3F62_5023_801F_D612);
  }
}
