//! Const-fn lookup table generation and the byte-at-a-time table kernel.
//!
//! Tables hold the aligned-register effect of eight bitwise steps for each
//! of the 256 possible values of the top byte lane (register top byte XOR
//! incoming byte). Because the eight-step update is linear over GF(2),
//!
//! ```text
//! step8(reg ^ byte << 120) == (reg << 8) ^ TABLE[(reg >> 120) ^ byte]
//! ```
//!
//! for every register and byte, which is what makes the table kernel a
//! drop-in replacement for [`bitwise_update`](super::reference::bitwise_update).

// Table indices are `u8` values into `[u128; 256]`; always in bounds.
#![allow(clippy::indexing_slicing)]

use super::{reference::step8, reflect::reflect_byte};

/// Generate a single table entry.
#[inline]
#[must_use]
pub const fn table_entry(poly_aligned: u128, index: u8) -> u128 {
  step8((index as u128) << 120, poly_aligned)
}

/// Generate the 256-entry table for an aligned polynomial.
#[must_use]
pub const fn generate_table(poly_aligned: u128) -> [u128; 256] {
  let mut table = [0u128; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = table_entry(poly_aligned, i as u8);
    i += 1;
  }
  table
}

/// Feed one byte into an aligned register through `table`.
#[inline]
#[must_use]
pub const fn table_byte(table: &[u128; 256], reg: u128, reflect_in: bool, byte: u8) -> u128 {
  let byte = if reflect_in { reflect_byte(byte) } else { byte };
  let index = ((reg >> 120) as u8) ^ byte;
  (reg << 8) ^ table[index as usize]
}

/// Table-driven CRC update over `data` (aligned register).
#[must_use]
pub fn table_update(table: &[u128; 256], mut reg: u128, reflect_in: bool, data: &[u8]) -> u128 {
  if reflect_in {
    for &b in data {
      reg = table_byte(table, reg, true, b);
    }
  } else {
    for &b in data {
      reg = table_byte(table, reg, false, b);
    }
  }
  reg
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::reference::{align_shift, bitwise_byte, bitwise_update};

  #[test]
  fn entry_zero_is_zero() {
    assert_eq!(table_entry(0x04C1_1DB7 << 96, 0), 0);
  }

  #[test]
  fn crc32_msb_table_known_entries() {
    // Classic MSB-first CRC-32 table: T[1] = 0x04C11DB7, T[128] = 0xC3...
    let table = generate_table(0x04C1_1DB7 << 96);
    assert_eq!(table[1] >> 96, 0x04C1_1DB7);
    assert_eq!(table[2] >> 96, 0x0982_3B6E);
    assert_eq!(table[255] >> 96, 0xB1F7_40B4);
  }

  #[test]
  fn table_equals_bitwise_for_every_byte() {
    for (width, poly) in [(3u32, 0x3u128), (8, 0x07), (12, 0x80F), (16, 0x1021), (32, 0x04C1_1DB7), (82, 0x308C_0111_0114_0144_0411)] {
      let shift = align_shift(width);
      let poly_aligned = poly << shift;
      let table = generate_table(poly_aligned);
      let mask = if width == 128 { u128::MAX } else { (1u128 << width) - 1 };
      let mut reg_seed = 0x0123_4567_89AB_CDEF_0F1E_2D3C_4B5A_6978u128;
      for byte in 0u8..=255 {
        let reg = (reg_seed & mask) << shift;
        for reflect in [false, true] {
          assert_eq!(
            table_byte(&table, reg, reflect, byte),
            bitwise_byte(reg, poly_aligned, reflect, byte),
            "width {width} byte {byte:#04x} reflect {reflect}"
          );
        }
        reg_seed = reg_seed.rotate_left(13) ^ u128::from(byte);
      }
    }
  }

  #[test]
  fn update_matches_bitwise() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let poly_aligned = 0x8005u128 << align_shift(16);
    let init = 0xFFFFu128 << align_shift(16);
    let table = generate_table(poly_aligned);
    for reflect in [false, true] {
      assert_eq!(
        table_update(&table, init, reflect, data),
        bitwise_update(init, poly_aligned, reflect, data)
      );
    }
  }
}
