//! Bit reflection (bit-order reversal) within a fixed-width group.
//!
//! [`reflect_bits`] is the naive O(width) definition and the source of truth.
//! [`REFLECT_BYTE`] is generated from it at compile time, and
//! [`reflect_fast`] uses the hardware bit-reverse; both must agree with the
//! naive form for every input.

// Table lookups index a `[u8; 256]` with a `u8`, which is always in bounds.
#![allow(clippy::indexing_slicing)]

/// Reverse the low `width` bits of `value`.
///
/// Bits at or above `width` are ignored. `width` is clamped to 128.
#[must_use]
pub const fn reflect_bits(value: u128, width: u32) -> u128 {
  let width = if width > 128 { 128 } else { width };
  let mut result = 0u128;
  let mut i = 0u32;
  while i < width {
    if (value >> i) & 1 != 0 {
      result |= 1u128 << (width - 1 - i);
    }
    i += 1;
  }
  result
}

/// Reverse the low `width` bits of `value` using a single bit-reverse.
///
/// Identical to [`reflect_bits`] for every `value` whose bits at or above
/// `width` are zero.
#[inline]
#[must_use]
pub const fn reflect_fast(value: u128, width: u32) -> u128 {
  match width {
    0 => 0,
    1..=127 => value.reverse_bits() >> (128 - width),
    _ => value.reverse_bits(),
  }
}

const fn build_reflect_byte() -> [u8; 256] {
  let mut table = [0u8; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = reflect_bits(i as u128, 8) as u8;
    i += 1;
  }
  table
}

/// Bit-reversed value of every byte.
pub const REFLECT_BYTE: [u8; 256] = build_reflect_byte();

/// Reverse the 8 bits of `byte` through [`REFLECT_BYTE`].
#[inline]
#[must_use]
pub const fn reflect_byte(byte: u8) -> u8 {
  REFLECT_BYTE[byte as usize]
}

const _: () = {
  assert!(reflect_bits(0b1011, 4) == 0b1101);
  assert!(reflect_bits(0x04C1_1DB7, 32) == 0xEDB8_8320);
  assert!(reflect_fast(0x04C1_1DB7, 32) == 0xEDB8_8320);
  assert!(reflect_bits(1, 128) == 1u128 << 127);
};
