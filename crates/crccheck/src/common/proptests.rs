//! Property tests for the reflection primitives and the two kernels.
//!
//! The naive [`reflect_bits`] and the bitwise kernel are the oracles; the
//! byte table, the hardware bit-reverse and the lookup-table kernel must
//! agree with them for every width and register.

#![cfg(all(test, not(miri)))]

extern crate std;

use proptest::prelude::*;

use super::{
  reference::{align_shift, bitwise_byte, bitwise_update, crc_bitwise},
  reflect::{REFLECT_BYTE, reflect_bits, reflect_fast},
  tables::{generate_table, table_byte, table_update},
};
use crate::{Crc, CrcParams, CrcTable};

fn mask(width: u32) -> u128 {
  u128::MAX >> (128 - width)
}

/// An arbitrary valid parameter set.
fn params() -> impl Strategy<Value = CrcParams> {
  (1u32..=128, any::<u128>(), any::<u128>(), any::<bool>(), any::<bool>(), any::<u128>()).prop_map(
    |(width, poly, init, refin, refout, xorout)| {
      let m = mask(width);
      CrcParams::new(width, poly & m, init & m, xorout & m)
        .unwrap()
        .with_reflect_in(refin)
        .with_reflect_out(refout)
    },
  )
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  // ─────────────────────────────────────────────────────────────────────────
  // Reflection
  // ─────────────────────────────────────────────────────────────────────────

  #[test]
  fn reflect_is_an_involution(value in any::<u128>(), width in 0u32..=128) {
    let value = if width == 0 { 0 } else { value & mask(width) };
    prop_assert_eq!(reflect_bits(reflect_bits(value, width), width), value);
  }

  #[test]
  fn reflect_fast_matches_naive(value in any::<u128>(), width in 0u32..=128) {
    let value = if width == 0 { 0 } else { value & mask(width) };
    prop_assert_eq!(reflect_fast(value, width), reflect_bits(value, width));
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Table / bitwise equivalence
  // ─────────────────────────────────────────────────────────────────────────

  #[test]
  fn table_byte_matches_bitwise(
    width in 1u32..=128,
    poly in any::<u128>(),
    reg in any::<u128>(),
    byte in any::<u8>(),
    reflect in any::<bool>(),
  ) {
    let shift = align_shift(width);
    let poly_aligned = (poly & mask(width)) << shift;
    let reg = (reg & mask(width)) << shift;
    let table = generate_table(poly_aligned);
    prop_assert_eq!(
      table_byte(&table, reg, reflect, byte),
      bitwise_byte(reg, poly_aligned, reflect, byte)
    );
  }

  #[test]
  fn table_update_matches_bitwise(
    width in 1u32..=128,
    poly in any::<u128>(),
    init in any::<u128>(),
    reflect in any::<bool>(),
    data in proptest::collection::vec(any::<u8>(), 0..=256),
  ) {
    let shift = align_shift(width);
    let poly_aligned = (poly & mask(width)) << shift;
    let init = (init & mask(width)) << shift;
    let table = generate_table(poly_aligned);
    prop_assert_eq!(
      table_update(&table, init, reflect, &data),
      bitwise_update(init, poly_aligned, reflect, &data)
    );
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Engines against the reference function
  // ─────────────────────────────────────────────────────────────────────────

  #[test]
  fn engines_match_reference(
    params in params(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let expected = crc_bitwise(
      params.width(),
      params.polynomial(),
      params.init(),
      params.reflect_in(),
      params.reflect_out(),
      params.xor_out(),
      &data,
    );
    prop_assert_eq!(Crc::new(&params).process(&data).finalize(), expected);
    prop_assert_eq!(CrcTable::new(params).calc(&data), expected);
    prop_assert_eq!(Crc::calc(&params, &data), expected);
    prop_assert!(expected <= params.mask());
  }
}

#[test]
fn reflect_byte_table_matches_naive() {
  for b in 0u8..=255 {
    assert_eq!(u128::from(REFLECT_BYTE[b as usize]), reflect_bits(u128::from(b), 8));
  }
}
