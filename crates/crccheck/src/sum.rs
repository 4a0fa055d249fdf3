//! Additive and XOR word checksums.
//!
//! Input bytes are grouped into words of `width` bits (assembled in the
//! configured [`ByteOrder`]) and each complete word is folded into the
//! accumulator, by addition modulo `2^width` ([`SumChecksum`]) or by XOR
//! ([`XorChecksum`]). There is no polynomial and no reflection.
//!
//! A word split across two `process` calls is carried over, so the usual
//! streaming guarantee holds. An incomplete word left at the end of the input
//! does not contribute to the result.
//!
//! ```rust
//! use crccheck::{ByteOrder, SumChecksum, XorChecksum};
//!
//! let mut sum = SumChecksum::sum8();
//! sum.process(&[0xDE, 0xAD]).process(&[0xBE, 0xEF]);
//! assert_eq!(sum.finalize(), 0x38);
//!
//! let xor = XorChecksum::xor16().with_byte_order(ByteOrder::Little);
//! assert_eq!(xor.calc(&[0x12, 0x34, 0x56, 0x78]), 0x4C44);
//! ```

use core::{borrow::Borrow, fmt};

use traits::{ByteOrder, CheckBytes, CheckMismatch, Checksum, ConfigError, InputDomainError};

/// Test data the checksum presets are verified against.
pub const CHECKSUM_CHECK_DATA: &[u8] = &[0xDE, 0xAD, 0xBE, 0xEF, 0xAA, 0x55, 0xC2, 0x8C];

/// Accumulator plus the partially assembled word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WordState {
  acc: u128,
  word: u128,
  filled: u8,
}

impl WordState {
  const fn new(acc: u128) -> Self {
    Self { acc, word: 0, filled: 0 }
  }
}

#[inline]
const fn word_mask(width: u8) -> u128 {
  if width >= 128 { u128::MAX } else { (1u128 << width) - 1 }
}

#[inline]
const fn checked_width(width: u32) -> Result<u8, ConfigError> {
  if width < 8 || width > 128 || !width.is_multiple_of(8) {
    return Err(ConfigError::InvalidWidth { width });
  }
  Ok(width as u8)
}

#[inline]
const fn add_word(acc: u128, word: u128, mask: u128) -> u128 {
  acc.wrapping_add(word) & mask
}

#[inline]
const fn xor_word(acc: u128, word: u128, mask: u128) -> u128 {
  (acc ^ word) & mask
}

/// Generate a word checksum type.
///
/// The generated type differs only in how a complete word is folded into the
/// accumulator (`combine`) and in its preset check values, listed as
/// `(width, big-endian result, little-endian result)` over
/// [`CHECKSUM_CHECK_DATA`].
macro_rules! define_word_checksum {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      combine: $combine:path,
      kind: $kind:literal,
      checks: [$(($cw:literal, $cbig:literal, $clittle:literal)),* $(,)?],
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, PartialEq, Eq)]
    $vis struct $name {
      width: u8,
      order: ByteOrder,
      init: u128,
      state: WordState,
    }

    impl $name {
      /// A checksum over `width`-bit words, big-endian, starting from zero.
      ///
      /// # Errors
      ///
      /// [`ConfigError::InvalidWidth`] unless `width` is a multiple of 8 in
      /// `8..=128`.
      pub const fn new(width: u32) -> Result<Self, ConfigError> {
        match checked_width(width) {
          Ok(width) => Ok(Self { width, order: ByteOrder::Big, init: 0, state: WordState::new(0) }),
          Err(e) => Err(e),
        }
      }

      /// Assemble words from the input in `order`.
      ///
      /// Any partially assembled word is discarded.
      #[must_use]
      pub const fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self.state = WordState::new(self.init);
        self
      }

      /// Start (and restart on [`reset`](Self::reset)) from `init`.
      ///
      /// Bits above `width` are discarded.
      #[must_use]
      pub const fn with_init(mut self, init: u128) -> Self {
        self.init = init & word_mask(self.width);
        self.state = WordState::new(self.init);
        self
      }

      /// Word width in bits.
      #[inline]
      #[must_use]
      pub const fn width(&self) -> u32 {
        self.width as u32
      }

      /// Byte order words are assembled in.
      #[inline]
      #[must_use]
      pub const fn byte_order(&self) -> ByteOrder {
        self.order
      }

      /// The initial accumulator value.
      #[inline]
      #[must_use]
      pub const fn init(&self) -> u128 {
        self.init
      }

      #[inline]
      const fn word_bytes(&self) -> u8 {
        self.width / 8
      }

      #[inline]
      const fn absorb(&self, mut st: WordState, byte: u8) -> WordState {
        st.word = match self.order {
          ByteOrder::Big => (st.word << 8) | byte as u128,
          ByteOrder::Little => st.word | ((byte as u128) << (8 * st.filled as u32)),
        };
        st.filled += 1;
        if st.filled == self.word_bytes() {
          st.acc = $combine(st.acc, st.word, word_mask(self.width));
          st.word = 0;
          st.filled = 0;
        }
        st
      }

      /// Restore the accumulator to `init` and drop any partial word.
      #[inline]
      pub fn reset(&mut self) -> &mut Self {
        self.state = WordState::new(self.init);
        self
      }

      /// Load an explicit accumulator value and drop any partial word.
      ///
      /// Bits above `width` are discarded.
      #[inline]
      pub fn reset_to(&mut self, value: u128) -> &mut Self {
        self.state = WordState::new(value & word_mask(self.width));
        self
      }

      /// Consume `data`.
      pub fn process(&mut self, data: &[u8]) -> &mut Self {
        let mut st = self.state;
        for &b in data {
          st = self.absorb(st, b);
        }
        self.state = st;
        self
      }

      /// Consume bytes from any iterator (`u8` or `&u8` items).
      pub fn process_bytes<I>(&mut self, bytes: I) -> &mut Self
      where
        I: IntoIterator,
        I::Item: Borrow<u8>,
      {
        let mut st = self.state;
        for b in bytes {
          st = self.absorb(st, *b.borrow());
        }
        self.state = st;
        self
      }

      /// Consume integer values that must each lie in `0..=255`.
      ///
      /// Nothing is applied unless every value is in range.
      ///
      /// # Errors
      ///
      /// [`InputDomainError`] for the first element outside `0..=255`.
      pub fn try_process<I>(&mut self, values: I) -> Result<&mut Self, InputDomainError>
      where
        I: IntoIterator,
        I::Item: Into<i128>,
      {
        let mut st = self.state;
        for (offset, v) in values.into_iter().enumerate() {
          let v: i128 = v.into();
          let Ok(byte) = u8::try_from(v) else {
            return Err(InputDomainError::new(offset, v));
          };
          st = self.absorb(st, byte);
        }
        self.state = st;
        Ok(self)
      }

      /// The accumulator over all complete words seen so far.
      #[inline]
      #[must_use]
      pub const fn value(&self) -> u128 {
        self.state.acc
      }

      /// The reported checksum. Same as [`value`](Self::value); a trailing
      /// partial word is not included.
      #[inline]
      #[must_use]
      pub const fn finalize(&self) -> u128 {
        self.state.acc
      }

      /// The checksum encoded into `width / 8` bytes.
      #[inline]
      #[must_use]
      pub fn final_bytes(&self, order: ByteOrder) -> CheckBytes {
        CheckBytes::new(self.finalize(), self.word_bytes() as usize, order)
      }

      /// The checksum as lowercase hex of [`final_bytes`](Self::final_bytes).
      #[cfg(feature = "alloc")]
      #[inline]
      #[must_use]
      pub fn final_hex(&self, order: ByteOrder) -> alloc::string::String {
        self.final_bytes(order).to_hex()
      }

      /// One-shot checksum of `data` from `init`, leaving `self` untouched.
      #[must_use]
      pub fn calc(&self, data: &[u8]) -> u128 {
        let mut fresh = self.clone();
        fresh.reset().process(data).finalize()
      }

      /// Expected result over [`CHECKSUM_CHECK_DATA`] for this width and
      /// byte order, if this is a preset configuration with zero `init`.
      #[must_use]
      pub const fn check(&self) -> Option<u128> {
        if self.init != 0 {
          return None;
        }
        match (self.width, self.order) {
          $(
            ($cw, ByteOrder::Big) => Some($cbig),
            ($cw, ByteOrder::Little) => Some($clittle),
          )*
          _ => None,
        }
      }

      /// Verify [`calc`](Self::calc) over [`CHECKSUM_CHECK_DATA`] against
      /// [`check`](Self::check). Configurations without a check value pass.
      ///
      /// # Errors
      ///
      /// [`CheckMismatch`] if the computed value differs.
      pub fn self_test(&self) -> Result<(), CheckMismatch> {
        let Some(expected) = self.check() else {
          return Ok(());
        };
        let actual = self.calc(CHECKSUM_CHECK_DATA);
        if actual == expected { Ok(()) } else { Err(CheckMismatch::new(expected, actual)) }
      }
    }

    impl fmt::Debug for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(stringify!($name))
          .field("width", &self.width)
          .field("order", &self.order.as_str())
          .field("value", &self.state.acc)
          .finish_non_exhaustive()
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", $kind, self.width, self.order)
      }
    }

    impl Checksum for $name {
      type Output = u128;

      #[inline]
      fn width(&self) -> u32 {
        $name::width(self)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.process(data);
      }

      #[inline]
      fn value(&self) -> u128 {
        $name::value(self)
      }

      #[inline]
      fn finalize(&self) -> u128 {
        $name::finalize(self)
      }

      #[inline]
      fn reset(&mut self) {
        $name::reset(self);
      }

      #[inline]
      fn reset_to(&mut self, value: u128) {
        $name::reset_to(self, value);
      }
    }
  };
}

define_word_checksum! {
  /// Sum of `width`-bit words modulo `2^width`.
  pub struct SumChecksum {
    combine: add_word,
    kind: "Checksum",
    checks: [
      (8, 0x85, 0x85),
      (16, 0x0A7D, 0x8008),
      (32, 0x8903_817B, 0x7C81_0388),
    ],
  }
}

define_word_checksum! {
  /// XOR of `width`-bit words.
  pub struct XorChecksum {
    combine: xor_word,
    kind: "ChecksumXor",
    checks: [
      (8, 0x93, 0x93),
      (16, 0x089B, 0x9B08),
      (32, 0x74F8_7C63, 0x637C_F874),
    ],
  }
}

impl SumChecksum {
  /// 8-bit additive checksum.
  #[must_use]
  pub const fn sum8() -> Self {
    preset_sum(8)
  }

  /// 16-bit additive checksum over big-endian words.
  #[must_use]
  pub const fn sum16() -> Self {
    preset_sum(16)
  }

  /// 32-bit additive checksum over big-endian words.
  #[must_use]
  pub const fn sum32() -> Self {
    preset_sum(32)
  }
}

impl XorChecksum {
  /// 8-bit XOR checksum.
  #[must_use]
  pub const fn xor8() -> Self {
    preset_xor(8)
  }

  /// 16-bit XOR checksum over big-endian words.
  #[must_use]
  pub const fn xor16() -> Self {
    preset_xor(16)
  }

  /// 32-bit XOR checksum over big-endian words.
  #[must_use]
  pub const fn xor32() -> Self {
    preset_xor(32)
  }
}

const fn preset_sum(width: u32) -> SumChecksum {
  match SumChecksum::new(width) {
    Ok(c) => c,
    Err(_) => panic!("invalid checksum preset width"),
  }
}

const fn preset_xor(width: u32) -> XorChecksum {
  match XorChecksum::new(width) {
    Ok(c) => c,
    Err(_) => panic!("invalid checksum preset width"),
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString, vec::Vec};

  use super::*;

  #[test]
  fn sum8_deadbeef() {
    let mut sum = SumChecksum::sum8();
    sum.process(&[0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(sum.finalize(), (0xDE + 0xAD + 0xBE + 0xEF) % 256);
    assert_eq!(sum.finalize(), 0x38);
  }

  #[test]
  fn presets_pass_self_test_both_orders() {
    let sums = [SumChecksum::sum8(), SumChecksum::sum16(), SumChecksum::sum32()];
    let xors = [XorChecksum::xor8(), XorChecksum::xor16(), XorChecksum::xor32()];
    for order in [ByteOrder::Big, ByteOrder::Little] {
      for c in &sums {
        let c = c.clone().with_byte_order(order);
        assert!(c.check().is_some());
        c.self_test().unwrap();
      }
      for c in &xors {
        let c = c.clone().with_byte_order(order);
        assert!(c.check().is_some());
        c.self_test().unwrap();
      }
    }
  }

  #[test]
  fn known_check_values() {
    assert_eq!(SumChecksum::sum16().calc(CHECKSUM_CHECK_DATA), 0x0A7D);
    assert_eq!(SumChecksum::sum32().with_byte_order(ByteOrder::Little).calc(CHECKSUM_CHECK_DATA), 0x7C81_0388);
    assert_eq!(XorChecksum::xor32().calc(CHECKSUM_CHECK_DATA), 0x74F8_7C63);
    assert_eq!(XorChecksum::xor16().with_byte_order(ByteOrder::Little).calc(CHECKSUM_CHECK_DATA), 0x9B08);
  }

  #[test]
  fn rejects_bad_widths() {
    for width in [0u32, 4, 12, 136, 256] {
      assert_eq!(SumChecksum::new(width).unwrap_err(), ConfigError::InvalidWidth { width });
      assert_eq!(XorChecksum::new(width).unwrap_err(), ConfigError::InvalidWidth { width });
    }
    assert_eq!(SumChecksum::new(128).unwrap().width(), 128);
    assert_eq!(XorChecksum::new(24).unwrap().check(), None);
  }

  #[test]
  fn partial_words_carry_across_calls() {
    let data = CHECKSUM_CHECK_DATA;
    for split in 0..=data.len() {
      let mut c = SumChecksum::sum32();
      c.process(&data[..split]).process(&data[split..]);
      assert_eq!(c.finalize(), 0x8903_817B, "split {split}");
    }
  }

  #[test]
  fn trailing_partial_word_is_ignored() {
    let mut c = SumChecksum::sum16();
    c.process(&[0x01, 0x02, 0x03]);
    assert_eq!(c.finalize(), 0x0102);
    c.process(&[0x04]);
    assert_eq!(c.finalize(), 0x0102 + 0x0304);
  }

  #[test]
  fn sum_wraps_modulo_width() {
    let c = SumChecksum::sum16();
    assert_eq!(c.calc(&[0xFF, 0xFF, 0x00, 0x02]), 0x0001);
    let wide = SumChecksum::new(128).unwrap();
    let mut data = Vec::from([0xFFu8; 16]);
    data.extend_from_slice(&[0u8; 15]);
    data.push(0x01);
    assert_eq!(wide.calc(&data), 0);
  }

  #[test]
  fn init_and_reset() {
    let mut c = XorChecksum::xor8().with_init(0x1FF);
    assert_eq!(c.init(), 0xFF);
    assert_eq!(c.check(), None);
    c.process(&[0x0F]);
    assert_eq!(c.value(), 0xF0);
    c.reset();
    assert_eq!(c.value(), 0xFF);
    c.reset_to(0x1234);
    assert_eq!(c.value(), 0x34);
  }

  #[test]
  fn reset_drops_partial_word() {
    let mut c = SumChecksum::sum16();
    c.process(&[0xAA]);
    c.reset();
    c.process(&[0x00, 0x01]);
    assert_eq!(c.finalize(), 0x0001);
  }

  #[test]
  fn try_process_is_all_or_nothing() {
    let mut c = SumChecksum::sum16();
    c.process(&[0x01]);
    let err = c.try_process([0x02i32, 0x03, 0x04, 999]).unwrap_err();
    assert_eq!((err.offset(), err.value()), (3, 999));
    assert_eq!(c.value(), 0);
    c.try_process([0x02u16, 0x03, 0x04]).unwrap();
    assert_eq!(c.value(), 0x0102 + 0x0304);
  }

  #[test]
  fn process_bytes_matches_process() {
    let mut a = XorChecksum::xor32();
    a.process_bytes(CHECKSUM_CHECK_DATA.iter());
    assert_eq!(a.finalize(), XorChecksum::xor32().calc(CHECKSUM_CHECK_DATA));
  }

  #[test]
  fn byte_outputs() {
    let mut c = SumChecksum::sum16();
    c.process(CHECKSUM_CHECK_DATA);
    assert_eq!(c.final_bytes(ByteOrder::Big).as_slice(), &[0x0A, 0x7D]);
    assert_eq!(c.final_bytes(ByteOrder::Little).as_slice(), &[0x7D, 0x0A]);
    assert_eq!(c.final_hex(ByteOrder::Big), "0a7d");
  }

  #[test]
  fn display_and_debug() {
    assert_eq!(SumChecksum::sum32().to_string(), "Checksum32/big");
    assert_eq!(XorChecksum::xor16().with_byte_order(ByteOrder::Little).to_string(), "ChecksumXor16/little");
    let dbg = format!("{:?}", XorChecksum::xor8());
    assert!(dbg.starts_with("XorChecksum { width: 8"));
  }

  #[test]
  fn checksum_trait_surface() {
    fn run<C: Checksum>(mut c: C, data: &[u8]) -> C::Output {
      c.update(data);
      c.finalize()
    }
    assert_eq!(run(SumChecksum::sum8(), CHECKSUM_CHECK_DATA), 0x85);
    assert_eq!(Checksum::output_len(&XorChecksum::xor32()), 4);
  }
}
