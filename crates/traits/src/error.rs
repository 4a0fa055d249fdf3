//! Error types shared by every crccheck accumulator.
//!
//! All errors are small `Copy` values so they can be returned from `no_std`
//! code and from `const` contexts without allocation.

use core::fmt;

/// Malformed accumulator configuration.
///
/// Returned when a parameter set or a checksum width is rejected at
/// construction time, or when a byte order token is not recognised.
///
/// # Examples
///
/// ```
/// use traits::{ByteOrder, ConfigError};
///
/// let err = "middle".parse::<ByteOrder>().unwrap_err();
/// assert_eq!(err, ConfigError::UnknownByteOrder);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigError {
  /// Width outside the supported range (or not a multiple of 8 where required).
  InvalidWidth {
    /// The rejected width in bits.
    width: u32,
  },
  /// Polynomial does not fit in `width` bits.
  PolynomialOutOfRange,
  /// Initial value does not fit in `width` bits.
  InitOutOfRange,
  /// Final XOR value does not fit in `width` bits.
  XorOutOutOfRange,
  /// Expected check value does not fit in `width` bits.
  CheckOutOfRange,
  /// Byte order token was neither `"big"` nor `"little"`.
  UnknownByteOrder,
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidWidth { width } => write!(f, "unsupported width: {width} bits"),
      Self::PolynomialOutOfRange => f.write_str("polynomial exceeds the register width"),
      Self::InitOutOfRange => f.write_str("initial value exceeds the register width"),
      Self::XorOutOutOfRange => f.write_str("final XOR value exceeds the register width"),
      Self::CheckOutOfRange => f.write_str("check value exceeds the register width"),
      Self::UnknownByteOrder => f.write_str("byte order must be \"big\" or \"little\""),
    }
  }
}

impl core::error::Error for ConfigError {}

/// An input element outside the byte range `0..=255`.
///
/// Carries the position of the first offending element and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputDomainError {
  offset: usize,
  value: i128,
}

impl InputDomainError {
  /// Create a new input domain error.
  #[inline]
  #[must_use]
  pub const fn new(offset: usize, value: i128) -> Self {
    Self { offset, value }
  }

  /// Index of the first out-of-range element.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> usize {
    self.offset
  }

  /// The out-of-range element.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> i128 {
    self.value
  }
}

impl fmt::Display for InputDomainError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "input value {} at offset {} is not a byte (0..=255)", self.value, self.offset)
  }
}

impl core::error::Error for InputDomainError {}

/// A self-test computed a check value different from the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckMismatch {
  expected: u128,
  actual: u128,
}

impl CheckMismatch {
  /// Create a new mismatch report.
  #[inline]
  #[must_use]
  pub const fn new(expected: u128, actual: u128) -> Self {
    Self { expected, actual }
  }

  /// The value the self-test expected.
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> u128 {
    self.expected
  }

  /// The value the computation produced.
  #[inline]
  #[must_use]
  pub const fn actual(&self) -> u128 {
    self.actual
  }
}

impl fmt::Display for CheckMismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "check value mismatch: expected {:#x}, got {:#x}", self.expected, self.actual)
  }
}

impl core::error::Error for CheckMismatch {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn config_display_messages() {
    assert_eq!(ConfigError::InvalidWidth { width: 0 }.to_string(), "unsupported width: 0 bits");
    assert_eq!(ConfigError::PolynomialOutOfRange.to_string(), "polynomial exceeds the register width");
    assert_eq!(ConfigError::InitOutOfRange.to_string(), "initial value exceeds the register width");
    assert_eq!(ConfigError::XorOutOutOfRange.to_string(), "final XOR value exceeds the register width");
    assert_eq!(ConfigError::CheckOutOfRange.to_string(), "check value exceeds the register width");
    assert_eq!(ConfigError::UnknownByteOrder.to_string(), "byte order must be \"big\" or \"little\"");
  }

  #[test]
  fn config_debug_names_variant() {
    let dbg = format!("{:?}", ConfigError::InvalidWidth { width: 129 });
    assert_eq!(dbg, "InvalidWidth { width: 129 }");
  }

  #[test]
  fn input_domain_accessors() {
    let e = InputDomainError::new(3, 256);
    assert_eq!(e.offset(), 3);
    assert_eq!(e.value(), 256);
    assert_eq!(e.to_string(), "input value 256 at offset 3 is not a byte (0..=255)");

    let neg = InputDomainError::new(0, -1);
    assert_eq!(neg.to_string(), "input value -1 at offset 0 is not a byte (0..=255)");
  }

  #[test]
  fn check_mismatch_accessors() {
    let e = CheckMismatch::new(0xCBF4_3926, 0x1234);
    assert_eq!(e.expected(), 0xCBF4_3926);
    assert_eq!(e.actual(), 0x1234);
    assert_eq!(e.to_string(), "check value mismatch: expected 0xcbf43926, got 0x1234");
  }

  #[test]
  fn errors_are_copy_and_eq() {
    let a = CheckMismatch::new(1, 2);
    let b = a;
    assert_eq!(a, b);
    assert_ne!(a, CheckMismatch::new(2, 1));
    assert_ne!(ConfigError::InitOutOfRange, ConfigError::XorOutOutOfRange);
  }

  #[test]
  fn usable_as_dyn_error() {
    fn as_dyn(e: &dyn core::error::Error) -> alloc::string::String {
      e.to_string()
    }
    assert_eq!(as_dyn(&ConfigError::UnknownByteOrder), ConfigError::UnknownByteOrder.to_string());
    assert_eq!(as_dyn(&InputDomainError::new(1, 300)), "input value 300 at offset 1 is not a byte (0..=255)");
  }
}
