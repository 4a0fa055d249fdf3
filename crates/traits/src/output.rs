//! Output encodings for check values.

use core::{fmt, str::FromStr};

use crate::ConfigError;

/// Byte order (endianness) used to encode a check value or to assemble input words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
  /// Most significant byte first.
  #[default]
  Big,
  /// Least significant byte first.
  Little,
}

impl ByteOrder {
  /// The canonical token (`"big"` or `"little"`).
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Big => "big",
      Self::Little => "little",
    }
  }
}

impl FromStr for ByteOrder {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "big" => Ok(Self::Big),
      "little" => Ok(Self::Little),
      _ => Err(ConfigError::UnknownByteOrder),
    }
  }
}

impl fmt::Display for ByteOrder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Maximum encoded length: a 128-bit register.
const MAX_LEN: usize = 16;

/// A check value encoded into `ceil(width / 8)` bytes.
///
/// Fixed capacity, no allocation. Dereferences to the encoded bytes and
/// formats as hex through [`LowerHex`](fmt::LowerHex) / [`UpperHex`](fmt::UpperHex).
///
/// ```rust
/// use traits::{ByteOrder, CheckBytes};
///
/// let be = CheckBytes::new(0xCBF4_3926, 4, ByteOrder::Big);
/// assert_eq!(be.as_slice(), &[0xCB, 0xF4, 0x39, 0x26]);
/// assert_eq!(format!("{be:x}"), "cbf43926");
///
/// let le = CheckBytes::new(0xCBF4_3926, 4, ByteOrder::Little);
/// assert_eq!(le.as_slice(), &[0x26, 0x39, 0xF4, 0xCB]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckBytes {
  buf: [u8; MAX_LEN],
  len: usize,
}

impl CheckBytes {
  /// Encode the low `len` bytes of `value` (`len` is capped at 16).
  #[must_use]
  pub fn new(value: u128, len: usize, order: ByteOrder) -> Self {
    let len = len.min(MAX_LEN);
    let mut buf = [0u8; MAX_LEN];
    match order {
      ByteOrder::Big => {
        let be = value.to_be_bytes();
        let skip = MAX_LEN - len;
        for (dst, src) in buf.iter_mut().zip(be.iter().skip(skip)) {
          *dst = *src;
        }
      }
      ByteOrder::Little => {
        let le = value.to_le_bytes();
        for (dst, src) in buf.iter_mut().zip(le.iter()).take(len) {
          *dst = *src;
        }
      }
    }
    Self { buf, len }
  }

  /// The encoded bytes.
  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[u8] {
    self.buf.get(..self.len).unwrap_or(&[])
  }

  /// Number of encoded bytes.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// True for a zero-length encoding.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Decode back to an integer, reading the bytes in `order`.
  #[must_use]
  pub fn to_value(&self, order: ByteOrder) -> u128 {
    let bytes = self.as_slice();
    match order {
      ByteOrder::Big => bytes.iter().fold(0u128, |acc, &b| (acc << 8) | u128::from(b)),
      ByteOrder::Little => bytes.iter().rev().fold(0u128, |acc, &b| (acc << 8) | u128::from(b)),
    }
  }

  /// Lowercase hex rendering, no prefix, no separators.
  #[cfg(feature = "alloc")]
  #[must_use]
  pub fn to_hex(&self) -> alloc::string::String {
    alloc::format!("{self:x}")
  }
}

impl core::ops::Deref for CheckBytes {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.as_slice()
  }
}

impl AsRef<[u8]> for CheckBytes {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_slice()
  }
}

impl fmt::Debug for CheckBytes {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("CheckBytes").field(&self.as_slice()).finish()
  }
}

impl fmt::LowerHex for CheckBytes {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.as_slice() {
      write!(f, "{b:02x}")?;
    }
    Ok(())
  }
}

impl fmt::UpperHex for CheckBytes {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.as_slice() {
      write!(f, "{b:02X}")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::*;

  #[test]
  fn byte_order_parse() {
    assert_eq!("big".parse::<ByteOrder>(), Ok(ByteOrder::Big));
    assert_eq!("little".parse::<ByteOrder>(), Ok(ByteOrder::Little));
    assert_eq!("BIG".parse::<ByteOrder>(), Err(ConfigError::UnknownByteOrder));
    assert_eq!("middle".parse::<ByteOrder>(), Err(ConfigError::UnknownByteOrder));
    assert_eq!("".parse::<ByteOrder>(), Err(ConfigError::UnknownByteOrder));
  }

  #[test]
  fn byte_order_default_is_big() {
    assert_eq!(ByteOrder::default(), ByteOrder::Big);
    assert_eq!(format!("{}", ByteOrder::Little), "little");
  }

  #[test]
  fn encodes_odd_widths() {
    // 21-bit value -> 3 bytes.
    let v = 0x0E_D841;
    assert_eq!(CheckBytes::new(v, 3, ByteOrder::Big).as_slice(), &[0x0E, 0xD8, 0x41]);
    assert_eq!(CheckBytes::new(v, 3, ByteOrder::Little).as_slice(), &[0x41, 0xD8, 0x0E]);
  }

  #[test]
  fn encodes_82_bit_value() {
    let v: u128 = 0x09_EA83_F625_0238_01FD_612;
    let be = CheckBytes::new(v, 11, ByteOrder::Big);
    assert_eq!(be.len(), 11);
    assert_eq!(be.to_value(ByteOrder::Big), v);
    assert_eq!(format!("{be:x}"), "009ea83f625023801fd612");
    let le = CheckBytes::new(v, 11, ByteOrder::Little);
    assert_eq!(le.to_value(ByteOrder::Little), v);
  }

  #[test]
  fn hex_is_zero_padded() {
    let b = CheckBytes::new(0x0001, 2, ByteOrder::Big);
    assert_eq!(format!("{b:x}"), "0001");
    assert_eq!(format!("{b:X}"), "0001");
    let b = CheckBytes::new(0xABCD, 2, ByteOrder::Little);
    assert_eq!(format!("{b:X}"), "CDAB");
  }

  #[test]
  fn full_width_round_trip() {
    let v = u128::MAX - 12345;
    for order in [ByteOrder::Big, ByteOrder::Little] {
      let b = CheckBytes::new(v, 16, order);
      assert_eq!(b.to_value(order), v);
    }
  }

  #[test]
  fn length_is_capped() {
    let b = CheckBytes::new(1, 40, ByteOrder::Big);
    assert_eq!(b.len(), 16);
    assert!(!b.is_empty());
    assert!(CheckBytes::new(1, 0, ByteOrder::Big).is_empty());
  }
}
