//! CRC algorithm parameters.
//!
//! This module defines the parameters for CRC algorithms following the
//! conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)
//! (the Rocksoft model).

use traits::{CheckMismatch, ConfigError};

use crate::common::{reference::align_shift, reflect::reflect_bits};

/// Widest supported register.
pub const MAX_WIDTH: u32 = 128;

/// The standard check input: the nine ASCII bytes `"123456789"`.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// CRC algorithm parameters.
///
/// This struct captures all the parameters needed to define a CRC algorithm.
/// It is an immutable value: every engine borrows it read-only, so one
/// parameter set can back any number of engines on any number of threads.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC register (1..=128)
/// - `polynomial`: The generator polynomial (without the implicit high bit)
/// - `init`: Initial value for the CRC register
/// - `reflect_in`: If true, process each input byte least significant bit first
/// - `reflect_out`: If true, reflect the final register before the XOR
/// - `xor_out`: Value to XOR with the final register
/// - `check`: Expected CRC of [`CHECK_INPUT`], used only by [`self_test`](Self::self_test)
///
/// All of `polynomial`, `init`, `xor_out` and `check` are below `2^width`;
/// construction rejects anything else.
///
/// # Example
///
/// ```rust
/// use crccheck::CrcParams;
///
/// let params = CrcParams::new(16, 0x1021, 0xFFFF, 0x0000)?
///   .with_reflection(false)
///   .with_check(0x29B1)?;
/// assert!(params.self_test().is_ok());
/// # Ok::<(), crccheck::ConfigError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  width: u8,
  polynomial: u128,
  init: u128,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u128,
  check: Option<u128>,
}

/// Mask of the low `width` bits (`width` in 1..=128).
#[inline]
const fn width_mask(width: u32) -> u128 {
  u128::MAX >> (MAX_WIDTH - width)
}

impl CrcParams {
  /// Create a parameter set with both reflection flags off and no check value.
  ///
  /// # Errors
  ///
  /// - [`ConfigError::InvalidWidth`] if `width` is 0 or above 128
  /// - [`ConfigError::PolynomialOutOfRange`], [`ConfigError::InitOutOfRange`],
  ///   [`ConfigError::XorOutOutOfRange`] if a value does not fit in `width` bits
  pub const fn new(width: u32, polynomial: u128, init: u128, xor_out: u128) -> Result<Self, ConfigError> {
    if width == 0 || width > MAX_WIDTH {
      return Err(ConfigError::InvalidWidth { width });
    }
    let mask = width_mask(width);
    if polynomial & !mask != 0 {
      return Err(ConfigError::PolynomialOutOfRange);
    }
    if init & !mask != 0 {
      return Err(ConfigError::InitOutOfRange);
    }
    if xor_out & !mask != 0 {
      return Err(ConfigError::XorOutOutOfRange);
    }
    Ok(Self {
      width: width as u8,
      polynomial,
      init,
      reflect_in: false,
      reflect_out: false,
      xor_out,
      check: None,
    })
  }

  /// Build a catalogue preset at compile time.
  ///
  /// # Panics
  ///
  /// Panics (a compile error in const context) on any value that
  /// [`new`](Self::new) or [`with_check`](Self::with_check) would reject.
  #[must_use]
  pub const fn preset(
    width: u32,
    polynomial: u128,
    init: u128,
    reflect_in: bool,
    reflect_out: bool,
    xor_out: u128,
    check: u128,
  ) -> Self {
    let Ok(params) = Self::new(width, polynomial, init, xor_out) else {
      panic!("invalid CRC preset parameters");
    };
    let Ok(params) = params.with_reflect_in(reflect_in).with_reflect_out(reflect_out).with_check(check) else {
      panic!("CRC preset check value exceeds width");
    };
    params
  }

  /// Set input reflection.
  #[inline]
  #[must_use]
  pub const fn with_reflect_in(mut self, reflect_in: bool) -> Self {
    self.reflect_in = reflect_in;
    self
  }

  /// Set output reflection.
  #[inline]
  #[must_use]
  pub const fn with_reflect_out(mut self, reflect_out: bool) -> Self {
    self.reflect_out = reflect_out;
    self
  }

  /// Set input and output reflection together (the common case).
  #[inline]
  #[must_use]
  pub const fn with_reflection(self, reflect: bool) -> Self {
    self.with_reflect_in(reflect).with_reflect_out(reflect)
  }

  /// Record the expected CRC of [`CHECK_INPUT`].
  ///
  /// # Errors
  ///
  /// [`ConfigError::CheckOutOfRange`] if `check` does not fit in `width` bits.
  pub const fn with_check(mut self, check: u128) -> Result<Self, ConfigError> {
    if check & !self.mask() != 0 {
      return Err(ConfigError::CheckOutOfRange);
    }
    self.check = Some(check);
    Ok(self)
  }

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width as u32
  }

  /// Generator polynomial (without the implicit high bit).
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u128 {
    self.polynomial
  }

  /// Initial register value.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> u128 {
    self.init
  }

  /// Whether input bytes are processed least significant bit first.
  #[inline]
  #[must_use]
  pub const fn reflect_in(&self) -> bool {
    self.reflect_in
  }

  /// Whether the final register is bit-reversed before the XOR.
  #[inline]
  #[must_use]
  pub const fn reflect_out(&self) -> bool {
    self.reflect_out
  }

  /// Final XOR value.
  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> u128 {
    self.xor_out
  }

  /// Expected CRC of [`CHECK_INPUT`], if recorded.
  #[inline]
  #[must_use]
  pub const fn check(&self) -> Option<u128> {
    self.check
  }

  /// Mask of the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u128 {
    width_mask(self.width())
  }

  /// Number of bytes needed to encode a CRC value (`ceil(width / 8)`).
  #[inline]
  #[must_use]
  pub const fn output_len(&self) -> usize {
    (self.width as usize).div_ceil(8)
  }

  /// Returns the reflected polynomial (bit-reversed within `width` bits).
  ///
  /// This is the form LSB-first implementations shift with.
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u128 {
    reflect_bits(self.polynomial, self.width())
  }

  /// Shift between the right-aligned and the register-aligned forms.
  #[inline]
  pub(crate) const fn shift(&self) -> u32 {
    align_shift(self.width())
  }

  /// Polynomial aligned to the top of the `u128` register.
  #[inline]
  pub(crate) const fn polynomial_aligned(&self) -> u128 {
    self.polynomial << self.shift()
  }

  /// Initial value aligned to the top of the `u128` register.
  #[inline]
  pub(crate) const fn init_aligned(&self) -> u128 {
    self.init << self.shift()
  }

  /// Compute the CRC of [`CHECK_INPUT`] and compare it with [`check`](Self::check).
  ///
  /// Succeeds trivially when no check value is recorded.
  ///
  /// # Errors
  ///
  /// [`CheckMismatch`] carrying the expected and computed values.
  pub fn self_test(&self) -> Result<(), CheckMismatch> {
    let Some(expected) = self.check else {
      return Ok(());
    };
    let actual = crate::Crc::calc(self, CHECK_INPUT);
    if actual == expected { Ok(()) } else { Err(CheckMismatch::new(expected, actual)) }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Frequently used presets
// ─────────────────────────────────────────────────────────────────────────────

impl CrcParams {
  /// CRC-8 (CRC-8/SMBUS) - SMBus packet error code
  pub const CRC8: Self = Self::preset(8, 0x07, 0x00, false, false, 0x00, 0xF4);

  /// CRC-8/MAXIM - 1-Wire, iButton
  pub const CRC8_MAXIM: Self = Self::preset(8, 0x31, 0x00, true, true, 0x00, 0xA1);

  /// ARC (CRC-16/ARC, CRC-16/IBM) - LHA, legacy protocols
  pub const CRC16_ARC: Self = Self::preset(16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D);

  /// CRC-16/KERMIT (listed as CRC-16/CCITT) - Kermit, Bluetooth
  pub const CRC16_KERMIT: Self = Self::preset(16, 0x1021, 0x0000, true, true, 0x0000, 0x2189);

  /// MODBUS
  pub const CRC16_MODBUS: Self = Self::preset(16, 0x8005, 0xFFFF, true, true, 0x0000, 0x4B37);

  /// XMODEM - also the parameters behind the plain `CRC-16` name
  pub const CRC16_XMODEM: Self = Self::preset(16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3);

  /// CRC-16/IBM-3740 (CCITT-FALSE) - floppy disks, many embedded protocols
  pub const CRC16_IBM_3740: Self = Self::preset(16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1);

  /// CRC-16/IBM-SDLC (X-25) - HDLC, X.25
  pub const CRC16_IBM_SDLC: Self = Self::preset(16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E);

  /// CRC-24/OPENPGP - OpenPGP (RFC 4880)
  pub const CRC24_OPENPGP: Self = Self::preset(24, 0x86_4CFB, 0xB7_04CE, false, false, 0x00_0000, 0x21_CF02);

  /// CRC-32/ISO-HDLC - Ethernet, gzip, PNG, zip
  pub const CRC32_ISO_HDLC: Self =
    Self::preset(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xCBF4_3926);

  /// CRC-32/ISCSI (CRC-32C, Castagnoli) - iSCSI, SCTP, ext4, Btrfs
  pub const CRC32_ISCSI: Self = Self::preset(32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xE306_9283);

  /// CRC-32/BZIP2 - bzip2, AAL5
  pub const CRC32_BZIP2: Self = Self::preset(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, 0xFC89_1918);

  /// CRC-32/MPEG-2 - MPEG transport streams
  pub const CRC32_MPEG2: Self = Self::preset(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0x0000_0000, 0x0376_E6E7);

  /// CRC-64/XZ - XZ Utils, 7-Zip
  pub const CRC64_XZ: Self = Self::preset(
    64,
    0x42F0_E1EB_A9EA_3693,
    0xFFFF_FFFF_FFFF_FFFF,
    true,
    true,
    0xFFFF_FFFF_FFFF_FFFF,
    0x995D_C9BB_DF19_39FA,
  );

  /// CRC-64/ECMA-182 - also the parameters behind the plain `CRC-64` name
  pub const CRC64_ECMA_182: Self = Self::preset(64, 0x42F0_E1EB_A9EA_3693, 0, false, false, 0, 0x6C40_DF5F_0B49_7347);

  /// CRC-82/DARC - Data Radio Channel; wider than any native integer but `u128`
  pub const CRC82_DARC: Self =
    Self::preset(82, 0x308C_0111_0114_0144_0411, 0, true, true, 0, 0x9EA8_3F62_5023_801F_D612);
}
