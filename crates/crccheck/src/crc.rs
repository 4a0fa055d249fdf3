//! The generic CRC engine.
//!
//! One engine type covers every parameter set; the preset catalogue is plain
//! data. An engine borrows its [`CrcParams`] (or a [`CrcTable`]) and owns only
//! the register, so any number of engines can share one parameter set.
//!
//! # Lifecycle
//!
//! ```text
//! new ──► process* ──► finalize (read-only view, may be repeated)
//!  ▲          │  ▲            │
//!  └─ reset ◄─┘  └────────────┘  (processing may continue after finalize)
//! ```
//!
//! # Example
//!
//! ```rust
//! use crccheck::{ByteOrder, Crc, CrcParams};
//!
//! let params = CrcParams::CRC32_ISO_HDLC;
//!
//! // Streaming
//! let mut crc = Crc::new(&params);
//! crc.process(b"1234").process(b"56789");
//! assert_eq!(crc.finalize(), 0xCBF4_3926);
//!
//! // One-shot
//! assert_eq!(Crc::calc(&params, b"123456789"), 0xCBF4_3926);
//! assert_eq!(Crc::calc_bytes(&params, b"123456789", ByteOrder::Little).as_slice(), &[0x26, 0x39, 0xF4, 0xCB]);
//! ```

use core::{borrow::Borrow, fmt};

use traits::{ByteOrder, CheckBytes, CheckMismatch, Checksum, InputDomainError};

use crate::{
  CrcParams, CrcTable,
  common::{
    reference::{bitwise_byte, bitwise_update},
    reflect::reflect_fast,
    tables::{table_byte, table_update},
  },
  config::{self, CrcKernel},
};

#[derive(Clone, Copy)]
enum Kernel<'p> {
  Bitwise,
  Table(&'p [u128; 256]),
}

/// Stateful CRC accumulator bound to a parameter set.
///
/// The register is stored aligned to the top of a `u128`; [`value`](Self::value)
/// and [`reset_to`](Self::reset_to) speak the usual right-aligned form.
#[derive(Clone)]
pub struct Crc<'p> {
  params: &'p CrcParams,
  kernel: Kernel<'p>,
  register: u128,
}

impl<'p> Crc<'p> {
  /// A bitwise engine with `register = init`.
  #[inline]
  #[must_use]
  pub const fn new(params: &'p CrcParams) -> Self {
    Self { params, kernel: Kernel::Bitwise, register: params.init_aligned() }
  }

  /// A table-driven engine with `register = init`.
  #[inline]
  #[must_use]
  pub const fn with_table(table: &'p CrcTable) -> Self {
    let params = table.params();
    Self { params, kernel: Kernel::Table(table.entries()), register: params.init_aligned() }
  }

  /// The parameter set this engine is bound to.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &'p CrcParams {
    self.params
  }

  /// The kernel this engine runs on.
  #[inline]
  #[must_use]
  pub const fn kernel(&self) -> CrcKernel {
    match self.kernel {
      Kernel::Bitwise => CrcKernel::Bitwise,
      Kernel::Table(_) => CrcKernel::Table,
    }
  }

  /// Restore `register = init`.
  #[inline]
  pub fn reset(&mut self) -> &mut Self {
    self.register = self.params.init_aligned();
    self
  }

  /// Load an explicit register value (resume from [`value`](Self::value)).
  ///
  /// Bits above `width` are discarded.
  #[inline]
  pub fn reset_to(&mut self, value: u128) -> &mut Self {
    self.register = (value & self.params.mask()) << self.params.shift();
    self
  }

  #[inline]
  fn feed_byte(&self, reg: u128, byte: u8) -> u128 {
    let reflect_in = self.params.reflect_in();
    match self.kernel {
      Kernel::Bitwise => bitwise_byte(reg, self.params.polynomial_aligned(), reflect_in, byte),
      Kernel::Table(table) => table_byte(table, reg, reflect_in, byte),
    }
  }

  /// Consume `data`.
  ///
  /// Any chunking of the same byte sequence yields the same register.
  #[inline]
  pub fn process(&mut self, data: &[u8]) -> &mut Self {
    let reflect_in = self.params.reflect_in();
    self.register = match self.kernel {
      Kernel::Bitwise => bitwise_update(self.register, self.params.polynomial_aligned(), reflect_in, data),
      Kernel::Table(table) => table_update(table, self.register, reflect_in, data),
    };
    self
  }

  /// Consume bytes from any iterator (`u8` or `&u8` items).
  ///
  /// Accepts filtered or derived sequences without collecting them first.
  ///
  /// ```rust
  /// use crccheck::{Crc, CrcParams};
  ///
  /// let data = b"1x2x3x4x5x6x7x8x9x";
  /// let mut crc = Crc::new(&CrcParams::CRC16_XMODEM);
  /// crc.process_bytes(data.iter().step_by(2));
  /// assert_eq!(crc.finalize(), 0x31C3);
  /// ```
  pub fn process_bytes<I>(&mut self, bytes: I) -> &mut Self
  where
    I: IntoIterator,
    I::Item: Borrow<u8>,
  {
    let mut reg = self.register;
    for b in bytes {
      reg = self.feed_byte(reg, *b.borrow());
    }
    self.register = reg;
    self
  }

  /// Consume integer values that must each lie in `0..=255`.
  ///
  /// Validation is eager: if any value is out of range the register is left
  /// exactly as it was, and the error names the first offending value.
  ///
  /// # Errors
  ///
  /// [`InputDomainError`] with the offset and value of the first element
  /// outside `0..=255`.
  ///
  /// ```rust
  /// use crccheck::{Crc, CrcParams};
  ///
  /// let mut crc = Crc::new(&CrcParams::CRC8);
  /// let err = crc.try_process([0x31, 0x32, 256, 0x33]).unwrap_err();
  /// assert_eq!((err.offset(), err.value()), (2, 256));
  /// assert_eq!(crc.value(), 0x00);
  /// ```
  pub fn try_process<I>(&mut self, values: I) -> Result<&mut Self, InputDomainError>
  where
    I: IntoIterator,
    I::Item: Into<i128>,
  {
    let mut reg = self.register;
    for (offset, v) in values.into_iter().enumerate() {
      let v: i128 = v.into();
      let Ok(byte) = u8::try_from(v) else {
        return Err(InputDomainError::new(offset, v));
      };
      reg = self.feed_byte(reg, byte);
    }
    self.register = reg;
    Ok(self)
  }

  /// The raw register, right-aligned, before output reflection and XOR.
  ///
  /// Intended for checkpointing through [`reset_to`](Self::reset_to).
  #[inline]
  #[must_use]
  pub const fn value(&self) -> u128 {
    self.register >> self.params.shift()
  }

  /// The reported CRC: optional output reflection, then `xor_out`.
  ///
  /// Does not modify the register.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u128 {
    let reg = self.value();
    let reg = if self.params.reflect_out() { reflect_fast(reg, self.params.width()) } else { reg };
    reg ^ self.params.xor_out()
  }

  /// The reported CRC encoded into `ceil(width / 8)` bytes.
  #[inline]
  #[must_use]
  pub fn final_bytes(&self, order: ByteOrder) -> CheckBytes {
    CheckBytes::new(self.finalize(), self.params.output_len(), order)
  }

  /// The reported CRC as lowercase hex of [`final_bytes`](Self::final_bytes).
  #[cfg(feature = "alloc")]
  #[inline]
  #[must_use]
  pub fn final_hex(&self, order: ByteOrder) -> alloc::string::String {
    self.final_bytes(order).to_hex()
  }

  /// Run the parameter set's self-test.
  ///
  /// # Errors
  ///
  /// See [`CrcParams::self_test`].
  #[inline]
  pub fn self_test(&self) -> Result<(), CheckMismatch> {
    self.params.self_test()
  }

  // ───────────────────────────────────────────────────────────────────────────
  // One-shot
  // ───────────────────────────────────────────────────────────────────────────

  /// One-shot CRC of `data` under `params`.
  ///
  /// Picks the kernel from [`config::kernel_for_len`]; the result does not
  /// depend on that choice.
  #[must_use]
  pub fn calc(params: &CrcParams, data: &[u8]) -> u128 {
    match config::kernel_for_len(data.len()) {
      CrcKernel::Bitwise => Crc::new(params).process(data).finalize(),
      CrcKernel::Table => CrcTable::new(*params).calc(data),
    }
  }

  /// One-shot CRC of `data`, encoded in `order`.
  #[must_use]
  pub fn calc_bytes(params: &CrcParams, data: &[u8], order: ByteOrder) -> CheckBytes {
    CheckBytes::new(Self::calc(params, data), params.output_len(), order)
  }

  /// One-shot CRC of `data` as lowercase hex.
  #[cfg(feature = "alloc")]
  #[must_use]
  pub fn calc_hex(params: &CrcParams, data: &[u8], order: ByteOrder) -> alloc::string::String {
    Self::calc_bytes(params, data, order).to_hex()
  }
}

impl fmt::Debug for Crc<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("params", self.params)
      .field("kernel", &self.kernel().name())
      .field("value", &self.value())
      .finish()
  }
}

impl Checksum for Crc<'_> {
  type Output = u128;

  #[inline]
  fn width(&self) -> u32 {
    self.params.width()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.process(data);
  }

  #[inline]
  fn value(&self) -> u128 {
    Crc::value(self)
  }

  #[inline]
  fn finalize(&self) -> u128 {
    Crc::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc::reset(self);
  }

  #[inline]
  fn reset_to(&mut self, value: u128) {
    Crc::reset_to(self, value);
  }
}
