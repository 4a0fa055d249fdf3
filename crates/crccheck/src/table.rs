//! Precomputed lookup table bound to a parameter set.

use core::fmt;

use crate::{Crc, CrcParams, common::tables::generate_table};

/// A parameter set together with its 256-entry lookup table.
///
/// Engines created with [`crc`](Self::crc) run the table kernel: one lookup
/// per byte instead of eight shift/XOR steps. Results are identical to the
/// bitwise engine for every input.
///
/// The table is built in `const fn`, so a table for a fixed preset can live
/// in a `static`:
///
/// ```rust
/// use crccheck::{CrcParams, CrcTable};
///
/// static CRC32: CrcTable = CrcTable::new(CrcParams::CRC32_ISO_HDLC);
///
/// let mut crc = CRC32.crc();
/// crc.process(b"1234").process(b"56789");
/// assert_eq!(crc.finalize(), 0xCBF4_3926);
/// ```
#[derive(Clone)]
pub struct CrcTable {
  params: CrcParams,
  entries: [u128; 256],
}

impl CrcTable {
  /// Build the lookup table for `params`.
  #[must_use]
  pub const fn new(params: CrcParams) -> Self {
    Self { entries: generate_table(params.polynomial_aligned()), params }
  }

  /// The parameter set this table was built for.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// A fresh table-driven engine (register = `init`).
  #[inline]
  #[must_use]
  pub const fn crc(&self) -> Crc<'_> {
    Crc::with_table(self)
  }

  /// One-shot CRC of `data` through this table.
  #[inline]
  #[must_use]
  pub fn calc(&self, data: &[u8]) -> u128 {
    self.crc().process(data).finalize()
  }

  #[inline]
  pub(crate) const fn entries(&self) -> &[u128; 256] {
    &self.entries
  }
}

impl fmt::Debug for CrcTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcTable").field("params", &self.params).finish_non_exhaustive()
  }
}
