//! CRC runtime configuration (overrides + thresholds).
//!
//! This module centralizes the kernel selection knob used by the one-shot
//! `calc` family:
//! - bitwise vs table threshold
//! - optional forced kernel selection
//!
//! Streaming engines never consult it; their kernel is fixed at construction
//! ([`Crc::new`](crate::Crc::new) is bitwise, [`CrcTable::crc`](crate::CrcTable::crc)
//! is table-driven).
//!
//! # Environment
//!
//! Read once per process (`std` only):
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRCCHECK_CRC_FORCE` | `auto`, `bitwise` / `reference`, `table` / `portable` |
//! | `CRCCHECK_CRC_TABLE_THRESHOLD` | bytes at which `calc` switches to a table |

/// Default input length at which building a table pays off.
///
/// Building a table costs 2048 bit steps, the same as hashing 256 bytes
/// bitwise; the table kernel is roughly 8x cheaper per byte afterwards.
pub const DEFAULT_TABLE_THRESHOLD: usize = 512;

/// Forced kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrcForce {
  /// Use the default auto selector.
  #[default]
  Auto,
  /// Force the bitwise reference kernel.
  Bitwise,
  /// Force the table kernel, even for tiny inputs.
  Table,
}

impl CrcForce {
  /// Stable lowercase name.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bitwise => "bitwise",
      Self::Table => "table",
    }
  }
}

/// The kernel a computation runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CrcKernel {
  /// One bit per step, no tables.
  Bitwise,
  /// One 256-entry table lookup per byte.
  Table,
}

impl CrcKernel {
  /// Stable kernel name for diagnostics and benchmarks.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Bitwise => "reference/bitwise",
      Self::Table => "portable/table",
    }
  }
}

/// CRC selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcTunables {
  /// Input length (bytes) from which `calc` builds a table first.
  pub table_threshold: usize,
}

impl Default for CrcTunables {
  fn default() -> Self {
    Self { table_threshold: DEFAULT_TABLE_THRESHOLD }
  }
}

/// Full CRC runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CrcConfig {
  /// Requested force mode (env/programmatic).
  pub force: CrcForce,
  /// Thresholds used by the auto selector.
  pub tunables: CrcTunables,
}

impl CrcConfig {
  /// The kernel the one-shot `calc` family uses for an input of `len` bytes.
  #[inline]
  #[must_use]
  pub const fn kernel_for_len(&self, len: usize) -> CrcKernel {
    match self.force {
      CrcForce::Bitwise => CrcKernel::Bitwise,
      CrcForce::Table => CrcKernel::Table,
      CrcForce::Auto => {
        if len < self.tunables.table_threshold {
          CrcKernel::Bitwise
        } else {
          CrcKernel::Table
        }
      }
    }
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: CrcForce,
  table_threshold: Option<usize>,
}

/// Parse a force token (`None` for unknown tokens).
fn parse_force(value: &str) -> Option<CrcForce> {
  let value = value.trim();
  if value.eq_ignore_ascii_case("auto") {
    return Some(CrcForce::Auto);
  }
  if value.eq_ignore_ascii_case("bitwise") || value.eq_ignore_ascii_case("reference") {
    return Some(CrcForce::Bitwise);
  }
  if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("portable") {
    return Some(CrcForce::Table);
  }
  None
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn parse_usize(name: &str) -> Option<usize> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
      return None;
    }
    value.parse::<usize>().ok()
  }

  fn env_force(name: &str) -> Option<CrcForce> {
    let value = std::env::var(name).ok()?;
    parse_force(&value)
  }

  Overrides {
    force: env_force("CRCCHECK_CRC_FORCE").unwrap_or(CrcForce::Auto),
    table_threshold: parse_usize("CRCCHECK_CRC_TABLE_THRESHOLD"),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

fn apply(ov: Overrides) -> CrcConfig {
  let mut tunables = CrcTunables::default();
  if let Some(v) = ov.table_threshold {
    tunables.table_threshold = v;
  }
  CrcConfig { force: ov.force, tunables }
}

/// Get the effective CRC configuration.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  apply(overrides())
}

/// The kernel the one-shot `calc` family uses for an input of `len` bytes.
#[inline]
#[must_use]
pub fn kernel_for_len(len: usize) -> CrcKernel {
  get().kernel_for_len(len)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_force_tokens() {
    assert_eq!(parse_force("auto"), Some(CrcForce::Auto));
    assert_eq!(parse_force(" Bitwise "), Some(CrcForce::Bitwise));
    assert_eq!(parse_force("REFERENCE"), Some(CrcForce::Bitwise));
    assert_eq!(parse_force("table"), Some(CrcForce::Table));
    assert_eq!(parse_force("portable"), Some(CrcForce::Table));
    assert_eq!(parse_force("hwcrc"), None);
    assert_eq!(parse_force(""), None);
  }

  #[test]
  fn auto_uses_threshold() {
    let cfg = CrcConfig { force: CrcForce::Auto, tunables: CrcTunables { table_threshold: 64 } };
    assert_eq!(cfg.kernel_for_len(0), CrcKernel::Bitwise);
    assert_eq!(cfg.kernel_for_len(63), CrcKernel::Bitwise);
    assert_eq!(cfg.kernel_for_len(64), CrcKernel::Table);
  }

  #[test]
  fn force_overrides_threshold() {
    let bitwise = CrcConfig { force: CrcForce::Bitwise, tunables: CrcTunables::default() };
    assert_eq!(bitwise.kernel_for_len(1 << 20), CrcKernel::Bitwise);
    let table = CrcConfig { force: CrcForce::Table, tunables: CrcTunables::default() };
    assert_eq!(table.kernel_for_len(0), CrcKernel::Table);
  }

  #[test]
  fn apply_threshold_override() {
    let cfg = apply(Overrides { force: CrcForce::Auto, table_threshold: Some(7) });
    assert_eq!(cfg.tunables.table_threshold, 7);
    let cfg = apply(Overrides::default());
    assert_eq!(cfg, CrcConfig::default());
    assert_eq!(cfg.tunables.table_threshold, DEFAULT_TABLE_THRESHOLD);
  }

  #[test]
  fn names_are_stable() {
    assert_eq!(CrcForce::Table.as_str(), "table");
    assert_eq!(CrcKernel::Bitwise.name(), "reference/bitwise");
    assert_eq!(CrcKernel::Table.name(), "portable/table");
  }
}
