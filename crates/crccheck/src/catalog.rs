//! Named preset catalogue.
//!
//! One entry per published CRC variant, from `CRC-3/ROHC` to `CRC-82/DARC`,
//! named as in the reveng catalogue. Every entry carries its check value, so
//! the whole table can be verified with [`CrcParams::self_test`].
//!
//! ```rust
//! use crccheck::{Crc, catalog};
//!
//! let algo = catalog::find("crc32mpeg2").unwrap();
//! assert_eq!(algo.name(), "CRC-32/MPEG-2");
//! assert_eq!(Crc::calc(algo.params(), b"123456789"), 0x0376_E6E7);
//! ```

use core::fmt;

use crate::CrcParams;

/// A named catalogue entry.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Algorithm {
  name: &'static str,
  aliases: &'static [&'static str],
  params: CrcParams,
}

impl Algorithm {
  /// Canonical name.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Alternative names this entry is also found under.
  #[inline]
  #[must_use]
  pub const fn aliases(&self) -> &'static [&'static str] {
    self.aliases
  }

  /// The parameter set.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// Whether `name` refers to this entry (see [`find`]).
  #[must_use]
  pub fn matches(&self, name: &str) -> bool {
    names_equal(self.name, name) || self.aliases.iter().any(|alias| names_equal(alias, name))
  }
}

impl fmt::Debug for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Algorithm").field("name", &self.name).field("params", &self.params).finish_non_exhaustive()
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

const fn entry(name: &'static str, aliases: &'static [&'static str], params: CrcParams) -> Algorithm {
  Algorithm { name, aliases, params }
}

/// Compare two names ignoring ASCII case and every non-alphanumeric character.
fn names_equal(a: &str, b: &str) -> bool {
  let mut a = a.bytes().filter(u8::is_ascii_alphanumeric);
  let mut b = b.bytes().filter(u8::is_ascii_alphanumeric);
  loop {
    match (a.next(), b.next()) {
      (None, None) => return true,
      (Some(x), Some(y)) if x.eq_ignore_ascii_case(&y) => {}
      _ => return false,
    }
  }
}

/// Look up a preset by name or alias.
///
/// Matching ignores ASCII case and every character that is not a letter or a
/// digit, so `"CRC-16/IBM-SDLC"`, `"crc16ibmsdlc"` and `"Crc16IbmSdlc"` are
/// the same name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Algorithm> {
  ALGORITHMS.iter().find(|algo| algo.matches(name))
}

/// Every catalogue entry, ordered by width.
pub static ALGORITHMS: &[Algorithm] = &[
  entry("CRC-3/ROHC", &[], CrcParams::preset(3, 0x3, 0x7, true, true, 0x0, 0x6)),
  entry("CRC-4/ITU", &[], CrcParams::preset(4, 0x3, 0x0, true, true, 0x0, 0x7)),
  entry("CRC-5/EPC", &[], CrcParams::preset(5, 0x09, 0x09, false, false, 0x00, 0x00)),
  entry("CRC-5/ITU", &[], CrcParams::preset(5, 0x15, 0x00, true, true, 0x00, 0x07)),
  entry("CRC-5/USB", &[], CrcParams::preset(5, 0x05, 0x1f, true, true, 0x1f, 0x19)),
  entry("CRC-6/CDMA2000-A", &[], CrcParams::preset(6, 0x27, 0x3f, false, false, 0x00, 0x0d)),
  entry("CRC-6/CDMA2000-B", &[], CrcParams::preset(6, 0x07, 0x3f, false, false, 0x00, 0x3b)),
  entry("CRC-6/DARC", &[], CrcParams::preset(6, 0x19, 0x00, true, true, 0x00, 0x26)),
  entry("CRC-6/ITU", &[], CrcParams::preset(6, 0x03, 0x00, true, true, 0x00, 0x06)),
  entry("CRC-7", &[], CrcParams::preset(7, 0x09, 0x00, false, false, 0x00, 0x75)),
  entry("CRC-7/ROHC", &[], CrcParams::preset(7, 0x4f, 0x7f, true, true, 0x00, 0x53)),
  entry("CRC-8", &["CRC-8/SMBUS"], CrcParams::CRC8),
  entry("CRC-8/CDMA2000", &[], CrcParams::preset(8, 0x9b, 0xff, false, false, 0x00, 0xda)),
  entry("CRC-8/DARC", &[], CrcParams::preset(8, 0x39, 0x00, true, true, 0x00, 0x15)),
  entry("CRC-8/DVB-S2", &[], CrcParams::preset(8, 0xd5, 0x00, false, false, 0x00, 0xbc)),
  entry("CRC-8/EBU", &[], CrcParams::preset(8, 0x1d, 0xff, true, true, 0x00, 0x97)),
  entry("CRC-8/I-CODE", &[], CrcParams::preset(8, 0x1d, 0xfd, false, false, 0x00, 0x7e)),
  entry("CRC-8/ITU", &[], CrcParams::preset(8, 0x07, 0x00, false, false, 0x55, 0xa1)),
  entry("CRC-8/MAXIM", &[], CrcParams::CRC8_MAXIM),
  entry("CRC-8/ROHC", &[], CrcParams::preset(8, 0x07, 0xff, true, true, 0x00, 0xd0)),
  entry("CRC-8/WCDMA", &[], CrcParams::preset(8, 0x9b, 0x00, true, true, 0x00, 0x25)),
  entry("CRC-10", &[], CrcParams::preset(10, 0x233, 0x000, false, false, 0x000, 0x199)),
  entry("CRC-10/CDMA2000", &[], CrcParams::preset(10, 0x3d9, 0x3ff, false, false, 0x000, 0x233)),
  entry("CRC-11", &[], CrcParams::preset(11, 0x385, 0x01a, false, false, 0x000, 0x5a3)),
  entry("CRC-12/3GPP", &[], CrcParams::preset(12, 0x80f, 0x000, false, true, 0x000, 0xdaf)),
  entry("CRC-12/CDMA2000", &[], CrcParams::preset(12, 0xf13, 0xfff, false, false, 0x000, 0xd4d)),
  entry("CRC-12/DECT", &[], CrcParams::preset(12, 0x80f, 0x000, false, false, 0x000, 0xf5b)),
  entry("CRC-13/BBC", &[], CrcParams::preset(13, 0x1cf5, 0x0000, false, false, 0x0000, 0x04fa)),
  entry("CRC-14/DARC", &[], CrcParams::preset(14, 0x0805, 0x0000, true, true, 0x0000, 0x082d)),
  entry("CRC-15", &[], CrcParams::preset(15, 0x4599, 0x0000, false, false, 0x0000, 0x059e)),
  entry("CRC-15/MPT1327", &[], CrcParams::preset(15, 0x6815, 0x0000, false, false, 0x0001, 0x2566)),
  entry("CRC-16", &[], CrcParams::preset(16, 0x1021, 0x0000, false, false, 0x0000, 0x31c3)),
  entry("ARC", &["CRC-16/ARC", "CrcArc"], CrcParams::CRC16_ARC),
  entry("CRC-16/AUG-CCITT", &[], CrcParams::preset(16, 0x1021, 0x1d0f, false, false, 0x0000, 0xe5cc)),
  entry("CRC-16/BUYPASS", &[], CrcParams::preset(16, 0x8005, 0x0000, false, false, 0x0000, 0xfee8)),
  entry("CRC-16/CCITT-FALSE", &[], CrcParams::preset(16, 0x1021, 0xffff, false, false, 0x0000, 0x29b1)),
  entry("CRC-16/CDMA2000", &[], CrcParams::preset(16, 0xc867, 0xffff, false, false, 0x0000, 0x4c06)),
  entry("CRC-16/DDS-110", &[], CrcParams::preset(16, 0x8005, 0x800d, false, false, 0x0000, 0x9ecf)),
  entry("CRC-16/DECT-R", &[], CrcParams::preset(16, 0x0589, 0x0000, false, false, 0x0001, 0x007e)),
  entry("CRC-16/DECT-X", &[], CrcParams::preset(16, 0x0589, 0x0000, false, false, 0x0000, 0x007f)),
  entry("CRC-16/DNP", &[], CrcParams::preset(16, 0x3d65, 0x0000, true, true, 0xffff, 0xea82)),
  entry("CRC-16/EN-13757", &[], CrcParams::preset(16, 0x3d65, 0x0000, false, false, 0xffff, 0xc2b7)),
  entry("CRC-16/GENIBUS", &[], CrcParams::preset(16, 0x1021, 0xffff, false, false, 0xffff, 0xd64e)),
  entry("CRC-16/MAXIM", &[], CrcParams::preset(16, 0x8005, 0x0000, true, true, 0xffff, 0x44c2)),
  entry("CRC-16/RIELLO", &[], CrcParams::preset(16, 0x1021, 0xb2aa, true, true, 0x0000, 0x63d0)),
  entry("CRC-16/T10-DIF", &[], CrcParams::preset(16, 0x8bb7, 0x0000, false, false, 0x0000, 0xd0db)),
  entry("CRC-16/TELEDISK", &[], CrcParams::preset(16, 0xa097, 0x0000, false, false, 0x0000, 0x0fb3)),
  entry("CRC-16/TMS37157", &[], CrcParams::preset(16, 0x1021, 0x89ec, true, true, 0x0000, 0x26b1)),
  entry("CRC-16/USB", &[], CrcParams::preset(16, 0x8005, 0xffff, true, true, 0xffff, 0xb4c8)),
  entry("CRC-A", &[], CrcParams::preset(16, 0x1021, 0xc6c6, true, true, 0x0000, 0xbf05)),
  entry("CRC-16/CCITT", &["KERMIT", "CRC-16/KERMIT", "CrcKermit"], CrcParams::CRC16_KERMIT),
  entry("MODBUS", &["CRC-16/MODBUS", "CrcModbus"], CrcParams::CRC16_MODBUS),
  entry("X-25", &["CrcX25"], CrcParams::preset(16, 0x1021, 0xffff, true, true, 0xffff, 0x906e)),
  entry("XMODEM", &["CRC-16/XMODEM", "CrcXmodem"], CrcParams::CRC16_XMODEM),
  entry("CRC-16/CMS", &[], CrcParams::preset(16, 0x8005, 0xffff, false, false, 0x0000, 0xaee7)),
  entry("CRC-16/GSM", &[], CrcParams::preset(16, 0x1021, 0x0000, false, false, 0xffff, 0xce3c)),
  entry("CRC-16/IBM-3740", &[], CrcParams::CRC16_IBM_3740),
  entry("CRC-16/IBM-SDLC", &[], CrcParams::CRC16_IBM_SDLC),
  entry("CRC-16/ISO-IEC-14443-3-A", &[], CrcParams::preset(16, 0x1021, 0xc6c6, true, true, 0x0000, 0xbf05)),
  entry("CRC-16/LJ1200", &[], CrcParams::preset(16, 0x6f63, 0x0000, false, false, 0x0000, 0xbdf4)),
  entry("CRC-16/MCRF4XX", &["Crcc16Mcrf4xx"], CrcParams::preset(16, 0x1021, 0xffff, true, true, 0x0000, 0x6f91)),
  entry("CRC-16/NRSC-5", &[], CrcParams::preset(16, 0x080b, 0xffff, true, true, 0x0000, 0xa066)),
  entry("CRC-16/OPENSAFETY-A", &[], CrcParams::preset(16, 0x5935, 0x0000, false, false, 0x0000, 0x5d38)),
  entry("CRC-16/OPENSAFETY-B", &[], CrcParams::preset(16, 0x755b, 0x0000, false, false, 0x0000, 0x20fe)),
  entry("CRC-16/PROFIBUS", &[], CrcParams::preset(16, 0x1dcf, 0xffff, false, false, 0xffff, 0xa819)),
  entry("CRC-16/SPI-FUJITSU", &[], CrcParams::preset(16, 0x1021, 0x1d0f, false, false, 0x0000, 0xe5cc)),
  entry("CRC-16/UMTS", &[], CrcParams::preset(16, 0x8005, 0x0000, false, false, 0x0000, 0xfee8)),
  entry("CRC-17/CAN-FD", &[], CrcParams::preset(17, 0x1_685b, 0x0_0000, false, false, 0x0_0000, 0x0_4f03)),
  entry("CRC-21/CAN-FD", &[], CrcParams::preset(21, 0x10_2899, 0x00_0000, false, false, 0x00_0000, 0x0e_d841)),
  entry("CRC-24", &[], CrcParams::preset(24, 0x86_4cfb, 0xb7_04ce, false, false, 0x00_0000, 0x21_cf02)),
  entry("CRC-24/FLEXRAY-A", &[], CrcParams::preset(24, 0x5d_6dcb, 0xfe_dcba, false, false, 0x00_0000, 0x79_79bd)),
  entry("CRC-24/FLEXRAY-B", &[], CrcParams::preset(24, 0x5d_6dcb, 0xab_cdef, false, false, 0x00_0000, 0x1f_23b8)),
  entry("CRC-24/BLE", &[], CrcParams::preset(24, 0x00_065b, 0x55_5555, true, true, 0x00_0000, 0xc2_5a56)),
  entry("CRC-24/INTERLAKEN", &[], CrcParams::preset(24, 0x32_8b63, 0xff_ffff, false, false, 0xff_ffff, 0xb4_f3e6)),
  entry("CRC-24/LTE-A", &[], CrcParams::preset(24, 0x86_4cfb, 0x00_0000, false, false, 0x00_0000, 0xcd_e703)),
  entry("CRC-24/LTE-B", &[], CrcParams::preset(24, 0x80_0063, 0x00_0000, false, false, 0x00_0000, 0x23_ef52)),
  entry("CRC-24/OPENPGP", &[], CrcParams::CRC24_OPENPGP),
  entry("CRC-24/OS-9", &[], CrcParams::preset(24, 0x80_0063, 0xff_ffff, false, false, 0xff_ffff, 0x20_0fa5)),
  entry("CRC-30/CDMA", &[], CrcParams::preset(30, 0x2030_b9c7, 0x3fff_ffff, false, false, 0x3fff_ffff, 0x04c3_4abf)),
  entry("CRC-31/PHILIPS", &[], CrcParams::preset(31, 0x04c1_1db7, 0x7fff_ffff, false, false, 0x7fff_ffff, 0x0ce9_e46c)),
  entry("CRC-32", &[], CrcParams::CRC32_ISO_HDLC),
  entry("CRC-32/BZIP2", &[], CrcParams::CRC32_BZIP2),
  entry("CRC-32C", &[], CrcParams::CRC32_ISCSI),
  entry("CRC-32D", &[], CrcParams::preset(32, 0xa833_982b, 0xffff_ffff, true, true, 0xffff_ffff, 0x8731_5576)),
  entry("CRC-32/MPEG-2", &[], CrcParams::CRC32_MPEG2),
  entry("CRC-32/POSIX", &[], CrcParams::preset(32, 0x04c1_1db7, 0x0000_0000, false, false, 0xffff_ffff, 0x765e_7680)),
  entry("CRC-32Q", &[], CrcParams::preset(32, 0x8141_41ab, 0x0000_0000, false, false, 0x0000_0000, 0x3010_bf7f)),
  entry("JAMCRC", &["CRC-32/JAMCRC", "CrcJamcrc"], CrcParams::preset(32, 0x04c1_1db7, 0xffff_ffff, true, true, 0x0000_0000, 0x340b_c6d9)),
  entry("XFER", &["CRC-32/XFER", "CrcXfer"], CrcParams::preset(32, 0x0000_00af, 0x0000_0000, false, false, 0x0000_0000, 0xbd0b_e338)),
  entry("CRC-32/CD-ROM-EDC", &[], CrcParams::preset(32, 0x8001_801b, 0x0000_0000, true, true, 0x0000_0000, 0x6ec2_edc4)),
  entry("CRC-32/CKSUM", &[], CrcParams::preset(32, 0x04c1_1db7, 0x0000_0000, false, false, 0xffff_ffff, 0x765e_7680)),
  entry("CRC-32/ISCSI", &[], CrcParams::CRC32_ISCSI),
  entry("CRC-32/ISO-HDLC", &[], CrcParams::CRC32_ISO_HDLC),
  entry("CRC-32/AIXM", &[], CrcParams::preset(32, 0x8141_41ab, 0x0000_0000, false, false, 0x0000_0000, 0x3010_bf7f)),
  entry("CRC-32/AUTOSAR", &[], CrcParams::preset(32, 0xf4ac_fb13, 0xffff_ffff, true, true, 0xffff_ffff, 0x1697_d06a)),
  entry("CRC-32/BASE91-D", &[], CrcParams::preset(32, 0xa833_982b, 0xffff_ffff, true, true, 0xffff_ffff, 0x8731_5576)),
  entry("CRC-40/GSM", &[], CrcParams::preset(40, 0x00_0482_0009, 0x00_0000_0000, false, false, 0xff_ffff_ffff, 0xd4_164f_c646)),
  entry("CRC-64", &[], CrcParams::CRC64_ECMA_182),
  entry("CRC-64/WE", &[], CrcParams::preset(64, 0x42f0_e1eb_a9ea_3693, 0xffff_ffff_ffff_ffff, false, false, 0xffff_ffff_ffff_ffff, 0x62ec_59e3_f1a4_f00a)),
  entry("CRC-64/XZ", &[], CrcParams::CRC64_XZ),
  entry("CRC-64/ECMA-182", &[], CrcParams::CRC64_ECMA_182),
  entry("CRC-64/GO-ISO", &[], CrcParams::preset(64, 0x0000_0000_0000_001b, 0xffff_ffff_ffff_ffff, true, true, 0xffff_ffff_ffff_ffff, 0xb909_56c7_75a4_1001)),
  entry("CRC-82/DARC", &[], CrcParams::CRC82_DARC),
];
