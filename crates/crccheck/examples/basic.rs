//! Basic crccheck usage: presets, catalogue lookup, streaming, checkpoints.
//!
//! Run with: `cargo run --example basic -p crccheck`

use crccheck::{ByteOrder, Checksum, Crc, CrcParams, CrcTable, SumChecksum, XorChecksum, catalog};

fn main() {
  println!("=== crccheck Basic Examples ===\n");

  one_shot_examples();
  streaming_examples();
  resume_example();
  checksum_examples();
}

/// One-shot computation over the standard check input.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  // CRC-32 (ISO-HDLC) - Ethernet, gzip, zip, PNG
  let crc32 = Crc::calc(&CrcParams::CRC32_ISO_HDLC, data);
  println!("CRC-32/ISO-HDLC: 0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // Any catalogue entry by name
  for name in ["CRC-3/ROHC", "CRC-16/MODBUS", "crc-24/openpgp", "CRC-64/XZ", "CRC-82/DARC"] {
    let Some(algo) = catalog::find(name) else {
      continue;
    };
    let hex = Crc::calc_hex(algo.params(), data, ByteOrder::Big);
    println!("{:<16} {hex}", algo.name());
  }

  // A parameter set not in the catalogue
  let custom = CrcParams::new(10, 0x233, 0x3FF, 0).map(|p| p.with_reflection(true));
  if let Ok(custom) = custom {
    println!("custom 10-bit:   0x{:03X}", Crc::calc(&custom, data));
  }

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  static TABLE: CrcTable = CrcTable::new(CrcParams::CRC32_ISCSI);

  let mut crc = TABLE.crc();
  crc.process(b"1234").process(b"56789");
  println!("Streaming CRC-32C: 0x{:08X} ({})", crc.finalize(), crc.kernel().name());
  assert_eq!(crc.finalize(), 0xE306_9283);

  // finalize() is a view: processing can continue after it
  crc.process(b"...");
  println!("Extended CRC-32C:  0x{:08X}", crc.finalize());

  // Bytes from any iterator
  let mut crc = Crc::new(&CrcParams::CRC16_XMODEM);
  crc.process_bytes(b"1a2b3c4d5e6f7g8h9i".iter().step_by(2));
  println!("Every other byte:  0x{:04X}", crc.finalize());
  assert_eq!(crc.finalize(), 0x31C3);

  println!();
}

/// Resume computation from a saved register.
fn resume_example() {
  println!("--- Resume from Saved State ---\n");

  let params = CrcParams::CRC64_XZ;
  let part1 = b"first part of data";
  let part2 = b" and the second part";

  let mut crc = Crc::new(&params);
  crc.process(part1);
  let saved = crc.value();
  println!("Saved register after part1: 0x{saved:016X}");

  let mut resumed = Crc::new(&params);
  resumed.reset_to(saved).process(part2);
  println!("Final CRC after resume:     0x{:016X}", resumed.finalize());

  let mut full = Crc::new(&params);
  full.process(part1).process(part2);
  assert_eq!(resumed.finalize(), full.finalize());
  println!("Verified: matches full computation");

  println!();
}

/// Additive and XOR checksums through the shared trait.
fn checksum_examples() {
  println!("--- Word Checksums ---\n");

  fn report<C: Checksum + core::fmt::Display>(c: C, data: &[u8]) {
    let value: u128 = c.checksum(data).into();
    println!("{c}: 0x{value:X}");
  }

  let data = [0xDE, 0xAD, 0xBE, 0xEF, 0xAA, 0x55, 0xC2, 0x8C];
  report(SumChecksum::sum8(), &data);
  report(SumChecksum::sum16().with_byte_order(ByteOrder::Little), &data);
  report(XorChecksum::xor32(), &data);

  println!();
}
