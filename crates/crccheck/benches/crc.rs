//! CRC kernel benchmarks.
//!
//! Run: `cargo bench -p crccheck`
//!
//! This benchmarks:
//! - The bitwise kernel (no tables)
//! - The table kernel with a prebuilt `static` table
//! - The one-shot `calc` path (kernel picked from the configured threshold)
//! - Table construction
//! - The word checksums

// `criterion_group!` generates an undocumented `pub fn`.
#![allow(missing_docs)]

use core::hint::black_box;

use crccheck::{Crc, CrcParams, CrcTable, SumChecksum, XorChecksum, config};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes.
const SIZES: [usize; 6] = [64, 256, 1024, 4096, 16384, 65536];

/// Smaller sizes for the bitwise kernel.
const BITWISE_SIZES: [usize; 4] = [16, 64, 256, 1024];

static CRC32: CrcTable = CrcTable::new(CrcParams::CRC32_ISO_HDLC);
static CRC82: CrcTable = CrcTable::new(CrcParams::CRC82_DARC);

fn bench_bitwise(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc/bitwise");

  for (name, params) in [("crc32", CrcParams::CRC32_ISO_HDLC), ("crc82", CrcParams::CRC82_DARC)] {
    for size in BITWISE_SIZES {
      let data = vec![0xABu8; size];
      group.throughput(Throughput::Bytes(size as u64));
      group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
        b.iter(|| black_box(Crc::new(&params).process(data).finalize()));
      });
    }
  }

  group.finish();
}

fn bench_table(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc/table");

  for (name, table) in [("crc32", &CRC32), ("crc82", &CRC82)] {
    for size in SIZES {
      let data = vec![0u8; size];
      group.throughput(Throughput::Bytes(size as u64));
      group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
        b.iter(|| black_box(table.calc(data)));
      });
    }
  }

  group.finish();
}

/// Benchmark the one-shot path, which may build a table per call.
fn bench_calc(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc/calc");
  let cfg = config::get();
  eprintln!(
    "crc calc: force={} threshold={} (64B -> {}, 64KiB -> {})",
    cfg.force.as_str(),
    cfg.tunables.table_threshold,
    cfg.kernel_for_len(64).name(),
    cfg.kernel_for_len(65536).name()
  );

  let params = CrcParams::CRC32_ISCSI;
  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| black_box(Crc::calc(&params, data)));
    });
  }

  group.finish();
}

fn bench_table_build(c: &mut Criterion) {
  c.bench_function("crc/table_build/crc64", |b| {
    b.iter(|| black_box(CrcTable::new(black_box(CrcParams::CRC64_XZ))));
  });
}

fn bench_word_checksums(c: &mut Criterion) {
  let mut group = c.benchmark_group("checksum");
  let size = 65536;
  let data = vec![0x5Au8; size];
  group.throughput(Throughput::Bytes(size as u64));

  let sum32 = SumChecksum::sum32();
  group.bench_function("sum32", |b| b.iter(|| black_box(sum32.calc(&data))));
  let xor32 = XorChecksum::xor32();
  group.bench_function("xor32", |b| b.iter(|| black_box(xor32.calc(&data))));

  group.finish();
}

criterion_group!(benches, bench_bitwise, bench_table, bench_calc, bench_table_build, bench_word_checksums);
criterion_main!(benches);
