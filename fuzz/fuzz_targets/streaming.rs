//! Fuzz target for the streaming API.
//!
//! Arbitrary chunkings of arbitrary data through any catalogue preset or word
//! checksum must match the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use crccheck::{ByteOrder, Crc, SumChecksum, XorChecksum, catalog};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  preset: u8,
  checksum_width: u8,
  little_endian: bool,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

/// Split `data` into chunks following `chunk_sizes` (cycled, each 1..=256).
fn chunks<'a>(data: &'a [u8], chunk_sizes: &'a [usize]) -> impl Iterator<Item = &'a [u8]> + 'a {
  let mut offset = 0;
  let mut chunk_idx = 0;
  core::iter::from_fn(move || {
    if offset >= data.len() {
      return None;
    }
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };
    let end = (offset + chunk_size).min(data.len());
    let chunk = &data[offset..end];
    offset = end;
    chunk_idx += 1;
    Some(chunk)
  })
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  let algo = &catalog::ALGORITHMS[input.preset as usize % catalog::ALGORITHMS.len()];
  let params = algo.params();
  let expected = Crc::calc(params, data);
  let mut crc = Crc::new(params);
  for chunk in chunks(data, &input.chunk_sizes) {
    crc.process(chunk);
  }
  assert_eq!(crc.finalize(), expected, "{} streaming mismatch", algo.name());

  let width = (u32::from(input.checksum_width) % 16 + 1) * 8;
  let order = if input.little_endian { ByteOrder::Little } else { ByteOrder::Big };
  if let (Ok(sum), Ok(xor)) = (SumChecksum::new(width), XorChecksum::new(width)) {
    let (sum, xor) = (sum.with_byte_order(order), xor.with_byte_order(order));
    let (mut s, mut x) = (sum.clone(), xor.clone());
    for chunk in chunks(data, &input.chunk_sizes) {
      s.process(chunk);
      x.process(chunk);
    }
    assert_eq!(s.finalize(), sum.calc(data), "{sum} streaming mismatch");
    assert_eq!(x.finalize(), xor.calc(data), "{xor} streaming mismatch");
  }
});
