//! Differential fuzzing of the table kernel against the bitwise kernel.
//!
//! Builds an arbitrary parameter set, then compares the bitwise engine, the
//! table engine, and a resumed engine over arbitrary data.

#![no_main]

use arbitrary::Arbitrary;
use crccheck::{Crc, CrcParams, CrcTable};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  polynomial: u128,
  init: u128,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u128,
  split: usize,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let width = u32::from(input.width) % 128 + 1;
  let mask = u128::MAX >> (128 - width);
  let Ok(params) = CrcParams::new(width, input.polynomial & mask, input.init & mask, input.xor_out & mask) else {
    panic!("masked parameters rejected at width {width}");
  };
  let params = params.with_reflect_in(input.reflect_in).with_reflect_out(input.reflect_out);
  let data = &input.data;

  let bitwise = Crc::new(&params).process(data).finalize();
  let table = CrcTable::new(params);
  let tabled = table.calc(data);
  assert_eq!(
    bitwise, tabled,
    "kernel mismatch: bitwise={bitwise:#x}, table={tabled:#x}, params={params:?}, len={}",
    data.len()
  );
  assert!(bitwise <= params.mask());

  let split = if data.is_empty() { 0 } else { input.split % (data.len() + 1) };
  let (a, b) = data.split_at(split);
  let mut first = table.crc();
  first.process(a);
  let mut resumed = Crc::new(&params);
  resumed.reset_to(first.value()).process(b);
  assert_eq!(resumed.finalize(), bitwise, "resume mismatch at split {split}");
});
