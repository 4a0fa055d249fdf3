//! Command-line CRC and checksum calculator.
//!
//! ```text
//! crccheck <ALGORITHM|Crc(...)> [-H|-h|-B|-b|-d|-D] [INPUT|-] [OUTPUT|-]
//! crccheck --list
//! crccheck --selftest
//! ```

use std::{
  env,
  fs::File,
  io::{self, Read, Write},
  process::ExitCode,
};

use crccheck::{
  ByteOrder, CheckBytes, Checksum, Crc, CrcForce, CrcParams, CrcTable, SumChecksum, XorChecksum, catalog, config,
  io::ChecksumReader,
};

/// Read size for file and stdin input.
const BLOCK_SIZE: usize = 16 * 1024 * 1024;

fn usage() {
  eprintln!("Usage: crccheck <ALGORITHM|Crc(...)> [-H|-h|-B|-b|-d|-D] [INPUT|-] [OUTPUT|-]");
  eprintln!("       crccheck --list | --selftest");
  eprintln!();
  eprintln!("  ALGORITHM  catalogue name or alias (e.g. CRC-32/ISO-HDLC, crc32c, XMODEM),");
  eprintln!("             or Checksum8/16/32, ChecksumXor8/16/32, Checksum(<width>), ChecksumXor(<width>)");
  eprintln!("  Crc(...)   Crc(width, poly[, init, refin, refout, xorout, check]); key=value also accepted");
  eprintln!("  INPUT      file to read, '-' or missing for stdin");
  eprintln!("  OUTPUT     file to write, '-' or missing for stdout");
  eprintln!("  -H  hexadecimal with leading 0x (default)");
  eprintln!("  -h  hexadecimal");
  eprintln!("  -B  raw bytes, big endian");
  eprintln!("  -b  raw bytes, little endian");
  eprintln!("  -d  decimal (also -D)");
}

// ─────────────────────────────────────────────────────────────────────────────
// Arguments
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
  HexPrefixed,
  Hex,
  BytesBig,
  BytesLittle,
  Decimal,
}

impl Format {
  fn from_flag(flag: &str) -> Option<Self> {
    match flag {
      "-H" => Some(Self::HexPrefixed),
      "-h" => Some(Self::Hex),
      "-B" => Some(Self::BytesBig),
      "-b" => Some(Self::BytesLittle),
      "-d" | "-D" => Some(Self::Decimal),
      _ => None,
    }
  }
}

#[derive(Clone, Debug)]
enum Algorithm {
  Crc(CrcParams),
  Sum(SumChecksum),
  Xor(XorChecksum),
}

#[derive(Debug)]
enum Command {
  List,
  SelfTest,
  Compute {
    algorithm: Algorithm,
    format: Format,
    input: Option<String>,
    output: Option<String>,
  },
}

fn parse_args(args: &[String]) -> Result<Command, String> {
  let Some((first, rest)) = args.split_first() else {
    return Err("missing algorithm name".to_string());
  };
  match first.as_str() {
    "--list" if rest.is_empty() => return Ok(Command::List),
    "--selftest" if rest.is_empty() => return Ok(Command::SelfTest),
    "--list" | "--selftest" => return Err(format!("{first} takes no arguments")),
    _ => {}
  }

  let algorithm = parse_algorithm(first)?;
  let mut rest = rest.iter();
  let mut next = rest.next();
  let mut format = Format::HexPrefixed;
  if let Some(arg) = next
    && arg.len() == 2
    && arg.starts_with('-')
  {
    format = Format::from_flag(arg).ok_or_else(|| format!("invalid option {arg}"))?;
    next = rest.next();
  }
  let input = next.filter(|s| s.as_str() != "-").cloned();
  let output = rest.next().filter(|s| s.as_str() != "-").cloned();
  if let Some(extra) = rest.next() {
    return Err(format!("unexpected argument: {extra}"));
  }
  Ok(Command::Compute { algorithm, format, input, output })
}

fn parse_algorithm(name: &str) -> Result<Algorithm, String> {
  let name = name.trim();
  if let Some(inner) = name.strip_prefix("Crc(").and_then(|s| s.strip_suffix(')')) {
    return parse_generic_crc(inner).map(Algorithm::Crc);
  }
  if let Some(algorithm) = parse_checksum(name)? {
    return Ok(algorithm);
  }
  catalog::find(name)
    .map(|algo| Algorithm::Crc(*algo.params()))
    .ok_or_else(|| format!("unknown algorithm: {name}"))
}

/// `Checksum8`, `ChecksumXor32`, `Checksum(24)`, ... (`None` if not a checksum name).
fn parse_checksum(name: &str) -> Result<Option<Algorithm>, String> {
  let normalized: String = name.chars().filter(char::is_ascii_alphanumeric).collect::<String>().to_ascii_lowercase();
  let (xor, width) = if let Some(width) = normalized.strip_prefix("checksumxor") {
    (true, width)
  } else if let Some(width) = normalized.strip_prefix("checksum") {
    (false, width)
  } else {
    return Ok(None);
  };
  let width: u32 = width.parse().map_err(|_| format!("invalid checksum width in {name}"))?;
  let algorithm = if xor {
    Algorithm::Xor(XorChecksum::new(width).map_err(|e| format!("{name}: {e}"))?)
  } else {
    Algorithm::Sum(SumChecksum::new(width).map_err(|e| format!("{name}: {e}"))?)
  };
  Ok(Some(algorithm))
}

const GENERIC_KEYS: [&[&str]; 7] = [
  &["width"],
  &["poly", "polynomial"],
  &["init", "initvalue"],
  &["refin", "reflect_input"],
  &["refout", "reflect_output"],
  &["xorout", "xor_output"],
  &["check", "check_result"],
];

/// `width, poly[, init, refin, refout, xorout, check]`, positional then `key=value`.
fn parse_generic_crc(spec: &str) -> Result<CrcParams, String> {
  let mut slots: [Option<&str>; 7] = [None; 7];
  let mut positional = 0usize;
  let mut seen_keyword = false;
  for arg in spec.split(',').map(str::trim).filter(|a| !a.is_empty()) {
    if let Some((key, value)) = arg.split_once('=') {
      let key = key.trim();
      let slot = GENERIC_KEYS
        .iter()
        .position(|names| names.iter().any(|n| n.eq_ignore_ascii_case(key)))
        .ok_or_else(|| format!("unknown Crc() parameter: {key}"))?;
      if slots[slot].replace(value.trim()).is_some() {
        return Err(format!("Crc() parameter given twice: {key}"));
      }
      seen_keyword = true;
    } else {
      if seen_keyword {
        return Err("positional Crc() argument after key=value".to_string());
      }
      let slot = slots.get_mut(positional).ok_or("too many Crc() arguments")?;
      *slot = Some(arg);
      positional += 1;
    }
  }

  let width = slots[0].ok_or("Crc() requires a width")?;
  let width = u32::try_from(parse_int(width)?).map_err(|_| format!("invalid width: {width}"))?;
  let poly = parse_int(slots[1].ok_or("Crc() requires a polynomial")?)?;
  let init = slots[2].map_or(Ok(0), parse_int)?;
  let refin = slots[3].map_or(Ok(false), parse_bool)?;
  let refout = slots[4].map_or(Ok(false), parse_bool)?;
  let xorout = slots[5].map_or(Ok(0), parse_int)?;

  let params = CrcParams::new(width, poly, init, xorout)
    .map_err(|e| e.to_string())?
    .with_reflect_in(refin)
    .with_reflect_out(refout);
  match slots[6] {
    Some(check) => params.with_check(parse_int(check)?).map_err(|e| e.to_string()),
    None => Ok(params),
  }
}

fn parse_int(s: &str) -> Result<u128, String> {
  let t = s.trim().replace('_', "");
  let parsed = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
    u128::from_str_radix(hex, 16)
  } else if let Some(bin) = t.strip_prefix("0b").or_else(|| t.strip_prefix("0B")) {
    u128::from_str_radix(bin, 2)
  } else if let Some(oct) = t.strip_prefix("0o").or_else(|| t.strip_prefix("0O")) {
    u128::from_str_radix(oct, 8)
  } else {
    t.parse::<u128>()
  };
  parsed.map_err(|_| format!("invalid integer: {s}"))
}

fn parse_bool(s: &str) -> Result<bool, String> {
  let t = s.trim();
  if t.eq_ignore_ascii_case("true") || t == "1" {
    Ok(true)
  } else if t.eq_ignore_ascii_case("false") || t == "0" {
    Ok(false)
  } else {
    Err(format!("invalid boolean: {s}"))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Final value, encoded both ways.
struct Outcome {
  value: u128,
  big: CheckBytes,
  little: CheckBytes,
}

fn digest<C: Checksum>(hasher: C, input: impl Read) -> io::Result<Outcome> {
  let mut reader = ChecksumReader::new(input, hasher);
  let mut buf = vec![0u8; BLOCK_SIZE];
  loop {
    match reader.read(&mut buf) {
      Ok(0) => break,
      Ok(_) => {}
      Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
      Err(e) => return Err(e),
    }
  }
  let hasher = reader.hasher();
  Ok(Outcome {
    value: hasher.finalize().into(),
    big: hasher.finalize_bytes(ByteOrder::Big),
    little: hasher.finalize_bytes(ByteOrder::Little),
  })
}

fn digest_with(algorithm: &Algorithm, input: impl Read) -> io::Result<Outcome> {
  match algorithm {
    Algorithm::Crc(params) => {
      if config::get().force == CrcForce::Bitwise {
        digest(Crc::new(params), input)
      } else {
        let table = CrcTable::new(*params);
        digest(table.crc(), input)
      }
    }
    Algorithm::Sum(sum) => digest(sum.clone(), input),
    Algorithm::Xor(xor) => digest(xor.clone(), input),
  }
}

fn render(outcome: &Outcome, format: Format) -> Vec<u8> {
  match format {
    Format::HexPrefixed => format!("0x{:X}\n", outcome.big).into_bytes(),
    Format::Hex => format!("{:X}\n", outcome.big).into_bytes(),
    Format::Decimal => format!("{}\n", outcome.value).into_bytes(),
    Format::BytesBig => outcome.big.as_slice().to_vec(),
    Format::BytesLittle => outcome.little.as_slice().to_vec(),
  }
}

fn compute(algorithm: &Algorithm, format: Format, input: Option<&str>, output: Option<&str>) -> Result<(), String> {
  let outcome = match input {
    Some(path) => {
      let file = File::open(path).map_err(|e| format!("failed to open {path}: {e}"))?;
      digest_with(algorithm, file).map_err(|e| format!("failed to read {path}: {e}"))?
    }
    None => digest_with(algorithm, io::stdin().lock()).map_err(|e| format!("failed to read stdin: {e}"))?,
  };

  let bytes = render(&outcome, format);
  match output {
    Some(path) => {
      let mut file = File::create(path).map_err(|e| format!("failed to create {path}: {e}"))?;
      file.write_all(&bytes).map_err(|e| format!("failed to write {path}: {e}"))?;
    }
    None => {
      let mut out = io::stdout().lock();
      out.write_all(&bytes).and_then(|()| out.flush()).map_err(|e| format!("failed to write stdout: {e}"))?;
    }
  }
  Ok(())
}

fn list() -> Result<(), String> {
  let mut out = io::stdout().lock();
  let mut write = |line: String| writeln!(out, "{line}").map_err(|e| format!("failed to write stdout: {e}"));
  for algo in catalog::ALGORITHMS {
    let p = algo.params();
    let digits = p.output_len() * 2;
    let mut line = format!(
      "{:<24} width={:<3} poly=0x{:0digits$x} init=0x{:0digits$x} refin={} refout={} xorout=0x{:0digits$x}",
      algo.name(),
      p.width(),
      p.polynomial(),
      p.init(),
      p.reflect_in(),
      p.reflect_out(),
      p.xor_out(),
    );
    if let Some(check) = p.check() {
      line.push_str(&format!(" check=0x{check:0digits$x}"));
    }
    if !algo.aliases().is_empty() {
      line.push_str(&format!(" aliases={}", algo.aliases().join(",")));
    }
    write(line)?;
  }
  for width in [8u32, 16, 32] {
    write(format!("Checksum{width}"))?;
  }
  for width in [8u32, 16, 32] {
    write(format!("ChecksumXor{width}"))?;
  }
  Ok(())
}

fn self_test() -> bool {
  let mut failures = 0usize;
  let mut total = 0usize;
  for algo in catalog::ALGORITHMS {
    total += 1;
    if let Err(e) = algo.params().self_test() {
      eprintln!("FAIL {}: {e}", algo.name());
      failures += 1;
    }
  }
  for order in [ByteOrder::Big, ByteOrder::Little] {
    for sum in [SumChecksum::sum8(), SumChecksum::sum16(), SumChecksum::sum32()] {
      let sum = sum.with_byte_order(order);
      total += 1;
      if let Err(e) = sum.self_test() {
        eprintln!("FAIL {sum}: {e}");
        failures += 1;
      }
    }
    for xor in [XorChecksum::xor8(), XorChecksum::xor16(), XorChecksum::xor32()] {
      let xor = xor.with_byte_order(order);
      total += 1;
      if let Err(e) = xor.self_test() {
        eprintln!("FAIL {xor}: {e}");
        failures += 1;
      }
    }
  }
  println!("{} of {total} self-tests passed", total - failures);
  failures == 0
}

fn main() -> ExitCode {
  let args: Vec<String> = env::args().skip(1).collect();
  if matches!(args.first().map(String::as_str), Some("--help")) {
    usage();
    return ExitCode::SUCCESS;
  }
  let command = match parse_args(&args) {
    Ok(command) => command,
    Err(err) => {
      eprintln!("error: {err}");
      usage();
      return ExitCode::from(2);
    }
  };
  let result = match command {
    Command::List => list(),
    Command::SelfTest => {
      return if self_test() { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }
    Command::Compute { algorithm, format, input, output } => {
      compute(&algorithm, format, input.as_deref(), output.as_deref())
    }
  };
  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {err}");
      ExitCode::FAILURE
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
  }

  #[test]
  fn parses_generic_crc_positional_and_keywords() {
    let p = parse_generic_crc("32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926").unwrap();
    assert_eq!(p, CrcParams::CRC32_ISO_HDLC);
    let p = parse_generic_crc("16, 0x1021, xor_output=0, initvalue=0xFFFF, check=0x29B1").unwrap();
    assert_eq!(p, CrcParams::CRC16_IBM_3740);
    assert!(parse_generic_crc("16, poly=0x1021, 0").is_err());
    assert!(parse_generic_crc("8").is_err());
    assert!(parse_generic_crc("8, 0x107").is_err());
    assert!(parse_generic_crc("8, 7, colour=1").is_err());
  }

  #[test]
  fn parses_algorithm_names() {
    assert!(matches!(parse_algorithm("Crc32"), Ok(Algorithm::Crc(p)) if p == CrcParams::CRC32_ISO_HDLC));
    assert!(matches!(parse_algorithm("Checksum16"), Ok(Algorithm::Sum(s)) if s.width() == 16));
    assert!(matches!(parse_algorithm("ChecksumXor(64)"), Ok(Algorithm::Xor(x)) if x.width() == 64));
    assert!(parse_algorithm("Checksum12").is_err());
    assert!(parse_algorithm("CRC-99/NOPE").is_err());
  }

  #[test]
  fn parses_command_lines() {
    let cmd = parse_args(&args(&["CRC-32C", "-b", "in.bin", "out.bin"])).unwrap();
    assert!(matches!(
      cmd,
      Command::Compute { format: Format::BytesLittle, input: Some(ref i), output: Some(ref o), .. }
        if i == "in.bin" && o == "out.bin"
    ));
    let cmd = parse_args(&args(&["XMODEM", "-"])).unwrap();
    assert!(matches!(cmd, Command::Compute { format: Format::HexPrefixed, input: None, output: None, .. }));
    assert!(matches!(parse_args(&args(&["--list"])), Ok(Command::List)));
    assert!(parse_args(&args(&["XMODEM", "-x"])).is_err());
    assert!(parse_args(&args(&["XMODEM", "-h", "a", "b", "c"])).is_err());
    assert!(parse_args(&[]).is_err());
  }

  #[test]
  fn renders_formats() {
    let outcome = digest_with(&Algorithm::Crc(CrcParams::CRC16_MODBUS), &b"123456789"[..]).unwrap();
    assert_eq!(render(&outcome, Format::HexPrefixed), b"0x4B37\n");
    assert_eq!(render(&outcome, Format::Hex), b"4B37\n");
    assert_eq!(render(&outcome, Format::Decimal), b"19255\n");
    assert_eq!(render(&outcome, Format::BytesBig), [0x4B, 0x37]);
    assert_eq!(render(&outcome, Format::BytesLittle), [0x37, 0x4B]);
  }

  #[test]
  fn parses_integers() {
    assert_eq!(parse_int("0xFF"), Ok(255));
    assert_eq!(parse_int("1_000"), Ok(1000));
    assert_eq!(parse_int("0b101"), Ok(5));
    assert!(parse_int("ten").is_err());
    assert_eq!(parse_bool("True"), Ok(true));
    assert!(parse_bool("yes").is_err());
  }
}
