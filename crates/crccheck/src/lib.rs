//! Generic parametrized CRC engine, preset catalogue, and word checksums.
//!
//! One engine type ([`Crc`]) reproduces any CRC variant from a declarative
//! [`CrcParams`]: width 1..=128 bits, any polynomial, any initial value,
//! optional input/output reflection and an output XOR mask. The named
//! variants of the reveng catalogue are plain data in [`catalog`].
//!
//! # Contents
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`CrcParams`] | Immutable parameter set, with common presets as constants |
//! | [`Crc`] | Streaming engine bound to a parameter set |
//! | [`CrcTable`] | Parameter set plus a 256-entry lookup table |
//! | [`catalog`] | Every named preset, looked up by name or alias |
//! | [`SumChecksum`], [`XorChecksum`] | Additive and XOR word checksums |
//! | [`config`] | Kernel selection for the one-shot `calc` family |
//!
//! # Example
//!
//! ```rust
//! use crccheck::{ByteOrder, Crc, CrcParams, catalog};
//!
//! // A preset constant
//! assert_eq!(Crc::calc(&CrcParams::CRC32_ISO_HDLC, b"123456789"), 0xCBF4_3926);
//!
//! // A catalogue entry, streamed
//! let algo = catalog::find("CRC-16/MODBUS").unwrap();
//! let mut crc = Crc::new(algo.params());
//! crc.process(b"12345").process(b"6789");
//! assert_eq!(crc.final_hex(ByteOrder::Little), "374b");
//!
//! // A user-defined parameter set
//! let params = CrcParams::new(12, 0x80F, 0, 0)?.with_reflect_out(true);
//! assert_eq!(Crc::calc(&params, b"123456789"), 0xDAF);
//! # Ok::<(), crccheck::ConfigError>(())
//! ```
//!
//! # Input
//!
//! [`Crc::process`] takes byte slices; [`Crc::process_bytes`] takes any
//! iterator of bytes. [`Crc::try_process`] takes wider integers and rejects
//! the whole batch, leaving the register untouched, if any value is outside
//! `0..=255`.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! crccheck = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod common;

pub mod catalog;
pub mod config;
mod crc;
mod params;
mod sum;
mod table;

pub use common::reflect::{REFLECT_BYTE, reflect_bits};
pub use config::{CrcConfig, CrcForce, CrcKernel, CrcTunables};
pub use crc::Crc;
pub use params::{CHECK_INPUT, CrcParams, MAX_WIDTH};
pub use sum::{CHECKSUM_CHECK_DATA, SumChecksum, XorChecksum};
pub use table::CrcTable;
// Re-export traits for convenience
#[cfg(feature = "std")]
pub use traits::io;
pub use traits::{ByteOrder, CheckBytes, CheckMismatch, Checksum, ConfigError, InputDomainError};
