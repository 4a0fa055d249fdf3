//! Core traits and shared types for crccheck.
//!
//! This crate provides the contract every crccheck accumulator conforms to,
//! whether it is a parametrized CRC engine or a plain additive/XOR checksum.
//! It is `no_std` compatible and has zero dependencies.
//!
//! # Contents
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | Incremental reset/update/finalize protocol |
//! | [`ByteOrder`] | Byte order for encoded check values |
//! | [`CheckBytes`] | Fixed-capacity encoded check value (up to 128 bits) |
//! | [`io`] | `Read`/`Write` adapters that checksum data in flight (`std`) |
//!
//! # Error Types
//!
//! - [`ConfigError`] - malformed parameters or unsupported byte order token
//! - [`InputDomainError`] - an input value outside `0..=255`
//! - [`CheckMismatch`] - a self-test produced an unexpected value
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
#[cfg(feature = "std")]
pub mod io;
mod output;

pub use checksum::Checksum;
pub use error::{CheckMismatch, ConfigError, InputDomainError};
pub use output::{ByteOrder, CheckBytes};
