//! Common building blocks for CRC computation.
//!
//! This module provides:
//! - Bit reflection (naive definition, byte table, hardware bit-reverse)
//! - The bitwise reference kernel over a left-aligned `u128` register
//! - Const-fn lookup table generation and the table kernel

pub mod reference;
pub mod reflect;
pub mod tables;

mod proptests;
