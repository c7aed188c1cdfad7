#![no_std]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

use core::fmt;

mod fixnum;
mod integer;

pub use self::fixnum::Fixnum;
pub use self::integer::{Integer, TryIntoInteger};

pub use num_bigint as bigint;
pub use num_bigint::{BigInt, ToBigInt};
pub use num_traits as traits;
pub use num_traits::{FromPrimitive, ToPrimitive, Zero};

/// Division or modulo by zero.
///
/// Overflow is never an error anywhere in this crate; a would-overflow
/// result promotes to a bignum instead. A zero divisor is the only failure
/// the arithmetic operators report.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DivisionError;
impl fmt::Display for DivisionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "divided by 0")
    }
}

/// A radix outside the supported `2..=36` range was given to a string
/// conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidRadixError(pub u32);
impl fmt::Display for InvalidRadixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid radix {} (expected 2..=36)", self.0)
    }
}

/// The operand has no integer value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TypeError;
impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no implicit conversion into Integer")
    }
}

/// The value does not fit within the fixnum range.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TryFromIntError;
impl fmt::Display for TryFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "value out of fixnum range")
    }
}
