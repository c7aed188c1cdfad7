use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use alloc::string::String;

use num_bigint::{BigInt, ParseBigIntError, ToBigInt};
use num_traits::float::FloatCore;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

use crate::fixnum::Fixnum;
use crate::{InvalidRadixError, TryFromIntError, TypeError};

/// This enum unifies the fixed-width and arbitrary precision integral types
/// in Garnet.
///
/// It is the output of every fixnum operation with a promotion path: a
/// result the fixed width can hold comes back as [`Integer::Fixnum`], and
/// anything else as the exact value in an [`Integer::Bignum`]. Arithmetic
/// over bignum operands belongs to the bignum side of the tower; this crate
/// only ever constructs, normalizes, compares, parses and renders them.
#[derive(Debug, Clone, Hash)]
pub enum Integer {
    Fixnum(Fixnum),
    Bignum(BigInt),
}

impl Integer {
    #[inline]
    pub fn new(i: i64) -> Self {
        if i < Fixnum::MIN_VALUE || i > Fixnum::MAX_VALUE {
            Self::Bignum(i.into())
        } else {
            Self::Fixnum(Fixnum(i))
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Fixnum(num) => num.is_zero(),
            Self::Bignum(num) => num.is_zero(),
        }
    }

    pub fn is_fixnum(&self) -> bool {
        matches!(self, Self::Fixnum(_))
    }

    pub fn is_bignum(&self) -> bool {
        matches!(self, Self::Bignum(_))
    }

    pub fn abs(&self) -> Self {
        match self {
            Self::Fixnum(num) => num.abs(),
            Self::Bignum(num) => Self::Bignum(num.abs()),
        }
    }

    /// Parse a string in the given radix, taking the fixed-width fast path
    /// when the value fits. Returns `None` for an unparseable string or a
    /// radix outside `2..=36`.
    pub fn from_string_radix(string: &str, radix: u32) -> Option<Self> {
        if !(2..=36).contains(&radix) {
            return None;
        }
        if let Ok(i) = i64::from_str_radix(string, radix) {
            return Some(Self::new(i));
        }
        let bi = BigInt::parse_bytes(string.as_bytes(), radix)?;
        Some(bi.into())
    }

    /// Render the value in the given radix using the digits `0-9` then
    /// `a-z`.
    pub fn to_string_radix(&self, radix: u32) -> Result<String, InvalidRadixError> {
        match self {
            Self::Fixnum(num) => num.to_string_radix(radix),
            Self::Bignum(num) => {
                if !(2..=36).contains(&radix) {
                    return Err(InvalidRadixError(radix));
                }
                Ok(num.to_str_radix(radix))
            }
        }
    }

    pub fn to_usize(&self) -> Option<usize> {
        match self {
            Self::Fixnum(num) => num.0.try_into().ok(),
            Self::Bignum(num) => num.to_usize(),
        }
    }

    /// Determines the fewest bits necessary to express this value, not
    /// including the sign
    pub fn bits(&self) -> u64 {
        match self {
            Self::Fixnum(num) => num.bits() as u64,
            Self::Bignum(num) => num.bits(),
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Fixnum(int) => int.fmt(f),
            Self::Bignum(int) => int.fmt(f),
        }
    }
}

impl FromStr for Integer {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, ParseBigIntError> {
        match s.parse::<i64>() {
            Ok(i) => Ok(Self::new(i)),
            Err(_) => match s.parse::<BigInt>() {
                Ok(int) => Ok(int.into()),
                Err(err) => Err(err),
            },
        }
    }
}

impl Eq for Integer {}
impl PartialEq for Integer {
    fn eq(&self, rhs: &Integer) -> bool {
        match (self, rhs) {
            (Self::Fixnum(lhs), Self::Fixnum(rhs)) => lhs.eq(rhs),
            (Self::Fixnum(lhs), Self::Bignum(rhs)) => {
                if let Some(ref i) = rhs.to_i64() {
                    return lhs.0.eq(i);
                }
                false
            }
            (Self::Bignum(lhs), Self::Fixnum(rhs)) => {
                if let Some(ref i) = lhs.to_i64() {
                    return i.eq(&rhs.0);
                }
                false
            }
            (Self::Bignum(lhs), Self::Bignum(rhs)) => lhs.eq(rhs),
        }
    }
}
impl PartialEq<Fixnum> for Integer {
    fn eq(&self, rhs: &Fixnum) -> bool {
        match self {
            Self::Fixnum(lhs) => lhs.eq(rhs),
            Self::Bignum(lhs) => match lhs.to_i64() {
                Some(i) => i.eq(&rhs.0),
                None => false,
            },
        }
    }
}
impl PartialEq<Integer> for Fixnum {
    fn eq(&self, rhs: &Integer) -> bool {
        rhs.eq(self)
    }
}
impl PartialEq<i64> for Integer {
    fn eq(&self, rhs: &i64) -> bool {
        match self {
            Self::Fixnum(lhs) => lhs.0.eq(rhs),
            Self::Bignum(lhs) => {
                let rhs = BigInt::from(*rhs);
                lhs.eq(&rhs)
            }
        }
    }
}
impl PartialEq<Integer> for i64 {
    fn eq(&self, rhs: &Integer) -> bool {
        rhs.eq(self)
    }
}
impl PartialEq<BigInt> for Integer {
    fn eq(&self, rhs: &BigInt) -> bool {
        match self {
            Self::Fixnum(lhs) => lhs.eq(rhs),
            Self::Bignum(lhs) => lhs.eq(rhs),
        }
    }
}

impl Ord for Integer {
    fn cmp(&self, rhs: &Self) -> Ordering {
        match (self, rhs) {
            (Self::Fixnum(lhs), Self::Fixnum(rhs)) => lhs.cmp(rhs),
            (Self::Fixnum(lhs), Self::Bignum(rhs)) => {
                let lhs = BigInt::from(lhs.0);
                lhs.cmp(rhs)
            }
            (Self::Bignum(lhs), Self::Fixnum(rhs)) => {
                let rhs = BigInt::from(rhs.0);
                lhs.cmp(&rhs)
            }
            (Self::Bignum(lhs), Self::Bignum(rhs)) => lhs.cmp(rhs),
        }
    }
}
impl PartialOrd for Integer {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl PartialOrd<i64> for Integer {
    fn partial_cmp(&self, rhs: &i64) -> Option<Ordering> {
        match self {
            Self::Fixnum(lhs) => lhs.0.partial_cmp(rhs),
            Self::Bignum(lhs) => {
                let rhs = BigInt::from(*rhs);
                lhs.partial_cmp(&rhs)
            }
        }
    }
}
impl PartialOrd<Integer> for i64 {
    fn partial_cmp(&self, rhs: &Integer) -> Option<Ordering> {
        rhs.partial_cmp(self).map(|v| v.reverse())
    }
}
impl PartialOrd<Fixnum> for Integer {
    fn partial_cmp(&self, rhs: &Fixnum) -> Option<Ordering> {
        self.partial_cmp(&rhs.0)
    }
}
impl PartialOrd<Integer> for Fixnum {
    fn partial_cmp(&self, rhs: &Integer) -> Option<Ordering> {
        rhs.partial_cmp(self).map(|v| v.reverse())
    }
}

impl ToBigInt for Integer {
    fn to_bigint(&self) -> Option<BigInt> {
        match self {
            Self::Fixnum(int) => Some(BigInt::from(int.0)),
            Self::Bignum(num) => Some(num.clone()),
        }
    }
}

impl ToPrimitive for Integer {
    fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Fixnum(int) => Some(int.0),
            Self::Bignum(int) => int.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Fixnum(int) => int.0.to_u64(),
            Self::Bignum(int) => int.to_u64(),
        }
    }
}

impl FromPrimitive for Integer {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::new(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(n.into())
    }
}

impl From<u8> for Integer {
    #[inline(always)]
    fn from(i: u8) -> Self {
        Self::Fixnum(Fixnum(i.into()))
    }
}
impl From<u16> for Integer {
    #[inline(always)]
    fn from(i: u16) -> Self {
        Self::Fixnum(Fixnum(i.into()))
    }
}
impl From<u32> for Integer {
    #[inline(always)]
    fn from(i: u32) -> Self {
        Self::Fixnum(Fixnum(i.into()))
    }
}
impl From<i8> for Integer {
    #[inline(always)]
    fn from(i: i8) -> Self {
        Self::Fixnum(Fixnum(i.into()))
    }
}
impl From<i16> for Integer {
    #[inline(always)]
    fn from(i: i16) -> Self {
        Self::Fixnum(Fixnum(i.into()))
    }
}
impl From<i32> for Integer {
    #[inline(always)]
    fn from(i: i32) -> Self {
        Self::Fixnum(Fixnum(i.into()))
    }
}
impl From<i64> for Integer {
    #[inline(always)]
    fn from(i: i64) -> Self {
        Self::new(i)
    }
}
impl From<isize> for Integer {
    #[inline(always)]
    fn from(i: isize) -> Self {
        Self::new(i as i64)
    }
}
impl From<u64> for Integer {
    fn from(i: u64) -> Self {
        match i64::try_from(i) {
            Ok(int) => Self::new(int),
            Err(_) => Self::Bignum(i.into()),
        }
    }
}
impl From<usize> for Integer {
    fn from(i: usize) -> Self {
        (i as u64).into()
    }
}
impl From<i128> for Integer {
    fn from(i: i128) -> Self {
        if i > Fixnum::MAX_VALUE as i128 || i < Fixnum::MIN_VALUE as i128 {
            Self::Bignum(i.into())
        } else {
            Self::Fixnum(Fixnum(i as i64))
        }
    }
}
impl From<Fixnum> for Integer {
    #[inline(always)]
    fn from(n: Fixnum) -> Self {
        Self::Fixnum(n)
    }
}
impl From<BigInt> for Integer {
    #[inline]
    fn from(i: BigInt) -> Self {
        match i.to_i64() {
            Some(n) if n <= Fixnum::MAX_VALUE && n >= Fixnum::MIN_VALUE => Self::Fixnum(Fixnum(n)),
            Some(_) | None => Self::Bignum(i),
        }
    }
}

impl TryFrom<Integer> for Fixnum {
    type Error = TryFromIntError;

    fn try_from(i: Integer) -> Result<Self, Self::Error> {
        match i {
            Integer::Fixnum(n) => Ok(n),
            Integer::Bignum(n) => Fixnum::try_from(&n),
        }
    }
}
impl TryFrom<Integer> for i64 {
    type Error = TryFromIntError;

    fn try_from(i: Integer) -> Result<Self, Self::Error> {
        match i {
            Integer::Fixnum(n) => Ok(n.0),
            Integer::Bignum(n) => n.to_i64().ok_or(TryFromIntError),
        }
    }
}
impl TryFrom<Integer> for usize {
    type Error = TryFromIntError;

    fn try_from(i: Integer) -> Result<Self, Self::Error> {
        i.to_usize().ok_or(TryFromIntError)
    }
}

/// Conversion of an operand into an integer value.
///
/// The coercion protocol for mixed-type arithmetic is owned by the
/// surrounding numeric tower: it decides which conversions are attempted,
/// and in what order, before an operation gives up on an operand. This
/// trait is the seam the tower plugs into; the integer core only defines
/// the failure kind, [`TypeError`], for an operand with no integer value.
pub trait TryIntoInteger {
    fn try_into_integer(&self) -> Result<Integer, TypeError>;
}

impl TryIntoInteger for Integer {
    fn try_into_integer(&self) -> Result<Integer, TypeError> {
        Ok(self.clone())
    }
}
impl TryIntoInteger for Fixnum {
    fn try_into_integer(&self) -> Result<Integer, TypeError> {
        Ok(Integer::Fixnum(*self))
    }
}
impl TryIntoInteger for i64 {
    fn try_into_integer(&self) -> Result<Integer, TypeError> {
        Ok(Integer::new(*self))
    }
}
impl TryIntoInteger for BigInt {
    fn try_into_integer(&self) -> Result<Integer, TypeError> {
        Ok(self.clone().into())
    }
}
impl TryIntoInteger for f64 {
    /// A float has an integer value only when it is finite and has no
    /// fractional part.
    fn try_into_integer(&self) -> Result<Integer, TypeError> {
        if !self.is_finite() || FloatCore::fract(*self) != 0.0 {
            return Err(TypeError);
        }
        BigInt::from_f64(*self).map(Integer::from).ok_or(TypeError)
    }
}
