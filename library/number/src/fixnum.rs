use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::mem;
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use alloc::string::String;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use static_assertions::const_assert_eq;

use crate::integer::Integer;
use crate::{DivisionError, InvalidRadixError, TryFromIntError};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A fixed-width signed integer, slightly less than 64-bit wide, as the low
/// bits of a word are reserved for the tag of an immediate object reference.
///
/// Every operation with a result the width cannot hold returns the exact
/// value as an [`Integer::Bignum`] instead; nothing here wraps or truncates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Fixnum(pub(crate) i64);

impl Fixnum {
    // NOTE: See the object header layout in the VM for the authoritative
    // source of the tag width
    const TAG_BITS: u32 = 2;

    /// The number of usable bits, sign included.
    pub const NUM_BITS: u32 = 64 - Self::TAG_BITS;
    pub const MIN_VALUE: i64 = -(1 << (Self::NUM_BITS - 1));
    pub const MAX_VALUE: i64 = (1 << (Self::NUM_BITS - 1)) - 1;

    /// Create a new `Fixnum` from an `i64` value, returning `Err` if the
    /// value is out of range
    #[inline]
    pub fn new(i: i64) -> Result<Self, TryFromIntError> {
        if i > Self::MAX_VALUE || i < Self::MIN_VALUE {
            return Err(TryFromIntError);
        }
        Ok(Self(i))
    }

    /// Same as `new`, but panics at runtime if the value is out of range
    #[inline]
    pub unsafe fn new_unchecked(i: i64) -> Self {
        assert!(
            i <= Self::MAX_VALUE,
            "invalid fixnum value ({}), larger than MAX_VALUE ({})",
            i,
            Self::MAX_VALUE
        );
        assert!(
            i >= Self::MIN_VALUE,
            "invalid fixnum value ({}), less than MIN_VALUE ({})",
            i,
            Self::MIN_VALUE
        );
        Self(i)
    }

    /// The underlying machine word.
    #[inline(always)]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The storage width of the fixed representation, in bytes. A constant;
    /// the value held has no effect on it.
    #[inline]
    pub const fn size(self) -> usize {
        mem::size_of::<i64>()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Three-way comparison over the numeric value.
    ///
    /// This is the single comparison primitive; `PartialOrd`/`Ord` and the
    /// four relational operators are all derived from it.
    #[inline]
    pub fn compare(self, other: Self) -> Ordering {
        self.cmp(&other)
    }

    /// The absolute value, promoting on `MIN_VALUE` since its magnitude is
    /// one past `MAX_VALUE`.
    pub fn abs(self) -> Integer {
        match self.0.checked_abs() {
            None => Integer::from(-BigInt::from(self.0)),
            Some(val) => Integer::new(val),
        }
    }

    /// Determines the fewest bits necessary to express this value, not
    /// including the sign
    pub fn bits(self) -> u32 {
        if self.0 >= 0 {
            64 - self.0.leading_zeros()
        } else {
            64 - self.0.leading_ones()
        }
    }

    /// Shift left by `count` bits, promoting whenever any significant bit
    /// would be carried past the fixed width. The exact value `a * 2^count`
    /// is always preserved.
    pub fn shift_left(self, count: u64) -> Integer {
        if self.0 == 0 {
            return Integer::Fixnum(self);
        }
        if count < 64 {
            // A value of this width shifted by fewer than 64 bits always
            // fits in 128 bits, so the wide result is exact
            Integer::from((self.0 as i128) << count)
        } else {
            Integer::Bignum(BigInt::from(self.0) << count)
        }
    }

    /// Arithmetic (sign-extending) shift right by `count` bits. Only ever
    /// discards bits: counts at or past the usable width leave `0` for a
    /// non-negative value and `-1` for a negative one.
    pub fn shift_right(self, count: u64) -> Fixnum {
        if count >= Self::NUM_BITS as u64 {
            Fixnum(if self.0 < 0 { -1 } else { 0 })
        } else {
            Fixnum(self.0 >> count)
        }
    }

    /// Render the value in the given radix using the digits `0-9` then
    /// `a-z`, with a leading `-` for negative values and no leading zeros.
    pub fn to_string_radix(self, radix: u32) -> Result<String, InvalidRadixError> {
        if !(2..=36).contains(&radix) {
            return Err(InvalidRadixError(radix));
        }
        let mut digits = [0u8; Fixnum::NUM_BITS as usize];
        let mut len = 0;
        let mut magnitude = self.0.unsigned_abs();
        loop {
            digits[len] = DIGITS[(magnitude % radix as u64) as usize];
            len += 1;
            magnitude /= radix as u64;
            if magnitude == 0 {
                break;
            }
        }
        let mut out = String::with_capacity(len + 1);
        if self.0 < 0 {
            out.push('-');
        }
        while len > 0 {
            len -= 1;
            out.push(digits[len] as char);
        }
        Ok(out)
    }
}

const_assert_eq!(Fixnum::NUM_BITS + Fixnum::TAG_BITS, i64::BITS);
const_assert_eq!(Fixnum::MIN_VALUE + Fixnum::MAX_VALUE, -1);

impl Debug for Fixnum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Fixnum").field(&self.0).finish()
    }
}
impl Display for Fixnum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl fmt::Binary for Fixnum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

macro_rules! fixnum_binop_trait_impl {
    ($trait:ty, $fun:ident, $checked:ident) => {
        impl $trait for Fixnum {
            type Output = Integer;

            #[inline]
            fn $fun(self, rhs: Fixnum) -> Self::Output {
                match (self.0).$checked(rhs.0) {
                    None => {
                        let lhs = BigInt::from(self.0);
                        Integer::from(lhs.$fun(rhs.0))
                    }
                    Some(val) => Integer::new(val),
                }
            }
        }
    };
}

fixnum_binop_trait_impl!(Add, add, checked_add);
fixnum_binop_trait_impl!(Sub, sub, checked_sub);
fixnum_binop_trait_impl!(Mul, mul, checked_mul);

impl Div for Fixnum {
    type Output = Result<Integer, DivisionError>;

    /// Floored division: the quotient rounds toward negative infinity,
    /// matching the sign rule of `Rem`. The single overflowing case,
    /// `MIN_VALUE / -1`, promotes.
    fn div(self, rhs: Fixnum) -> Self::Output {
        if rhs.0 == 0 {
            return Err(DivisionError);
        }
        Ok(Integer::new(num_integer::Integer::div_floor(
            &self.0, &rhs.0,
        )))
    }
}

impl Rem for Fixnum {
    type Output = Result<Integer, DivisionError>;

    /// Floored modulo: the result takes the divisor's sign (or is zero) and
    /// satisfies `a == b * (a / b) + (a % b)`.
    fn rem(self, rhs: Fixnum) -> Self::Output {
        if rhs.0 == 0 {
            return Err(DivisionError);
        }
        Ok(Integer::new(num_integer::Integer::mod_floor(
            &self.0, &rhs.0,
        )))
    }
}

impl Neg for Fixnum {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Self::Output {
        match self.0.checked_neg() {
            None => Integer::from(-BigInt::from(self.0)),
            Some(val) => Integer::new(val),
        }
    }
}

impl Not for Fixnum {
    type Output = Integer;

    /// One's complement: `!a == -a - 1`. The complement of an in-range
    /// value is itself in range (`!MIN_VALUE == MAX_VALUE`), so this shares
    /// the unary operators' promoting output type without ever taking the
    /// bignum path.
    #[inline]
    fn not(self) -> Self::Output {
        Integer::new(!self.0)
    }
}

macro_rules! fixnum_bitop_trait_impl {
    ($trait:ty, $fun:ident) => {
        impl $trait for Fixnum {
            type Output = Fixnum;

            #[inline]
            fn $fun(self, rhs: Fixnum) -> Self::Output {
                // Bit operations on two in-range words stay in range: the
                // bits above the usable width are sign extension on both
                // sides, and remain so in the result
                Fixnum((self.0).$fun(rhs.0))
            }
        }
    };
}

fixnum_bitop_trait_impl!(BitAnd, bitand);
fixnum_bitop_trait_impl!(BitOr, bitor);
fixnum_bitop_trait_impl!(BitXor, bitxor);

impl Shl<i64> for Fixnum {
    type Output = Integer;

    /// `a << count`. A negative count flips the direction, so `a << -n`
    /// behaves as `a >> n`; the shift primitives themselves only ever move
    /// bits one way.
    #[inline]
    fn shl(self, count: i64) -> Self::Output {
        if count < 0 {
            Integer::Fixnum(self.shift_right(count.unsigned_abs()))
        } else {
            self.shift_left(count as u64)
        }
    }
}

impl Shr<i64> for Fixnum {
    type Output = Integer;

    /// `a >> count`. A negative count flips the direction, so `a >> -n`
    /// behaves as `a << n` and may promote.
    #[inline]
    fn shr(self, count: i64) -> Self::Output {
        if count < 0 {
            self.shift_left(count.unsigned_abs())
        } else {
            Integer::Fixnum(self.shift_right(count as u64))
        }
    }
}

impl PartialEq<i64> for Fixnum {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        self.0.eq(other)
    }
}
impl PartialEq<Fixnum> for i64 {
    #[inline]
    fn eq(&self, other: &Fixnum) -> bool {
        self.eq(&other.0)
    }
}
impl PartialEq<BigInt> for Fixnum {
    #[inline]
    fn eq(&self, other: &BigInt) -> bool {
        match other.to_i64() {
            Some(i) => self.0 == i,
            None => false,
        }
    }
}
impl PartialOrd<i64> for Fixnum {
    #[inline]
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}
impl PartialOrd<BigInt> for Fixnum {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(BigInt::from(self.0).cmp(other))
    }
}

impl From<u8> for Fixnum {
    fn from(n: u8) -> Self {
        unsafe { Self::new_unchecked(n as i64) }
    }
}
impl From<u16> for Fixnum {
    fn from(n: u16) -> Self {
        unsafe { Self::new_unchecked(n as i64) }
    }
}
impl From<u32> for Fixnum {
    fn from(n: u32) -> Self {
        unsafe { Self::new_unchecked(n as i64) }
    }
}
impl From<i8> for Fixnum {
    fn from(n: i8) -> Self {
        unsafe { Self::new_unchecked(n as i64) }
    }
}
impl From<i16> for Fixnum {
    fn from(n: i16) -> Self {
        unsafe { Self::new_unchecked(n as i64) }
    }
}
impl From<i32> for Fixnum {
    fn from(n: i32) -> Self {
        unsafe { Self::new_unchecked(n as i64) }
    }
}
impl TryFrom<i64> for Fixnum {
    type Error = TryFromIntError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}
impl TryFrom<isize> for Fixnum {
    type Error = TryFromIntError;

    fn try_from(n: isize) -> Result<Self, Self::Error> {
        Self::new(n as i64)
    }
}
impl TryFrom<u64> for Fixnum {
    type Error = TryFromIntError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        match n.try_into() {
            Err(_) => Err(TryFromIntError),
            Ok(val) => Self::new(val),
        }
    }
}
impl TryFrom<usize> for Fixnum {
    type Error = TryFromIntError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n.try_into() {
            Err(_) => Err(TryFromIntError),
            Ok(val) => Self::new(val),
        }
    }
}
impl TryFrom<&BigInt> for Fixnum {
    type Error = TryFromIntError;

    fn try_from(n: &BigInt) -> Result<Self, Self::Error> {
        match n.to_i64() {
            Some(i) => Self::new(i),
            None => Err(TryFromIntError),
        }
    }
}
impl From<Fixnum> for i64 {
    #[inline]
    fn from(n: Fixnum) -> Self {
        n.0
    }
}
impl From<Fixnum> for BigInt {
    #[inline]
    fn from(n: Fixnum) -> Self {
        BigInt::from(n.0)
    }
}
impl TryFrom<Fixnum> for i32 {
    type Error = core::num::TryFromIntError;

    fn try_from(n: Fixnum) -> Result<Self, Self::Error> {
        n.0.try_into()
    }
}
impl TryFrom<Fixnum> for u64 {
    type Error = core::num::TryFromIntError;

    fn try_from(n: Fixnum) -> Result<Self, Self::Error> {
        n.0.try_into()
    }
}
impl TryFrom<Fixnum> for usize {
    type Error = core::num::TryFromIntError;

    fn try_from(n: Fixnum) -> Result<Self, Self::Error> {
        n.0.try_into()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use num_bigint::ToBigInt;
    use proptest::prelude::*;

    use super::*;

    fn fix(i: i64) -> Fixnum {
        Fixnum::new(i).unwrap()
    }

    #[test]
    fn add_within_range_returns_fixnum() {
        let sum = fix(1) + fix(2);
        assert!(sum.is_fixnum());
        assert_eq!(sum, Integer::new(3));
    }

    #[test]
    fn add_past_max_value_promotes_to_bignum() {
        let sum = fix(Fixnum::MAX_VALUE) + fix(1);
        assert!(sum.is_bignum());
        assert_eq!(sum, Integer::from(BigInt::from(Fixnum::MAX_VALUE) + 1));
    }

    #[test]
    fn add_min_value_and_negative_one_promotes_to_bignum() {
        let sum = fix(Fixnum::MIN_VALUE) + fix(-1);
        assert!(sum.is_bignum());
        assert_eq!(sum, Integer::from(BigInt::from(Fixnum::MIN_VALUE) - 1));
    }

    #[test]
    fn sub_past_min_value_promotes_to_bignum() {
        let difference = fix(Fixnum::MIN_VALUE) - fix(Fixnum::MAX_VALUE);
        assert!(difference.is_bignum());
        assert_eq!(
            difference,
            Integer::from(BigInt::from(Fixnum::MIN_VALUE) - Fixnum::MAX_VALUE)
        );
    }

    #[test]
    fn mul_out_of_width_promotes_to_bignum() {
        // In range for the machine word, out of range for a fixnum
        let product = fix(1 << 31) * fix(1 << 31);
        assert!(product.is_bignum());
        assert_eq!(product, Integer::from(BigInt::from(1i64 << 31) << 31u32));

        // Out of range even for the machine word
        let product = fix(Fixnum::MAX_VALUE) * fix(Fixnum::MAX_VALUE);
        assert_eq!(
            product,
            Integer::from(BigInt::from(Fixnum::MAX_VALUE) * Fixnum::MAX_VALUE)
        );
    }

    #[test]
    fn div_rounds_toward_negative_infinity() {
        assert_eq!(fix(7) / fix(2), Ok(Integer::new(3)));
        assert_eq!(fix(7) / fix(-2), Ok(Integer::new(-4)));
        assert_eq!(fix(-7) / fix(2), Ok(Integer::new(-4)));
        assert_eq!(fix(-7) / fix(-2), Ok(Integer::new(3)));
    }

    #[test]
    fn rem_takes_the_divisor_sign() {
        assert_eq!(fix(7) % fix(2), Ok(Integer::new(1)));
        assert_eq!(fix(7) % fix(-2), Ok(Integer::new(-1)));
        assert_eq!(fix(-7) % fix(2), Ok(Integer::new(1)));
        assert_eq!(fix(-7) % fix(-2), Ok(Integer::new(-1)));
    }

    #[test]
    fn div_by_zero_returns_error() {
        assert_eq!(fix(7) / fix(0), Err(DivisionError));
        assert_eq!(fix(0) / fix(0), Err(DivisionError));
        assert_eq!(fix(Fixnum::MIN_VALUE) / fix(0), Err(DivisionError));
    }

    #[test]
    fn rem_by_zero_returns_error() {
        assert_eq!(fix(7) % fix(0), Err(DivisionError));
        assert_eq!(fix(-7) % fix(0), Err(DivisionError));
    }

    #[test]
    fn div_min_value_by_negative_one_promotes_to_bignum() {
        let quotient = (fix(Fixnum::MIN_VALUE) / fix(-1)).unwrap();
        assert!(quotient.is_bignum());
        assert_eq!(quotient, Integer::from(-BigInt::from(Fixnum::MIN_VALUE)));
    }

    #[test]
    fn neg_min_value_promotes_to_bignum() {
        let negated = -fix(Fixnum::MIN_VALUE);
        assert!(negated.is_bignum());
        assert_eq!(negated, Integer::from(-BigInt::from(Fixnum::MIN_VALUE)));
    }

    #[test]
    fn neg_within_range_returns_fixnum() {
        assert_eq!(-fix(5), Integer::new(-5));
        assert_eq!(-fix(Fixnum::MAX_VALUE), Integer::new(Fixnum::MIN_VALUE + 1));
    }

    #[test]
    fn not_is_negation_minus_one() {
        assert_eq!(!fix(5), Integer::new(-6));
        assert_eq!(!fix(0), Integer::new(-1));
        assert_eq!(!fix(-1), Integer::new(0));

        let complement = !fix(Fixnum::MIN_VALUE);
        assert!(complement.is_fixnum());
        assert_eq!(complement, Integer::new(Fixnum::MAX_VALUE));
    }

    #[test]
    fn bitops_match_the_word_semantics() {
        assert_eq!(fix(0b1100) & fix(0b1010), fix(0b1000));
        assert_eq!(fix(0b1100) | fix(0b1010), fix(0b1110));
        assert_eq!(fix(0b1100) ^ fix(0b1010), fix(0b0110));
        assert_eq!(fix(-8) & fix(5), fix(-8 & 5));
        assert_eq!(fix(-8) | fix(5), fix(-8 | 5));
        assert_eq!(fix(Fixnum::MIN_VALUE) ^ fix(Fixnum::MAX_VALUE), fix(-1));
    }

    #[test]
    fn shift_left_within_width_returns_fixnum() {
        assert_eq!(fix(1).shift_left(60), Integer::new(1 << 60));
        assert_eq!(fix(-8).shift_left(58), Integer::new(Fixnum::MIN_VALUE));
        assert_eq!(fix(5).shift_left(0), Integer::new(5));
    }

    #[test]
    fn shift_left_out_of_width_promotes_to_bignum() {
        let shifted = fix(1).shift_left(61);
        assert!(shifted.is_bignum());
        assert_eq!(shifted, Integer::from(BigInt::from(1) << 61u32));

        let shifted = fix(-3).shift_left(100);
        assert_eq!(shifted, Integer::from(BigInt::from(-3) << 100u32));
    }

    #[test]
    fn shift_left_of_zero_returns_zero_for_any_count() {
        assert_eq!(fix(0).shift_left(1), Integer::new(0));
        assert_eq!(fix(0).shift_left(10_000), Integer::new(0));
    }

    #[test]
    fn shift_right_is_arithmetic() {
        assert_eq!(fix(7).shift_right(1), fix(3));
        assert_eq!(fix(-8).shift_right(1), fix(-4));
        assert_eq!(fix(-7).shift_right(1), fix(-4));
        assert_eq!(fix(-1).shift_right(30), fix(-1));
    }

    #[test]
    fn shift_right_past_width_leaves_only_the_sign() {
        assert_eq!(fix(123).shift_right(62), fix(0));
        assert_eq!(fix(123).shift_right(10_000), fix(0));
        assert_eq!(fix(-123).shift_right(62), fix(-1));
        assert_eq!(fix(-123).shift_right(10_000), fix(-1));
        assert_eq!(fix(Fixnum::MIN_VALUE).shift_right(61), fix(-1));
        assert_eq!(fix(Fixnum::MAX_VALUE).shift_right(61), fix(0));
    }

    #[test]
    fn shift_operators_flip_direction_on_negative_counts() {
        assert_eq!(fix(16) << -2, Integer::new(4));
        assert_eq!(fix(16) >> -2, Integer::new(64));
        assert_eq!(fix(1) >> -61, Integer::from(BigInt::from(1) << 61u32));
        assert_eq!(fix(-16) << -2, Integer::new(-4));
    }

    #[test]
    fn compare_is_a_total_three_way_ordering() {
        assert_eq!(fix(3).compare(fix(5)), Ordering::Less);
        assert_eq!(fix(5).compare(fix(3)), Ordering::Greater);
        assert_eq!(fix(5).compare(fix(5)), Ordering::Equal);
        assert_eq!(
            fix(Fixnum::MIN_VALUE).compare(fix(Fixnum::MAX_VALUE)),
            Ordering::Less
        );
    }

    #[test]
    fn relational_operators_agree_with_compare() {
        assert!(fix(3) < fix(5));
        assert!(fix(3) <= fix(3));
        assert!(fix(5) > fix(3));
        assert!(fix(5) >= fix(5));
        assert!(fix(-1) < fix(0));
    }

    #[test]
    fn eq_holds_across_representations() {
        assert_eq!(fix(5), 5i64);
        assert_eq!(5i64, fix(5));
        assert_eq!(fix(5), BigInt::from(5));
        assert_ne!(fix(5), BigInt::from(6));
        assert_ne!(fix(5), BigInt::from(i64::MAX) + 1);
    }

    #[test]
    fn to_string_radix_renders_the_standard_alphabet() {
        assert_eq!(fix(-8).to_string_radix(2).unwrap(), "-1000");
        assert_eq!(fix(0).to_string_radix(2).unwrap(), "0");
        assert_eq!(fix(255).to_string_radix(16).unwrap(), "ff");
        assert_eq!(fix(35).to_string_radix(36).unwrap(), "z");
        assert_eq!(fix(100).to_string_radix(10).unwrap(), "100");
        assert_eq!(
            fix(Fixnum::MIN_VALUE).to_string_radix(10).unwrap(),
            "-2305843009213693952"
        );
        assert_eq!(
            fix(Fixnum::MAX_VALUE).to_string_radix(10).unwrap(),
            "2305843009213693951"
        );
    }

    #[test]
    fn to_string_radix_rejects_unsupported_radixes() {
        assert_eq!(fix(1).to_string_radix(0), Err(InvalidRadixError(0)));
        assert_eq!(fix(1).to_string_radix(1), Err(InvalidRadixError(1)));
        assert_eq!(fix(1).to_string_radix(37), Err(InvalidRadixError(37)));
    }

    #[test]
    fn display_renders_radix_ten() {
        assert_eq!(fix(-42).to_string(), "-42");
        assert_eq!(Integer::new(-42).to_string(), "-42");
    }

    #[test]
    fn size_is_the_word_width_in_bytes() {
        assert_eq!(fix(0).size(), 8);
        assert_eq!(fix(Fixnum::MIN_VALUE).size(), 8);
    }

    #[test]
    fn bits_counts_significant_bits() {
        assert_eq!(fix(0).bits(), 0);
        assert_eq!(fix(1).bits(), 1);
        assert_eq!(fix(4).bits(), 3);
        assert_eq!(fix(-1).bits(), 0);
        assert_eq!(fix(Fixnum::MAX_VALUE).bits(), 61);
        assert_eq!(fix(Fixnum::MIN_VALUE).bits(), 61);
    }

    #[test]
    fn is_zero_only_for_zero() {
        assert!(fix(0).is_zero());
        assert!(!fix(1).is_zero());
        assert!(!fix(-1).is_zero());
    }

    proptest! {
        #[test]
        fn addition_promotes_iff_the_exact_sum_is_out_of_range(
            a in Fixnum::MIN_VALUE..=Fixnum::MAX_VALUE,
            b in Fixnum::MIN_VALUE..=Fixnum::MAX_VALUE,
        ) {
            let exact = BigInt::from(a) + BigInt::from(b);
            let result = fix(a) + fix(b);
            let out_of_range = exact < BigInt::from(Fixnum::MIN_VALUE)
                || exact > BigInt::from(Fixnum::MAX_VALUE);
            prop_assert_eq!(result.is_bignum(), out_of_range);
            prop_assert_eq!(result, Integer::from(exact));
        }

        #[test]
        fn subtraction_promotes_iff_the_exact_difference_is_out_of_range(
            a in Fixnum::MIN_VALUE..=Fixnum::MAX_VALUE,
            b in Fixnum::MIN_VALUE..=Fixnum::MAX_VALUE,
        ) {
            let exact = BigInt::from(a) - BigInt::from(b);
            let result = fix(a) - fix(b);
            let out_of_range = exact < BigInt::from(Fixnum::MIN_VALUE)
                || exact > BigInt::from(Fixnum::MAX_VALUE);
            prop_assert_eq!(result.is_bignum(), out_of_range);
            prop_assert_eq!(result, Integer::from(exact));
        }

        #[test]
        fn multiplication_promotes_iff_the_exact_product_is_out_of_range(
            a in Fixnum::MIN_VALUE..=Fixnum::MAX_VALUE,
            b in Fixnum::MIN_VALUE..=Fixnum::MAX_VALUE,
        ) {
            let exact = BigInt::from(a) * BigInt::from(b);
            let result = fix(a) * fix(b);
            let out_of_range = exact < BigInt::from(Fixnum::MIN_VALUE)
                || exact > BigInt::from(Fixnum::MAX_VALUE);
            prop_assert_eq!(result.is_bignum(), out_of_range);
            prop_assert_eq!(result, Integer::from(exact));
        }

        #[test]
        fn div_and_rem_satisfy_the_floored_identity(
            a in Fixnum::MIN_VALUE..=Fixnum::MAX_VALUE,
            b in Fixnum::MIN_VALUE..=Fixnum::MAX_VALUE,
        ) {
            prop_assume!(b != 0);
            let quotient = (fix(a) / fix(b)).unwrap();
            let remainder = (fix(a) % fix(b)).unwrap();

            // a == b * (a / b) + (a % b), over exact arithmetic
            let reassembled = BigInt::from(b) * quotient.to_bigint().unwrap()
                + remainder.to_bigint().unwrap();
            prop_assert_eq!(Integer::from(reassembled), Integer::new(a));

            // the remainder is zero or takes the divisor's sign
            let remainder: i64 = remainder.try_into().unwrap();
            prop_assert!(remainder == 0 || (remainder < 0) == (b < 0));
        }

        #[test]
        fn to_string_radix_round_trips(
            a in Fixnum::MIN_VALUE..=Fixnum::MAX_VALUE,
            radix in 2u32..=36,
        ) {
            let rendered = fix(a).to_string_radix(radix).unwrap();
            let parsed = Integer::from_string_radix(&rendered, radix).unwrap();
            prop_assert_eq!(parsed, Integer::new(a));
        }

        #[test]
        fn shift_left_preserves_the_exact_value(
            a in Fixnum::MIN_VALUE..=Fixnum::MAX_VALUE,
            count in 0u64..200,
        ) {
            let exact = BigInt::from(a) << count;
            prop_assert_eq!(fix(a).shift_left(count), Integer::from(exact));
        }

        #[test]
        fn left_shift_equals_right_shift_by_the_negated_count(
            a in Fixnum::MIN_VALUE..=Fixnum::MAX_VALUE,
            count in 0i64..200,
        ) {
            prop_assert_eq!(fix(a) << count, fix(a) >> -count);
            prop_assert_eq!(fix(a) >> count, fix(a) << -count);
        }
    }
}
