//! # BigInt
//! Arbitrary-precision signed integers. The magnitude is a [`DigitList`] of base `10^9`
//! digits, most-significant first; the sign is kept apart as `+1` or `-1`.
//! Zero is always positive with no digits.
//! # Example
//! ```
//! use list_bigint::BigInt;
//!
//! let a: BigInt = "999999999999999999".into();
//! let b: BigInt = "-2".into();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! ```
//!

use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Neg,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use crate::big_num_constants::*;
use crate::big_num_cache::*;
use crate::digit_list::DigitList;
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct BigInt {
    pub(crate) sign: i8,
    pub(crate) digits: DigitList,
}

// 实现构造
impl BigInt {
    /// Canonical zero.
    pub fn new() -> Self {
        BigInt { sign: 1, digits: DigitList::new() }
    }
    /// `digits` is most-significant first. Leading zeros are dropped, and an
    /// all-zero magnitude comes back as canonical zero.
    pub(crate) fn from_raw(digits: Vec<i64>, sign: i8) -> Self {
        let mut digits = DigitList::from(digits);
        digits.trim_leading_zeros();
        let sign = if digits.is_empty() { 1 } else { sign };
        BigInt { sign, digits }
    }
    /// Builds from a least-significant first buffer.
    pub(crate) fn from_le(mut mag: Vec<i64>, sign: i8) -> Self {
        mag.reverse();
        BigInt::from_raw(mag, sign)
    }
    /// Deep copy; the copy's cursor starts undefined.
    pub fn copy(&self) -> Self {
        let mut digits = DigitList::with_capacity(self.digits.len());
        for d in self.digits.iter() {
            digits.append(d);
        }
        BigInt { sign: self.sign, digits }
    }
    /// Resets to canonical zero, discarding the digits.
    pub fn make_zero(&mut self) {
        self.sign = 1;
        self.digits.clear();
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::new()
    }
}

// 实现访问
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| d == 0)
    }
    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.is_zero() { 0 } else { self.sign }
    }
    pub fn digits(&self) -> &DigitList {
        &self.digits
    }
    /// The caller keeps the digits in `[0, BASE)` without leading zeros.
    pub fn digits_mut(&mut self) -> &mut DigitList {
        &mut self.digits
    }
    pub fn equals(&self, other: &BigInt) -> bool {
        self == other
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.sign < 0 {
            f.write_str("-")?;
        }
        let mut iter = self.digits.iter().skip_while(|d| *d == 0);
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for d in iter {
            write!(f, "{:0width$}", d, width = POWER as usize)?;
        }
        Ok(())
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let (sign, body) = match val.as_bytes().first() {
            Some(b'+') => (1, &val[1..]),
            Some(b'-') => (-1, &val[1..]),
            _ => (1, val),
        };
        if body.is_empty() || !body.bytes().all(|c| c.is_ascii_digit()) {
            return Err(Error::Parse(val.to_string()));
        }

        let body = body.trim_start_matches('0');
        if body.is_empty() {
            return Ok(BigInt::new());
        }

        // 从低位开始，每 POWER 个十进制位组成一个 digit
        let bytes = body.as_bytes();
        let power = POWER as usize;
        let mut mag = Vec::with_capacity(bytes.len() / power + 1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(power);
            let digit = bytes[start..end]
                .iter()
                .fold(0_i64, |acc, c| acc * 10 + (c - b'0') as i64);
            mag.push(digit);
            end = start;
        }
        Ok(BigInt::from_le(mag, sign))
    }
}

impl From<&str> for BigInt {
    fn from(val: &str) -> Self {
        match val.parse() {
            Ok(big) => big,
            Err(e) => panic!("{}", e),
        }
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, 1)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            if val < 0 {
                BigInt::value_of(val.unsigned_abs() as u64, -1)
            } else {
                BigInt::value_of(val as u64, 1)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, usize, u64);
impl_signed_to_big_num!(i8, i16, i32, isize, i64);

impl BigInt {
    fn value_of(mut val: u64, sign: i8) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            if sign == 1 {
                return POS_CACHE[val as usize].clone();
            } else {
                return NEG_CACHE[val as usize].clone();
            }
        }
        let mut mag = Vec::with_capacity(3);
        while val != 0 {
            mag.push((val % BASE as u64) as i64);
            val /= BASE as u64;
        }
        BigInt::from_le(mag, sign)
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.digits.iter().zip(other.digits.iter()) {
            if a != b {
                return a.cmp(&b);
            }
        }

        Ordering::Equal
    }
    pub fn compare(&self, other: &BigInt) -> Ordering {
        self.cmp(other)
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => true,
            (false, false) => self.sign == other.sign && self.digits == other.digits,
            _ => false,
        }
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => {},
            ord => return ord,
        }
        if self.signum() == 0 {
            Ordering::Equal
        } else if self.signum() > 0 {
            self.compare_mag(other)
        } else {
            self.compare_mag(other).reverse()
        }
    }
}

// 实现取反
impl BigInt {
    /// Flips the sign in place. Zero stays positive.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.copy().neg()
    }
}

// 实现加减法
impl BigInt {
    /// `self = a + b`
    ///
    /// With [`std::ops::Add`] in scope, `s.add(&a, &b)` resolves to the trait method;
    /// call it as `BigInt::add(&mut s, &a, &b)` there.
    pub fn add(&mut self, a: &BigInt, b: &BigInt) {
        *self = BigInt::add_signed(a, b, b.sign);
    }
    /// `self = a - b`
    pub fn subtract(&mut self, a: &BigInt, b: &BigInt) {
        *self = BigInt::add_signed(a, b, -b.sign);
    }
    fn add_signed(a: &BigInt, b: &BigInt, b_sign: i8) -> BigInt {
        if b.is_zero() {
            return a.copy();
        }
        if a.is_zero() {
            return BigInt::from_raw(b.digits.iter().collect(), b_sign);
        }

        if a.sign == b_sign {
            return BigInt::from_le(BigInt::add_mag(&a.digits, &b.digits), a.sign);
        }

        match a.compare_mag(b) {
            Ordering::Less => BigInt::from_le(BigInt::sub_mag(&b.digits, &a.digits), b_sign),
            Ordering::Equal => BigInt::new(),
            Ordering::Greater => BigInt::from_le(BigInt::sub_mag(&a.digits, &b.digits), a.sign),
        }
    }
    fn add_mag(x: &DigitList, y: &DigitList) -> Vec<i64> {
        let len = x.len().max(y.len());
        let mut result = Vec::with_capacity(len + 1);
        let mut x_iter = x.iter_le();
        let mut y_iter = y.iter_le();
        let mut carry = 0;
        for _ in 0..len {
            let sum = x_iter.next().unwrap_or(0) + y_iter.next().unwrap_or(0) + carry;
            result.push(sum % BASE);
            carry = sum / BASE;
        }
        if carry != 0 {
            result.push(carry);
        }
        result
    }
    /// `big - little`, assuming `|big| >= |little|`.
    fn sub_mag(big: &DigitList, little: &DigitList) -> Vec<i64> {
        let mut result = Vec::with_capacity(big.len());
        let mut little_iter = little.iter_le();
        let mut borrow = 0;
        for b in big.iter_le() {
            let mut difference = b - little_iter.next().unwrap_or(0) - borrow;
            if difference < 0 {
                difference += BASE;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(difference);
        }
        result
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        BigInt::add_signed(self, rhs, rhs.sign)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = &*self + rhs;
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        BigInt::add_signed(self, rhs, -rhs.sign)
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = &*self - rhs;
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

#[test]
fn test_from() {
    let big: BigInt = 12_i8.into();
    assert_eq!(big.digits.iter().collect::<Vec<_>>(), vec![12]);
    assert_eq!(big.signum(), 1);

    let big: BigInt = (-100_i16).into();
    assert_eq!(big.digits.iter().collect::<Vec<_>>(), vec![100]);
    assert_eq!(big.signum(), -1);

    let big: BigInt = 0_u32.into();
    assert!(big.digits.is_empty());
    assert_eq!(big.sign, 1);

    let big: BigInt = (-3_i64).into();
    assert_eq!(big, NEG_CACHE[3]);
    assert_eq!(big.sign, -1);

    let big: BigInt = i64::MIN.into();
    assert_eq!(big.digits.iter().collect::<Vec<_>>(), vec![9, 223372036, 854775808]);
    assert_eq!(big.signum(), -1);

    let big: BigInt = u64::MAX.into();
    assert_eq!(big.to_string(), "18446744073709551615");
}

#[test]
fn test_parse() {
    let a: BigInt = "123456789123456789".into();
    assert_eq!(a.digits.iter().collect::<Vec<_>>(), vec![123456789, 123456789]);

    let a: BigInt = "-1000000000".into();
    assert_eq!(a.digits.iter().collect::<Vec<_>>(), vec![1, 0]);
    assert_eq!(a.signum(), -1);

    let a: BigInt = "+0000042".into();
    assert_eq!(a, BigInt::from(42));

    let a: BigInt = "-000".into();
    assert!(a.digits.is_empty());
    assert_eq!(a.sign, 1);

    assert_eq!("".parse::<BigInt>(), Err(Error::Parse(String::new())));
    assert_eq!("-".parse::<BigInt>(), Err(Error::Parse("-".to_string())));
    assert_eq!("12a".parse::<BigInt>(), Err(Error::Parse("12a".to_string())));
    assert!("1-2".parse::<BigInt>().is_err());
}

#[test]
fn test_to_string() {
    let origin = "12345678909876523784950683472613487560983287654321";
    let a: BigInt = origin.into();
    assert_eq!(a.to_string(), origin);

    let a: BigInt = "-1000000000000000001".into();
    assert_eq!(a.to_string(), "-1000000000000000001");

    assert_eq!(BigInt::new().to_string(), "0");
}

#[test]
fn test_cache() {
    assert!(POS_CACHE[0].digits.is_empty());
    assert_eq!(POS_CACHE[0].sign, 1);
    assert!(NEG_CACHE[0].digits.is_empty());
    assert_eq!(NEG_CACHE[0].sign, 1);
    for i in 1..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[i].digits.iter().collect::<Vec<_>>(), vec![i as i64]);
        assert_eq!(POS_CACHE[i].sign, 1);
        assert_eq!(NEG_CACHE[i], -&POS_CACHE[i]);
    }
    assert_eq!(BigInt::from(-16).to_string(), "-16");
    assert_eq!(BigInt::from(17_u8).to_string(), "17");
}

#[test]
fn test_from_raw_trims() {
    let a = BigInt::from_raw(vec![0, 0, 12, 0], -1);
    assert_eq!(a.digits.iter().collect::<Vec<_>>(), vec![12, 0]);
    assert_eq!(a.to_string(), "-12000000000");

    let z = BigInt::from_raw(vec![0, 0], -1);
    assert!(z.digits.is_empty());
    assert_eq!(z.sign, 1);
}

#[test]
fn test_zero_representations() {
    let empty = BigInt::new();
    let single = BigInt { sign: 1, digits: DigitList::from(vec![0]) };
    assert!(single.is_zero());
    assert_eq!(empty, single);
    assert!(empty.equals(&single));
    assert_eq!(single.signum(), 0);
    assert_eq!(single.to_string(), "0");

    let mut a: BigInt = "-77".into();
    a.make_zero();
    assert_eq!(a, empty);
    assert_eq!(a.sign, 1);
}

#[test]
fn test_copy_is_independent() {
    let mut a: BigInt = "-5000000000".into();
    a.digits_mut().move_back();
    let mut b = a.copy();
    assert_eq!(b.digits().index(), None);
    b.digits_mut().move_front();
    b.digits_mut().set(7).unwrap();
    assert_eq!(a.to_string(), "-5000000000");
    assert_eq!(b.to_string(), "-7000000000");
    assert_eq!(a.digits().index(), Some(1));
}

#[test]
fn test_compare() {
    let a: BigInt = "-10".into();
    let b: BigInt = "-9".into();
    let c: BigInt = "0".into();
    let d: BigInt = "1000000000".into();
    let e: BigInt = "999999999".into();
    assert!(a < b);
    assert!(b < c);
    assert!(c < e);
    assert!(e < d);
    assert_eq!(d.compare(&d.copy()), Ordering::Equal);
}

#[test]
fn test_negate() {
    let mut a: BigInt = "15".into();
    a.negate();
    assert_eq!(a.to_string(), "-15");
    assert_eq!((-&a).to_string(), "15");

    let mut z = BigInt::new();
    z.negate();
    assert_eq!(z.sign, 1);
}

#[test]
fn test_add_sub() {
    let a: BigInt = "999999999999999999".into();
    let one: BigInt = 1.into();
    assert_eq!(&a + &one, BigInt::from("1000000000000000000"));
    assert_eq!(&one - &a, BigInt::from("-999999999999999998"));
    assert_eq!(&a - &a, BigInt::new());

    let b: BigInt = "-1000000000".into();
    assert_eq!(&b + &one, BigInt::from("-999999999"));
    assert_eq!(&one + &b, BigInt::from("-999999999"));
    assert_eq!(&b - &b, BigInt::new());
    assert_eq!(&b - &one, BigInt::from("-1000000001"));

    let mut s = BigInt::new();
    BigInt::add(&mut s, &a, &b);
    assert_eq!(s.to_string(), "999999998999999999");
    let prev = s.copy();
    s.subtract(&prev, &a);
    assert_eq!(s, b);

    let mut t: BigInt = 5.into();
    t += BigInt::from(-7);
    assert_eq!(t, BigInt::from(-2));
    t -= &BigInt::from(-2);
    assert!(t.is_zero());
}
