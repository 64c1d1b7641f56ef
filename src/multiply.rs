//! Schoolbook long multiplication in base `10^9`.
//!
//! Operands are only borrowed, so their digits, sign and list cursor are left as they
//! were. The product is accumulated in a little-endian scratch buffer of
//! `len(a) + len(b)` digits and loaded into the destination once done.

use std::ops::{Mul, MulAssign};

use tracing::{error, instrument, trace};

use crate::big_num_constants::BASE;
use crate::digit_list::DigitList;
use crate::error::{Error, Operand, Result};
use crate::BigInt;

/// `p = a * b`, with unset operands reported instead of dereferenced.
///
/// An unset `p` is filled with a fresh [`BigInt`] rather than rejected. On error `p`
/// is not touched.
pub fn multiply<'p>(
    p: &'p mut Option<BigInt>,
    a: Option<&BigInt>,
    b: Option<&BigInt>,
) -> Result<&'p mut BigInt> {
    let a = match a {
        Some(a) => a,
        None => return Err(null_reference(Operand::A)),
    };
    let b = match b {
        Some(b) => b,
        None => return Err(null_reference(Operand::B)),
    };
    let p = p.get_or_insert_with(BigInt::new);
    p.multiply(a, b);
    Ok(p)
}

fn null_reference(operand: Operand) -> Error {
    let err = Error::NullReference { op: "multiply", operand };
    error!("{}", err);
    err
}

// 实现乘法
impl BigInt {
    /// `self = a * b`, overwriting the previous sign and digits.
    #[instrument(skip_all, level = "trace")]
    pub fn multiply(&mut self, a: &BigInt, b: &BigInt) {
        self.make_zero();

        if a.is_zero() || b.is_zero() {
            trace!("zero operand");
            return;
        }

        let sign = if a.sign == b.sign { 1 } else { -1 };
        trace!(a_len = a.digits.len(), b_len = b.digits.len(), sign);

        let product = BigInt::mul_to_len(&a.digits, &b.digits);
        *self = BigInt::from_le(product, sign);
    }

    fn mul_to_len(x: &DigitList, y: &DigitList) -> Vec<i64> {
        let x_len = x.len();
        // here: x_len > 0, y.len() > 0
        let mut z = vec![0_i64; x_len + y.len()];

        for (y_index, y_digit) in y.iter_le().enumerate() {
            let mut carry = 0_i64;
            let mut z_index = y_index;
            for x_digit in x.iter_le() {
                // < BASE^2, so i64 never overflows
                let product = x_digit * y_digit + carry;
                carry = product / BASE;
                let appending = product % BASE;

                // slots not reached by an earlier pass are still 0
                let sum = z[z_index] + appending;
                z[z_index] = sum % BASE;
                carry += sum / BASE;

                z_index += 1;
            }
            // z[y_index + x_len] is past everything written so far
            z[z_index] = carry;
        }

        z
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        let mut p = BigInt::new();
        p.multiply(self, rhs);
        p
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

#[test]
fn test_mul_to_len() {
    let x = DigitList::from(vec![999999999, 999999999]);
    let z = BigInt::mul_to_len(&x, &x);
    assert_eq!(z, vec![1, 0, 999999998, 999999999]);

    let x = DigitList::from(vec![7]);
    let y = DigitList::from(vec![6]);
    assert_eq!(BigInt::mul_to_len(&x, &y), vec![42, 0]);

    let x = DigitList::from(vec![999999999]);
    let y = DigitList::from(vec![2]);
    assert_eq!(BigInt::mul_to_len(&x, &y), vec![999999998, 1]);
}

#[test]
fn test_mul_no_carry() {
    let a: BigInt = "1000000002000000003".into();
    let b: BigInt = "3".into();
    assert_eq!((&a * &b).to_string(), "3000000006000000009");
    assert_eq!((&b * &a).to_string(), "3000000006000000009");
}

#[test]
fn test_mul_overwrites_destination() {
    let mut p: BigInt = "-123456789123456789123".into();
    p.digits_mut().move_front();
    let a: BigInt = "-4".into();
    let b: BigInt = "-5".into();
    p.multiply(&a, &b);
    assert_eq!(p.to_string(), "20");
    assert_eq!(p.digits().len(), 1);
    assert_eq!(p.digits().index(), None);
}

#[test]
fn test_mul_by_zero_representations() {
    let a: BigInt = "-999999999999".into();
    let single_zero = BigInt { sign: 1, digits: DigitList::from(vec![0]) };
    let mut p: BigInt = 5.into();
    p.multiply(&a, &single_zero);
    assert!(p.digits().is_empty());
    assert_eq!(p.sign, 1);
}

#[test]
fn test_mul_assign() {
    let mut a: BigInt = "-1000000000".into();
    a *= &BigInt::from(1000000000);
    assert_eq!(a.to_string(), "-1000000000000000000");
    a *= BigInt::from(-1);
    assert_eq!(a.to_string(), "1000000000000000000");
    assert_eq!((a * BigInt::new()).to_string(), "0");
}

#[test]
fn test_multiply_option_api() {
    let a: BigInt = "7".into();
    let b: BigInt = "6".into();

    let mut p = None;
    let got = multiply(&mut p, Some(&a), Some(&b)).unwrap();
    assert_eq!(got.to_string(), "42");
    assert_eq!(p, Some(BigInt::from(42)));

    let mut p = Some(BigInt::from(9));
    assert_eq!(
        multiply(&mut p, None, Some(&b)).unwrap_err(),
        Error::NullReference { op: "multiply", operand: Operand::A }
    );
    assert_eq!(
        multiply(&mut p, Some(&a), None).unwrap_err(),
        Error::NullReference { op: "multiply", operand: Operand::B }
    );
    assert_eq!(p, Some(BigInt::from(9)));

    let mut unset = None;
    assert!(multiply(&mut unset, None, None).is_err());
    assert!(unset.is_none());
}
