//! List Big Int \
//! This crate provides:
//! - [`DigitList`]: an ordered list of base `10^9` digits with a movable cursor.
//! - [`BigInt`]: signed arbitrary-precision integers whose magnitude is a [`DigitList`],
//!   with schoolbook multiplication ([`BigInt::multiply`], [`multiply`]).

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod digit_list;
mod error;
mod multiply;

pub use big_int::BigInt;
pub use big_num_constants::{BASE, POWER};
pub use digit_list::DigitList;
pub use error::{Error, Operand, Result};
pub use multiply::multiply;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".into();
        let b: BigInt = "-900000000000".into();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
    }
}
