use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::from_raw(vec![i as i64], 1));
    // from_raw turns index 0 into the canonical (positive) zero
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::from_raw(vec![i as i64], -1));
}
