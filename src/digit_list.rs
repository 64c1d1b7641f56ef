//! # DigitList
//! An ordered sequence of base `10^9` digits, most-significant digit at the front,
//! with one movable cursor.
//!
//! The cursor is either undefined or points at one element. Inserting elements never
//! changes which element the cursor points at, only its index.
//! # Example
//! ```
//! use list_bigint::DigitList;
//!
//! let mut list = DigitList::new();
//! list.append(2);
//! list.prepend(1);
//! list.move_back();
//! assert_eq!(list.get().unwrap(), 2);
//! list.step_backward();
//! assert_eq!(list.index(), Some(0));
//! ```

use std::collections::VecDeque;
use std::fmt::Display;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct DigitList {
    digits: VecDeque<i64>,
    cursor: Option<usize>,
}

// 实现构造
impl DigitList {
    pub fn new() -> Self {
        DigitList { digits: VecDeque::new(), cursor: None }
    }
    pub fn with_capacity(cap: usize) -> Self {
        DigitList { digits: VecDeque::with_capacity(cap), cursor: None }
    }
    /// Empties the list and undefines the cursor.
    pub fn clear(&mut self) {
        self.digits.clear();
        self.cursor = None;
    }
}

impl From<Vec<i64>> for DigitList {
    /// `digits` is most-significant first.
    fn from(digits: Vec<i64>) -> Self {
        DigitList { digits: digits.into(), cursor: None }
    }
}

// 实现访问
impl DigitList {
    pub fn len(&self) -> usize {
        self.digits.len()
    }
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
    /// Position of the cursor from the front, `None` if undefined.
    pub fn index(&self) -> Option<usize> {
        self.cursor
    }
    pub fn front(&self) -> Option<i64> {
        self.digits.front().copied()
    }
    pub fn get(&self) -> Result<i64> {
        match self.cursor {
            Some(i) => Ok(self.digits[i]),
            None => Err(Error::UndefinedCursor { op: "get" }),
        }
    }
    pub fn set(&mut self, val: i64) -> Result<()> {
        match self.cursor {
            Some(i) => {
                self.digits[i] = val;
                Ok(())
            },
            None => Err(Error::UndefinedCursor { op: "set" }),
        }
    }
    /// Front to back, i.e. most-significant digit first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = i64> + ExactSizeIterator + '_ {
        self.digits.iter().copied()
    }
    /// Back to front, i.e. least-significant digit first.
    pub fn iter_le(&self) -> impl Iterator<Item = i64> + ExactSizeIterator + '_ {
        self.digits.iter().rev().copied()
    }
}

// 实现游标移动
impl DigitList {
    pub fn move_front(&mut self) {
        self.cursor = if self.digits.is_empty() { None } else { Some(0) };
    }
    pub fn move_back(&mut self) {
        self.cursor = self.digits.len().checked_sub(1);
    }
    /// Moves toward the front. Falls off (becomes undefined) at index 0.
    pub fn step_backward(&mut self) {
        self.cursor = self.cursor.and_then(|i| i.checked_sub(1));
    }
    /// Moves toward the back. Falls off (becomes undefined) at the last element.
    pub fn step_forward(&mut self) {
        let len = self.digits.len();
        self.cursor = self.cursor.map(|i| i + 1).filter(|&i| i < len);
    }
}

// 实现插入
impl DigitList {
    pub fn prepend(&mut self, val: i64) {
        self.digits.push_front(val);
        if let Some(i) = self.cursor.as_mut() {
            *i += 1;
        }
    }
    pub fn append(&mut self, val: i64) {
        self.digits.push_back(val);
    }
    /// Inserts `val` right before the cursor element. On an empty list this is the
    /// first element and the cursor stays undefined.
    pub fn insert_before(&mut self, val: i64) -> Result<()> {
        match self.cursor {
            Some(i) => {
                self.digits.insert(i, val);
                self.cursor = Some(i + 1);
                Ok(())
            },
            None if self.digits.is_empty() => {
                self.digits.push_front(val);
                Ok(())
            },
            None => Err(Error::UndefinedCursor { op: "insert_before" }),
        }
    }
    /// Drops zero digits from the front, leaving an empty list for zero.
    pub fn trim_leading_zeros(&mut self) {
        let mut dropped = 0;
        while let Some(0) = self.digits.front() {
            self.digits.pop_front();
            dropped += 1;
        }
        if dropped > 0 {
            self.cursor = self.cursor.and_then(|i| i.checked_sub(dropped));
        }
    }
}

// The cursor is not part of the value.
impl PartialEq for DigitList {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}
impl Eq for DigitList {}

impl Display for DigitList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for d in self.digits.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", d)?;
            first = false;
        }
        Ok(())
    }
}

#[test]
fn test_empty_cursor() {
    let mut list = DigitList::new();
    assert_eq!(list.len(), 0);
    assert_eq!(list.index(), None);
    list.move_front();
    assert_eq!(list.index(), None);
    list.move_back();
    assert_eq!(list.index(), None);
    assert_eq!(list.get(), Err(Error::UndefinedCursor { op: "get" }));
    assert_eq!(list.set(3), Err(Error::UndefinedCursor { op: "set" }));
}

#[test]
fn test_step_and_fall_off() {
    let mut list = DigitList::from(vec![1, 2, 3]);
    list.move_back();
    assert_eq!(list.index(), Some(2));
    list.step_backward();
    list.step_backward();
    assert_eq!(list.get().unwrap(), 1);
    list.step_backward();
    assert_eq!(list.index(), None);
    // undefined stays undefined
    list.step_forward();
    assert_eq!(list.index(), None);

    list.move_front();
    list.step_forward();
    list.step_forward();
    assert_eq!(list.get().unwrap(), 3);
    list.step_forward();
    assert_eq!(list.index(), None);
}

#[test]
fn test_set_at_cursor() {
    let mut list = DigitList::from(vec![5, 6, 7]);
    list.move_front();
    list.step_forward();
    list.set(60).unwrap();
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![5, 60, 7]);
}

#[test]
fn test_insert_keeps_cursor_target() {
    let mut list = DigitList::new();
    list.insert_before(9).unwrap();
    assert_eq!(list.index(), None);
    assert_eq!(list.len(), 1);

    list.move_front();
    list.insert_before(8).unwrap();
    assert_eq!(list.index(), Some(1));
    assert_eq!(list.get().unwrap(), 9);

    list.prepend(7);
    assert_eq!(list.index(), Some(2));
    assert_eq!(list.get().unwrap(), 9);
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![7, 8, 9]);

    list.step_backward();
    list.step_backward();
    list.step_backward();
    assert_eq!(
        list.insert_before(1),
        Err(Error::UndefinedCursor { op: "insert_before" })
    );
}

#[test]
fn test_trim_leading_zeros() {
    let mut list = DigitList::from(vec![0, 0, 4, 0]);
    list.move_back();
    list.trim_leading_zeros();
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![4, 0]);
    assert_eq!(list.index(), Some(1));

    let mut zero = DigitList::from(vec![0]);
    zero.move_front();
    zero.trim_leading_zeros();
    assert!(zero.is_empty());
    assert_eq!(zero.index(), None);
}

#[test]
fn test_eq_ignores_cursor() {
    let a = DigitList::from(vec![1, 2]);
    let mut b = a.clone();
    b.move_back();
    assert_eq!(a, b);
    assert_eq!(b.iter_le().collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(format!("{}", b), "1 2");
}
