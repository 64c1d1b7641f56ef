use std::fmt;

/// Which operand of a binary operation was unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => f.write_str("A"),
            Operand::B => f.write_str("B"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Big Integer Error: calling {op}() on NULL Big Integer {operand} reference")]
    NullReference { op: &'static str, operand: Operand },
    #[error("List Error: calling {op}() with undefined cursor")]
    UndefinedCursor { op: &'static str },
    #[error("Big Integer Error: cannot parse `{0}`")]
    Parse(String),
}

/// [`Error`] or success.
pub type Result<T> = std::result::Result<T, Error>;
