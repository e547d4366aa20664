use thiserror::Error;

pub mod fields;
pub mod matrix;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("matrix file is empty")]
    Empty,
    #[error("missing separator: no patient info marker line found")]
    MissingSeparator,
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
