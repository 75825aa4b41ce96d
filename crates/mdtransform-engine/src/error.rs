use thiserror::Error;

/// The one condition parsing reports instead of degrading silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line} is {length} bytes long, exceeding the limit of {limit}")]
    InputTooLarge {
        /// 1-based line number.
        line: usize,
        length: usize,
        limit: usize,
    },
}
