//! Chainable lazy sequences and integer ranges.

pub mod error;
pub mod range;
pub mod sequence;

pub use error::{Error, Result};
pub use range::{
    range, range_from_to, range_from_to_by, range_to, range_with, Range, RangeIter,
    RangeOptions, RangeValue,
};
pub use sequence::{iterate, Sequence};
