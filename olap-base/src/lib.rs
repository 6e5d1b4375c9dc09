mod dense;
mod error;


pub use dense::{DenseBitSet, DenseBits};
pub use error::{err, Error, KeyError, Result};
