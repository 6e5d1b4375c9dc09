// Two tiers of error live here:
//
// 1. `Error`, a boxed error with a backtrace, which is what fallible code
//    outside the key types propagates. Every construction goes through
//    `Error::new` so there is one place to set a breakpoint or watch the
//    log for any error in the system.
// 2. `KeyError`, a plain copyable value describing a contract violation
//    against a bit key or cell key. Key operations sit in per-cell loops,
//    so they do not pay for a backtrace until someone converts the
//    `KeyError` into an `Error` with `?`.

use std::borrow::Cow;
use backtrace_error::DynBacktraceError;
use tracing::error;

#[cfg(test)]
use test_log::test;

#[derive(Debug)]
#[allow(dead_code)]
pub struct Error(DynBacktraceError);
pub type Result<T> = std::result::Result<T, Error>;

struct SimpleErr(Cow<'static, str>);
impl std::fmt::Debug for SimpleErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for SimpleErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for SimpleErr {}

impl<E: std::error::Error + Send + Sync + 'static> From<E> for Error {
    fn from(err: E) -> Error {
        Error::new(err)
    }
}

impl Error {
    pub fn new<E: std::error::Error + Send + Sync + 'static>(err: E) -> Error {
        error!(target: "olap", "{:?}", err);
        let dbe = DynBacktraceError::from(err);
        Error(dbe)
    }
}

pub fn err(msg: impl Into<Cow<'static, str>>) -> Error {
    let err = SimpleErr(msg.into());
    Error::new(err)
}

/// A violated contract on a bit key or cell key. These always indicate a
/// bug in the calling layer; nothing retries them.
///
/// Negative capacities and negative bit indices cannot be expressed (both
/// are `usize`), and the set of key representations is closed, so there
/// are no variants for those cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyError {
    /// A bit was set at or past the allocated capacity of a bit key.
    CapacityExceeded { pos: usize, capacity: usize },
    /// A bulk ordinal update did not match the arity of a cell key.
    LengthMismatch { expected: usize, actual: usize },
    /// An axis index was at or past the arity of a cell key.
    IndexOutOfBounds { index: usize, len: usize },
}

impl std::fmt::Display for KeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyError::CapacityExceeded { pos, capacity } => {
                write!(f, "bit {} exceeds key capacity of {} bits", pos, capacity)
            }
            KeyError::LengthMismatch { expected, actual } => {
                write!(f, "expected {} ordinals, got {}", expected, actual)
            }
            KeyError::IndexOutOfBounds { index, len } => {
                write!(f, "axis {} out of bounds for key of arity {}", index, len)
            }
        }
    }
}

impl std::error::Error for KeyError {}

#[test]
fn test_error() {
    let _err = err("test error");
}

#[test]
fn test_key_error_converts() {
    fn fails() -> Result<()> {
        let r: std::result::Result<(), KeyError> =
            Err(KeyError::IndexOutOfBounds { index: 3, len: 2 });
        r?;
        Ok(())
    }
    assert!(fails().is_err());
    assert_eq!(
        KeyError::CapacityExceeded { pos: 64, capacity: 64 }.to_string(),
        "bit 64 exceeds key capacity of 64 bits"
    );
}
