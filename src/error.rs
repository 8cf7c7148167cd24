use core::fmt;

/// Errors reported by conversions, division and parsing.
///
/// The set is closed: callers can match on it exhaustively. A truncating
/// operation still deposits the correct low-order bits into its destination
/// before returning [`Error::ResultOutOfRange`], so the error is informative
/// rather than fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// Non-zero high-order bits did not fit the destination and were dropped.
    #[error("result out of range")]
    ResultOutOfRange,

    /// The divisor was zero.
    #[error("division by zero")]
    DivideByZero,

    /// The text contained a byte that is not a digit of the requested base
    /// (or contained no digits at all).
    #[error("invalid digit at position {position}")]
    InvalidDigit { position: usize },
}

/// The low-order bits of a value that did not fit into `T`.
///
/// Returned by [`to_native`](crate::to_native) and the `TryFrom` impls of the
/// fixed-width types. `low()` is the value modulo `2^bits(T)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Truncated<T> {
    low: T,
}

impl<T> Truncated<T> {
    pub(crate) fn new(low: T) -> Self {
        Truncated { low }
    }

    /// The surviving low-order bits.
    pub fn low(&self) -> &T {
        &self.low
    }

    /// Consumes the error, returning the surviving low-order bits.
    pub fn into_low(self) -> T {
        self.low
    }

    /// Always [`Error::ResultOutOfRange`].
    pub fn kind(&self) -> Error {
        Error::ResultOutOfRange
    }
}

impl<T: fmt::Debug> fmt::Debug for Truncated<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Truncated").field("low", &self.low).finish()
    }
}

impl<T> fmt::Display for Truncated<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&Error::ResultOutOfRange, f)
    }
}

impl<T: fmt::Debug> core::error::Error for Truncated<T> {}

impl<T> From<Truncated<T>> for Error {
    fn from(_: Truncated<T>) -> Error {
        Error::ResultOutOfRange
    }
}
