/// A result type defaulting to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `fracdex` can produce.
///
/// Every error is reported synchronously by the call that detected it. Nothing
/// is retried internally and no partial result is ever returned.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A lower bound was not strictly less than the upper bound.
    #[error("lower bound {low:?} is not less than upper bound {high:?}")]
    OrderViolation { low: String, high: String },

    /// A key (or fractional digit string) ends in the alphabet's zero digit.
    ///
    /// Dropping the trailing zero yields an equal-order, shorter key, so such
    /// input can only come from a corrupted or foreign source.
    #[error("key {key:?} ends in the zero digit")]
    TrailingZero { key: String },

    /// The first character of an integer part is neither in `a..=z` nor in
    /// `A..=Z`.
    #[error("invalid integer head {head:?}")]
    InvalidHead { head: char },

    /// A key is empty, shorter than its declared integer length, or is the
    /// reserved minimum integer with nothing after it.
    #[error("malformed order key {key:?}")]
    MalformedKey { key: String },

    /// A key contains a byte that is not part of the digit alphabet.
    #[error("invalid digit {digit:?} in key {key:?}")]
    InvalidDigit { key: String, digit: char },

    /// Integer increment or decrement ran off the end of the representable
    /// range with no bound to fall back on.
    #[error("keyspace exhausted")]
    KeyspaceExhausted,

    /// More keys were requested than can be held in memory.
    #[error("cannot allocate {count} keys")]
    TooManyKeys { count: usize },

    /// A digit alphabet is not strictly ascending ASCII at `index`.
    ///
    /// Restricting alphabets to ASCII goes beyond the two base construction
    /// rules (strictly increasing, at least two symbols): a non-ASCII symbol is
    /// reported here too, at the index of its first byte.
    #[error("alphabet is not strictly ascending ASCII at index {index}")]
    InvalidAlphabet { index: usize },

    /// A digit alphabet has fewer than two symbols.
    #[error("alphabet must contain at least 2 symbols, got {len}")]
    AlphabetTooSmall { len: usize },
}
