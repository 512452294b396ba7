use crate::{Error, Result};
use core::{fmt, str::FromStr};
use std::borrow::Cow;

/// The default digit set: `0-9`, `A-Z`, `a-z` in ASCII order.
pub const BASE_62_DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// The default base-62 alphabet, usable without allocation.
pub const BASE_62: Digits = Digits {
    symbols: Cow::Borrowed(BASE_62_DIGITS),
    lookup: build_lookup(BASE_62_DIGITS.as_bytes()),
};

const NO_VALUE: u8 = u8::MAX;
const ASCII_LEN: usize = 128;

/// Reverse lookup table from ASCII byte to digit index.
///
/// Callers must pass strictly ascending ASCII; anything else is rejected by
/// [`Digits::new`] before this runs.
const fn build_lookup(symbols: &[u8]) -> [u8; ASCII_LEN] {
    let mut lut = [NO_VALUE; ASCII_LEN];
    let mut i = 0;
    while i < symbols.len() {
        lut[symbols[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

/// An ordered digit alphabet.
///
/// Index order equals byte order, which is what lets a key's numeric value and
/// its plain string ordering agree. Index `0` is the *zero digit*: no key may
/// end with it.
///
/// Only ASCII symbols are accepted, so byte, `char` and `str` ordering all
/// coincide.
///
/// # Example
/// ```
/// use fracdex::{Digits, BASE_62};
///
/// let decimal = Digits::new("0123456789").unwrap();
/// assert_eq!(decimal.base(), 10);
/// assert_eq!(decimal.index_of(b'7'), Some(7));
///
/// assert_eq!(BASE_62.zero(), b'0');
/// assert_eq!(BASE_62.max(), b'z');
/// assert!(Digits::new("ba").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digits {
    symbols: Cow<'static, str>,
    lookup: [u8; ASCII_LEN],
}

impl Digits {
    /// Builds an alphabet from its symbols, lowest first.
    ///
    /// # Errors
    ///
    /// - [`Error::AlphabetTooSmall`] if fewer than two symbols are given.
    /// - [`Error::InvalidAlphabet`] if a symbol is not strictly greater than
    ///   the one before it, or is not ASCII. The ASCII rule is stricter than
    ///   ordering alone requires.
    pub fn new(symbols: impl Into<Cow<'static, str>>) -> Result<Self> {
        let symbols = symbols.into();
        let bytes = symbols.as_bytes();
        if bytes.len() < 2 {
            return Err(Error::AlphabetTooSmall { len: bytes.len() });
        }
        for (index, &b) in bytes.iter().enumerate() {
            if !b.is_ascii() || (index > 0 && b <= bytes[index - 1]) {
                return Err(Error::InvalidAlphabet { index });
            }
        }
        let lookup = build_lookup(bytes);
        Ok(Self { symbols, lookup })
    }

    /// Number of symbols, i.e. the numeric base.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// The smallest symbol.
    pub fn zero(&self) -> u8 {
        self.symbols.as_bytes()[0]
    }

    /// The largest symbol.
    pub fn max(&self) -> u8 {
        self.symbols.as_bytes()[self.base() - 1]
    }

    /// Symbol for digit value `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.base()`.
    pub fn symbol(&self, index: usize) -> u8 {
        self.symbols.as_bytes()[index]
    }

    /// Digit value of `byte`, or `None` if it is not part of the alphabet.
    pub fn index_of(&self, byte: u8) -> Option<usize> {
        match self.lookup.get(byte as usize) {
            Some(&v) if v != NO_VALUE => Some(v as usize),
            _ => None,
        }
    }

    /// Returns `true` if `byte` belongs to the alphabet.
    pub fn contains(&self, byte: u8) -> bool {
        self.index_of(byte).is_some()
    }

    /// The symbols, lowest first.
    pub fn as_str(&self) -> &str {
        &self.symbols
    }
}

impl Default for Digits {
    fn default() -> Self {
        BASE_62
    }
}

impl FromStr for Digits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.to_owned())
    }
}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Digits").field(&self.symbols).finish()
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}
