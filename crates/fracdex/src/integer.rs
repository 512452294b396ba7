//! The integer part of an order key.
//!
//! An integer part is a *head* character followed by a fixed number of digits.
//! The head encodes both sign and width:
//!
//! | head       | sign         | digits after head |
//! |------------|--------------|-------------------|
//! | `a..=z`    | non-negative | 1 (`a`) ..= 26 (`z`) |
//! | `A..=Z`    | negative     | 26 (`A`) ..= 1 (`Z`) |
//!
//! Since `'A'..='Z'` sorts before `'a'..='z'` and a wider positive integer
//! always has a later head, comparing two integer parts as strings agrees with
//! comparing the integers they encode.

use crate::{Digits, Error, Result};

/// The most digits any integer part can carry (heads `z` and `A`).
pub const MAX_INTEGER_DIGITS: usize = 26;

/// Returns the total length (head included) of an integer part starting with
/// `head`.
///
/// # Errors
///
/// Returns [`Error::InvalidHead`] if `head` is not an ASCII letter.
///
/// # Example
/// ```
/// use fracdex::integer_length;
///
/// assert_eq!(integer_length('a').unwrap(), 2);
/// assert_eq!(integer_length('z').unwrap(), 27);
/// assert_eq!(integer_length('Z').unwrap(), 2);
/// assert_eq!(integer_length('A').unwrap(), 27);
/// assert!(integer_length('0').is_err());
/// ```
pub fn integer_length(head: char) -> Result<usize> {
    match head {
        'a'..='z' => Ok(head as usize - 'a' as usize + 2),
        'A'..='Z' => Ok('Z' as usize - head as usize + 2),
        _ => Err(Error::InvalidHead { head }),
    }
}

/// Splits `key` into its integer part and the remaining fractional part.
///
/// Only the head and the length are checked here. Use
/// [`validate_order_key`] to check the digits as well.
///
/// # Errors
///
/// - [`Error::MalformedKey`] if the key is empty or shorter than its head
///   declares.
/// - [`Error::InvalidHead`] if the head is not an ASCII letter.
pub fn split_integer_part(key: &str) -> Result<(&str, &str)> {
    let head = key.chars().next().ok_or_else(|| malformed(key))?;
    let len = integer_length(head)?;
    key.split_at_checked(len).ok_or_else(|| malformed(key))
}

/// Checks that `int` is exactly one well-formed integer part.
///
/// # Errors
///
/// [`Error::MalformedKey`], [`Error::InvalidHead`] or [`Error::InvalidDigit`].
pub fn validate_integer(int: &str, digits: &Digits) -> Result<()> {
    let (int_part, rest) = split_integer_part(int)?;
    if !rest.is_empty() {
        return Err(malformed(int));
    }
    check_digits(int, &int_part[1..], digits)
}

/// Checks that `key` is a well-formed order key under `digits`.
///
/// # Errors
///
/// - [`Error::MalformedKey`] for empty or truncated keys, and for the reserved
///   minimum integer `A` followed by 26 zero digits, which has no key below
///   it.
/// - [`Error::InvalidHead`] / [`Error::InvalidDigit`] for foreign characters.
/// - [`Error::TrailingZero`] if the fractional part ends in the zero digit.
pub fn validate_order_key(key: &str, digits: &Digits) -> Result<()> {
    let (int, frac) = split_integer_part(key)?;
    check_digits(key, &int[1..], digits)?;
    check_digits(key, frac, digits)?;
    if frac.as_bytes().last() == Some(&digits.zero()) {
        return Err(Error::TrailingZero {
            key: key.to_owned(),
        });
    }
    if frac.is_empty() && is_min_integer(int, digits) {
        return Err(malformed(key));
    }
    Ok(())
}

/// Returns `true` if `int` is the smallest representable integer part.
pub(crate) fn is_min_integer(int: &str, digits: &Digits) -> bool {
    let bytes = int.as_bytes();
    bytes.len() == MAX_INTEGER_DIGITS + 1
        && bytes[0] == b'A'
        && bytes[1..].iter().all(|&b| b == digits.zero())
}

/// Reports the first character of `part` that is not in the alphabet.
pub(crate) fn check_digits(key: &str, part: &str, digits: &Digits) -> Result<()> {
    match part
        .chars()
        .find(|&c| !c.is_ascii() || !digits.contains(c as u8))
    {
        Some(digit) => Err(Error::InvalidDigit {
            key: key.to_owned(),
            digit,
        }),
        None => Ok(()),
    }
}

fn malformed(key: &str) -> Error {
    Error::MalformedKey {
        key: key.to_owned(),
    }
}

/// Returns the integer part one greater than `int`, or `None` if `int` is
/// already the largest representable integer.
///
/// # Errors
///
/// Returns an error if `int` is not a valid integer part.
///
/// # Example
/// ```
/// use fracdex::{increment_integer, BASE_62};
///
/// assert_eq!(increment_integer("a0", &BASE_62).unwrap().as_deref(), Some("a1"));
/// assert_eq!(increment_integer("az", &BASE_62).unwrap().as_deref(), Some("b00"));
/// assert_eq!(increment_integer("Zz", &BASE_62).unwrap().as_deref(), Some("a0"));
/// ```
pub fn increment_integer(int: &str, digits: &Digits) -> Result<Option<String>> {
    validate_integer(int, digits)?;
    let mut buf = IntegerBuf::parse(int, digits);
    let base = digits.base();

    let mut carry = true;
    for v in buf.values_mut().iter_mut().rev() {
        if usize::from(*v) + 1 == base {
            *v = 0;
        } else {
            *v += 1;
            carry = false;
            break;
        }
    }

    if carry {
        match buf.head {
            b'Z' => return Ok(Some(IntegerBuf::zero().encode(digits))),
            b'z' => return Ok(None),
            _ => {}
        }
        buf.head += 1;
        // Entering or moving through the positive band widens, moving towards
        // zero through the negative band narrows.
        if buf.head > b'a' {
            buf.push(0);
        } else {
            buf.pop();
        }
    }
    Ok(Some(buf.encode(digits)))
}

/// Returns the integer part one less than `int`, or `None` if `int` is
/// already the smallest representable integer.
///
/// # Errors
///
/// Returns an error if `int` is not a valid integer part.
///
/// # Example
/// ```
/// use fracdex::{decrement_integer, BASE_62};
///
/// assert_eq!(decrement_integer("a1", &BASE_62).unwrap().as_deref(), Some("a0"));
/// assert_eq!(decrement_integer("a0", &BASE_62).unwrap().as_deref(), Some("Zz"));
/// assert_eq!(decrement_integer("b00", &BASE_62).unwrap().as_deref(), Some("az"));
/// ```
pub fn decrement_integer(int: &str, digits: &Digits) -> Result<Option<String>> {
    validate_integer(int, digits)?;
    let mut buf = IntegerBuf::parse(int, digits);
    let max = digits.base() - 1;

    let mut borrow = true;
    for v in buf.values_mut().iter_mut().rev() {
        if *v == 0 {
            *v = max as u8;
        } else {
            *v -= 1;
            borrow = false;
            break;
        }
    }

    if borrow {
        match buf.head {
            b'a' => {
                let mut neg = IntegerBuf::zero();
                neg.head = b'Z';
                neg.values[0] = max as u8;
                return Ok(Some(neg.encode(digits)));
            }
            b'A' => return Ok(None),
            _ => {}
        }
        buf.head -= 1;
        if buf.head < b'Z' {
            buf.push(max as u8);
        } else {
            buf.pop();
        }
    }
    Ok(Some(buf.encode(digits)))
}

/// Fixed-capacity working copy of an integer part, digits held as values.
struct IntegerBuf {
    head: u8,
    len: usize,
    values: [u8; MAX_INTEGER_DIGITS],
}

impl IntegerBuf {
    /// The integer zero: head `a` and a single zero digit.
    fn zero() -> Self {
        Self {
            head: b'a',
            len: 1,
            values: [0; MAX_INTEGER_DIGITS],
        }
    }

    /// `int` must already have passed [`validate_integer`].
    fn parse(int: &str, digits: &Digits) -> Self {
        let bytes = int.as_bytes();
        let mut values = [0; MAX_INTEGER_DIGITS];
        for (slot, &b) in values.iter_mut().zip(&bytes[1..]) {
            *slot = digits.index_of(b).map_or(0, |v| v as u8);
        }
        Self {
            head: bytes[0],
            len: bytes.len() - 1,
            values,
        }
    }

    fn values_mut(&mut self) -> &mut [u8] {
        &mut self.values[..self.len]
    }

    fn push(&mut self, value: u8) {
        self.values[self.len] = value;
        self.len += 1;
    }

    fn pop(&mut self) {
        self.len -= 1;
    }

    fn encode(&self, digits: &Digits) -> String {
        let mut out = String::with_capacity(self.len + 1);
        out.push(char::from(self.head));
        out.extend(
            self.values[..self.len]
                .iter()
                .map(|&v| char::from(digits.symbol(usize::from(v)))),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BASE_62;

    fn inc(int: &str) -> Option<String> {
        increment_integer(int, &BASE_62).unwrap()
    }

    fn dec(int: &str) -> Option<String> {
        decrement_integer(int, &BASE_62).unwrap()
    }

    fn largest() -> String {
        format!("z{}", "z".repeat(MAX_INTEGER_DIGITS))
    }

    fn smallest() -> String {
        format!("A{}", "0".repeat(MAX_INTEGER_DIGITS))
    }

    #[test]
    fn integer_length_covers_both_bands() {
        for (i, head) in ('a'..='z').enumerate() {
            assert_eq!(integer_length(head).unwrap(), i + 2);
        }
        for (i, head) in ('A'..='Z').enumerate() {
            assert_eq!(integer_length(head).unwrap(), MAX_INTEGER_DIGITS + 1 - i);
        }
    }

    #[test]
    fn integer_length_rejects_non_letters() {
        for head in ['0', '9', '!', '~', 'é', ' '] {
            assert_eq!(integer_length(head), Err(Error::InvalidHead { head }));
        }
    }

    #[test]
    fn split_integer_part_separates_fraction() {
        assert_eq!(split_integer_part("a0").unwrap(), ("a0", ""));
        assert_eq!(split_integer_part("a0V").unwrap(), ("a0", "V"));
        assert_eq!(split_integer_part("b12xyz").unwrap(), ("b12", "xyz"));
        assert_eq!(split_integer_part("Zz1").unwrap(), ("Zz", "1"));
    }

    #[test]
    fn split_integer_part_rejects_short_keys() {
        assert_eq!(
            split_integer_part("b1"),
            Err(Error::MalformedKey { key: "b1".into() })
        );
        assert_eq!(
            split_integer_part(""),
            Err(Error::MalformedKey { key: "".into() })
        );
        assert_eq!(
            split_integer_part("?1"),
            Err(Error::InvalidHead { head: '?' })
        );
    }

    #[test]
    fn validate_order_key_accepts_well_formed_keys() {
        for key in ["a0", "a1", "Zz", "a0V", "b00", "zzzzzzzzzzzzzzzzzzzzzzzzzzz"] {
            validate_order_key(key, &BASE_62).unwrap();
        }
        validate_order_key(&format!("{}V", smallest()), &BASE_62).unwrap();
    }

    #[test]
    fn validate_order_key_rejects_bad_keys() {
        assert_eq!(
            validate_order_key("a", &BASE_62),
            Err(Error::MalformedKey { key: "a".into() })
        );
        assert_eq!(
            validate_order_key("a00", &BASE_62),
            Err(Error::TrailingZero { key: "a00".into() })
        );
        assert_eq!(
            validate_order_key("a0!", &BASE_62),
            Err(Error::InvalidDigit {
                key: "a0!".into(),
                digit: '!'
            })
        );
        assert_eq!(
            validate_order_key("a-1", &BASE_62),
            Err(Error::InvalidDigit {
                key: "a-1".into(),
                digit: '-'
            })
        );
        assert_eq!(
            validate_order_key(&smallest(), &BASE_62),
            Err(Error::MalformedKey { key: smallest() })
        );
    }

    #[test]
    fn validate_order_key_reports_non_ascii_digits() {
        assert_eq!(
            validate_order_key("a0é", &BASE_62),
            Err(Error::InvalidDigit {
                key: "a0é".into(),
                digit: 'é'
            })
        );
    }

    #[test]
    fn validate_integer_requires_exact_length() {
        validate_integer("a0", &BASE_62).unwrap();
        assert_eq!(
            validate_integer("a0V", &BASE_62),
            Err(Error::MalformedKey { key: "a0V".into() })
        );
    }

    #[test]
    fn increment_within_width() {
        assert_eq!(inc("a0").as_deref(), Some("a1"));
        assert_eq!(inc("a9").as_deref(), Some("aA"));
        assert_eq!(inc("b0z").as_deref(), Some("b10"));
        assert_eq!(inc("Z0").as_deref(), Some("Z1"));
    }

    #[test]
    fn increment_carries_into_next_head() {
        assert_eq!(inc("az").as_deref(), Some("b00"));
        assert_eq!(inc("bzz").as_deref(), Some("c000"));
        assert_eq!(inc("Zz").as_deref(), Some("a0"));
        assert_eq!(inc("Yzz").as_deref(), Some("Z0"));
    }

    #[test]
    fn increment_overflows_at_largest() {
        assert_eq!(inc(&largest()), None);
    }

    #[test]
    fn decrement_within_width() {
        assert_eq!(dec("a1").as_deref(), Some("a0"));
        assert_eq!(dec("b10").as_deref(), Some("b0z"));
        assert_eq!(dec("Z1").as_deref(), Some("Z0"));
    }

    #[test]
    fn decrement_borrows_into_previous_head() {
        assert_eq!(dec("a0").as_deref(), Some("Zz"));
        assert_eq!(dec("b00").as_deref(), Some("az"));
        assert_eq!(dec("Z0").as_deref(), Some("Yzz"));
    }

    #[test]
    fn decrement_overflows_at_smallest() {
        assert_eq!(dec(&smallest()), None);
    }

    #[test]
    fn increment_and_decrement_preserve_string_order() {
        let mut int = String::from("a0");
        for _ in 0..5000 {
            let next = inc(&int).unwrap();
            assert!(next > int, "{next} should sort after {int}");
            assert_eq!(dec(&next).as_deref(), Some(int.as_str()));
            int = next;
        }

        let mut int = String::from("a0");
        for _ in 0..5000 {
            let prev = dec(&int).unwrap();
            assert!(prev < int, "{prev} should sort before {int}");
            int = prev;
        }
    }

    #[test]
    fn increment_with_decimal_alphabet() {
        let decimal = Digits::new("0123456789").unwrap();
        assert_eq!(
            increment_integer("a9", &decimal).unwrap().as_deref(),
            Some("b00")
        );
        assert_eq!(
            decrement_integer("a0", &decimal).unwrap().as_deref(),
            Some("Z9")
        );
        assert_eq!(
            increment_integer("aA", &decimal),
            Err(Error::InvalidDigit {
                key: "aA".into(),
                digit: 'A'
            })
        );
    }
}
